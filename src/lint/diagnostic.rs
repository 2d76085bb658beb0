//! Lint diagnostic messages.
//!
//! This module provides the [`LintDiagnostic`] type for representing
//! issues found in a source file, with the source location and the kind of
//! syntax node the issue was found on.

use serde::Serialize;

use super::rule::{RuleId, Severity};
use super::span::Span;

/// The kind of syntax node a diagnostic points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    ClassProperty,
    MemberExpression,
    MethodDefinition,
    Identifier,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeKind::ClassProperty => "ClassProperty",
            NodeKind::MemberExpression => "MemberExpression",
            NodeKind::MethodDefinition => "MethodDefinition",
            NodeKind::Identifier => "Identifier",
        };
        write!(f, "{}", name)
    }
}

/// A diagnostic message produced by a lint rule.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Machine-readable message kind, e.g. `StaticPropertyTypo`.
    pub code: Option<String>,
    /// Optional source location.
    pub span: Option<Span>,
    /// Syntax node kind at the reported location.
    pub node_kind: Option<NodeKind>,
    /// Additional related locations.
    pub related: Vec<RelatedInfo>,
}

/// Additional information related to a diagnostic.
#[derive(Debug, Clone)]
pub struct RelatedInfo {
    /// Location of the related information.
    pub span: Span,
    /// Message explaining the relationship.
    pub message: String,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            code: None,
            span: None,
            node_kind: None,
            related: vec![],
        }
    }

    /// Add a source span to this diagnostic.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Tag the diagnostic with a message kind.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Record the kind of node the diagnostic points at.
    pub fn with_node_kind(mut self, kind: NodeKind) -> Self {
        self.node_kind = Some(kind);
        self
    }

    /// Add related information.
    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related.push(RelatedInfo {
            span,
            message: message.into(),
        });
        self
    }
}
