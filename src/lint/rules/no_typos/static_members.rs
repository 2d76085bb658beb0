//! Static configuration properties and lifecycle methods.

use swc_common::Span;
use swc_ecma_ast::*;

use super::canonical::CanonicalSet;
use super::classify::classify;
use crate::lint::diagnostic::NodeKind;

/// What a member typo was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberTypoKind {
    StaticProperty,
    LifecycleMethod,
}

impl MemberTypoKind {
    pub fn code(&self) -> &'static str {
        match self {
            MemberTypoKind::StaticProperty => "StaticPropertyTypo",
            MemberTypoKind::LifecycleMethod => "LifecycleMethodTypo",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            MemberTypoKind::StaticProperty => "Typo in static class property declaration",
            MemberTypoKind::LifecycleMethod => "Typo in component lifecycle method declaration",
        }
    }
}

/// A misspelled member of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberTypo {
    pub kind: MemberTypoKind,
    pub name: String,
    pub span: Span,
    pub node_kind: NodeKind,
}

/// The pieces of `Name.X = ...` or `Name.prototype.X = ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentTarget<'a> {
    pub owner: &'a Ident,
    pub property: &'a Ident,
}

impl<'a> AssignmentTarget<'a> {
    /// Split the left-hand side of a plain `=` assignment. Bracket access
    /// anywhere in the chain yields nothing.
    pub fn from_assign(assign: &'a AssignExpr) -> Option<Self> {
        if assign.op != AssignOp::Assign {
            return None;
        }
        let target = match &assign.left {
            PatOrExpr::Expr(expr) => expr.as_ref(),
            PatOrExpr::Pat(pat) => match pat.as_ref() {
                Pat::Expr(expr) => expr.as_ref(),
                _ => return None,
            },
        };
        let Expr::Member(member) = target else {
            return None;
        };
        Self::from_member(member)
    }

    pub fn from_member(member: &'a MemberExpr) -> Option<Self> {
        let MemberProp::Ident(property) = &member.prop else {
            return None;
        };
        match member.obj.as_ref() {
            Expr::Ident(owner) => Some(Self { owner, property }),
            Expr::Member(MemberExpr {
                obj,
                prop: MemberProp::Ident(prototype),
                ..
            }) if &*prototype.sym == "prototype" => match obj.as_ref() {
                Expr::Ident(owner) => Some(Self { owner, property }),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Checks member names of recognized components.
pub struct StaticMemberChecker<'a> {
    statics: &'a CanonicalSet,
    lifecycle: &'a CanonicalSet,
}

impl<'a> StaticMemberChecker<'a> {
    pub fn new(statics: &'a CanonicalSet, lifecycle: &'a CanonicalSet) -> Self {
        Self { statics, lifecycle }
    }

    /// Check one member of a component class body.
    pub fn check_class_member(&self, member: &ClassMember) -> Option<MemberTypo> {
        match member {
            ClassMember::ClassProp(field) if field.is_static => {
                let PropName::Ident(key) = &field.key else {
                    return None;
                };
                classify(&key.sym, self.statics)
                    .is_typo()
                    .then(|| MemberTypo {
                        kind: MemberTypoKind::StaticProperty,
                        name: key.sym.to_string(),
                        span: key.span,
                        node_kind: NodeKind::ClassProperty,
                    })
            }
            ClassMember::Method(method) => {
                let PropName::Ident(key) = &method.key else {
                    return None;
                };
                classify(&key.sym, self.lifecycle)
                    .is_typo()
                    .then(|| MemberTypo {
                        kind: MemberTypoKind::LifecycleMethod,
                        name: key.sym.to_string(),
                        span: method.span,
                        node_kind: NodeKind::MethodDefinition,
                    })
            }
            _ => None,
        }
    }

    /// Check the property of an assignment to a component.
    pub fn check_assignment(&self, target: &AssignmentTarget<'_>) -> Option<MemberTypo> {
        classify(&target.property.sym, self.statics)
            .is_typo()
            .then(|| MemberTypo {
                kind: MemberTypoKind::StaticProperty,
                name: target.property.sym.to_string(),
                span: target.property.span,
                node_kind: NodeKind::MemberExpression,
            })
    }
}
