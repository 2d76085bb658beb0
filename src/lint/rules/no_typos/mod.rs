//! Typo detection for component declarations.
//!
//! Flags misspelled static configuration properties (`proptypes`),
//! lifecycle methods (`ComponentDidMount`) and prop-type validators
//! (`PropTypes.Number`, `.isrequired`) in UI-component modules.
//!
//! The file is walked once, depth first. Components declared by extending
//! `Component` or by returning JSX are found up front; classes annotated
//! with `@extends X.Component` become components where they are declared.

pub mod canonical;
pub mod classify;
pub mod components;
pub mod prop_schema;
pub mod static_members;

use swc_common::{BytePos, Span};
use swc_ecma_ast::*;
use swc_ecma_visit::{Visit, VisitWith};
use tracing::debug;

use self::canonical::CanonicalSet;
use self::classify::classify;
use self::components::{extends_component, ComponentRegistry};
use self::prop_schema::SchemaChecker;
use self::static_members::{AssignmentTarget, MemberTypo, StaticMemberChecker};
use crate::config::NotyposConfig;
use crate::lint::diagnostic::NodeKind;
use crate::lint::source::SourceUnit;
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};

pub const RULE_ID: &str = "no-typos";

/// Detects likely typos in component declarations.
#[derive(Debug, Clone)]
pub struct NoTyposRule {
    severity: Severity,
    statics: CanonicalSet,
    schema: CanonicalSet,
    lifecycle: CanonicalSet,
    validators: CanonicalSet,
    qualifiers: CanonicalSet,
}

impl NoTyposRule {
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
            statics: CanonicalSet::static_properties(),
            schema: CanonicalSet::schema_properties(),
            lifecycle: CanonicalSet::lifecycle_methods(),
            validators: CanonicalSet::validators(),
            qualifiers: CanonicalSet::qualifiers(),
        }
    }

    /// Rule with the severity and extra spellings from `config`.
    pub fn from_config(config: &NotyposConfig) -> Self {
        let spellings = &config.spellings;
        let rule = Self::new();
        Self {
            severity: config.severity.unwrap_or(rule.severity),
            statics: rule.statics.with_extra(&spellings.static_properties),
            lifecycle: rule.lifecycle.with_extra(&spellings.lifecycle_methods),
            validators: rule.validators.with_extra(&spellings.prop_types),
            ..rule
        }
    }
}

impl Default for NoTyposRule {
    fn default() -> Self {
        Self::new()
    }
}

impl LintRule for NoTyposRule {
    fn id(&self) -> RuleId {
        RuleId::new(RULE_ID)
    }

    fn name(&self) -> &str {
        "No Typos"
    }

    fn description(&self) -> &str {
        "Detects misspelled component properties, lifecycle methods and prop types"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, unit: &SourceUnit) -> Vec<LintDiagnostic> {
        let mut traversal = Traversal {
            rule: self,
            unit,
            components: ComponentRegistry::prescan(&unit.program),
            diagnostics: Vec::new(),
        };
        unit.program.visit_with(&mut traversal);

        debug!(
            path = %unit.path().display(),
            components = traversal.components.len(),
            diagnostics = traversal.diagnostics.len(),
            "Checked for typos"
        );
        traversal.diagnostics
    }
}

struct Traversal<'a> {
    rule: &'a NoTyposRule,
    unit: &'a SourceUnit,
    components: ComponentRegistry,
    diagnostics: Vec<LintDiagnostic>,
}

impl<'a> Traversal<'a> {
    fn members(&self) -> StaticMemberChecker<'a> {
        StaticMemberChecker::new(&self.rule.statics, &self.rule.lifecycle)
    }

    fn holds_schema(&self, name: &str) -> bool {
        classify(name, &self.rule.schema).is_recognized()
    }

    fn check_assignment(&mut self, assign: &AssignExpr) {
        let Some(target) = AssignmentTarget::from_assign(assign) else {
            return;
        };
        if self.components.is_component(&target.owner.sym) {
            if let Some(typo) = self.members().check_assignment(&target) {
                self.report_member(typo);
            }
        }
        if self.holds_schema(&target.property.sym) {
            self.check_schema(&assign.right);
        }
    }

    /// Register, check and descend into a class. `outer` is the start of an
    /// enclosing `export` whose doc comment belongs to the class.
    fn check_class(&mut self, ident: Option<&Ident>, class: &Class, outer: Option<BytePos>) {
        let annotated = ident.is_some_and(|ident| {
            let doc = self
                .unit
                .doc_comment(class.span.lo)
                .or_else(|| outer.and_then(|pos| self.unit.doc_comment(pos)));
            self.components
                .register_annotated(ident, doc.as_deref(), class.span)
        });
        let is_component =
            annotated || class.super_class.as_deref().is_some_and(extends_component);

        if let Some(super_class) = &class.super_class {
            self.visit_expr(super_class);
        }
        for member in &class.body {
            if is_component {
                if let Some(typo) = self.members().check_class_member(member) {
                    self.report_member(typo);
                }
            }
            if let ClassMember::ClassProp(ClassProp {
                key: PropName::Ident(key),
                value: Some(value),
                is_static: true,
                ..
            }) = member
            {
                if self.holds_schema(&key.sym) {
                    self.check_schema(value);
                }
            }
            member.visit_with(self);
        }
    }

    fn check_schema(&mut self, value: &Expr) {
        let Expr::Object(schema) = value else {
            return;
        };
        let typos = SchemaChecker::new(&self.rule.validators, &self.rule.qualifiers).check(schema);
        for typo in typos {
            let mut diagnostic = self
                .diagnostic(typo.kind.message(&typo.name), typo.span, NodeKind::Identifier)
                .with_code(typo.kind.code());
            if let Some(entry) = typo.entry {
                diagnostic = diagnostic.with_related(
                    self.unit.span(entry),
                    format!("in schema entry `{}`", self.unit.snippet(entry)),
                );
            }
            self.diagnostics.push(diagnostic);
        }
    }

    fn report_member(&mut self, typo: MemberTypo) {
        let diagnostic = self
            .diagnostic(typo.kind.message(), typo.span, typo.node_kind)
            .with_code(typo.kind.code());
        self.diagnostics.push(diagnostic);
    }

    fn diagnostic(&self, message: impl Into<String>, span: Span, kind: NodeKind) -> LintDiagnostic {
        LintDiagnostic::new(self.rule.id(), self.rule.severity, message)
            .with_span(self.unit.span(span))
            .with_node_kind(kind)
    }
}

impl Visit for Traversal<'_> {
    fn visit_class_decl(&mut self, decl: &ClassDecl) {
        self.check_class(Some(&decl.ident), &decl.class, None);
    }

    fn visit_class_expr(&mut self, expr: &ClassExpr) {
        self.check_class(expr.ident.as_ref(), &expr.class, None);
    }

    fn visit_export_decl(&mut self, export: &ExportDecl) {
        match &export.decl {
            Decl::Class(decl) => {
                self.check_class(Some(&decl.ident), &decl.class, Some(export.span.lo))
            }
            _ => export.visit_children_with(self),
        }
    }

    fn visit_export_default_decl(&mut self, export: &ExportDefaultDecl) {
        match &export.decl {
            DefaultDecl::Class(expr) => {
                self.check_class(expr.ident.as_ref(), &expr.class, Some(export.span.lo))
            }
            _ => export.visit_children_with(self),
        }
    }

    fn visit_assign_expr(&mut self, assign: &AssignExpr) {
        self.check_assignment(assign);
        assign.visit_children_with(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpellingsConfig;

    fn check(src: &str) -> Vec<LintDiagnostic> {
        let unit = SourceUnit::parse("App.jsx", src).unwrap();
        NoTyposRule::new().check(&unit)
    }

    fn codes(src: &str) -> Vec<String> {
        check(src)
            .into_iter()
            .filter_map(|diag| diag.code)
            .collect()
    }

    #[test]
    fn rule_metadata() {
        let rule = NoTyposRule::new();
        assert_eq!(rule.id(), RuleId::new("no-typos"));
        assert_eq!(rule.default_severity(), Severity::Warning);
        assert!(!rule.description().is_empty());
    }

    #[test]
    fn clean_component_has_no_diagnostics() {
        let diagnostics = check(
            "class A extends React.Component {\n  static propTypes = { a: PropTypes.string.isRequired };\n  componentDidMount() {}\n  render() { return <div />; }\n}\nA.defaultProps = {};",
        );
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
    }

    #[test]
    fn non_components_are_ignored() {
        assert!(check("class A { static proptypes = {}; Render() {} }\nA.defaultprops = {};").is_empty());
    }

    #[test]
    fn static_field_typo() {
        let diagnostics = check("class A extends Component {\n  static proptypes = {};\n}");
        assert_eq!(diagnostics.len(), 1);
        let diag = &diagnostics[0];
        assert_eq!(diag.message, "Typo in static class property declaration");
        assert_eq!(diag.code.as_deref(), Some("StaticPropertyTypo"));
        assert_eq!(diag.node_kind, Some(NodeKind::ClassProperty));
        let span = diag.span.as_ref().unwrap();
        assert_eq!((span.start_line, span.start_col), (2, 10));
    }

    #[test]
    fn assignment_before_declaration_is_found() {
        let diagnostics = check("A.contexttypes = {};\nclass A extends Component {}");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].node_kind, Some(NodeKind::MemberExpression));
    }

    #[test]
    fn annotated_components_count_from_their_declaration() {
        let before = "A.proptypes = {};\n/** @extends React.Component */\nclass A extends Base {}";
        assert!(check(before).is_empty());

        let after = "/** @extends React.Component */\nclass A extends Base { Render() {} }\nA.proptypes = {};";
        assert_eq!(
            codes(after),
            ["LifecycleMethodTypo", "StaticPropertyTypo"]
        );
    }

    #[test]
    fn annotation_before_export_reaches_the_class() {
        let src = "/** @extends React.Component */\nexport default class A extends Base {\n  componentdidmount() {}\n}\n/** @augments Component */\nexport class B extends Base { static Proptypes = {}; }";
        assert_eq!(codes(src), ["LifecycleMethodTypo", "StaticPropertyTypo"]);
    }

    #[test]
    fn exported_components_are_checked() {
        assert_eq!(
            codes("import React from 'react';\nexport class A extends React.Component { Render() {} }\nexport default () => <A />;"),
            ["LifecycleMethodTypo"]
        );
    }

    #[test]
    fn prototype_assignment() {
        assert_eq!(
            codes("function A() { return <div />; }\nA.prototype.DEFAULTPROPS = {};"),
            ["StaticPropertyTypo"]
        );
    }

    #[test]
    fn schema_checked_on_any_owner() {
        let diagnostics = check("Anything.propTypes = { a: PropTypes.Number };");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Typo in declared prop type: Number");
        assert_eq!(diagnostics[0].node_kind, Some(NodeKind::Identifier));
    }

    #[test]
    fn typoed_schema_property_still_walks_the_schema() {
        assert_eq!(
            codes("class A extends Component {}\nA.PropTypes = { a: PropTypes.bools };\nA.proptypes = { b: PropTypes.Array };"),
            ["DeclaredPropTypeTypo", "StaticPropertyTypo", "DeclaredPropTypeTypo"]
        );
    }

    #[test]
    fn static_field_schema_follows_field_typo() {
        assert_eq!(
            codes("class A extends Component {\n  static childcontexttypes = { a: PropTypes.Strings };\n}"),
            ["StaticPropertyTypo", "DeclaredPropTypeTypo"]
        );
    }

    #[test]
    fn nested_typo_has_related_entry() {
        let diagnostics =
            check("A.propTypes = {\n  outer: PropTypes.shape({ inner: PropTypes.Bool })\n};");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].related.len(), 1);
        assert_eq!(diagnostics[0].related[0].message, "in schema entry `outer`");
        assert_eq!(diagnostics[0].related[0].span.start_line, 2);
    }

    #[test]
    fn nested_components_inside_methods() {
        assert_eq!(
            codes("class A extends Component {\n  componentDidMount() { class B extends Component { Render() {} } }\n  ComponentWillUnmount() {}\n}"),
            ["LifecycleMethodTypo", "LifecycleMethodTypo"]
        );
    }

    #[test]
    fn configured_severity_and_spellings() {
        let config = NotyposConfig {
            severity: Some(Severity::Error),
            spellings: SpellingsConfig {
                lifecycle_methods: vec!["getSnapshotBeforeUpdate".to_string()],
                prop_types: vec!["elementType".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        let rule = NoTyposRule::from_config(&config);
        let unit = SourceUnit::parse(
            "App.jsx",
            "class A extends Component {\n  GetSnapshotBeforeUpdate() {}\n}\nA.propTypes = { a: PropTypes.elementType, b: PropTypes.ElementType };",
        )
        .unwrap();
        let diagnostics = rule.check(&unit);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.severity == Severity::Error));
        assert_eq!(diagnostics[1].message, "Typo in declared prop type: ElementType");
    }
}
