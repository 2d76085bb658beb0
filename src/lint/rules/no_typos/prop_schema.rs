//! Prop-type schema validation.
//!
//! A schema is an object literal mapping prop names to validator
//! expressions such as `PropTypes.string.isRequired` or
//! `PropTypes.shape({ ... })`. Values are walked depth first, left to
//! right; typos in nested schemas remember the top-level entry they sit in.

use swc_common::{Span, Spanned};
use swc_ecma_ast::*;

use super::canonical::CanonicalSet;
use super::classify::{classify, Match};

/// What a schema typo was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaTypoKind {
    /// A validator name, e.g. `PropTypes.Number`.
    DeclaredPropType,
    /// A chain qualifier, e.g. `.isrequired`.
    ChainQualifier,
}

impl SchemaTypoKind {
    pub fn code(&self) -> &'static str {
        match self {
            SchemaTypoKind::DeclaredPropType => "DeclaredPropTypeTypo",
            SchemaTypoKind::ChainQualifier => "ChainQualifierTypo",
        }
    }

    pub fn message(&self, name: &str) -> String {
        match self {
            SchemaTypoKind::DeclaredPropType => format!("Typo in declared prop type: {}", name),
            SchemaTypoKind::ChainQualifier => {
                format!("Typo in prop type chain qualifier: {}", name)
            }
        }
    }
}

/// A typo found inside a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaTypo {
    pub kind: SchemaTypoKind,
    pub name: String,
    pub span: Span,
    /// Key of the top-level schema entry, for typos below the first level.
    pub entry: Option<Span>,
}

/// Walks schema object literals and collects typos.
pub struct SchemaChecker<'a> {
    validators: &'a CanonicalSet,
    qualifiers: &'a CanonicalSet,
    found: Vec<SchemaTypo>,
}

impl<'a> SchemaChecker<'a> {
    pub fn new(validators: &'a CanonicalSet, qualifiers: &'a CanonicalSet) -> Self {
        Self {
            validators,
            qualifiers,
            found: Vec::new(),
        }
    }

    /// Check every entry of `schema`, returning the typos in source order.
    pub fn check(mut self, schema: &ObjectLit) -> Vec<SchemaTypo> {
        self.check_object(schema, None);
        self.found
    }

    fn check_object(&mut self, object: &ObjectLit, entry: Option<Span>) {
        for prop in &object.props {
            if let PropOrSpread::Prop(prop) = prop {
                if let Prop::KeyValue(KeyValueProp { key, value }) = prop.as_ref() {
                    let anchor = entry.unwrap_or_else(|| key.span());
                    self.check_value(value, entry, anchor);
                }
            }
        }
    }

    /// `entry` is what typos found directly in `value` are attached to;
    /// `anchor` is what anything nested below it gets.
    fn check_value(&mut self, value: &Expr, entry: Option<Span>, anchor: Span) {
        match value {
            Expr::Member(member) => self.check_chain(member, entry, anchor),
            Expr::Call(call) => self.check_call(call, entry, anchor),
            Expr::Paren(paren) => self.check_value(&paren.expr, entry, anchor),
            Expr::Ident(ident) => {
                if classify(&ident.sym, self.validators).is_typo() {
                    self.report(SchemaTypoKind::DeclaredPropType, ident, entry);
                }
            }
            _ => {}
        }
    }

    fn check_chain(&mut self, member: &MemberExpr, entry: Option<Span>, anchor: Span) {
        let MemberProp::Ident(last) = &member.prop else {
            return;
        };
        match member.obj.as_ref() {
            // `A.B.C`
            Expr::Member(inner) => {
                if classify(&last.sym, self.qualifiers).is_recognized() {
                    if let MemberProp::Ident(validator) = &inner.prop {
                        self.check_validator(validator, entry);
                    }
                    self.check_qualifier(last, entry);
                } else {
                    self.check_validator(last, entry);
                }
            }
            // `A.B`
            Expr::Ident(object) => {
                if &*last.sym == "isRequired" {
                    if classify(&object.sym, self.validators).is_typo() {
                        self.report(SchemaTypoKind::DeclaredPropType, object, entry);
                    }
                } else {
                    self.check_validator(last, entry);
                }
            }
            // `call(...).Q`
            Expr::Call(call) => {
                self.check_qualifier(last, entry);
                self.check_call(call, entry, anchor);
            }
            _ => {}
        }
    }

    fn check_call(&mut self, call: &CallExpr, entry: Option<Span>, anchor: Span) {
        let Callee::Expr(callee) = &call.callee else {
            return;
        };
        let callee = match callee.as_ref() {
            Expr::Ident(ident) => ident,
            Expr::Member(MemberExpr {
                prop: MemberProp::Ident(ident),
                ..
            }) => ident,
            _ => return,
        };
        let canonical = match classify(&callee.sym, self.validators) {
            Match::Exact => &*callee.sym,
            Match::Typo(name) => {
                self.report(SchemaTypoKind::DeclaredPropType, callee, entry);
                name
            }
            Match::Unrelated => return,
        };

        let Some(first) = call.args.first().filter(|arg| arg.spread.is_none()) else {
            return;
        };
        let nested = Some(anchor);
        match canonical {
            "shape" | "exact" => {
                if let Expr::Object(object) = first.expr.as_ref() {
                    self.check_object(object, nested);
                }
            }
            "oneOfType" | "oneOf" => {
                if let Expr::Array(array) = first.expr.as_ref() {
                    for element in array.elems.iter().flatten() {
                        if element.spread.is_none() {
                            self.check_value(&element.expr, nested, anchor);
                        }
                    }
                }
            }
            "arrayOf" | "objectOf" => self.check_value(&first.expr, nested, anchor),
            _ => {}
        }
    }

    /// A name in validator position. A near-miss of a qualifier there is
    /// reported as a declared prop type too.
    fn check_validator(&mut self, ident: &Ident, entry: Option<Span>) {
        if classify(&ident.sym, self.validators).is_typo()
            || classify(&ident.sym, self.qualifiers).is_typo()
        {
            self.report(SchemaTypoKind::DeclaredPropType, ident, entry);
        }
    }

    fn check_qualifier(&mut self, ident: &Ident, entry: Option<Span>) {
        if classify(&ident.sym, self.qualifiers).is_typo() {
            self.report(SchemaTypoKind::ChainQualifier, ident, entry);
        }
    }

    fn report(&mut self, kind: SchemaTypoKind, ident: &Ident, entry: Option<Span>) {
        self.found.push(SchemaTypo {
            kind,
            name: ident.sym.to_string(),
            span: ident.span,
            entry,
        });
    }
}
