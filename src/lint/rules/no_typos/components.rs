//! Component recognition.
//!
//! Two registration strategies feed one lookup:
//!
//! - a pre-scan over the whole module, run before any checks, registers
//!   classes extending `Component`/`PureComponent` and functions returning
//!   JSX markup; its results do not depend on source order;
//! - classes whose doc comment carries `@extends X.Component` (or
//!   `@augments`) are registered only when the traversal reaches the
//!   declaration, so uses earlier in the file do not see them.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use swc_common::Span;
use swc_ecma_ast::*;
use swc_ecma_visit::{Visit, VisitWith};
use tracing::trace;

/// Base classes that make a class a component.
pub const COMPONENT_BASES: &[&str] = &["Component", "PureComponent"];

static ANNOTATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@(?:extends|augments)\s+\{?\s*(?:[\w$]+\.)*(?:Pure)?Component\b")
        .expect("ANNOTATION_REGEX must compile")
});

/// How a component was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMethod {
    DirectExtends,
    DocAnnotation,
    MarkupFunction,
}

impl std::fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectionMethod::DirectExtends => write!(f, "direct-extends"),
            DetectionMethod::DocAnnotation => write!(f, "doc-annotation"),
            DetectionMethod::MarkupFunction => write!(f, "markup-function"),
        }
    }
}

/// A declaration recognized as a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    pub name: String,
    pub method: DetectionMethod,
    pub span: Span,
}

/// Components known at the current point of a traversal.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    prescanned: HashMap<String, ComponentDescriptor>,
    annotated: HashMap<String, ComponentDescriptor>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every order-independent component in `program`.
    pub fn prescan(program: &Program) -> Self {
        let mut scan = Prescan::default();
        program.visit_with(&mut scan);
        trace!(count = scan.found.len(), "Pre-scanned components");
        Self {
            prescanned: scan.found,
            annotated: HashMap::new(),
        }
    }

    /// Register the class `name` if its doc comment annotates it as a
    /// component. Returns whether it was registered.
    pub fn register_annotated(&mut self, name: &Ident, doc: Option<&str>, span: Span) -> bool {
        if !doc.is_some_and(has_component_annotation) {
            return false;
        }
        trace!(name = %name.sym, "Registered doc-annotated component");
        self.annotated
            .entry(name.sym.to_string())
            .or_insert_with(|| ComponentDescriptor {
                name: name.sym.to_string(),
                method: DetectionMethod::DocAnnotation,
                span,
            });
        true
    }

    pub fn is_component(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.prescanned.get(name).or_else(|| self.annotated.get(name))
    }

    pub fn len(&self) -> usize {
        self.prescanned.len()
            + self
                .annotated
                .keys()
                .filter(|name| !self.prescanned.contains_key(*name))
                .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Whether a doc comment declares a component base class.
pub fn has_component_annotation(doc: &str) -> bool {
    ANNOTATION_REGEX.is_match(doc)
}

/// Whether a base-class expression names a component base: `Component`,
/// or a member chain ending in it such as `Inferno.Component`.
pub fn extends_component(super_class: &Expr) -> bool {
    let name: &str = match super_class {
        Expr::Ident(ident) => &ident.sym,
        Expr::Member(MemberExpr {
            prop: MemberProp::Ident(prop),
            ..
        }) => &prop.sym,
        Expr::Paren(paren) => return extends_component(&paren.expr),
        _ => return false,
    };
    COMPONENT_BASES.contains(&name)
}

/// Whether a function body returns JSX markup on some path.
pub fn returns_markup(body: &BlockStmt) -> bool {
    body.stmts.iter().any(stmt_returns_markup)
}

/// Whether an arrow function evaluates to JSX markup on some path.
pub fn arrow_returns_markup(arrow: &ArrowExpr) -> bool {
    match arrow.body.as_ref() {
        BlockStmtOrExpr::Expr(expr) => is_markup(expr),
        BlockStmtOrExpr::BlockStmt(block) => returns_markup(block),
    }
}

fn function_returns_markup(function: &Function) -> bool {
    function.body.as_ref().is_some_and(returns_markup)
}

fn stmt_returns_markup(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::Return(ReturnStmt { arg: Some(arg), .. }) => is_markup(arg),
        Stmt::Block(block) => returns_markup(block),
        Stmt::If(IfStmt { cons, alt, .. }) => {
            stmt_returns_markup(cons) || alt.as_deref().is_some_and(stmt_returns_markup)
        }
        Stmt::For(ForStmt { body, .. })
        | Stmt::ForIn(ForInStmt { body, .. })
        | Stmt::ForOf(ForOfStmt { body, .. })
        | Stmt::While(WhileStmt { body, .. })
        | Stmt::DoWhile(DoWhileStmt { body, .. })
        | Stmt::Labeled(LabeledStmt { body, .. }) => stmt_returns_markup(body),
        Stmt::Try(try_stmt) => {
            returns_markup(&try_stmt.block)
                || try_stmt
                    .handler
                    .as_ref()
                    .is_some_and(|handler| returns_markup(&handler.body))
                || try_stmt.finalizer.as_ref().is_some_and(returns_markup)
        }
        Stmt::Switch(switch) => switch
            .cases
            .iter()
            .any(|case| case.cons.iter().any(stmt_returns_markup)),
        _ => false,
    }
}

fn is_markup(expr: &Expr) -> bool {
    match expr {
        Expr::JSXElement(_) | Expr::JSXFragment(_) => true,
        Expr::Paren(paren) => is_markup(&paren.expr),
        Expr::Cond(cond) => is_markup(&cond.cons) || is_markup(&cond.alt),
        Expr::Bin(bin)
            if matches!(
                bin.op,
                BinaryOp::LogicalAnd | BinaryOp::LogicalOr | BinaryOp::NullishCoalescing
            ) =>
        {
            is_markup(&bin.left) || is_markup(&bin.right)
        }
        Expr::Seq(seq) => seq.exprs.last().is_some_and(|last| is_markup(last)),
        _ => false,
    }
}

#[derive(Default)]
struct Prescan {
    found: HashMap<String, ComponentDescriptor>,
}

impl Prescan {
    fn add(&mut self, ident: &Ident, method: DetectionMethod, span: Span) {
        self.found
            .entry(ident.sym.to_string())
            .or_insert_with(|| ComponentDescriptor {
                name: ident.sym.to_string(),
                method,
                span,
            });
    }

    fn add_class(&mut self, ident: &Ident, class: &Class) {
        if class.super_class.as_deref().is_some_and(extends_component) {
            self.add(ident, DetectionMethod::DirectExtends, class.span);
        }
    }

    fn add_function(&mut self, ident: &Ident, function: &Function) {
        if function_returns_markup(function) {
            self.add(ident, DetectionMethod::MarkupFunction, function.span);
        }
    }
}

impl Visit for Prescan {
    fn visit_class_decl(&mut self, decl: &ClassDecl) {
        self.add_class(&decl.ident, &decl.class);
        decl.visit_children_with(self);
    }

    fn visit_fn_decl(&mut self, decl: &FnDecl) {
        self.add_function(&decl.ident, &decl.function);
        decl.visit_children_with(self);
    }

    fn visit_export_default_decl(&mut self, export: &ExportDefaultDecl) {
        match &export.decl {
            DefaultDecl::Class(ClassExpr {
                ident: Some(ident),
                class,
            }) => self.add_class(ident, class),
            DefaultDecl::Fn(FnExpr {
                ident: Some(ident),
                function,
            }) => self.add_function(ident, function),
            _ => {}
        }
        export.visit_children_with(self);
    }

    fn visit_var_declarator(&mut self, declarator: &VarDeclarator) {
        if let (Pat::Ident(binding), Some(init)) = (&declarator.name, &declarator.init) {
            match init.as_ref() {
                Expr::Class(expr) => self.add_class(&binding.id, &expr.class),
                Expr::Fn(expr) => self.add_function(&binding.id, &expr.function),
                Expr::Arrow(arrow) => {
                    if arrow_returns_markup(arrow) {
                        self.add(&binding.id, DetectionMethod::MarkupFunction, arrow.span);
                    }
                }
                _ => {}
            }
        }
        declarator.visit_children_with(self);
    }
}
