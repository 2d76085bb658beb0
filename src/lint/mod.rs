//! Source analysis and linting.
//!
//! This module checks component modules through a pluggable rule-based
//! system.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual checks ([`LintRule`] trait), such as
//!   [`NoTyposRule`]
//! - **Registry** - Collection of all available rules ([`RuleRegistry`])
//! - **Engine** - Runs the registry over files ([`LintEngine`])
//! - **Diagnostics** - Issue reports with severity and location ([`LintDiagnostic`])
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use notypos::lint::{LintEngine, RuleRegistry, Severity};
//!
//! let engine = LintEngine::new(RuleRegistry::with_builtins());
//! let diagnostics = engine
//!     .check_source(
//!         Path::new("Hello.jsx"),
//!         "class Hello extends React.Component { static proptypes = {}; }",
//!     )
//!     .unwrap();
//!
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].severity, Severity::Warning);
//! ```

pub mod diagnostic;
pub mod engine;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod source;
pub mod span;

pub use diagnostic::{LintDiagnostic, NodeKind, RelatedInfo};
pub use engine::{LintEngine, LintReport};
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, SarifFormatter};
pub use registry::RuleRegistry;
pub use rule::{LintRule, RuleId, Severity};
pub use rules::NoTyposRule;
pub use source::SourceUnit;
pub use span::Span;
