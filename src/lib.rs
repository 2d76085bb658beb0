//! notypos - Catch misspelled declarations in UI-component modules.
//!
//! notypos parses JavaScript + JSX source and reports near-miss spellings of
//! the names a component framework relies on: static configuration
//! properties (`propTypes`, `defaultProps`), lifecycle methods
//! (`componentDidMount`) and prop-type validators (`PropTypes.bool`).
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and schema generation
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Rules, engine, diagnostics and output formats
//! - [`sources`] - Source file discovery
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use notypos::lint::LintEngine;
//! use notypos::config::NotyposConfig;
//!
//! let engine = LintEngine::from_config(&NotyposConfig::default());
//! let source = r#"
//! class Greeting extends React.Component {
//!   componentDidMount() {}
//!   componentdidupdate() {}
//!   render() { return <h1>Hello</h1>; }
//! }
//! "#;
//!
//! let diagnostics = engine.check_source(Path::new("Greeting.jsx"), source).unwrap();
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(
//!     diagnostics[0].message,
//!     "Typo in component lifecycle method declaration"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod sources;
pub mod ui;

pub use error::{NotyposError, Result};
