//! Canonical name tables.
//!
//! Each table is a list of slots; a slot lists every accepted spelling of one
//! name. Configuration properties accept the legacy capitalized spelling as
//! well as the camel-cased one, listed in that order. Every other slot has a
//! single spelling.

/// Static configuration properties of a component.
pub const STATIC_PROPERTIES: &[&[&str]] = &[
    &["PropTypes", "propTypes"],
    &["ContextTypes", "contextTypes"],
    &["ChildContextTypes", "childContextTypes"],
    &["DefaultProps", "defaultProps"],
];

/// Configuration properties whose value is a prop-type schema.
pub const SCHEMA_PROPERTIES: &[&[&str]] = &[
    &["PropTypes", "propTypes"],
    &["ContextTypes", "contextTypes"],
    &["ChildContextTypes", "childContextTypes"],
];

pub const LIFECYCLE_METHODS: &[&[&str]] = &[
    &["componentWillMount"],
    &["componentDidMount"],
    &["componentWillReceiveProps"],
    &["shouldComponentUpdate"],
    &["componentWillUpdate"],
    &["componentDidUpdate"],
    &["componentWillUnmount"],
    &["render"],
];

pub const VALIDATORS: &[&[&str]] = &[
    &["array"],
    &["bool"],
    &["func"],
    &["number"],
    &["object"],
    &["string"],
    &["symbol"],
    &["node"],
    &["element"],
    &["instanceOf"],
    &["oneOf"],
    &["oneOfType"],
    &["arrayOf"],
    &["objectOf"],
    &["shape"],
    &["exact"],
    &["any"],
];

pub const QUALIFIERS: &[&[&str]] = &[&["isRequired"]];

/// Spelled-out forms of abbreviated validator names.
pub const LONG_FORMS: &[(&str, &str)] = &[("function", "func"), ("boolean", "bool")];

/// A set of slots, each holding the accepted spellings of one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalSet {
    slots: Vec<Vec<String>>,
    fold_inflections: bool,
}

impl CanonicalSet {
    pub fn from_table(table: &[&[&str]]) -> Self {
        Self {
            slots: table
                .iter()
                .map(|slot| slot.iter().map(|s| s.to_string()).collect())
                .collect(),
            fold_inflections: false,
        }
    }

    pub fn static_properties() -> Self {
        Self::from_table(STATIC_PROPERTIES)
    }

    pub fn schema_properties() -> Self {
        Self::from_table(SCHEMA_PROPERTIES)
    }

    pub fn lifecycle_methods() -> Self {
        Self::from_table(LIFECYCLE_METHODS)
    }

    /// Validator names; plural and spelled-out forms count as typos here.
    pub fn validators() -> Self {
        Self {
            fold_inflections: true,
            ..Self::from_table(VALIDATORS)
        }
    }

    pub fn qualifiers() -> Self {
        Self::from_table(QUALIFIERS)
    }

    /// Add single-spelling slots for `names`, skipping names already present.
    pub fn with_extra<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        for name in names {
            let name = name.as_ref();
            if !self.slots.iter().flatten().any(|s| s == name) {
                self.slots.push(vec![name.to_string()]);
            }
        }
        self
    }

    pub fn slots(&self) -> impl Iterator<Item = &[String]> {
        self.slots.iter().map(|slot| slot.as_slice())
    }

    pub fn folds_inflections(&self) -> bool {
        self.fold_inflections
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
