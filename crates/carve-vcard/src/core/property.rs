//! vCard property content lines.

use super::parameter::VcardParameter;

/// A single vCard content line: `NAME;PARAM=value:value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcardProperty {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<VcardParameter>,
    /// Property value, emitted verbatim.
    pub value: String,
}

impl VcardProperty {
    /// Creates a property with a bare value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    /// Creates a property with a single parameter.
    #[must_use]
    pub fn with_param(
        name: impl Into<String>,
        param: VcardParameter,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: vec![param],
            value: value.into(),
        }
    }

    /// Serializes to a content line, without line terminator.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut line = self.name.clone();

        for param in &self.params {
            line.push(';');
            line.push_str(&param.serialize());
        }

        line.push(':');
        line.push_str(&self.value);

        line
    }
}

/// Property names emitted by the encoder.
pub mod names {
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";

    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const TITLE: &str = "TITLE";
    pub const ORG: &str = "ORG";
    pub const NOTE: &str = "NOTE";
    pub const PHOTO: &str = "PHOTO";

    pub const EMAIL: &str = "EMAIL";
    pub const TEL: &str = "TEL";
    pub const URL: &str = "URL";
    pub const X_SOCIALPROFILE: &str = "X-SOCIALPROFILE";
}

/// TYPE parameter values emitted by the encoder.
pub mod types {
    pub const WORK: &str = "WORK";
    pub const CELL: &str = "CELL";
    pub const URI: &str = "URI";
}
