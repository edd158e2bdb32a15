//! vCard parameter types.

/// A property parameter, serialized as `NAME=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcardParameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter value, emitted verbatim (case is significant:
    /// `TYPE=WORK` vs `TYPE=linkedin`).
    pub value: String,
}

impl VcardParameter {
    /// Creates a new parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: value.into(),
        }
    }

    /// Creates a TYPE parameter.
    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::new("TYPE", value)
    }

    /// Serializes to the `NAME=value` form used inside a content line.
    #[must_use]
    pub fn serialize(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}
