//! Structured name handling for the N property.

/// Structured name (N property components used by the encoder).
///
/// Only the family and given slots are populated; the additional-names,
/// prefix, and suffix slots always serialize empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family name (surname).
    pub family: String,
    /// Given name (first name).
    pub given: String,
}

impl StructuredName {
    /// Splits a display name into N components.
    ///
    /// Two or more whitespace-separated tokens: the first is the given
    /// name and the remainder, space-joined, is the family name. A single
    /// token goes into the given slot with an empty family name.
    #[must_use]
    pub fn from_display_name(name: &str) -> Self {
        let mut tokens = name.split_whitespace();

        match (tokens.next(), tokens.next()) {
            (Some(given), Some(family_first)) => {
                let mut family = family_first.to_string();
                for token in tokens {
                    family.push(' ');
                    family.push_str(token);
                }
                Self {
                    family,
                    given: given.to_string(),
                }
            }
            (Some(only), None) => Self {
                family: String::new(),
                given: only.to_string(),
            },
            _ => Self::default(),
        }
    }

    /// Serializes as the N property value: `<family>;<given>;;;`.
    #[must_use]
    pub fn component_value(&self) -> String {
        format!("{};{};;;", self.family, self.given)
    }
}
