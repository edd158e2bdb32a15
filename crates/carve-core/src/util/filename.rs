//! Download filename generation for vCard exports.
//!
//! ## Summary
//! Builds filesystem-safe `.vcf` filenames from profile display names so
//! the browser download dialog shows something sensible on every platform.

use crate::constants::VCF_FILE_EXTENSION;

/// Builds a `.vcf` download filename from a profile display name.
///
/// Whitespace runs are replaced with a single underscore and leading or
/// trailing whitespace is dropped. An empty or all-whitespace name falls
/// back to `contact`.
///
/// Examples:
/// - "John Doe" -> "John_Doe.vcf"
/// - "  Ada   Lovelace " -> "Ada_Lovelace.vcf"
#[must_use]
pub fn vcf_filename(name: &str) -> String {
    let stem = name.split_whitespace().collect::<Vec<_>>().join("_");

    if stem.is_empty() {
        format!("contact{VCF_FILE_EXTENSION}")
    } else {
        format!("{stem}{VCF_FILE_EXTENSION}")
    }
}
