//! vCard 3.0 export core for Carve profile pages.
//!
//! This crate turns a profile record and its ordered contact links into a
//! downloadable vCard 3.0 document.
//!
//! ## Overview
//!
//! A profile page offers a "save contact" action; this crate produces the
//! `.vcf` payload for it. Encoding is pure and infallible: absent optional
//! fields are omitted and unrepresentable links are skipped, so a bad row
//! can never break a page render.
//!
//! ## Usage
//!
//! ```rust
//! use carve_vcard::build::encode;
//! use carve_vcard::profile::{LinkKind, Profile, ProfileLink};
//!
//! let profile = Profile::new("Jane Smith", "janesmith").unwrap();
//! let links = vec![ProfileLink::new(
//!     LinkKind::Email,
//!     "mailto:jane@carve.app",
//!     0,
//! )];
//!
//! let doc = encode(&profile, &links, "https://carve.app");
//! assert!(doc.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\n"));
//! assert!(doc.contains("EMAIL;TYPE=WORK:jane@carve.app"));
//! assert!(doc.ends_with("END:VCARD"));
//! ```
//!
//! ## Submodules
//!
//! - [`profile`] - Input records (`Profile`, `ProfileLink`, `LinkKind`)
//! - [`core`] - Content-line types (`VcardProperty`, `VcardParameter`, `StructuredName`)
//! - [`classify`] - Per-kind mapping from a contact link to vCard lines
//! - [`build`] - Document assembly and download metadata

pub mod build;
pub mod classify;
pub mod core;
pub mod profile;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{VcfExport, encode, export};
pub use classify::classify;
pub use self::core::{StructuredName, VcardParameter, VcardProperty};
pub use profile::{LinkKind, Profile, ProfileLink, sort_links};
