//! vCard 3.0 document assembly.
//!
//! Emission order is fixed: identification properties, optional
//! descriptive properties, classified links in caller order, the canonical
//! profile URL, then the closing line. Lines are joined with CRLF and the
//! document ends with the bytes `END:VCARD`.

pub mod escape;

use carve_core::constants::VCARD_CONTENT_TYPE;
use carve_core::util::filename::vcf_filename;

use crate::classify::classify;
use crate::core::property::{names, types};
use crate::core::{StructuredName, VcardParameter, VcardProperty};
use crate::profile::{Profile, ProfileLink};

/// vCard version emitted by the encoder.
const VCARD_VERSION: &str = "3.0";

/// Encodes a profile and its ordered links as a vCard 3.0 document.
///
/// Pure and infallible: absent optional fields are omitted and
/// unrepresentable links are skipped. The caller supplies `links` already
/// sorted (see [`crate::profile::sort_links`]); the encoder performs no
/// sorting of its own. `base_url` is the configured public origin, without
/// trailing slash.
#[must_use]
pub fn encode(profile: &Profile, links: &[ProfileLink], base_url: &str) -> String {
    let mut props: Vec<VcardProperty> = Vec::with_capacity(links.len() + 10);

    props.push(VcardProperty::text(names::BEGIN, "VCARD"));
    props.push(VcardProperty::text(names::VERSION, VCARD_VERSION));
    props.push(VcardProperty::text(names::FN, profile.name.clone()));
    props.push(VcardProperty::text(
        names::N,
        StructuredName::from_display_name(&profile.name).component_value(),
    ));

    if let Some(title) = &profile.title {
        props.push(VcardProperty::text(names::TITLE, title.clone()));
    }
    if let Some(company) = &profile.company {
        props.push(VcardProperty::text(names::ORG, company.clone()));
    }
    if let Some(bio) = &profile.bio {
        props.push(VcardProperty::text(
            names::NOTE,
            escape::escape_note_text(bio),
        ));
    }
    if let Some(avatar_url) = &profile.avatar_url {
        props.push(VcardProperty::with_param(
            names::PHOTO,
            VcardParameter::type_param(types::URI),
            avatar_url.clone(),
        ));
    }

    for link in links {
        props.extend(classify(link));
    }

    props.push(VcardProperty::text(
        names::URL,
        format!("{base_url}/{}", profile.username),
    ));
    props.push(VcardProperty::text(names::END, "VCARD"));

    props
        .iter()
        .map(VcardProperty::serialize)
        .collect::<Vec<_>>()
        .join("\r\n")
}

/// A ready-to-download vCard export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcfExport {
    /// Sanitized download filename, e.g. `Jane_Smith.vcf`.
    pub filename: String,
    /// `text/vcard; charset=utf-8`.
    pub content_type: &'static str,
    /// The encoded document.
    pub body: String,
}

/// Encodes a profile and wraps the result with its download metadata.
///
/// The browser/OS download handoff itself lives with the caller; this
/// only bundles everything that handoff needs.
#[must_use]
pub fn export(profile: &Profile, links: &[ProfileLink], base_url: &str) -> VcfExport {
    VcfExport {
        filename: vcf_filename(&profile.name),
        content_type: VCARD_CONTENT_TYPE,
        body: encode(profile, links, base_url),
    }
}
