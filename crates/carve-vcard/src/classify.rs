//! Link classification: one contact link to zero or more vCard lines.

use crate::core::property::{names, types};
use crate::core::{VcardParameter, VcardProperty};
use crate::profile::{LinkKind, ProfileLink};

/// Converts one profile link into vCard properties.
///
/// Total over all inputs: a link that cannot be represented (a `WhatsApp`
/// URL without a `wa.me/<digits>` segment, an unrecognized kind whose URL
/// is not http) yields an empty vector rather than an error, so a bad row
/// never breaks an export.
#[must_use]
pub fn classify(link: &ProfileLink) -> Vec<VcardProperty> {
    match link.kind {
        LinkKind::Email => vec![VcardProperty::with_param(
            names::EMAIL,
            VcardParameter::type_param(types::WORK),
            strip_scheme(&link.url, "mailto:"),
        )],
        LinkKind::Phone => vec![VcardProperty::with_param(
            names::TEL,
            VcardParameter::type_param(types::CELL),
            strip_scheme(&link.url, "tel:"),
        )],
        LinkKind::Whatsapp => match wa_me_digits(&link.url) {
            Some(digits) => vec![VcardProperty::with_param(
                names::TEL,
                VcardParameter::type_param(types::CELL),
                format!("+{digits}"),
            )],
            None => {
                tracing::debug!(url = %link.url, "Skipping whatsapp link without wa.me digits");
                Vec::new()
            }
        },
        LinkKind::Website => vec![VcardProperty::text(names::URL, link.url.clone())],
        LinkKind::Linkedin | LinkKind::Twitter | LinkKind::Instagram | LinkKind::Facebook => {
            vec![VcardProperty::with_param(
                names::X_SOCIALPROFILE,
                VcardParameter::type_param(link.kind.as_str()),
                link.url.clone(),
            )]
        }
        LinkKind::Other => {
            if link.url.starts_with("http") {
                vec![VcardProperty::text(names::URL, link.url.clone())]
            } else {
                tracing::debug!(
                    url = %link.url,
                    kind = %link.kind,
                    "Skipping unrecognized link that is not an http URL"
                );
                Vec::new()
            }
        }
    }
}

/// Strips a literal scheme prefix, leaving the value untouched when the
/// prefix is absent.
fn strip_scheme(url: &str, scheme: &str) -> String {
    url.strip_prefix(scheme).unwrap_or(url).to_string()
}

/// Extracts the digit run following `wa.me/`,
/// e.g. `https://wa.me/15551234567` -> `15551234567`.
fn wa_me_digits(url: &str) -> Option<String> {
    let start = url.find("wa.me/")? + "wa.me/".len();
    let digits: String = url[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    (!digits.is_empty()).then_some(digits)
}
