//! Profile and contact-link input records.
//!
//! These mirror the rows the surrounding application reads from its hosted
//! row store. The encoder treats them as read-only input; creation and
//! persistence live elsewhere.

use carve_core::error::{CoreError, CoreResult};
use serde::Deserialize;

/// The business-card record a profile page renders and exports.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    /// Display name. Always present.
    pub name: String,
    pub title: Option<String>,
    pub company: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    /// Unique URL slug, used to build the canonical profile URL.
    pub username: String,
}

impl Profile {
    /// Creates a profile, enforcing the non-empty `name` and `username`
    /// invariants. Optional fields start absent; use the `with_` builders.
    ///
    /// ## Errors
    /// Returns `CoreError::ValidationError` when `name` or `username` is
    /// empty or all whitespace.
    pub fn new(name: impl Into<String>, username: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        let username = username.into();

        if name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "profile name must not be empty".to_string(),
            ));
        }
        if username.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "profile username must not be empty".to_string(),
            ));
        }

        Ok(Self {
            name,
            title: None,
            company: None,
            bio: None,
            avatar_url: None,
            username,
        })
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    #[must_use]
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }
}

/// Kind of contact link attached to a profile.
///
/// Closed enumeration; strings the store does not recognize deserialize to
/// [`LinkKind::Other`], which carries its URL through only when it is an
/// absolute http(s) URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Email,
    Phone,
    Whatsapp,
    Website,
    Linkedin,
    Twitter,
    Instagram,
    Facebook,
    Other,
}

impl LinkKind {
    /// Maps a store `type` string to a kind. Anything unrecognized is
    /// `Other`; the string comparison happens only here, everything past
    /// this boundary matches exhaustively on the enum.
    #[must_use]
    pub fn from_kind_str(s: &str) -> Self {
        match s {
            "email" => Self::Email,
            "phone" => Self::Phone,
            "whatsapp" => Self::Whatsapp,
            "website" => Self::Website,
            "linkedin" => Self::Linkedin,
            "twitter" => Self::Twitter,
            "instagram" => Self::Instagram,
            "facebook" => Self::Facebook,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Whatsapp => "whatsapp",
            Self::Website => "website",
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for LinkKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_kind_str(&s))
    }
}

/// One contact link row, ordered within its profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileLink {
    /// Link kind; the store column is named `type`.
    #[serde(rename = "type")]
    pub kind: LinkKind,
    /// URL shape depends on `kind`: `mailto:` for email, `tel:` for phone,
    /// `https://wa.me/<digits>` for whatsapp, an absolute URL otherwise.
    pub url: String,
    /// Display and encoding position, ascending.
    #[serde(default)]
    pub order: i32,
}

impl ProfileLink {
    #[must_use]
    pub fn new(kind: LinkKind, url: impl Into<String>, order: i32) -> Self {
        Self {
            kind,
            url: url.into(),
            order,
        }
    }
}

/// Sorts links by their `order` column, ascending and stable, so ties keep
/// their original collection order.
///
/// The encoder preserves whatever order it is handed; callers sort before
/// encoding.
pub fn sort_links(links: &mut [ProfileLink]) {
    links.sort_by_key(|link| link.order);
}
