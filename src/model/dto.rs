use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use log::debug;
use serde::Deserialize;
use url::Url;

use crate::parse_repository_date;

use super::{Owner, Repository};

/// Substituted for an owner avatar URL that cannot be parsed.
pub const AVATAR_PLACEHOLDER_URL: &str = "https://example.com/placeholder.png";

/// Substituted for a repository web page URL that cannot be parsed.
pub const HTML_PLACEHOLDER_URL: &str = "https://github.com";

static AVATAR_PLACEHOLDER: LazyLock<Url> = LazyLock::new(|| {
    Url::parse(AVATAR_PLACEHOLDER_URL).expect("avatar placeholder is a valid URL")
});

static HTML_PLACEHOLDER: LazyLock<Url> = LazyLock::new(|| {
    Url::parse(HTML_PLACEHOLDER_URL).expect("html placeholder is a valid URL")
});

/// A repository as returned by the `/repositories` REST endpoint.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDto {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) owner: OwnerDto,
    pub(crate) created_at: Option<String>,
    pub(crate) html_url: String,
}

/// The owner object nested in a [RepositoryDto].
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OwnerDto {
    pub(crate) id: u64,
    pub(crate) login: String,
    pub(crate) avatar_url: String,
}

fn parse_url_or(value: &str, placeholder: &Url) -> Url {
    Url::parse(value).unwrap_or_else(|e| {
        debug!("Invalid URL {value:?} ({e}), falling back to {placeholder}");
        placeholder.to_owned()
    })
}

impl OwnerDto {
    /// Converts the wire owner into a domain [Owner].
    pub fn into_domain(self) -> Owner {
        let avatar_url = parse_url_or(&self.avatar_url, &AVATAR_PLACEHOLDER);

        Owner::new(self.id, &self.login, avatar_url)
    }
}

impl RepositoryDto {
    /// Converts the wire repository into a domain [Repository].
    ///
    /// Never fails: a missing or malformed creation date falls back to `now`, and a
    /// malformed URL falls back to a fixed placeholder.
    pub fn into_domain(self, now: DateTime<Utc>) -> Repository {
        let created_at = match self.created_at.as_deref().and_then(parse_repository_date) {
            Some(created_at) => created_at,
            None => {
                debug!(
                    "Missing or invalid creation date {:?} for repository {}, falling back to {now}",
                    self.created_at, self.id
                );
                now
            }
        };
        let html_url = parse_url_or(&self.html_url, &HTML_PLACEHOLDER);

        Repository::new(
            self.id,
            &self.name,
            self.owner.into_domain(),
            created_at,
            html_url,
        )
    }

    /// Creates a dummy `RepositoryDto` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            owner: OwnerDto {
                id: 100,
                login: "Ahmed".to_string(),
                avatar_url: "https://avatar.com".to_string(),
            },
            created_at: Some("2023-10-10T12:00:00Z".to_string()),
            html_url: "https://github.com/test".to_string(),
        }
    }
}

impl From<RepositoryDto> for Repository {
    fn from(dto: RepositoryDto) -> Self {
        dto.into_domain(Utc::now())
    }
}
