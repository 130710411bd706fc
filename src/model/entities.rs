use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

/// The owner of a GitHub repository.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    /// The GitHub identifier of the owner.
    id: u64,

    /// The login of the owner.
    username: String,

    /// The avatar of the owner.
    avatar_url: Url,
}

impl Owner {
    /// Creates a new `Owner` instance.
    pub fn new(id: u64, username: &str, avatar_url: Url) -> Self {
        Self {
            id,
            username: username.to_string(),
            avatar_url,
        }
    }

    /// Retrieves the owner identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Retrieves the owner login.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Retrieves the owner avatar URL.
    pub fn avatar_url(&self) -> &Url {
        &self.avatar_url
    }
}

/// Metadata of a GitHub repository.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// The GitHub identifier of the repository, stable across fetches.
    id: u64,

    /// The name of the repository.
    name: String,

    /// The owner of the repository.
    owner: Owner,

    /// The creation date of the repository.
    created_at: DateTime<Utc>,

    /// The web page of the repository.
    html_url: Url,
}

impl Repository {
    /// Creates a new `Repository` instance.
    pub fn new(
        id: u64,
        name: &str,
        owner: Owner,
        created_at: DateTime<Utc>,
        html_url: Url,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            owner,
            created_at,
            html_url,
        }
    }

    /// Retrieves the repository identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Retrieves the repository name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Retrieves the repository owner.
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Retrieves the creation date of the repository.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Retrieves the web page of the repository.
    pub fn html_url(&self) -> &Url {
        &self.html_url
    }

    /// Creates a dummy `Repository` instance for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(id: u64, name: &str) -> Self {
        use chrono::TimeZone;

        Self::new(
            id,
            name,
            Owner::new(
                id * 100,
                "octocat",
                Url::parse("https://avatars.githubusercontent.com/u/583231").unwrap(),
            ),
            Utc.with_ymd_and_hms(2023, 10, 10, 12, 0, 0).unwrap(),
            Url::parse(&format!("https://github.com/octocat/{name}")).unwrap(),
        )
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repository: {}, Owner: {}, Created: {}, Url: {}",
            self.name,
            self.owner.username,
            self.created_at.to_rfc3339(),
            self.html_url
        )
    }
}
