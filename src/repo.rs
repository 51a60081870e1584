//! Repository identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RelcheckError;

/// A release-feed repository reference, written `owner/repo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRef {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl RepoRef {
    /// Create a reference from its parts.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl FromStr for RepoRef {
    type Err = RelcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
                Ok(Self::new(owner, repo))
            }
            _ => Err(RelcheckError::InvalidRepoRef {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_and_repo() {
        let repo: RepoRef = "acme/widget".parse().unwrap();
        assert_eq!(repo.owner, "acme");
        assert_eq!(repo.repo, "widget");
    }

    #[test]
    fn rejects_missing_slash() {
        assert!("widget".parse::<RepoRef>().is_err());
    }

    #[test]
    fn rejects_empty_segments() {
        assert!("/widget".parse::<RepoRef>().is_err());
        assert!("acme/".parse::<RepoRef>().is_err());
        assert!("/".parse::<RepoRef>().is_err());
    }

    #[test]
    fn rejects_extra_segments() {
        assert!("acme/widget/extra".parse::<RepoRef>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let repo = RepoRef::new("acme", "widget");
        assert_eq!(repo.to_string(), "acme/widget");
        assert_eq!(repo.to_string().parse::<RepoRef>().unwrap(), repo);
    }
}
