use serde::{Deserialize, Serialize};

use crate::RepositoryPath;

/// A pull request number within a repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PullRequestHandle {
    repository: RepositoryPath,
    number: u64,
}

impl PullRequestHandle {
    pub fn new(repository: RepositoryPath, number: u64) -> Self {
        Self { repository, number }
    }

    pub fn repository_path(&self) -> &RepositoryPath {
        &self.repository
    }

    pub fn number(&self) -> u64 {
        self.number
    }
}

impl From<(&str, &str, u64)> for PullRequestHandle {
    fn from((owner, name, number): (&str, &str, u64)) -> Self {
        Self::new((owner, name).into(), number)
    }
}

impl std::fmt::Display for PullRequestHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.repository, self.number)
    }
}
