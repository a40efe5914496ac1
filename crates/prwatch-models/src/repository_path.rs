use serde::{Deserialize, Serialize};

/// GitHub repository coordinates, displayed as `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryPath {
    owner: String,
    name: String,
}

impl RepositoryPath {
    pub fn new_from_components(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> String {
        self.to_string()
    }
}

impl From<(&str, &str)> for RepositoryPath {
    fn from((owner, name): (&str, &str)) -> Self {
        Self::new_from_components(owner, name)
    }
}

impl std::fmt::Display for RepositoryPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
