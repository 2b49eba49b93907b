use serde::{Deserialize, Serialize};

use super::de;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

impl From<&str> for Gender {
    fn from(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "man" | "men" | "gents" => Gender::Male,
            "female" | "f" | "woman" | "women" | "ladies" => Gender::Female,
            _ => Gender::Unknown,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A society member as held on the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    #[serde(alias = "memberId", alias = "member_id")]
    pub id: String,
    #[serde(alias = "displayName", alias = "display_name", alias = "fullName", default)]
    pub name: String,
    #[serde(deserialize_with = "de::label", default)]
    pub gender: Gender,
    // No index on file is not the same as a zero index
    #[serde(
        rename = "handicapIndex",
        alias = "handicap_index",
        alias = "handicap",
        alias = "hcp",
        deserialize_with = "de::opt_f64",
        default
    )]
    pub handicap_index: Option<f64>,
}

impl Member {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            gender: Gender::Unknown,
            handicap_index: None,
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_index(mut self, index: f64) -> Self {
        self.handicap_index = Some(index);
        self
    }

    /// Name for tables; falls back to the id when the roster has no name
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
