//! Search criteria sent to the explore endpoint
//!
//! The endpoint takes a flat JSON object of string fields, one per
//! filter input. Every field is always present; empty filters are sent
//! as empty strings rather than omitted.

use serde::{Deserialize, Serialize};

/// Result ordering requested from the service
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sorting {
    /// Most recently created first (the default)
    #[default]
    Newest,
    /// Oldest first
    Oldest,
}

impl Sorting {
    /// Wire value for the sorting field
    pub fn as_str(&self) -> &'static str {
        match self {
            Sorting::Newest => "newest",
            Sorting::Oldest => "oldest",
        }
    }

    /// Parse a wire value back into a sorting
    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "newest" => Some(Sorting::Newest),
            "oldest" => Some(Sorting::Oldest),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sorting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flat request body for a search against the explore endpoint.
///
/// The service expects all twelve fields on every request. Defaults
/// are the initial state of an untouched filter panel: empty text
/// fields, type `"any"`, sorting `"newest"`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchCriteria {
    pub csrf_token: String,
    pub query: String,
    pub publication_type: String,
    pub sorting: String,
    pub description: String,
    pub authors: String,
    pub affiliation: String,
    pub orcid: String,
    pub csv_filename: String,
    pub csv_title: String,
    pub publication_doi: String,
    pub tags: String,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            csrf_token: String::new(),
            query: String::new(),
            publication_type: "any".to_string(),
            sorting: Sorting::Newest.as_str().to_string(),
            description: String::new(),
            authors: String::new(),
            affiliation: String::new(),
            orcid: String::new(),
            csv_filename: String::new(),
            csv_title: String::new(),
            publication_doi: String::new(),
            tags: String::new(),
        }
    }
}
