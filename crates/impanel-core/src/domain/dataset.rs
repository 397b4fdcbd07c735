//! Dataset records as the explore endpoint returns them

use serde::{Deserialize, Serialize};

/// One author of a dataset
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DatasetAuthor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,
}

impl DatasetAuthor {
    /// Create an author with just a name
    pub fn new(name: String) -> Self {
        Self {
            name,
            affiliation: None,
            orcid: None,
        }
    }

    /// Builder method to add an affiliation
    pub fn with_affiliation(mut self, affiliation: String) -> Self {
        self.affiliation = Some(affiliation);
        self
    }

    /// Builder method to add an ORCID
    pub fn with_orcid(mut self, orcid: String) -> Self {
        self.orcid = Some(orcid);
        self
    }

    /// One-line display form: name, then affiliation and ORCID in
    /// parentheses when present.
    pub fn display_line(&self) -> String {
        let mut line = self.name.clone();
        if let Some(affiliation) = &self.affiliation {
            line.push_str(&format!(" ({})", affiliation));
        }
        if let Some(orcid) = &self.orcid {
            line.push_str(&format!(" ({})", orcid));
        }
        line
    }
}

/// A searchable dataset record.
///
/// Deserialized from the explore endpoint's response array and never
/// mutated client-side. `tags` and `description` may be absent on the
/// wire; everything else is required.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub id: i64,
    pub url: String,
    pub title: String,
    /// Display label of the publication type (e.g. "Journal Article")
    pub publication_type: String,
    /// Creation timestamp as the service sends it
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub authors: Vec<DatasetAuthor>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub total_size_in_human_format: String,
}

impl Dataset {
    /// Relative download route for this dataset
    pub fn download_path(&self) -> String {
        format!("/dataset/download/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_DATASET: &str = r#"{
        "id": 7,
        "url": "https://example.org/doi/10.1234/ds7",
        "title": "Traffic Counts 2023",
        "publication_type": "Report",
        "created_at": "2024-03-05 15:07:00",
        "description": "Hourly traffic counts from urban sensors",
        "authors": [
            {"name": "Ada Blake", "affiliation": "City Lab"},
            {"name": "Rui Chen", "orcid": "0000-0002-1825-0097"}
        ],
        "tags": ["traffic", "sensors"],
        "total_size_in_human_format": "12.5 MB"
    }"#;

    #[test]
    fn test_deserialize_dataset() {
        let dataset: Dataset = serde_json::from_str(SAMPLE_DATASET).unwrap();
        assert_eq!(dataset.id, 7);
        assert_eq!(dataset.title, "Traffic Counts 2023");
        assert_eq!(dataset.authors.len(), 2);
        assert_eq!(dataset.tags, vec!["traffic", "sensors"]);
    }

    #[test]
    fn test_absent_tags_and_description_tolerated() {
        let json = r#"{
            "id": 1,
            "url": "https://example.org/ds1",
            "title": "Minimal",
            "publication_type": "Other",
            "created_at": "2024-01-01 00:00:00",
            "authors": [],
            "total_size_in_human_format": "3 bytes"
        }"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert!(dataset.tags.is_empty());
        assert!(dataset.description.is_none());
    }

    #[test]
    fn test_download_path() {
        let dataset: Dataset = serde_json::from_str(SAMPLE_DATASET).unwrap();
        assert_eq!(dataset.download_path(), "/dataset/download/7");
    }

    #[test]
    fn test_author_display_line() {
        let plain = DatasetAuthor::new("Ada Blake".to_string());
        assert_eq!(plain.display_line(), "Ada Blake");

        let full = DatasetAuthor::new("Rui Chen".to_string())
            .with_affiliation("City Lab".to_string())
            .with_orcid("0000-0002-1825-0097".to_string());
        assert_eq!(
            full.display_line(),
            "Rui Chen (City Lab) (0000-0002-1825-0097)"
        );
    }
}
