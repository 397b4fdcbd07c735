//! Structured presentation of search results
//!
//! Search responses are turned into a [`ResultsPage`] of plain strings
//! ready for display. No markup is assembled here; front-ends lay the
//! fields out themselves, which keeps server-supplied text inert.

use chrono::{DateTime, NaiveDateTime};

use crate::domain::Dataset;

/// Link text for a card's view link
pub const VIEW_LINK_TEXT: &str = "View dataset";

/// One dataset rendered for display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetCard {
    pub title: String,
    pub url: String,
    /// Display label of the publication type, as sent by the service
    pub type_badge: String,
    /// Formatted creation date
    pub created: String,
    /// Empty string when the dataset has no description
    pub description: String,
    /// One line per author: name, then affiliation and ORCID in parens
    pub author_lines: Vec<String>,
    /// Tag badges in response order
    pub tag_badges: Vec<String>,
    pub view_url: String,
    pub download_url: String,
    /// Human-readable total size, as sent by the service
    pub size: String,
    /// `Download (<size>)`
    pub download_label: String,
}

impl DatasetCard {
    fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            title: dataset.title.clone(),
            url: dataset.url.clone(),
            type_badge: dataset.publication_type.clone(),
            created: format_created_at(&dataset.created_at),
            description: dataset.description.clone().unwrap_or_default(),
            author_lines: dataset.authors.iter().map(|a| a.display_line()).collect(),
            tag_badges: dataset.tags.clone(),
            view_url: dataset.url.clone(),
            download_url: dataset.download_path(),
            size: dataset.total_size_in_human_format.clone(),
            download_label: format!("Download ({})", dataset.total_size_in_human_format),
        }
    }
}

/// A full results listing: the count line plus one card per dataset
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsPage {
    /// `"{n} dataset(s) found"`
    pub count_label: String,
    /// Cards in response order; empty means show the not-found placeholder
    pub cards: Vec<DatasetCard>,
}

impl ResultsPage {
    /// True when the response carried no datasets
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Build the presentation of a search response
pub fn results_page(datasets: &[Dataset]) -> ResultsPage {
    ResultsPage {
        count_label: count_label(datasets.len()),
        cards: datasets.iter().map(DatasetCard::from_dataset).collect(),
    }
}

/// The result-count line. Singular only for exactly one result.
pub fn count_label(count: usize) -> String {
    if count == 1 {
        format!("{} dataset found", count)
    } else {
        format!("{} datasets found", count)
    }
}

/// Format a creation timestamp for display.
///
/// Accepts RFC 3339, RFC 2822, or `YYYY-MM-DD HH:MM:SS`. Anything else
/// is shown verbatim rather than dropped.
pub fn format_created_at(raw: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"));

    match parsed {
        Ok(dt) => dt.format("%B %-d, %Y, %-I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}
