//! Filter panel state
//!
//! Holds the current value of every filter input and the visibility of
//! the extra-filters section. The panel is plain state; it never talks
//! to the network. [`SearchPanelController`](crate::controller) decides
//! when a change warrants a search.

use crate::criteria::{SearchCriteria, Sorting};
use crate::domain::PublicationType;

/// The collapsible extra-filters section.
///
/// All fields are free text and sent verbatim. `tags` is the free-text
/// tag filter, distinct from the tag badges on result cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtraFilters {
    pub description: String,
    pub authors: String,
    pub affiliation: String,
    pub orcid: String,
    pub csv_filename: String,
    pub csv_title: String,
    pub publication_doi: String,
    pub tags: String,
}

impl ExtraFilters {
    /// Reset every field to the empty string
    pub fn clear(&mut self) {
        *self = ExtraFilters::default();
    }

    /// True when every field is empty
    pub fn is_empty(&self) -> bool {
        *self == ExtraFilters::default()
    }
}

/// Current state of the search filter panel.
///
/// `publication_type` is `None` when the type select sits on "any";
/// sorting defaults to newest-first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterPanel {
    pub query: String,
    pub publication_type: Option<PublicationType>,
    pub sorting: Sorting,
    pub extra: ExtraFilters,
    extra_visible: bool,
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the extra-filters section is shown
    pub fn extra_visible(&self) -> bool {
        self.extra_visible
    }

    /// Show the extra-filters section. Does not search.
    pub fn show_extra(&mut self) {
        self.extra_visible = true;
    }

    /// Hide the extra-filters section. Does not search.
    pub fn hide_extra(&mut self) {
        self.extra_visible = false;
    }

    /// Reset the extra filters to empty. The caller re-searches.
    pub fn clear_extra(&mut self) {
        self.extra.clear();
    }

    /// Reset every filter to its default and hide the extra section.
    ///
    /// The caller issues exactly one search for the whole reset, not
    /// one per field.
    pub fn clear_all(&mut self) {
        *self = FilterPanel::default();
    }

    /// Set the query from a clicked tag badge. Badge text is trimmed.
    pub fn apply_tag(&mut self, tag: &str) {
        self.query = tag.trim().to_string();
    }

    /// Set the type filter from a clicked type badge.
    ///
    /// The badge shows a catalogue label; on a match the filter is set,
    /// on no match it is left unchanged. Returns whether a match was
    /// found. The caller re-searches in either case.
    pub fn apply_publication_type_label(&mut self, label: &str) -> bool {
        match PublicationType::from_label(label) {
            Some(t) => {
                self.publication_type = Some(t);
                true
            }
            None => false,
        }
    }

    /// Snapshot the panel into a request body.
    ///
    /// A `None` type filter maps to the wire value `"any"`. Text values
    /// pass through untrimmed; the service does its own normalization.
    pub fn criteria(&self, csrf_token: &str) -> SearchCriteria {
        SearchCriteria {
            csrf_token: csrf_token.to_string(),
            query: self.query.clone(),
            publication_type: self
                .publication_type
                .map(|t| t.value().to_string())
                .unwrap_or_else(|| "any".to_string()),
            sorting: self.sorting.as_str().to_string(),
            description: self.extra.description.clone(),
            authors: self.extra.authors.clone(),
            affiliation: self.extra.affiliation.clone(),
            orcid: self.extra.orcid.clone(),
            csv_filename: self.extra.csv_filename.clone(),
            csv_title: self.extra.csv_title.clone(),
            publication_doi: self.extra.publication_doi.clone(),
            tags: self.extra.tags.clone(),
        }
    }
}
