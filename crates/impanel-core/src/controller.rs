//! Search panel controller
//!
//! Owns the filter panel, the search backend, and the last presented
//! results page, and maps every user gesture to at most one search.
//! Construction wires everything explicitly; there is no global state
//! to initialize.
//!
//! Searches carry a sequence number. A response is applied only when
//! its sequence is at least the last applied one, so a stale response
//! can never replace a newer page.

use crate::client::SearchBackend;
use crate::domain::Dataset;
use crate::error::PanelError;
use crate::panel::FilterPanel;
use crate::render::{results_page, ResultsPage};

/// Controller for one search panel instance
pub struct SearchPanelController<B: SearchBackend> {
    backend: B,
    csrf_token: String,
    panel: FilterPanel,
    page: Option<ResultsPage>,
    issued_seq: u64,
    applied_seq: u64,
}

impl<B: SearchBackend> SearchPanelController<B> {
    /// Construct an idle controller. No search is issued; `page()` is
    /// `None` until the first completed search.
    pub fn new(backend: B, csrf_token: impl Into<String>) -> Self {
        Self {
            backend,
            csrf_token: csrf_token.into(),
            panel: FilterPanel::new(),
            page: None,
            issued_seq: 0,
            applied_seq: 0,
        }
    }

    /// Snapshot the panel and run one search.
    ///
    /// On success the results page is replaced, subject to the
    /// sequence guard. On error the previous page is left untouched
    /// and the error is returned for the caller to log; an empty
    /// result is not an error, it is a page with zero cards.
    pub async fn refresh(&mut self) -> Result<(), PanelError> {
        let criteria = self.panel.criteria(&self.csrf_token);
        self.issued_seq += 1;
        let seq = self.issued_seq;

        let datasets = self.backend.search(&criteria).await?;
        self.apply_response(seq, &datasets);
        Ok(())
    }

    /// Apply one completed response. A response whose sequence is older
    /// than the newest applied one is stale and is dropped.
    fn apply_response(&mut self, seq: u64, datasets: &[Dataset]) {
        if seq < self.applied_seq {
            return;
        }
        self.applied_seq = seq;
        self.page = Some(results_page(datasets));
    }

    /// Run the page-load search.
    ///
    /// A present, non-blank query parameter pre-seeds the query field;
    /// exactly one search fires in either case.
    pub async fn initial_search(&mut self, query_param: Option<&str>) -> Result<(), PanelError> {
        if let Some(query) = query_param {
            if !query.trim().is_empty() {
                self.panel.query = query.to_string();
            }
        }
        self.refresh().await
    }

    /// Tag badge shortcut: make the tag the query and search once
    pub async fn apply_tag(&mut self, tag: &str) -> Result<(), PanelError> {
        self.panel.apply_tag(tag);
        self.refresh().await
    }

    /// Type badge shortcut. An unrecognized label leaves the type
    /// filter unchanged; the search still fires.
    pub async fn apply_publication_type(&mut self, label: &str) -> Result<(), PanelError> {
        self.panel.apply_publication_type_label(label);
        self.refresh().await
    }

    /// Reset every filter, hide the extra panel, search once
    pub async fn clear_filters(&mut self) -> Result<(), PanelError> {
        self.panel.clear_all();
        self.refresh().await
    }

    /// Reset the extra filters only, search once
    pub async fn clear_extra_filters(&mut self) -> Result<(), PanelError> {
        self.panel.clear_extra();
        self.refresh().await
    }

    /// Show the extra-filters section. Does not search.
    pub fn show_extra_filters(&mut self) {
        self.panel.show_extra();
    }

    /// Hide the extra-filters section. Does not search.
    pub fn hide_extra_filters(&mut self) {
        self.panel.hide_extra();
    }

    pub fn panel(&self) -> &FilterPanel {
        &self.panel
    }

    /// Mutable access for filter-field edits. Editing does not search;
    /// the front-end calls [`refresh`](Self::refresh) after the edit.
    pub fn panel_mut(&mut self) -> &mut FilterPanel {
        &mut self.panel
    }

    /// The last successfully presented page, `None` before the first
    /// completed search
    pub fn page(&self) -> Option<&ResultsPage> {
        self.page.as_ref()
    }

    /// True only after a completed search returned zero datasets
    pub fn not_found(&self) -> bool {
        self.page.as_ref().is_some_and(|p| p.is_empty())
    }
}
