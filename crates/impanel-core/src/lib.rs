//! impanel-core: dataset search panel for explore services
//!
//! This crate provides the client side of a dataset-exploration search
//! panel:
//!
//! - **Domain**: `Dataset` records as the explore endpoint returns them,
//!   plus the publication-type catalogue used by the type filter
//! - **Criteria**: the flat `SearchCriteria` payload POSTed on every
//!   filter change
//! - **Panel**: filter state with show/hide/clear semantics for the
//!   collapsible extra-filters section
//! - **Client**: `reqwest`-based explore client and the `SearchBackend`
//!   seam for swapping the transport in tests
//! - **Render**: structured result cards and count labels, ready for a
//!   front-end to draw
//! - **Controller**: `SearchPanelController`, the single owner of panel
//!   state, request dispatch, and the presented page
//!
//! The controller recomputes a criteria snapshot from current panel
//! state on every change, issues one request per change, and applies
//! responses in dispatch order. The front-end stays a thin adapter:
//! it edits panel fields and calls [`SearchPanelController::refresh`].

pub mod client;
pub mod config;
pub mod controller;
pub mod criteria;
pub mod domain;
pub mod error;
pub mod http;
pub mod panel;
pub mod render;

pub use client::{ExploreClient, SearchBackend, SearchError};
pub use config::{HttpConfig, PanelConfig};
pub use controller::SearchPanelController;
pub use criteria::{SearchCriteria, Sorting};
pub use domain::{Dataset, DatasetAuthor, PublicationType};
pub use error::{PanelError, Result};
pub use http::{HttpClient, HttpError, HttpResponse};
pub use panel::{ExtraFilters, FilterPanel};
pub use render::{format_created_at, results_page, DatasetCard, ResultsPage};
