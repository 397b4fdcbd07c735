//! Domain types returned by the explore endpoint

pub mod dataset;
pub mod publication_type;

pub use dataset::{Dataset, DatasetAuthor};
pub use publication_type::PublicationType;
