pub mod source;
pub mod web;

pub use source::{PageSource, SourceError};
pub use web::{Fetcher, HttpSource};
