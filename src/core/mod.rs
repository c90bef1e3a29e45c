pub mod engine;
pub mod extract;
pub mod fetch;
pub mod filter;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{Extraction, Fixture, ParseIssue, SkippedLine};
pub use crate::domain::ports::{Cache, ConfigProvider, PdfConverter, Pipeline};
pub use crate::utils::error::Result;
