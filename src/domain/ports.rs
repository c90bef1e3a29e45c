use crate::domain::model::Fixture;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Flat text cache holding the verbatim pdftotext output between runs.
pub trait Cache: Send + Sync {
    fn read_text(&self, path: &str) -> impl std::future::Future<Output = Result<String>> + Send;
    fn write_text(
        &self,
        path: &str,
        text: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Turns downloaded PDF bytes into the flat text the extractor reads.
/// The production implementation shells out to `pdftotext`.
pub trait PdfConverter: Send + Sync {
    fn to_text(&self, pdf: &[u8]) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn team(&self) -> &str;
    fn source_url(&self) -> &str;
    fn cache_path(&self) -> &str;
    fn update(&self) -> bool;
    fn discover(&self) -> bool;
    fn link_pattern(&self) -> &str;
    fn team_code_pattern(&self) -> &str;
    /// `None` disables the window.
    fn horizon_days(&self) -> Option<i64>;
    fn group_by_month(&self) -> bool;
    fn json_output(&self) -> bool;
}

/// The three stages of a schedule run: acquire raw text, turn it into
/// upcoming fixtures, render the report.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<String>;
    async fn transform(&self, text: String) -> Result<Vec<Fixture>>;
    async fn render(&self, fixtures: Vec<Fixture>) -> Result<String>;
}
