use crate::core::Pipeline;
use crate::utils::error::Result;

/// Runs the three pipeline stages in order and returns the rendered
/// report. The caller decides where the report goes (stdout or a file).
pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("fetching schedule text");
        let text = self.pipeline.fetch().await?;
        tracing::info!("fetched {} lines", text.lines().count());

        tracing::info!("extracting fixtures");
        let fixtures = self.pipeline.transform(text).await?;
        tracing::info!("{} upcoming fixtures", fixtures.len());

        tracing::info!("rendering report");
        self.pipeline.render(fixtures).await
    }
}
