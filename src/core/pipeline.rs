use crate::core::extract::{extract_fixtures, LinePatterns};
use crate::core::fetch::{self, PopplerConverter};
use crate::core::filter::upcoming;
use crate::core::render::{render_html, render_json, RenderOptions};
use crate::core::{Cache, ConfigProvider, Fixture, PdfConverter, Pipeline};
use crate::utils::error::Result;
use chrono::{Datelike, Local, NaiveDateTime};

pub struct SchedulePipeline<S: Cache, C: ConfigProvider, V: PdfConverter = PopplerConverter> {
    cache: S,
    config: C,
    converter: V,
    client: reqwest::Client,
    /// Reference moment for year inference and the future window; taken
    /// at construction, overridable for deterministic runs.
    now: NaiveDateTime,
}

impl<S: Cache, C: ConfigProvider> SchedulePipeline<S, C> {
    pub fn new(cache: S, config: C) -> Result<Self> {
        Self::with_converter(cache, config, PopplerConverter)
    }
}

impl<S: Cache, C: ConfigProvider, V: PdfConverter> SchedulePipeline<S, C, V> {
    pub fn with_converter(cache: S, config: C, converter: V) -> Result<Self> {
        Ok(Self {
            cache,
            config,
            converter,
            client: fetch::http_client()?,
            now: Local::now().naive_local(),
        })
    }

    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }
}

#[async_trait::async_trait]
impl<S: Cache, C: ConfigProvider, V: PdfConverter> Pipeline for SchedulePipeline<S, C, V> {
    /// Raw schedule text: the cache when not updating, otherwise a fresh
    /// download + conversion whose result overwrites the cache verbatim.
    async fn fetch(&self) -> Result<String> {
        if !self.config.update() {
            tracing::debug!("reading cached schedule from {}", self.config.cache_path());
            return self.cache.read_text(self.config.cache_path()).await;
        }

        let pdf_url = if self.config.discover() {
            fetch::discover_pdf_link(
                &self.client,
                self.config.source_url(),
                self.config.link_pattern(),
            )
            .await?
        } else {
            self.config.source_url().to_string()
        };

        let pdf = fetch::download(&self.client, &pdf_url).await?;
        let text = self.converter.to_text(&pdf).await?;

        self.cache
            .write_text(self.config.cache_path(), &text)
            .await?;
        tracing::info!("schedule cache updated: {}", self.config.cache_path());

        Ok(text)
    }

    /// Parse the schedule lines and keep the upcoming fixtures.
    async fn transform(&self, text: String) -> Result<Vec<Fixture>> {
        let patterns = LinePatterns::new(self.config.team(), self.config.team_code_pattern())?;

        let extraction = extract_fixtures(&text, &patterns, self.now.year());
        for skipped in &extraction.skipped {
            tracing::warn!(
                "schedule line {} skipped: {}",
                skipped.line_no + 1,
                skipped.reason
            );
        }
        tracing::debug!(
            "extracted {} fixtures, skipped {} lines",
            extraction.fixtures.len(),
            extraction.skipped.len()
        );

        Ok(upcoming(
            extraction.fixtures,
            self.now,
            self.config.horizon_days(),
        ))
    }

    async fn render(&self, fixtures: Vec<Fixture>) -> Result<String> {
        if self.config.json_output() {
            return render_json(&fixtures);
        }
        let opts = RenderOptions {
            team: self.config.team().to_string(),
            group_by_month: self.config.group_by_month(),
        };
        Ok(render_html(&fixtures, &opts))
    }
}
