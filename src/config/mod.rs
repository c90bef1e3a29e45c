pub mod cli;

use crate::core::{extract, fetch, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_regex, validate_url,
    Validate,
};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "zaalschema")]
#[command(about = "Render an HTML page of upcoming futsal fixtures from the league schedule PDF")]
pub struct CliConfig {
    /// Team to filter on (case-insensitive).
    #[arg(long, default_value = "Seedorf")]
    pub team: String,

    /// Download and convert the schedule PDF instead of reading the cache.
    #[arg(long)]
    pub update: bool,

    /// URL of the schedule PDF, or of the season page with --discover.
    #[arg(
        long,
        default_value = "https://usc.uva.nl/wp-content/uploads/Speelschema-zv-18-19-II-heren-1.pdf"
    )]
    pub url: String,

    /// Treat --url as an HTML page and follow the first matching PDF link.
    #[arg(long)]
    pub discover: bool,

    /// Regex that captures the PDF href on the season page.
    #[arg(long, default_value = fetch::DEFAULT_LINK_PATTERN)]
    pub link_pattern: String,

    /// Cache file holding the converted schedule text.
    #[arg(long, default_value = "zaalvoetbal.db")]
    pub db: String,

    /// Row code token pattern; later seasons use [0-9A-Z]{5}.
    #[arg(long, default_value = extract::DEFAULT_TEAM_CODE)]
    pub team_code: String,

    /// Only show fixtures within this many days; 0 disables the window.
    #[arg(long, default_value = "180")]
    pub horizon_days: i64,

    /// Insert a heading row whenever the month changes.
    #[arg(long)]
    pub by_month: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout.
    #[arg(long)]
    pub output: Option<String>,

    /// Enable verbose output.
    #[arg(long)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn team(&self) -> &str {
        &self.team
    }

    fn source_url(&self) -> &str {
        &self.url
    }

    fn cache_path(&self) -> &str {
        &self.db
    }

    fn update(&self) -> bool {
        self.update
    }

    fn discover(&self) -> bool {
        self.discover
    }

    fn link_pattern(&self) -> &str {
        &self.link_pattern
    }

    fn team_code_pattern(&self) -> &str {
        &self.team_code
    }

    fn horizon_days(&self) -> Option<i64> {
        (self.horizon_days > 0).then_some(self.horizon_days)
    }

    fn group_by_month(&self) -> bool {
        self.by_month
    }

    fn json_output(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("team", &self.team)?;
        validate_url("url", &self.url)?;
        validate_path("db", &self.db)?;
        validate_regex("team_code", &self.team_code)?;
        validate_regex("link_pattern", &self.link_pattern)?;
        if self.horizon_days != 0 {
            validate_range("horizon_days", self.horizon_days, 1, 3650)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}
