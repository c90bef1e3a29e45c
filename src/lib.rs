pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalCache, CliConfig, OutputFormat};
pub use core::{engine::ReportEngine, pipeline::SchedulePipeline};
pub use domain::model::Fixture;
pub use utils::error::{Result, ScheduleError};
