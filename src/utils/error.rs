use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("download failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("PDF conversion failed: {message}")]
    PdfConvertError { message: String },

    #[error("no PDF link matching `{pattern}` found at {url}")]
    NoPdfLinkError { url: String, pattern: String },

    #[error("invalid regular expression: {0}")]
    RegexError(#[from] regex::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("missing configuration: {field}")]
    MissingConfigError { field: String },
}

impl ScheduleError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ScheduleError::FetchError(e) => format!("Could not download the schedule: {}", e),
            ScheduleError::IoError(e) => format!("File problem: {}", e),
            ScheduleError::PdfConvertError { message } => {
                format!("Could not convert the PDF to text: {}", message)
            }
            ScheduleError::NoPdfLinkError { url, .. } => {
                format!("No schedule PDF link found on {}", url)
            }
            ScheduleError::RegexError(e) => format!("Bad pattern: {}", e),
            ScheduleError::SerializationError(e) => format!("Could not serialize output: {}", e),
            ScheduleError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid {} `{}`: {}", field, value, reason),
            ScheduleError::MissingConfigError { field } => format!("Missing {}", field),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScheduleError::FetchError(_) => {
                "Check the URL and your network connection, or rerun without --update to use the cached schedule"
            }
            ScheduleError::IoError(_) => {
                "Check that the cache file exists (run once with --update to create it) and is readable"
            }
            ScheduleError::PdfConvertError { .. } => {
                "Install poppler-utils so the pdftotext tool is on PATH"
            }
            ScheduleError::NoPdfLinkError { .. } => {
                "Adjust --link-pattern, or pass the PDF URL directly without --discover"
            }
            ScheduleError::RegexError(_) => "Fix the --team-code or --link-pattern expression",
            ScheduleError::SerializationError(_) => "Rerun with --format html",
            ScheduleError::InvalidConfigValueError { .. }
            | ScheduleError::MissingConfigError { .. } => "Run with --help to see valid options",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
