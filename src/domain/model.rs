use chrono::NaiveDateTime;
use serde::Serialize;

/// One scheduled match for the filtered team.
///
/// `referee` is the time the team is assigned to officiate another match
/// on the same evening; it equals `play` when the schedule row carries
/// only a single time token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fixture {
    pub play: NaiveDateTime,
    pub referee: NaiveDateTime,
    pub home: String,
    pub away: String,
}

impl Fixture {
    /// True when `team` is the home side (case-insensitive substring,
    /// matching the schedule's loose team naming).
    pub fn plays_at_home(&self, team: &str) -> bool {
        self.home.to_lowercase().contains(&team.to_lowercase())
    }
}

/// Result of one extraction pass: fixtures in document order, plus the
/// lines that matched the team filter but could not be parsed.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub fixtures: Vec<Fixture>,
    pub skipped: Vec<SkippedLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// Zero-based line number in the schedule text.
    pub line_no: usize,
    pub reason: ParseIssue,
}

/// Why a team-matching line produced no fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseIssue {
    /// No `DD/MM` token on this line or any earlier line.
    MissingDate,
    /// No `HH:MM` token on the line.
    MissingTime,
    /// The row pattern (code token + "home - away" + time) did not match.
    TeamPatternMismatch,
    /// Date or time tokens do not form a real calendar moment.
    InvalidDateTime,
}

impl std::fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ParseIssue::MissingDate => "no preceding date line",
            ParseIssue::MissingTime => "no time token on line",
            ParseIssue::TeamPatternMismatch => "line does not match the fixture row pattern",
            ParseIssue::InvalidDateTime => "date/time tokens are not a valid moment",
        };
        f.write_str(msg)
    }
}
