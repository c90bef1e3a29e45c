use crate::domain::model::{Extraction, Fixture, ParseIssue, SkippedLine};
use crate::utils::error::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Regex, RegexBuilder};

/// Default row code token, e.g. `02B29`. Later seasons switched to a
/// plain five-character alphanumeric code (`[0-9A-Z]{5}`).
pub const DEFAULT_TEAM_CODE: &str = r"\d\d[A-Z]\d\d";

/// Compiled patterns for one extraction run.
pub struct LinePatterns {
    team: Regex,
    date: Regex,
    time: Regex,
    row: Regex,
}

impl LinePatterns {
    /// `team` is matched case-insensitively as a literal; `code_pattern`
    /// is the season's row code token (see [`DEFAULT_TEAM_CODE`]).
    pub fn new(team: &str, code_pattern: &str) -> Result<Self> {
        let team = RegexBuilder::new(&regex::escape(team))
            .case_insensitive(true)
            .build()?;
        let date = Regex::new(r"(\d\d/\d\d)")?;
        let time = Regex::new(r"(\d\d:\d\d)")?;
        // Home team runs up to the dash; away team is the shortest span
        // before the next time token, so a trailing kickoff time is never
        // swallowed into the team name. The code pattern is grouped so a
        // top-level alternation cannot split the row pattern.
        let row = Regex::new(&format!(
            r"(?:{code_pattern})\s*([^-]+)-\s*(.*?)\s*\d\d:\d\d"
        ))?;
        Ok(Self {
            team,
            date,
            time,
            row,
        })
    }
}

/// Single forward pass over the schedule text: track the last seen
/// `DD/MM` token and emit one fixture per line matching the team filter.
/// Malformed lines are reported in `skipped`, never fatal.
pub fn extract_fixtures(text: &str, patterns: &LinePatterns, year: i32) -> Extraction {
    let mut out = Extraction::default();
    let mut last_date: Option<&str> = None;

    for (line_no, line) in text.lines().enumerate() {
        // A date on the fixture line itself counts for that line too.
        if let Some(m) = patterns.date.captures(line) {
            last_date = Some(m.get(1).map(|g| g.as_str()).unwrap_or_default());
        }

        if !patterns.team.is_match(line) {
            continue;
        }

        match parse_fixture_line(line, patterns, last_date, year) {
            Ok(fixture) => out.fixtures.push(fixture),
            Err(reason) => {
                tracing::debug!("skipping line {}: {} ({})", line_no + 1, reason, line.trim());
                out.skipped.push(SkippedLine { line_no, reason });
            }
        }
    }

    out
}

fn parse_fixture_line(
    line: &str,
    patterns: &LinePatterns,
    last_date: Option<&str>,
    year: i32,
) -> std::result::Result<Fixture, ParseIssue> {
    let date = last_date.ok_or(ParseIssue::MissingDate)?;

    let times: Vec<&str> = patterns
        .time
        .find_iter(line)
        .map(|m| m.as_str())
        .collect();
    let play_time = *times.first().ok_or(ParseIssue::MissingTime)?;
    // Second token is the referee assignment; absent means the team only
    // plays, so officiating defaults to kickoff.
    let ref_time = times.get(1).copied().unwrap_or(play_time);

    let row = patterns
        .row
        .captures(line)
        .ok_or(ParseIssue::TeamPatternMismatch)?;
    let home = row.get(1).map(|g| g.as_str().trim()).unwrap_or_default();
    let away = row.get(2).map(|g| g.as_str().trim()).unwrap_or_default();
    if home.is_empty() || away.is_empty() {
        return Err(ParseIssue::TeamPatternMismatch);
    }

    Ok(Fixture {
        play: parse_moment(date, play_time, year).ok_or(ParseIssue::InvalidDateTime)?,
        referee: parse_moment(date, ref_time, year).ok_or(ParseIssue::InvalidDateTime)?,
        home: home.to_string(),
        away: away.to_string(),
    })
}

/// `DD/MM` + `HH:MM` + year into a naive local moment.
fn parse_moment(date: &str, time: &str, year: i32) -> Option<NaiveDateTime> {
    let (day, month) = date.split_once('/')?;
    let date = NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)?;
    let time = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    Some(date.and_time(time))
}
