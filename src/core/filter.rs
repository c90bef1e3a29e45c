use crate::domain::model::Fixture;
use chrono::{Duration, NaiveDateTime};

/// Keep fixtures with kickoff strictly after `now`, and within
/// `now + horizon_days` when a horizon is set. A stale cache otherwise
/// reproduces long-gone rows, and a wrong-year parse can land a fixture
/// months in the future; the window drops both. Order is preserved.
pub fn upcoming(
    fixtures: Vec<Fixture>,
    now: NaiveDateTime,
    horizon_days: Option<i64>,
) -> Vec<Fixture> {
    let cutoff = horizon_days.map(|days| now + Duration::days(days));
    fixtures
        .into_iter()
        .filter(|f| f.play > now && cutoff.map_or(true, |c| f.play <= c))
        .collect()
}
