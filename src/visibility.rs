/// Publication visibility rules
///
/// A question becomes visible once its publication date has been reached and
/// counts as "recently published" for one day after that. Both bounds of the
/// recent window are inclusive.
///
/// Everything here is a pure function of a publication date and the current
/// time; callers pass `now` explicitly so the rules can be checked at fixed
/// instants.
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Question;

/// How long after publication a question counts as recent
pub const RECENT_WINDOW: Duration = Duration::days(1);

/// Maximum number of questions returned by the index listing
pub const LATEST_QUESTIONS_LIMIT: usize = 5;

/// Classification of a publication date relative to the current time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Not published yet: hidden from listings and detail lookups
    Future,
    /// Published within the last day (inclusive on both ends)
    Recent,
    /// Published more than a day ago
    Past,
}

impl Visibility {
    /// Whether a question with this classification may be shown
    pub fn is_visible(self) -> bool {
        !matches!(self, Visibility::Future)
    }
}

/// Classifies a publication date against `now`
///
/// ### Arguments
///
/// * `pub_date` - When the question is (or was) published
/// * `now` - The current time
///
/// ### Returns
///
/// `Future` if `pub_date > now`, `Recent` if `now - 1 day <= pub_date <= now`,
/// and `Past` otherwise
pub fn classify(pub_date: DateTime<Utc>, now: DateTime<Utc>) -> Visibility {
    if pub_date > now {
        Visibility::Future
    } else if pub_date >= now - RECENT_WINDOW {
        Visibility::Recent
    } else {
        Visibility::Past
    }
}

/// Returns true if `pub_date` has been reached
pub fn is_published(pub_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    classify(pub_date, now).is_visible()
}

/// Returns true if `pub_date` lies within the last day and not in the future
pub fn was_published_recently(pub_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    classify(pub_date, now) == Visibility::Recent
}

/// Selects the questions the index page shows
///
/// Future questions are dropped entirely, the rest are ordered newest first
/// and cut down to `limit`.
pub fn latest_published(questions: &[Question], now: DateTime<Utc>, limit: usize) -> Vec<Question> {
    let mut published: Vec<Question> = questions
        .iter()
        .filter(|q| q.is_published(now))
        .cloned()
        .collect();

    published.sort_by(|a, b| b.get_pub_date_raw().cmp(&a.get_pub_date_raw()));
    published.truncate(limit);
    published
}
