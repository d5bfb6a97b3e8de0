use chrono::{Duration, NaiveDate, Utc};
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use rand::Rng;

/// Categories the fakebank backend accepts for an operation.
pub const CATEGORIES: [&str; 5] = ["food", "taxi", "fuel", "beauty", "restaurants"];

/// Random date within the last 30 days up to today.
pub fn date() -> NaiveDate {
    date_between(30, 0)
}

pub fn date_between(days_back: i64, days_forward: i64) -> NaiveDate {
    let offset = rand::thread_rng().gen_range(-days_back..=days_forward);
    Utc::now().date_naive() + Duration::days(offset)
}

/// Random monetary amount in [-100, 100].
pub fn money() -> f64 {
    money_between(-100.0, 100.0)
}

pub fn money_between(start: f64, end: f64) -> f64 {
    rand::thread_rng().gen_range(start..=end)
}

/// Uniform draw from the fixed category set.
pub fn category() -> String {
    let index = rand::thread_rng().gen_range(0..CATEGORIES.len());
    CATEGORIES[index].to_string()
}

/// Arbitrary lorem sentence for descriptions.
pub fn sentence() -> String {
    Sentence(3..8).fake()
}
