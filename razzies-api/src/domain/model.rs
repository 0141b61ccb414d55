//! Domain types

use super::producer_names::parse_producer_names;

/// Winning movie as supplied by a [`super::WinningMovieSource`]
///
/// `producers` is the raw text column, possibly naming several people.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningRecord {
    pub year: i32,
    pub title: String,
    pub producers: String,
}

impl WinningRecord {
    pub fn new(year: i32, title: impl Into<String>, producers: impl Into<String>) -> Self {
        Self {
            year,
            title: title.into(),
            producers: producers.into(),
        }
    }
}

/// Winning movie with its producers split into individual names
///
/// `producers` may be empty when the source text had no names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningMovie {
    pub year: i32,
    pub title: String,
    pub producers: Vec<String>,
}

impl From<WinningRecord> for WinningMovie {
    fn from(record: WinningRecord) -> Self {
        let producers = parse_producer_names(&record.producers);
        Self {
            year: record.year,
            title: record.title,
            producers,
        }
    }
}

/// Gap between two consecutive wins of one producer
///
/// `interval == following_win - previous_win` and is never negative.
/// Computed in `i64` so any pair of `i32` years fits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerInterval {
    pub producer: String,
    pub interval: i64,
    pub previous_win: i32,
    pub following_win: i32,
}

impl ProducerInterval {
    pub fn new(producer: impl Into<String>, previous_win: i32, following_win: i32) -> Self {
        Self {
            producer: producer.into(),
            interval: i64::from(following_win) - i64::from(previous_win),
            previous_win,
            following_win,
        }
    }
}

/// Every interval tied at the global minimum and at the global maximum
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwardIntervalsResult {
    pub min: Vec<ProducerInterval>,
    pub max: Vec<ProducerInterval>,
}

impl AwardIntervalsResult {
    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }
}
