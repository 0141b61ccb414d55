//! Producers with the shortest and longest gaps between consecutive wins

use tracing::debug;

use super::extrema::select_extrema;
use super::intervals::{calculate_intervals, WinsByProducer};
use super::model::{AwardIntervalsResult, WinningMovie};
use super::source::WinningMovieSource;
use crate::error::ApiResult;

/// Computes the min/max award-interval cohorts from a [`WinningMovieSource`]
///
/// Stateless: every call re-reads the source and recomputes from scratch.
pub struct AwardIntervalsUseCase<S> {
    source: S,
}

impl<S: WinningMovieSource> AwardIntervalsUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch winners, split producers, group years, compute intervals, select extrema
    ///
    /// Source failures propagate unchanged.
    pub async fn execute(&self) -> ApiResult<AwardIntervalsResult> {
        let movies: Vec<WinningMovie> = self
            .source
            .find_winners()
            .await?
            .into_iter()
            .map(WinningMovie::from)
            .collect();

        let wins = WinsByProducer::from_movies(&movies);
        let intervals = calculate_intervals(&wins);

        debug!(
            movies = movies.len(),
            producers = wins.len(),
            intervals = intervals.len(),
            "Computed producer award intervals"
        );

        Ok(select_extrema(&intervals))
    }
}
