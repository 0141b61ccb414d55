//! Boundary to whatever stores the movie records

use async_trait::async_trait;

use super::model::WinningRecord;
use crate::error::ApiResult;

/// Supplier of award-winning movie records
///
/// Implementations return winners only, ordered by year ascending.
/// Failures surface as [`crate::ApiError::DataSource`].
#[async_trait]
pub trait WinningMovieSource: Send + Sync {
    async fn find_winners(&self) -> ApiResult<Vec<WinningRecord>>;
}

/// In-memory source: the vector is returned as-is
#[async_trait]
impl WinningMovieSource for Vec<WinningRecord> {
    async fn find_winners(&self) -> ApiResult<Vec<WinningRecord>> {
        Ok(self.clone())
    }
}
