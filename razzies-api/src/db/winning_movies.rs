//! SQLite-backed [`WinningMovieSource`]

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::{WinningMovieSource, WinningRecord};
use crate::error::ApiResult;

/// Reads winners from the `movies` table
#[derive(Clone)]
pub struct SqliteWinningMovies {
    pool: SqlitePool,
}

impl SqliteWinningMovies {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WinningMovieSource for SqliteWinningMovies {
    /// Winners ordered by year, then by insertion order within a year
    async fn find_winners(&self) -> ApiResult<Vec<WinningRecord>> {
        let rows = sqlx::query_as::<_, (i32, String, String)>(
            r#"
            SELECT year, title, producers
            FROM movies
            WHERE winner = 1
            ORDER BY year ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(year, title, producers)| WinningRecord {
                year,
                title,
                producers,
            })
            .collect())
    }
}
