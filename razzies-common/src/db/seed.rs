//! One-time CSV import into the `movies` table
//!
//! Seed file format: semicolon-delimited `year;title;studios;producers;winner`
//! with a header line. Rows that cannot be parsed are skipped with a
//! warning; they never abort the import.

use crate::db::init::count_movies;
use crate::db::models::MovieRecord;
use crate::{Error, Result};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::{info, warn};

const CSV_DELIMITER: char = ';';
const MIN_FIELDS: usize = 5;

/// Why a single CSV line was rejected
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RowError {
    #[error("expected at least 5 fields, found {0}")]
    TooFewFields(usize),

    #[error("year is not an integer: {0:?}")]
    InvalidYear(String),
}

/// Result of parsing a whole CSV document
#[derive(Debug, Default)]
pub struct ParsedCsv {
    pub movies: Vec<MovieRecord>,
    /// Non-blank data lines that were rejected
    pub skipped: usize,
}

/// What [`seed_movies_from_csv`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Table already had rows; nothing was read
    Skipped { existing: i64 },
    /// CSV was imported
    Loaded { rows: usize, skipped: usize },
}

/// Parse one data line
///
/// Trailing empty fields are kept, so `1980;t;s;p;` has five fields and
/// a non-winning flag. Text fields are stored as-is.
pub fn parse_movie_line(line: &str) -> std::result::Result<MovieRecord, RowError> {
    let fields: Vec<&str> = line.split(CSV_DELIMITER).collect();
    if fields.len() < MIN_FIELDS {
        return Err(RowError::TooFewFields(fields.len()));
    }

    let year = fields[0]
        .trim()
        .parse::<i32>()
        .map_err(|_| RowError::InvalidYear(fields[0].to_string()))?;

    Ok(MovieRecord {
        year,
        title: fields[1].to_string(),
        studios: fields[2].to_string(),
        producers: fields[3].to_string(),
        winner: fields[4].trim().eq_ignore_ascii_case("yes"),
    })
}

/// Parse a CSV document, skipping the header line
pub fn parse_movie_csv(content: &str) -> ParsedCsv {
    let mut parsed = ParsedCsv::default();

    for (index, line) in content.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        match parse_movie_line(line) {
            Ok(movie) => parsed.movies.push(movie),
            Err(e) => {
                warn!("Skipping malformed line {} in CSV ({}): {}", index + 1, e, line);
                parsed.skipped += 1;
            }
        }
    }

    parsed
}

/// Insert all movies in a single transaction
pub async fn insert_movies(pool: &SqlitePool, movies: &[MovieRecord]) -> Result<()> {
    let mut tx = pool.begin().await?;

    for movie in movies {
        sqlx::query(
            "INSERT INTO movies (year, title, studios, producers, winner) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(movie.year)
        .bind(&movie.title)
        .bind(&movie.studios)
        .bind(&movie.producers)
        .bind(movie.winner)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Populate an empty `movies` table from the CSV at `csv_path`
///
/// Does nothing when the table already has rows. A missing or unreadable
/// file is an error.
pub async fn seed_movies_from_csv(pool: &SqlitePool, csv_path: &Path) -> Result<SeedOutcome> {
    let existing = count_movies(pool).await?;
    if existing > 0 {
        info!("Database already populated ({} movies). Skipping CSV import.", existing);
        return Ok(SeedOutcome::Skipped { existing });
    }

    info!("Populating database from CSV file: {}", csv_path.display());
    let content = tokio::fs::read_to_string(csv_path).await.map_err(|e| {
        Error::Seed(format!("Failed to read CSV file {}: {}", csv_path.display(), e))
    })?;

    let parsed = parse_movie_csv(&content);
    insert_movies(pool, &parsed.movies).await?;

    info!(
        "Loaded {} movies into the database ({} malformed lines skipped)",
        parsed.movies.len(),
        parsed.skipped
    );

    Ok(SeedOutcome::Loaded {
        rows: parsed.movies.len(),
        skipped: parsed.skipped,
    })
}
