//! Tests for database initialization and CSV seeding against files on disk

use razzies_common::db::{count_movies, init_database, seed_movies_from_csv, SeedOutcome};
use razzies_common::Error;
use std::io::Write;
use tempfile::TempDir;

const SEED_CSV: &str = "year;title;studios;producers;winner\n\
1980;Can't Stop the Music;Associated Film Distribution;Allan Carr;yes\n\
1981;Mommie Dearest;Paramount Pictures;Frank Yablans;yes\n\
1982;Inchon;MGM;Mitsuharu Ishii;yes\n\
1982;Butterfly;Analysis Film Releasing;Matt Cimber;\n\
not-a-year;Broken;Nobody;Nobody;yes\n";

fn write_csv(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("movielist.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("razzies.db");

    let pool = init_database(&db_path).await;
    assert!(pool.is_ok(), "Database initialization failed: {:?}", pool.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_opens_existing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("razzies.db");

    let first = init_database(&db_path).await.unwrap();
    first.close().await;

    let second = init_database(&db_path).await;
    assert!(second.is_ok(), "Failed to open existing database: {:?}", second.err());
}

#[tokio::test]
async fn test_seed_loads_valid_rows() {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("razzies.db")).await.unwrap();
    let csv_path = write_csv(&dir, SEED_CSV);

    let outcome = seed_movies_from_csv(&pool, &csv_path).await.unwrap();
    assert_eq!(outcome, SeedOutcome::Loaded { rows: 4, skipped: 1 });
    assert_eq!(count_movies(&pool).await.unwrap(), 4);

    let winners: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies WHERE winner = 1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(winners, 3);
}

#[tokio::test]
async fn test_seed_skips_when_already_populated() {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("razzies.db")).await.unwrap();
    let csv_path = write_csv(&dir, SEED_CSV);

    seed_movies_from_csv(&pool, &csv_path).await.unwrap();
    let outcome = seed_movies_from_csv(&pool, &csv_path).await.unwrap();

    assert_eq!(outcome, SeedOutcome::Skipped { existing: 4 });
    assert_eq!(count_movies(&pool).await.unwrap(), 4);
}

#[tokio::test]
async fn test_seed_survives_restart() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("razzies.db");
    let csv_path = write_csv(&dir, SEED_CSV);

    let pool = init_database(&db_path).await.unwrap();
    seed_movies_from_csv(&pool, &csv_path).await.unwrap();
    pool.close().await;

    let pool = init_database(&db_path).await.unwrap();
    let outcome = seed_movies_from_csv(&pool, &csv_path).await.unwrap();
    assert_eq!(outcome, SeedOutcome::Skipped { existing: 4 });
}

#[tokio::test]
async fn test_seed_missing_csv_is_error() {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("razzies.db")).await.unwrap();

    let result = seed_movies_from_csv(&pool, &dir.path().join("absent.csv")).await;
    assert!(matches!(result, Err(Error::Seed(_))));
    assert_eq!(count_movies(&pool).await.unwrap(), 0);
}
