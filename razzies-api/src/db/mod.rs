//! Database access layer for razzies-api

mod winning_movies;

pub use winning_movies::SqliteWinningMovies;
