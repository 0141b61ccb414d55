//! Database models

use serde::{Deserialize, Serialize};

/// One row of the `movies` table as imported from the seed CSV
///
/// `producers` is stored verbatim; splitting into names happens when
/// winners are read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub year: i32,
    pub title: String,
    pub studios: String,
    pub producers: String,
    pub winner: bool,
}
