//! Producer award-interval computation
//!
//! Pipeline: winning records → producer names → years grouped by producer
//! → consecutive-year intervals → global min/max cohorts.

pub mod extrema;
pub mod intervals;
pub mod model;
pub mod producer_names;
pub mod source;
pub mod usecase;

pub use extrema::select_extrema;
pub use intervals::{calculate_intervals, WinsByProducer};
pub use model::{AwardIntervalsResult, ProducerInterval, WinningMovie, WinningRecord};
pub use producer_names::parse_producer_names;
pub use source::WinningMovieSource;
pub use usecase::AwardIntervalsUseCase;
