//! HTTP API handlers for razzies-api

pub mod buildinfo;
pub mod health;
pub mod intervals;
pub mod openapi;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use intervals::producers_intervals;
pub use openapi::openapi_json;
