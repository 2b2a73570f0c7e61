//! HTTP inbound adapter exposing the generation endpoint and health checks.

pub mod error;
pub mod generate;
pub mod health;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
