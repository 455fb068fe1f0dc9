pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod source;
pub mod tracing;
pub mod utils;

pub use error::Result;
pub use crate::tracing::setup_tracing;
