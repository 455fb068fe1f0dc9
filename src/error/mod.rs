pub mod config;
pub mod render;
pub mod source;

pub use anyhow::anyhow;
pub use anyhow::Context;
pub use anyhow::Error;
pub use anyhow::Result;
pub use config::ConfigError;
pub use render::RenderError;
pub use source::SourceError;
