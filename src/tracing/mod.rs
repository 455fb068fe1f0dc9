pub mod file;
pub mod filter;
pub mod format;

pub use file::setup_tracing;
pub use format::ShabakaFormat;

/// Events from outside this crate never reach the log files.
pub(crate) const TARGET_PREFIX: &str = "shabaka";
