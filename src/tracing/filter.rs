use tracing::Level;
use tracing::Metadata;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::Filter;
use tracing_subscriber::registry::LookupSpan;

use super::TARGET_PREFIX;

fn from_crate(meta: &Metadata<'_>) -> bool { meta.target().starts_with(TARGET_PREFIX) }

// Custom filter for exact debug level matching
pub struct DebugOnlyFilter;

impl<S> Filter<S> for DebugOnlyFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        meta.level() == &Level::DEBUG && from_crate(meta)
    }
}

// Custom filter for error and warn levels
pub struct ErrorWarnFilter;

impl<S> Filter<S> for ErrorWarnFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        (meta.level() == &Level::ERROR || meta.level() == &Level::WARN) && from_crate(meta)
    }
}

// Info and above, used for the dev console
#[cfg(feature = "dev")]
pub struct InfoAndAboveFilter;

#[cfg(feature = "dev")]
impl<S> Filter<S> for InfoAndAboveFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        meta.level() <= &Level::INFO && from_crate(meta)
    }
}

// Custom filter for error levels
pub struct ErrorOnlyFilter;

impl<S> Filter<S> for ErrorOnlyFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        meta.level() == &Level::ERROR && from_crate(meta)
    }
}
