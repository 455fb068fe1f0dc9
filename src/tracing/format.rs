use tracing::Event;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::FormatFields;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::registry::LookupSpan;

use crate::tracing::TARGET_PREFIX;

/// `LEVEL timestamp::engine::component::file:line::message`, one event per
/// line. The component is the event target with the crate prefix stripped.
#[derive(Debug, Clone)]
pub struct ShabakaFormat {
    pub engine_name: String,
}

impl ShabakaFormat {
    pub fn new(engine_name: impl Into<String>) -> Self {
        Self {
            engine_name: engine_name.into(),
        }
    }
}

/// `shabaka::render::controller` becomes `render::controller`; the crate root
/// itself is `root`. Foreign targets pass through unchanged.
pub fn component(target: &str) -> &str {
    match target.strip_prefix(TARGET_PREFIX) {
        Some("") => "root",
        Some(rest) => rest.strip_prefix("::").unwrap_or(target),
        None => target,
    }
}

impl<S, N> FormatEvent<S, N> for ShabakaFormat
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let Some(file) = metadata.file().or(cfg!(feature = "deep-trace").then_some("unknown")) else {
            return Ok(());
        };

        write!(
            writer,
            "{} {}::{}::{}::{}:{}::",
            metadata.level(),
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            self.engine_name,
            component(metadata.target()),
            file.rsplit('/').next().unwrap_or(file),
            metadata.line().unwrap_or(0)
        )?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
