use thiserror::Error;

/// Failures raised by a rendering backend. The interaction controller catches
/// these at its boundary and turns them into the `Errored` status.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("[Render] Failed to mount scene: {0}")]
    MountError(String),
    #[error("[Render] Layout failed: {0}")]
    LayoutError(String),
    #[error("[Render] Image export failed: {0}")]
    ExportError(String),
    #[error("[Render] Backend error: {0}")]
    BackendError(String),
}
