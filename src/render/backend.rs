use crate::error::RenderError;
use crate::render::export::ImageExportOptions;
use crate::render::layout::LayoutSpec;
use crate::render::scene::SceneDescription;

#[derive(Debug, Clone, PartialEq)]
pub enum FitTarget {
    All,
    /// Edge ids.
    Edges(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    Default,
    Pointer,
}

/// Input coming back from a mounted backend. The host forwards these to the
/// controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendEvent {
    /// Node id.
    NodeTap(String),
    /// Transaction hash of the tapped edge.
    EdgeTap(String),
    HoverStart,
    HoverEnd,
    LayoutStop,
}

/// A live, mounted graph drawing.
pub trait RenderBackend {
    fn zoom(&self) -> f64;

    fn set_zoom(
        &mut self,
        level: f64,
    );

    fn fit(
        &mut self,
        target: &FitTarget,
        padding: f64,
    );

    /// Starts a layout. Completion is reported later as
    /// [`BackendEvent::LayoutStop`].
    fn run_layout(
        &mut self,
        layout: &LayoutSpec,
    ) -> Result<(), RenderError>;

    fn clear_highlights(&mut self);

    fn highlight_edges(
        &mut self,
        edge_ids: &[String],
    );

    fn set_cursor(
        &mut self,
        cursor: CursorStyle,
    );

    fn export_image(
        &mut self,
        options: &ImageExportOptions,
    ) -> Result<Vec<u8>, RenderError>;

    fn destroy(&mut self);
}

/// Where scenes get mounted, e.g. a window or a canvas element.
pub trait RenderTarget {
    fn mount(
        &mut self,
        scene: &SceneDescription,
    ) -> Result<Box<dyn RenderBackend>, RenderError>;
}

/// Sole owner of a mounted backend. Releasing or dropping the handle destroys
/// the backend exactly once.
#[derive(Default)]
pub struct BackendHandle {
    backend: Option<Box<dyn RenderBackend>>,
}

impl BackendHandle {
    pub fn new(backend: Box<dyn RenderBackend>) -> Self { Self { backend: Some(backend) } }

    pub fn is_active(&self) -> bool { self.backend.is_some() }

    pub fn get_mut(&mut self) -> Option<&mut (dyn RenderBackend + 'static)> { self.backend.as_deref_mut() }

    pub fn release(&mut self) {
        if let Some(mut backend) = self.backend.take() {
            backend.destroy();
        }
    }
}

impl Drop for BackendHandle {
    fn drop(&mut self) { self.release(); }
}

impl std::fmt::Debug for BackendHandle {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("BackendHandle").field("active", &self.is_active()).finish()
    }
}
