pub mod backend;
pub mod controller;
pub mod export;
pub mod layout;
pub mod scene;
pub mod style;

pub use backend::BackendEvent;
pub use backend::BackendHandle;
pub use backend::CursorStyle;
pub use backend::FitTarget;
pub use backend::RenderBackend;
pub use backend::RenderTarget;
pub use controller::GraphHost;
pub use controller::GraphInteractionController;
pub use controller::NavigationRequest;
pub use controller::RenderStatus;
pub use export::ExportedImage;
pub use export::ImageExportOptions;
pub use layout::LayoutSpec;
pub use scene::SceneDescription;
pub use scene::SceneElement;
pub use scene::build_scene;
pub use style::Legend;
pub use style::StyleRule;
