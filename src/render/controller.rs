use std::sync::Arc;

use tracing::debug;
use tracing::error;
use tracing::info;

use crate::config::Config;
use crate::config::LayoutConfig;
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::model::Network;
use crate::model::ProcessedGraph;
use crate::pipeline::EdgeMetrics;
use crate::render::backend::BackendEvent;
use crate::render::backend::BackendHandle;
use crate::render::backend::CursorStyle;
use crate::render::backend::FitTarget;
use crate::render::backend::RenderTarget;
use crate::render::export::ExportedImage;
use crate::render::export::ImageExportOptions;
use crate::render::export::export_filename;
use crate::render::layout::LayoutSpec;
use crate::render::scene::build_scene;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStatus {
    #[default]
    Idle,
    Rendering,
    Ready,
    Errored,
}

impl RenderStatus {
    pub fn is_rendering(self) -> bool { self == Self::Rendering }

    pub fn has_error(self) -> bool { self == Self::Errored }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub network: Network,
    pub address: String,
}

impl NavigationRequest {
    /// Route path of the address page.
    pub fn path(&self) -> String { format!("/address/{}/{}", self.network, self.address) }
}

/// Callbacks into whatever embeds the graph. Every method defaults to a no-op.
pub trait GraphHost {
    fn on_status_change(
        &mut self,
        _status: RenderStatus,
    ) {
    }

    fn on_select_transaction(
        &mut self,
        _hash: Option<String>,
    ) {
    }

    fn on_navigate(
        &mut self,
        _request: NavigationRequest,
    ) {
    }

    fn on_open_full_view(
        &mut self,
        _request: NavigationRequest,
    ) {
    }

    fn on_download(
        &mut self,
        _image: ExportedImage,
    ) {
    }
}

/// Drives one mounted graph: lifecycle, selection, zoom, fit and export.
///
/// Backend failures never escape. They are logged, the half-built backend is
/// released and the status becomes [`RenderStatus::Errored`] until
/// [`rebuild`](Self::rebuild) succeeds.
pub struct GraphInteractionController<T: RenderTarget, H: GraphHost> {
    target:   T,
    host:     H,
    address:  String,
    network:  Network,
    graph:    Arc<ProcessedGraph>,
    selected: Option<String>,
    status:   RenderStatus,
    backend:  BackendHandle,
    render:   RenderConfig,
    layout:   LayoutConfig,
    metrics:  EdgeMetrics,
}

impl<T: RenderTarget, H: GraphHost> GraphInteractionController<T, H> {
    pub fn new(
        target: T,
        host: H,
        address: impl Into<String>,
        network: Network,
        config: &Config,
    ) -> Self {
        Self {
            target,
            host,
            address: address.into(),
            network,
            graph: Arc::new(ProcessedGraph::default()),
            selected: None,
            status: RenderStatus::Idle,
            backend: BackendHandle::default(),
            render: config.render.clone(),
            layout: config.layout.clone(),
            metrics: EdgeMetrics::new(config.metrics.clone()),
        }
    }

    pub fn status(&self) -> RenderStatus { self.status }

    pub fn is_rendering(&self) -> bool { self.status.is_rendering() }

    pub fn has_error(&self) -> bool { self.status.has_error() }

    pub fn has_backend(&self) -> bool { self.backend.is_active() }

    pub fn selected_transaction(&self) -> Option<&str> { self.selected.as_deref() }

    pub fn graph(&self) -> &Arc<ProcessedGraph> { &self.graph }

    pub fn address(&self) -> &str { &self.address }

    pub fn network(&self) -> Network { self.network }

    pub fn host(&self) -> &H { &self.host }

    pub fn host_mut(&mut self) -> &mut H { &mut self.host }

    pub fn target(&self) -> &T { &self.target }

    /// Replaces the graph snapshot. Unchanged snapshots are ignored; while
    /// errored the snapshot is stored and picked up by the next rebuild.
    pub fn set_graph(
        &mut self,
        graph: Arc<ProcessedGraph>,
    ) {
        if Arc::ptr_eq(&self.graph, &graph) || *self.graph == *graph {
            debug!("controller::set_graph::unchanged::address::{}", self.address);
            return;
        }

        self.graph = graph;

        if self.status.has_error() {
            debug!("controller::set_graph::deferred_while_errored::address::{}", self.address);
            return;
        }

        if self.graph.is_empty() {
            self.backend.release();
            self.set_status(RenderStatus::Idle);
            return;
        }

        self.initialize();
    }

    /// Tears down any mounted backend and mounts the current graph.
    pub fn initialize(&mut self) {
        self.backend.release();

        if self.graph.nodes.is_empty() {
            debug!("controller::initialize::skipped::no_nodes::address::{}", self.address);
            self.set_status(RenderStatus::Idle);
            return;
        }

        self.set_status(RenderStatus::Rendering);

        match self.mount() {
            Ok(handle) => {
                self.backend = handle;
                info!(
                    "controller::initialize::ready::address::{}::nodes::{}::edges::{}",
                    self.address,
                    self.graph.nodes.len(),
                    self.graph.edges.len()
                );
                self.set_status(RenderStatus::Ready);
            },
            Err(e) => {
                error!("controller::initialize::failed::address::{}::error::{}", self.address, e);
                self.set_status(RenderStatus::Errored);
            },
        }
    }

    pub fn rebuild(&mut self) {
        info!("controller::rebuild::address::{}", self.address);
        self.initialize();
    }

    pub fn zoom_in(&mut self) { self.scale_zoom(self.render.zoom_in_factor); }

    pub fn zoom_out(&mut self) { self.scale_zoom(self.render.zoom_out_factor); }

    pub fn fit_to_view(&mut self) {
        let padding = self.render.fit_padding;
        if let Some(backend) = self.backend.get_mut() {
            backend.fit(&FitTarget::All, padding);
        }
    }

    /// Highlights every edge carrying `hash` and frames them. The selection
    /// is stored and reported even when nothing matches or nothing is mounted.
    pub fn select_transaction(
        &mut self,
        hash: Option<&str>,
    ) {
        let padding = self.render.selection_padding;
        let edge_ids = hash.map(|hash| self.edge_ids_for(hash)).unwrap_or_default();

        if let Some(backend) = self.backend.get_mut() {
            backend.clear_highlights();
            if !edge_ids.is_empty() {
                backend.highlight_edges(&edge_ids);
                backend.fit(&FitTarget::Edges(edge_ids), padding);
            }
        }

        self.selected = hash.map(str::to_string);
        debug!("controller::select_transaction::hash::{:?}", self.selected);
        self.host.on_select_transaction(self.selected.clone());
    }

    /// Renders the current view and hands it to the host as a download.
    pub fn export_image(&mut self) -> Result<(), RenderError> {
        let options = ImageExportOptions::from(&self.render.export);
        let Some(backend) = self.backend.get_mut() else {
            debug!("controller::export_image::skipped::no_backend");
            return Ok(());
        };

        let bytes = backend.export_image(&options).inspect_err(|e| {
            error!("controller::export_image::failed::address::{}::error::{}", self.address, e);
        })?;

        let filename = export_filename(self.network, &self.address, options.format);
        info!("controller::export_image::ready::file::{}::bytes::{}", filename, bytes.len());
        self.host.on_download(ExportedImage { filename, bytes });
        Ok(())
    }

    pub fn request_full_view(&mut self) {
        let request = NavigationRequest {
            network: self.network,
            address: self.address.clone(),
        };
        self.host.on_open_full_view(request);
    }

    pub fn handle_event(
        &mut self,
        event: BackendEvent,
    ) {
        match event {
            BackendEvent::NodeTap(id) => {
                if id != self.address {
                    self.host.on_navigate(NavigationRequest {
                        network: self.network,
                        address: id,
                    });
                }
            },
            BackendEvent::EdgeTap(hash) => self.select_transaction(Some(&hash)),
            BackendEvent::HoverStart => self.set_cursor(CursorStyle::Pointer),
            BackendEvent::HoverEnd => self.set_cursor(CursorStyle::Default),
            BackendEvent::LayoutStop => {
                debug!("controller::layout_stop::fit::address::{}", self.address);
                self.fit_to_view();
            },
        }
    }

    fn mount(&mut self) -> Result<BackendHandle, RenderError> {
        let scene = build_scene(&self.graph, &self.metrics);
        let mut handle = BackendHandle::new(self.target.mount(&scene)?);

        let layout = LayoutSpec::force(&self.layout, &self.address);
        if let Some(backend) = handle.get_mut() {
            backend.run_layout(&layout)?;

            if let Some(hash) = &self.selected {
                let edge_ids = self.edge_ids_for(hash);
                if !edge_ids.is_empty() {
                    backend.highlight_edges(&edge_ids);
                }
            }
        }

        Ok(handle)
    }

    fn edge_ids_for(
        &self,
        hash: &str,
    ) -> Vec<String> {
        self.graph.edges_with_hash(hash).map(|edge| edge.id.clone()).collect()
    }

    fn scale_zoom(
        &mut self,
        factor: f64,
    ) {
        if let Some(backend) = self.backend.get_mut() {
            let level = backend.zoom() * factor;
            backend.set_zoom(level);
        }
    }

    fn set_cursor(
        &mut self,
        cursor: CursorStyle,
    ) {
        if let Some(backend) = self.backend.get_mut() {
            backend.set_cursor(cursor);
        }
    }

    fn set_status(
        &mut self,
        status: RenderStatus,
    ) {
        if self.status == status {
            return;
        }
        debug!("controller::status::{:?}->{:?}::address::{}", self.status, status, self.address);
        self.status = status;
        self.host.on_status_change(status);
    }
}
