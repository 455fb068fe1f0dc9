#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use mockall::mock;
use shabaka::error::RenderError;
use shabaka::model::AddressCategory;
use shabaka::model::AddressData;
use shabaka::model::Transaction;
use shabaka::model::categorize;
use shabaka::render::CursorStyle;
use shabaka::render::ExportedImage;
use shabaka::render::FitTarget;
use shabaka::render::GraphHost;
use shabaka::render::ImageExportOptions;
use shabaka::render::LayoutSpec;
use shabaka::render::NavigationRequest;
use shabaka::render::RenderBackend;
use shabaka::render::RenderStatus;
use shabaka::render::RenderTarget;
use shabaka::render::SceneDescription;

pub const TARGET: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
pub const NOW_MS: i64 = 1_700_000_000_000;
pub const HOUR_MS: i64 = 60 * 60 * 1000;

mock! {
    pub Backend {}

    impl RenderBackend for Backend {
        fn zoom(&self) -> f64;
        fn set_zoom(&mut self, level: f64);
        fn fit(&mut self, target: &FitTarget, padding: f64);
        fn run_layout(&mut self, layout: &LayoutSpec) -> Result<(), RenderError>;
        fn clear_highlights(&mut self);
        fn highlight_edges(&mut self, edge_ids: &[String]);
        fn set_cursor(&mut self, cursor: CursorStyle);
        fn export_image(&mut self, options: &ImageExportOptions) -> Result<Vec<u8>, RenderError>;
        fn destroy(&mut self);
    }
}

mock! {
    pub Target {}

    impl RenderTarget for Target {
        fn mount(&mut self, scene: &SceneDescription) -> Result<Box<dyn RenderBackend>, RenderError>;
    }
}

mock! {
    pub Host {}

    impl GraphHost for Host {
        fn on_status_change(&mut self, status: RenderStatus);
        fn on_select_transaction(&mut self, hash: Option<String>);
        fn on_navigate(&mut self, request: NavigationRequest);
        fn on_open_full_view(&mut self, request: NavigationRequest);
        fn on_download(&mut self, image: ExportedImage);
    }
}

/// Everything the fake backend was asked to do, shared with the test.
#[derive(Debug, Default)]
pub struct BackendLog {
    pub mounted_scenes: Vec<SceneDescription>,
    pub layouts:        Vec<LayoutSpec>,
    pub zoom:           f64,
    pub fits:           Vec<(FitTarget, f64)>,
    pub highlighted:    Vec<String>,
    pub cursor:         Option<CursorStyle>,
    pub exports:        Vec<ImageExportOptions>,
    pub destroyed:      usize,
}

pub struct FakeBackend {
    log: Rc<RefCell<BackendLog>>,
}

impl RenderBackend for FakeBackend {
    fn zoom(&self) -> f64 { self.log.borrow().zoom }

    fn set_zoom(
        &mut self,
        level: f64,
    ) {
        self.log.borrow_mut().zoom = level;
    }

    fn fit(
        &mut self,
        target: &FitTarget,
        padding: f64,
    ) {
        self.log.borrow_mut().fits.push((target.clone(), padding));
    }

    fn run_layout(
        &mut self,
        layout: &LayoutSpec,
    ) -> Result<(), RenderError> {
        self.log.borrow_mut().layouts.push(layout.clone());
        Ok(())
    }

    fn clear_highlights(&mut self) { self.log.borrow_mut().highlighted.clear(); }

    fn highlight_edges(
        &mut self,
        edge_ids: &[String],
    ) {
        self.log.borrow_mut().highlighted.extend_from_slice(edge_ids);
    }

    fn set_cursor(
        &mut self,
        cursor: CursorStyle,
    ) {
        self.log.borrow_mut().cursor = Some(cursor);
    }

    fn export_image(
        &mut self,
        options: &ImageExportOptions,
    ) -> Result<Vec<u8>, RenderError> {
        self.log.borrow_mut().exports.push(options.clone());
        Ok(b"\x89PNG".to_vec())
    }

    fn destroy(&mut self) { self.log.borrow_mut().destroyed += 1; }
}

/// Mounts [`FakeBackend`]s that all write into one shared log. Setting
/// `fail_next` makes the next mount fail.
#[derive(Default)]
pub struct FakeTarget {
    pub log:       Rc<RefCell<BackendLog>>,
    pub fail_next: Rc<RefCell<bool>>,
}

impl FakeTarget {
    pub fn new() -> Self {
        let target = Self::default();
        target.log.borrow_mut().zoom = 1.0;
        target
    }
}

impl RenderTarget for FakeTarget {
    fn mount(
        &mut self,
        scene: &SceneDescription,
    ) -> Result<Box<dyn RenderBackend>, RenderError> {
        if self.fail_next.replace(false) {
            return Err(RenderError::MountError("canvas unavailable".to_string()));
        }
        self.log.borrow_mut().mounted_scenes.push(scene.clone());
        Ok(Box::new(FakeBackend { log: self.log.clone() }))
    }
}

/// Host that records every callback in order.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub statuses:    Vec<RenderStatus>,
    pub selections:  Vec<Option<String>>,
    pub navigations: Vec<NavigationRequest>,
    pub full_views:  Vec<NavigationRequest>,
    pub downloads:   Vec<ExportedImage>,
}

impl GraphHost for RecordingHost {
    fn on_status_change(
        &mut self,
        status: RenderStatus,
    ) {
        self.statuses.push(status);
    }

    fn on_select_transaction(
        &mut self,
        hash: Option<String>,
    ) {
        self.selections.push(hash);
    }

    fn on_navigate(
        &mut self,
        request: NavigationRequest,
    ) {
        self.navigations.push(request);
    }

    fn on_open_full_view(
        &mut self,
        request: NavigationRequest,
    ) {
        self.full_views.push(request);
    }

    fn on_download(
        &mut self,
        image: ExportedImage,
    ) {
        self.downloads.push(image);
    }
}

/// Shared test data builders.
pub struct TestFixtures;

impl TestFixtures {
    pub fn new() -> Self { Self }

    pub fn tx(
        &self,
        hash: &str,
        from: &str,
        to: &str,
        value: &str,
        timestamp: i64,
    ) -> Transaction {
        Transaction::new(hash, from, to, value, timestamp)
    }

    /// First generated address that falls into `category`, skipping `exclude`.
    pub fn address_in(
        &self,
        category: AddressCategory,
        exclude: &[&str],
    ) -> String {
        (0..100_000u32)
            .map(|i| format!("0x{i:040x}"))
            .find(|candidate| categorize(candidate) == category && !exclude.contains(&candidate.as_str()))
            .unwrap_or_else(|| panic!("no address found for {category}"))
    }

    /// Incoming from an exchange, outgoing to a DEX, one self-transfer on the
    /// target, all within the last day.
    pub fn mixed_history(&self) -> Vec<Transaction> {
        let exchange = self.address_in(AddressCategory::Exchange, &[]);
        let dex = self.address_in(AddressCategory::Dex, &[]);
        vec![
            self.tx("0xaaaa000000000001", &exchange, TARGET, "2.5 ETH", NOW_MS - HOUR_MS),
            self.tx("0xbbbb000000000002", TARGET, &dex, "0.75 ETH", NOW_MS - 2 * HOUR_MS),
            self.tx("0xcccc000000000003", TARGET, TARGET, "0.1 ETH", NOW_MS - 3 * HOUR_MS),
        ]
    }

    /// `count` incoming transfers, one hour apart, newest first.
    pub fn hourly_history(
        &self,
        count: usize,
    ) -> Vec<Transaction> {
        (0..count)
            .map(|i| {
                self.tx(
                    &format!("0x{i:016x}"),
                    &format!("0xsender{:02}", i % 7),
                    TARGET,
                    &format!("{}.0 ETH", i + 1),
                    NOW_MS - i as i64 * HOUR_MS,
                )
            })
            .collect()
    }

    pub fn address_data(
        &self,
        transactions: Vec<Transaction>,
    ) -> AddressData {
        AddressData {
            transactions,
            ..AddressData::default()
        }
    }
}
