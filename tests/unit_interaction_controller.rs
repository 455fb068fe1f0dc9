mod common;

use std::sync::Arc;

use common::FakeTarget;
use common::MockBackend;
use common::MockHost;
use common::MockTarget;
use common::RecordingHost;
use common::TARGET;
use common::TestFixtures;
use mockall::predicate::*;
use pretty_assertions::assert_eq;
use shabaka::config::Config;
use shabaka::error::RenderError;
use shabaka::model::FilterState;
use shabaka::model::Network;
use shabaka::model::ProcessedGraph;
use shabaka::pipeline::GraphProcessor;
use shabaka::render::BackendEvent;
use shabaka::render::CursorStyle;
use shabaka::render::FitTarget;
use shabaka::render::GraphInteractionController;
use shabaka::render::LayoutSpec;
use shabaka::render::NavigationRequest;
use shabaka::render::RenderStatus;

fn graph() -> Arc<ProcessedGraph> {
    let fixtures = TestFixtures::new();
    GraphProcessor::default().process_at(TARGET, &fixtures.mixed_history(), &FilterState::default(), common::NOW_MS)
}

fn controller() -> GraphInteractionController<FakeTarget, RecordingHost> {
    GraphInteractionController::new(FakeTarget::new(), RecordingHost::default(), TARGET, Network::Ethereum, &Config::default())
}

fn ready_controller() -> GraphInteractionController<FakeTarget, RecordingHost> {
    let mut controller = controller();
    controller.set_graph(graph());
    assert_eq!(controller.status(), RenderStatus::Ready);
    controller
}

mod lifecycle_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_graph_mounts_and_runs_layout() {
        let controller = ready_controller();
        let log = controller.target().log.borrow();

        assert_eq!(log.mounted_scenes.len(), 1);
        assert_eq!(log.mounted_scenes[0].layout, LayoutSpec::preset());
        assert_eq!(log.layouts.len(), 1);
        assert_eq!(log.layouts[0].name(), "cose-bilkent");
        assert_eq!(controller.host().statuses, vec![RenderStatus::Rendering, RenderStatus::Ready]);
        assert!(controller.has_backend());
        assert!(!controller.is_rendering());
        assert!(!controller.has_error());
    }

    #[test]
    fn initialize_without_nodes_stays_idle() {
        let mut target = MockTarget::new();
        target.expect_mount().never();

        let mut controller =
            GraphInteractionController::new(target, RecordingHost::default(), TARGET, Network::Ethereum, &Config::default());
        controller.initialize();

        assert_eq!(controller.status(), RenderStatus::Idle);
        assert!(controller.host().statuses.is_empty());
    }

    #[test]
    fn mount_failure_is_contained_and_rebuild_recovers() {
        let mut controller = controller();
        *controller.target().fail_next.borrow_mut() = true;

        controller.set_graph(graph());
        assert_eq!(controller.status(), RenderStatus::Errored);
        assert!(controller.has_error());
        assert!(!controller.has_backend());

        controller.rebuild();
        assert_eq!(controller.status(), RenderStatus::Ready);
        assert_eq!(controller.host().statuses, vec![
            RenderStatus::Rendering,
            RenderStatus::Errored,
            RenderStatus::Rendering,
            RenderStatus::Ready,
        ]);
    }

    #[test]
    fn layout_failure_destroys_half_built_backend() {
        let mut backend = MockBackend::new();
        backend
            .expect_run_layout()
            .times(1)
            .returning(|_| Err(RenderError::LayoutError("no extension".to_string())));
        backend.expect_destroy().times(1).return_const(());

        let mut target = MockTarget::new();
        target.expect_mount().times(1).return_once(move |_| Ok(Box::new(backend)));

        let mut controller =
            GraphInteractionController::new(target, RecordingHost::default(), TARGET, Network::Ethereum, &Config::default());
        controller.set_graph(graph());

        assert_eq!(controller.status(), RenderStatus::Errored);
        assert!(!controller.has_backend());
    }

    #[test]
    fn rebuild_releases_before_mounting_again() {
        let mut controller = ready_controller();
        controller.rebuild();

        let log = controller.target().log.borrow();
        assert_eq!(log.mounted_scenes.len(), 2);
        assert_eq!(log.destroyed, 1);
    }

    #[test]
    fn dropping_the_controller_destroys_the_backend() {
        let controller = ready_controller();
        let log = controller.target().log.clone();
        drop(controller);
        assert_eq!(log.borrow().destroyed, 1);
    }

    #[test]
    fn identical_snapshot_is_ignored() {
        let mut controller = ready_controller();
        let same = controller.graph().clone();
        controller.set_graph(same);
        controller.set_graph(graph());

        assert_eq!(controller.target().log.borrow().mounted_scenes.len(), 1);
    }

    #[test]
    fn snapshot_without_edges_releases_and_idles() {
        let mut controller = ready_controller();
        let empty = GraphProcessor::default().process_at(TARGET, &[], &FilterState::default(), common::NOW_MS);
        assert_eq!(empty.nodes.len(), 1);

        controller.set_graph(empty);

        assert_eq!(controller.status(), RenderStatus::Idle);
        assert!(!controller.has_backend());
        assert_eq!(controller.target().log.borrow().destroyed, 1);
    }

    #[test]
    fn snapshot_while_errored_waits_for_rebuild() {
        let mut controller = controller();
        *controller.target().fail_next.borrow_mut() = true;
        controller.set_graph(graph());
        assert!(controller.has_error());

        let fixtures = TestFixtures::new();
        let other = GraphProcessor::default().process_at(
            TARGET,
            &fixtures.hourly_history(3),
            &FilterState::default(),
            common::NOW_MS,
        );
        controller.set_graph(other.clone());

        assert!(controller.has_error());
        assert!(controller.target().log.borrow().mounted_scenes.is_empty());

        controller.rebuild();
        assert_eq!(controller.status(), RenderStatus::Ready);
        assert_eq!(controller.target().log.borrow().mounted_scenes[0].edges().count(), other.edges.len());
    }
}

mod interaction_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zoom_scales_current_level() {
        let mut backend = MockBackend::new();
        backend.expect_run_layout().returning(|_| Ok(()));
        backend.expect_zoom().return_const(2.0);
        backend.expect_set_zoom().with(eq(2.4)).times(1).return_const(());
        backend.expect_set_zoom().with(eq(1.6)).times(1).return_const(());
        backend.expect_destroy().return_const(());

        let mut target = MockTarget::new();
        target.expect_mount().return_once(move |_| Ok(Box::new(backend)));

        let mut controller =
            GraphInteractionController::new(target, RecordingHost::default(), TARGET, Network::Ethereum, &Config::default());
        controller.set_graph(graph());
        controller.zoom_in();
        controller.zoom_out();
    }

    #[test]
    fn controls_without_backend_are_noops() {
        let mut controller = controller();
        controller.zoom_in();
        controller.zoom_out();
        controller.fit_to_view();
        controller.handle_event(BackendEvent::HoverStart);
        assert!(controller.export_image().is_ok());
        assert!(controller.host().downloads.is_empty());
    }

    #[test]
    fn layout_stop_fits_everything() {
        let mut controller = ready_controller();
        controller.handle_event(BackendEvent::LayoutStop);
        assert_eq!(controller.target().log.borrow().fits, vec![(FitTarget::All, 50.0)]);
    }

    #[test]
    fn hover_toggles_pointer() {
        let mut controller = ready_controller();
        controller.handle_event(BackendEvent::HoverStart);
        assert_eq!(controller.target().log.borrow().cursor, Some(CursorStyle::Pointer));
        controller.handle_event(BackendEvent::HoverEnd);
        assert_eq!(controller.target().log.borrow().cursor, Some(CursorStyle::Default));
    }

    #[test]
    fn edge_tap_selects_and_frames_transaction() {
        let mut controller = ready_controller();
        let hash = controller.graph().edges[0].hash.clone();
        let edge_id = controller.graph().edges[0].id.clone();

        controller.handle_event(BackendEvent::EdgeTap(hash.clone()));

        let log = controller.target().log.borrow();
        assert_eq!(log.highlighted, vec![edge_id.clone()]);
        assert_eq!(log.fits.last(), Some(&(FitTarget::Edges(vec![edge_id]), 100.0)));
        drop(log);
        assert_eq!(controller.selected_transaction(), Some(hash.as_str()));
        assert_eq!(controller.host().selections, vec![Some(hash)]);
    }

    #[test]
    fn unknown_hash_clears_but_still_reports() {
        let mut controller = ready_controller();
        let hash = controller.graph().edges[0].hash.clone();
        controller.select_transaction(Some(&hash));
        controller.select_transaction(Some("0xnotthere"));

        assert!(controller.target().log.borrow().highlighted.is_empty());
        assert_eq!(controller.host().selections.last(), Some(&Some("0xnotthere".to_string())));

        controller.select_transaction(None);
        assert_eq!(controller.selected_transaction(), None);
        assert_eq!(controller.host().selections.last(), Some(&None));
    }

    #[test]
    fn selection_without_backend_is_stored_and_reapplied() {
        let mut controller = controller();
        let graph = graph();
        let hash = graph.edges[1].hash.clone();
        let edge_id = graph.edges[1].id.clone();

        controller.select_transaction(Some(&hash));
        assert_eq!(controller.host().selections, vec![Some(hash)]);

        controller.set_graph(graph);
        assert_eq!(controller.target().log.borrow().highlighted, vec![edge_id]);
    }

    #[test]
    fn node_tap_navigates_to_counterparties_only() {
        let mut host = MockHost::new();
        host.expect_on_status_change().return_const(());
        host.expect_on_navigate()
            .withf(|request| request.network == Network::Ethereum && request.address == "0xcounterparty")
            .times(1)
            .return_const(());

        let mut controller =
            GraphInteractionController::new(FakeTarget::new(), host, TARGET, Network::Ethereum, &Config::default());
        controller.set_graph(graph());
        controller.handle_event(BackendEvent::NodeTap(TARGET.to_string()));
        controller.handle_event(BackendEvent::NodeTap("0xcounterparty".to_string()));
    }

    #[test]
    fn full_view_request_carries_target() {
        let mut controller = controller();
        controller.request_full_view();
        let request = &controller.host().full_views[0];
        assert_eq!(request, &NavigationRequest {
            network: Network::Ethereum,
            address: TARGET.to_string(),
        });
        assert_eq!(request.path(), format!("/address/ethereum/{TARGET}"));
    }
}

mod export_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn export_hands_png_to_host() {
        let mut controller = ready_controller();
        controller.export_image().unwrap();

        let exports = controller.target().log.borrow().exports.clone();
        assert_eq!(exports.len(), 1);
        assert_eq!(exports[0].scale, 2.0);
        assert_eq!(exports[0].background, "#131118");

        let download = &controller.host().downloads[0];
        assert_eq!(download.filename, "ethereum-0x742d...f44e-graph.png");
        assert_eq!(download.bytes, b"\x89PNG".to_vec());
    }

    #[test]
    fn export_failure_is_returned_without_download() {
        let mut backend = MockBackend::new();
        backend.expect_run_layout().returning(|_| Ok(()));
        backend
            .expect_export_image()
            .times(1)
            .returning(|_| Err(RenderError::ExportError("tainted canvas".to_string())));
        backend.expect_destroy().return_const(());

        let mut target = MockTarget::new();
        target.expect_mount().return_once(move |_| Ok(Box::new(backend)));

        let mut controller =
            GraphInteractionController::new(target, RecordingHost::default(), TARGET, Network::Ethereum, &Config::default());
        controller.set_graph(graph());

        let err = controller.export_image().unwrap_err();
        assert_eq!(err, RenderError::ExportError("tainted canvas".to_string()));
        assert!(controller.host().downloads.is_empty());
        assert_eq!(controller.status(), RenderStatus::Ready);
    }
}
