//! Invariants over arbitrary trigger sequences

use folio_view::{
    MemoryLocation, NullSurface, PrimaryView, ProjectPayload, Region, ScrollMetrics,
    TransitionController, Trigger, UrlState, ViewConfig, ESCAPE_KEY,
};
use proptest::prelude::*;

fn region() -> impl Strategy<Value = Region> {
    prop_oneof![Just(Region::Home), Just(Region::Projects), Just(Region::About)]
}

fn metrics() -> impl Strategy<Value = ScrollMetrics> {
    prop_oneof![
        Just(ScrollMetrics::new(0.0, 2000.0, 800.0)),
        Just(ScrollMetrics::new(600.0, 2000.0, 800.0)),
        Just(ScrollMetrics::new(1200.0, 2000.0, 800.0)),
    ]
}

fn trigger() -> impl Strategy<Value = Trigger> {
    prop_oneof![
        Just(Trigger::OpenProjects),
        Just(Trigger::OpenAbout),
        (0u8..4).prop_map(|n| {
            Trigger::SelectProject(ProjectPayload::with_id(format!("card-{}", n)))
        }),
        Just(Trigger::CloseOverlay),
        Just(Trigger::KeyPress(ESCAPE_KEY.to_string())),
        Just(Trigger::KeyPress("a".to_string())),
        Just(Trigger::BackgroundClick),
        (region(), -200.0f64..200.0, metrics(), 0.0f64..10_000.0).prop_map(
            |(region, delta_y, metrics, now_ms)| Trigger::Wheel {
                region,
                delta_y,
                metrics,
                now_ms,
            }
        ),
    ]
}

fn controller(cooldown: f64) -> TransitionController<MemoryLocation, NullSurface> {
    let url = MemoryLocation::new("https://folio.test/").unwrap();
    let config = ViewConfig {
        boundary_cooldown_ms: cooldown,
        ..Default::default()
    };
    TransitionController::new(url, NullSurface, config)
}

proptest! {
    /// The address bar always mirrors the view state
    #[test]
    fn url_agrees_with_state(
        triggers in prop::collection::vec(trigger(), 0..40),
        cooldown in prop_oneof![Just(0.0), Just(400.0)],
    ) {
        let mut c = controller(cooldown);
        c.load(&Vec::<ProjectPayload>::new());

        for t in triggers {
            c.handle(t);
            let state = c.state().clone();
            let view = c.url().read("");
            let project = c.url().read("project");

            match &state.overlay {
                Some(payload) => {
                    prop_assert_eq!(view, None);
                    prop_assert_eq!(project.as_deref(), Some(payload.id.as_str()));
                }
                None => {
                    prop_assert_eq!(view.as_deref(), state.primary.param());
                    prop_assert_eq!(project, None);
                }
            }
            prop_assert_eq!(c.flags().overlay_visible, state.overlay_open());
            if state.overlay_open() {
                prop_assert_eq!(state.primary, PrimaryView::Projects);
            }
            prop_assert_eq!(
                c.flags().scroll_locked,
                state.effective_primary() != PrimaryView::Home
            );
        }
    }

    /// Background click twice equals background click once
    #[test]
    fn close_all_idempotent(triggers in prop::collection::vec(trigger(), 0..20)) {
        let mut c = controller(0.0);
        for t in triggers {
            c.handle(t);
        }
        c.handle(Trigger::BackgroundClick);
        let once = (c.state().clone(), c.url().href().to_string());
        let outcome = c.handle(Trigger::BackgroundClick);
        prop_assert!(!outcome.changed());
        prop_assert_eq!((c.state().clone(), c.url().href().to_string()), once);
    }

    /// Interior scroll positions never navigate
    #[test]
    fn interior_wheel_is_inert(
        region in region(),
        delta_y in -200.0f64..200.0,
        now_ms in 0.0f64..10_000.0,
    ) {
        let mut c = controller(0.0);
        c.handle(match region {
            Region::Home => Trigger::BackgroundClick,
            Region::Projects => Trigger::OpenProjects,
            Region::About => Trigger::OpenAbout,
        });
        let before = c.state().clone();
        let outcome = c.handle(Trigger::Wheel {
            region,
            delta_y,
            metrics: ScrollMetrics::new(600.0, 2000.0, 800.0),
            now_ms,
        });
        prop_assert!(outcome.is_ignored());
        prop_assert_eq!(c.state(), &before);
    }
}
