// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property tests for placement and routing invariants (spec invariants
//! 4-9), exercised through the public crate API.

use floorplan_core::{rect_distance, rect_overlap, Bounds, ProcessedPlan, SpaceAnalysis};
use floorplan_layout::{placement, Algorithm, CancelToken, Settings};
use proptest::prelude::*;

fn empty_room(w: f64, h: f64) -> ProcessedPlan {
    let bounds = Bounds::new(0.0, 0.0, w, h);
    ProcessedPlan {
        walls: Vec::new(),
        doors: Vec::new(),
        windows: Vec::new(),
        restricted_areas: Vec::new(),
        bounds,
        space_analysis: SpaceAnalysis::compute(&bounds, &[], &[]),
    }
}

fn arb_algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Grid),
        Just(Algorithm::Spiral),
        Just(Algorithm::CornerFirst),
        Just(Algorithm::WallAligned),
        Just(Algorithm::Evolutionary),
        Just(Algorithm::Annealing),
        Just(Algorithm::Swarm),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Invariant 4: no two placed îlots ever overlap by more than
    /// `min_clearance`, for every strategy.
    #[test]
    fn placed_ilots_never_overlap(
        algorithm in arb_algorithm(),
        density in 10.0f64..90.0,
        min_clearance in 50.0f64..150.0,
        seed in any::<u64>(),
    ) {
        let plan = empty_room(12000.0, 9000.0);
        let settings = Settings::builder()
            .algorithm(algorithm)
            .density(density)
            .min_clearance(min_clearance)
            .seed(seed)
            .max_iterations(30)
            .build();

        let layout = placement::place(&plan, &settings, CancelToken::new()).unwrap();
        for i in 0..layout.ilots.len() {
            for j in (i + 1)..layout.ilots.len() {
                prop_assert!(!rect_overlap(&layout.ilots[i].rect, &layout.ilots[j].rect, settings.min_clearance));
            }
        }
    }

    /// Invariant 5: every placed îlot stays within the usable bounds,
    /// inset by `min_clearance` on every side.
    #[test]
    fn placed_ilots_respect_bounds_margin(
        algorithm in arb_algorithm(),
        density in 10.0f64..90.0,
        min_clearance in 50.0f64..150.0,
    ) {
        let plan = empty_room(12000.0, 9000.0);
        let settings = Settings::builder()
            .algorithm(algorithm)
            .density(density)
            .min_clearance(min_clearance)
            .max_iterations(30)
            .build();

        let layout = placement::place(&plan, &settings, CancelToken::new()).unwrap();
        for ilot in &layout.ilots {
            prop_assert!(plan.bounds.as_rect().contains_with_margin(&ilot.rect, settings.min_clearance));
        }
    }

    /// Invariant 7: the same seed on the same plan and settings produces a
    /// bitwise-identical layout, for the stochastic search strategies.
    #[test]
    fn same_seed_is_deterministic(
        algorithm in prop_oneof![
            Just(Algorithm::Evolutionary),
            Just(Algorithm::Annealing),
            Just(Algorithm::Swarm),
        ],
        seed in any::<u64>(),
    ) {
        let plan = empty_room(12000.0, 9000.0);
        let settings = Settings::builder().algorithm(algorithm).seed(seed).max_iterations(15).build();

        let a = placement::place(&plan, &settings, CancelToken::new()).unwrap();
        let b = placement::place(&plan, &settings, CancelToken::new()).unwrap();
        prop_assert_eq!(a.ilots, b.ilots);
    }

    /// Invariant 9: cancellation (deadline already past) never panics and
    /// always returns a layout whose placed îlots still satisfy the
    /// non-overlap and bounds-margin invariants.
    #[test]
    fn cancellation_returns_a_valid_layout(
        algorithm in prop_oneof![
            Just(Algorithm::Evolutionary),
            Just(Algorithm::Annealing),
            Just(Algorithm::Swarm),
        ],
    ) {
        let plan = empty_room(12000.0, 9000.0);
        let settings = Settings::builder().algorithm(algorithm).max_iterations(1000).build();
        let cancel = CancelToken::with_deadline(std::time::Instant::now() - std::time::Duration::from_millis(1));

        let (layout, outcome) = placement::place_ex(&plan, &settings, cancel).unwrap();
        prop_assert_eq!(outcome, floorplan_layout::PlaceOutcome::TimedOut);
        for i in 0..layout.ilots.len() {
            for j in (i + 1)..layout.ilots.len() {
                prop_assert!(!rect_overlap(&layout.ilots[i].rect, &layout.ilots[j].rect, settings.min_clearance));
            }
        }
    }
}

/// Invariant 6: every routed corridor meets the configured minimum width
/// (checked directly, not through proptest, since it only needs one
/// representative row/door configuration per width).
#[test]
fn routed_corridors_meet_min_width() {
    use floorplan_core::{Door, DoorSwing, Point, Rect};
    use floorplan_layout::{Ilot, Layout, LayoutMetrics};

    for width in [1000.0, 1200.0, 1600.0, 2000.0] {
        let plan = {
            let mut p = empty_room(10000.0, 8000.0);
            p.doors.push(Door { id: 0, center: Point::new(0.0, 4000.0), radius: 500.0, is_entrance: true, swing: DoorSwing::Left });
            p
        };
        let ilots = vec![
            Ilot::new(0, Rect::new(0.0, 0.0, 1000.0, 800.0)),
            Ilot::new(1, Rect::new(0.0, 3000.0, 1000.0, 800.0)),
        ];
        let layout = Layout { ilots, corridors: Vec::new(), metrics: LayoutMetrics::empty() };
        let layout = floorplan_layout::corridor_router::route(&plan, layout, width);
        for corridor in &layout.corridors {
            assert!(corridor.width >= width - floorplan_core::GEOMETRY_EPSILON_MM);
        }
    }
}

/// Door clearance (part of invariant 4/5's placement validity): placed
/// îlots keep at least `min_clearance` away from every door's radius.
#[test]
fn placed_ilots_keep_door_clearance() {
    use floorplan_core::{Door, DoorSwing, Point, Rect};

    let mut plan = empty_room(12000.0, 9000.0);
    plan.doors.push(Door { id: 0, center: Point::new(0.0, 4500.0), radius: 600.0, is_entrance: true, swing: DoorSwing::Left });
    let settings = Settings::builder().min_clearance(100.0).max_iterations(30).build();

    let layout = placement::place(&plan, &settings, CancelToken::new()).unwrap();
    for ilot in &layout.ilots {
        let door_point = Rect::new(plan.doors[0].center.x, plan.doors[0].center.y, 0.0, 0.0);
        assert!(rect_distance(&ilot.rect, &door_point) >= plan.doors[0].radius + settings.min_clearance);
    }
}
