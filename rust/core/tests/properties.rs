// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property tests for parser determinism and classifier idempotence
//! (spec invariants 1-3), exercised through the public crate API.

use floorplan_core::{classifier, parser, RawEntity};
use proptest::prelude::*;

fn wall_rect_source(x0: f64, y0: f64, w: f64, h: f64) -> String {
    let x1 = x0 + w;
    let y1 = y0 + h;
    let sides = [((x0, y0), (x1, y0)), ((x1, y0), (x1, y1)), ((x1, y1), (x0, y1)), ((x0, y1), (x0, y0))];
    let mut body = String::new();
    for (s, e) in sides {
        body.push_str(&format!("0\nLINE\n8\nWALL\n10\n{}\n20\n{}\n11\n{}\n21\n{}\n", s.0, s.1, e.0, e.1));
    }
    format!("0\nSECTION\n2\nENTITIES\n{body}0\nENDSEC\n0\nEOF\n")
}

proptest! {
    /// Invariant 1: parsing the same byte stream twice yields identical
    /// entities (the parser carries no hidden state between calls).
    #[test]
    fn parse_is_deterministic(
        x0 in -5000.0f64..5000.0,
        y0 in -5000.0f64..5000.0,
        w in 1000.0f64..20000.0,
        h in 1000.0f64..20000.0,
    ) {
        let src = wall_rect_source(x0, y0, w, h);
        let (first, _) = parser::parse(src.as_bytes()).unwrap();
        let (second, _) = parser::parse(src.as_bytes()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Invariant 2: classifying the same entity list twice yields the same
    /// plan (no state leaks between or within calls).
    #[test]
    fn classify_is_deterministic(
        x0 in -5000.0f64..5000.0,
        y0 in -5000.0f64..5000.0,
        w in 1000.0f64..20000.0,
        h in 1000.0f64..20000.0,
    ) {
        let src = wall_rect_source(x0, y0, w, h);
        let (entities, _) = parser::parse(src.as_bytes()).unwrap();
        let first = classifier::classify(&entities).unwrap();
        let second = classifier::classify(&entities).unwrap();
        prop_assert_eq!(first.walls.len(), second.walls.len());
        prop_assert_eq!(first.bounds, second.bounds);
        prop_assert_eq!(first.space_analysis.total_area, second.space_analysis.total_area);
    }

    /// Invariant 3: the drawing bounds computed by the classifier always
    /// contain every wall endpoint that fed them.
    #[test]
    fn bounds_contain_every_wall_endpoint(
        x0 in -5000.0f64..5000.0,
        y0 in -5000.0f64..5000.0,
        w in 1000.0f64..20000.0,
        h in 1000.0f64..20000.0,
    ) {
        let src = wall_rect_source(x0, y0, w, h);
        let (entities, _) = parser::parse(src.as_bytes()).unwrap();
        let plan = classifier::classify(&entities).unwrap();
        for wall in &plan.walls {
            for p in [wall.segment.start, wall.segment.end] {
                prop_assert!(p.x >= plan.bounds.min_x - 1e-6 && p.x <= plan.bounds.max_x + 1e-6);
                prop_assert!(p.y >= plan.bounds.min_y - 1e-6 && p.y <= plan.bounds.max_y + 1e-6);
            }
        }
        // usable area never exceeds the drawing's total footprint.
        prop_assert!(plan.space_analysis.usable_area <= plan.space_analysis.total_area + 1e-6);
    }

    /// A standalone `INSERT` never contributes a restricted area: a bare
    /// point carries no extent, so it's always below the area minimum.
    #[test]
    fn insert_alone_never_becomes_restricted_area(
        x in -5000.0f64..5000.0,
        y in -5000.0f64..5000.0,
    ) {
        let mut entities = vec![
            RawEntity::Line { layer: "WALL".into(), start: (0.0, 0.0), end: (10000.0, 0.0), thickness: None },
            RawEntity::Line { layer: "WALL".into(), start: (10000.0, 0.0), end: (10000.0, 8000.0), thickness: None },
            RawEntity::Line { layer: "WALL".into(), start: (10000.0, 8000.0), end: (0.0, 8000.0), thickness: None },
            RawEntity::Line { layer: "WALL".into(), start: (0.0, 8000.0), end: (0.0, 0.0), thickness: None },
        ];
        entities.push(RawEntity::Insert { layer: "RESTRICTED".into(), point: (x, y) });
        let plan = classifier::classify(&entities).unwrap();
        prop_assert!(plan.restricted_areas.is_empty());
    }
}
