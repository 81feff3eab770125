// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Corridor segment emission and post-processing (spec 4.5.2-4.5.4).

use floorplan_core::{rect_center, rect_distance, Door, Point, Rect};

use crate::corridor::{Corridor, CorridorKind};
use crate::ilot::Ilot;

use super::rows::Row;

const OVERLAP_MIN_MM: f64 = 200.0;
const DEDUP_DISTANCE_MM: f64 = 100.0;

/// Emits one horizontal corridor per adjacent row pair that clears the gap
/// and overlap thresholds (spec 4.5.2).
pub fn inter_row_corridors(rows: &[Row], corridor_width: f64, next_id: &mut u32) -> Vec<Corridor> {
    let mut out = Vec::new();
    for pair in rows.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let gap = (b.mean_y - a.mean_y).abs();
        if gap > 3.0 * corridor_width {
            continue;
        }

        let left = a.min_x.max(b.min_x);
        let right = a.max_x.min(b.max_x);
        if right - left < OVERLAP_MIN_MM {
            continue;
        }

        let y = (a.mean_y + b.mean_y) / 2.0;
        out.push(Corridor {
            id: *next_id,
            start: Point::new(left, y),
            end: Point::new(right, y),
            width: corridor_width,
            kind: CorridorKind::Horizontal,
        });
        *next_id += 1;
    }
    out
}

/// Connects each door to its nearest îlot (spec 4.5.3).
pub fn door_connections(ilots: &[Ilot], doors: &[Door], corridor_width: f64, next_id: &mut u32) -> Vec<Corridor> {
    let mut out = Vec::new();
    for door in doors {
        let door_rect = Rect::new(door.center.x, door.center.y, 0.0, 0.0);
        let nearest = ilots.iter().min_by(|a, b| {
            rect_distance(&a.rect, &door_rect)
                .partial_cmp(&rect_distance(&b.rect, &door_rect))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        if let Some(nearest) = nearest {
            out.push(Corridor {
                id: *next_id,
                start: rect_center(&nearest.rect),
                end: door.center,
                width: corridor_width,
                kind: CorridorKind::Connection,
            });
            *next_id += 1;
        }
    }
    out
}

/// Drops corridors narrower than `min_corridor_width` and deduplicates
/// corridors whose endpoints coincide within 100 mm and whose orientation
/// matches (spec 4.5.4). Reassigns sequential ids to the survivors.
pub fn dedup_and_filter(corridors: Vec<Corridor>, min_corridor_width: f64) -> Vec<Corridor> {
    let mut out: Vec<Corridor> = Vec::new();

    'candidates: for c in corridors {
        if c.width < min_corridor_width - floorplan_core::GEOMETRY_EPSILON_MM {
            continue;
        }
        for existing in &out {
            if existing.kind == c.kind && endpoints_coincide(existing, &c) {
                continue 'candidates;
            }
        }
        out.push(c);
    }

    for (i, c) in out.iter_mut().enumerate() {
        c.id = i as u32;
    }
    out
}

fn endpoints_coincide(a: &Corridor, b: &Corridor) -> bool {
    let aligned = a.start.distance_to(b.start) <= DEDUP_DISTANCE_MM && a.end.distance_to(b.end) <= DEDUP_DISTANCE_MM;
    let reversed = a.start.distance_to(b.end) <= DEDUP_DISTANCE_MM && a.end.distance_to(b.start) <= DEDUP_DISTANCE_MM;
    aligned || reversed
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan_core::DoorSwing;

    #[test]
    fn skips_row_pairs_with_insufficient_overlap() {
        let rows = vec![
            Row { mean_y: 0.0, min_x: 0.0, max_x: 500.0, members: vec![0] },
            Row { mean_y: 1000.0, min_x: 600.0, max_x: 1100.0, members: vec![1] },
        ];
        let mut next_id = 0;
        let corridors = inter_row_corridors(&rows, 1200.0, &mut next_id);
        assert!(corridors.is_empty());
    }

    #[test]
    fn emits_horizontal_corridor_for_overlapping_rows() {
        let rows = vec![
            Row { mean_y: 0.0, min_x: 0.0, max_x: 5000.0, members: vec![0] },
            Row { mean_y: 2000.0, min_x: 1000.0, max_x: 6000.0, members: vec![1] },
        ];
        let mut next_id = 0;
        let corridors = inter_row_corridors(&rows, 1200.0, &mut next_id);
        assert_eq!(corridors.len(), 1);
        assert_eq!(corridors[0].kind, CorridorKind::Horizontal);
        assert_eq!(corridors[0].start.x, 1000.0);
        assert_eq!(corridors[0].end.x, 5000.0);
    }

    #[test]
    fn connects_each_door_to_nearest_ilot() {
        let ilots = vec![
            Ilot::new(0, Rect::new(0.0, 0.0, 1000.0, 800.0)),
            Ilot::new(1, Rect::new(5000.0, 0.0, 1000.0, 800.0)),
        ];
        let doors = vec![Door {
            id: 0,
            center: Point::new(100.0, 0.0),
            radius: 500.0,
            is_entrance: true,
            swing: DoorSwing::Left,
        }];
        let mut next_id = 0;
        let corridors = door_connections(&ilots, &doors, 1200.0, &mut next_id);
        assert_eq!(corridors.len(), 1);
        assert_eq!(corridors[0].start, rect_center(&ilots[0].rect));
    }

    #[test]
    fn dedups_coincident_corridors_and_drops_narrow_ones() {
        let a = Corridor {
            id: 0,
            start: Point::new(0.0, 0.0),
            end: Point::new(1000.0, 0.0),
            width: 1200.0,
            kind: CorridorKind::Horizontal,
        };
        let b = Corridor { id: 1, ..a };
        let narrow = Corridor { id: 2, width: 500.0, kind: CorridorKind::Connection, ..a };
        let result = dedup_and_filter(vec![a, b, narrow], 1200.0);
        assert_eq!(result.len(), 1);
    }
}
