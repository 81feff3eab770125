// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Classifier & Analyzer
//!
//! Lifts the flat [`RawEntity`](crate::parser::RawEntity) list produced by
//! [`parser`](crate::parser) into the typed domain model: walls, doors,
//! windows, restricted areas, drawing bounds, and [`SpaceAnalysis`].
//!
//! Pure function, no state carried between calls.

mod keywords;

use crate::error::{ClassifyError, Result};
use crate::geometry::{Bounds, Point, Rect, Segment};
use crate::model::{
    Door, DoorSwing, ProcessedPlan, RestrictedArea, SpaceAnalysis, Wall, Window,
};
use crate::parser::RawEntity;

const MIN_WALL_LENGTH_MM: f64 = 10.0;
const DOOR_RADIUS_MIN_MM: f64 = 400.0;
const DOOR_RADIUS_MAX_MM: f64 = 1200.0;
const WINDOW_THICKNESS_MAX_MM: f64 = 50.0;
const WINDOW_AREA_MIN_M2: f64 = 0.1;
const WINDOW_AREA_MAX_M2: f64 = 5.0;
const RESTRICTED_AREA_MIN_M2: f64 = 1.0;

/// Lifts raw parsed entities into a fully classified, analyzed plan.
#[tracing::instrument(skip_all)]
pub fn classify(entities: &[RawEntity]) -> Result<ProcessedPlan> {
    let mut walls = Vec::new();
    let mut doors = Vec::new();
    let mut windows = Vec::new();
    let mut restricted_areas = Vec::new();

    let mut wall_id = 0u32;
    let mut door_id = 0u32;
    let mut window_id = 0u32;
    let mut restricted_id = 0u32;

    for entity in entities {
        let layer = entity.layer();

        if let Some((segs, entity_thickness)) = classify_wall_segments(entity, layer) {
            let thickness = entity_thickness.unwrap_or_else(|| keywords::default_wall_thickness_mm(layer));
            for segment in segs {
                walls.push(Wall {
                    id: wall_id,
                    segment,
                    thickness,
                    layer: Some(layer.to_string()),
                });
                wall_id += 1;
            }
            continue;
        }

        if let Some((center, radius, swing)) = classify_door(entity, layer) {
            if (DOOR_RADIUS_MIN_MM..=DOOR_RADIUS_MAX_MM).contains(&radius) {
                doors.push(Door {
                    id: door_id,
                    center,
                    radius,
                    is_entrance: keywords::layer_contains_any(layer, keywords::ENTRANCE_KEYWORDS),
                    swing,
                });
                door_id += 1;
            }
            continue;
        }

        if let Some(bounds) = classify_window(entity, layer) {
            let rect = bounds.as_rect();
            let area = rect.area_m2();
            if (WINDOW_AREA_MIN_M2..=WINDOW_AREA_MAX_M2).contains(&area) {
                windows.push(Window {
                    id: window_id,
                    bounds: rect,
                });
                window_id += 1;
            }
            continue;
        }

        if let Some(bounds) = classify_restricted(entity, layer) {
            let rect = bounds.as_rect();
            if rect.area_m2() >= RESTRICTED_AREA_MIN_M2 {
                restricted_areas.push(RestrictedArea {
                    id: restricted_id,
                    bounds: rect,
                    category: keywords::restricted_category(layer),
                });
                restricted_id += 1;
            }
            continue;
        }
    }

    if walls.is_empty() && doors.is_empty() && windows.is_empty() && restricted_areas.is_empty() {
        return Err(ClassifyError::NoGeometry.into());
    }
    if walls.is_empty() {
        return Err(ClassifyError::NoWalls.into());
    }

    let mut points: Vec<Point> = Vec::new();
    for w in &walls {
        points.push(w.segment.start);
        points.push(w.segment.end);
    }
    for d in &doors {
        points.push(d.center);
    }
    for win in &windows {
        points.push(Point::new(win.bounds.min_x(), win.bounds.min_y()));
        points.push(Point::new(win.bounds.max_x(), win.bounds.max_y()));
    }
    for r in &restricted_areas {
        points.push(Point::new(r.bounds.min_x(), r.bounds.min_y()));
        points.push(Point::new(r.bounds.max_x(), r.bounds.max_y()));
    }

    let bounds = Bounds::from_points(points).ok_or(ClassifyError::NoGeometry)?;
    if bounds.is_degenerate() {
        return Err(ClassifyError::DegenerateBounds.into());
    }

    let space_analysis = SpaceAnalysis::compute(&bounds, &walls, &restricted_areas);

    tracing::debug!(
        walls = walls.len(),
        doors = doors.len(),
        windows = windows.len(),
        restricted = restricted_areas.len(),
        "classified plan"
    );

    Ok(ProcessedPlan {
        walls,
        doors,
        windows,
        restricted_areas,
        bounds,
        space_analysis,
    })
}

/// Wall rule only fires for Line/Polyline entities whose layer matches the
/// wall keyword table, or whose layer is the bare default `"0"`. A polyline
/// is decomposed into its consecutive 2-point segments. Returns the
/// entity's own explicit thickness (group code 39) alongside the segments,
/// since it takes precedence over the per-layer default (spec 4.3).
fn classify_wall_segments(entity: &RawEntity, layer: &str) -> Option<(Vec<Segment>, Option<f64>)> {
    let is_wall_layer = keywords::layer_contains_any(layer, keywords::WALL_KEYWORDS) || layer == "0";
    if !is_wall_layer {
        return None;
    }

    let (raw_segments, thickness): (Vec<Segment>, Option<f64>) = match entity {
        RawEntity::Line { start, end, thickness, .. } => {
            (vec![Segment::new(Point::new(start.0, start.1), Point::new(end.0, end.1))], *thickness)
        }
        RawEntity::Polyline { vertices, closed, thickness, .. } => {
            let mut segs = Vec::with_capacity(vertices.len());
            for pair in vertices.windows(2) {
                segs.push(Segment::new(
                    Point::new(pair[0].0, pair[0].1),
                    Point::new(pair[1].0, pair[1].1),
                ));
            }
            if *closed && vertices.len() > 2 {
                let first = vertices[0];
                let last = *vertices.last().unwrap();
                segs.push(Segment::new(
                    Point::new(last.0, last.1),
                    Point::new(first.0, first.1),
                ));
            }
            (segs, *thickness)
        }
        _ => return None,
    };

    let kept: Vec<Segment> = raw_segments
        .into_iter()
        .filter(|s| crate::geometry::segment_length(s) > MIN_WALL_LENGTH_MM)
        .collect();

    if kept.is_empty() {
        None
    } else {
        Some((kept, thickness))
    }
}

/// Door rule: an ARC in the accepted radius band classifies on geometry
/// alone; every other entity kind classifies only via the door keyword
/// table on its layer. Radius-band acceptance is checked by the caller.
fn classify_door(entity: &RawEntity, layer: &str) -> Option<(Point, f64, DoorSwing)> {
    let keyword_match = keywords::layer_contains_any(layer, keywords::DOOR_KEYWORDS);

    match entity {
        RawEntity::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            ..
        } => {
            let radius_in_band = (DOOR_RADIUS_MIN_MM..=DOOR_RADIUS_MAX_MM).contains(radius);
            if !radius_in_band && !keyword_match {
                return None;
            }
            let raw_sweep = end_angle - start_angle;
            let swing = if raw_sweep.abs() > 180.0 {
                DoorSwing::Double
            } else if raw_sweep > 0.0 {
                DoorSwing::Right
            } else {
                DoorSwing::Left
            };
            Some((Point::new(center.0, center.1), *radius, swing))
        }
        RawEntity::Circle { center, radius, .. } => {
            if !keyword_match {
                return None;
            }
            Some((Point::new(center.0, center.1), *radius, DoorSwing::Double))
        }
        RawEntity::Line { start, end, .. } => {
            if !keyword_match {
                return None;
            }
            let seg = Segment::new(Point::new(start.0, start.1), Point::new(end.0, end.1));
            let width = crate::geometry::segment_length(&seg);
            let center = Point::new((start.0 + end.0) / 2.0, (start.1 + end.1) / 2.0);
            Some((center, width / 2.0, DoorSwing::Double))
        }
        RawEntity::Polyline { vertices, .. } => {
            if !keyword_match || vertices.len() < 2 {
                return None;
            }
            let first = vertices[0];
            let last = *vertices.last().unwrap();
            let width = Point::new(first.0, first.1).distance_to(Point::new(last.0, last.1));
            let (sx, sy) = vertices.iter().fold((0.0, 0.0), |(ax, ay), (x, y)| (ax + x, ay + y));
            let n = vertices.len() as f64;
            Some((Point::new(sx / n, sy / n), width / 2.0, DoorSwing::Double))
        }
        RawEntity::Insert { point, .. } => {
            if !keyword_match {
                return None;
            }
            // No extent to derive a width from; fall back to the spec's
            // documented default door width of 800 mm.
            Some((Point::new(point.0, point.1), 400.0, DoorSwing::Double))
        }
    }
}

/// Window rule: Line/Polyline only, with an explicit thickness under the
/// threshold and a layer matching the window keyword table.
fn classify_window(entity: &RawEntity, layer: &str) -> Option<Bounds> {
    if !keywords::layer_contains_any(layer, keywords::WINDOW_KEYWORDS) {
        return None;
    }

    match entity {
        RawEntity::Line { start, end, thickness, .. } => {
            let t = (*thickness)?;
            if t >= WINDOW_THICKNESS_MAX_MM {
                return None;
            }
            Bounds::from_points([Point::new(start.0, start.1), Point::new(end.0, end.1)])
        }
        RawEntity::Polyline { vertices, thickness, .. } => {
            let t = (*thickness)?;
            if t >= WINDOW_THICKNESS_MAX_MM {
                return None;
            }
            Bounds::from_points(vertices.iter().map(|(x, y)| Point::new(*x, *y)))
        }
        _ => None,
    }
}

/// Restricted-area rule: any entity kind on a layer matching the
/// restricted keyword table. Bounds are derived from whatever extent the
/// entity kind carries; a bare point (INSERT) has zero area and is always
/// discarded downstream by the area-minimum check.
fn classify_restricted(entity: &RawEntity, layer: &str) -> Option<Bounds> {
    if !keywords::layer_contains_any(layer, keywords::RESTRICTED_KEYWORDS) {
        return None;
    }

    match entity {
        RawEntity::Line { start, end, .. } => {
            Bounds::from_points([Point::new(start.0, start.1), Point::new(end.0, end.1)])
        }
        RawEntity::Polyline { vertices, .. } => {
            Bounds::from_points(vertices.iter().map(|(x, y)| Point::new(*x, *y)))
        }
        RawEntity::Circle { center, radius, .. } | RawEntity::Arc { center, radius, .. } => {
            Some(Bounds::new(
                center.0 - radius,
                center.1 - radius,
                center.0 + radius,
                center.1 + radius,
            ))
        }
        RawEntity::Insert { point, .. } => {
            Bounds::from_points([Point::new(point.0, point.1)])
        }
    }
}
