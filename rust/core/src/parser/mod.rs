// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CAD Parser
//!
//! Streams a vendor-neutral ASCII group-code drawing exchange format
//! (alternating *group code* / *value* lines, grouped into
//! `SECTION`/`ENDSEC` blocks) into a flat, ordered list of [`RawEntity`].
//! Only the `ENTITIES` section is consumed; everything else is skipped.
//!
//! The parser is iterative and linear in input length: one pass over the
//! line pairs, no recursion, no unbounded lookahead.

mod tokenizer;

use crate::error::{ParseError, Result};
use std::collections::BTreeSet;
use tokenizer::{parse_group_code, parse_value, GroupValue};

/// A single raw entity lifted out of the drawing stream, before
/// classification. Each variant carries only the fields that entity kind
/// can actually have.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RawEntity {
    Line {
        layer: String,
        start: (f64, f64),
        end: (f64, f64),
        /// Explicit thickness/lineweight (group 39), if the record carried one.
        thickness: Option<f64>,
    },
    Polyline {
        layer: String,
        vertices: Vec<(f64, f64)>,
        closed: bool,
        thickness: Option<f64>,
    },
    Circle {
        layer: String,
        center: (f64, f64),
        radius: f64,
    },
    Arc {
        layer: String,
        center: (f64, f64),
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Insert {
        layer: String,
        point: (f64, f64),
    },
}

impl RawEntity {
    pub fn layer(&self) -> &str {
        match self {
            RawEntity::Line { layer, .. }
            | RawEntity::Polyline { layer, .. }
            | RawEntity::Circle { layer, .. }
            | RawEntity::Arc { layer, .. }
            | RawEntity::Insert { layer, .. } => layer,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            RawEntity::Line { .. } => "LINE",
            RawEntity::Polyline { .. } => "POLYLINE",
            RawEntity::Circle { .. } => "CIRCLE",
            RawEntity::Arc { .. } => "ARC",
            RawEntity::Insert { .. } => "INSERT",
        }
    }
}

/// Summary statistics produced alongside the entity list.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseStats {
    pub entity_count: usize,
    pub layer_set: BTreeSet<String>,
    pub types_seen: BTreeSet<String>,
}

/// Parses `bytes` and returns the surviving entities plus parse statistics.
#[tracing::instrument(skip_all)]
pub fn parse(bytes: &[u8]) -> Result<(Vec<RawEntity>, ParseStats)> {
    let content = std::str::from_utf8(bytes)
        .map_err(|_| ParseError::UnsupportedFormat("input is not valid UTF-8 text".into()))?;

    let lines: Vec<&str> = content.lines().collect();
    let mut pairs = Vec::with_capacity(lines.len() / 2);
    let mut i = 0;
    while i + 1 < lines.len() {
        match parse_group_code(lines[i]) {
            Some(code) => {
                pairs.push((code, lines[i + 1]));
                i += 2;
            }
            None => {
                // Resync one line at a time; a stray line shouldn't derail
                // the whole stream.
                i += 1;
            }
        }
    }

    if pairs.iter().all(|(code, value)| {
        !(*code == 0 && value.trim() == "SECTION")
    }) {
        return Err(ParseError::UnsupportedFormat(
            "no SECTION markers found; not a group-code drawing exchange stream".into(),
        )
        .into());
    }

    let mut entities = Vec::new();
    let mut layer_set: rustc_hash::FxHashSet<String> = rustc_hash::FxHashSet::default();
    let mut types_seen: rustc_hash::FxHashSet<String> = rustc_hash::FxHashSet::default();

    let mut current_section: Option<String> = None;
    let mut pending_section_open = false;
    let mut in_entities = false;
    let mut builder: Option<EntityBuilder> = None;
    let mut saw_entities_section = false;

    let mut idx = 0;
    while idx < pairs.len() {
        let (code, value) = pairs[idx];
        idx += 1;

        if pending_section_open {
            pending_section_open = false;
            if code == 2 {
                let name = value.trim().to_string();
                in_entities = name.eq_ignore_ascii_case("ENTITIES");
                if in_entities {
                    saw_entities_section = true;
                }
                current_section = Some(name);
            } else {
                // Malformed SECTION header; stay out of any section.
                current_section = None;
                in_entities = false;
            }
            continue;
        }

        if code == 0 {
            let value = value.trim();

            if in_entities {
                if let Some(b) = builder.take() {
                    if let Some(entity) = b.finish() {
                        types_seen.insert(entity.kind_name().to_string());
                        layer_set.insert(entity.layer().to_string());
                        entities.push(entity);
                    }
                }
            }

            match value {
                "SECTION" => pending_section_open = true,
                "ENDSEC" => {
                    current_section = None;
                    in_entities = false;
                }
                "EOF" => break,
                other => {
                    if in_entities {
                        builder = EntityBuilder::new(other);
                    }
                }
            }
            continue;
        }

        if in_entities {
            if let Some(b) = builder.as_mut() {
                b.apply(code, value);
            }
        }
    }

    // Flush a trailing entity if the stream ended mid-record inside ENTITIES.
    if in_entities {
        if let Some(b) = builder.take() {
            if let Some(entity) = b.finish() {
                types_seen.insert(entity.kind_name().to_string());
                layer_set.insert(entity.layer().to_string());
                entities.push(entity);
            }
        }
    }

    if current_section.is_some() || pending_section_open {
        return Err(ParseError::Truncated.into());
    }

    if saw_entities_section && entities.is_empty() {
        return Err(ParseError::EmptyEntities.into());
    }

    if !saw_entities_section {
        return Err(ParseError::UnsupportedFormat(
            "no ENTITIES section found in input".into(),
        )
        .into());
    }

    let stats = ParseStats {
        entity_count: entities.len(),
        layer_set: layer_set.into_iter().collect(),
        types_seen: types_seen.into_iter().collect(),
    };

    tracing::debug!(entity_count = stats.entity_count, "parsed entities");

    Ok((entities, stats))
}

/// Accumulates group codes for one in-progress entity record.
struct EntityBuilder {
    kind: String,
    layer: String,
    points: Vec<(f64, f64)>,
    pending_x: Option<f64>,
    radius: Option<f64>,
    start_angle: Option<f64>,
    end_angle: Option<f64>,
    thickness: Option<f64>,
    closed_flag: i64,
    malformed: bool,
}

impl EntityBuilder {
    fn new(kind: &str) -> Option<Self> {
        let kind = kind.trim().to_ascii_uppercase();
        if !matches!(
            kind.as_str(),
            "LINE" | "LWPOLYLINE" | "POLYLINE" | "CIRCLE" | "ARC" | "INSERT"
        ) {
            return None;
        }
        Some(Self {
            kind,
            layer: "0".to_string(),
            points: Vec::new(),
            pending_x: None,
            radius: None,
            start_angle: None,
            end_angle: None,
            thickness: None,
            closed_flag: 0,
            malformed: false,
        })
    }

    fn apply(&mut self, code: i32, raw_value: &str) {
        let Some(value) = parse_value(code, raw_value) else {
            // A malformed numeric value drops the whole record, not just this field.
            self.malformed = true;
            return;
        };

        match (code, value) {
            (8, GroupValue::Str(layer)) => self.layer = layer,
            (10, GroupValue::Float(x)) => {
                if let Some(px) = self.pending_x.take() {
                    // Two consecutive 10 codes without their matching 20: keep
                    // the newer one, drop the orphan.
                    self.points.push((px, f64::NAN));
                }
                self.pending_x = Some(x);
            }
            (20, GroupValue::Float(y)) => {
                if let Some(x) = self.pending_x.take() {
                    self.points.push((x, y));
                }
            }
            (11, GroupValue::Float(x)) => self.pending_x = Some(x),
            (21, GroupValue::Float(y)) => {
                if let Some(x) = self.pending_x.take() {
                    self.points.push((x, y));
                }
            }
            (40, GroupValue::Float(r)) => self.radius = Some(r),
            (50, GroupValue::Float(a)) => self.start_angle = Some(a),
            (51, GroupValue::Float(a)) => self.end_angle = Some(a),
            (39, GroupValue::Float(t)) => self.thickness = Some(t),
            (70, GroupValue::Int(flag)) => self.closed_flag = flag,
            _ => {}
        }
    }

    fn finish(self) -> Option<RawEntity> {
        if self.malformed {
            return None;
        }

        let points: Vec<(f64, f64)> = self
            .points
            .into_iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();

        match self.kind.as_str() {
            "LINE" => {
                if points.len() < 2 {
                    return None;
                }
                Some(RawEntity::Line {
                    layer: self.layer,
                    start: points[0],
                    end: points[1],
                    thickness: self.thickness,
                })
            }
            "LWPOLYLINE" | "POLYLINE" => {
                if points.len() < 2 {
                    return None;
                }
                Some(RawEntity::Polyline {
                    layer: self.layer,
                    vertices: points,
                    closed: self.closed_flag & 0x1 != 0,
                    thickness: self.thickness,
                })
            }
            "CIRCLE" => {
                let center = *points.first()?;
                let radius = self.radius?;
                Some(RawEntity::Circle {
                    layer: self.layer,
                    center,
                    radius,
                })
            }
            "ARC" => {
                let center = *points.first()?;
                let radius = self.radius?;
                Some(RawEntity::Arc {
                    layer: self.layer,
                    center,
                    radius,
                    start_angle: self.start_angle.unwrap_or(0.0),
                    end_angle: self.end_angle.unwrap_or(0.0),
                })
            }
            "INSERT" => {
                let point = *points.first()?;
                Some(RawEntity::Insert {
                    layer: self.layer,
                    point,
                })
            }
            _ => None,
        }
    }
}
