// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Row grouping (spec 4.5.1): partitions îlots by Y-center into rows with a
//! 200 mm cohesion threshold.

use floorplan_core::rect_center;

use crate::ilot::Ilot;

const ROW_COHESION_MM: f64 = 200.0;

/// One row of îlots sharing roughly the same Y-center.
#[derive(Debug, Clone)]
pub struct Row {
    pub mean_y: f64,
    pub min_x: f64,
    pub max_x: f64,
    pub members: Vec<u32>,
}

/// Groups `ilots` into rows, each member joining whichever existing row's
/// `mean_y` is closest if within [`ROW_COHESION_MM`], else starting a new
/// row. Returned rows are sorted by `mean_y` ascending.
pub fn group_rows(ilots: &[Ilot]) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();

    for ilot in ilots {
        let center = rect_center(&ilot.rect);

        let closest = rows
            .iter_mut()
            .min_by(|a, b| {
                (a.mean_y - center.y)
                    .abs()
                    .partial_cmp(&(b.mean_y - center.y).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .filter(|row| (row.mean_y - center.y).abs() <= ROW_COHESION_MM);

        match closest {
            Some(row) => {
                let n = row.members.len() as f64;
                row.mean_y = (row.mean_y * n + center.y) / (n + 1.0);
                row.min_x = row.min_x.min(ilot.rect.min_x());
                row.max_x = row.max_x.max(ilot.rect.max_x());
                row.members.push(ilot.id);
            }
            None => rows.push(Row {
                mean_y: center.y,
                min_x: ilot.rect.min_x(),
                max_x: ilot.rect.max_x(),
                members: vec![ilot.id],
            }),
        }
    }

    rows.sort_by(|a, b| a.mean_y.partial_cmp(&b.mean_y).unwrap_or(std::cmp::Ordering::Equal));
    rows
}
