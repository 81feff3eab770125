// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Low-level group-code line tokenizer.
//!
//! The exchange format pairs a *group code* line with a *value* line. This
//! module turns one such pair into a typed [`GroupValue`] without touching
//! the entity-assembly state machine in [`super`].

use nom::{
    character::complete::{char, digit1},
    combinator::{map_res, opt, recognize},
    sequence::tuple,
    IResult,
};

/// Parses a bare (possibly signed) integer group code, e.g. `"  10"` -> `10`.
fn signed_int(input: &str) -> IResult<&str, i32> {
    map_res(recognize(tuple((opt(char('-')), digit1))), |s: &str| {
        s.parse::<i32>()
    })(input)
}

/// Parses a group-code line into its integer code. Returns `None` if the
/// line (after trimming) isn't a bare integer.
pub fn parse_group_code(line: &str) -> Option<i32> {
    let trimmed = line.trim();
    match signed_int(trimmed) {
        Ok((rest, code)) if rest.is_empty() => Some(code),
        _ => None,
    }
}

/// Decoded value for a group code, typed according to the DXF-style group
/// code convention (string / float / integer ranges).
#[derive(Debug, Clone, PartialEq)]
pub enum GroupValue {
    Str(String),
    Float(f64),
    Int(i64),
}

/// Group codes in `[10,59]` carry doubles (coordinates, radii, angles,
/// thickness); `[60,79]` and `[90,99]` carry integers (flags, counts); every
/// other code is treated as a string.
fn code_kind(code: i32) -> CodeKind {
    match code {
        10..=59 => CodeKind::Float,
        60..=79 | 90..=99 => CodeKind::Int,
        _ => CodeKind::Str,
    }
}

enum CodeKind {
    Str,
    Float,
    Int,
}

/// Decodes a value line according to the kind implied by `code`. Malformed
/// numeric values return `None` so the caller can drop the record.
pub fn parse_value(code: i32, value_line: &str) -> Option<GroupValue> {
    let trimmed = value_line.trim_end_matches(['\r', '\n']);
    match code_kind(code) {
        CodeKind::Str => Some(GroupValue::Str(trimmed.trim().to_string())),
        CodeKind::Float => fast_float::parse::<f64, _>(trimmed.trim())
            .ok()
            .map(GroupValue::Float),
        CodeKind::Int => trimmed.trim().parse::<i64>().ok().map(GroupValue::Int),
    }
}
