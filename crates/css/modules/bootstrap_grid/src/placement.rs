//! Row placement arithmetic for same-sized grid items.
//!
//! Items of span `s` fill a row of `total_columns` in groups of
//! `total_columns / s`. The first item of a row receives an offset that
//! centers the row: half the columns left over by the division, plus half of
//! the space left empty when the row is the last, partial one.

use crate::error::{GridError, GridResult};
use crate::types::RowContext;

/// Where an item falls within its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPlacement {
    /// How many items of this span fit in one row
    pub items_per_row: u64,
    /// Zero-based position of the item within its row
    pub position_in_row: u64,
    /// Offset in half columns, before rounding
    pub doubled_offset: u64,
}

impl RowPlacement {
    /// Whether the item opens a new row.
    pub const fn starts_row(&self) -> bool {
        self.position_in_row == 0
    }

    /// Offset in whole columns, rounding halves away from zero.
    pub const fn offset_columns(&self) -> u64 {
        round_half_away_from_zero(self.doubled_offset)
    }
}

/// Round `doubled / 2` to the nearest integer, ties away from zero.
///
/// Offsets are never negative, so this is the same as rounding ties up.
pub const fn round_half_away_from_zero(doubled: u64) -> u64 {
    doubled.div_ceil(2)
}

/// Place one item of `span` columns within a grid of `total_columns`.
///
/// # Errors
/// Returns [`GridError::InvalidArgument`] when `span` is zero, when the span
/// is wider than the grid (no item fits a row), or when the row context is too
/// large for the offset arithmetic.
pub fn place_in_row(total_columns: u32, span: u32, row: RowContext) -> GridResult<RowPlacement> {
    if total_columns == 0 {
        return Err(GridError::invalid(
            "total_columns",
            "grid must have at least one column",
        ));
    }
    if span == 0 {
        return Err(GridError::invalid("span", "span must be positive"));
    }

    let total = u64::from(total_columns);
    let span_columns = u64::from(span);
    let items_per_row = total / span_columns;
    if items_per_row == 0 {
        return Err(GridError::invalid(
            "span",
            format!("span {span} is wider than the {total_columns}-column grid"),
        ));
    }

    let index = to_u64(row.index, "index")?;
    let item_count = to_u64(row.item_count, "item_count")?;
    let position_in_row = index % items_per_row;

    let mut doubled_offset = 0;
    if position_in_row == 0 {
        // Columns the row cannot use, split evenly on both sides.
        doubled_offset = total % span_columns;

        let filled = index
            .checked_add(items_per_row)
            .ok_or_else(|| GridError::invalid("index", "index overflows the row arithmetic"))?;

        // Last row is short: shift it right by half of the missing items.
        if filled > item_count {
            let missing_columns = (filled - item_count)
                .checked_mul(span_columns)
                .and_then(|columns| columns.checked_add(doubled_offset))
                .ok_or_else(|| {
                    GridError::invalid("item_count", "row context overflows the offset arithmetic")
                })?;
            doubled_offset = missing_columns;
        }
    }

    tracing::debug!(
        "place_in_row: total={total_columns}, span={span}, index={index}, count={item_count}, \
         items_per_row={items_per_row}, position={position_in_row}, doubled_offset={doubled_offset}"
    );

    Ok(RowPlacement {
        items_per_row,
        position_in_row,
        doubled_offset,
    })
}

fn to_u64(value: usize, parameter: &'static str) -> GridResult<u64> {
    u64::try_from(value).map_err(|_| GridError::invalid(parameter, "value does not fit in 64 bits"))
}
