//! Spreadsheet output for ranked listings.

use std::path::Path;

use anyhow::Context;
use rust_xlsxwriter::{Color, ConditionalFormat3ColorScale, Format, Workbook};

use carscan_core::{Cell, NormalizedListing, REPORT_COLUMNS};

const SHEET_NAME: &str = "Cars";

const GREEN: u32 = 0x0063_BE7B;
const AMBER: u32 = 0x00FF_DC81;
const RED: u32 = 0x00F9_6A6C;

// Data rows 2..=1000 in spreadsheet terms.
const SCALE_FIRST_ROW: u32 = 1;
const SCALE_LAST_ROW: u32 = 999;

/// Columns shaded low=green, high=red: price, mileage, miles per year.
const LOW_IS_GOOD: [u16; 3] = [2, 4, 5];
/// Columns shaded low=red, high=green: year.
const HIGH_IS_GOOD: [u16; 1] = [3];

/// Writes `listings` to `path` as an xlsx workbook, one row per listing.
///
/// # Errors
///
/// Returns an error if the workbook cannot be built or saved.
pub(crate) fn write_report(listings: &[NormalizedListing], path: &Path) -> anyhow::Result<()> {
    let mut workbook = build_workbook(listings)?;
    workbook
        .save(path)
        .with_context(|| format!("failed to save report to {}", path.display()))?;
    tracing::info!(rows = listings.len(), path = %path.display(), "report written");
    Ok(())
}

fn build_workbook(listings: &[NormalizedListing]) -> anyhow::Result<Workbook> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold();
    for (col, title) in REPORT_COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, u16::try_from(col)?, *title, &header)?;
    }

    for (index, listing) in listings.iter().enumerate() {
        let row = u32::try_from(index + 1)?;
        for (col, cell) in listing.to_row().into_iter().enumerate() {
            let col = u16::try_from(col)?;
            match cell {
                Cell::Text(text) => {
                    sheet.write_string(row, col, text)?;
                }
                Cell::Number(n) => {
                    sheet.write_number(row, col, n)?;
                }
                Cell::Empty => {}
            }
        }
    }

    let low_is_good = color_scale(GREEN, RED);
    for col in LOW_IS_GOOD {
        sheet.add_conditional_format(SCALE_FIRST_ROW, col, SCALE_LAST_ROW, col, &low_is_good)?;
    }
    let high_is_good = color_scale(RED, GREEN);
    for col in HIGH_IS_GOOD {
        sheet.add_conditional_format(SCALE_FIRST_ROW, col, SCALE_LAST_ROW, col, &high_is_good)?;
    }

    Ok(workbook)
}

fn color_scale(min: u32, max: u32) -> ConditionalFormat3ColorScale {
    ConditionalFormat3ColorScale::new()
        .set_minimum_color(Color::RGB(min))
        .set_midpoint_color(Color::RGB(AMBER))
        .set_maximum_color(Color::RGB(max))
}
