//! Styled workbook export.
//!
//! One sheet: a header row of field labels (bold white on blue, centered),
//! then one row per record (left-aligned, thin borders, alternating
//! light-blue banding). Values are written as strings; the styling carries
//! no meaning on re-import.

use std::path::Path;

use log::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};

use crate::core::records::Row;
use crate::core::schema::FieldDef;
use crate::xlsx::WorkbookResult;

const HEADER_FILL: u32 = 0x4F81BD;
const BAND_FILL: u32 = 0xE9EFF7;

/// Write `fields` + `rows` to a single-sheet workbook at `path`.
pub fn export_workbook(
    path: &Path,
    fields: &[FieldDef],
    rows: &[Row],
    sheet_name: &str,
    column_width: f64,
) -> WorkbookResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let header_format = Format::new()
        .set_font_name("Arial")
        .set_font_size(12)
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    let cell_format = Format::new()
        .set_font_name("Arial")
        .set_font_size(11)
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    let banded_format = cell_format
        .clone()
        .set_background_color(Color::RGB(BAND_FILL));

    for (col, field) in fields.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, &field.label, &header_format)?;
        worksheet.set_column_width(col as u16, column_width)?;
    }

    for (r, row) in rows.iter().enumerate() {
        // First, third, … data rows carry the banding fill.
        let format = if r % 2 == 0 {
            &banded_format
        } else {
            &cell_format
        };
        for (col, value) in row.iter().enumerate() {
            worksheet.write_string_with_format(r as u32 + 1, col as u16, value, format)?;
        }
    }

    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    info!(
        "Exported {} rows x {} columns to {}",
        rows.len(),
        fields.len(),
        path.display()
    );
    Ok(())
}
