use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader};

use super::model::{Dataset, Record};

/// Worksheet holding the input table in the xlsx template.
pub const INPUT_SHEET: &str = "Inputs";

/// Template preamble rows above the header row.
pub const HEADER_SKIP_ROWS: usize = 3;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a dataset from a file on disk.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    load_bytes(name, &bytes)
}

/// Load a dataset from raw file bytes.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` – template workbook with an `Inputs` worksheet
/// * `.csv`            – the same layout as one flat table
///
/// Both share the template shape: a fixed preamble, then a header row, then
/// data rows with identifier / primary variable / optional secondary
/// variable columns.
pub fn load_bytes(file_name: &str, bytes: &[u8]) -> Result<Dataset> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" | "xlsm" => load_xlsx(bytes),
        "csv" => load_csv(bytes),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Shared row assembly
// ---------------------------------------------------------------------------

/// One data row before the column-level checks, with its 1-based source row
/// number for error messages.
struct RawRow {
    row_no: usize,
    name: String,
    primary: Option<f64>,
    secondary: Option<f64>,
}

/// Apply the column rules shared by both formats.
///
/// The primary variable must be present in every row.  The secondary column
/// is all-or-nothing: fully blank drops the column (and its header), fully
/// populated keeps it, anything in between is a validation error rather
/// than silent NaN propagation into the clustering engine.
fn assemble(mut headers: Vec<String>, rows: Vec<RawRow>) -> Result<Dataset> {
    let mut records = Vec::with_capacity(rows.len());
    let mut blank_secondary = 0usize;

    for row in rows {
        let primary = row
            .primary
            .with_context(|| format!("row {}: primary variable is blank", row.row_no))?;
        if row.secondary.is_none() {
            blank_secondary += 1;
        }
        records.push(Record {
            name: row.name,
            primary,
            secondary: row.secondary,
        });
    }

    if records.is_empty() {
        bail!("template has no data rows below the header");
    }

    if blank_secondary == records.len() {
        // Whole column blank: the template says to leave it empty when
        // clustering on one variable only.
        headers.truncate(2);
    } else if blank_secondary > 0 {
        bail!(
            "secondary variable column is partially filled ({blank_secondary} of {} rows blank); \
             fill every row or leave the whole column blank",
            records.len()
        );
    }

    Ok(Dataset { headers, records })
}

// ---------------------------------------------------------------------------
// XLSX loader
// ---------------------------------------------------------------------------

fn load_xlsx(bytes: &[u8]) -> Result<Dataset> {
    let cursor = Cursor::new(bytes);
    let mut workbook =
        calamine::open_workbook_auto_from_rs(cursor).context("opening workbook")?;
    let range = workbook
        .worksheet_range(INPUT_SHEET)
        .with_context(|| format!("workbook has no '{INPUT_SHEET}' worksheet"))?;

    // The used range can start below A1 when the preamble rows are blank.
    let start_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);
    let skip = HEADER_SKIP_ROWS.saturating_sub(start_row);

    let mut rows = range.rows().skip(skip);
    let header = rows.next().context("template has no header row")?;
    let headers: Vec<String> = (0..3).map(|c| cell_text(header.get(c))).collect();

    let mut raw = Vec::new();
    for (offset, row) in rows.enumerate() {
        // 1-based worksheet row, for error messages.
        let row_no = start_row + skip + offset + 2;
        let name = cell_text(row.first());
        let primary = cell_number(row.get(1))
            .with_context(|| format!("row {row_no}: primary variable"))?;
        let secondary = cell_number(row.get(2))
            .with_context(|| format!("row {row_no}: secondary variable"))?;

        if name.is_empty() && primary.is_none() && secondary.is_none() {
            continue; // trailing blank template row
        }
        raw.push(RawRow {
            row_no,
            name,
            primary,
            secondary,
        });
    }

    assemble(headers, raw)
}

/// Cell contents as display text; blank cells become the empty string.
fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.trim().to_string(),
        Some(Data::Float(f)) => f.to_string(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Bool(b)) => b.to_string(),
        Some(Data::DateTime(dt)) => dt.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Numeric cell contents; `None` when blank.
fn cell_number(cell: Option<&Data>) -> Result<Option<f64>> {
    match cell {
        None | Some(Data::Empty) => Ok(None),
        Some(Data::Float(f)) => Ok(Some(*f)),
        Some(Data::Int(i)) => Ok(Some(*i as f64)),
        Some(Data::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Data::String(s)) => {
            let value = s
                .trim()
                .parse::<f64>()
                .with_context(|| format!("'{}' is not a number", s.trim()))?;
            Ok(Some(value))
        }
        Some(other) => bail!("'{other}' is not a number"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout mirrors the worksheet: the same preamble rows, then the
/// header row, then `identifier,primary,secondary` data rows.
///
/// The csv crate silently drops fully empty lines, so the preamble skip
/// goes by each record's physical line number rather than by yielded
/// records; a hand-written template whose blank preamble rows have no
/// commas still parses the same as the worksheet.
fn load_csv(bytes: &[u8]) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut lines = Vec::new();
    for result in reader.records() {
        let record = result.context("reading csv input")?;
        let line = record
            .position()
            .map_or(lines.len() + 1, |p| p.line() as usize);
        lines.push((line, record));
    }

    let mut iter = lines
        .into_iter()
        .skip_while(|(line, _)| *line <= HEADER_SKIP_ROWS);
    let (_, header) = iter.next().context("template has no header row")?;
    let headers: Vec<String> = (0..3)
        .map(|c| header.get(c).unwrap_or("").trim().to_string())
        .collect();

    let mut raw = Vec::new();
    for (row_no, record) in iter {
        let name = record.get(0).unwrap_or("").trim().to_string();
        let primary = field_number(record.get(1))
            .with_context(|| format!("row {row_no}: primary variable"))?;
        let secondary = field_number(record.get(2))
            .with_context(|| format!("row {row_no}: secondary variable"))?;

        if name.is_empty() && primary.is_none() && secondary.is_none() {
            continue;
        }
        raw.push(RawRow {
            row_no,
            name,
            primary,
            secondary,
        });
    }

    assemble(headers, raw)
}

/// Numeric CSV field; `None` when blank.
fn field_number(field: Option<&str>) -> Result<Option<f64>> {
    let text = field.unwrap_or("").trim();
    if text.is_empty() {
        return Ok(None);
    }
    let value = text
        .parse::<f64>()
        .with_context(|| format!("'{text}' is not a number"))?;
    Ok(Some(value))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
