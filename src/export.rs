//! Result workbook serialization.

use anyhow::{Result, ensure};
use rust_xlsxwriter::Workbook;

use crate::data::model::Dataset;

/// Worksheet name in the result workbook.
pub const OUTPUT_SHEET: &str = "Outputs";

/// Header of the appended label column.
const LABEL_HEADER: &str = "Cluster";

/// Serialize the dataset plus per-row cluster labels to xlsx bytes.
///
/// The original columns and row order are preserved; labels land in one
/// appended integer column.  Stored values keep full precision (two-decimal
/// rounding is a display concern only).
pub fn write_workbook(dataset: &Dataset, labels: &[usize]) -> Result<Vec<u8>> {
    ensure!(
        labels.len() == dataset.len(),
        "got {} labels for {} rows",
        labels.len(),
        dataset.len()
    );

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(OUTPUT_SHEET)?;

    let label_col = dataset.headers.len() as u16;
    for (col, header) in dataset.headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, header)?;
    }
    worksheet.write_string(0, label_col, LABEL_HEADER)?;

    for (i, (record, &label)) in dataset.records.iter().zip(labels).enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, &record.name)?;
        worksheet.write_number(row, 1, record.primary)?;
        if let Some(secondary) = record.secondary {
            worksheet.write_number(row, 2, secondary)?;
        }
        worksheet.write_number(row, label_col, label as f64)?;
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use calamine::{Data, Reader};

    use super::*;
    use crate::data::model::Record;

    fn dataset() -> Dataset {
        Dataset {
            headers: vec!["Item".into(), "1st Variable".into()],
            records: vec![
                Record {
                    name: "a".into(),
                    primary: 1.25,
                    secondary: None,
                },
                Record {
                    name: "b".into(),
                    primary: 9.5,
                    secondary: None,
                },
            ],
        }
    }

    #[test]
    fn writes_outputs_sheet_with_label_column() {
        let bytes = write_workbook(&dataset(), &[1, 0]).unwrap();

        let mut workbook =
            calamine::open_workbook_auto_from_rs(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range(OUTPUT_SHEET).unwrap();
        let rows: Vec<_> = range.rows().collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], Data::String("Item".into()));
        assert_eq!(rows[0][1], Data::String("1st Variable".into()));
        assert_eq!(rows[0][2], Data::String("Cluster".into()));
        assert_eq!(rows[1][0], Data::String("a".into()));
        assert_eq!(rows[1][1], Data::Float(1.25));
        assert_eq!(rows[1][2], Data::Float(1.0));
        assert_eq!(rows[2][2], Data::Float(0.0));
    }

    #[test]
    fn rejects_label_count_mismatch() {
        assert!(write_workbook(&dataset(), &[0]).is_err());
    }
}
