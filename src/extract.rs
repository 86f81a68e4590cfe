// src/extract.rs
// Rows of the color table -> ColorRecords -> JSON in the output field.

use crate::color::ColorRecord;
use crate::config::options::{ExtractOptions, RowPolicy};
use crate::document::{Document, RowSource};
use crate::error::{Error, Result};

/// Records pulled from the table plus the rows that didn't make it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<ColorRecord>,
    /// (row index, cell count) for each short row left out
    pub skipped: Vec<(usize, usize)>,
}

/// What a completed run wrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub records: Vec<ColorRecord>,
    pub skipped: Vec<(usize, usize)>,
    pub json: String,
}

pub fn extract_records<S: RowSource + ?Sized>(source: &S, opts: &ExtractOptions) -> Result<Extraction> {
    let rows = source.rows(&opts.table_id)?;
    logd!("table #{}: {} row(s)", opts.table_id, rows.len());

    let mut out = Extraction { records: Vec::with_capacity(rows.len()), skipped: Vec::new() };
    for (index, row) in rows.iter().enumerate() {
        match ColorRecord::from_row(row, index) {
            Ok(rec) => out.records.push(rec),
            Err(Error::MalformedRow { index, cells, expected }) if opts.row_policy == RowPolicy::Skip => {
                logw!("row {index}: {cells} cell(s), need {expected}; skipped");
                out.skipped.push((index, cells));
            }
            Err(e) => {
                loge!("row {index}: {e}");
                return Err(e);
            }
        }
    }
    Ok(out)
}

/// Compact by default, same shape a browser's `JSON.stringify` gives.
pub fn to_json(records: &[ColorRecord], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}

/// Extract, serialize and write the output field.
/// On any error the output field is left untouched.
pub fn run<D: Document + ?Sized>(doc: &mut D, opts: &ExtractOptions) -> Result<Summary> {
    let Extraction { records, skipped } = extract_records(&*doc, opts)?;
    let json = to_json(&records, opts.pretty)?;
    doc.write_output(&opts.output_id, &json)?;
    logf!(
        "wrote {} color(s) to #{} ({} bytes, {} row(s) skipped)",
        records.len(), opts.output_id, json.len(), skipped.len()
    );
    Ok(Summary { records, skipped, json })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{MemoryDocument, OutputField, Row};

    fn row(cells: &[&str]) -> Row {
        cells.iter().copied().collect()
    }

    fn doc(rows: Vec<Row>) -> MemoryDocument {
        MemoryDocument::new().with_table("default", rows).with_field("output")
    }

    #[test]
    fn empty_table_gives_empty_array() {
        let mut d = doc(vec![]);
        let sum = run(&mut d, &ExtractOptions::default()).unwrap();
        assert_eq!(sum.json, "[]");
        assert_eq!(d.read_output("output").unwrap(), "[]");
    }

    #[test]
    fn skip_policy_reports_short_rows() {
        let d = doc(vec![
            row(&["", "Red", "#FF0000", "255", "0", "0"]),
            row(&["", "Broken", "#000"]),
            row(&["", "Blue", "#0000FF", "0", "0", "255"]),
        ]);
        let ex = extract_records(&d, &ExtractOptions::default()).unwrap();
        let names: Vec<_> = ex.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["red", "blue"]);
        assert_eq!(ex.skipped, [(1, 3)]);
    }

    #[test]
    fn fail_policy_leaves_output_alone() {
        let mut d = doc(vec![row(&["", "Red", "#FF0000", "255"])]);
        let err = run(&mut d, &ExtractOptions::default().strict()).unwrap_err();
        assert!(matches!(err, Error::MalformedRow { index: 0, cells: 4, .. }));
        assert_eq!(d.read_output("output").unwrap(), "");
    }

    #[test]
    fn pretty_is_still_the_same_data() {
        let recs = vec![ColorRecord::new("Red", "#FF0000", ["255", "0", "0"])];
        let pretty = to_json(&recs, true).unwrap();
        assert!(pretty.contains('\n'));
        let back: Vec<ColorRecord> = serde_json::from_str(&pretty).unwrap();
        assert_eq!(back, recs);
    }
}
