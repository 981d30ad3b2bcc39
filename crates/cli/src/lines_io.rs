//! Line tables on disk: columns `x1,y1,x2,y2`, one row per line.
//!
//! CSV and Parquet are read through polars; integer columns (pixel clicks)
//! are cast to `f64`. Writing always produces CSV.

use anyhow::{bail, Context, Result};
use envelope::api::{nudge_vertical, Line};
use envelope::prelude::Vec2;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

pub const COLUMNS: [&str; 4] = ["x1", "y1", "x2", "y2"];

/// Read raw point pairs `[x1, y1, x2, y2]` from a CSV or Parquet table.
pub fn read_line_table(path: &Path) -> Result<Vec<[f64; 4]>> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("scanning {}", path.display()))?,
        Some("csv") => LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("reading {}", path.display()))?,
        _ => bail!("unsupported line table {} (want .csv or .parquet)", path.display()),
    };
    let df = lf
        .select(COLUMNS.map(|c| col(c).cast(DataType::Float64)))
        .collect()
        .with_context(|| format!("selecting {:?} from {}", COLUMNS, path.display()))?;

    let mut cols = Vec::with_capacity(COLUMNS.len());
    for name in COLUMNS {
        let ca = df.column(name)?.f64()?.clone();
        cols.push(ca);
    }
    let mut rows = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let mut vals = [0.0; 4];
        for (k, ca) in cols.iter().enumerate() {
            vals[k] = ca
                .get(row)
                .with_context(|| format!("row {row}: missing {}", COLUMNS[k]))?;
        }
        rows.push(vals);
    }
    tracing::info!(path = %path.display(), rows = rows.len(), "line_table_read");
    Ok(rows)
}

/// Build lines from raw rows. With `nudge`, vertical pairs get `x2 += nudge`;
/// without it they are rejected with the row number.
pub fn build_lines(rows: &[[f64; 4]], nudge: Option<f64>) -> Result<Vec<Line>> {
    rows.iter()
        .enumerate()
        .map(|(row, &[x1, y1, x2, y2])| {
            let p1 = Vec2::new(x1, y1);
            let mut p2 = Vec2::new(x2, y2);
            if let Some(dx) = nudge {
                p2 = nudge_vertical(p1, p2, dx);
            }
            Line::new(p1, p2).with_context(|| format!("row {row}"))
        })
        .collect()
}

/// Write lines as a CSV table of their defining points.
pub fn write_line_table(path: &Path, lines: &[Line]) -> Result<()> {
    let pick = |f: fn(&Line) -> f64| lines.iter().map(f).collect::<Vec<f64>>();
    let mut df = df!(
        "x1" => pick(|l| l.p1().x),
        "y1" => pick(|l| l.p1().y),
        "x2" => pick(|l| l.p2().x),
        "y2" => pick(|l| l.p2().y)
    )?;
    crate::ensure_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = lines.len(), "line_table_written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_integer_click_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lines.csv");
        fs::write(&path, "x1,y1,x2,y2\n0,0,10,10\n5,100,6,90\n").unwrap();
        let rows = read_line_table(&path).unwrap();
        assert_eq!(rows, vec![[0.0, 0.0, 10.0, 10.0], [5.0, 100.0, 6.0, 90.0]]);
    }

    #[test]
    fn vertical_rows_need_nudge() {
        let rows = [[3.0, 1.0, 3.0, 4.0]];
        let err = build_lines(&rows, None).unwrap_err();
        assert!(format!("{err:#}").contains("row 0"));
        let lines = build_lines(&rows, Some(3.0)).unwrap();
        assert_eq!(lines[0].p2().x, 6.0);
        assert!((lines[0].slope() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn written_table_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/lines.csv");
        let lines = build_lines(&[[0.0, 1.0, 2.0, 5.0], [1.0, 1.0, 4.0, -2.0]], None).unwrap();
        write_line_table(&path, &lines).unwrap();
        let back = build_lines(&read_line_table(&path).unwrap(), None).unwrap();
        assert_eq!(back, lines);
    }

    #[test]
    fn reads_parquet_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lines.parquet");
        let mut df = df!(
            "x1" => [0i64, 5],
            "y1" => [0i64, 100],
            "x2" => [10.0f64, 6.0],
            "y2" => [10.0f64, 90.0]
        )
        .unwrap();
        let mut file = File::create(&path).unwrap();
        ParquetWriter::new(&mut file).finish(&mut df).unwrap();
        drop(file);

        let rows = read_line_table(&path).unwrap();
        assert_eq!(rows, vec![[0.0, 0.0, 10.0, 10.0], [5.0, 100.0, 6.0, 90.0]]);
        let lines = build_lines(&rows, None).unwrap();
        assert!((lines[0].slope() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(read_line_table(Path::new("lines.txt")).is_err());
    }
}
