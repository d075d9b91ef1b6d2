use std::fmt;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use nalgebra::Vector2;

use crate::geom2::Point;

#[derive(Debug)]
pub enum PointsIoError {
    Io(std::io::Error),
    Csv(csv::Error),
    /// `line` is 1-based.
    Parse {
        line: u64,
        field: usize,
        value: String,
    },
}

impl fmt::Display for PointsIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "points i/o: {e}"),
            Self::Csv(e) => write!(f, "points csv: {e}"),
            Self::Parse { line, field, value } => {
                write!(f, "line {line}, field {field}: not a number: {value:?}")
            }
        }
    }
}

impl std::error::Error for PointsIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            Self::Parse { .. } => None,
        }
    }
}

impl From<std::io::Error> for PointsIoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for PointsIoError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

/// Read `x,y` rows from a file.
pub fn read_points_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, PointsIoError> {
    let file = std::fs::File::open(path)?;
    parse_points_csv(file)
}

/// Parse `x,y` rows. Blank rows and rows with fewer than two fields are
/// skipped; extra fields are ignored.
pub fn parse_points_csv<R: Read>(reader: R) -> Result<Vec<Point>, PointsIoError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let mut points = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        if record.len() < 2 {
            continue;
        }
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(row as u64 + 1);
        let x = parse_field(&record, line, 0)?;
        let y = parse_field(&record, line, 1)?;
        points.push(Vector2::new(x, y));
    }
    Ok(points)
}

fn parse_field(record: &StringRecord, line: u64, field: usize) -> Result<f64, PointsIoError> {
    let raw = record.get(field).unwrap_or_default();
    raw.parse::<f64>().map_err(|_| PointsIoError::Parse {
        line,
        field,
        value: raw.to_string(),
    })
}

/// Write `x,y` rows. With `close_ring`, an open ring gets its first point
/// repeated at the end.
pub fn write_points_csv<P: AsRef<Path>>(
    path: P,
    points: &[Point],
    close_ring: bool,
) -> Result<(), PointsIoError> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;
    for p in points {
        wtr.write_record([p.x.to_string(), p.y.to_string()])?;
    }
    if close_ring {
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            if points.len() == 1 || first != last {
                wtr.write_record([first.x.to_string(), first.y.to_string()])?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}
