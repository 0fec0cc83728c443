//! Line-oriented corpus codec.
//!
//! One figure per line, comma-delimited: the 180 signature values, an empty
//! spacer, the centroid x and y, another spacer, then the label running to the
//! end of the line. Signature values are written with Rust's shortest
//! round-trip `f64` formatting, so a written corpus re-parses bit-identically.
//!
//! Parsing is tolerant of structurally short records: lines without exactly
//! 180 signature fields, or with an empty label, are skipped. Text that fails
//! numeric conversion in a signature or centroid position is fatal.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::descriptor::{Signature, SIGNATURE_LEN};
use crate::figure::Figure;
use crate::geometry::Point;
use crate::util::{ShapeMatchError, ShapeMatchResult};

const CENTROID_X_FIELD: usize = SIGNATURE_LEN + 1;
const CENTROID_Y_FIELD: usize = SIGNATURE_LEN + 2;
const LABEL_FIELD: usize = SIGNATURE_LEN + 4;

fn io_error(path: &Path, err: std::io::Error) -> ShapeMatchError {
    ShapeMatchError::CorpusIo {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

fn numeric_field<T: std::str::FromStr>(
    text: &str,
    line: usize,
    field: usize,
) -> ShapeMatchResult<T> {
    text.parse().map_err(|_| ShapeMatchError::CorpusParse {
        line,
        field,
        value: text.to_string(),
    })
}

/// Parses one corpus line into a figure.
///
/// Returns `Ok(None)` for lines skipped by the tolerant-parse policy.
/// `line_no` is one-based and only used for error reporting.
pub fn parse_record(text: &str, line_no: usize) -> ShapeMatchResult<Option<Figure>> {
    if text.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = text.split(',').collect();
    let mut values = Vec::with_capacity(SIGNATURE_LEN);
    let mut centroid = Point::new(0, 0);
    for (index, field) in fields.iter().enumerate() {
        if index < SIGNATURE_LEN {
            values.push(numeric_field::<f64>(field, line_no, index)?);
        } else if index == CENTROID_X_FIELD {
            centroid.x = numeric_field(field, line_no, index)?;
        } else if index == CENTROID_Y_FIELD {
            centroid.y = numeric_field(field, line_no, index)?;
        }
    }

    // The label keeps any commas it contains: everything past the last
    // delimiter counted by LABEL_FIELD belongs to it.
    let label = text
        .splitn(LABEL_FIELD + 1, ',')
        .nth(LABEL_FIELD)
        .unwrap_or("");

    if values.len() != SIGNATURE_LEN || label.is_empty() {
        return Ok(None);
    }

    let signature = Signature::from_values(values)?;
    Ok(Some(Figure::from_signature(signature, label, centroid)))
}

/// Formats one figure as a corpus line, without the trailing newline.
///
/// Computes the signature if the figure does not carry one yet.
pub fn format_record(figure: &Figure) -> ShapeMatchResult<String> {
    let signature = figure.signature()?;
    let values: Vec<String> = signature.values().iter().map(f64::to_string).collect();
    let centroid = figure.centroid();
    Ok(format!(
        "{},,{},{},,{}",
        values.join(","),
        centroid.x,
        centroid.y,
        figure.label(),
    ))
}

/// Reads every valid record from a corpus file.
pub fn read_figures(path: &Path) -> ShapeMatchResult<Vec<Figure>> {
    let file = File::open(path).map_err(|err| io_error(path, err))?;
    let reader = BufReader::new(file);
    let mut figures = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| io_error(path, err))?;
        if let Some(figure) = parse_record(&line, index + 1)? {
            figures.push(figure);
        }
    }
    Ok(figures)
}

/// Writes figures to a corpus file, replacing prior contents.
pub fn write_figures(path: &Path, figures: &[Figure]) -> ShapeMatchResult<()> {
    let mut contents = String::new();
    for figure in figures {
        contents.push_str(&format_record(figure)?);
        contents.push('\n');
    }
    fs::write(path, contents).map_err(|err| io_error(path, err))
}

#[cfg(test)]
mod tests {
    use super::{format_record, parse_record};
    use crate::figure::Figure;
    use crate::geometry::Point;

    fn triangle() -> Figure {
        let outline = vec![Point::new(0, 0), Point::new(40, 0), Point::new(20, 30)];
        Figure::from_outline(outline, "triangle").unwrap()
    }

    #[test]
    fn record_has_expected_field_positions() {
        let record = format_record(&triangle()).unwrap();
        let fields: Vec<&str> = record.split(',').collect();
        assert_eq!(fields.len(), 185);
        assert_eq!(fields[180], "");
        assert_eq!(fields[183], "");
        assert_eq!(fields[184], "triangle");
    }

    #[test]
    fn label_keeps_embedded_commas() {
        let record = format_record(&triangle()).unwrap();
        let renamed = record.replace(",triangle", ",triangle, right");
        let figure = parse_record(&renamed, 1).unwrap().unwrap();
        assert_eq!(figure.label(), "triangle, right");
    }

    #[test]
    fn spacer_content_is_ignored() {
        let record = format_record(&triangle()).unwrap();
        let mut fields: Vec<String> = record.split(',').map(str::to_string).collect();
        fields[183] = "reserved".to_string();
        let figure = parse_record(&fields.join(","), 1).unwrap().unwrap();
        assert_eq!(figure.label(), "triangle");
    }
}
