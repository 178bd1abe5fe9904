use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sm_matrix::{Buffer, Element};
use tracing::debug;

use crate::error::{IoError, Result};

/// Read two N×N matrices from a text file.
///
/// See [`parse_matrix_pair`] for the format.
pub fn read_matrix_pair(path: &Path, dimension: usize) -> Result<(Buffer, Buffer)> {
    let file = File::open(path)?;
    debug!(path = %path.display(), dimension, "reading matrix pair");
    parse_matrix_pair(BufReader::new(file), dimension)
}

/// Parse two N×N matrices, one integer per line.
///
/// The first N² entries fill A row by row, the next N² fill B. Whitespace
/// around each entry is ignored and blank lines are skipped. Exactly 2·N²
/// entries must be present.
pub fn parse_matrix_pair(reader: impl BufRead, dimension: usize) -> Result<(Buffer, Buffer)> {
    let cells = dimension * dimension;
    let expected = 2 * cells;
    let mut entries: Vec<Element> = Vec::with_capacity(expected);

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed.parse::<Element>().map_err(|_| IoError::Parse {
            line: index + 1,
            content: trimmed.to_string(),
        })?;
        entries.push(value);
    }

    if entries.len() != expected {
        return Err(IoError::EntryCount {
            expected,
            got: entries.len(),
        });
    }

    let b = entries.split_off(cells);
    Ok((
        Buffer::from_vec(dimension, entries)?,
        Buffer::from_vec(dimension, b)?,
    ))
}
