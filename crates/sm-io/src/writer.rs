use std::io::Write;

use sm_matrix::Buffer;

use crate::error::Result;

/// Print a matrix one row per line, entries separated by spaces.
pub fn write_matrix(out: &mut impl Write, matrix: &Buffer) -> Result<()> {
    write!(out, "{}", matrix)?;
    Ok(())
}

/// Print `label:` on its own line followed by the matrix.
pub fn write_labeled(out: &mut impl Write, label: &str, matrix: &Buffer) -> Result<()> {
    writeln!(out, "{}:", label)?;
    write_matrix(out, matrix)
}

/// Print the main diagonal, one entry per line.
pub fn write_diagonal(out: &mut impl Write, matrix: &Buffer) -> Result<()> {
    for value in matrix.diagonal() {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}
