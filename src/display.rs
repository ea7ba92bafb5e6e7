//! Textual representation of matrices.
//!
//! `Display` renders an aligned grid bounded by bracket glyphs; `Debug`
//! prepends a `"<rows>x<cols> Matrix<T>"` header to the same grid. Values
//! are formatted with their `Debug` form, so floats always carry at least
//! one fractional digit (`1.0`, `12.5`).

use std::fmt;

use crate::primitives::{Matrix, Scalar};

/// Spaces between adjacent columns.
const COLUMN_GAP: &str = "  ";

/// Render each row as a run of per-column right-aligned cells.
///
/// Column widths are computed independently per column as the width of the
/// longest formatted value in that column.
fn format_rows<T: Scalar>(m: &Matrix<T>) -> Vec<String> {
    let (rows, cols) = m.shape();
    let cells: Vec<String> = m.as_slice().iter().map(|v| format!("{v:?}")).collect();

    let mut widths = vec![0usize; cols];
    for i in 0..rows {
        for j in 0..cols {
            widths[j] = widths[j].max(cells[i * cols + j].len());
        }
    }

    (0..rows)
        .map(|i| {
            (0..cols)
                .map(|j| format!("{:>width$}", cells[i * cols + j], width = widths[j]))
                .collect::<Vec<_>>()
                .join(COLUMN_GAP)
        })
        .collect()
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = format_rows(self);
        let last = lines.len() - 1;
        for (i, line) in lines.iter().enumerate() {
            let (open, close) = if last == 0 {
                ("(", ")")
            } else if i == 0 {
                ("⎛", "⎞")
            } else if i == last {
                ("⎝", "⎠")
            } else {
                ("⎜", "⎟")
            };
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{open} {line} {close}")?;
        }
        Ok(())
    }
}

impl<T: Scalar> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.shape();
        writeln!(f, "{rows}x{cols} Matrix<{}>", std::any::type_name::<T>())?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
