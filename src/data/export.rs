use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::series::PointRecord;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing selected to export")]
    Empty,
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

/// Write `(index, point)` rows as CSV with an `index,x,y,size` header.
pub fn write_points_csv<W: Write>(mut out: W, rows: &[(usize, PointRecord)]) -> std::io::Result<()> {
    writeln!(out, "index,x,y,size")?;
    for (i, p) in rows {
        writeln!(out, "{},{:.9},{:.9},{:.3}", i, p.x, p.y, p.size)?;
    }
    Ok(())
}

/// Save the selected points to `path`. An empty selection is an error so the
/// UI can report it instead of producing a header-only file.
pub fn save_selection_csv<P: AsRef<Path>>(path: P, rows: &[(usize, PointRecord)]) -> Result<(), ExportError> {
    if rows.is_empty() {
        return Err(ExportError::Empty);
    }
    let f = std::fs::File::create(path.as_ref())?;
    write_points_csv(std::io::BufWriter::new(f), rows)?;
    tracing::info!(path = %path.as_ref().display(), rows = rows.len(), "selection exported");
    Ok(())
}
