use thiserror::Error;

use super::map::DielectricMap;

// ---------------------------------------------------------------------------
// Column sampling: one map column → normalized signal vs. depth
// ---------------------------------------------------------------------------

/// Errors from [`sample_column`].
#[derive(Error, Debug, PartialEq)]
pub enum TraceError {
    /// The column has no positive sample, so normalization would divide by
    /// zero. Unreachable for maps built by the loader (minimum cell value
    /// is 1.0) but possible with synthetic grids.
    #[error("column {col} has no positive sample to normalize by")]
    DegenerateColumn { col: usize },
}

/// Extract one column of the map as a normalized signal-vs-depth vector.
///
/// `signal[depth] = map[depth][col]` for `depth` in `[0, height)`, with the
/// deepest sample last, then every element is divided by the column maximum
/// so the result peaks at exactly 1.0. For loader-built maps all elements
/// land in `(0.0, 1.0]`. The vector is recomputed from scratch on every
/// call; nothing is cached.
///
/// # Panics
///
/// Panics if `col >= map.width()`. The sweep controller wraps its index
/// modulo the width before sampling, so an out-of-range column here is a
/// caller bug.
pub fn sample_column(map: &DielectricMap, col: usize) -> Result<Vec<f64>, TraceError> {
    assert!(
        col < map.width(),
        "column {col} out of range for map width {}",
        map.width()
    );

    let raw: Vec<f64> = (0..map.height()).map(|depth| map.value(depth, col)).collect();
    let max = raw.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max <= 0.0 {
        return Err(TraceError::DegenerateColumn { col });
    }

    Ok(raw.into_iter().map(|v| v / max).collect())
}
