//! Boundary policies for neighbor lookups beyond the grid edges

/// Policy for resolving coordinates outside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryMode {
    /// Both axes wrap around (torus)
    #[default]
    Periodic,
    /// Coordinates reflect back off the edges
    Mirror,
    /// Everything beyond the edges reads as background
    Open,
}

impl BoundaryMode {
    /// Map a possibly out-of-range coordinate to an in-range one
    ///
    /// Returns `None` when the coordinate lies outside an `Open` grid, or when
    /// the grid has no cells along an axis. Callers read `None` as state 0.
    pub fn resolve(self, dimensions: (usize, usize), row: isize, col: isize) -> Option<(usize, usize)> {
        let (rows, cols) = dimensions;
        if rows == 0 || cols == 0 {
            return None;
        }

        match self {
            Self::Periodic => Some((wrap(row, rows), wrap(col, cols))),
            Self::Mirror => Some((reflect(row, rows), reflect(col, cols))),
            Self::Open => {
                let r = usize::try_from(row).ok().filter(|&r| r < rows)?;
                let c = usize::try_from(col).ok().filter(|&c| c < cols)?;
                Some((r, c))
            }
        }
    }

    /// Parse a frontier name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "periodic" => Some(Self::Periodic),
            "mirror" => Some(Self::Mirror),
            "open" => Some(Self::Open),
            _ => None,
        }
    }
}

// True modulo, so -1 maps to len - 1
fn wrap(index: isize, len: usize) -> usize {
    index.rem_euclid(len as isize) as usize
}

// Fold with period 2(len - 1). For offsets within one extent this is the single
// reflection -i / 2(len - 1) - i; larger offsets keep folding instead of escaping.
fn reflect(index: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let period = 2 * (len as isize - 1);
    let folded = index.rem_euclid(period);
    if folded >= len as isize {
        (period - folded) as usize
    } else {
        folded as usize
    }
}
