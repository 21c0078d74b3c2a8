use serde::{Deserialize, Serialize};

/// Grid dimensions measured in unit cells.
///
/// Dimensions are plain signed integers on purpose: callers own the policy
/// for clamping, and a zero or negative grid is a legal value that simply
/// fits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDims {
    pub rows: i32,
    pub cols: i32,
}

impl GridDims {
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }
}

/// Axis-aligned cell rectangle anchored at a zero-based top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRect {
    pub r: i32,
    pub c: i32,
    pub w: i32,
    pub h: i32,
}

impl CellRect {
    pub const fn new(r: i32, c: i32, w: i32, h: i32) -> Self {
        Self { r, c, w, h }
    }

    /// Column index of the last cell covered by this rectangle.
    pub const fn right(&self) -> i32 {
        self.c + self.w - 1
    }

    /// Row index of the last cell covered by this rectangle.
    pub const fn bottom(&self) -> i32 {
        self.r + self.h - 1
    }

    /// True iff the two closed cell ranges intersect on both axes.
    ///
    /// Two rectangles are disjoint exactly when one lies entirely to the
    /// left of, right of, above, or below the other, measured on inclusive
    /// last-cell bounds. Exact integer comparison throughout.
    pub const fn overlaps(&self, other: &CellRect) -> bool {
        let disjoint = self.right() < other.c
            || other.right() < self.c
            || self.bottom() < other.r
            || other.bottom() < self.r;
        !disjoint
    }

    /// True iff the rectangle lies fully inside a grid of the given
    /// dimensions: non-negative origin, last cell within bounds.
    pub const fn fits_within(&self, dims: GridDims) -> bool {
        self.r >= 0 && self.c >= 0 && self.r + self.h <= dims.rows && self.c + self.w <= dims.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_symmetric() {
        let a = CellRect::new(0, 0, 2, 2);
        let b = CellRect::new(1, 1, 3, 1);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn rectangle_overlaps_itself() {
        let a = CellRect::new(3, 2, 1, 1);
        assert!(a.overlaps(&a));
    }

    #[test]
    fn disjoint_rectangles_do_not_overlap() {
        let a = CellRect::new(0, 0, 2, 1);
        assert!(!a.overlaps(&CellRect::new(0, 2, 2, 1)));
        assert!(!a.overlaps(&CellRect::new(1, 0, 2, 1)));
        assert!(!CellRect::new(0, 2, 2, 1).overlaps(&a));
    }

    #[test]
    fn touching_edges_share_no_cell() {
        // (0,0)-(0,1) and (0,2)-(0,3): adjacent columns, no shared cell.
        let left = CellRect::new(0, 0, 2, 1);
        let right = CellRect::new(0, 2, 2, 1);
        assert_eq!(left.right(), 1);
        assert!(!left.overlaps(&right));
    }

    #[test]
    fn one_cell_of_contact_counts() {
        let a = CellRect::new(0, 0, 2, 2);
        let b = CellRect::new(1, 1, 2, 2);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn fits_within_checks_all_four_bounds() {
        let dims = GridDims::new(4, 4);
        assert!(CellRect::new(0, 0, 4, 4).fits_within(dims));
        assert!(CellRect::new(2, 2, 2, 2).fits_within(dims));
        assert!(!CellRect::new(-1, 0, 1, 1).fits_within(dims));
        assert!(!CellRect::new(0, -1, 1, 1).fits_within(dims));
        assert!(!CellRect::new(3, 0, 1, 2).fits_within(dims));
        assert!(!CellRect::new(0, 3, 2, 1).fits_within(dims));
    }

    #[test]
    fn nothing_fits_a_non_positive_grid() {
        assert!(!CellRect::new(0, 0, 1, 1).fits_within(GridDims::new(0, 4)));
        assert!(!CellRect::new(0, 0, 1, 1).fits_within(GridDims::new(4, -2)));
    }
}
