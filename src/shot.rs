/// A resolved shot against a board. The outcome is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    row: usize,
    column: usize,
    hit: bool,
}

impl Shot {
    pub(crate) fn new(row: usize, column: usize, hit: bool) -> Self {
        Self { row, column, hit }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn hit(&self) -> bool {
        self.hit
    }

    /// Coordinate as `(row, col)`.
    pub fn coord(&self) -> (usize, usize) {
        (self.row, self.column)
    }
}
