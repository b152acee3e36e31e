// SPDX-License-Identifier: MPL-2.0
//! Presentation value objects for the catalog screen.

/// Grid column bounds.
pub mod grid_bounds {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;
    pub const DEFAULT: u8 = 2;
}

/// Number of cards per grid row, guaranteed to be within 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridColumns(u8);

impl GridColumns {
    /// Creates a column count, clamping the value to the valid range.
    #[must_use]
    pub fn new(columns: u8) -> Self {
        Self(columns.clamp(grid_bounds::MIN, grid_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for GridColumns {
    fn default() -> Self {
        Self(grid_bounds::DEFAULT)
    }
}
