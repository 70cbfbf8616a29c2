use std::fmt;

/// A cell coordinate on the hex board, `r` is the row and `q` the column.
///
/// Coordinates are only meaningful relative to a board's dimensions; stepping
/// off one edge wraps around to the opposite one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexPos {
    pub r: u8,
    pub q: u8,
}

impl HexPos {
    pub const fn new(r: u8, q: u8) -> Self {
        Self { r, q }
    }

    /// Move `steps` cells along `dir` on a `height x width` torus.
    pub fn step(self, dir: HexDir, steps: u8, height: u8, width: u8) -> HexPos {
        let (dr, dq) = dir.offset();
        let steps = i32::from(steps);
        let r = (i32::from(self.r) + dr * steps).rem_euclid(i32::from(height));
        let q = (i32::from(self.q) + dq * steps).rem_euclid(i32::from(width));
        HexPos::new(r as u8, q as u8)
    }
}

impl fmt::Display for HexPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.r, self.q)
    }
}

/// The six neighbours of a hex cell, in the fixed order used for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexDir {
    DownRight,
    Down,
    DownLeft,
    UpLeft,
    Up,
    UpRight,
}

impl HexDir {
    pub const ALL: [HexDir; 6] = [
        HexDir::DownRight,
        HexDir::Down,
        HexDir::DownLeft,
        HexDir::UpLeft,
        HexDir::Up,
        HexDir::UpRight,
    ];

    /// `(dr, dq)` for one step in this direction.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            HexDir::DownRight => (0, 1),
            HexDir::Down => (-1, 1),
            HexDir::DownLeft => (-1, 0),
            HexDir::UpLeft => (0, -1),
            HexDir::Up => (1, -1),
            HexDir::UpRight => (1, 0),
        }
    }

    pub fn opposite(&self) -> HexDir {
        match self {
            HexDir::DownRight => HexDir::UpLeft,
            HexDir::Down => HexDir::Up,
            HexDir::DownLeft => HexDir::UpRight,
            HexDir::UpLeft => HexDir::DownRight,
            HexDir::Up => HexDir::Down,
            HexDir::UpRight => HexDir::DownLeft,
        }
    }
}

impl fmt::Display for HexDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (dr, dq) = self.offset();
        write!(f, "[{},{}]", dr, dq)
    }
}
