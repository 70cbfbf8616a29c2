use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Red, Color::Blue];

    pub fn opposite(&self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Red => 0,
            Self::Blue => 1,
        }
    }

    pub(crate) fn to_char(&self) -> char {
        match self {
            Self::Red => 'r',
            Self::Blue => 'b',
        }
    }

    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            'r' | 'R' => Some(Self::Red),
            'b' | 'B' => Some(Self::Blue),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "RED"),
            Self::Blue => write!(f, "BLUE"),
        }
    }
}

/// Contents of one cell. An empty cell always has power 0 and an occupied
/// cell always has power >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellState {
    pub color: Option<Color>,
    pub power: u8,
}

impl CellState {
    pub const EMPTY: CellState = CellState {
        color: None,
        power: 0,
    };

    pub fn token(color: Color, power: u8) -> Self {
        debug_assert!(power >= 1, "occupied cells carry at least one power");
        Self {
            color: Some(color),
            power,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none()
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == Some(color)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "{}{}", color.to_char(), self.power),
            None => write!(f, "."),
        }
    }
}
