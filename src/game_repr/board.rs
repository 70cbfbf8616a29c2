use super::*;
use smallvec::SmallVec;
use std::fmt;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND RULES
 */

pub const BOARD_N: u8 = 7;
pub const MAX_DIMENSION: u8 = 16;
pub const MAX_CELL_POWER: u8 = 6;
pub const MAX_TOTAL_POWER: u32 = 49;
pub const MAX_TURNS: u16 = 343;
pub const WIN_POWER_DIFF: u32 = 2;

/// Cells touched by one action, with their contents before it was applied.
#[derive(Debug, Clone)]
struct UndoInfo {
    changed: SmallVec<[(usize, CellState); 8]>,
    turn_color: Color,
    turn_count: u16,
}

/// Toroidal hex board. Cells are stored row-major (`r` outer, `q` inner).
#[derive(Debug, Clone)]
pub struct Board {
    height: u8,
    width: u8,
    cells: Vec<CellState>,
    turn_color: Color,
    turn_count: u16,
    history: Vec<UndoInfo>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Two boards are equal when they hold the same position; undo history is ignored.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.height == other.height
            && self.width == other.width
            && self.turn_color == other.turn_color
            && self.turn_count == other.turn_count
            && self.cells == other.cells
    }
}

impl Eq for Board {}

impl Board {
    /// Empty 7x7 board, Red to move.
    pub fn new() -> Self {
        Self::empty(BOARD_N, BOARD_N)
    }

    pub fn with_size(height: u8, width: u8) -> Result<Self, BoardError> {
        if height == 0 || width == 0 || height > MAX_DIMENSION || width > MAX_DIMENSION {
            return Err(BoardError::InvalidDimensions { height, width });
        }
        Ok(Self::empty(height, width))
    }

    fn empty(height: u8, width: u8) -> Self {
        Self {
            height,
            width,
            cells: vec![CellState::EMPTY; usize::from(height) * usize::from(width)],
            turn_color: Color::Red,
            turn_count: 0,
            history: Vec::new(),
        }
    }

    /// Parse the compact notation produced by [`Board::to_notation`].
    ///
    /// Rows are separated by `/` starting from `r = 0`; inside a row `.` is an
    /// empty cell and `r3` / `b3` a Red / Blue token of power 3. Two optional
    /// whitespace separated fields follow: the colour to move and the turn count.
    ///
    /// The notation describes any position, including ones the rules could not
    /// reach: total power may exceed [`MAX_TOTAL_POWER`] and the turn counter
    /// may lie past [`MAX_TURNS`]. Such boards still obey the rules from there
    /// on (no spawns above the cap, no actions once the game is over).
    ///
    /// ```
    /// use infexion_engine::game_repr::{Board, Color, GameBoard};
    ///
    /// let board = Board::from_notation("r1../.b2./... b 1").unwrap();
    /// assert_eq!(board.turn_color(), Color::Blue);
    /// assert_eq!(board.total_power(), 3);
    /// ```
    pub fn from_notation(notation: &str) -> Result<Self, BoardError> {
        let parts: Vec<&str> = notation.split_whitespace().collect();
        let placement = parts
            .first()
            .ok_or_else(|| BoardError::Notation("empty notation".to_string()))?;

        let mut rows: Vec<Vec<CellState>> = Vec::new();
        for row in placement.split('/') {
            let mut cells = Vec::new();
            let mut chars = row.chars().peekable();
            while let Some(c) = chars.next() {
                if c == '.' {
                    cells.push(CellState::EMPTY);
                    continue;
                }
                let color = Color::from_char(c).ok_or_else(|| {
                    BoardError::Notation(format!("unexpected character '{}'", c))
                })?;
                let power = chars
                    .next()
                    .and_then(|d| d.to_digit(10))
                    .filter(|p| (1..=u32::from(MAX_CELL_POWER)).contains(p))
                    .ok_or_else(|| {
                        BoardError::Notation(format!("token '{}' needs a power of 1-6", c))
                    })?;
                cells.push(CellState::token(color, power as u8));
            }
            rows.push(cells);
        }

        let height = rows.len();
        let width = rows[0].len();
        if rows.iter().any(|row| row.len() != width) {
            return Err(BoardError::Notation("rows have different lengths".to_string()));
        }
        if height > usize::from(MAX_DIMENSION) || width > usize::from(MAX_DIMENSION) {
            return Err(BoardError::InvalidDimensions {
                height: height.min(255) as u8,
                width: width.min(255) as u8,
            });
        }
        let mut board = Self::with_size(height as u8, width as u8)?;
        board.cells = rows.into_iter().flatten().collect();

        if let Some(color) = parts.get(1) {
            let mut chars = color.chars();
            board.turn_color = match (chars.next().and_then(Color::from_char), chars.next()) {
                (Some(color), None) => color,
                _ => return Err(BoardError::Notation(format!("bad colour field '{}'", color))),
            };
        }
        if let Some(count) = parts.get(2) {
            board.turn_count = count
                .parse()
                .map_err(|_| BoardError::Notation(format!("bad turn count '{}'", count)))?;
        }
        if parts.len() > 3 {
            return Err(BoardError::Notation("too many fields".to_string()));
        }

        Ok(board)
    }

    pub fn to_notation(&self) -> String {
        let rows: Vec<String> = self
            .cells
            .chunks(usize::from(self.width))
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        format!(
            "{} {} {}",
            rows.join("/"),
            self.turn_color.to_char(),
            self.turn_count
        )
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn turn_color(&self) -> Color {
        self.turn_color
    }

    pub fn turn_count(&self) -> u16 {
        self.turn_count
    }

    pub fn position_of(&self, idx: usize) -> HexPos {
        let width = usize::from(self.width);
        HexPos::new((idx / width) as u8, (idx % width) as u8)
    }

    fn index_of(&self, pos: HexPos) -> Result<usize, BoardError> {
        if pos.r >= self.height || pos.q >= self.width {
            return Err(BoardError::OutOfBounds(pos));
        }
        Ok(usize::from(pos.r) * usize::from(self.width) + usize::from(pos.q))
    }

    pub fn get(&self, pos: HexPos) -> Option<CellState> {
        self.index_of(pos).ok().map(|idx| self.cells[idx])
    }

    fn power_of(&self, color: Color) -> u32 {
        self.cells
            .iter()
            .filter(|cell| cell.is(color))
            .map(|cell| u32::from(cell.power))
            .sum()
    }

    fn sum_power(&self) -> u32 {
        self.cells.iter().map(|cell| u32::from(cell.power)).sum()
    }

    /// Apply `action` on behalf of the colour to move.
    ///
    /// A finished game accepts no further actions.
    pub fn apply_action(&mut self, action: Action) -> Result<(), BoardError> {
        if self.is_game_over() {
            return Err(BoardError::GameOver);
        }
        let mover = self.turn_color;
        let mut changed = SmallVec::new();

        match action {
            Action::Spawn(cell) => {
                let idx = self.index_of(cell)?;
                if !self.cells[idx].is_empty() {
                    return Err(BoardError::CellOccupied(cell));
                }
                if self.sum_power() >= MAX_TOTAL_POWER {
                    return Err(BoardError::PowerCapReached {
                        cap: MAX_TOTAL_POWER,
                    });
                }
                changed.push((idx, self.cells[idx]));
                self.cells[idx] = CellState::token(mover, 1);
            }
            Action::Spread(cell, dir) => {
                let idx = self.index_of(cell)?;
                let source = self.cells[idx];
                if !source.is(mover) {
                    return Err(BoardError::NotOwned { cell, color: mover });
                }
                changed.push((idx, source));
                self.cells[idx] = CellState::EMPTY;

                // Steps are sequential: a long spread on a small board can revisit a cell.
                for step in 1..=source.power {
                    let target = cell.step(dir, step, self.height, self.width);
                    let target_idx = self.index_of(target)?;
                    let prev = self.cells[target_idx];
                    changed.push((target_idx, prev));

                    let power = prev.power + 1;
                    self.cells[target_idx] = if power > MAX_CELL_POWER {
                        CellState::EMPTY
                    } else {
                        CellState::token(mover, power)
                    };
                }
            }
        }

        self.history.push(UndoInfo {
            changed,
            turn_color: mover,
            turn_count: self.turn_count,
        });
        self.turn_color = mover.opposite();
        self.turn_count += 1;
        Ok(())
    }

    pub fn undo_action(&mut self) -> Result<(), BoardError> {
        let undo = self.history.pop().ok_or(BoardError::NothingToUndo)?;
        for &(idx, prev) in undo.changed.iter().rev() {
            self.cells[idx] = prev;
        }
        self.turn_color = undo.turn_color;
        self.turn_count = undo.turn_count;
        Ok(())
    }

    pub fn is_game_over(&self) -> bool {
        if self.turn_count < 2 {
            return false;
        }
        self.turn_count >= MAX_TURNS
            || self.power_of(Color::Red) == 0
            || self.power_of(Color::Blue) == 0
    }

    pub fn winner_color(&self) -> Option<Color> {
        if !self.is_game_over() {
            return None;
        }
        let red = self.power_of(Color::Red);
        let blue = self.power_of(Color::Blue);
        if red.abs_diff(blue) < WIN_POWER_DIFF {
            return None;
        }
        Some(if red > blue { Color::Red } else { Color::Blue })
    }
}

impl GameBoard for Board {
    fn cells(&self) -> impl Iterator<Item = (HexPos, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (self.position_of(idx), *cell))
    }

    fn apply(&mut self, action: Action) -> Result<(), BoardError> {
        self.apply_action(action)
    }

    fn undo(&mut self) -> Result<(), BoardError> {
        self.undo_action()
    }

    fn game_over(&self) -> bool {
        self.is_game_over()
    }

    fn winner(&self) -> Option<Color> {
        self.winner_color()
    }

    fn total_power(&self) -> u32 {
        self.sum_power()
    }

    fn color_power(&self, color: Color) -> u32 {
        self.power_of(color)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Highest row first, each row shifted to suggest the hex layout.
        for r in (0..self.height).rev() {
            write!(f, "{:width$}", "", width = usize::from(r))?;
            for q in 0..self.width {
                let cell = self.cells[usize::from(r) * usize::from(self.width) + usize::from(q)];
                write!(f, "{:>3}", cell.to_string())?;
            }
            writeln!(f)?;
        }
        write!(f, "turn {} ({} to move)", self.turn_count, self.turn_color)
    }
}
