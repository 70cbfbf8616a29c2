use super::alphabeta::Role;
use super::evaluation::Score;
use crate::game_repr::{Color, GameBoard, MAX_CELL_POWER, MAX_DIMENSION};
use once_cell::sync::Lazy;
use std::collections::HashMap;

const CELL_SLOTS: usize = MAX_DIMENSION as usize * MAX_DIMENSION as usize;
const POWER_SLOTS: usize = MAX_CELL_POWER as usize + 1;

/// Zobrist hashing constants for board positions
///
/// One random 64-bit number per (cell, colour, power) combination plus the
/// colour to move and the role of the node, XORed together.
pub struct ZobristKeys {
    /// [cell][color][power]
    pub cells: Vec<[[u64; POWER_SLOTS]; 2]>,
    /// [color to move]
    pub to_move: [u64; 2],
    /// Toggled for MIN nodes
    pub min_role: u64,
}

impl ZobristKeys {
    /// Generate Zobrist keys using a seeded random number generator
    /// This ensures the keys are random but reproducible
    fn generate() -> Self {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x517cc1b727220a95);

        let mut cells = vec![[[0u64; POWER_SLOTS]; 2]; CELL_SLOTS];
        for cell in &mut cells {
            for color in cell.iter_mut() {
                for power in color.iter_mut() {
                    *power = rng.gen();
                }
            }
        }

        Self {
            cells,
            to_move: [rng.gen(), rng.gen()],
            min_role: rng.gen(),
        }
    }
}

static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::generate);

/// How a stored score relates to the true value of the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Searched with the window fully open around the result
    Exact,
    /// The search failed high: true value >= score
    LowerBound,
    /// The search failed low: true value <= score
    UpperBound,
}

impl NodeType {
    /// Classify a fail-soft result against the window it was searched with.
    pub fn classify(score: Score, alpha: Score, beta: Score) -> Self {
        if score <= alpha {
            NodeType::UpperBound
        } else if score >= beta {
            NodeType::LowerBound
        } else {
            NodeType::Exact
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TranspositionTableEntry {
    pub hash: u64,
    /// Remaining depth the score was searched with
    pub depth: u8,
    pub score: Score,
    pub node_type: NodeType,
}

/// Cache of searched nodes, keyed by Zobrist hash.
///
/// An entry is only reused when it was searched at least as deep as the
/// current request and its bound is conclusive for the current window.
pub struct TranspositionTable {
    table: HashMap<u64, TranspositionTableEntry>,
    max_size: usize,
    pub hits: u64,
    pub misses: u64,
}

impl TranspositionTable {
    /// Create a transposition table with default size (1 million entries)
    pub fn new() -> Self {
        Self::with_capacity(1_000_000)
    }

    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            table: HashMap::with_capacity(max_size.min(100_000)),
            max_size,
            hits: 0,
            misses: 0,
        }
    }

    pub fn compute_hash<B: GameBoard>(board: &B, to_move: Color, role: Role) -> u64 {
        let mut hash = ZOBRIST.to_move[to_move.index()];
        if role == Role::Min {
            hash ^= ZOBRIST.min_role;
        }

        for (idx, (_, cell)) in board.cells().enumerate() {
            if let Some(color) = cell.color {
                let power = usize::from(cell.power).min(POWER_SLOTS - 1);
                hash ^= ZOBRIST.cells[idx % CELL_SLOTS][color.index()][power];
            }
        }

        hash
    }

    pub fn probe(&mut self, hash: u64) -> Option<&TranspositionTableEntry> {
        match self.table.get(&hash) {
            Some(entry) if entry.hash == hash => {
                self.hits += 1;
                Some(entry)
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// A score that can stand in for searching this node to `depth` with the
    /// window `(alpha, beta)`, if the table has one.
    pub fn lookup(&mut self, hash: u64, depth: u8, alpha: Score, beta: Score) -> Option<Score> {
        let entry = self.probe(hash)?;
        if entry.depth < depth {
            return None;
        }
        match entry.node_type {
            NodeType::Exact => Some(entry.score),
            NodeType::LowerBound if entry.score >= beta => Some(entry.score),
            NodeType::UpperBound if entry.score <= alpha => Some(entry.score),
            _ => None,
        }
    }

    /// Store an entry, preferring deeper searches and exact scores on collision.
    ///
    /// A full table keeps what it has.
    pub fn store(&mut self, entry: TranspositionTableEntry) {
        if let Some(existing) = self.table.get(&entry.hash) {
            let should_replace = entry.depth > existing.depth
                || (entry.depth == existing.depth
                    && (entry.node_type == NodeType::Exact || existing.node_type != NodeType::Exact));
            if !should_replace {
                return;
            }
        } else if self.table.len() >= self.max_size {
            return;
        }

        self.table.insert(entry.hash, entry);
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn size(&self) -> usize {
        self.table.len()
    }

    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}
