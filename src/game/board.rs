use std::fmt;
use std::str::FromStr;

use crate::error::{MoveError, ParseBoardError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Human,
    Ai,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => 'H',
            Cell::Ai => 'A',
        }
    }
}

/// Ascending list of playable columns.
pub type LegalColumns = Vec<usize>;

/// The 6x7 grid. Row 0 is the bottom row, row `ROWS - 1` the top.
///
/// Pieces stack from row 0 upward within a column. The mutating primitive
/// [`Board::place`] does not check this; [`Board::drop_piece`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position (row 0 is the bottom)
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// A column is playable while its top cell is empty. Out-of-range
    /// columns are never playable.
    pub fn is_column_playable(&self, col: usize) -> bool {
        col < COLS && self.cells[ROWS - 1][col] == Cell::Empty
    }

    /// Lowest empty row in `col`, or `None` if the column is full or out of range.
    pub fn lowest_open_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Set a cell without any validation.
    pub fn place(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        if !self.is_column_playable(col) {
            return Err(MoveError::ColumnFull(col));
        }
        let row = self
            .lowest_open_row(col)
            .ok_or(MoveError::ColumnFull(col))?;
        self.place(row, col, cell);
        Ok(row)
    }

    /// Playable columns in ascending order.
    pub fn legal_columns(&self) -> LegalColumns {
        (0..COLS).filter(|&col| self.is_column_playable(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_column_playable(col))
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// True when no column has an empty cell underneath a piece.
    pub fn is_settled(&self) -> bool {
        (0..COLS).all(|col| {
            let height = (0..ROWS)
                .take_while(|&row| self.cells[row][col] != Cell::Empty)
                .count();
            (height..ROWS).all(|row| self.cells[row][col] == Cell::Empty)
        })
    }

    /// Left-right reflection of the board.
    pub fn mirrored(&self) -> Board {
        let mut mirrored = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                mirrored.cells[row][COLS - 1 - col] = self.cells[row][col];
            }
        }
        mirrored
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints the top row first, one line per row, using `.`, `H` and `A`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            let line: String = self.cells[row].iter().map(|c| c.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Parses the [`Display`](fmt::Display) layout: `ROWS` lines of `COLS`
/// symbols, top row first. Blank lines and surrounding whitespace are ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != ROWS {
            return Err(ParseBoardError::RowCount(lines.len()));
        }

        let mut board = Board::new();
        for (i, line) in lines.iter().enumerate() {
            let row = ROWS - 1 - i;
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != COLS {
                return Err(ParseBoardError::RowWidth {
                    row,
                    width: symbols.len(),
                });
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][col] = match symbol {
                    '.' => Cell::Empty,
                    'H' => Cell::Human,
                    'A' => Cell::Ai,
                    other => return Err(ParseBoardError::Symbol(other)),
                };
            }
        }
        Ok(board)
    }
}
