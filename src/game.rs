use derive_more::Display;
use tracing::{debug, info, instrument, trace};

/// The number of cells along each side of the board.
pub const GRID: usize = 3;

/// Every line that wins the game, as row-major cell indices.
const LINES: [[usize; GRID]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Player {
    #[display("X")]
    X,
    #[display("O")]
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// The phase of the game. Every variant except `Running` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Running,
    Won(Player),
    Tie,
    /// The window is closing. Nothing leaves this state.
    Quit,
}

/// The 3x3 board, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; GRID * GRID],
}

impl Board {
    /// Maps `(row, col)` to a cell index, or `None` if it falls off the board.
    pub fn index(row: usize, col: usize) -> Option<usize> {
        (row < GRID && col < GRID).then_some(row * GRID + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|i| self.cells[i])
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(i) = Self::index(row, col) {
            self.cells[i] = cell;
        }
    }

    /// Iterates over `(row, col, cell)` for every position on the board.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i / GRID, i % GRID, cell))
    }

    /// Whether `player` holds every cell of some row, column or diagonal.
    pub fn has_line(&self, player: Player) -> bool {
        let cell = Cell::from(player);
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == cell))
    }

    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }
}

/// A single game of tic-tac-toe, from the first move until the window closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    player: Player,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            board: Board::default(),
            player: Player::X,
            state: GameState::Running,
        }
    }
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player who moves next. Only meaningful while the game is running.
    pub fn current_player(&self) -> Player {
        self.player
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Places the current player's marker at `(row, col)`.
    ///
    /// Silently does nothing unless the game is running and the cell exists and is empty.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) {
        if self.state != GameState::Running {
            trace!(state = ?self.state, "move ignored, game is over");
            return;
        }
        match self.board.get(row, col) {
            Some(Cell::Empty) => {}
            Some(_) => {
                trace!("move ignored, cell is taken");
                return;
            }
            None => {
                trace!("move ignored, off the board");
                return;
            }
        }

        let mover = self.player;
        self.board.set(row, col, mover.into());
        self.player = mover.opponent();
        debug!(?mover, "move applied");
        self.evaluate_termination(mover);
    }

    /// Ends the game if `mover`, who just played, completed a line or filled the board.
    ///
    /// Only the mover is checked: a line for the other player would have ended the game on
    /// their own turn.
    fn evaluate_termination(&mut self, mover: Player) {
        if self.state != GameState::Running {
            return;
        }
        if self.board.has_line(mover) {
            self.state = GameState::Won(mover);
            info!(winner = ?mover, "game won");
        } else if self.board.empty_cells() == 0 {
            self.state = GameState::Tie;
            info!("game tied");
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
        debug!("game reset");
    }

    /// Reacts to a click on `(row, col)`: a move while running, a fresh game once it's over.
    pub fn handle_click(&mut self, row: usize, col: usize) {
        match self.state {
            GameState::Running => self.apply_move(row, col),
            GameState::Won(_) | GameState::Tie => self.reset(),
            GameState::Quit => trace!("click ignored while quitting"),
        }
    }

    pub fn quit(&mut self) {
        self.state = GameState::Quit;
        info!("quit requested");
    }

    pub fn is_quit(&self) -> bool {
        self.state == GameState::Quit
    }
}
