use log::{debug, info};

use crate::board::{Board, Color, Piece, Square};
use crate::geometry::Geometry;
use crate::rules::{MoveRule, SideToMove};

/// EnemyClick decides what clicking a piece of the other colour means while
/// a piece is already selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyClick {
    /// Select the clicked piece instead, like any other occupied square.
    Reselect,
    /// Treat the clicked square as the destination and try to capture.
    Capture,
}

impl Default for EnemyClick {
    fn default() -> Self {
        EnemyClick::Reselect
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    PieceSelected,
}

/// Selection is what the renderer highlights: `selected` in yellow,
/// `target` in green.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub selected: Option<Square>,
    pub target: Option<Square>,
}

impl Selection {
    fn clear(&mut self) {
        *self = Selection::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
}

/// ClickOutcome reports what a click did. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Click outside the board; selection dropped.
    Cleared,
    /// Empty square with nothing selected.
    Ignored,
    Selected(Square),
    Committed(Move),
    /// The rule refused the move; board untouched, selection dropped.
    Rejected(Move),
}

/// Session contains one game: the board, whose turn it is, and the pending
/// selection. All mutation goes through `click`.
pub struct Session<R = SideToMove> {
    board: Board,
    turn: Color,
    selection: Selection,
    rule: R,
    enemy_click: EnemyClick,
    moves_played: u32,
}

impl Session<SideToMove> {
    /// New creates a game in the starting position with White to move.
    pub fn new() -> Self {
        Session::with_rule(SideToMove)
    }
}

impl Default for Session<SideToMove> {
    fn default() -> Self {
        Session::new()
    }
}

impl<R: MoveRule> Session<R> {
    pub fn with_rule(rule: R) -> Self {
        Session {
            board: Board::starting_position(),
            turn: Color::White,
            selection: Selection::default(),
            rule,
            enemy_click: EnemyClick::default(),
            moves_played: 0,
        }
    }

    pub fn enemy_click(mut self, policy: EnemyClick) -> Self {
        self.enemy_click = policy;
        self
    }

    pub fn new_game(&mut self) {
        self.board.reset_to_starting_position();
        self.turn = Color::White;
        self.selection.clear();
        self.moves_played = 0;
        info!("new game, white to move");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    pub fn state(&self) -> SelectionState {
        match self.selection.selected {
            Some(_) => SelectionState::PieceSelected,
            None => SelectionState::Idle,
        }
    }

    /// Feeds a pointer press in window pixels through the board geometry.
    pub fn click_at(&mut self, geometry: &Geometry, x: f32, y: f32) -> ClickOutcome {
        self.click(geometry.pointer_to_square(x, y))
    }

    /// Handles one primary-button click; `None` means outside the board.
    pub fn click(&mut self, square: Option<Square>) -> ClickOutcome {
        let square = match square {
            Some(square) => square,
            None => {
                debug!("click outside board, selection cleared");
                self.selection.clear();
                return ClickOutcome::Cleared;
            }
        };
        match (self.selection.selected, self.board.piece_at(square)) {
            (None, None) => ClickOutcome::Ignored,
            (None, Some(_)) => self.select(square),
            (Some(from), Some(clicked)) => {
                if self.enemy_click == EnemyClick::Capture && self.is_enemy(from, clicked) {
                    self.attempt(from, square)
                } else {
                    self.select(square)
                }
            }
            (Some(from), None) => self.attempt(from, square),
        }
    }

    fn is_enemy(&self, from: Square, clicked: Piece) -> bool {
        self.board
            .piece_at(from)
            .map_or(false, |selected| selected.color != clicked.color)
    }

    fn select(&mut self, square: Square) -> ClickOutcome {
        debug!("selected {}", square);
        self.selection.selected = Some(square);
        ClickOutcome::Selected(square)
    }

    /// Runs the move attempt for `from` -> `to`; either way the selection
    /// ends up cleared.
    fn attempt(&mut self, from: Square, to: Square) -> ClickOutcome {
        self.selection.target = Some(to);
        let outcome = self.resolve(from, to);
        self.selection.clear();
        outcome
    }

    fn resolve(&mut self, from: Square, to: Square) -> ClickOutcome {
        let piece = match self.board.piece_at(from) {
            Some(piece) => piece,
            None => return ClickOutcome::Cleared,
        };
        let mv = Move { from, to, piece };
        if !self.rule.is_legal(&self.board, self.turn, from, to) {
            debug!("rejected {}{} for {} to move", from, to, self.turn);
            return ClickOutcome::Rejected(mv);
        }
        self.board.set_piece(to, Some(piece));
        self.board.set_piece(from, None);
        self.turn = self.turn.opposite();
        self.moves_played += 1;
        info!("{} {}{}, {} to move", piece.symbol(), from, to, self.turn);
        debug!("\n{}", self.board);
        ClickOutcome::Committed(mv)
    }
}
