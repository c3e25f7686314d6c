use crate::board::{Board, Color, Square};

/// MoveRule decides whether moving the piece on `from` to `to` is allowed
/// for the side to move. The session only asks; it never mutates the board
/// on a rejected move.
pub trait MoveRule {
    fn is_legal(&self, board: &Board, turn: Color, from: Square, to: Square) -> bool;
}

/// SideToMove accepts any move of a piece belonging to the side whose turn
/// it is. It knows nothing about how pieces move.
#[derive(Debug, Clone, Copy, Default)]
pub struct SideToMove;

impl MoveRule for SideToMove {
    fn is_legal(&self, board: &Board, turn: Color, from: Square, _to: Square) -> bool {
        board.piece_at(from).map_or(false, |piece| piece.color == turn)
    }
}

impl<F> MoveRule for F
where
    F: Fn(&Board, Color, Square, Square) -> bool,
{
    fn is_legal(&self, board: &Board, turn: Color, from: Square, to: Square) -> bool {
        self(board, turn, from, to)
    }
}
