//! Two-player chess board: the board model, the pointer-to-square mapping
//! and the click-driven selection state machine, plus a ggez renderer
//! behind the `gui` feature.

pub mod board;
pub mod config;
pub mod geometry;
#[cfg(feature = "gui")]
pub mod render;
pub mod rules;
pub mod session;

pub use board::{Board, BoardError, Color, Piece, Role, Square};
pub use geometry::{Geometry, Rect};
pub use rules::{MoveRule, SideToMove};
pub use session::{ClickOutcome, EnemyClick, Move, Selection, SelectionState, Session};
