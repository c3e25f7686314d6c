use chess_board::{
    Board, ClickOutcome, Color, Geometry, Piece, Role, SelectionState, Session, Square,
};

const G: Geometry = Geometry::STANDARD;

fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

/// Clicks the middle of a square through the pixel mapping.
fn click(session: &mut Session, name: &str) -> ClickOutcome {
    let (x, y) = G.square_to_rect(sq(name)).center();
    session.click_at(&G, x, y)
}

#[test]
fn reset_reproduces_standard_layout_and_is_idempotent() {
    use Color::*;
    use Role::*;

    let mut board = Board::empty();
    board.reset_to_starting_position();
    let first = board.clone();
    board.reset_to_starting_position();
    assert_eq!(board, first);

    let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
    for square in Square::all() {
        let expected = match square.rank() {
            1 => Some(Piece::new(White, back[(square.file() - 1) as usize])),
            2 => Some(Piece::new(White, Pawn)),
            7 => Some(Piece::new(Black, Pawn)),
            8 => Some(Piece::new(Black, back[(square.file() - 1) as usize])),
            _ => None,
        };
        assert_eq!(board.piece_at(square), expected, "at {}", square);
    }
}

#[test]
fn pointer_inside_maps_to_board_and_outside_to_none() {
    let mut x = 0.0;
    while x < 800.0 {
        let mut y = 0.0;
        while y < 600.0 {
            let inside = (20.0..500.0).contains(&x) && (20.0..500.0).contains(&y);
            assert_eq!(G.pointer_to_square(x, y).is_some(), inside, "({}, {})", x, y);
            y += 7.5;
        }
        x += 7.5;
    }
}

#[test]
fn pawn_e2_to_e4_flips_turn() {
    let mut session = Session::new();

    assert_eq!(click(&mut session, "e2"), ClickOutcome::Selected(sq("e2")));
    assert_eq!(session.state(), SelectionState::PieceSelected);
    assert_eq!(session.selection().selected, Some(Square::new(2, 5).unwrap()));

    assert!(matches!(click(&mut session, "e4"), ClickOutcome::Committed(_)));
    let pawn = Piece::new(Color::White, Role::Pawn);
    assert_eq!(session.board().piece_at(sq("e4")), Some(pawn));
    assert_eq!(session.board().piece_at(sq("e2")), None);
    assert_eq!(session.turn(), Color::Black);
    assert_eq!(session.state(), SelectionState::Idle);
    assert_eq!(session.selection().target, None);
}

#[test]
fn black_rook_cannot_move_on_whites_turn() {
    let mut session = Session::new();

    // Selection itself ignores whose turn it is.
    assert_eq!(click(&mut session, "a8"), ClickOutcome::Selected(sq("a8")));

    assert!(matches!(click(&mut session, "a6"), ClickOutcome::Rejected(_)));
    assert_eq!(session.board(), &Board::starting_position());
    assert_eq!(session.state(), SelectionState::Idle);
    assert_eq!(session.selection().selected, None);
    assert_eq!(session.selection().target, None);
    assert_eq!(session.turn(), Color::White);
}

#[test]
fn click_outside_drops_selection_without_moving() {
    let mut session = Session::new();
    click(&mut session, "g1");
    assert_eq!(session.click_at(&G, 0.0, 0.0), ClickOutcome::Cleared);
    assert_eq!(session.state(), SelectionState::Idle);
    assert_eq!(session.selection().target, None);
    assert_eq!(session.board(), &Board::starting_position());
}

#[test]
fn turn_alternates_once_per_committed_move() {
    let mut session = Session::new();
    let moves = [
        ("e2", "e4"),
        ("e7", "e5"),
        ("g1", "f3"),
        ("b8", "c6"),
        ("f1", "c4"),
        ("g8", "f6"),
    ];
    for (n, (from, to)) in moves.iter().enumerate() {
        let expected = if n % 2 == 0 { Color::White } else { Color::Black };
        assert_eq!(session.turn(), expected);
        click(&mut session, from);
        assert!(matches!(click(&mut session, to), ClickOutcome::Committed(_)));
    }
    assert_eq!(session.moves_played(), moves.len() as u32);
    assert_eq!(session.turn(), Color::White);
    assert_eq!(session.board().pieces().count(), 32);
}

#[test]
fn rejected_moves_do_not_advance_the_turn() {
    let mut session = Session::new();
    click(&mut session, "e2");
    click(&mut session, "e4");
    // White tries again out of turn.
    click(&mut session, "d2");
    assert!(matches!(click(&mut session, "d4"), ClickOutcome::Rejected(_)));
    assert_eq!(session.turn(), Color::Black);
    assert_eq!(session.moves_played(), 1);
}
