use tetraship::{Cell, ErrorCode, GameSession, Phase, Reply, Seat};

#[test]
fn begin_creates_both_boards_and_counters() {
    let mut session = GameSession::new();
    assert_eq!(session.active(), Seat::One);
    assert_eq!(session.handle_line("B 12 10"), Reply::Ack);
    assert_eq!(session.phase(), Phase::PlacingShips);
    for seat in [Seat::One, Seat::Two] {
        let player = session.player(seat);
        let board = player.board().expect("board created by Begin");
        assert_eq!(board.width(), 12);
        assert_eq!(board.height(), 10);
        assert_eq!(player.ships_remaining(), 5);
    }
}

#[test]
fn begin_below_minimum_creates_nothing() {
    let mut session = GameSession::new();
    assert_eq!(
        session.handle_line("B 9 10"),
        Reply::Error(ErrorCode::BadDimensions)
    );
    assert_eq!(session.phase(), Phase::WaitingForBegin);
    assert!(session.player(Seat::One).board().is_none());
    assert!(session.player(Seat::Two).board().is_none());
    // session stays alive; the other player can still begin
    assert_eq!(session.handle_line("B 10 10"), Reply::Ack);
}

#[test]
fn commands_before_begin_are_unexpected() {
    for line in ["S 0 0 0 0", "I 0 0 0 0", "F 3 3"] {
        let mut session = GameSession::new();
        assert_eq!(session.handle_line(line), Reply::Error(ErrorCode::Malformed));
    }
}

#[test]
fn repeated_begin_is_unexpected() {
    let mut session = GameSession::new();
    assert_eq!(session.handle_line("B 10 10"), Reply::Ack);
    assert_eq!(
        session.handle_line("B 10 10"),
        Reply::Error(ErrorCode::Malformed)
    );
}

#[test]
fn turn_alternates_after_every_line_including_errors() {
    let mut session = GameSession::new();
    assert_eq!(session.active(), Seat::One);
    session.handle_line("garbage");
    assert_eq!(session.active(), Seat::Two);
    session.handle_line("B 10 10");
    assert_eq!(session.active(), Seat::One);
    session.handle_line("F 99 99");
    assert_eq!(session.active(), Seat::Two);
}

#[test]
fn place_records_piece_and_marks_cells() {
    let mut session = GameSession::new();
    session.handle_line("B 10 10"); // seat one
    assert_eq!(session.handle_line("S 2 3 0 0"), Reply::Ack); // seat two
    let player = session.player(Seat::Two);
    assert_eq!(player.pieces().len(), 1);
    let board = player.board().unwrap();
    for (col, row) in [(2, 3), (3, 3), (2, 4), (3, 4)] {
        assert_eq!(board.cell_at(col, row).unwrap(), Cell::Ship);
    }
}

#[test]
fn unknown_piece_kind_and_rotation_are_rejected() {
    let mut session = GameSession::new();
    session.handle_line("B 10 10");
    assert_eq!(
        session.handle_line("S 0 0 7 0"),
        Reply::Error(ErrorCode::BadPieceKind)
    );
    assert_eq!(
        session.handle_line("S 0 0 -1 0"),
        Reply::Error(ErrorCode::BadPieceKind)
    );
    assert_eq!(
        session.handle_line("S 0 0 0 4"),
        Reply::Error(ErrorCode::BadPieceKind)
    );
}

#[test]
fn illegal_placement_is_rejected_and_board_untouched() {
    let mut session = GameSession::new();
    session.handle_line("B 10 10"); // seat one
    session.handle_line("S 0 0 0 0"); // seat two places a square
    session.handle_line("F 9 9"); // seat one keeps the turn moving
    assert_eq!(
        session.handle_line("S 1 1 0 0"), // overlaps the square
        Reply::Error(ErrorCode::BadPlacement)
    );
    assert_eq!(session.player(Seat::Two).pieces().len(), 1);
}

#[test]
fn sixth_placement_is_rejected() {
    let mut session = GameSession::new();
    session.handle_line("B 10 10"); // seat one
    // seat two fills the fleet in one batch, sixth quadruple over capacity
    let reply =
        session.handle_line("I 0 0 0 0 0 0 2 0 0 0 4 0 0 0 6 0 0 0 8 0 0 0 0 2");
    assert_eq!(reply, Reply::Error(ErrorCode::BadPlacement));
    assert_eq!(session.player(Seat::Two).pieces().len(), 5);
}

#[test]
fn initialize_stops_at_first_failure_keeping_earlier_pieces() {
    let mut session = GameSession::new();
    session.handle_line("B 10 10"); // seat one
    // second quadruple overlaps the first
    assert_eq!(
        session.handle_line("I 0 0 0 0 0 0 1 1"),
        Reply::Error(ErrorCode::BadPlacement)
    );
    assert_eq!(session.player(Seat::Two).pieces().len(), 1);

    session.handle_line("F 9 9"); // seat one
    // bad kind in the second quadruple: first one stays placed
    assert_eq!(
        session.handle_line("I 0 0 4 4 9 0 6 6"),
        Reply::Error(ErrorCode::BadPieceKind)
    );
    assert_eq!(session.player(Seat::Two).pieces().len(), 2);
}

#[test]
fn empty_initialize_is_vacuously_acknowledged() {
    let mut session = GameSession::new();
    session.handle_line("B 10 10");
    assert_eq!(session.handle_line("I"), Reply::Ack);
    assert!(session.player(Seat::Two).pieces().is_empty());
}

#[test]
fn shots_resolve_hit_miss_and_counter() {
    let mut session = GameSession::new();
    session.handle_line("B 10 10"); // seat one
    session.handle_line("S 0 0 0 0"); // seat two places a square

    assert_eq!(session.handle_line("F 0 0"), Reply::Hit); // seat one
    assert_eq!(session.player(Seat::Two).ships_remaining(), 4);

    assert_eq!(session.handle_line("F 5 5"), Reply::Miss); // seat two, empty cell
    assert_eq!(session.player(Seat::One).ships_remaining(), 5);

    // re-shooting a hit cell is a miss and leaves the counter alone
    assert_eq!(session.handle_line("F 0 0"), Reply::Miss); // seat one
    assert_eq!(session.player(Seat::Two).ships_remaining(), 4);
}

#[test]
fn shot_outside_opponent_board_is_rejected() {
    let mut session = GameSession::new();
    session.handle_line("B 10 10");
    session.handle_line("S 0 0 0 0");
    assert_eq!(session.handle_line("F 10 0"), Reply::Error(ErrorCode::BadShot));
    assert_eq!(session.handle_line("F 0 -1"), Reply::Error(ErrorCode::BadShot));
}

#[test]
fn fifth_hit_wins_and_finishes_the_session() {
    let mut session = GameSession::new();
    session.handle_line("B 10 10"); // seat one
    session.handle_line("I 0 0 0 0 0 0 5 5"); // seat two: two squares

    let shots = [(0, 0), (1, 0), (0, 1), (1, 1)];
    for (col, row) in shots {
        assert_eq!(session.handle_line(&format!("F {} {}", col, row)), Reply::Hit);
        assert_eq!(session.handle_line("F 9 9"), Reply::Miss); // seat two passes time
    }
    assert_eq!(session.player(Seat::Two).ships_remaining(), 1);

    assert_eq!(session.handle_line("F 5 5"), Reply::Win);
    assert!(session.is_finished());
    assert_eq!(session.phase(), Phase::Finished);
    // board cell still transitioned on the winning shot
    assert_eq!(
        session.player(Seat::Two).board().unwrap().cell_at(5, 5).unwrap(),
        Cell::Hit
    );
}

#[test]
fn disconnect_finishes_the_session() {
    let mut session = GameSession::new();
    session.handle_line("B 10 10");
    session.handle_disconnect();
    assert!(session.is_finished());
}

#[test]
fn extreme_anchor_placement_is_an_error_not_a_fault() {
    let mut session = GameSession::new();
    session.handle_line("B 10 10"); // seat one
    assert_eq!(
        session.handle_line(&format!("S {} 0 0 0", i32::MAX)),
        Reply::Error(ErrorCode::BadPlacement)
    );
    assert_eq!(
        session.handle_line(&format!("I 0 0 {} {}", i32::MAX, i32::MIN)),
        Reply::Error(ErrorCode::BadPlacement)
    );
    // session continues normally afterwards
    assert_eq!(session.handle_line("S 0 0 0 0"), Reply::Ack);
}

#[test]
fn extreme_shot_target_is_an_error_not_a_fault() {
    let mut session = GameSession::new();
    session.handle_line("B 10 10");
    assert_eq!(
        session.handle_line(&format!("F {} {}", i32::MAX, i32::MIN)),
        Reply::Error(ErrorCode::BadShot)
    );
}
