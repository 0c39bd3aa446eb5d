use super::*;

#[test]
fn test_empty_board_size() {
    let board = Board::empty(16);
    assert_eq!(board.size(), 16);
    assert_eq!(board.rows().count(), 16);
    assert!(board.rows().all(|row| row.len() == 16));
    assert_eq!(board.occupied(), 0);
}

#[test]
fn test_mark_off_board_is_none() {
    let board = Board::empty(3);
    assert_eq!(board.mark(Coord::new(2, 2)), Some(Mark::Empty));
    assert_eq!(board.mark(Coord::new(3, 0)), None);
    assert_eq!(board.mark(Coord::new(0, 3)), None);
}

#[test]
fn test_board_decodes_wire_rows() {
    let board: Board = serde_json::from_str(r#"[["X","",""],["","O",""],["","",""]]"#).unwrap();
    assert_eq!(board.size(), 3);
    assert_eq!(board.mark(Coord::new(0, 0)), Some(Mark::X));
    assert_eq!(board.mark(Coord::new(1, 1)), Some(Mark::O));
    assert_eq!(board.occupied(), 2);
    assert_eq!(
        serde_json::to_string(&board).unwrap(),
        r#"[["X","",""],["","O",""],["","",""]]"#
    );
}

#[test]
fn test_ragged_board_rejected() {
    let rows = vec![vec![Mark::Empty; 2], vec![Mark::Empty; 1]];
    assert_eq!(
        Board::try_from(rows),
        Err(BoardError::Ragged { row: 1, len: 1, size: 2 })
    );
    assert!(serde_json::from_str::<Board>(r#"[["",""],[""]]"#).is_err());
}

#[test]
fn test_snapshot_annotations() {
    let mut snapshot = BoardSnapshot::empty(5);
    snapshot.winning_line = (0..5).map(|c| Coord::new(2, c)).collect();
    snapshot.last_move = Some(Coord::new(2, 4));
    assert!(snapshot.is_winning(Coord::new(2, 0)));
    assert!(!snapshot.is_winning(Coord::new(0, 2)));
    assert!(snapshot.is_last_move(Coord::new(2, 4)));
}

#[test]
fn test_coord_wire_form() {
    let coord: Coord = serde_json::from_str("[3, 7]").unwrap();
    assert_eq!(coord, Coord::new(3, 7));
    assert_eq!(serde_json::to_string(&coord).unwrap(), "[3,7]");
}

#[test]
fn test_countdown_runs_down_and_expires_once() {
    let mut countdown = Countdown::new();
    let token = countdown.start(3);
    assert_eq!(countdown.tick(token), Some(TimerEvent::Tick { remaining: 2 }));
    assert_eq!(countdown.tick(token), Some(TimerEvent::Tick { remaining: 1 }));
    assert_eq!(countdown.tick(token), Some(TimerEvent::Expired));
    assert!(!countdown.is_running());
    assert_eq!(countdown.tick(token), None);
    assert_eq!(countdown.tick(token), None);
}

#[test]
fn test_restart_supersedes_previous_run() {
    let mut countdown = Countdown::new();
    let first = countdown.start(1);
    let second = countdown.start(2);

    let mut expired = Vec::new();
    for _ in 0..5 {
        for token in [first, second] {
            if countdown.tick(token) == Some(TimerEvent::Expired) {
                expired.push(token);
            }
        }
    }
    assert_eq!(expired, vec![second]);
}

#[test]
fn test_stop_is_idempotent_and_silent() {
    let mut countdown = Countdown::new();
    assert!(!countdown.stop());
    let token = countdown.start(1);
    assert!(countdown.stop());
    assert!(!countdown.stop());
    assert_eq!(countdown.tick(token), None);
}

#[test]
fn test_zero_duration_expires_on_first_tick() {
    let mut countdown = Countdown::new();
    let token = countdown.start(0);
    assert_eq!(countdown.tick(token), Some(TimerEvent::Expired));
}

#[test]
fn test_winner_and_symbol_helpers() {
    assert_eq!(Winner::Draw.symbol(), None);
    assert_eq!(Winner::O.symbol(), Some(Symbol::O));
    assert_eq!(Symbol::X.opponent(), Symbol::O);
}
