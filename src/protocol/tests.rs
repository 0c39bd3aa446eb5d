use serde_json::json;

use super::*;
use crate::game::{Coord, Mark, Symbol, Winner};
use crate::session::RoomId;

#[test]
fn test_client_intents_wire_form() {
    let find = serde_json::to_value(ClientIntent::find_room(true)).unwrap();
    assert_eq!(find, json!({"event": "find_room", "data": {"solo": true}}));

    let mv = serde_json::to_value(ClientIntent::make_move(RoomId::new("4821"), Coord::new(3, 7)))
        .unwrap();
    assert_eq!(
        mv,
        json!({"event": "make_move", "data": {"room": "4821", "row": 3, "col": 7}})
    );

    let timeout = serde_json::to_value(ClientIntent::timeout(RoomId::new("R1"))).unwrap();
    assert_eq!(timeout, json!({"event": "timeout", "data": {"room": "R1"}}));
}

#[test]
fn test_decode_room_joined_and_start() {
    let joined: ServerEvent = serde_json::from_value(
        json!({"event": "room_joined", "data": {"room": "R1", "symbol": "X"}}),
    )
    .unwrap();
    assert_eq!(
        joined,
        ServerEvent::RoomJoined {
            room: RoomId::new("R1"),
            symbol: Symbol::X
        }
    );

    let start: ServerEvent =
        serde_json::from_value(json!({"event": "start_game", "data": {"turn": "O"}})).unwrap();
    assert_eq!(start, ServerEvent::StartGame { turn: Symbol::O });
}

#[test]
fn test_decode_connected_with_and_without_sid() {
    let with: ServerEvent =
        serde_json::from_value(json!({"event": "connected", "data": {"sid": "abc"}})).unwrap();
    assert_eq!(
        with,
        ServerEvent::Connected(Some(Handshake {
            sid: Some("abc".into())
        }))
    );

    let without: ServerEvent =
        serde_json::from_value(json!({"event": "connected", "data": {}})).unwrap();
    assert_eq!(without, ServerEvent::Connected(Some(Handshake::default())));
}

#[test]
fn test_decode_connected_without_payload() {
    let bare: ServerEvent = serde_json::from_value(json!({"event": "connected"})).unwrap();
    assert_eq!(bare, ServerEvent::Connected(None));

    let null: ServerEvent =
        serde_json::from_value(json!({"event": "connected", "data": null})).unwrap();
    assert_eq!(null, ServerEvent::Connected(None));
}

#[test]
fn test_decode_finished_state_update() {
    let mut rows = vec![vec![""; 16]; 16];
    for c in 0..5 {
        rows[4][c] = "X";
    }
    let frame = json!({
        "event": "state_update",
        "data": {
            "board": rows,
            "turn": null,
            "finished": true,
            "winner": "X",
            "winner_positions": [[4, 0], [4, 1], [4, 2], [4, 3], [4, 4]]
        }
    });
    let ServerEvent::StateUpdate(update) = serde_json::from_value(frame).unwrap() else {
        panic!("expected a state update");
    };
    assert!(update.finished);
    assert_eq!(update.winner, Some(Winner::X));
    assert_eq!(update.turn, None);
    assert_eq!(update.winner_positions.len(), 5);
    assert_eq!(update.board.mark(Coord::new(4, 4)), Some(Mark::X));
    assert_eq!(update.last_move, None);
}

#[test]
fn test_decode_draw_and_running_update() {
    let draw: ServerEvent = serde_json::from_value(json!({
        "event": "state_update",
        "data": {"board": [["X", "O"], ["O", "X"]], "finished": true, "winner": "draw", "winner_positions": []}
    }))
    .unwrap();
    let ServerEvent::StateUpdate(draw) = draw else {
        panic!("expected a state update");
    };
    assert_eq!(draw.winner, Some(Winner::Draw));

    let running: ServerEvent = serde_json::from_value(json!({
        "event": "state_update",
        "data": {"board": [["X", ""], ["", ""]], "finished": false, "winner": null, "turn": "O", "last_move": [0, 0]}
    }))
    .unwrap();
    let ServerEvent::StateUpdate(running) = running else {
        panic!("expected a state update");
    };
    assert_eq!(running.turn, Some(Symbol::O));
    assert_eq!(running.last_move, Some(Coord::new(0, 0)));
}

#[test]
fn test_decode_error_and_opponent_left() {
    let err: ServerEvent =
        serde_json::from_value(json!({"event": "error", "data": {"msg": "Room does not exist"}}))
            .unwrap();
    assert_eq!(err, ServerEvent::Error { msg: "Room does not exist".into() });

    let left: ServerEvent =
        serde_json::from_value(json!({"event": "opponent_left", "data": {"msg": "gone"}}))
            .unwrap();
    assert_eq!(left, ServerEvent::OpponentLeft { msg: "gone".into() });
}

#[test]
fn test_unknown_event_and_ragged_board_rejected() {
    assert!(serde_json::from_value::<ServerEvent>(json!({"event": "chat", "data": {}})).is_err());
    assert!(serde_json::from_value::<ServerEvent>(json!({
        "event": "state_update",
        "data": {"board": [["", ""], [""]], "finished": false}
    }))
    .is_err());
}
