//! End-to-end games driven through the line protocol.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{Cursor, sink};
use tictactoe_agent::{
    Agent, AgentErrorKind, Diagnostics, FallbackPolicy, FirstAvailable, ProtocolErrorKind,
    RandomResample,
};
use tictactoe_core::{
    Board, BoardErrorKind, BoardInvariants, Cell, GridBoard, InvariantSet, Position, SetBoard,
    Status,
};

/// Plays the first listed cell that is still empty.
struct Scripted(Vec<usize>);

impl FallbackPolicy for Scripted {
    fn choose<B: Board>(&mut self, board: &B) -> Option<Position> {
        self.0
            .iter()
            .filter_map(|&i| Position::from_index(i))
            .find(|&pos| board.is_empty_at(pos))
    }
}

fn lines(out: Vec<u8>) -> Vec<String> {
    String::from_utf8(out)
        .expect("utf-8 output")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_moving_first_emits_a_move_immediately() {
    let mut agent: Agent<GridBoard, _> = Agent::new(RandomResample::new(StdRng::seed_from_u64(3)));
    let mut out = Vec::new();
    let result = agent.run(Cursor::new("1\n"), &mut out, Diagnostics::new(sink(), false));

    let moves = lines(out);
    assert_eq!(moves.len(), 1);
    let coord: usize = moves[0].parse().expect("integer move");
    assert!(coord <= 8);
    // Nothing more to read after our move.
    assert!(result.is_err());
}

#[test]
fn test_full_board_without_line_is_a_tie() {
    let mut agent: Agent<GridBoard, _> = Agent::new(Scripted(vec![0, 8, 7, 2, 3]));
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let status = agent
        .run(
            Cursor::new("1\n4\n1\n6\n5\n"),
            &mut out,
            Diagnostics::new(&mut diag, false),
        )
        .expect("game completes");

    assert_eq!(status, Status::Tie);
    assert_eq!(lines(out), vec!["0", "8", "7", "2", "3"]);
    assert_eq!(String::from_utf8(diag).unwrap(), "Tie :o\n");
    assert!(agent.board().is_full());
}

#[test]
fn test_takes_immediate_win_and_stops_reading() {
    let mut agent: Agent<GridBoard, _> = Agent::new(FirstAvailable);
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let status = agent
        .run(
            Cursor::new("1\n4\n8\n3\n"),
            &mut out,
            Diagnostics::new(&mut diag, false),
        )
        .expect("game completes");

    assert_eq!(status, Status::Win);
    assert_eq!(lines(out), vec!["0", "1", "2"]);
    assert_eq!(String::from_utf8(diag).unwrap(), "I won!!\n");
    assert_eq!(agent.history().len(), 5);
}

#[test]
fn test_opponent_line_is_a_loss() {
    let mut agent: Agent<GridBoard, _> = Agent::new(FirstAvailable);
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let status = agent
        .run(
            Cursor::new("0\n4\n2\n6\n"),
            &mut out,
            Diagnostics::new(&mut diag, false),
        )
        .expect("game completes");

    assert_eq!(status, Status::Loss);
    assert_eq!(lines(out), vec!["0", "1"]);
    assert_eq!(String::from_utf8(diag).unwrap(), "I lost :(\n");
}

#[test]
fn test_opponent_move_onto_my_cell_is_fatal() {
    let mut agent: Agent<GridBoard, _> = Agent::new(FirstAvailable);
    let mut out = Vec::new();
    let err = agent
        .run(
            Cursor::new("1\n4\n2\n3\n7\n"),
            &mut out,
            Diagnostics::new(sink(), false),
        )
        .unwrap_err();

    match err.kind {
        AgentErrorKind::IllegalOpponentMove(e) => {
            assert_eq!(e.kind, BoardErrorKind::Occupied(Position::MiddleLeft));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(lines(out), vec!["0", "1", "3"]);
}

#[test]
fn test_malformed_line_is_fatal() {
    let mut agent: Agent<SetBoard, _> = Agent::new(FirstAvailable);
    let mut out = Vec::new();
    let err = agent
        .run(Cursor::new("0\nfour\n"), &mut out, Diagnostics::new(sink(), false))
        .unwrap_err();

    match err.kind {
        AgentErrorKind::Protocol(e) => {
            assert_eq!(e.kind, ProtocolErrorKind::NotAnInteger("four".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(out.is_empty());
}

#[test]
fn test_board_art_goes_to_diagnostics_only() {
    let mut agent: Agent<GridBoard, _> = Agent::new(FirstAvailable);
    let mut out = Vec::new();
    let mut diag = Vec::new();
    agent
        .run(
            Cursor::new("1\n4\n8\n"),
            &mut out,
            Diagnostics::new(&mut diag, true),
        )
        .expect("game completes");

    let diag = String::from_utf8(diag).unwrap();
    assert!(diag.contains("X|X|X"));
    assert!(diag.contains("-----"));
    assert!(diag.ends_with("I won!!\n"));
    assert!(lines(out).iter().all(|l| l.parse::<usize>().is_ok()));
}

/// Plays agent against a first-empty-cell opponent through the public API.
fn play_out<B: Board, P: FallbackPolicy>(mut agent: Agent<B, P>, me_first: bool) -> (Status, usize) {
    agent.set_first_mover(me_first);
    let mut moves = 0;
    loop {
        assert!(BoardInvariants::check_all(agent.board()).is_ok());
        let status = agent.check_terminal();
        if status.is_terminal() {
            return (status, moves);
        }
        if agent.my_turn() {
            let pos = agent.play_my_move().expect("legal move");
            assert_eq!(agent.board().cell(pos), Cell::Mine);
        } else {
            let pos = agent.board().empty_positions()[0];
            agent.apply_opponent_move(pos).expect("legal opponent move");
        }
        moves += 1;
    }
}

#[test]
fn test_every_game_terminates_within_nine_moves() {
    for seed in 0..32 {
        for me_first in [true, false] {
            let grid: Agent<GridBoard, _> =
                Agent::new(RandomResample::new(StdRng::seed_from_u64(seed)));
            let (status, moves) = play_out(grid, me_first);
            assert!(status.is_terminal());
            assert!(moves <= 9);

            let set: Agent<SetBoard, _> = Agent::new(FirstAvailable);
            let (status, moves) = play_out(set, me_first);
            assert!(status.is_terminal());
            assert!(moves <= 9);
        }
    }
}
