//! The game session state machine: command dispatch, turn alternation, phase
//! tracking, and win detection.
//!
//! The session is pure state, no sockets and no tasks. The server loop feeds
//! it one line at a time from whichever seat [`GameSession::active`] names
//! and writes back the single [`Reply`] it returns. Turn alternation is a
//! plain state transition taken after every fully processed line.

use crate::config::MIN_BOARD_DIM;
use crate::placement::{self, PlacedPiece};
use crate::player::PlayerState;
use crate::protocol::{parse_command, Command, ErrorCode, PlacementRequest, Reply};
use crate::shapes::{NUM_PIECE_KINDS, NUM_ROTATIONS};

/// One of the two player slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub fn opponent(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// Session phase. `PlacingShips` and `Battling` are not gated apart at the
/// protocol level; the split is tracked for observability only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    WaitingForBegin,
    PlacingShips,
    Battling,
    Finished,
}

/// A single two-player game. Owns both [`PlayerState`]s exclusively; there
/// is no shared mutable state, so independent sessions need no coordination.
pub struct GameSession {
    players: [PlayerState; 2],
    turn: Seat,
    phase: Phase,
}

impl GameSession {
    /// Fresh session: player one to move, no boards yet.
    pub fn new() -> Self {
        GameSession {
            players: [PlayerState::new(), PlayerState::new()],
            turn: Seat::One,
            phase: Phase::WaitingForBegin,
        }
    }

    /// Seat whose connection should be read next.
    pub fn active(&self) -> Seat {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn player(&self, seat: Seat) -> &PlayerState {
        &self.players[seat.index()]
    }

    /// The active connection reached end-of-stream; no further commands are
    /// processed in this session.
    pub fn handle_disconnect(&mut self) {
        self.phase = Phase::Finished;
    }

    /// Process one line from the active seat and return the single reply
    /// owed for it. The turn passes to the other seat afterwards, whatever
    /// the outcome.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let reply = match parse_command(line) {
            Ok(command) => self.dispatch(self.turn, command),
            Err(code) => Reply::Error(code),
        };
        if reply == Reply::Win {
            self.phase = Phase::Finished;
        }
        self.turn = self.turn.opponent();
        reply
    }

    fn dispatch(&mut self, seat: Seat, command: Command) -> Reply {
        match command {
            Command::Begin { width, height } => self.handle_begin(width, height),
            Command::Place(request) => self.handle_place(seat, request),
            Command::Initialize(requests) => self.handle_initialize(seat, requests),
            Command::Shoot { col, row } => self.handle_shoot(seat, col, row),
        }
    }

    /// `B w h`: create both boards and arm both counters. A second `Begin`
    /// is an unexpected command, not a board reset.
    fn handle_begin(&mut self, width: i32, height: i32) -> Reply {
        if self.phase != Phase::WaitingForBegin {
            return Reply::Error(ErrorCode::Malformed);
        }
        if width < MIN_BOARD_DIM || height < MIN_BOARD_DIM {
            return Reply::Error(ErrorCode::BadDimensions);
        }
        for player in &mut self.players {
            if player.start(width, height).is_err() {
                return Reply::Error(ErrorCode::BadDimensions);
            }
        }
        self.phase = Phase::PlacingShips;
        Reply::Ack
    }

    fn handle_place(&mut self, seat: Seat, request: PlacementRequest) -> Reply {
        match self.try_place(seat, request) {
            Ok(()) => Reply::Ack,
            Err(code) => Reply::Error(code),
        }
    }

    /// `I ...`: quadruples validated and applied left to right. The first
    /// failure emits its error and abandons the rest; earlier quadruples in
    /// the same line stay placed. An empty batch succeeds vacuously.
    fn handle_initialize(&mut self, seat: Seat, requests: Vec<PlacementRequest>) -> Reply {
        for request in requests {
            if let Err(code) = self.try_place(seat, request) {
                return Reply::Error(code);
            }
        }
        Reply::Ack
    }

    /// Range-check, validate, and apply one placement for `seat`.
    fn try_place(&mut self, seat: Seat, request: PlacementRequest) -> Result<(), ErrorCode> {
        if self.phase == Phase::WaitingForBegin {
            return Err(ErrorCode::Malformed);
        }
        if !(0..NUM_PIECE_KINDS).contains(&request.kind)
            || !(0..NUM_ROTATIONS).contains(&request.rotation)
        {
            return Err(ErrorCode::BadPieceKind);
        }
        let player = &mut self.players[seat.index()];
        if player.fleet_full() {
            return Err(ErrorCode::BadPlacement);
        }
        let piece = PlacedPiece {
            kind: request.kind as u8,
            rotation: request.rotation as u8,
            col: request.col,
            row: request.row,
        };
        let board = player.board_mut().ok_or(ErrorCode::Malformed)?;
        if !placement::is_valid(board, &piece) {
            return Err(ErrorCode::BadPlacement);
        }
        placement::place_on_board(board, &piece);
        player.record_piece(piece);
        Ok(())
    }

    /// `F col row`: resolve a shot against the opponent board. Only a cell
    /// currently holding `Ship` counts as a hit; re-shooting a hit cell is a
    /// miss and never moves the counter.
    fn handle_shoot(&mut self, seat: Seat, col: i32, row: i32) -> Reply {
        if self.phase == Phase::WaitingForBegin {
            return Reply::Error(ErrorCode::Malformed);
        }
        if self.phase == Phase::PlacingShips {
            self.phase = Phase::Battling;
        }
        let opponent = &mut self.players[seat.opponent().index()];
        let Some(board) = opponent.board_mut() else {
            return Reply::Error(ErrorCode::Malformed);
        };
        if !board.in_bounds(col, row) {
            return Reply::Error(ErrorCode::BadShot);
        }
        match board.cell_at(col, row) {
            Ok(crate::board::Cell::Ship) => {
                board.mark_hit(col, row);
                if opponent.register_hit() == 0 {
                    Reply::Win
                } else {
                    Reply::Hit
                }
            }
            _ => Reply::Miss,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
