//! Line-oriented wire protocol: inbound command grammar and outbound replies.
//!
//! One ASCII command per line, fields space-separated. The parser handles
//! grammar only; range and legality checks (piece kind, placement, shot
//! target) happen in the dispatcher so batch placements can fail mid-way
//! with the right code.

use core::fmt;

/// Protocol error taxonomy carried by `E <code>` replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed or unexpected command line.
    Malformed,
    /// `Begin` parameters out of range.
    BadDimensions,
    /// Unknown piece kind or rotation.
    BadPieceKind,
    /// Illegal placement: out of bounds, overlap, or fleet already full.
    BadPlacement,
    /// Shot target outside the opponent board.
    BadShot,
}

impl ErrorCode {
    pub fn code(self) -> u16 {
        match self {
            ErrorCode::Malformed => 100,
            ErrorCode::BadDimensions => 200,
            ErrorCode::BadPieceKind => 300,
            ErrorCode::BadPlacement => 400,
            ErrorCode::BadShot => 500,
        }
    }
}

/// One reply line; exactly one is produced per inbound command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Ack,
    Error(ErrorCode),
    Hit,
    Miss,
    Win,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ack => write!(f, "A"),
            Reply::Error(code) => write!(f, "E {}", code.code()),
            Reply::Hit => write!(f, "H"),
            Reply::Miss => write!(f, "M"),
            Reply::Win => write!(f, "W"),
        }
    }
}

/// A placement quadruple as parsed off the wire, ranges not yet checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRequest {
    pub kind: i32,
    pub rotation: i32,
    pub col: i32,
    pub row: i32,
}

/// A decoded inbound command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `B <width> <height>`
    Begin { width: i32, height: i32 },
    /// `S <col> <row> <kind> <rotation>`
    Place(PlacementRequest),
    /// `I <k0> <r0> <x0> <y0> ...`, quadruples applied left to right.
    Initialize(Vec<PlacementRequest>),
    /// `F <col> <row>`
    Shoot { col: i32, row: i32 },
}

/// Decode one command line. Grammar errors map to [`ErrorCode::Malformed`];
/// everything else is validated downstream.
pub fn parse_command(line: &str) -> Result<Command, ErrorCode> {
    let mut tokens = line.split_whitespace();
    let head = tokens.next().ok_or(ErrorCode::Malformed)?;
    let fields: Vec<i32> = tokens
        .map(|t| t.parse::<i32>().map_err(|_| ErrorCode::Malformed))
        .collect::<Result<_, _>>()?;

    match head {
        "B" => match fields[..] {
            [width, height] => Ok(Command::Begin { width, height }),
            _ => Err(ErrorCode::Malformed),
        },
        "S" => match fields[..] {
            [col, row, kind, rotation] => Ok(Command::Place(PlacementRequest {
                kind,
                rotation,
                col,
                row,
            })),
            _ => Err(ErrorCode::Malformed),
        },
        "I" => {
            if fields.len() % 4 != 0 {
                return Err(ErrorCode::Malformed);
            }
            let requests = fields
                .chunks_exact(4)
                .map(|q| PlacementRequest {
                    kind: q[0],
                    rotation: q[1],
                    col: q[2],
                    row: q[3],
                })
                .collect();
            Ok(Command::Initialize(requests))
        }
        "F" => match fields[..] {
            [col, row] => Ok(Command::Shoot { col, row }),
            _ => Err(ErrorCode::Malformed),
        },
        _ => Err(ErrorCode::Malformed),
    }
}
