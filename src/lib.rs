#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod client;
pub mod config;
pub mod coord;
pub mod display;
pub mod engine;
pub mod error;
pub mod event;
pub mod force;
pub mod grid;
pub mod piece;
pub mod role;
pub mod rules;
pub mod test_util;
pub mod view;

pub use client::{BoardController, MoveOutcome, PieceDrag};
pub use config::BoardConfig;
pub use coord::{Col, Coord, Row};
pub use display::{DisplayCoord, SquareShade};
pub use engine::ShakmatyEngine;
pub use error::ClientError;
pub use event::{ClientEvent, ServerEvent};
pub use force::Force;
pub use piece::{Piece, PieceKind};
pub use role::PlayerRole;
pub use rules::{IllegalMove, MoveRecord, MoveRequest, RulesEngine};
pub use view::{BoardView, Gesture, GestureResponse, RenderedPiece, RenderedSquare};
