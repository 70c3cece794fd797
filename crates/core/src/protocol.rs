//! Wire messages exchanged between clients and the game authority.
//!
//! Shapes follow the JSON vocabulary the authority speaks: a `type` tag
//! plus camelCase fields, boards as 8x8 row-major grids of
//! `null | {kind, player}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::board::{Board, Color};
use crate::error::Result;
use crate::game::GameSession;

/// Messages a client may send to the authority.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    #[serde(rename_all = "camelCase")]
    Move {
        from_row: i64,
        from_col: i64,
        to_row: i64,
        to_col: i64,
    },
    Chat {
        text: String,
        /// Opaque client value, relayed verbatim.
        #[serde(default)]
        timestamp: Value,
    },
    Reset,
}

impl ClientMessage {
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Messages the authority sends to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    #[serde(rename_all = "camelCase")]
    Assigned {
        player: Color,
        game_state: GameStateView,
    },
    GameFull {
        message: String,
    },
    #[serde(rename_all = "camelCase")]
    GameState {
        board: Board,
        current_player: Color,
    },
    #[serde(rename_all = "camelCase")]
    GameReset {
        game_state: GameStateView,
    },
    PlayerJoined {
        player: Color,
    },
    PlayerLeft {
        player: Color,
    },
    Chat {
        text: String,
        player: Color,
        timestamp: Value,
    },
}

/// The board-and-turn snapshot embedded in `assigned` and `gameReset`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateView {
    pub board: Board,
    pub current_player: Color,
}

impl GameStateView {
    pub fn of(session: &GameSession) -> Self {
        Self {
            board: session.board().clone(),
            current_player: session.current_player(),
        }
    }
}
