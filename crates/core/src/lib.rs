//! Chess Duel Core Library
//!
//! A pure, synchronous rules engine for standard chess: geometric move
//! validation, attack and check/checkmate detection, castling and en
//! passant, move application, and legal-move enumeration, plus the wire
//! message vocabulary spoken by the game authority.

pub mod board;
pub mod error;
pub mod game;
pub mod protocol;
pub mod rules;

pub use board::{Board, CastleSide, Color, Piece, PieceKind, Square};
pub use error::{Error, Result};
pub use game::GameSession;
pub use protocol::{ClientMessage, GameStateView, ServerMessage};

/// Basic position information
#[derive(Debug)]
pub struct PositionInfo {
    pub piece_count: u32,
    pub side_to_move: Color,
    pub is_check: bool,
    pub is_checkmate: bool,
}

/// Summarizes the side-to-move's situation in a session. There is no
/// stalemate outcome: `is_checkmate == false` does not promise a legal move
/// exists.
pub fn analyze_position(session: &GameSession) -> PositionInfo {
    let board = session.board();
    let side_to_move = session.current_player();

    PositionInfo {
        piece_count: board.piece_count(),
        side_to_move,
        is_check: board.is_in_check(side_to_move),
        is_checkmate: board.is_checkmate(side_to_move),
    }
}

/// Creates a board with the standard starting placement.
pub fn starting_board() -> Board {
    Board::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_summary() {
        let session = GameSession::new();
        let info = analyze_position(&session);

        assert_eq!(info.piece_count, 32);
        assert_eq!(info.side_to_move, Color::White);
        assert!(!info.is_check);
        assert!(!info.is_checkmate);
    }

    #[test]
    fn starting_board_matches_new_session() {
        assert_eq!(&starting_board(), GameSession::new().board());
    }
}
