//! Legal move enumeration for a single square.

use crate::board::{Board, CastleSide, PieceKind, Square};

impl Board {
    /// Destinations from `from` that are geometrically valid and, once
    /// simulated on an independent copy, leave the mover's own king out of
    /// check. Castling destinations (king column +/- 2) are appended when
    /// permitted. Order is deterministic: row-major, then kingside, then
    /// queenside.
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };

        let mut moves = Vec::new();
        for to in Board::squares() {
            if !self.is_geometrically_legal(piece, from, to) {
                continue;
            }
            let mut simulated = self.clone();
            if simulated.apply_move(from, to) && !simulated.is_in_check(piece.color) {
                moves.push(to);
            }
        }

        if piece.kind == PieceKind::King {
            if self.can_castle(piece.color, CastleSide::Kingside) {
                if let Some(to) = Square::new(from.row(), 6) {
                    moves.push(to);
                }
            }
            if self.can_castle(piece.color, CastleSide::Queenside) {
                if let Some(to) = Square::new(from.row(), 2) {
                    moves.push(to);
                }
            }
        }

        moves
    }
}
