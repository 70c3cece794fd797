//! Per-piece movement geometry, independent of turn order and check-safety.

use crate::board::{Board, Color, Piece, PieceKind, Square};

impl Board {
    /// Whether `piece` may move from `from` to `to` by its movement pattern
    /// and path-clearance rules alone. Ignores whose turn it is and whether
    /// the mover's own king would be left in check. Castling is not
    /// expressible here; it goes through the dedicated castling path.
    pub fn is_geometrically_legal(&self, piece: Piece, from: Square, to: Square) -> bool {
        if from == to {
            return false;
        }
        if self
            .piece_at(to)
            .is_some_and(|target| target.color == piece.color)
        {
            return false;
        }

        match piece.kind {
            PieceKind::Pawn => self.pawn_move_ok(piece.color, from, to),
            PieceKind::Rook => self.rook_move_ok(from, to),
            PieceKind::Knight => knight_move_ok(from, to),
            PieceKind::Bishop => self.bishop_move_ok(from, to),
            PieceKind::Queen => self.rook_move_ok(from, to) || self.bishop_move_ok(from, to),
            PieceKind::King => king_move_ok(from, to),
        }
    }

    fn pawn_move_ok(&self, color: Color, from: Square, to: Square) -> bool {
        let direction = color.pawn_direction();
        let row_diff = to.row() as i32 - from.row() as i32;
        let col_diff = (to.col() as i32 - from.col() as i32).abs();

        // Forward pushes require an empty destination. The double step only
        // checks the destination, not the skipped square.
        if col_diff == 0 && self.piece_at(to).is_none() {
            if row_diff == direction {
                return true;
            }
            if from.row() == color.pawn_row() && row_diff == 2 * direction {
                return true;
            }
        }

        // Diagonal capture: an enemy on the destination, or the current en
        // passant target.
        if col_diff == 1 && row_diff == direction {
            if self.piece_at(to).is_some() {
                return true;
            }
            if self.en_passant_target() == Some(to) {
                return true;
            }
        }

        false
    }

    fn rook_move_ok(&self, from: Square, to: Square) -> bool {
        if from.row() != to.row() && from.col() != to.col() {
            return false;
        }
        self.path_clear(from, to)
    }

    fn bishop_move_ok(&self, from: Square, to: Square) -> bool {
        let row_diff = (to.row() as i32 - from.row() as i32).abs();
        let col_diff = (to.col() as i32 - from.col() as i32).abs();
        if row_diff != col_diff {
            return false;
        }
        self.path_clear(from, to)
    }

    /// Walks the straight or diagonal line strictly between `from` and `to`,
    /// failing on the first occupied square.
    fn path_clear(&self, from: Square, to: Square) -> bool {
        let row_step = (to.row() as i32 - from.row() as i32).signum();
        let col_step = (to.col() as i32 - from.col() as i32).signum();

        let mut row = from.row() as i32 + row_step;
        let mut col = from.col() as i32 + col_step;
        while row != to.row() as i32 || col != to.col() as i32 {
            let square = Square::new(row as u8, col as u8)
                .expect("intermediate square stays on the board");
            if self.piece_at(square).is_some() {
                return false;
            }
            row += row_step;
            col += col_step;
        }
        true
    }
}

fn knight_move_ok(from: Square, to: Square) -> bool {
    let row_diff = (to.row() as i32 - from.row() as i32).abs();
    let col_diff = (to.col() as i32 - from.col() as i32).abs();
    (row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2)
}

fn king_move_ok(from: Square, to: Square) -> bool {
    let row_diff = (to.row() as i32 - from.row() as i32).abs();
    let col_diff = (to.col() as i32 - from.col() as i32).abs();
    row_diff <= 1 && col_diff <= 1
}
