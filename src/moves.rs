// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `moves` module defines chess moves and how they are applied to
//! positions.
//!
//! A `Move` is built through one of five named constructors and applied
//! with [`Move::apply`], a pure function from one position snapshot to
//! the next. The representation is a private tagged union, which keeps
//! the set of move shapes closed: a move is exactly one of regular, en
//! passant, promotion, short castling, or long castling, and en passant
//! and promotion cannot be combined by construction.
//!
//! Moves never validate chess legality. `apply` trusts the caller to
//! supply a move that is legal for the given position and only performs
//! the placement arithmetic; the one thing it does check is that the
//! source square is occupied at all, since a move with an empty source
//! square signals a caller bug rather than a recoverable condition.

use std::fmt::{self, Display};

use crate::board::{Board, Square};
use crate::position::Position;
use crate::types::{Color, Piece, PieceKind};

/// A chess move. Applying it to a `Position` yields the resulting
/// `Position`; the move itself carries no reference to any particular
/// position and can be replayed against any number of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move(Kind);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Kind {
    Regular { from: Square, to: Square },
    EnPassant { from: Square, to: Square },
    Promotion { from: Square, to: Square, promoted: PieceKind },
    ShortCastling(Color),
    LongCastling(Color),
}

impl Move {
    /// Moves a piece from a square to another square.
    pub fn regular(from: Square, to: Square) -> Move {
        Move(Kind::Regular { from, to })
    }

    /// Moves a pawn onto the square an opposing pawn just passed over,
    /// capturing that pawn en passant.
    pub fn en_passant(from: Square, to: Square) -> Move {
        Move(Kind::EnPassant { from, to })
    }

    /// Moves a pawn to the last rank and promotes it to the given piece
    /// kind.
    ///
    /// # Panics
    /// Panics if `promoted` is a pawn or a king, neither of which is a
    /// promotion piece.
    pub fn promotion(from: Square, to: Square, promoted: PieceKind) -> Move {
        match promoted {
            PieceKind::Pawn | PieceKind::King => panic!("invalid promotion piece"),
            _ => Move(Kind::Promotion { from, to, promoted }),
        }
    }

    /// Castles on the king side of the given color.
    pub fn short_castling(color: Color) -> Move {
        Move(Kind::ShortCastling(color))
    }

    /// Castles on the queen side of the given color.
    pub fn long_castling(color: Color) -> Move {
        Move(Kind::LongCastling(color))
    }

    /// Returns the source square of this move. For castling this is the
    /// king's starting square.
    pub fn source(self) -> Square {
        match self.0 {
            Kind::Regular { from, .. }
            | Kind::EnPassant { from, .. }
            | Kind::Promotion { from, .. } => from,
            Kind::ShortCastling(color) | Kind::LongCastling(color) => square(4, back_row(color)),
        }
    }

    /// Returns the destination square of this move. For castling this is
    /// the king's stop square.
    pub fn destination(self) -> Square {
        match self.0 {
            Kind::Regular { to, .. } | Kind::EnPassant { to, .. } | Kind::Promotion { to, .. } => {
                to
            }
            Kind::ShortCastling(color) => square(6, back_row(color)),
            Kind::LongCastling(color) => square(2, back_row(color)),
        }
    }

    /// Returns whether or not this move is an en passant capture.
    pub fn is_en_passant(self) -> bool {
        match self.0 {
            Kind::EnPassant { .. } => true,
            _ => false,
        }
    }

    /// Returns whether or not this move is a promotion.
    pub fn is_promotion(self) -> bool {
        self.promotion_piece().is_some()
    }

    /// Returns whether or not this move is a castling, on either side.
    pub fn is_castling(self) -> bool {
        match self.0 {
            Kind::ShortCastling(_) | Kind::LongCastling(_) => true,
            _ => false,
        }
    }

    /// If this move is a promotion, the piece kind the pawn is being
    /// promoted to.
    pub fn promotion_piece(self) -> Option<PieceKind> {
        match self.0 {
            Kind::Promotion { promoted, .. } => Some(promoted),
            _ => None,
        }
    }

    /// Applies this move to a position, returning the resulting
    /// position. The input position is never modified.
    ///
    /// Application is mechanical; it assumes the move is legal for the
    /// given position.
    ///
    /// # Panics
    /// Panics if the source square of a regular, en passant, or
    /// promotion move is empty. Such a move is inconsistent with the
    /// position it is being applied to, which is a caller bug.
    pub fn apply(&self, position: &Position) -> Position {
        trace!("applying {}", self);
        match self.0 {
            Kind::Regular { from, to } => {
                moving_piece(position, from);
                position.relocate(from, to)
            }
            Kind::EnPassant { from, to } => {
                let piece = moving_piece(position, from);
                let direction = piece.color.direction();
                // The captured pawn does not sit on the destination
                // square; it is one row behind it, on the square the
                // capturing pawn just passed over.
                let captured = to
                    .translate(Board::STANDARD, 0, -direction)
                    .expect("invalid move: en passant capture square outside the board");
                position.relocate(from, to).remove(captured)
            }
            Kind::Promotion { from, to, promoted } => {
                let piece = moving_piece(position, from);
                position
                    .relocate(from, to)
                    .put(to, Piece::new(promoted, piece.color))
            }
            Kind::ShortCastling(color) => {
                let row = back_row(color);
                position
                    .relocate(square(4, row), square(6, row))
                    .relocate(square(7, row), square(5, row))
            }
            Kind::LongCastling(color) => {
                let row = back_row(color);
                position
                    .relocate(square(4, row), square(2, row))
                    .relocate(square(0, row), square(3, row))
            }
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.source(), self.destination())?;
        if let Some(promoted) = self.promotion_piece() {
            write!(f, "{}", promoted)?;
        }
        Ok(())
    }
}

fn moving_piece(position: &Position, from: Square) -> Piece {
    position
        .at(from)
        .expect("invalid move: no piece at source square")
}

fn back_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

fn square(col: u8, row: u8) -> Square {
    Board::STANDARD.square(col, row).unwrap()
}
