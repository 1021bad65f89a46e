// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Immutable snapshots of piece placement. A `Position` is a value: the
//! four primitives (`at`, `relocate`, `put`, `remove`) never touch the
//! receiver, they return the next snapshot. None of them knows anything
//! about chess legality; they only perform the mechanical bookkeeping
//! that `Move::apply` composes.

use std::fmt;

use hashbrown::HashMap;

use crate::board::{Board, Square};
use crate::types::{Color, Piece};

/// An immutable snapshot of piece placement across the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pieces: HashMap<Square, Piece>,
}

impl Position {
    /// A position with no pieces on it.
    pub fn empty() -> Position {
        Position {
            pieces: HashMap::new(),
        }
    }

    /// The standard chess starting position.
    pub fn initial() -> Position {
        INITIAL.clone()
    }

    /// Starts assembling a position piece by piece.
    pub fn builder() -> PositionBuilder {
        PositionBuilder {
            pieces: HashMap::new(),
        }
    }

    /// Returns the piece at the given square, if any.
    pub fn at(&self, square: Square) -> Option<Piece> {
        self.pieces.get(&square).cloned()
    }

    /// Relocates whatever piece sits at `from` onto `to`, overwriting
    /// any piece previously at `to` and vacating `from`. If `from` is
    /// empty the position is returned unchanged.
    pub fn relocate(&self, from: Square, to: Square) -> Position {
        let mut pieces = self.pieces.clone();
        if let Some(piece) = pieces.remove(&from) {
            pieces.insert(to, piece);
        }
        Position { pieces }
    }

    /// Places a piece on the given square, overwriting any piece
    /// already there.
    pub fn put(&self, square: Square, piece: Piece) -> Position {
        let mut pieces = self.pieces.clone();
        pieces.insert(square, piece);
        Position { pieces }
    }

    /// Removes the piece at the given square; a no-op if the square is
    /// already empty.
    pub fn remove(&self, square: Square) -> Position {
        let mut pieces = self.pieces.clone();
        pieces.remove(&square);
        Position { pieces }
    }

    /// Iterates over the occupied squares and their pieces, in no
    /// particular order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces.iter().map(|(&square, &piece)| (square, piece))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let board = Board::STANDARD;
        for row in (0..board.size()).rev() {
            for col in 0..board.size() {
                let square = board.square(col, row).unwrap();
                if let Some(piece) = self.at(square) {
                    write!(f, " {} ", piece)?;
                } else {
                    write!(f, " . ")?;
                }
            }

            writeln!(f, "| {}", row + 1)?;
        }

        for _ in 0..board.size() {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for col in 0..board.size() {
            write!(f, " {} ", (b'a' + col) as char)?;
        }

        writeln!(f)?;
        Ok(())
    }
}

/// Incrementally assembles a `Position`, one piece per square.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: HashMap<Square, Piece>,
}

impl PositionBuilder {
    /// Places a piece on a vacant square.
    ///
    /// # Panics
    /// Panics if the square is already used; a builder describes each
    /// square at most once.
    pub fn with_piece(mut self, square: Square, piece: Piece) -> PositionBuilder {
        let previous = self.pieces.insert(square, piece);
        assert!(
            previous.is_none(),
            "square {} already used, cannot put {} there",
            square,
            piece
        );
        self
    }

    pub fn build(self) -> Position {
        Position {
            pieces: self.pieces,
        }
    }
}

lazy_static! {
    static ref INITIAL: Position = {
        use crate::types::PieceKind::*;

        let board = Board::STANDARD;
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut builder = Position::builder();
        for (col, &kind) in back_rank.iter().enumerate() {
            let col = col as u8;
            builder = builder
                .with_piece(board.square(col, 0).unwrap(), Piece::new(kind, Color::White))
                .with_piece(
                    board.square(col, 1).unwrap(),
                    Piece::new(Pawn, Color::White),
                )
                .with_piece(
                    board.square(col, 6).unwrap(),
                    Piece::new(Pawn, Color::Black),
                )
                .with_piece(board.square(col, 7).unwrap(), Piece::new(kind, Color::Black));
        }
        builder.build()
    };
}
