// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! An immutable model of chess positions and the moves that transform
//! them. Applying a move never mutates anything; it produces a fresh
//! position snapshot, which makes positions freely shareable across
//! threads and makes "undo" a matter of keeping the previous snapshot.
//!
//! Move legality is deliberately not this crate's business: callers are
//! expected to hand `Move::apply` only moves that are legal for the
//! position they are applied to.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod board;
mod moves;
mod position;
mod types;

pub use board::{Board, OutOfBounds, ParseSquareError, Square};
pub use moves::Move;
pub use position::{Position, PositionBuilder};
pub use types::{Color, Piece, PieceKind};
