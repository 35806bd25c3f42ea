/*
generator.rs

Copyright 2025 Hervé Quatremain

This file is part of Labyrinth.

Labyrinth is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Labyrinth is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Labyrinth. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Build the grid and carve a random perfect maze.
//!
//! A [`grid::Grid`] object is created from a [`layout::Layout`] object, which gives the number of
//! cells and the drawing dimensions.
//! When the grid is built, each cell gets its four [`wall::Wall`] objects. Two adjacent cells share
//! the wall between them.
//!
//! The [`carver::Carver`] object then opens walls until every cell is connected to every other
//! cell by exactly one path.
//! The carver uses the random generator it receives, so that a seeded generator always produces
//! the same maze.

pub mod carver;
pub mod direction;
pub mod grid;
pub mod layout;
pub mod wall;

use rand::Rng;
use thiserror::Error;

use carver::{Backtrack, CarveStats, Carver};
use grid::Grid;
use layout::Layout;

/// Type of errors.
#[derive(Error, Debug, PartialEq)]
pub enum MazeError {
    /// The grid must have at least one cell.
    #[error("invalid grid size {0}: the size must be at least 1")]
    InvalidSize(usize),

    /// The canvas side does not fit in an image dimension.
    #[error("maze too large to draw: {size} cells of {scale} pixels with a {margin} pixel margin")]
    CanvasTooLarge {
        size: usize,
        scale: usize,
        margin: usize,
    },

    /// Dead end reached without any branch point to go back to.
    #[error("bug: no branch point left after visiting {visited} cells")]
    FrontierUnderflow { visited: usize },
}

/// Build a grid and carve a maze in it.
pub fn generate<R: Rng + ?Sized>(
    layout: Layout,
    policy: Backtrack,
    rng: &mut R,
) -> Result<(Grid, CarveStats), MazeError> {
    let mut grid: Grid = Grid::new(layout);
    let stats: CarveStats = Carver::new(policy).carve(&mut grid, rng)?;
    Ok((grid, stats))
}
