/*
wall.rs

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

//! Wall segments between cells.

use image::Rgb;

use super::direction::Direction;
use super::layout::Layout;

/// Color of all the walls.
pub const WALL_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Point in pixel coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Coordinates as expected by the line drawing functions.
    pub fn as_f32(&self) -> (f32, f32) {
        (self.x as f32, self.y as f32)
    }
}

/// Segment on one side of a cell.
///
/// Interior walls are shared by the two adjacent cells. Opening a wall carves a passage between
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub start: Point,
    pub end: Point,

    /// Whether the wall is still drawn. An open wall is a passage.
    shown: bool,

    pub color: Rgb<u8>,
}

impl Wall {
    /// Create the wall on the `direction` side of the cell at column `x` and row `y`.
    ///
    /// The segment is one of the four unit edges of the cell square, scaled and shifted to pixel
    /// coordinates with the [`Layout`] parameters.
    pub fn new(direction: Direction, x: usize, y: usize, layout: &Layout) -> Self {
        let ((x1, y1), (x2, y2)) = match direction {
            Direction::Up => ((x, y), (x + 1, y)),
            Direction::Down => ((x, y + 1), (x + 1, y + 1)),
            Direction::Left => ((x, y + 1), (x, y)),
            Direction::Right => ((x + 1, y + 1), (x + 1, y)),
        };

        Self {
            start: Point::new(layout.to_pixel(x1), layout.to_pixel(y1)),
            end: Point::new(layout.to_pixel(x2), layout.to_pixel(y2)),
            shown: true,
            color: WALL_COLOR,
        }
    }

    /// Remove the wall.
    pub fn open(&mut self) {
        self.shown = false;
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }
}
