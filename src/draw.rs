/*
draw.rs

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

//! Draw the maze walls in an image.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use log::debug;
use std::collections::HashSet;

use crate::generator::grid::{Grid, WallId};
use crate::generator::wall::Wall;

/// Canvas background.
pub const BACKGROUND_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Return all the walls of the grid, each one only once.
///
/// Walls are shared between adjacent cells, so the walls are deduplicated by identity and not by
/// coordinates.
pub fn collect_walls(grid: &Grid) -> Vec<WallId> {
    let mut seen: HashSet<WallId> = HashSet::with_capacity(grid.num_walls());
    let mut walls: Vec<WallId> = Vec::with_capacity(grid.num_walls());

    for cell in grid.cells() {
        for (_, id) in cell.sides() {
            if seen.insert(id) {
                walls.push(id);
            }
        }
    }
    walls
}

/// Draw object that renders a grid into an RGB image.
#[derive(Debug, Clone)]
pub struct Draw {
    background: Rgb<u8>,
}

impl Default for Draw {
    fn default() -> Self {
        Self::new(BACKGROUND_COLOR)
    }
}

impl Draw {
    /// Create a [`Draw`] object.
    pub fn new(background: Rgb<u8>) -> Self {
        Self { background }
    }

    /// Render the walls that are still shown.
    ///
    /// The canvas is square. Its side is given by
    /// [`crate::generator::layout::Layout::canvas_size`].
    pub fn render(&self, grid: &Grid) -> RgbImage {
        let side: u32 = grid.layout().canvas_size();
        let mut img: RgbImage = RgbImage::from_pixel(side, side, self.background);

        let mut drawn: usize = 0;
        for id in collect_walls(grid) {
            let wall: &Wall = grid.wall(id);
            if wall.is_shown() {
                draw_line_segment_mut(
                    &mut img,
                    wall.start.as_f32(),
                    wall.end.as_f32(),
                    wall.color,
                );
                drawn += 1;
            }
        }
        debug!("Drew {drawn} walls on a {side}x{side} canvas");
        img
    }
}
