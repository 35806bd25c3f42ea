/*
grid.rs

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

//! Square grid of cells and the walls between them.
//!
//! The walls are stored once in an arena owned by the [`Grid`] and the cells refer to them by
//! [`WallId`]. Two adjacent cells hold the same [`WallId`] for their common side, so opening the
//! wall from one cell is seen from the other cell.

use log::debug;
use std::fmt::{self, Display, Formatter};

use super::direction::Direction;
use super::layout::Layout;
use super::wall::Wall;

/// Identifier of a wall in the grid arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallId(usize);

/// Cell of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Column.
    pub x: usize,

    /// Row.
    pub y: usize,

    /// Walls of the cell, indexed by [`Direction::idx`].
    pub walls: [WallId; 4],
}

impl Cell {
    /// Wall on the given side.
    pub fn wall(&self, direction: Direction) -> WallId {
        self.walls[direction.idx()]
    }

    /// Iterate over the sides of the cell and their walls.
    pub fn sides(&self) -> impl Iterator<Item = (Direction, WallId)> + '_ {
        self.walls
            .iter()
            .enumerate()
            .filter_map(|(i, id)| Direction::from_repr(i).map(|d| (d, *id)))
    }
}

/// The maze grid.
#[derive(Debug, Clone)]
pub struct Grid {
    layout: Layout,

    /// Cells in row-major order.
    cells: Vec<Cell>,

    /// All the walls. Shared walls are stored only once.
    walls: Vec<Wall>,
}

impl Grid {
    /// Build the grid described by the given [`Layout`].
    ///
    /// Cells are created in row-major order. When the cell above or the cell on the left already
    /// exists, its facing wall is reused instead of creating a new one.
    pub fn new(layout: Layout) -> Self {
        let size: usize = layout.size();
        let mut grid: Grid = Self {
            layout,
            cells: Vec::with_capacity(layout.num_cells()),
            walls: Vec::with_capacity(2 * size * (size + 1)),
        };

        for y in 0..size {
            for x in 0..size {
                let index: usize = grid.index(x, y);
                let mut walls: [WallId; 4] = [WallId(0); 4];
                for d in Direction::ALL {
                    walls[d.idx()] = match grid.neighbor(x, y, d) {
                        Some((nx, ny)) if grid.index(nx, ny) < index => {
                            grid.cells[grid.index(nx, ny)].wall(d.opposite())
                        }
                        _ => {
                            grid.walls.push(Wall::new(d, x, y, &grid.layout));
                            WallId(grid.walls.len() - 1)
                        }
                    };
                }
                grid.cells.push(Cell { x, y, walls });
            }
        }

        debug!(
            "Grid {size}x{size}: {} cells, {} walls",
            grid.cells.len(),
            grid.walls.len()
        );
        grid
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of cells on each side.
    pub fn size(&self) -> usize {
        self.layout.size()
    }

    /// Position of the cell in the [`Grid::cells`] vector.
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.layout.size() + x
    }

    /// Return the cell at column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// The coordinates must be inside the grid.
    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    /// Iterate over the cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Coordinates of the adjacent cell in the given direction, or [`None`] when moving would
    /// leave the grid.
    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = direction.offset();
        let nx: usize = x.checked_add_signed(dx)?;
        let ny: usize = y.checked_add_signed(dy)?;
        if nx < self.layout.size() && ny < self.layout.size() {
            Some((nx, ny))
        } else {
            None
        }
    }

    pub fn wall_id(&self, x: usize, y: usize, direction: Direction) -> WallId {
        self.cell(x, y).wall(direction)
    }

    pub fn wall(&self, id: WallId) -> &Wall {
        &self.walls[id.0]
    }

    pub fn wall_mut(&mut self, id: WallId) -> &mut Wall {
        &mut self.walls[id.0]
    }

    /// Open the wall on the given side of the cell.
    pub fn open_wall(&mut self, x: usize, y: usize, direction: Direction) -> WallId {
        let id: WallId = self.wall_id(x, y, direction);
        self.wall_mut(id).open();
        id
    }

    /// Whether the wall on the given side of the cell is still drawn.
    pub fn is_shown(&self, x: usize, y: usize, direction: Direction) -> bool {
        self.wall(self.wall_id(x, y, direction)).is_shown()
    }

    /// Number of walls in the arena.
    pub fn num_walls(&self) -> usize {
        self.walls.len()
    }
}

/// Terminal representation of the maze.
///
/// ```text
/// +---+---+
///     |   |
/// +   +---+
/// |   |
/// +---+---+
/// ```
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size: usize = self.size();
        let mut result: String = String::with_capacity((2 * size + 1) * (4 * size + 2));

        // The top border
        result.push('+');
        for x in 0..size {
            if self.is_shown(x, 0, Direction::Up) {
                result.push_str("---+");
            } else {
                result.push_str("   +");
            }
        }
        result.push('\n');

        for y in 0..size {
            let mut middle: String = String::with_capacity(4 * size + 1);
            let mut bottom: String = String::with_capacity(4 * size + 1);
            middle.push(if self.is_shown(0, y, Direction::Left) {
                '|'
            } else {
                ' '
            });
            bottom.push('+');
            for x in 0..size {
                middle.push_str("   ");
                middle.push(if self.is_shown(x, y, Direction::Right) {
                    '|'
                } else {
                    ' '
                });
                if self.is_shown(x, y, Direction::Down) {
                    bottom.push_str("---+");
                } else {
                    bottom.push_str("   +");
                }
            }
            result.push_str(&middle);
            result.push('\n');
            result.push_str(&bottom);
            result.push('\n');
        }

        write!(f, "{result}")
    }
}
