/*
carver.rs

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

//! Carve a perfect maze in a grid.
//!
//! The carver walks the grid from the entrance cell, opening the wall towards a random unvisited
//! neighbor at each step. Cells that had more than one unvisited neighbor when they were visited
//! are kept in a [`Frontier`]. When the walk reaches a dead end, it jumps back to a cell from the
//! frontier. The walk stops when all the cells are visited, at which point the open interior
//! walls form a spanning tree of the grid.

use clap::ValueEnum;
use log::debug;
use rand::Rng;
use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use super::MazeError;
use super::direction::Direction;
use super::grid::{Grid, WallId};

/// Order in which the branch points are revisited after a dead end.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum Backtrack {
    /// Oldest branch point first.
    #[default]
    Fifo,

    /// Most recent branch point first.
    Lifo,
}

/// Cells to come back to when the walk reaches a dead end.
#[derive(Debug, Clone)]
pub struct Frontier {
    cells: VecDeque<(usize, usize)>,
    policy: Backtrack,
}

impl Frontier {
    pub fn new(policy: Backtrack, capacity: usize) -> Self {
        Self {
            cells: VecDeque::with_capacity(capacity),
            policy,
        }
    }

    /// Add a branch point at the back of the frontier.
    pub fn push(&mut self, cell: (usize, usize)) {
        self.cells.push_back(cell);
    }

    /// Remove and return the next cell to return to.
    pub fn pop(&mut self) -> Option<(usize, usize)> {
        match self.policy {
            Backtrack::Fifo => self.cells.pop_front(),
            Backtrack::Lifo => self.cells.pop_back(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

}

/// Statistics about a carving run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarveStats {
    /// Number of loop iterations.
    pub iterations: usize,

    /// Number of jumps back to a branch point.
    pub backtracks: usize,

    /// Number of cells pushed to the frontier.
    pub branch_points: usize,

    /// Number of visited cells.
    pub visited: usize,

    /// Entrance wall, on the left of the top-left cell.
    pub entrance: Option<WallId>,

    /// Exit wall, on the right of the bottom-right cell.
    pub exit: Option<WallId>,

    /// Interior walls in the order they were opened.
    pub opened: Vec<WallId>,

    /// Duration of the run in seconds.
    pub duration: f32,
}

/// Maze carver.
#[derive(Debug, Clone, Default)]
pub struct Carver {
    policy: Backtrack,
}

impl Carver {
    /// Create a [`Carver`] object that uses the given backtracking policy.
    pub fn new(policy: Backtrack) -> Self {
        Self { policy }
    }

    /// Carve the maze in the given grid, which must have all its walls shown.
    ///
    /// The random generator selects the direction at each step. A seeded generator produces the
    /// same maze at each run.
    ///
    /// # Errors
    ///
    /// The method returns [`MazeError::FrontierUnderflow`] if a dead end is reached while no
    /// branch point is left. This is a bug in the algorithm.
    pub fn carve<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<CarveStats, MazeError> {
        let start: Instant = Instant::now();
        let size: usize = grid.size();
        let num_cells: usize = size * size;
        let mut stats: CarveStats = CarveStats {
            opened: Vec::with_capacity(num_cells - 1),
            ..Default::default()
        };

        // The boundary is open at two places only
        stats.entrance = Some(grid.open_wall(0, 0, Direction::Left));
        stats.exit = Some(grid.open_wall(size - 1, size - 1, Direction::Right));

        let mut visited: HashSet<usize> = HashSet::with_capacity(num_cells);
        let mut frontier: Frontier = Frontier::new(self.policy, num_cells);
        let mut pointer: (usize, usize) = (0, 0);

        loop {
            stats.iterations += 1;
            let (x, y) = pointer;
            visited.insert(grid.index(x, y));
            if visited.len() == num_cells {
                break;
            }

            let available: Vec<(Direction, (usize, usize))> = Direction::ALL
                .iter()
                .filter_map(|&d| {
                    grid.neighbor(x, y, d)
                        .filter(|&(nx, ny)| !visited.contains(&grid.index(nx, ny)))
                        .map(|cell| (d, cell))
                })
                .collect();

            if available.is_empty() {
                pointer = frontier.pop().ok_or(MazeError::FrontierUnderflow {
                    visited: visited.len(),
                })?;
                stats.backtracks += 1;
                debug!("Dead end at ({x}, {y}): back to {pointer:?}");
                continue;
            }
            if available.len() > 1 {
                frontier.push(pointer);
                stats.branch_points += 1;
            }

            let (direction, next) = available[rng.random_range(0..available.len())];
            stats.opened.push(grid.open_wall(x, y, direction));
            pointer = next;
        }

        stats.visited = visited.len();
        stats.duration = start.elapsed().as_secs_f32();
        debug!("Duration = {}", stats.duration);
        debug!(
            "Carved {size}x{size} maze: iterations = {}  backtracks = {}  frontier left = {}",
            stats.iterations,
            stats.backtracks,
            frontier.len()
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Draw;
    use crate::generator::layout::Layout;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::RngCore;

    /// Generator whose output is always zero. It makes the carver pick the first available
    /// direction.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    fn grid(size: usize) -> Grid {
        Grid::new(Layout::new(size).unwrap())
    }

    fn find(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    /// Verify that the open interior walls form a spanning tree and that only the entrance and
    /// the exit are open on the border.
    fn assert_perfect(g: &Grid, stats: &CarveStats) {
        let size: usize = g.size();
        let num_cells: usize = size * size;
        assert_eq!(stats.visited, num_cells);
        assert_eq!(stats.opened.len(), num_cells - 1);

        let mut parent: Vec<usize> = (0..num_cells).collect();
        let mut edges: usize = 0;
        let mut open_border: Vec<WallId> = Vec::new();
        for cell in g.cells() {
            for (d, id) in cell.sides() {
                match g.neighbor(cell.x, cell.y, d) {
                    None => {
                        if !g.wall(id).is_shown() {
                            open_border.push(id);
                        }
                    }
                    Some((nx, ny)) => {
                        // Count each interior wall once, from its upper or left cell
                        if (d == Direction::Down || d == Direction::Right) && !g.wall(id).is_shown()
                        {
                            let a: usize = find(&mut parent, g.index(cell.x, cell.y));
                            let b: usize = find(&mut parent, g.index(nx, ny));
                            assert_ne!(a, b, "cycle through wall {id:?}");
                            parent[a] = b;
                            edges += 1;
                        }
                    }
                }
            }
        }
        assert_eq!(edges, num_cells - 1);

        let root: usize = find(&mut parent, 0);
        for i in 0..num_cells {
            assert_eq!(find(&mut parent, i), root, "cell {i} is not reachable");
        }

        open_border.sort_unstable();
        let mut expected: Vec<WallId> = vec![stats.entrance.unwrap(), stats.exit.unwrap()];
        expected.sort_unstable();
        assert_eq!(open_border, expected);
    }

    #[test]
    fn test_single_cell() {
        let mut g: Grid = grid(1);
        let stats: CarveStats = Carver::default().carve(&mut g, &mut ZeroRng).unwrap();

        assert_eq!(stats.iterations, 1);
        assert_eq!(stats.backtracks, 0);
        assert!(stats.opened.is_empty());
        assert!(!g.is_shown(0, 0, Direction::Left));
        assert!(!g.is_shown(0, 0, Direction::Right));
        assert!(g.is_shown(0, 0, Direction::Up));
        assert!(g.is_shown(0, 0, Direction::Down));
        assert_perfect(&g, &stats);
    }

    #[test]
    fn test_two_by_two_first_direction() {
        let mut g: Grid = grid(2);
        let stats: CarveStats = Carver::default().carve(&mut g, &mut ZeroRng).unwrap();

        // (0,0) down to (0,1), right to (1,1), up to (1,0)
        assert_eq!(
            stats.opened,
            vec![
                g.wall_id(0, 0, Direction::Down),
                g.wall_id(0, 1, Direction::Right),
                g.wall_id(1, 1, Direction::Up),
            ]
        );
        assert_eq!(stats.iterations, 4);
        assert_eq!(stats.backtracks, 0);
        assert_eq!(stats.branch_points, 1);
        assert!(g.is_shown(0, 0, Direction::Right));
        assert_perfect(&g, &stats);
    }

    #[test]
    fn test_first_direction_snake() {
        let mut g: Grid = grid(4);
        let stats: CarveStats = Carver::new(Backtrack::Fifo)
            .carve(&mut g, &mut ZeroRng)
            .unwrap();

        assert_eq!(stats.backtracks, 0);
        assert_eq!(stats.opened[0], g.wall_id(0, 0, Direction::Down));
        assert_eq!(stats.opened[3], g.wall_id(0, 3, Direction::Right));
        assert_eq!(stats.opened[14], g.wall_id(3, 1, Direction::Up));
        assert_perfect(&g, &stats);
    }

    #[test]
    fn test_perfect_maze_seeded() {
        for policy in [Backtrack::Fifo, Backtrack::Lifo] {
            for size in 1..=12 {
                for seed in 0..4 {
                    let mut g: Grid = grid(size);
                    let mut rng: StdRng = StdRng::seed_from_u64(seed);
                    let stats: CarveStats = Carver::new(policy).carve(&mut g, &mut rng).unwrap();
                    assert_perfect(&g, &stats);
                    assert!(stats.backtracks <= stats.branch_points);
                    assert!(stats.iterations <= 2 * size * size);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        let mut g1: Grid = grid(15);
        let mut g2: Grid = grid(15);
        let s1: CarveStats = Carver::default()
            .carve(&mut g1, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let s2: CarveStats = Carver::default()
            .carve(&mut g2, &mut StdRng::seed_from_u64(42))
            .unwrap();

        assert_eq!(s1.opened, s2.opened);
        assert_eq!(s1.backtracks, s2.backtracks);
        assert_eq!(g1.to_string(), g2.to_string());
        assert_eq!(Draw::default().render(&g1), Draw::default().render(&g2));
    }

    #[test]
    fn test_frontier_order() {
        let mut fifo: Frontier = Frontier::new(Backtrack::Fifo, 3);
        let mut lifo: Frontier = Frontier::new(Backtrack::Lifo, 3);
        for cell in [(0, 0), (1, 0), (2, 0)] {
            fifo.push(cell);
            lifo.push(cell);
        }
        assert_eq!(fifo.pop(), Some((0, 0)));
        assert_eq!(lifo.pop(), Some((2, 0)));
        assert_eq!(fifo.len(), 2);
        fifo.pop();
        fifo.pop();
        assert_eq!(fifo.len(), 0);
        assert_eq!(fifo.pop(), None);
    }
}
