/*
layout.rs

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

//! Dimensions of the maze and of the rendered image.

use super::MazeError;

/// Default number of cells on each side of the grid.
pub const DEFAULT_SIZE: usize = 15;

/// Default number of pixels for the side of a cell.
pub const DEFAULT_SCALE: usize = 25;

/// Default blank space around the maze, in pixels.
pub const DEFAULT_MARGIN: usize = 50;

/// Grid and canvas parameters, passed to the grid and to the renderer.
///
/// A [`Layout`] object can only be built with [`Layout::new`] and [`Layout::with_scale`], so the
/// grid is never empty and the canvas always fits in an image.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Number of cells on each side of the square grid.
    size: usize,

    /// Pixels per cell.
    scale: usize,

    /// Canvas margin in pixels.
    margin: usize,

    /// Width and height of the canvas: `size * scale + 2 * margin`.
    canvas: u32,
}

impl Layout {
    /// Create a [`Layout`] object with the default scale and margin.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::InvalidSize`] for an empty grid, and [`MazeError::CanvasTooLarge`]
    /// if the grid is too large to be drawn.
    pub fn new(size: usize) -> Result<Self, MazeError> {
        if size == 0 {
            return Err(MazeError::InvalidSize(size));
        }
        Self::build(size, DEFAULT_SCALE, DEFAULT_MARGIN)
    }

    /// Replace the drawing parameters.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::CanvasTooLarge`] if the resulting canvas side does not fit in an image
    /// dimension.
    pub fn with_scale(self, scale: usize, margin: usize) -> Result<Self, MazeError> {
        Self::build(self.size, scale, margin)
    }

    /// Compute the canvas side and build the object.
    fn build(size: usize, scale: usize, margin: usize) -> Result<Self, MazeError> {
        let canvas: u32 = size
            .checked_mul(scale)
            .and_then(|s| margin.checked_mul(2).and_then(|m| s.checked_add(m)))
            .and_then(|c| u32::try_from(c).ok())
            .ok_or(MazeError::CanvasTooLarge {
                size,
                scale,
                margin,
            })?;
        Ok(Self {
            size,
            scale,
            margin,
            canvas,
        })
    }

    /// Number of cells on each side of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells in the grid.
    pub fn num_cells(&self) -> usize {
        self.size * self.size
    }

    /// Width and height of the canvas, in pixels.
    pub fn canvas_size(&self) -> u32 {
        self.canvas
    }

    /// Convert a grid coordinate to a pixel coordinate.
    pub fn to_pixel(&self, c: usize) -> usize {
        c * self.scale + self.margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Layout::new(0), Err(MazeError::InvalidSize(0)));
    }

    #[test]
    fn test_canvas_size() {
        let layout: Layout = Layout::new(10).unwrap();
        assert_eq!(layout.canvas_size(), 350);
        assert_eq!(layout.to_pixel(0), 50);
        assert_eq!(layout.to_pixel(10), 300);
        assert_eq!(Layout::new(DEFAULT_SIZE).unwrap().canvas_size(), 475);

        let layout: Layout = layout.with_scale(10, 5).unwrap();
        assert_eq!(layout.size(), 10);
        assert_eq!(layout.canvas_size(), 110);
        assert_eq!(layout.to_pixel(3), 35);
    }

    #[test]
    fn test_canvas_too_large() {
        let layout: Layout = Layout::new(1).unwrap();
        assert_eq!(
            layout.with_scale(4_294_967_295, 0),
            Ok(Layout {
                size: 1,
                scale: 4_294_967_295,
                margin: 0,
                canvas: u32::MAX,
            })
        );
        assert_eq!(
            layout.with_scale(4_294_967_295, 50),
            Err(MazeError::CanvasTooLarge {
                size: 1,
                scale: 4_294_967_295,
                margin: 50,
            })
        );
        assert_eq!(
            layout.with_scale(4_294_967_296, 0),
            Err(MazeError::CanvasTooLarge {
                size: 1,
                scale: 4_294_967_296,
                margin: 0,
            })
        );
        assert!(layout.with_scale(25, usize::MAX).is_err());
        assert!(Layout::new(usize::MAX).is_err());
    }
}
