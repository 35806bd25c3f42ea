/*
cli_options.rs

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

//! Process command-line options and generate the maze.
//!
//! # Examples
//!
//! Generate a 20x20 maze in the `maze.png` file, print it in the terminal, and display some
//! statistics:
//!
//! ```text
//! $ labyrinth --size 20 --output maze.png --ascii --summary
//! ```
//!
//! Generate the same maze again by providing the seed displayed in the summary:
//!
//! ```text
//! $ labyrinth --size 20 --seed 9203471625013 --output maze.png
//! ```

use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::error::Error;
use std::path::PathBuf;

use crate::draw::Draw;
use crate::generator;
use crate::generator::carver::Backtrack;
use crate::generator::layout::{self, Layout};
use crate::saver::png::SaverPng;

/// Generate a random perfect maze and save it as a PNG image.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
struct Args {
    /// Number of cells on each side of the maze
    #[arg(short, long, default_value_t = layout::DEFAULT_SIZE as u32,
          value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,

    /// Image file to create
    #[arg(short, long, default_value = "labyrinth.png")]
    output: PathBuf,

    /// Seed for the random generator, to reproduce a maze
    #[arg(long)]
    seed: Option<u64>,

    /// Order in which the carver returns to the branch points after a dead end
    #[arg(value_enum, short, long, default_value_t = Backtrack::Fifo)]
    backtrack: Backtrack,

    /// Size of a cell in pixels
    #[arg(long, default_value_t = layout::DEFAULT_SCALE as u32,
          value_parser = clap::value_parser!(u32).range(1..))]
    scale: u32,

    /// Blank space around the maze in pixels
    #[arg(long, default_value_t = layout::DEFAULT_MARGIN as u32)]
    margin: u32,

    /// Print the maze in the terminal
    #[arg(short, long, default_value_t = false)]
    ascii: bool,

    /// Print some statistics after generating the maze
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse the command-line options, generate the maze, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    match run(&args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Generate, draw, and save the maze.
///
/// Nothing is written if the maze cannot be generated.
fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let layout: Layout =
        Layout::new(args.size as usize)?.with_scale(args.scale as usize, args.margin as usize)?;
    let seed: u64 = args.seed.unwrap_or_else(|| rand::rng().random());
    debug!("Layout = {layout:?}  Seed = {seed}  Backtrack = {:?}", args.backtrack);

    let mut rng: StdRng = StdRng::seed_from_u64(seed);
    let (grid, stats) = generator::generate(layout, args.backtrack, &mut rng)?;

    let saver: SaverPng = SaverPng::new(&args.output);
    saver.save(&Draw::default().render(&grid))?;
    info!(
        "{}x{} maze saved to {:?}",
        layout.size(),
        layout.size(),
        saver.path()
    );

    if args.ascii {
        print!("{grid}");
    }

    if args.summary {
        println!(
            "
              seed = {seed}
         grid size = {}
        image size = {}
        iterations = {}
        backtracks = {}
     branch points = {}
      opened walls = {}
          duration = {}s",
            layout.size(),
            layout.canvas_size(),
            stats.iterations,
            stats.backtracks,
            stats.branch_points,
            stats.opened.len(),
            stats.duration
        );
    }
    Ok(())
}
