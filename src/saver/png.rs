/*
png.rs

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

//! Save the maze image in PNG format.

use image::{ImageFormat, RgbImage};
use log::debug;
use std::ffi::OsString;
use std::fs::{remove_file, rename};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Type of errors.
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("cannot encode the image: {0}")]
    Image(#[from] image::ImageError),

    #[error("cannot write the image file: {0}")]
    Io(#[from] std::io::Error),
}

/// Object to save the maze image.
pub struct SaverPng {
    /// Path to the image file.
    save_file: PathBuf,

    /// Path to the temporary file used while encoding.
    tmp_file: PathBuf,
}

impl SaverPng {
    /// Create a [`SaverPng`] object for the given destination file.
    pub fn new(save_file: &Path) -> Self {
        let mut tmp_name: OsString = save_file
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("labyrinth.png"));
        tmp_name.push(".tmp");
        let tmp_file: PathBuf = save_file.with_file_name(tmp_name);
        debug!("Image file: {save_file:?} (temporary file: {tmp_file:?})");
        Self {
            save_file: save_file.to_path_buf(),
            tmp_file,
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_file
    }

    /// Save the provided image.
    pub fn save(&self, img: &RgbImage) -> Result<(), SaveError> {
        if let Err(e) = img.save_with_format(&self.tmp_file, ImageFormat::Png) {
            let _ = remove_file(&self.tmp_file);
            return Err(e.into());
        }
        if let Err(e) = rename(&self.tmp_file, &self.save_file) {
            let _ = remove_file(&self.tmp_file);
            return Err(e.into());
        }
        debug!("Image saved to {:?}", self.save_file);
        Ok(())
    }
}
