//! Sprite-sheet grid math.
//!
//! A sheet is a single texture cut into equally sized frames, numbered
//! row-major starting at the top-left. Partial frames at the right or bottom
//! edge are ignored.

use raylib::prelude::Rectangle;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpriteboxError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSheet {
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub columns: u32,
    pub rows: u32,
}

impl SpriteSheet {
    /// Describe a sheet of `sheet_width`x`sheet_height` pixels cut into
    /// `frame_width`x`frame_height` frames.
    pub fn new(sheet_width: u32, sheet_height: u32, frame_width: u32, frame_height: u32) -> Result<Self> {
        if frame_width == 0 || frame_height == 0 {
            return Err(SpriteboxError::InvalidFrameSize {
                width: frame_width,
                height: frame_height,
            });
        }
        Ok(Self {
            sheet_width,
            sheet_height,
            frame_width,
            frame_height,
            columns: sheet_width / frame_width,
            rows: sheet_height / frame_height,
        })
    }

    /// A sheet holding a single frame that covers the whole texture.
    pub fn single(width: u32, height: u32) -> Result<Self> {
        Self::new(width, height, width, height)
    }

    pub fn frame_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Frame size in pixels as floats, handy for geometry.
    pub fn frame_size(&self) -> (f32, f32) {
        (self.frame_width as f32, self.frame_height as f32)
    }

    /// Source rectangle of `index` inside the sheet texture.
    pub fn frame_rect(&self, index: usize) -> Option<Rectangle> {
        if index >= self.frame_count() {
            return None;
        }
        let columns = self.columns as usize;
        let col = (index % columns) as u32;
        let row = (index / columns) as u32;
        Some(Rectangle {
            x: (col * self.frame_width) as f32,
            y: (row * self.frame_height) as f32,
            width: self.frame_width as f32,
            height: self.frame_height as f32,
        })
    }

    /// Columns used when packing `frame_count` frames into a new sheet.
    pub fn compact_columns(frame_count: usize) -> usize {
        match frame_count {
            0..=4 => frame_count,
            5..=8 => 4,
            _ => 8,
        }
    }

    /// Pixel size of a sheet packing `frame_count` of this sheet's frames
    /// into `columns` columns.
    pub fn compact_size(&self, frame_count: usize, columns: usize) -> (u32, u32) {
        if frame_count == 0 || columns == 0 {
            return (0, 0);
        }
        let rows = frame_count.div_ceil(columns);
        let columns = u32::try_from(columns).unwrap_or(u32::MAX);
        let rows = u32::try_from(rows).unwrap_or(u32::MAX);
        (
            columns.saturating_mul(self.frame_width),
            rows.saturating_mul(self.frame_height),
        )
    }
}
