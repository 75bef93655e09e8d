//! Pointer handling for the mask session

use glam::Vec2;
use tracing::{debug, warn};

use crate::constants::{MASK_COLOR, MIN_PRESSURE};
use crate::fill::{fill_alpha_for_opacity, flood_fill};
use crate::types::{PaintStyle, Tool};

use super::MaskSession;

impl MaskSession {
    /// Handle a pointer press at (`x`, `y`) in canvas pixel coordinates
    ///
    /// Ignored until a base image is loaded. The fill tool fills the clicked
    /// region immediately; brush and eraser stamp a disc at the full
    /// configured diameter (pressure does not shrink the initial dot) and
    /// arm the stroke for `pointer_move`.
    pub fn pointer_down(&mut self, x: f32, y: f32, _pressure: f32) {
        if self.base_image.is_none() {
            debug!("pointer_down: no base image loaded, ignoring");
            return;
        }

        match self.tool {
            Tool::Fill => self.fill_at(x, y),
            Tool::Brush | Tool::Eraser => {
                let radius = self.config.brush_size / 2.0;
                let affected = self.surface.paint_disc(x, y, radius, self.paint_style());
                debug!(
                    "pointer_down: stamped {:?} dot at ({:.1}, {:.1}), affected={:?}",
                    self.tool, x, y, affected
                );
                self.last_point = Some(Vec2::new(x, y));
            }
        }
    }

    /// Extend the stroke in progress to (`x`, `y`)
    ///
    /// No-op while idle. The segment width is the brush diameter scaled by
    /// pressure, floored at `MIN_PRESSURE` so zero-pressure devices still
    /// leave a visible mark.
    pub fn pointer_move(&mut self, x: f32, y: f32, pressure: f32) {
        let last = match self.last_point {
            Some(point) => point,
            None => {
                debug!("pointer_move: no stroke in progress, ignoring");
                return;
            }
        };

        let width = self.config.brush_size * pressure.max(MIN_PRESSURE);
        let affected = self
            .surface
            .paint_segment(last.x, last.y, x, y, width, self.paint_style());
        debug!(
            "pointer_move: segment to ({:.1}, {:.1}), width={:.1}, affected={:?}",
            x, y, width, affected
        );
        self.last_point = Some(Vec2::new(x, y));
    }

    /// Finish the stroke in progress
    ///
    /// Painted content stays as it is. Safe to call while idle.
    pub fn pointer_up(&mut self) {
        self.last_point = None;
    }

    /// Abort the stroke in progress
    ///
    /// Ends the stroke without rolling anything back; paint applied up to
    /// the last processed move stays on the mask.
    pub fn pointer_cancel(&mut self) {
        self.pointer_up();
    }

    /// The pointer left the canvas, treated the same as lifting it
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Fill the contiguous region under the pointer with mask paint
    fn fill_at(&mut self, x: f32, y: f32) {
        let alpha = fill_alpha_for_opacity(self.config.mask_opacity);
        let seed_x = x.floor() as i32;
        let seed_y = y.floor() as i32;

        match flood_fill(&mut self.surface, seed_x, seed_y, MASK_COLOR, alpha) {
            Ok(Some((bx, by, bw, bh))) => {
                debug!("fill_at: filled region ({}, {}) {}x{}", bx, by, bw, bh);
            }
            Ok(None) => {
                debug!("fill_at: region already filled");
            }
            Err(error) => {
                warn!("fill_at: ignoring fill outside the canvas: {error}");
            }
        }
    }

    /// The paint style for the active tool
    fn paint_style(&self) -> PaintStyle {
        match self.tool {
            Tool::Eraser => PaintStyle::eraser(),
            Tool::Brush | Tool::Fill => PaintStyle::brush(self.config.mask_opacity),
        }
    }
}
