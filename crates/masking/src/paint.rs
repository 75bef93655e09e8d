//! Anti-aliased disc and capsule painting for the mask surface
//!
//! Each operation composites exactly once per covered pixel. Coverage comes
//! from the signed distance between the pixel center and the shape edge,
//! ramped over one pixel, so a single operation can never stack alpha past
//! the configured opacity.

use glam::Vec2;
use tracing::debug;

use crate::surface::MaskSurface;
use crate::types::{CompositeMode, PaintStyle};

impl MaskSurface {
    /// Paint a filled disc centered at (`center_x`, `center_y`)
    /// Returns bounding box of affected region (x, y, width, height)
    /// Returns None if the disc lies completely outside the surface
    pub fn paint_disc(
        &mut self,
        center_x: f32,
        center_y: f32,
        radius: f32,
        style: PaintStyle,
    ) -> Option<(u32, u32, u32, u32)> {
        debug!(
            "MaskSurface::paint_disc: center=({:.1}, {:.1}), radius={:.1}, opacity={:.2}, mode={:?}",
            center_x, center_y, radius, style.opacity, style.mode
        );

        if radius <= 0.0 || style.opacity <= 0.0 {
            debug!("  -> skipped: empty disc");
            return None;
        }

        let center = Vec2::new(center_x, center_y);
        self.composite_coverage(
            center_x - radius,
            center_y - radius,
            center_x + radius,
            center_y + radius,
            style,
            move |point| point.distance(center) - radius,
        )
    }

    /// Paint one stroke segment as a capsule of the given width
    ///
    /// A capsule is a line segment with round caps. Consecutive segments of a
    /// stroke share an endpoint, so the caps double as round joins and fast
    /// pointer motion leaves no gaps or corners.
    pub fn paint_segment(
        &mut self,
        from_x: f32,
        from_y: f32,
        to_x: f32,
        to_y: f32,
        width: f32,
        style: PaintStyle,
    ) -> Option<(u32, u32, u32, u32)> {
        debug!(
            "MaskSurface::paint_segment: from=({:.1}, {:.1}), to=({:.1}, {:.1}), width={:.1}, mode={:?}",
            from_x, from_y, to_x, to_y, width, style.mode
        );

        if width <= 0.0 || style.opacity <= 0.0 {
            debug!("  -> skipped: empty segment");
            return None;
        }

        let a = Vec2::new(from_x, from_y);
        let b = Vec2::new(to_x, to_y);
        let ab = b - a;
        let len_sq = ab.length_squared();
        let half_width = width / 2.0;

        self.composite_coverage(
            from_x.min(to_x) - half_width,
            from_y.min(to_y) - half_width,
            from_x.max(to_x) + half_width,
            from_y.max(to_y) + half_width,
            style,
            move |point| {
                // Signed distance to the capsule: distance to the closest
                // point on segment ab, minus the half width
                let t = if len_sq > f32::EPSILON {
                    ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                point.distance(a + ab * t) - half_width
            },
        )
    }

    /// Composite analytic coverage for one shape over its bounding box
    ///
    /// `distance` is the signed distance from a pixel center to the shape
    /// edge (negative inside). Coverage ramps from 1 to 0 across one pixel
    /// centered on the edge, which anti-aliases the rim without ever
    /// compositing a pixel twice.
    fn composite_coverage(
        &mut self,
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
        style: PaintStyle,
        distance: impl Fn(Vec2) -> f32,
    ) -> Option<(u32, u32, u32, u32)> {
        // Pad by one pixel for the anti-aliasing ramp
        let x_min_f = (min_x - 1.0).floor();
        let y_min_f = (min_y - 1.0).floor();
        let x_max_f = (max_x + 1.0).ceil();
        let y_max_f = (max_y + 1.0).ceil();

        // Clamp to surface bounds
        let x_min = (x_min_f.max(0.0) as u32).min(self.width);
        let y_min = (y_min_f.max(0.0) as u32).min(self.height);
        let x_max = (x_max_f.max(0.0) as u32).min(self.width);
        let y_max = (y_max_f.max(0.0) as u32).min(self.height);

        // Check if completely outside
        if x_min >= x_max || y_min >= y_max {
            return None;
        }

        for py in y_min..y_max {
            for px in x_min..x_max {
                // Evaluate coverage at the pixel center
                let point = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                let coverage = (0.5 - distance(point)).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }

                match style.mode {
                    CompositeMode::SourceOver => {
                        self.blend_pixel(px, py, style.color, coverage * style.opacity);
                    }
                    CompositeMode::DestinationOut => {
                        self.erase_pixel(px, py, coverage * style.opacity);
                    }
                }
            }
        }

        let width = x_max - x_min;
        let height = y_max - y_min;
        Some((x_min, y_min, width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Count pixels with non-zero alpha in one row
    fn painted_in_row(surface: &MaskSurface, y: u32) -> u32 {
        (0..surface.width)
            .filter(|&x| surface.get_pixel(x, y).unwrap()[3] > 0)
            .count() as u32
    }

    #[test]
    fn test_disc_paints_exact_diameter() {
        let mut surface = MaskSurface::new(100, 100);

        let bounds = surface.paint_disc(50.0, 50.0, 10.0, PaintStyle::brush(1.0));
        assert!(bounds.is_some());

        // The painted span through the center matches the diameter
        assert_eq!(painted_in_row(&surface, 50), 20);
        assert_eq!(surface.get_pixel(50, 50).unwrap(), [255, 255, 255, 255]);
        assert_eq!(surface.get_pixel(61, 50).unwrap()[3], 0);
    }

    #[test]
    fn test_disc_single_pass_respects_opacity() {
        let mut surface = MaskSurface::new(60, 60);

        surface.paint_disc(30.0, 30.0, 12.0, PaintStyle::brush(0.5));

        let max_alpha = surface.pixels().iter().map(|p| p[3]).max().unwrap();
        assert!(max_alpha <= 128);
        // Interior pixels sit exactly at the configured opacity
        assert_eq!(surface.get_pixel(30, 30).unwrap(), [255, 255, 255, 128]);
    }

    #[test]
    fn test_disc_outside_surface() {
        let mut surface = MaskSurface::new(50, 50);

        let bounds = surface.paint_disc(-100.0, 25.0, 5.0, PaintStyle::brush(1.0));

        assert!(bounds.is_none());
        assert!(surface.pixels().iter().all(|p| p[3] == 0));
    }

    #[test]
    fn test_degenerate_disc_is_skipped() {
        let mut surface = MaskSurface::new(50, 50);

        assert!(surface.paint_disc(25.0, 25.0, 0.0, PaintStyle::brush(1.0)).is_none());
        assert!(surface.paint_disc(25.0, 25.0, -3.0, PaintStyle::brush(1.0)).is_none());
        assert!(surface.paint_disc(25.0, 25.0, 5.0, PaintStyle::brush(0.0)).is_none());
    }

    #[test]
    fn test_segment_paints_band_with_round_caps() {
        let mut surface = MaskSurface::new(100, 100);

        surface.paint_segment(30.0, 10.0, 30.0, 50.0, 20.0, PaintStyle::brush(1.0));

        // Width across the middle of the band
        assert_eq!(painted_in_row(&surface, 30), 20);
        // Caps extend about half the width past each endpoint
        assert!(surface.get_pixel(30, 59).unwrap()[3] > 0);
        assert_eq!(surface.get_pixel(30, 61).unwrap()[3], 0);
        assert!(surface.get_pixel(30, 1).unwrap()[3] > 0);
    }

    #[test]
    fn test_zero_length_segment_matches_disc() {
        let mut from_segment = MaskSurface::new(30, 30);
        let mut from_disc = MaskSurface::new(30, 30);

        from_segment.paint_segment(15.0, 15.0, 15.0, 15.0, 12.0, PaintStyle::brush(0.5));
        from_disc.paint_disc(15.0, 15.0, 6.0, PaintStyle::brush(0.5));

        assert_eq!(from_segment.pixels(), from_disc.pixels());
    }

    #[test]
    fn test_eraser_removes_painted_region() {
        let mut surface = MaskSurface::new(60, 60);
        surface.paint_disc(30.0, 30.0, 20.0, PaintStyle::brush(1.0));

        surface.paint_disc(30.0, 30.0, 8.0, PaintStyle::eraser());

        // Fully erased in the middle, untouched on the outer ring
        assert_eq!(surface.get_pixel(30, 30).unwrap(), [0, 0, 0, 0]);
        assert_eq!(surface.get_pixel(30, 14).unwrap()[3], 255);
    }

    #[test]
    fn test_eraser_on_blank_surface_stays_blank() {
        let mut surface = MaskSurface::new(40, 40);

        surface.paint_disc(20.0, 20.0, 10.0, PaintStyle::eraser());

        assert!(surface.pixels().iter().all(|p| *p == [0, 0, 0, 0]));
    }

    #[test]
    fn test_bounds_are_clamped_to_surface() {
        let mut surface = MaskSurface::new(40, 40);

        let bounds = surface
            .paint_disc(0.0, 0.0, 10.0, PaintStyle::brush(1.0))
            .unwrap();

        let (x, y, w, h) = bounds;
        assert_eq!((x, y), (0, 0));
        assert!(w <= 12 && h <= 12);
    }
}
