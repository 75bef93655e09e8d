//! Canvas layout helpers

/// Compute the letterboxed rectangle that fits `content` inside `frame`
/// while preserving aspect ratio
///
/// The content is scaled (up or down) until one axis fills the frame and
/// centered on the other axis. Returns (x, y, width, height).
pub fn fit_rect(
    content_width: f32,
    content_height: f32,
    frame_width: f32,
    frame_height: f32,
) -> (f32, f32, f32, f32) {
    if content_width <= 0.0 || content_height <= 0.0 {
        return (0.0, 0.0, 0.0, 0.0);
    }

    let scale = (frame_width / content_width).min(frame_height / content_height);
    let width = content_width * scale;
    let height = content_height * scale;
    let x = (frame_width - width) / 2.0;
    let y = (frame_height - height) / 2.0;
    (x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_content_letterboxes_vertically() {
        let (x, y, w, h) = fit_rect(2560.0, 720.0, 1280.0, 720.0);
        assert_eq!((x, y, w, h), (0.0, 180.0, 1280.0, 360.0));
    }

    #[test]
    fn test_tall_content_letterboxes_horizontally() {
        let (x, y, w, h) = fit_rect(720.0, 1440.0, 1280.0, 720.0);
        assert_eq!((x, y, w, h), (460.0, 0.0, 360.0, 720.0));
    }

    #[test]
    fn test_exact_fit() {
        let (x, y, w, h) = fit_rect(1280.0, 720.0, 1280.0, 720.0);
        assert_eq!((x, y, w, h), (0.0, 0.0, 1280.0, 720.0));
    }

    #[test]
    fn test_small_content_is_upscaled() {
        let (x, y, w, h) = fit_rect(10.0, 10.0, 100.0, 200.0);
        assert_eq!((x, y, w, h), (0.0, 50.0, 100.0, 100.0));
    }

    #[test]
    fn test_degenerate_content() {
        assert_eq!(fit_rect(0.0, 10.0, 100.0, 100.0), (0.0, 0.0, 0.0, 0.0));
    }
}
