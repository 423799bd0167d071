/// Rectangle shortcuts that bypass path construction.
///
/// Each operates on the region directly and leaves the current path alone.

use crate::core::types::Rect;
use crate::platform::surface::DrawSurface;

/// Reset `r` to transparent.
pub fn clear_rect<S: DrawSurface>(surface: &mut S, r: Rect) -> Result<(), S::Error> {
    surface.clear_rect(r.x, r.y, r.w, r.h)
}

/// Fill `r` with the surface's current color.
pub fn fill_rect<S: DrawSurface>(surface: &mut S, r: Rect) -> Result<(), S::Error> {
    surface.fill_rect(r.x, r.y, r.w, r.h)
}

/// Stroke the outline of `r` with the surface's current line settings.
pub fn stroke_rect<S: DrawSurface>(surface: &mut S, r: Rect) -> Result<(), S::Error> {
    surface.stroke_rect(r.x, r.y, r.w, r.h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::surface_trace::{TraceCall, TraceSurface};

    #[test]
    fn test_fill_rect_unpacks_in_documented_order() {
        let mut s = TraceSurface::new();
        fill_rect(&mut s, Rect::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(s.calls, vec![TraceCall::FillRect(1.0, 2.0, 3.0, 4.0)]);
    }

    #[test]
    fn test_each_shortcut_forwards_exactly_once() {
        let mut s = TraceSurface::new();
        clear_rect(&mut s, Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        fill_rect(&mut s, Rect::new(1.0, 1.0, 8.0, 8.0)).unwrap();
        stroke_rect(&mut s, Rect::new(2.0, 2.0, 6.0, 6.0)).unwrap();
        assert_eq!(
            s.calls,
            vec![
                TraceCall::ClearRect(0.0, 0.0, 10.0, 10.0),
                TraceCall::FillRect(1.0, 1.0, 8.0, 8.0),
                TraceCall::StrokeRect(2.0, 2.0, 6.0, 6.0),
            ]
        );
    }

    #[test]
    fn test_negative_extents_pass_through_unvalidated() {
        let mut s = TraceSurface::new();
        stroke_rect(&mut s, Rect::new(5.0, 5.0, -3.0, -4.0)).unwrap();
        assert_eq!(s.calls, vec![TraceCall::StrokeRect(5.0, 5.0, -3.0, -4.0)]);
    }
}
