/// Path consumption adapters: fill, stroke, clip, and hit tests.
///
/// `path` selects a retained path (from [`copy_path`]) to operate on in
/// place of the current one; `None` means the current path. Return values
/// and failures are the surface's own, passed through unchanged.

use crate::core::types::{FillRule, Point};
use crate::platform::surface::DrawSurface;

/// Fill the path under `rule`.
pub fn fill<S: DrawSurface>(
    surface: &mut S,
    path: Option<&S::Path>,
    rule: FillRule,
) -> Result<(), S::Error> {
    surface.fill(path, rule)
}

/// Stroke the path's outline with the surface's current line settings.
pub fn stroke<S: DrawSurface>(surface: &mut S, path: Option<&S::Path>) -> Result<(), S::Error> {
    surface.stroke(path)
}

/// Intersect the surface's clip region with the path under `rule`.
pub fn clip<S: DrawSurface>(
    surface: &mut S,
    path: Option<&S::Path>,
    rule: FillRule,
) -> Result<(), S::Error> {
    surface.clip(path, rule)
}

/// Whether `p` lies in the path's fill region; the surface's boolean is
/// returned as-is.
pub fn is_point_in_path<S: DrawSurface>(
    surface: &mut S,
    path: Option<&S::Path>,
    p: Point,
    rule: FillRule,
) -> Result<bool, S::Error> {
    surface.in_fill(path, p.x, p.y, rule)
}

/// Whether `p` lies on the path's stroked outline.
pub fn is_point_in_stroke<S: DrawSurface>(
    surface: &mut S,
    path: Option<&S::Path>,
    p: Point,
) -> Result<bool, S::Error> {
    surface.in_stroke(path, p.x, p.y)
}

/// Snapshot the current path as a retained object for later replay.
pub fn copy_path<S: DrawSurface>(surface: &mut S) -> Result<S::Path, S::Error> {
    surface.copy_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::surface_trace::{TraceCall, TraceSurface};

    #[test]
    fn test_consumers_forward_rule_and_current_path() {
        let mut s = TraceSurface::new();
        fill(&mut s, None, FillRule::NonZero).unwrap();
        stroke(&mut s, None).unwrap();
        clip(&mut s, None, FillRule::EvenOdd).unwrap();
        assert_eq!(
            s.calls,
            vec![
                TraceCall::Fill(None, FillRule::NonZero),
                TraceCall::Stroke(None),
                TraceCall::Clip(None, FillRule::EvenOdd),
            ]
        );
    }

    #[test]
    fn test_retained_path_token_is_forwarded() {
        let mut s = TraceSurface::new();
        let p = copy_path(&mut s).unwrap();
        fill(&mut s, Some(&p), FillRule::EvenOdd).unwrap();
        stroke(&mut s, Some(&p)).unwrap();
        assert_eq!(
            s.calls,
            vec![
                TraceCall::CopyPath(0),
                TraceCall::Fill(Some(0), FillRule::EvenOdd),
                TraceCall::Stroke(Some(0)),
            ]
        );
    }

    #[test]
    fn test_hit_tests_unpack_point_and_return_answer_unchanged() {
        let mut s = TraceSurface::with_hit_answer(true);
        assert!(is_point_in_path(&mut s, None, Point::new(3.0, 7.0), FillRule::NonZero).unwrap());
        assert!(is_point_in_stroke(&mut s, None, Point::new(8.0, 9.0)).unwrap());
        assert_eq!(
            s.calls,
            vec![
                TraceCall::InFill(None, 3.0, 7.0, FillRule::NonZero),
                TraceCall::InStroke(None, 8.0, 9.0),
            ]
        );

        let mut miss = TraceSurface::new();
        assert!(!is_point_in_path(&mut miss, None, Point::new(0.0, 0.0), FillRule::NonZero)
            .unwrap());
        assert!(!is_point_in_stroke(&mut miss, None, Point::new(0.0, 0.0)).unwrap());
    }
}
