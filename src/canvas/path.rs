/// Path lifecycle and construction adapters.
///
/// Each function unpacks its structured arguments into positional form and
/// forwards exactly one call to the surface's matching primitive. Nothing
/// is validated or cached here; path-building state belongs to the surface.

use crate::core::types::{AngleSpan, Direction, Point, Radii, Rect};
use crate::platform::surface::DrawSurface;

/// Start a new path, discarding the current one.
pub fn begin_path<S: DrawSurface>(surface: &mut S) {
    surface.begin_path();
}

/// Close the current subpath back to its starting point.
pub fn close_path<S: DrawSurface>(surface: &mut S) {
    surface.close_path();
}

pub fn move_to<S: DrawSurface>(surface: &mut S, p: Point) {
    surface.move_to(p.x, p.y);
}

pub fn line_to<S: DrawSurface>(surface: &mut S, p: Point) {
    surface.line_to(p.x, p.y);
}

/// Quadratic Bezier from the current point through control `c` to `p`.
pub fn quadratic_curve_to<S: DrawSurface>(surface: &mut S, c: Point, p: Point) {
    surface.quad_to(c.x, c.y, p.x, p.y);
}

/// Cubic Bezier from the current point via `c1` and `c2` to `p`.
pub fn bezier_curve_to<S: DrawSurface>(surface: &mut S, c1: Point, c2: Point, p: Point) {
    surface.curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
}

/// Arc of `radius` fitted into the corner formed by the current point,
/// `c1`, and `c2`.
pub fn arc_to<S: DrawSurface>(surface: &mut S, c1: Point, c2: Point, radius: f64) {
    surface.arc_to(c1.x, c1.y, c2.x, c2.y, radius);
}

/// Append `r` as a closed rectangular subpath.
pub fn rect<S: DrawSurface>(surface: &mut S, r: Rect) {
    surface.rect(r.x, r.y, r.w, r.h);
}

/// Append `r` with its corners rounded to `radius`.
pub fn round_rect<S: DrawSurface>(surface: &mut S, r: Rect, radius: f64) {
    surface.round_rect(r.x, r.y, r.w, r.h, radius);
}

/// Append a circular arc subpath around `center`.
pub fn arc<S: DrawSurface>(
    surface: &mut S,
    center: Point,
    radius: f64,
    span: AngleSpan,
    dir: Direction,
) {
    surface.arc(center.x, center.y, radius, span.start, span.end, dir);
}

/// Append an elliptical arc subpath around `center`, with the major axis
/// rotated by `rotation` radians.
pub fn ellipse<S: DrawSurface>(
    surface: &mut S,
    center: Point,
    radii: Radii,
    rotation: f64,
    span: AngleSpan,
    dir: Direction,
) {
    surface.ellipse(
        center.x,
        center.y,
        radii.major,
        radii.minor,
        rotation,
        span.start,
        span.end,
        dir,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::surface_trace::{TraceCall, TraceSurface};

    #[test]
    fn test_lifecycle_and_segments_forward_in_order() {
        let mut s = TraceSurface::new();
        begin_path(&mut s);
        move_to(&mut s, Point::new(1.0, 2.0));
        line_to(&mut s, Point::new(3.0, 4.0));
        close_path(&mut s);
        assert_eq!(
            s.calls,
            vec![
                TraceCall::BeginPath,
                TraceCall::MoveTo(1.0, 2.0),
                TraceCall::LineTo(3.0, 4.0),
                TraceCall::ClosePath,
            ]
        );
    }

    #[test]
    fn test_curves_unpack_control_points_first() {
        let mut s = TraceSurface::new();
        quadratic_curve_to(&mut s, Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        bezier_curve_to(
            &mut s,
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
            Point::new(5.0, 6.0),
        );
        arc_to(&mut s, Point::new(7.0, 8.0), Point::new(9.0, 10.0), 2.5);
        assert_eq!(
            s.calls,
            vec![
                TraceCall::QuadTo(1.0, 2.0, 3.0, 4.0),
                TraceCall::CurveTo(1.0, 2.0, 3.0, 4.0, 5.0, 6.0),
                TraceCall::ArcTo(7.0, 8.0, 9.0, 10.0, 2.5),
            ]
        );
    }

    #[test]
    fn test_rect_subpaths_unpack_position_then_size() {
        let mut s = TraceSurface::new();
        rect(&mut s, Rect::new(1.0, 2.0, 3.0, 4.0));
        round_rect(&mut s, Rect::new(5.0, 6.0, 7.0, 8.0), 1.5);
        assert_eq!(
            s.calls,
            vec![
                TraceCall::Rect(1.0, 2.0, 3.0, 4.0),
                TraceCall::RoundRect(5.0, 6.0, 7.0, 8.0, 1.5),
            ]
        );
    }

    #[test]
    fn test_arc_forwards_span_and_direction() {
        let mut s = TraceSurface::new();
        arc(
            &mut s,
            Point::new(10.0, 20.0),
            5.0,
            AngleSpan::new(0.5, 1.5),
            Direction::CounterClockwise,
        );
        assert_eq!(
            s.calls,
            vec![TraceCall::Arc(
                10.0,
                20.0,
                5.0,
                0.5,
                1.5,
                Direction::CounterClockwise
            )]
        );
    }

    #[test]
    fn test_ellipse_forwards_flat_argument_list() {
        let mut s = TraceSurface::new();
        ellipse(
            &mut s,
            Point::new(0.0, 0.0),
            Radii::new(5.0, 2.0),
            0.0,
            AngleSpan::new(0.0, 6.283),
            Direction::Clockwise,
        );
        assert_eq!(
            s.calls,
            vec![TraceCall::Ellipse(
                0.0,
                0.0,
                5.0,
                2.0,
                0.0,
                0.0,
                6.283,
                Direction::Clockwise
            )]
        );
    }

    #[test]
    fn test_inputs_survive_the_call_unchanged() {
        let mut s = TraceSurface::new();
        let center = Point::new(1.0, 1.0);
        let radii = Radii::new(4.0, 3.0);
        let span = AngleSpan::new(0.0, 1.0);
        ellipse(&mut s, center, radii, 0.25, span, Direction::Clockwise);
        // geometry is Copy and taken by value, so the caller's values are intact
        assert_eq!(center.x, 1.0);
        assert_eq!(radii.minor, 3.0);
        assert_eq!(span.end, 1.0);
        assert_eq!(s.calls.len(), 1);
    }
}
