/// Drawing-state adapters: attributes, transforms, and save/restore.
///
/// Same contract as the rest of the adapter: one forwarding call each, no
/// state held on this side of the seam.

use crate::core::types::{Color, Point};
use crate::platform::surface::DrawSurface;

/// Push the surface's drawing state (color, line settings, transform, clip).
pub fn save<S: DrawSurface>(surface: &mut S) -> Result<(), S::Error> {
    surface.save()
}

/// Pop the most recently saved drawing state.
pub fn restore<S: DrawSurface>(surface: &mut S) -> Result<(), S::Error> {
    surface.restore()
}

pub fn set_color<S: DrawSurface>(surface: &mut S, color: Color) {
    surface.set_color(color.r, color.g, color.b, color.a);
}

pub fn set_line_width<S: DrawSurface>(surface: &mut S, width: f64) {
    surface.set_line_width(width);
}

/// Set the stroke dash pattern; an empty slice returns to solid lines.
pub fn set_dash<S: DrawSurface>(surface: &mut S, dashes: &[f64], offset: f64) {
    surface.set_dash(dashes, offset);
}

pub fn translate<S: DrawSurface>(surface: &mut S, offset: Point) {
    surface.translate(offset.x, offset.y);
}

pub fn scale<S: DrawSurface>(surface: &mut S, factor: Point) {
    surface.scale(factor.x, factor.y);
}

pub fn rotate<S: DrawSurface>(surface: &mut S, angle: f64) {
    surface.rotate(angle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::surface_trace::{TraceCall, TraceSurface};

    #[test]
    fn test_color_unpacks_to_rgba_components() {
        let mut s = TraceSurface::new();
        set_color(
            &mut s,
            Color {
                r: 0.25,
                g: 0.5,
                b: 0.75,
                a: 1.0,
            },
        );
        assert_eq!(s.calls, vec![TraceCall::SetColor(0.25, 0.5, 0.75, 1.0)]);
    }

    #[test]
    fn test_transforms_unpack_points() {
        let mut s = TraceSurface::new();
        translate(&mut s, Point::new(10.0, 20.0));
        scale(&mut s, Point::new(2.0, 3.0));
        rotate(&mut s, 1.5);
        assert_eq!(
            s.calls,
            vec![
                TraceCall::Translate(10.0, 20.0),
                TraceCall::Scale(2.0, 3.0),
                TraceCall::Rotate(1.5),
            ]
        );
    }

    #[test]
    fn test_state_stack_and_line_settings_forward() {
        let mut s = TraceSurface::new();
        save(&mut s).unwrap();
        set_line_width(&mut s, 2.5);
        set_dash(&mut s, &[6.0, 4.0], 1.0);
        restore(&mut s).unwrap();
        assert_eq!(
            s.calls,
            vec![
                TraceCall::Save,
                TraceCall::SetLineWidth(2.5),
                TraceCall::SetDash(vec![6.0, 4.0], 1.0),
                TraceCall::Restore,
            ]
        );
    }
}
