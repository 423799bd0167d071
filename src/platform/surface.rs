/// Abstract drawing-surface interface.
///
/// The native primitive set of a 2D drawing backend, with flat positional
/// parameters. Surfaces are created, owned, and torn down by the caller;
/// the adapter only ever borrows one for the duration of a single call.
/// Any path-building state lives behind this trait, never in front of it.

use crate::core::types::{Direction, FillRule};

pub trait DrawSurface {
    /// Retained path object produced by [`DrawSurface::copy_path`] and
    /// replayed by the path-consuming primitives.
    type Path;
    /// Backend failure type, surfaced to callers unchanged.
    type Error;

    // Path lifecycle
    fn begin_path(&mut self);
    fn close_path(&mut self);

    // Path construction
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    fn curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);
    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64);
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64);
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64, dir: Direction);
    fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        major: f64,
        minor: f64,
        rotation: f64,
        start: f64,
        end: f64,
        dir: Direction,
    );

    // Path consumption. `path` replays a retained path in place of the
    // current one; `None` consumes the current path.
    fn copy_path(&mut self) -> Result<Self::Path, Self::Error>;
    fn fill(&mut self, path: Option<&Self::Path>, rule: FillRule) -> Result<(), Self::Error>;
    fn stroke(&mut self, path: Option<&Self::Path>) -> Result<(), Self::Error>;
    fn clip(&mut self, path: Option<&Self::Path>, rule: FillRule) -> Result<(), Self::Error>;
    fn in_fill(
        &mut self,
        path: Option<&Self::Path>,
        x: f64,
        y: f64,
        rule: FillRule,
    ) -> Result<bool, Self::Error>;
    fn in_stroke(
        &mut self,
        path: Option<&Self::Path>,
        x: f64,
        y: f64,
    ) -> Result<bool, Self::Error>;

    // Rectangle shortcuts; must leave the current path untouched
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), Self::Error>;
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), Self::Error>;
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), Self::Error>;

    // Drawing state
    fn save(&mut self) -> Result<(), Self::Error>;
    fn restore(&mut self) -> Result<(), Self::Error>;
    fn set_color(&mut self, r: f64, g: f64, b: f64, a: f64);
    fn set_line_width(&mut self, width: f64);
    fn set_dash(&mut self, dashes: &[f64], offset: f64);
    fn translate(&mut self, tx: f64, ty: f64);
    fn scale(&mut self, sx: f64, sy: f64);
    fn rotate(&mut self, angle: f64);
}
