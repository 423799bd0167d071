/// Call-recording drawing surface.
///
/// Records every primitive invocation verbatim, flat arguments in call
/// order, and never draws anything. Backs the adapter tests and doubles as
/// a capture surface when debugging what a caller actually emits.

use crate::core::types::{Direction, FillRule};
use crate::platform::surface::DrawSurface;
use std::convert::Infallible;

/// One recorded primitive call.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceCall {
    BeginPath,
    ClosePath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    QuadTo(f64, f64, f64, f64),
    CurveTo(f64, f64, f64, f64, f64, f64),
    ArcTo(f64, f64, f64, f64, f64),
    Rect(f64, f64, f64, f64),
    RoundRect(f64, f64, f64, f64, f64),
    Arc(f64, f64, f64, f64, f64, Direction),
    Ellipse(f64, f64, f64, f64, f64, f64, f64, Direction),
    CopyPath(u32),
    Fill(Option<u32>, FillRule),
    Stroke(Option<u32>),
    Clip(Option<u32>, FillRule),
    InFill(Option<u32>, f64, f64, FillRule),
    InStroke(Option<u32>, f64, f64),
    ClearRect(f64, f64, f64, f64),
    FillRect(f64, f64, f64, f64),
    StrokeRect(f64, f64, f64, f64),
    Save,
    Restore,
    SetColor(f64, f64, f64, f64),
    SetLineWidth(f64),
    SetDash(Vec<f64>, f64),
    Translate(f64, f64),
    Scale(f64, f64),
    Rotate(f64),
}

/// Retained-path stand-in: a numbered token handed out by `copy_path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracePath(pub u32);

#[derive(Debug, Default)]
pub struct TraceSurface {
    pub calls: Vec<TraceCall>,
    /// Answer returned by both hit-test primitives.
    pub hit_answer: bool,
    next_path: u32,
}

impl TraceSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hit_answer(hit: bool) -> Self {
        Self {
            hit_answer: hit,
            ..Self::default()
        }
    }
}

impl DrawSurface for TraceSurface {
    type Path = TracePath;
    type Error = Infallible;

    fn begin_path(&mut self) {
        self.calls.push(TraceCall::BeginPath);
    }

    fn close_path(&mut self) {
        self.calls.push(TraceCall::ClosePath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(TraceCall::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(TraceCall::LineTo(x, y));
    }

    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.calls.push(TraceCall::QuadTo(cx, cy, x, y));
    }

    fn curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.calls.push(TraceCall::CurveTo(c1x, c1y, c2x, c2y, x, y));
    }

    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) {
        self.calls.push(TraceCall::ArcTo(x1, y1, x2, y2, radius));
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.calls.push(TraceCall::Rect(x, y, w, h));
    }

    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64) {
        self.calls.push(TraceCall::RoundRect(x, y, w, h, radius));
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64, dir: Direction) {
        self.calls.push(TraceCall::Arc(cx, cy, radius, start, end, dir));
    }

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
    ) {
        self.calls.push(TraceCall::Ellipse(
            cx, cy, major, minor, rotation, start, end, dir,
        ));
    }

    fn copy_path(&mut self) -> Result<TracePath, Infallible> {
        let id = self.next_path;
        self.next_path += 1;
        self.calls.push(TraceCall::CopyPath(id));
        Ok(TracePath(id))
    }

    fn fill(&mut self, path: Option<&TracePath>, rule: FillRule) -> Result<(), Infallible> {
        self.calls.push(TraceCall::Fill(path.map(|p| p.0), rule));
        Ok(())
    }

    fn stroke(&mut self, path: Option<&TracePath>) -> Result<(), Infallible> {
        self.calls.push(TraceCall::Stroke(path.map(|p| p.0)));
        Ok(())
    }

    fn clip(&mut self, path: Option<&TracePath>, rule: FillRule) -> Result<(), Infallible> {
        self.calls.push(TraceCall::Clip(path.map(|p| p.0), rule));
        Ok(())
    }

    fn in_fill(
        &mut self,
        path: Option<&TracePath>,
        x: f64,
        y: f64,
        rule: FillRule,
    ) -> Result<bool, Infallible> {
        self.calls
            .push(TraceCall::InFill(path.map(|p| p.0), x, y, rule));
        Ok(self.hit_answer)
    }

    fn in_stroke(&mut self, path: Option<&TracePath>, x: f64, y: f64) -> Result<bool, Infallible> {
        self.calls.push(TraceCall::InStroke(path.map(|p| p.0), x, y));
        Ok(self.hit_answer)
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), Infallible> {
        self.calls.push(TraceCall::ClearRect(x, y, w, h));
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), Infallible> {
        self.calls.push(TraceCall::FillRect(x, y, w, h));
        Ok(())
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), Infallible> {
        self.calls.push(TraceCall::StrokeRect(x, y, w, h));
        Ok(())
    }

    fn save(&mut self) -> Result<(), Infallible> {
        self.calls.push(TraceCall::Save);
        Ok(())
    }

    fn restore(&mut self) -> Result<(), Infallible> {
        self.calls.push(TraceCall::Restore);
        Ok(())
    }

    fn set_color(&mut self, r: f64, g: f64, b: f64, a: f64) {
        self.calls.push(TraceCall::SetColor(r, g, b, a));
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(TraceCall::SetLineWidth(width));
    }

    fn set_dash(&mut self, dashes: &[f64], offset: f64) {
        self.calls.push(TraceCall::SetDash(dashes.to_vec(), offset));
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        self.calls.push(TraceCall::Translate(tx, ty));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.calls.push(TraceCall::Scale(sx, sy));
    }

    fn rotate(&mut self, angle: f64) {
        self.calls.push(TraceCall::Rotate(angle));
    }
}
