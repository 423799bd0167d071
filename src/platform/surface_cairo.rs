/// Cairo-backed drawing surface.

use crate::core::types::{Direction, FillRule, Point};
use crate::platform::surface::DrawSurface;
use cairo::Context;
use std::f64::consts::PI;

pub struct CairoSurface {
    cr: Context,
}

impl CairoSurface {
    pub fn new(cr: Context) -> Self {
        Self { cr }
    }

    /// Swap in a fresh context (e.g. after the caller rebuilt its target).
    pub fn set_context(&mut self, cr: Context) {
        self.cr = cr;
    }

    pub fn context(&self) -> &Context {
        &self.cr
    }

    /// Replace the current path with `path`, handing back the displaced one
    /// so it can be reinstated after the consuming call.
    fn swap_in(&self, path: Option<&cairo::Path>) -> Result<Option<cairo::Path>, cairo::Error> {
        match path {
            Some(p) => {
                let kept = self.cr.copy_path()?;
                self.cr.new_path();
                self.cr.append_path(p);
                Ok(Some(kept))
            }
            None => Ok(None),
        }
    }

    fn swap_back(&self, kept: Option<cairo::Path>) {
        if let Some(p) = kept {
            self.cr.new_path();
            self.cr.append_path(&p);
        }
    }

    /// Run `op` against a private rectangle path, then reinstate whatever
    /// path the caller had under construction.
    fn direct_rect<F>(&self, x: f64, y: f64, w: f64, h: f64, op: F) -> Result<(), cairo::Error>
    where
        F: FnOnce(&Context) -> Result<(), cairo::Error>,
    {
        let kept = self.cr.copy_path()?;
        self.cr.new_path();
        self.cr.rectangle(x, y, w, h);
        let res = op(&self.cr);
        self.cr.new_path();
        self.cr.append_path(&kept);
        res
    }
}

fn to_cairo_rule(rule: FillRule) -> cairo::FillRule {
    match rule {
        FillRule::NonZero => cairo::FillRule::Winding,
        FillRule::EvenOdd => cairo::FillRule::EvenOdd,
    }
}

impl DrawSurface for CairoSurface {
    type Path = cairo::Path;
    type Error = cairo::Error;

    fn begin_path(&mut self) {
        self.cr.new_path();
    }

    fn close_path(&mut self) {
        self.cr.close_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.cr.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.cr.line_to(x, y);
    }

    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        // cairo only has cubics; elevate the quadratic. An empty path gets
        // a subpath at the control point first, so the segment degenerates
        // the same way the flat canvas call does.
        if !self.cr.has_current_point().unwrap_or(false) {
            self.cr.move_to(cx, cy);
        }
        let (x0, y0) = self.cr.current_point().unwrap_or((cx, cy));
        let c1x = x0 + 2.0 / 3.0 * (cx - x0);
        let c1y = y0 + 2.0 / 3.0 * (cy - y0);
        let c2x = x + 2.0 / 3.0 * (cx - x);
        let c2y = y + 2.0 / 3.0 * (cy - y);
        self.cr.curve_to(c1x, c1y, c2x, c2y, x, y);
    }

    fn curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.cr.curve_to(c1x, c1y, c2x, c2y, x, y);
    }

    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) {
        if !self.cr.has_current_point().unwrap_or(false) {
            log::debug!("arc_to on an empty path, starting a subpath at the corner");
            self.cr.move_to(x1, y1);
            return;
        }
        let (x0, y0) = self.cr.current_point().unwrap_or((x1, y1));

        let v1 = Point::new(x0, y0) - Point::new(x1, y1);
        let v2 = Point::new(x2, y2) - Point::new(x1, y1);
        let cross = v1.x * v2.y - v1.y * v2.x;
        // Degenerate corner: zero radius, coincident points, or collinear
        // legs reduce to a straight segment into the corner.
        if radius <= 0.0 || v1.length() < 1e-12 || v2.length() < 1e-12 || cross.abs() < 1e-12 {
            self.cr.line_to(x1, y1);
            return;
        }

        let u1 = v1.normalized();
        let u2 = v2.normalized();
        let dot = (u1.x * u2.x + u1.y * u2.y).clamp(-1.0, 1.0);
        let half = dot.acos() / 2.0;
        let corner = Point::new(x1, y1);
        let t1 = corner + u1 * (radius / half.tan());
        let t2 = corner + u2 * (radius / half.tan());
        // Center sits on the corner bisector, radius/sin(half) out.
        let center = corner + (u1 + u2).normalized() * (radius / half.sin());
        let a1 = (t1.y - center.y).atan2(t1.x - center.x);
        let a2 = (t2.y - center.y).atan2(t2.x - center.x);

        self.cr.line_to(t1.x, t1.y);
        let sweep =
            (t1.x - center.x) * (t2.y - center.y) - (t1.y - center.y) * (t2.x - center.x);
        if sweep > 0.0 {
            self.cr.arc(center.x, center.y, radius, a1, a2);
        } else {
            self.cr.arc_negative(center.x, center.y, radius, a1, a2);
        }
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.cr.rectangle(x, y, w, h);
    }

    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64) {
        let r = radius;
        self.cr.new_sub_path();
        self.cr.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
        self.cr.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
        self.cr.arc(x + r, y + h - r, r, PI / 2.0, PI);
        self.cr.arc(x + r, y + r, r, PI, 3.0 * PI / 2.0);
        self.cr.close_path();
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64, dir: Direction) {
        match dir {
            Direction::Clockwise => self.cr.arc(cx, cy, radius, start, end),
            Direction::CounterClockwise => self.cr.arc_negative(cx, cy, radius, start, end),
        }
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
        // cairo's standard ellipse construction: a unit-circle arc under a
        // temporarily scaled CTM. The path keeps its shape once the matrix
        // is put back.
        let m = self.cr.matrix();
        self.cr.translate(cx, cy);
        self.cr.rotate(rotation);
        self.cr.scale(major, minor);
        match dir {
            Direction::Clockwise => self.cr.arc(0.0, 0.0, 1.0, start, end),
            Direction::CounterClockwise => self.cr.arc_negative(0.0, 0.0, 1.0, start, end),
        }
        self.cr.set_matrix(m);
    }

    fn copy_path(&mut self) -> Result<cairo::Path, cairo::Error> {
        self.cr.copy_path()
    }

    fn fill(&mut self, path: Option<&cairo::Path>, rule: FillRule) -> Result<(), cairo::Error> {
        let kept = self.swap_in(path)?;
        self.cr.set_fill_rule(to_cairo_rule(rule));
        let res = self.cr.fill_preserve();
        self.swap_back(kept);
        res
    }

    fn stroke(&mut self, path: Option<&cairo::Path>) -> Result<(), cairo::Error> {
        let kept = self.swap_in(path)?;
        let res = self.cr.stroke_preserve();
        self.swap_back(kept);
        res
    }

    fn clip(&mut self, path: Option<&cairo::Path>, rule: FillRule) -> Result<(), cairo::Error> {
        let kept = self.swap_in(path)?;
        self.cr.set_fill_rule(to_cairo_rule(rule));
        self.cr.clip_preserve();
        self.swap_back(kept);
        Ok(())
    }

    fn in_fill(
        &mut self,
        path: Option<&cairo::Path>,
        x: f64,
        y: f64,
        rule: FillRule,
    ) -> Result<bool, cairo::Error> {
        let kept = self.swap_in(path)?;
        self.cr.set_fill_rule(to_cairo_rule(rule));
        let hit = self.cr.in_fill(x, y);
        self.swap_back(kept);
        hit
    }

    fn in_stroke(
        &mut self,
        path: Option<&cairo::Path>,
        x: f64,
        y: f64,
    ) -> Result<bool, cairo::Error> {
        let kept = self.swap_in(path)?;
        let hit = self.cr.in_stroke(x, y);
        self.swap_back(kept);
        hit
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), cairo::Error> {
        self.direct_rect(x, y, w, h, |cr| {
            cr.save()?;
            cr.set_operator(cairo::Operator::Clear);
            let res = cr.fill();
            res.and(cr.restore())
        })
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), cairo::Error> {
        self.direct_rect(x, y, w, h, |cr| cr.fill())
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), cairo::Error> {
        self.direct_rect(x, y, w, h, |cr| cr.stroke())
    }

    fn save(&mut self) -> Result<(), cairo::Error> {
        self.cr.save()
    }

    fn restore(&mut self) -> Result<(), cairo::Error> {
        self.cr.restore()
    }

    fn set_color(&mut self, r: f64, g: f64, b: f64, a: f64) {
        self.cr.set_source_rgba(r, g, b, a);
    }

    fn set_line_width(&mut self, width: f64) {
        self.cr.set_line_width(width);
    }

    fn set_dash(&mut self, dashes: &[f64], offset: f64) {
        self.cr.set_dash(dashes, offset);
    }

    fn translate(&mut self, tx: f64, ty: f64) {
        self.cr.translate(tx, ty);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.cr.scale(sx, sy);
    }

    fn rotate(&mut self, angle: f64) {
        self.cr.rotate(angle);
    }
}
