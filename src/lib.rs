//! Canvas-style 2D drawing adapter.
//!
//! Stateless functions that unpack structured geometry (points, rectangles,
//! radius pairs, angle spans) into positional calls on a [`DrawSurface`] —
//! an opaque handle to an external 2D drawing backend, owned by the caller.
//! The adapter holds no state, validates nothing, and passes every return
//! value and failure through unchanged.
//!
//! Two surfaces ship with the crate: [`CairoSurface`] over a
//! `cairo::Context`, and [`TraceSurface`], which records primitive calls
//! instead of drawing.

pub mod canvas;
pub mod core;
pub mod platform;

pub use crate::core::types::{AngleSpan, Color, Direction, FillRule, Point, Radii, Rect};
pub use crate::platform::surface::DrawSurface;
pub use crate::platform::surface_cairo::CairoSurface;
pub use crate::platform::surface_trace::{TraceCall, TracePath, TraceSurface};
