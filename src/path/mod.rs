//! Drawing primitives and the path buffer they accumulate into.
//!
//! The buffer is a pure accumulator: primitives appear in emission order and
//! are never reordered or deduplicated. Emission order is the stroke order of
//! the finished design, so downstream serializers must preserve it.

use geo_types::Point;

/// Trait to serialize a finished design into an SVG document
pub mod svg;

/// A single drawable primitive in canvas coordinates. Immutable once
/// appended to a [`PathBuffer`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    /// A straight stroke from `start` to `end`.
    Line {
        start: Point<f64>,
        end: Point<f64>,
    },
    /// A circular arc with renderer-ready parameters. `radius` is always
    /// positive; direction and span are carried by the two flags, using the
    /// SVG convention (`sweep` true = clockwise traversal, `large_arc` true =
    /// more than a half circle).
    Arc {
        start: Point<f64>,
        end: Point<f64>,
        radius: f64,
        large_arc: bool,
        sweep: bool,
    },
    /// A closed polygon given by its vertex ring. The closing edge back to
    /// the first vertex is implicit.
    ClosedPolygon { vertices: Vec<Point<f64>> },
}

/// Append-only accumulator for [`DrawPrimitive`]s. One buffer is owned by a
/// single rendering pass; renders share no state, so independent passes can
/// run in parallel with zero coordination.
#[derive(Clone, Debug, Default)]
pub struct PathBuffer {
    primitives: Vec<DrawPrimitive>,
}

impl PathBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, primitive: DrawPrimitive) {
        self.primitives.push(primitive);
    }

    /// Accumulated primitives, in emission order.
    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}

/// Derive SVG arc flags from turtle arc semantics.
///
/// The turtle describes an arc by a signed radius (positive = turn center to
/// the left of the heading) and a signed sweep angle in degrees. The renderer
/// instead wants a `large_arc` flag (span exceeds a half circle) and a
/// `sweep` flag (clockwise traversal). A positive radius sweeps clockwise in
/// canvas coordinates; a negative sweep angle reverses the traversal
/// direction and therefore flips the flag.
///
/// Sweeps beyond a full revolution are outside the tested contract; the flag
/// rule is applied to them as-is.
pub fn arc_flags(radius: f64, sweep_degrees: f64) -> (bool, bool) {
    let large_arc = sweep_degrees.abs() > 180.0;
    let mut sweep = radius > 0.0;
    if sweep_degrees < 0.0 {
        sweep = !sweep;
    }
    (large_arc, sweep)
}
