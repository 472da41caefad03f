//! # Turtle Module
//!
//! Logo-style turtle drawing head for the stroke-based kolam variants. The
//! turtle tracks a 2D position and a heading in degrees, and emits one
//! primitive into a [`PathBuffer`] per operation: a line for [`forward`],
//! an elliptical arc for [`arc`].
//!
//! [`forward`]: TurtleState::forward
//! [`arc`]: TurtleState::arc

use geo_types::Point;
use std::f64::consts::FRAC_PI_2;

use crate::errors::KolamError;
use crate::path::{arc_flags, DrawPrimitive, PathBuffer};

/// Helper function to convert degrees to radians
pub fn degrees(deg: f64) -> f64 {
    std::f64::consts::PI * (deg / 180.0)
}

/// Mutable drawing-head state, owned by exactly one rendering pass.
///
/// Heading is in degrees, 0 = facing along +x, and accumulates without ever
/// being wrapped to [0, 360). The raw accumulated value feeds the direction
/// math of every subsequent operation, so normalizing it would change where
/// later strokes land.
///
/// # Example
///
/// ```rust
/// use geo_types::Point;
/// use kolam_rs::path::PathBuffer;
/// use kolam_rs::turtle::TurtleState;
///
/// let mut turtle = TurtleState::new(Point::new(0.0, 0.0));
/// let mut buf = PathBuffer::new();
/// turtle.forward(&mut buf, 10.0);
/// turtle.arc(&mut buf, 10.0, 90.0).unwrap();
/// assert_eq!(buf.len(), 2);
/// assert!((turtle.heading() - 90.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct TurtleState {
    position: Point<f64>,
    heading: f64,
}

impl TurtleState {
    /// A turtle at `position`, heading 0 (facing +x).
    pub fn new(position: Point<f64>) -> Self {
        Self {
            position,
            heading: 0.0,
        }
    }

    pub fn position(&self) -> Point<f64> {
        self.position
    }

    /// Accumulated heading in degrees. Unbounded.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Move `length` along the current heading, emitting a line segment.
    /// Heading is unchanged.
    pub fn forward(&mut self, buf: &mut PathBuffer, length: f64) {
        let start = self.position;
        let heading_rad = degrees(self.heading);
        let end = Point::new(
            start.x() + length * heading_rad.cos(),
            start.y() + length * heading_rad.sin(),
        );
        buf.push(DrawPrimitive::Line { start, end });
        self.position = end;
    }

    /// Travel along a circular arc of signed `radius`, sweeping
    /// `sweep_degrees`, emitting one arc primitive.
    ///
    /// The turn center sits perpendicular to the heading: to the left for a
    /// positive radius, to the right for a negative one; `|radius|` is the
    /// distance to it. The start angle relative to the center comes from
    /// `atan2`, the end angle adds the sweep, and the new position is the
    /// point on the circle at the end angle. Heading accumulates the sweep.
    ///
    /// A zero radius puts the turn center on the turtle itself and is a
    /// precondition violation; it fails before emitting anything.
    pub fn arc(
        &mut self,
        buf: &mut PathBuffer,
        radius: f64,
        sweep_degrees: f64,
    ) -> Result<(), KolamError> {
        if radius == 0.0 {
            return Err(KolamError::InvalidParameter(
                "arc radius must be non-zero".to_string(),
            ));
        }

        let heading_rad = degrees(self.heading);
        let center_angle = if radius > 0.0 {
            heading_rad + FRAC_PI_2
        } else {
            heading_rad - FRAC_PI_2
        };
        let r = radius.abs();
        let center = Point::new(
            self.position.x() + r * center_angle.cos(),
            self.position.y() + r * center_angle.sin(),
        );

        let start_angle = (self.position.y() - center.y()).atan2(self.position.x() - center.x());
        let end_angle = start_angle + degrees(sweep_degrees);
        let (large_arc, sweep) = arc_flags(radius, sweep_degrees);

        let start = self.position;
        let end = Point::new(
            center.x() + r * end_angle.cos(),
            center.y() + r * end_angle.sin(),
        );
        buf.push(DrawPrimitive::Arc {
            start,
            end,
            radius: r,
            large_arc,
            sweep,
        });

        self.position = end;
        self.heading += sweep_degrees;
        Ok(())
    }
}
