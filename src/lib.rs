//! Kolam pattern generation tools.
//!
//! This library renders traditional South Indian dot-grid ("kolam") designs
//! as vector geometry. A production grammar is expanded into a symbol stream,
//! which drives a turtle-style drawing head emitting line and arc primitives;
//! the primitives can then be serialized into an SVG document. Four style
//! variants are supported: the plain L-system kolam, the suzhi and kambi
//! stroke variants, and a group-theory variant built from a checkerboard of
//! regular polygons.
//!
//! ```rust
//! use kolam_rs::prelude::*;
//!
//! let params = KolamParameters::default();
//! let design = render(&params).unwrap();
//! let svg_text = design.to_svg_string();
//! assert!(svg_text.contains("<svg"));
//! ```

/// Error types shared across the rendering pipeline
pub mod errors;

/// L-system implementation, with iterative expansion
pub mod l_system;

/// Turtle graphics implementation driving the stroke-based kolam variants
pub mod turtle;

/// Drawing primitives, the append-only path buffer, and SVG serialization
pub mod path;

/// Style variants, render parameters, and the render entry point
pub mod kolam;

/// Make your life easy! Just import prelude::* for one stop shopping.
pub mod prelude {
    pub use crate::errors::KolamError;
    pub use crate::kolam::{render, KolamDesign, KolamParameters, PolygonSpec, Variant};
    pub use crate::l_system::LSystem;
    pub use crate::path::svg::ToSvg;
    pub use crate::path::{DrawPrimitive, PathBuffer};
    pub use crate::turtle::{degrees, TurtleState};
}
