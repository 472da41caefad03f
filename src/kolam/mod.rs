//! Style variants, render parameters, and the render entry point.
//!
//! The three stroke variants (`lsystem`, `suzhi`, `kambi`) share one
//! interpretation loop over the expanded grammar string, differing only in
//! where the turtle starts; `grouptheory` skips the grammar and turtle
//! entirely and lays out a checkerboard of regular polygons.
//!
//! Every render is a pure, synchronous computation over its parameters: no
//! I/O, no shared state, no statics. Renders are independently reentrant.

use std::collections::HashMap;
use std::str::FromStr;

use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::errors::KolamError;
use crate::l_system::LSystem;
use crate::path::{DrawPrimitive, PathBuffer};
use crate::turtle::TurtleState;

/// Canvas edge length for the stroke variants, in canvas units.
pub const STROKE_CANVAS: f64 = 600.0;

/// Canvas edge length for the group-theory variant.
pub const GRID_CANVAS: f64 = 800.0;

/// Cell pitch of the group-theory polygon grid.
pub const GRID_SCALE: f64 = 40.0;

/// The four supported kolam styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Lsystem,
    Suzhi,
    Kambi,
    Grouptheory,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Lsystem => "lsystem",
            Variant::Suzhi => "suzhi",
            Variant::Kambi => "kambi",
            Variant::Grouptheory => "grouptheory",
        }
    }
}

impl FromStr for Variant {
    type Err = KolamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lsystem" => Ok(Variant::Lsystem),
            "suzhi" => Ok(Variant::Suzhi),
            "kambi" => Ok(Variant::Kambi),
            "grouptheory" => Ok(Variant::Grouptheory),
            other => Err(KolamError::UnknownVariant(other.to_string())),
        }
    }
}

/// A regular-polygon template for the group-theory grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolygonSpec {
    pub sides: u32,
    pub radius: f64,
}

/// Full parameter set for one render. Defaults match the classic eight-dot
/// kolam grammar, so `KolamParameters::default()` renders a valid design.
///
/// Deserializes from a request body with any subset of fields present; the
/// `variant` field also answers to its legacy name `design_type`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct KolamParameters {
    #[serde(alias = "design_type")]
    pub variant: Variant,
    pub axiom: String,
    pub rules: HashMap<char, String>,
    /// Carried for request compatibility; no driver consumes it.
    pub angle: f64,
    /// Base length unit for the stroke variants. Must be positive.
    pub dot_size: f64,
    /// Grammar expansion rounds. The engine imposes no ceiling; callers must
    /// cap this, since non-contracting rules grow exponentially.
    pub iterations: u32,
    /// Kambi only: rhombus side length in dot-size units.
    pub rhombus_size: f64,
    /// Grouptheory only: checkerboard edge length in cells.
    pub grid_size: u32,
    /// Grouptheory only: polygon for cells with even (row + col).
    pub polygon1: PolygonSpec,
    /// Grouptheory only: polygon for cells with odd (row + col).
    pub polygon2: PolygonSpec,
}

impl Default for KolamParameters {
    fn default() -> Self {
        Self {
            variant: Variant::Lsystem,
            axiom: "FBFBFBFB".to_string(),
            rules: HashMap::from([
                ('A', "AFBFA".to_string()),
                ('B', "AFBFBFBFA".to_string()),
            ]),
            angle: 45.0,
            dot_size: 10.0,
            iterations: 2,
            rhombus_size: 5.0,
            grid_size: 8,
            polygon1: PolygonSpec {
                sides: 6,
                radius: 3.0,
            },
            polygon2: PolygonSpec {
                sides: 8,
                radius: 2.0,
            },
        }
    }
}

impl KolamParameters {
    /// Fail-fast precondition checks, run before any primitive is emitted.
    /// Only the fields the selected variant consumes are checked.
    pub fn validate(&self) -> Result<(), KolamError> {
        match self.variant {
            Variant::Lsystem | Variant::Suzhi | Variant::Kambi => {
                if self.dot_size <= 0.0 {
                    return Err(KolamError::InvalidParameter(format!(
                        "dot_size must be positive, got {}",
                        self.dot_size
                    )));
                }
                if self.variant == Variant::Kambi && self.rhombus_size <= 0.0 {
                    return Err(KolamError::InvalidParameter(format!(
                        "rhombus_size must be positive, got {}",
                        self.rhombus_size
                    )));
                }
            }
            Variant::Grouptheory => {
                if self.grid_size < 1 {
                    return Err(KolamError::InvalidParameter(
                        "grid_size must be at least 1".to_string(),
                    ));
                }
                for (label, polygon) in [("polygon1", &self.polygon1), ("polygon2", &self.polygon2)]
                {
                    if polygon.sides < 3 {
                        return Err(KolamError::InvalidParameter(format!(
                            "{} must have at least 3 sides, got {}",
                            label, polygon.sides
                        )));
                    }
                    if polygon.radius <= 0.0 {
                        return Err(KolamError::InvalidParameter(format!(
                            "{} radius must be positive, got {}",
                            label, polygon.radius
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// A finished render: the canvas size, the stroke width the serializer
/// should use, and the primitives in stroke order.
#[derive(Clone, Debug)]
pub struct KolamDesign {
    width: f64,
    height: f64,
    stroke_width: f64,
    primitives: Vec<DrawPrimitive>,
}

impl KolamDesign {
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Primitives in stroke order.
    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }
}

/// Render a kolam design from its parameters.
///
/// # Example
///
/// ```rust
/// use kolam_rs::kolam::{render, KolamParameters};
///
/// let design = render(&KolamParameters::default()).unwrap();
/// assert!(!design.primitives().is_empty());
/// ```
pub fn render(params: &KolamParameters) -> Result<KolamDesign, KolamError> {
    params.validate()?;
    match params.variant {
        Variant::Lsystem | Variant::Suzhi => {
            let start = stroke_start(params.dot_size);
            let buf = interpret_strokes(params, start)?;
            Ok(stroke_design(buf))
        }
        Variant::Kambi => {
            let rhombus_side = params.rhombus_size * params.dot_size;
            let start = stroke_start(rhombus_side / 2.0);
            let buf = interpret_strokes(params, start)?;
            Ok(stroke_design(buf))
        }
        Variant::Grouptheory => Ok(polygon_grid(params)),
    }
}

/// Stroke variants start below and to the left of the canvas center so the
/// pattern unwinds around it.
fn stroke_start(offset: f64) -> Point<f64> {
    let center = STROKE_CANVAS / 2.0;
    Point::new(center - offset, center + offset)
}

fn stroke_design(buf: PathBuffer) -> KolamDesign {
    KolamDesign {
        width: STROKE_CANVAS,
        height: STROKE_CANVAS,
        stroke_width: 2.0,
        primitives: buf.into_primitives(),
    }
}

/// The shared interpretation loop for the stroke variants: expand the
/// grammar, then walk the symbol stream with one turtle.
///
/// `F` draws a dot-size line, `A` a quarter arc at dot-size radius, and `B` a
/// fixed 5/sqrt(2) step followed by a three-quarter loop of the same radius
/// (the closed loop drawn around a dot). Unrecognized symbols are silently
/// skipped, matching the expander's identity rule.
fn interpret_strokes(
    params: &KolamParameters,
    start: Point<f64>,
) -> Result<PathBuffer, KolamError> {
    let system = LSystem {
        axiom: params.axiom.clone(),
        rules: params.rules.clone(),
    };
    let expanded = system.expand(params.iterations);

    let mut turtle = TurtleState::new(start);
    let mut buf = PathBuffer::new();
    for symbol in expanded.chars() {
        match symbol {
            'F' => turtle.forward(&mut buf, params.dot_size),
            'A' => turtle.arc(&mut buf, params.dot_size, 90.0)?,
            'B' => {
                let step = 5.0 / std::f64::consts::SQRT_2;
                turtle.forward(&mut buf, step);
                turtle.arc(&mut buf, step, 270.0)?;
            }
            _ => {}
        }
    }
    Ok(buf)
}

/// Local vertex ring of a regular polygon, first vertex on the +x axis.
fn polygon_ring(spec: &PolygonSpec) -> Vec<Point<f64>> {
    let step = 2.0 * std::f64::consts::PI / f64::from(spec.sides);
    (0..spec.sides)
        .map(|i| {
            let angle = f64::from(i) * step;
            Point::new(spec.radius * angle.cos(), spec.radius * angle.sin())
        })
        .collect()
}

/// The group-theory layout: a `grid_size` x `grid_size` checkerboard where
/// each cell holds one of the two polygon templates by parity of its row and
/// column indices, scaled to a third of the cell pitch and translated to the
/// cell center. No grammar, no turtle.
fn polygon_grid(params: &KolamParameters) -> KolamDesign {
    let ring1 = polygon_ring(&params.polygon1);
    let ring2 = polygon_ring(&params.polygon2);

    let center = GRID_CANVAS / 2.0;
    let origin = center - f64::from(params.grid_size - 1) * GRID_SCALE / 2.0;

    let mut buf = PathBuffer::new();
    for row in 0..params.grid_size {
        for col in 0..params.grid_size {
            let ring = if (row + col) % 2 == 0 { &ring1 } else { &ring2 };
            let offset_x = origin + f64::from(col) * GRID_SCALE;
            let offset_y = origin + f64::from(row) * GRID_SCALE;
            let vertices = ring
                .iter()
                .map(|p| {
                    Point::new(
                        offset_x + p.x() * GRID_SCALE / 3.0,
                        offset_y + p.y() * GRID_SCALE / 3.0,
                    )
                })
                .collect();
            buf.push(DrawPrimitive::ClosedPolygon { vertices });
        }
    }

    KolamDesign {
        width: GRID_CANVAS,
        height: GRID_CANVAS,
        stroke_width: 1.0,
        primitives: buf.into_primitives(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_variant_from_str() {
        assert_eq!("lsystem".parse::<Variant>().unwrap(), Variant::Lsystem);
        assert_eq!("suzhi".parse::<Variant>().unwrap(), Variant::Suzhi);
        assert_eq!("kambi".parse::<Variant>().unwrap(), Variant::Kambi);
        assert_eq!(
            "grouptheory".parse::<Variant>().unwrap(),
            Variant::Grouptheory
        );
        assert_eq!(
            "mandala".parse::<Variant>(),
            Err(KolamError::UnknownVariant("mandala".to_string()))
        );
    }

    #[test]
    fn test_parameters_deserialize_with_defaults() {
        let params: KolamParameters =
            serde_json::from_str(r#"{"design_type": "kambi", "dot_size": 4}"#).unwrap();
        assert_eq!(params.variant, Variant::Kambi);
        assert_eq!(params.dot_size, 4.0);
        assert_eq!(params.axiom, "FBFBFBFB");
        assert_eq!(params.rules.get(&'A').unwrap(), "AFBFA");
        assert_eq!(params.iterations, 2);
        assert_eq!(params.grid_size, 8);
        assert_eq!(params.polygon1.sides, 6);
    }

    #[test]
    fn test_parameters_serialize_round_trip() {
        let params = KolamParameters {
            variant: Variant::Grouptheory,
            grid_size: 4,
            ..KolamParameters::default()
        };
        let body = serde_json::to_string(&params).unwrap();
        let back: KolamParameters = serde_json::from_str(&body).unwrap();
        assert_eq!(back.variant, Variant::Grouptheory);
        assert_eq!(back.grid_size, 4);
        assert_eq!(back.axiom, params.axiom);
        assert_eq!(back.rules, params.rules);
        assert_eq!(back.dot_size, params.dot_size);
        assert_eq!(back.polygon1, params.polygon1);
        assert_eq!(back.polygon2, params.polygon2);
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        let mut params = KolamParameters {
            dot_size: 0.0,
            ..KolamParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(KolamError::InvalidParameter(_))
        ));

        params = KolamParameters {
            variant: Variant::Kambi,
            rhombus_size: -1.0,
            ..KolamParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(KolamError::InvalidParameter(_))
        ));

        params = KolamParameters {
            variant: Variant::Grouptheory,
            grid_size: 0,
            ..KolamParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(KolamError::InvalidParameter(_))
        ));

        params = KolamParameters {
            variant: Variant::Grouptheory,
            polygon2: PolygonSpec {
                sides: 2,
                radius: 1.0,
            },
            ..KolamParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(KolamError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_render_default_lsystem() {
        // Canvas center (300, 300) offset by (-dot_size, +dot_size); the
        // default axiom starts with F, so the first primitive is a line from
        // (290, 310).
        let design = render(&KolamParameters::default()).unwrap();
        assert_eq!(design.width(), 600.0);
        assert_eq!(design.stroke_width(), 2.0);
        assert!(!design.primitives().is_empty());
        match &design.primitives()[0] {
            DrawPrimitive::Line { start, .. } => {
                assert!((start.x() - 290.0).abs() < 1e-9);
                assert!((start.y() - 310.0).abs() < 1e-9);
            }
            other => panic!("expected a line, got {:?}", other),
        }
    }

    #[test]
    fn test_suzhi_matches_lsystem() {
        let lsystem = render(&KolamParameters::default()).unwrap();
        let suzhi = render(&KolamParameters {
            variant: Variant::Suzhi,
            ..KolamParameters::default()
        })
        .unwrap();
        assert_eq!(lsystem.primitives(), suzhi.primitives());
    }

    #[test]
    fn test_kambi_start_placement() {
        // rhombus_side = 5 * 10 = 50, so the turtle starts at (275, 325).
        let design = render(&KolamParameters {
            variant: Variant::Kambi,
            ..KolamParameters::default()
        })
        .unwrap();
        match &design.primitives()[0] {
            DrawPrimitive::Line { start, .. } => {
                assert!((start.x() - 275.0).abs() < 1e-9);
                assert!((start.y() - 325.0).abs() < 1e-9);
            }
            other => panic!("expected a line, got {:?}", other),
        }
    }

    #[test]
    fn test_grouptheory_checkerboard_counts() {
        let design = render(&KolamParameters {
            variant: Variant::Grouptheory,
            ..KolamParameters::default()
        })
        .unwrap();
        assert_eq!(design.width(), 800.0);
        assert_eq!(design.stroke_width(), 1.0);
        assert_eq!(design.primitives().len(), 64);

        let mut hexagons = 0;
        let mut octagons = 0;
        for primitive in design.primitives() {
            match primitive {
                DrawPrimitive::ClosedPolygon { vertices } if vertices.len() == 6 => hexagons += 1,
                DrawPrimitive::ClosedPolygon { vertices } if vertices.len() == 8 => octagons += 1,
                other => panic!("expected a 6- or 8-gon, got {:?}", other),
            }
        }
        assert_eq!(hexagons, 32);
        assert_eq!(octagons, 32);
    }

    #[test]
    fn test_grouptheory_first_cell_center() {
        // grid_size 1 puts the single cell at the canvas center; its first
        // vertex sits radius * scale/3 to the right of it.
        let design = render(&KolamParameters {
            variant: Variant::Grouptheory,
            grid_size: 1,
            ..KolamParameters::default()
        })
        .unwrap();
        assert_eq!(design.primitives().len(), 1);
        match &design.primitives()[0] {
            DrawPrimitive::ClosedPolygon { vertices } => {
                let first = vertices[0];
                assert!((first.x() - (400.0 + 3.0 * GRID_SCALE / 3.0)).abs() < 1e-9);
                assert!((first.y() - 400.0).abs() < 1e-9);
            }
            other => panic!("expected a polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_iterations_renders_axiom_only() {
        // "FB" at zero iterations: one line for F, then a line and an arc
        // for B.
        let design = render(&KolamParameters {
            axiom: "FB".to_string(),
            iterations: 0,
            ..KolamParameters::default()
        })
        .unwrap();
        assert_eq!(design.primitives().len(), 3);
    }

    #[test]
    fn test_unmapped_symbols_are_skipped() {
        let design = render(&KolamParameters {
            axiom: "XYZ".to_string(),
            rules: HashMap::new(),
            iterations: 3,
            ..KolamParameters::default()
        })
        .unwrap();
        assert!(design.primitives().is_empty());
    }
}
