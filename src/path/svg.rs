//! Serialize a finished [`KolamDesign`] into an SVG document.
//!
//! One shape element is emitted per primitive, in stroke order: `<line>` for
//! line segments, `<path>` with a single elliptical-arc command for arcs, and
//! `<polygon>` for closed polygons. Everything is stroke-only. The serializer
//! never re-derives turtle semantics; the arc flags arrive ready to use on
//! the primitive.

use svg::node::element::path::Data;
use svg::node::element::{Line, Path, Polygon, Rectangle};
use svg::Document;

use crate::kolam::KolamDesign;
use crate::path::DrawPrimitive;

/// Convert a design into an SVG document (or its string rendering).
pub trait ToSvg {
    fn to_document(&self) -> Document;

    fn to_svg_string(&self) -> String {
        self.to_document().to_string()
    }
}

/// SVG flag attributes are 0/1, not true/false.
fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

impl ToSvg for KolamDesign {
    fn to_document(&self) -> Document {
        let mut document = Document::new()
            .set("viewBox", format!("0 0 {} {}", self.width(), self.height()))
            .set("width", format!("{}px", self.width()))
            .set("height", format!("{}px", self.height()))
            .add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", "white"),
            );

        for primitive in self.primitives() {
            document = match primitive {
                DrawPrimitive::Line { start, end } => document.add(
                    Line::new()
                        .set("x1", start.x())
                        .set("y1", start.y())
                        .set("x2", end.x())
                        .set("y2", end.y())
                        .set("stroke", "black")
                        .set("stroke-width", self.stroke_width()),
                ),
                DrawPrimitive::Arc {
                    start,
                    end,
                    radius,
                    large_arc,
                    sweep,
                } => {
                    let data = Data::new().move_to((start.x(), start.y())).elliptical_arc_to((
                        *radius,
                        *radius,
                        0.0,
                        flag(*large_arc),
                        flag(*sweep),
                        end.x(),
                        end.y(),
                    ));
                    document.add(
                        Path::new()
                            .set("d", data)
                            .set("stroke", "black")
                            .set("stroke-width", self.stroke_width())
                            .set("fill", "none"),
                    )
                }
                DrawPrimitive::ClosedPolygon { vertices } => {
                    let points = vertices
                        .iter()
                        .map(|p| format!("{},{}", p.x(), p.y()))
                        .collect::<Vec<_>>()
                        .join(" ");
                    document.add(
                        Polygon::new()
                            .set("points", points)
                            .set("stroke", "black")
                            .set("stroke-width", self.stroke_width())
                            .set("fill", "none"),
                    )
                }
            };
        }
        document
    }
}
