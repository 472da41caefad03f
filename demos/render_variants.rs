//! Renders each of the four kolam variants with default parameters and
//! writes one SVG file per variant into the working directory.

use anyhow::Result;
use kolam_rs::prelude::*;

fn main() -> Result<()> {
    for variant in [
        Variant::Lsystem,
        Variant::Suzhi,
        Variant::Kambi,
        Variant::Grouptheory,
    ] {
        let params = KolamParameters {
            variant,
            ..KolamParameters::default()
        };
        let design = render(&params)?;
        let filename = format!("{}.svg", variant.name());
        svg::save(&filename, &design.to_document())?;
        println!("wrote {} ({} primitives)", filename, design.primitives().len());
    }
    Ok(())
}
