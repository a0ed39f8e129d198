//! Headless render: advance a seeded field for a few seconds' worth of
//! ticks and write the framebuffer to a PNG.
//!
//! Run with: cargo run --example snapshot

use plexus::prelude::*;

fn main() {
    let config = FieldConfig::new().with_seed(7);
    let mut field = ParticleField::new(1280.0, 720.0, config);
    let mut raster = Raster::new(1280, 720);

    // Park the pointer mid-surface so the repulsion carves a visible hollow
    field.update_pointer(640.0, 360.0);
    field.start();
    for _ in 0..300 {
        field.frame(&mut raster);
    }

    match raster.save_png("constellation.png") {
        Ok(()) => println!("Wrote constellation.png ({} ticks)", field.frame_count()),
        Err(e) => eprintln!("Failed to write snapshot: {e}"),
    }
}
