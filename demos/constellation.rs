//! The full constellation background: pointer repulsion plus connection
//! lines, sized like the original desktop layout.
//!
//! Run with: cargo run --example constellation

use plexus::prelude::*;

fn main() {
    let width = 1280.0;
    let height = 720.0;

    let config = FieldConfig::new()
        .with_particle_count(FieldConfig::count_for_width(width))
        .with_max_speed(0.4);

    let field = ParticleField::new(width, height, config);

    let host = WindowHost::new(WindowOptions {
        title: "plexus - constellation".to_string(),
        width: width as u32,
        height: height as u32,
        ..Default::default()
    });

    if let Err(e) = host.run(field) {
        eprintln!("{e}");
    }
}
