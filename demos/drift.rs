//! The minimal variant: plain drifting dots, no pointer forces, no
//! connection lines. More particles since the O(n²) pass is off.
//!
//! Run with: cargo run --example drift

use plexus::prelude::*;

fn main() {
    let config = FieldConfig::new()
        .with_particle_count(160)
        .with_max_speed(0.6)
        .with_pointer_repulsion(false)
        .with_connections(false)
        .with_accent_color(Color::from_rgb8(255, 255, 255));

    let field = ParticleField::new(1280.0, 720.0, config);

    let host = WindowHost::new(WindowOptions {
        title: "plexus - drift".to_string(),
        ..Default::default()
    });

    if let Err(e) = host.run(field) {
        eprintln!("{e}");
    }
}
