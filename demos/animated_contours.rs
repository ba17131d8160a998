#![allow(clippy::cast_precision_loss)]
//! Demo driving the animated contouring pipeline headlessly.
//!
//! Demonstrates:
//! - The default traveling-wave field on the default lattice
//! - Per-frame resample and level set extraction
//! - Interactive-style spacing changes between frames

use isofield_rs::{Animation, Options};

fn main() -> isofield_rs::Result<()> {
    isofield_rs::init_logging();

    let options = Options::default();
    let mut animation = Animation::new(options)?;

    println!("Animated contours demo");
    println!(
        "  lattice: {}x{} nodes, {} triangles",
        animation.grid().dims().0,
        animation.grid().dims().1,
        animation.grid().num_triangles()
    );
    println!("  levels:  {:?}", animation.options().levels);
    println!();

    // Play a short stretch of the animation at 20 fps
    for frame_index in 0..10 {
        let time = frame_index as f32 * 0.05;
        let frame = animation.advance(time);
        println!(
            "  t = {time:.2}: {} points, {} segments ({} bytes of isoline data)",
            frame.isolines.num_points(),
            frame.isolines.num_segments(),
            frame.isoline_point_bytes().len() + frame.isoline_index_bytes().len()
        );
    }

    // Coarsen the lattice and keep going, as a UI slider would
    animation.set_step(0.5)?;
    animation.set_level_step(0.5);
    let frame = animation.advance(0.5);
    println!();
    println!(
        "  coarsened to {}x{}: {} segments",
        frame.grid.dims().0,
        frame.grid.dims().1,
        frame.isolines.num_segments()
    );

    Ok(())
}
