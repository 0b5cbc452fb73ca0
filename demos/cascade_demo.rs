#![allow(clippy::cast_precision_loss)]
//! Headless demo of cascade and light-frustum geometry.
//!
//! Orbits the viewer around the scene for a few frames, sweeping the light,
//! and prints what a renderer would draw each frame.
//!
//! Usage: `cargo run --example cascade_demo -- [options.json] [projection]`
//! where the projection is 0 or `perspective`, 1 or `orthographic`.

use rayfrustum::{
    init_logging, load_options, Corner, OrbitInput, ProjectionKind, Result, Scene, SceneOptions,
    Vec2,
};

const FRAMES: u32 = 6;

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let options = match args.next() {
        Some(path) => load_options(path)?,
        None => SceneOptions::default(),
    };

    let mut scene = Scene::new(options)?;
    if let Some(arg) = args.next() {
        scene.set_observed_projection(arg.parse::<ProjectionKind>()?);
    }
    println!(
        "observed camera projection {}",
        scene.observed_camera().projection.to_index()
    );

    // Drag with the middle button held, zooming in a little each frame
    let input = OrbitInput {
        middle_down: true,
        shift_down: false,
        mouse_delta: Vec2::new(120.0, 15.0),
        wheel: 1.0,
    };

    for frame_index in 0..FRAMES {
        let azimuth = 45.0 + 20.0 * frame_index as f32;
        scene.set_light_angles(azimuth, scene.light().attitude);

        let frame = scene.frame()?;
        let eye = scene.viewer_camera().position;
        println!(
            "frame {frame_index}: eye {eye:.2}, light {:.3}, draw order {:?}",
            frame.light_direction, frame.draw_order
        );

        for volume in frame.camera_volumes() {
            let (near, far) = frame
                .camera_cascade
                .depth_range(volume.index)
                .unwrap_or_default();
            println!(
                "  camera split {} [{near}, {far}] color {:.2}",
                volume.index, volume.color
            );
        }
        for (i, light) in frame.light_cascade.frustums().iter().enumerate() {
            println!(
                "  light split {i}: near-bottom-left {:.2}, far-top-right {:.2}",
                light.corner(Corner::NearBottomLeft),
                light.corner(Corner::FarTopRight)
            );
        }

        scene.update(&input);
    }

    Ok(())
}
