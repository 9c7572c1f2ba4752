//! Locates the belt from measured points and chains the blade transform.
//!
//! Run with `RUST_LOG=framefit=debug` to see fit details.

use framefit::frame::build_belt_frame;
use framefit::math::{Point3, Vector3};
use framefit::transform::{rotation, translation, Axis};
use framefit::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for framefit.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("framefit=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Belt -> machine.
    let origin = Point3::new(1009.15, -16.49, 623.81);
    let x = [996.14, 1010.89, 1010.89, 1023.99, 1014.15, 1014.15, 1004.89, 1004.89, 1009.15];
    let y = [-16.14, -29.24, 0.92, -16.14, -10.54, -22.95, -22.21, -10.51, -16.49];
    let z = [625.57, 623.52, 623.48, 622.35, 623.61, 622.86, 624.73, 624.40, 623.81];
    let belt = build_belt_frame(&origin, &x, &y, &z)?;

    let pose = belt.xyzabc();
    println!(
        "belt  X={:.3} Y={:.3} Z={:.3} A={:.4} B={:.4} C={:.4}",
        pose[0], pose[1], pose[2], pose[3], pose[4], pose[5]
    );

    // Blade -> belt: rotate in the blade frame, then translate.
    let blade_in_belt = translation(&Vector3::new(0.011, 0.047, 153.319)) * rotation(-49.0, Axis::Z);
    let blade_in_machine = belt.transform() * blade_in_belt;
    println!("blade in machine:{blade_in_machine}");

    Ok(())
}
