mod rotate;
mod translate;

pub use rotate::{rotation, snap_small_entries, Axis};
pub use translate::translation;
