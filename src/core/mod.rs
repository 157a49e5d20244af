pub mod contact;
pub mod scene;

pub use scene::*;

// Shaders bundled as string constants
pub static ORBS_WGSL: &str = include_str!("../../shaders/orbs.wgsl");
