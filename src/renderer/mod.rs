//! Presentation-facing views of the simulation
//!
//! The core never draws. Hosts take a [`RenderSnapshot`] after each frame
//! and either paint it directly or upload [`FrameInstances`] to the GPU.

pub mod snapshot;
pub mod vertex;

pub use snapshot::{ObstacleView, ParticleView, PlayerView, RenderSnapshot};
pub use vertex::{CircleInstance, FrameInstances, RectInstance};
