//! Frame FX - per-frame visual effects on BGR pixel buffers.
//!
//! Brightness, tone-curve contrast, saturation and a coherent-noise warp,
//! applied in place to a caller-owned frame. Frames are independent, so a
//! caller can process many of them in parallel (see [`Pipeline::process_frames`]).

pub mod color;
pub mod effect;
pub mod error;
pub mod frame;
pub mod image_io;
pub mod noise;
pub mod params;
pub mod pipeline;

pub use error::{FxError, FxResult};
pub use frame::{Frame, OwnedFrame};
pub use params::Parameters;
pub use pipeline::{Pipeline, apply_all, apply_bytes};
