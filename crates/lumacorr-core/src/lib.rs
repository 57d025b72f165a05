//! Pixel-wise and local intensity corrections for 8-bit BGRA buffers.
//!
//! Global corrections map every channel through a lazily rebuilt lookup
//! table; local corrections combine each pixel with a blurred reference.

pub mod blur;
pub mod buffer;
pub mod consts;
pub mod correction;
pub mod error;
pub mod io;
pub mod lut;
pub mod pipeline;
pub mod scope;

pub use blur::{BlurKernel, BoxBlur, WindowSize};
pub use buffer::PixelBuffer;
pub use correction::{
    Correction, FlatFieldCorrection, GlobalCorrection, KsiContrastEnhancement, LocalCorrection,
    LogCorrection,
};
pub use error::{CorrectionError, Result};
pub use lut::{LookupTable, LutCache, LutStrategy};
pub use scope::ChannelScope;
