/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Bytes per pixel in every buffer (B, G, R, A).
pub const BYTES_PER_PIXEL: usize = 4;

/// Byte offset of the blue channel inside a pixel.
pub const BLUE: usize = 0;

/// Byte offset of the green channel inside a pixel.
pub const GREEN: usize = 1;

/// Byte offset of the red channel inside a pixel.
pub const RED: usize = 2;

/// Byte offset of the alpha channel inside a pixel. Never written by a correction.
pub const ALPHA: usize = 3;

/// Number of entries in a lookup table (one per 8-bit intensity).
pub const LUT_SIZE: usize = 256;

/// Largest 8-bit intensity as a float, used to normalize to [0, 1].
pub const MAX_INTENSITY: f64 = 255.0;

/// Scale applied to the brightness shift (`delta`, `b`) of a LUT formula.
pub const SHIFT_SCALE: f64 = 128.0;

/// Gain of the logistic curve used by the KSI contrast table.
pub const KSI_LOGISTIC_GAIN: f64 = 6.0;

/// Default logarithm base of the logarithmic correction.
pub const DEFAULT_LOG_BASE: f64 = 3.14;

/// Default brightness shift of the logarithmic correction.
pub const DEFAULT_LOG_DELTA: f64 = 0.5;

/// Default blur window side for local corrections.
pub const DEFAULT_WINDOW: usize = 15;

/// Default contrast of the KSI enhancement.
pub const DEFAULT_KSI_A: f64 = 0.75;

/// Default offset of the KSI enhancement.
pub const DEFAULT_KSI_B: f64 = 0.05;
