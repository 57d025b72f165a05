use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{BLUE, BYTES_PER_PIXEL, GREEN, RED};
use crate::error::{CorrectionError, Result};
use crate::lut::clamp8;

/// Which part of a pixel a correction rewrites. Alpha is never touched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelScope {
    /// Blue, green and red, each corrected independently with the same curve.
    #[default]
    Rgb,
    Red,
    Green,
    Blue,
    /// Only the YCgCo luma; chroma is preserved.
    Luma,
}

/// An intensity a correction operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Blue,
    Green,
    Red,
    Luma,
}

impl Channel {
    fn offset(self) -> Option<usize> {
        match self {
            Channel::Blue => Some(BLUE),
            Channel::Green => Some(GREEN),
            Channel::Red => Some(RED),
            Channel::Luma => None,
        }
    }
}

const RGB_CHANNELS: [Channel; 3] = [Channel::Blue, Channel::Green, Channel::Red];

/// YCgCo luma of a BGRA pixel on the 0..255 scale.
pub fn luma(pixel: &[u8]) -> f64 {
    (pixel[RED] as f64 + 2.0 * pixel[GREEN] as f64 + pixel[BLUE] as f64) / 4.0
}

impl ChannelScope {
    /// The intensities this scope feeds to a correction.
    pub fn channels(self) -> &'static [Channel] {
        match self {
            ChannelScope::Rgb => &RGB_CHANNELS,
            ChannelScope::Red => &[Channel::Red],
            ChannelScope::Green => &[Channel::Green],
            ChannelScope::Blue => &[Channel::Blue],
            ChannelScope::Luma => &[Channel::Luma],
        }
    }

    /// Rewrite the in-scope channels of every pixel in `row` with `f(channel, value)`.
    pub(crate) fn map_row(self, row: &mut [u8], f: impl Fn(Channel, u8) -> u8) {
        for px in row.chunks_exact_mut(BYTES_PER_PIXEL) {
            match self {
                ChannelScope::Luma => {
                    let y = clamp8(luma(px));
                    let shift = f(Channel::Luma, y) as f64 - y as f64;
                    let bgr = px_rgb(px);
                    shift_rgb(px, bgr, shift);
                }
                scope => {
                    for &ch in scope.channels() {
                        if let Some(k) = ch.offset() {
                            px[k] = f(ch, px[k]);
                        }
                    }
                }
            }
        }
    }

    /// Write `f(channel, source, reference)` into the in-scope channels of `dst`.
    ///
    /// The three rows are the same length. Out-of-scope bytes of `dst` keep
    /// their current value.
    pub(crate) fn combine_row(
        self,
        dst: &mut [u8],
        src: &[u8],
        reference: &[u8],
        f: impl Fn(Channel, u8, u8) -> u8,
    ) {
        let pixels = dst
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(src.chunks_exact(BYTES_PER_PIXEL))
            .zip(reference.chunks_exact(BYTES_PER_PIXEL));
        for ((d, s), r) in pixels {
            match self {
                ChannelScope::Luma => {
                    let ys = clamp8(luma(s));
                    let yr = clamp8(luma(r));
                    let shift = f(Channel::Luma, ys, yr) as f64 - ys as f64;
                    shift_rgb(d, px_rgb(s), shift);
                }
                scope => {
                    for &ch in scope.channels() {
                        if let Some(k) = ch.offset() {
                            d[k] = f(ch, s[k], r[k]);
                        }
                    }
                }
            }
        }
    }
}

fn px_rgb(px: &[u8]) -> [u8; 3] {
    [px[BLUE], px[GREEN], px[RED]]
}

/// Moving luma by `shift` with fixed chroma moves B, G and R by the same amount.
fn shift_rgb(dst: &mut [u8], bgr: [u8; 3], shift: f64) {
    dst[BLUE] = clamp8(bgr[0] as f64 + shift);
    dst[GREEN] = clamp8(bgr[1] as f64 + shift);
    dst[RED] = clamp8(bgr[2] as f64 + shift);
}

impl fmt::Display for ChannelScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelScope::Rgb => write!(f, "rgb"),
            ChannelScope::Red => write!(f, "red"),
            ChannelScope::Green => write!(f, "green"),
            ChannelScope::Blue => write!(f, "blue"),
            ChannelScope::Luma => write!(f, "luma"),
        }
    }
}

impl FromStr for ChannelScope {
    type Err = CorrectionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(ChannelScope::Rgb),
            "red" | "r" => Ok(ChannelScope::Red),
            "green" | "g" => Ok(ChannelScope::Green),
            "blue" | "b" => Ok(ChannelScope::Blue),
            "luma" | "y" => Ok(ChannelScope::Luma),
            other => Err(CorrectionError::config(
                "scope",
                format!("unknown channel scope '{other}' (expected rgb, red, green, blue or luma)"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_of_gray_is_gray() {
        assert_eq!(luma(&[100, 100, 100, 255]), 100.0);
    }

    #[test]
    fn single_channel_scope_writes_one_byte() {
        let mut row = [10, 20, 30, 40];
        ChannelScope::Green.map_row(&mut row, |_, v| v + 1);
        assert_eq!(row, [10, 21, 30, 40]);
    }

    #[test]
    fn luma_scope_preserves_chroma_differences() {
        let mut row = [10, 50, 90, 200];
        ChannelScope::Luma.map_row(&mut row, |_, v| v + 10);
        assert_eq!(row, [20, 60, 100, 200]);
    }

    #[test]
    fn parse_round_trips_display() {
        for scope in [
            ChannelScope::Rgb,
            ChannelScope::Red,
            ChannelScope::Green,
            ChannelScope::Blue,
            ChannelScope::Luma,
        ] {
            assert_eq!(scope.to_string().parse::<ChannelScope>().unwrap(), scope);
        }
        assert!("cmyk".parse::<ChannelScope>().is_err());
    }
}
