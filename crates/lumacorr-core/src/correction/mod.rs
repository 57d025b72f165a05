pub mod flat_field;
pub mod global;
pub mod ksi;
pub mod local;
pub mod log;

use std::fmt;

pub use flat_field::{FlatFieldCorrection, FlatFieldParams};
pub use global::GlobalCorrection;
pub use ksi::{KsiContrastEnhancement, KsiParams};
pub use local::{ChannelMeans, LocalCorrection, LocalStrategy};
pub use log::{LogCorrection, LogParams};

use crate::buffer::PixelBuffer;
use crate::error::Result;

/// Any of the built-in corrections, ready to apply.
#[derive(Clone, Debug)]
pub enum Correction {
    Log(LogCorrection),
    FlatField(FlatFieldCorrection),
    Ksi(KsiContrastEnhancement),
}

impl Correction {
    /// Apply in place. Local corrections blur a snapshot of `buffer`.
    pub fn apply(&mut self, buffer: &mut PixelBuffer) -> Result<()> {
        match self {
            Correction::Log(c) => {
                c.apply(buffer);
                Ok(())
            }
            Correction::FlatField(c) => c.apply_in_place(buffer),
            Correction::Ksi(c) => c.apply_in_place(buffer),
        }
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Correction::Log(c) => write!(
                f,
                "Logarithmic (base {}, delta {}, {})",
                c.base(),
                c.delta(),
                c.scope()
            ),
            Correction::FlatField(c) => {
                write!(f, "Flat-field (window {}, {})", c.window(), c.scope())
            }
            Correction::Ksi(c) => write!(
                f,
                "KSI contrast (window {}, a {}, b {}, {})",
                c.window(),
                c.a(),
                c.b(),
                c.scope()
            ),
        }
    }
}
