pub mod config;
pub mod flat_field;
pub mod info;
pub mod ksi;
pub mod log;
pub mod run;

use std::path::Path;

use anyhow::{Context, Result};
use lumacorr_core::io::image_io::{load_image, save_image};
use lumacorr_core::{Correction, WindowSize};

/// Parse a blur window given as `N` or `WxH`.
pub fn parse_window(s: &str) -> std::result::Result<WindowSize, String> {
    let parse = |v: &str| {
        v.trim()
            .parse::<usize>()
            .map_err(|_| format!("invalid window size '{s}' (expected N or WxH)"))
    };
    let (w, h) = match s.split_once(['x', 'X']) {
        Some((w, h)) => (parse(w)?, parse(h)?),
        None => {
            let n = parse(s)?;
            (n, n)
        }
    };
    WindowSize::new(w, h).map_err(|e| e.to_string())
}

/// Load `input`, apply one correction and save the result to `output`.
pub fn correct_file(mut correction: Correction, input: &Path, output: &Path) -> Result<()> {
    let mut buffer =
        load_image(input).with_context(|| format!("Failed to load {}", input.display()))?;
    println!("Loaded {}x{} image", buffer.width(), buffer.height());

    println!("Applying {correction}");
    correction.apply(&mut buffer)?;

    save_image(&buffer, output)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    println!("Saved to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_accepts_square_and_rectangle() {
        assert_eq!(parse_window("7").unwrap(), WindowSize::square(7).unwrap());
        assert_eq!(parse_window("9x3").unwrap(), WindowSize::new(9, 3).unwrap());
    }

    #[test]
    fn window_rejects_zero_and_garbage() {
        assert!(parse_window("0").is_err());
        assert!(parse_window("4xq").is_err());
        assert!(parse_window("").is_err());
    }
}
