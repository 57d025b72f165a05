#[allow(dead_code)]
mod common;

use lumacorr_core::io::image_io::{from_rgba, load_image, save_image, save_png, to_rgba};
use lumacorr_core::PixelBuffer;

#[test]
fn test_png_roundtrip_preserves_bgra_order() {
    let buf = common::gradient(7, 5);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.png");

    save_png(&buf, &path).unwrap();
    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded, buf);
}

#[test]
fn test_save_padded_buffer() {
    let padded = common::padded_gradient(4, 3, 8);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("padded.tiff");

    save_image(&padded, &path).unwrap();
    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded.stride(), 16);
    for y in 0..3 {
        assert_eq!(loaded.row(y), padded.row(y));
    }
}

#[test]
fn test_rgba_conversion_swaps_red_and_blue() {
    let buf = PixelBuffer::filled(1, 1, [1, 2, 3, 4]).unwrap();
    let rgba = to_rgba(&buf).unwrap();
    assert_eq!(rgba.get_pixel(0, 0).0, [3, 2, 1, 4]);
    assert_eq!(from_rgba(&rgba).unwrap(), buf);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_image(&dir.path().join("nope.png")).is_err());
}

#[test]
fn test_upper_case_tiff_extension_writes_tiff() {
    let buf = common::gradient(3, 3);
    let dir = tempfile::tempdir().unwrap();
    for name in ["OUT.TIF", "Out.Tiff"] {
        let path = dir.path().join(name);
        save_image(&buf, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        // TIFF files open with a little- or big-endian byte order mark.
        assert!(
            bytes.starts_with(b"II*\0") || bytes.starts_with(b"MM\0*"),
            "{name} is not a TIFF"
        );
        assert_eq!(load_image(&path).unwrap(), buf);
    }
}
