#[allow(dead_code)]
mod common;

use lumacorr_core::{CorrectionError, PixelBuffer};

#[test]
fn test_new_rejects_zero_dimensions() {
    assert!(matches!(
        PixelBuffer::new(0, 2, 8, vec![0; 16]),
        Err(CorrectionError::InvalidBuffer(_))
    ));
    assert!(matches!(
        PixelBuffer::new(2, 0, 8, vec![]),
        Err(CorrectionError::InvalidBuffer(_))
    ));
}

#[test]
fn test_new_rejects_short_stride() {
    assert!(PixelBuffer::new(3, 1, 11, vec![0; 12]).is_err());
}

#[test]
fn test_new_rejects_short_data() {
    assert!(PixelBuffer::new(2, 2, 8, vec![0; 15]).is_err());
}

#[test]
fn test_new_accepts_extra_trailing_bytes() {
    let buf = PixelBuffer::new(2, 2, 8, vec![0; 20]).unwrap();
    assert_eq!(buf.dimensions(), (2, 2));
}

#[test]
fn test_pixel_roundtrip_with_padding() {
    let mut buf = common::padded_gradient(3, 2, 4);
    buf.set_pixel(2, 1, [1, 2, 3, 4]);
    assert_eq!(buf.pixel(2, 1), [1, 2, 3, 4]);
    assert!(common::padding_bytes(&buf).iter().all(|&b| b == 0xAB));
}

#[test]
fn test_filled_repeats_pixel() {
    let buf = PixelBuffer::filled(3, 2, [9, 8, 7, 6]).unwrap();
    assert_eq!(buf.stride(), 12);
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(buf.pixel(x, y), [9, 8, 7, 6]);
        }
    }
}

#[test]
fn test_row_excludes_padding() {
    let buf = common::padded_gradient(2, 3, 5);
    assert_eq!(buf.row(1).len(), 8);
    assert_eq!(buf.stride(), 13);
}

#[test]
fn test_oversized_dimensions_are_errors() {
    assert!(matches!(
        PixelBuffer::new(usize::MAX, 1, usize::MAX, vec![]),
        Err(CorrectionError::InvalidBuffer(_))
    ));
    assert!(matches!(
        PixelBuffer::new(1, usize::MAX, 8, vec![0; 8]),
        Err(CorrectionError::InvalidBuffer(_))
    ));
    assert!(matches!(
        PixelBuffer::from_bgra(usize::MAX / 2, 1, vec![]),
        Err(CorrectionError::InvalidBuffer(_))
    ));
    assert!(matches!(
        PixelBuffer::filled(usize::MAX / 8, 16, [0; 4]),
        Err(CorrectionError::InvalidBuffer(_))
    ));
}
