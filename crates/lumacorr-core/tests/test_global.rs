#[allow(dead_code)]
mod common;

use lumacorr_core::{ChannelScope, GlobalCorrection, LogCorrection, LookupTable};

fn invert() -> LookupTable {
    LookupTable::from_fn(|t| 255.0 * (1.0 - t))
}

#[test]
fn test_identity_lut_leaves_pixels_unchanged() {
    let original = common::gradient(17, 9);
    let mut buf = original.clone();
    let mut corr = GlobalCorrection::with_lut(LookupTable::identity(), ChannelScope::Rgb);
    corr.apply(&mut buf);
    assert_eq!(buf, original);
}

#[test]
fn test_degenerate_log_correction_is_idempotent() {
    let original = common::gradient(32, 16);
    let mut buf = original.clone();
    let mut corr = LogCorrection::new(1.0001, 0.0, ChannelScope::Rgb).unwrap();
    assert!(corr.lut().is_identity());
    corr.apply(&mut buf);
    assert_eq!(buf, original);
}

#[test]
fn test_every_channel_goes_through_lut() {
    let original = common::gradient(20, 20);
    let mut buf = original.clone();
    let mut corr = GlobalCorrection::with_lut(invert(), ChannelScope::Rgb);
    corr.apply(&mut buf);
    for y in 0..20 {
        for x in 0..20 {
            let [b, g, r, a] = original.pixel(x, y);
            assert_eq!(buf.pixel(x, y), [255 - b, 255 - g, 255 - r, a]);
        }
    }
}

#[test]
fn test_parallel_path_maps_every_pixel() {
    // 300x300 is above the row-parallel threshold.
    let original = common::gradient(300, 300);
    let mut buf = original.clone();
    let mut corr = LogCorrection::new(std::f64::consts::E, 0.0, ChannelScope::Rgb).unwrap();
    corr.apply(&mut buf);
    let lut = corr.lut().clone();
    for y in (0..300).step_by(7) {
        for x in (0..300).step_by(11) {
            let src = original.pixel(x, y);
            let out = buf.pixel(x, y);
            for c in 0..3 {
                assert_eq!(out[c], lut.get(src[c]));
            }
            assert_eq!(out[3], src[3]);
        }
    }
}

#[test]
fn test_padding_is_never_written() {
    let mut buf = common::padded_gradient(5, 4, 6);
    let mut corr = GlobalCorrection::with_lut(invert(), ChannelScope::Rgb);
    corr.apply(&mut buf);
    assert!(common::padding_bytes(&buf).iter().all(|&b| b == 0xAB));
}

#[test]
fn test_single_channel_scope() {
    let original = common::gradient(6, 6);
    let mut buf = original.clone();
    let mut corr = GlobalCorrection::with_lut(invert(), ChannelScope::Red);
    corr.apply(&mut buf);
    for y in 0..6 {
        for x in 0..6 {
            let [b, g, r, a] = original.pixel(x, y);
            assert_eq!(buf.pixel(x, y), [b, g, 255 - r, a]);
        }
    }
}

// ---------------------------------------------------------------------------
// Rebuild laziness
// ---------------------------------------------------------------------------

#[test]
fn test_no_rebuild_at_construction() {
    let corr = LogCorrection::new(2.0, 0.0, ChannelScope::Rgb).unwrap();
    assert_eq!(corr.rebuild_count(), 0);
}

#[test]
fn test_rebuild_once_for_unchanged_parameters() {
    let mut buf = common::gray(4, 4, 100);
    let mut corr = LogCorrection::new(2.0, 0.0, ChannelScope::Rgb).unwrap();
    corr.apply(&mut buf);
    assert_eq!(corr.rebuild_count(), 1);
    corr.apply(&mut buf);
    corr.apply(&mut buf);
    assert_eq!(corr.rebuild_count(), 1);
}

#[test]
fn test_rebuild_after_each_parameter_change() {
    let mut buf = common::gray(4, 4, 100);
    let mut corr = LogCorrection::new(2.0, 0.0, ChannelScope::Rgb).unwrap();
    corr.apply(&mut buf);

    corr.set_delta(0.25).unwrap();
    corr.apply(&mut buf);
    assert_eq!(corr.rebuild_count(), 2);

    // Several changes before one apply: a single rebuild.
    corr.set_base(5.0).unwrap();
    corr.set_delta(-0.25).unwrap();
    corr.apply(&mut buf);
    assert_eq!(corr.rebuild_count(), 3);
}

#[test]
fn test_rejected_setter_does_not_dirty_table() {
    let mut buf = common::gray(4, 4, 100);
    let mut corr = LogCorrection::new(2.0, 0.0, ChannelScope::Rgb).unwrap();
    corr.apply(&mut buf);

    assert!(corr.set_base(1.0).is_err());
    assert!(corr.set_base(-3.0).is_err());
    assert!(corr.set_delta(2.0).is_err());
    assert_eq!(corr.base(), 2.0);
    assert_eq!(corr.delta(), 0.0);

    corr.apply(&mut buf);
    assert_eq!(corr.rebuild_count(), 1);
}

#[test]
fn test_scope_change_needs_no_rebuild() {
    let mut buf = common::gray(4, 4, 100);
    let mut corr = LogCorrection::default();
    corr.apply(&mut buf);
    corr.set_scope(ChannelScope::Luma);
    corr.apply(&mut buf);
    assert_eq!(corr.rebuild_count(), 1);
}

#[test]
fn test_set_lut_marks_dirty() {
    let mut buf = common::gray(2, 2, 10);
    let mut corr = GlobalCorrection::with_lut(LookupTable::identity(), ChannelScope::Rgb);
    corr.apply(&mut buf);
    corr.set_lut(invert());
    corr.apply(&mut buf);
    assert_eq!(corr.rebuild_count(), 2);
    assert_eq!(buf.pixel(0, 0), [245, 245, 245, 255]);
}

#[test]
fn test_log_defaults() {
    let corr = LogCorrection::default();
    assert_eq!(corr.base(), 3.14);
    assert_eq!(corr.delta(), 0.5);
    assert_eq!(corr.scope(), ChannelScope::Rgb);
}
