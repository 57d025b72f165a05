use lumacorr_core::PixelBuffer;

/// Uniform gray image with opaque alpha.
pub fn gray(width: usize, height: usize, value: u8) -> PixelBuffer {
    PixelBuffer::filled(width, height, [value, value, value, 255]).unwrap()
}

/// Each channel varies with position so that no two neighbouring pixels match.
pub fn gradient(width: usize, height: usize) -> PixelBuffer {
    let mut buf = gray(width, height, 0);
    for y in 0..height {
        for x in 0..width {
            let b = ((x * 7 + y * 3) % 256) as u8;
            let g = ((x * 5 + y * 11) % 256) as u8;
            let r = ((x * 13 + y * 2) % 256) as u8;
            buf.set_pixel(x, y, [b, g, r, 200]);
        }
    }
    buf
}

/// Same pixels as `gradient`, stored with `extra` padding bytes per row filled with 0xAB.
pub fn padded_gradient(width: usize, height: usize, extra: usize) -> PixelBuffer {
    let packed = gradient(width, height);
    let stride = width * 4 + extra;
    let mut data = vec![0xABu8; stride * height];
    for y in 0..height {
        data[y * stride..y * stride + width * 4].copy_from_slice(packed.row(y));
    }
    PixelBuffer::new(width, height, stride, data).unwrap()
}

/// Padding bytes of every row.
pub fn padding_bytes(buf: &PixelBuffer) -> Vec<u8> {
    let row_bytes = buf.width() * 4;
    (0..buf.height())
        .flat_map(|y| {
            let start = y * buf.stride();
            buf.as_bytes()[start + row_bytes..start + buf.stride()].to_vec()
        })
        .collect()
}

pub fn is_non_decreasing(values: &[u8]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
