use super::model::{ImageBuffer, CHANNELS};

// ---------------------------------------------------------------------------
// Channel inversion
// ---------------------------------------------------------------------------

/// Invert the colour channels of `source` into a new, tightly packed buffer.
///
/// Every pixel `(r, g, b, a)` becomes `(255 - r, 255 - g, 255 - b, a)`.
pub fn invert(source: &ImageBuffer) -> ImageBuffer {
    let mut destination = ImageBuffer::new(source.width(), source.height());
    invert_into(source, &mut destination);
    destination
}

/// Invert `source` into a pre-allocated `destination`.
///
/// # Panics
///
/// If the two buffers differ in width or height. Strides may differ.
pub fn invert_into(source: &ImageBuffer, destination: &mut ImageBuffer) {
    assert!(
        source.same_dimensions(destination),
        "invert_into: source is {}x{} but destination is {}x{}",
        source.width(),
        source.height(),
        destination.width(),
        destination.height(),
    );

    for y in 0..source.height() {
        let src = source.row(y);
        let dst = destination.row_mut(y);
        for (out, px) in dst
            .chunks_exact_mut(CHANNELS)
            .zip(src.chunks_exact(CHANNELS))
        {
            out[0] = 255 - px[0];
            out[1] = 255 - px[1];
            out[2] = 255 - px[2];
            out[3] = px[3];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic buffer touching every channel value at least once.
    fn gradient(width: u32, height: u32) -> ImageBuffer {
        let mut buf = ImageBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let i = (y * width + x) as u8;
                buf.set_pixel(x, y, [i, i.wrapping_mul(3), i.wrapping_mul(7), 255 - i]);
            }
        }
        buf
    }

    #[test]
    fn inverts_single_pixel() {
        let mut buf = ImageBuffer::new(1, 1);
        buf.set_pixel(0, 0, [10, 20, 30, 255]);
        assert_eq!(invert(&buf).pixel(0, 0), [245, 235, 225, 255]);
    }

    #[test]
    fn extremes_map_to_each_other() {
        let mut buf = ImageBuffer::new(2, 1);
        buf.set_pixel(0, 0, [0, 0, 0, 0]);
        buf.set_pixel(1, 0, [255, 255, 255, 255]);
        let out = invert(&buf);
        assert_eq!(out.pixel(0, 0), [255, 255, 255, 0]);
        assert_eq!(out.pixel(1, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn inverting_twice_is_identity() {
        let buf = gradient(16, 16);
        assert_eq!(invert(&invert(&buf)), buf);
    }

    #[test]
    fn alpha_is_untouched() {
        let buf = gradient(16, 16);
        let out = invert(&buf);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(out.pixel(x, y)[3], buf.pixel(x, y)[3]);
            }
        }
    }

    #[test]
    fn handles_padded_source_and_destination() {
        let src = ImageBuffer::from_raw(
            1,
            2,
            8,
            vec![10, 20, 30, 40, 7, 7, 7, 7, 50, 60, 70, 80],
        )
        .unwrap();
        let mut dst = ImageBuffer::from_raw(1, 2, 12, vec![0xAA; 16]).unwrap();
        invert_into(&src, &mut dst);

        assert_eq!(dst.pixel(0, 0), [245, 235, 225, 40]);
        assert_eq!(dst.pixel(0, 1), [205, 195, 185, 80]);
        assert_eq!(dst, invert(&src));
    }

    #[test]
    #[should_panic(expected = "invert_into")]
    fn mismatched_dimensions_panic() {
        let src = ImageBuffer::new(2, 2);
        let mut dst = ImageBuffer::new(2, 3);
        invert_into(&src, &mut dst);
    }
}
