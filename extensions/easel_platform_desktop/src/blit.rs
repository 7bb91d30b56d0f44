//! Pixel format conversion for presentation

/// Scale a premultiplied RGBA8 frame onto a `0RGB` u32 surface buffer
///
/// Uses nearest-neighbour sampling. The frame is assumed to sit on black,
/// so premultiplied channels are copied unchanged.
pub fn blit_scaled(
    src: &[u8],
    src_width: u32,
    src_height: u32,
    dst: &mut [u32],
    dst_width: u32,
    dst_height: u32,
) {
    if src_width == 0 || src_height == 0 || dst_width == 0 || dst_height == 0 {
        return;
    }
    let (sw, sh) = (src_width as usize, src_height as usize);
    let (dw, dh) = (dst_width as usize, dst_height as usize);

    for (dy, row) in dst.chunks_exact_mut(dw).take(dh).enumerate() {
        let sy = dy * sh / dh;
        for (dx, out) in row.iter_mut().enumerate() {
            let sx = dx * sw / dw;
            let i = (sy * sw + sx) * 4;
            *out = match src.get(i..i + 3) {
                Some(&[r, g, b]) => pack_rgb(r, g, b),
                _ => 0,
            };
        }
    }
}

fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_size_copies_channels() {
        let src = [255, 0, 0, 255, 0, 128, 255, 255];
        let mut dst = [0u32; 2];
        blit_scaled(&src, 2, 1, &mut dst, 2, 1);
        assert_eq!(dst, [0x00ff0000, 0x000080ff]);
    }

    #[test]
    fn doubling_repeats_each_pixel() {
        let src = [10, 20, 30, 255, 40, 50, 60, 255];
        let mut dst = [0u32; 8];
        blit_scaled(&src, 2, 1, &mut dst, 4, 2);
        let a = pack_rgb(10, 20, 30);
        let b = pack_rgb(40, 50, 60);
        assert_eq!(dst, [a, a, b, b, a, a, b, b]);
    }

    #[test]
    fn short_source_fills_black() {
        let src = [1, 2, 3, 255];
        let mut dst = [7u32; 2];
        blit_scaled(&src, 2, 1, &mut dst, 2, 1);
        assert_eq!(dst, [pack_rgb(1, 2, 3), 0]);
    }
}
