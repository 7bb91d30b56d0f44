use easel_paint::{Color, FontRegistry, Image, PaintContext};

fn context(width: u32, height: u32) -> PaintContext {
    PaintContext::with_fonts(width, height, FontRegistry::empty()).unwrap()
}

/// 4x3 image where every pixel gets a distinct opaque color
fn gradient_image() -> Image {
    let mut img = Image::new(4, 3);
    for v in 0..3 {
        for u in 0..4 {
            img.set_pixel(u, v, u as f32 / 3.0, v as f32 / 2.0, 0.5, 1.0)
                .unwrap();
        }
    }
    img
}

fn assert_close(got: Color, want: Color, at: (u32, u32)) {
    assert!(
        got.max_channel_delta(&want) <= 3.0 / 255.0,
        "pixel {:?}: got {:?}, want {:?}",
        at,
        got,
        want
    );
}

#[test]
fn clear_fills_every_pixel() {
    let mut ctx = context(12, 7);
    ctx.draw_line(0.0, 0.0, 11.0, 6.0);
    ctx.set_clear_color(0.2, 0.4, 0.6, 1.0);
    ctx.clear();

    let want = Color::from_rgba8(51, 102, 153, 255);
    for y in 0..7 {
        for x in 0..12 {
            assert_eq!(ctx.pixel(x, y), Some(want));
        }
    }
}

#[test]
fn clear_ignores_the_transform() {
    let mut ctx = context(6, 6);
    ctx.translate(100.0, 100.0);
    ctx.scale(0.0, 0.0);
    ctx.set_clear_color(0.0, 0.0, 0.0, 1.0);
    ctx.clear();
    assert_eq!(ctx.pixel(0, 0), Some(Color::BLACK));
    assert_eq!(ctx.pixel(5, 5), Some(Color::BLACK));
}

#[test]
fn non_positive_ellipse_radius_leaves_buffer_unchanged() {
    let mut ctx = context(20, 20);
    let before = ctx.data().to_vec();
    ctx.draw_ellipse(10.0, 10.0, 0.0, 5.0);
    ctx.draw_ellipse(10.0, 10.0, 5.0, -1.0);
    assert_eq!(ctx.data(), &before[..]);
}

#[test]
fn circle_uses_brush_inside_and_pen_on_rim() {
    let mut ctx = context(40, 40);
    ctx.set_fill_color(0.0, 1.0, 0.0, 1.0);
    ctx.set_stroke_width(2.0);
    ctx.draw_ellipse(20.0, 20.0, 10.0, 10.0);

    assert_eq!(ctx.pixel(20, 20), Some(Color::new(0.0, 1.0, 0.0, 1.0)));
    let rim = ctx.pixel(20, 10).unwrap();
    assert!(rim.g < 0.2 && rim.r < 0.2, "rim {:?}", rim);
    assert_eq!(ctx.pixel(2, 2), Some(Color::WHITE));
}

#[test]
fn disabled_fill_leaves_interior_untouched() {
    let mut ctx = context(40, 40);
    ctx.disable_fill();
    ctx.draw_rectangle(5.0, 5.0, 30.0, 30.0);
    assert_eq!(ctx.pixel(20, 20), Some(Color::WHITE));
    assert_ne!(ctx.pixel(5, 20), Some(Color::WHITE));
}

#[test]
fn unrotated_image_matches_plain_placement() {
    let img = gradient_image();

    let mut placed = context(20, 20);
    placed.draw_image(&img, 12.0, 11.0, 2.0, 1.0, 0.0);

    let mut plain = context(20, 20);
    plain.blit_image(&img, 10.0, 10.0);

    assert_eq!(placed.data(), plain.data());
    for v in 0..3 {
        for u in 0..4 {
            let want = img.get_pixel(u, v).unwrap();
            let at = (10 + u, 10 + v);
            assert_close(placed.pixel(at.0, at.1).unwrap(), want, at);
        }
    }
}

#[test]
fn quarter_turn_rotates_image_about_pivot() {
    let img = gradient_image();
    let mut ctx = context(20, 20);
    ctx.draw_image(&img, 10.0, 10.0, 0.0, 0.0, 90.0);

    // Image pixel (u, v) covers [u, u+1) x [v, v+1); a clockwise quarter
    // turn about the origin sends it to [-v-1, -v) x [u, u+1).
    for v in 0..3u32 {
        for u in 0..4u32 {
            let want = img.get_pixel(u, v).unwrap();
            let at = (9 - v, 10 + u);
            assert_close(ctx.pixel(at.0, at.1).unwrap(), want, at);
        }
    }
    assert!(ctx.transform().is_identity());
}

#[test]
fn quarter_turn_about_interior_pivot_lands_pivot_on_target() {
    let img = gradient_image();
    let mut ctx = context(20, 20);
    ctx.draw_image(&img, 10.0, 10.0, 2.0, 1.0, 90.0);

    // Pivot (2, 1) sits at (10, 10); pixel (u, v) ends up covering
    // [10-v, 11-v) x [8+u, 9+u).
    for v in 0..3u32 {
        for u in 0..4u32 {
            let want = img.get_pixel(u, v).unwrap();
            let at = (10 - v, 8 + u);
            assert_close(ctx.pixel(at.0, at.1).unwrap(), want, at);
        }
    }
    assert!(ctx.transform().is_identity());
}
