// File: crates/poster-core/tests/compositor.rs
// Purpose: Circle clipping, cover scaling, borders and surface readback.

use poster_core::compositor::{caption_anchor, cover_rect, cover_scale, draw_circle_border, draw_image_in_circle, fill_circle, Composite};
use poster_core::geometry::CircleDescriptor;
use poster_core::layout::{calculate_landscape_circles, calculate_portrait_circles};
use poster_core::text::HAlign;
use poster_core::CanvasDimensions;
use skia_safe as skia;

fn bg() -> skia::Color { skia::Color::from_argb(255, 10, 20, 30) }
fn red() -> skia::Color { skia::Color::from_argb(255, 220, 30, 30) }

fn solid_image(w: i32, h: i32, color: skia::Color) -> skia::Image {
    let mut s = skia::surfaces::raster_n32_premul((w, h)).expect("image surface");
    s.canvas().clear(color);
    s.image_snapshot()
}

fn rgba(c: skia::Color) -> [u8; 4] {
    [c.r(), c.g(), c.b(), c.a()]
}

fn composite(w: u32, h: u32) -> Composite {
    let mut c = Composite::new(CanvasDimensions::new(w, h).expect("dims")).expect("composite");
    c.canvas().clear(bg());
    c
}

#[test]
fn square_image_at_diameter_is_unscaled() {
    let mut comp = composite(200, 200);
    let circle = CircleDescriptor::new(100.0, 100.0, 50.0);
    let img = solid_image(100, 100, red());
    let scale = draw_image_in_circle(comp.canvas(), &img, &circle);
    assert_eq!(scale, 1.0);
}

#[test]
fn cover_scale_fills_without_letterbox() {
    // Wide image: height governs.
    assert_eq!(cover_scale(200.0, 100.0, 100.0), 1.0);
    // Tall image: width governs.
    assert_eq!(cover_scale(50.0, 400.0, 100.0), 2.0);
    assert_eq!(cover_scale(0.0, 10.0, 100.0), 0.0);

    let circle = CircleDescriptor::new(100.0, 100.0, 50.0);
    let r = cover_rect(200.0, 100.0, &circle);
    assert_eq!(r.width(), 200.0);
    assert_eq!(r.height(), 100.0);
    assert_eq!(r.center_x(), 100.0);
    assert_eq!(r.center_y(), 100.0);
    assert!(r.width() >= circle.diameter && r.height() >= circle.diameter);
}

#[test]
fn image_is_clipped_to_circle() {
    let mut comp = composite(200, 200);
    let circle = CircleDescriptor::new(100.0, 100.0, 50.0);
    let img = solid_image(300, 120, red());
    draw_image_in_circle(comp.canvas(), &img, &circle);

    assert_eq!(comp.pixel(100, 100).expect("read"), Some(rgba(red())));
    // Inside the bounding square, outside the circle.
    assert_eq!(comp.pixel(53, 53).expect("read"), Some(rgba(bg())));
    // Outside the bounding square entirely.
    assert_eq!(comp.pixel(10, 100).expect("read"), Some(rgba(bg())));
}

#[test]
fn clip_is_restored_after_drawing() {
    let mut comp = composite(120, 120);
    let circle = CircleDescriptor::new(60.0, 60.0, 20.0);
    let img = solid_image(40, 40, red());
    let before = comp.canvas().save_count();
    draw_image_in_circle(comp.canvas(), &img, &circle);
    assert_eq!(comp.canvas().save_count(), before);

    let green = skia::Color::from_argb(255, 0, 200, 0);
    let mut paint = skia::Paint::default();
    paint.set_color(green);
    comp.canvas().draw_rect(skia::Rect::from_xywh(0.0, 0.0, 10.0, 10.0), &paint);
    assert_eq!(comp.pixel(2, 2).expect("read"), Some(rgba(green)));
}

#[test]
fn border_strokes_the_circle_edge() {
    let mut comp = composite(200, 200);
    let circle = CircleDescriptor::new(100.0, 100.0, 50.0);
    let gold = skia::Color::from_argb(255, 230, 200, 60);
    draw_circle_border(comp.canvas(), &circle, 6.0, gold);
    assert_eq!(comp.pixel(150, 100).expect("read"), Some(rgba(gold)));
    assert_eq!(comp.pixel(100, 100).expect("read"), Some(rgba(bg())));
}

#[test]
fn zero_border_draws_nothing() {
    let mut comp = composite(200, 200);
    let circle = CircleDescriptor::new(100.0, 100.0, 50.0);
    draw_circle_border(comp.canvas(), &circle, 0.0, red());
    assert_eq!(comp.pixel(150, 100).expect("read"), Some(rgba(bg())));
}

#[test]
fn placeholder_fill_covers_circle() {
    let mut comp = composite(200, 200);
    let circle = CircleDescriptor::new(100.0, 100.0, 50.0);
    fill_circle(comp.canvas(), &circle, red());
    assert_eq!(comp.pixel(100, 100).expect("read"), Some(rgba(red())));
    assert_eq!(comp.pixel(53, 53).expect("read"), Some(rgba(bg())));
}

#[test]
fn captions_sit_outside_their_circle() {
    let pair = calculate_landscape_circles(1000.0, 800.0, 60.0, 30.0);
    let (x0, y0, a0) = caption_anchor(&pair, 0, 4.0);
    assert_eq!(a0, HAlign::Right);
    assert!(x0 < pair.first().left());
    assert_eq!(y0, pair.first().center_y);
    let (x1, _, a1) = caption_anchor(&pair, 1, 4.0);
    assert_eq!(a1, HAlign::Left);
    assert!(x1 > pair.second().right());

    let pair = calculate_portrait_circles(800.0, 1000.0, 60.0, 30.0);
    for slot in 0..2 {
        let (x, y, a) = caption_anchor(&pair, slot, 4.0);
        assert_eq!(a, HAlign::Left);
        assert!(x > pair.slot(slot).right());
        assert_eq!(y, pair.slot(slot).center_y);
    }
}

#[test]
fn readback_and_png_encoding() {
    let mut comp = composite(64, 32);
    let (px, w, h, stride) = comp.to_rgba8().expect("rgba");
    assert_eq!((w, h), (64, 32));
    assert_eq!(stride, 64 * 4);
    assert_eq!(px.len(), stride * 32);
    assert_eq!(&px[0..4], &rgba(bg()));
    assert_eq!(comp.pixel(64, 0).expect("read"), None);

    let png = comp.encode_png().expect("png");
    assert!(png.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let decoded = image::load_from_memory(&png).expect("decode").to_rgba8();
    assert_eq!(decoded.dimensions(), (64, 32));
}

#[test]
fn single_pixel_reads_match_full_readback() {
    let mut comp = composite(40, 30);
    let mut paint = skia::Paint::default();
    paint.set_color(red());
    comp.canvas().draw_rect(skia::Rect::from_xywh(20.0, 10.0, 20.0, 20.0), &paint);
    let (px, _, _, stride) = comp.to_rgba8().expect("rgba");
    for (x, y) in [(0u32, 0u32), (19, 9), (20, 10), (39, 29), (5, 25)] {
        let i = y as usize * stride + x as usize * 4;
        assert_eq!(comp.pixel(x, y).expect("read"), Some([px[i], px[i + 1], px[i + 2], px[i + 3]]), "({x}, {y})");
    }
    assert_eq!(comp.pixel(20, 10).expect("read"), Some(rgba(red())));
    assert_eq!(comp.pixel(0, 30).expect("read"), None);
}
