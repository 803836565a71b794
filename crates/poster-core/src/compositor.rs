// File: crates/poster-core/src/compositor.rs
// Summary: Raster composite surface and circle drawing (cover-clipped images, borders, captions).

use anyhow::Result;
use skia_safe as skia;

use crate::geometry::{CircleDescriptor, CirclePair};
use crate::text::{FontSpec, HAlign, TextShaper, VAnchor};
use crate::types::CanvasDimensions;

/// Gap between a circle's border and its caption, in pixels.
pub const CAPTION_GAP: f32 = 8.0;

/// CPU raster surface the combined view is painted on.
pub struct Composite {
    surface: skia::Surface,
    dims: CanvasDimensions,
}

impl Composite {
    pub fn new(dims: CanvasDimensions) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul(dims.as_isize())
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", dims.width, dims.height))?;
        Ok(Self { surface, dims })
    }

    pub fn dims(&self) -> CanvasDimensions { self.dims }

    pub fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    /// Read back RGBA8 (unpremultiplied). Returns `(pixels, width, height, stride)`.
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.dims.width, self.dims.height);
        let info = skia::ImageInfo::new(
            self.dims.as_isize(),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((px, w, h, stride))
    }

    /// RGBA of a single pixel; `None` outside the surface.
    pub fn pixel(&mut self, x: u32, y: u32) -> Result<Option<[u8; 4]>> {
        if x >= self.dims.width || y >= self.dims.height {
            return Ok(None);
        }
        let info = skia::ImageInfo::new((1, 1), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let mut px = [0u8; 4];
        if !self.surface.read_pixels(&info, &mut px, 4, (x as i32, y as i32)) {
            anyhow::bail!("read_pixels failed at ({x}, {y})");
        }
        Ok(Some(px))
    }

    /// Encode the current pixels as PNG in memory.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let (px, w, h, _) = self.to_rgba8()?;
        let img = image::RgbaImage::from_raw(w, h, px)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)?;
        Ok(out.into_inner())
    }
}

/// Uniform "cover" scale: the image fills the circle's bounding square, overflow cropped.
pub fn cover_scale(image_width: f32, image_height: f32, diameter: f32) -> f32 {
    if image_width <= 0.0 || image_height <= 0.0 {
        return 0.0;
    }
    (diameter / image_width).max(diameter / image_height)
}

/// Destination rect of a cover-scaled image centered on the circle.
pub fn cover_rect(image_width: f32, image_height: f32, circle: &CircleDescriptor) -> skia::Rect {
    let scale = cover_scale(image_width, image_height, circle.diameter);
    let w = image_width * scale;
    let h = image_height * scale;
    skia::Rect::from_xywh(circle.center_x - w * 0.5, circle.center_y - h * 0.5, w, h)
}

/// Draw `image` clipped to `circle`. The canvas clip is restored before returning.
/// Returns the scale factor applied to the image.
pub fn draw_image_in_circle(canvas: &skia::Canvas, image: &skia::Image, circle: &CircleDescriptor) -> f32 {
    let (iw, ih) = (image.width() as f32, image.height() as f32);
    let scale = cover_scale(iw, ih, circle.diameter);
    if scale <= 0.0 || circle.radius <= 0.0 {
        return scale;
    }
    let save_count = canvas.save();
    canvas.clip_rrect(skia::RRect::new_oval(circle.bounds()), skia::ClipOp::Intersect, true);
    let paint = skia::Paint::default();
    canvas.draw_image_rect(image, None, cover_rect(iw, ih, circle), &paint);
    canvas.restore_to_count(save_count);
    scale
}

/// Fill the circle with a flat color (placeholder for maps that never arrived).
pub fn fill_circle(canvas: &skia::Canvas, circle: &CircleDescriptor, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    canvas.draw_circle(circle.center(), circle.radius, &paint);
}

/// Stroke the circle's outline. Widths `<= 0` draw nothing.
pub fn draw_circle_border(canvas: &skia::Canvas, circle: &CircleDescriptor, border_width: f32, border_color: skia::Color) {
    if border_width <= 0.0 || !border_width.is_finite() {
        return;
    }
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(border_width);
    stroke.set_color(border_color);
    canvas.draw_circle(circle.center(), circle.radius, &stroke);
}

/// Anchor for a slot's caption: outside the circle on its outer horizontal side,
/// vertically centered. Portrait captions both sit to the right.
pub fn caption_anchor(pair: &CirclePair, slot: usize, border_width: f32) -> (f32, f32, HAlign) {
    let circle = pair.slot(slot);
    let offset = border_width.max(0.0) + CAPTION_GAP;
    if pair.is_landscape() && slot == 0 {
        (circle.left() - offset, circle.center_y, HAlign::Right)
    } else {
        (circle.right() + offset, circle.center_y, HAlign::Left)
    }
}

#[allow(clippy::too_many_arguments)]
pub fn draw_caption(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    pair: &CirclePair,
    slot: usize,
    text: &str,
    border_width: f32,
    size: f32,
    color: skia::Color,
) {
    let (x, y, align) = caption_anchor(pair, slot, border_width);
    let font = FontSpec { family: "Arial, Helvetica, sans-serif", size, color, bold: false, italic: false };
    shaper.draw_anchored(canvas, text, &font, x, y, align, VAnchor::Middle);
}
