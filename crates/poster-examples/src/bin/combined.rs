// File: crates/poster-examples/src/bin/combined.rs
// Summary: Renders a combined view from a synthetic star field and street grid; no input files needed.

use anyhow::Result;
use chrono::NaiveDate;
use poster_core::stage::FrameStage;
use poster_core::{
    CanvasDimensions, Composite, FixedFields, FsImageLoader, ImageSource, Pipeline, PosterRequest, PosterSettings,
    RenderController, TextItem, TextPosition,
};
use skia_safe as skia;

/// Deterministic scatter of stars on a dark sky.
fn star_field(size: u32) -> Result<Vec<u8>> {
    let mut comp = Composite::new(CanvasDimensions::new(size, size)?)?;
    let canvas = comp.canvas();
    canvas.clear(skia::Color::from_argb(255, 6, 10, 28));
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    let mut seed: u32 = 0x2545_f491;
    let mut next = || {
        // xorshift32
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        seed as f32 / u32::MAX as f32
    };
    for _ in 0..900 {
        let (x, y) = (next() * size as f32, next() * size as f32);
        let mag = next();
        let level = (150.0 + mag * 105.0) as u8;
        paint.set_color(skia::Color::from_argb(255, level, level, 255));
        canvas.draw_circle((x, y), 0.4 + mag * mag * 2.2, &paint);
    }
    comp.encode_png()
}

/// Street grid with a couple of diagonal avenues.
fn street_grid(size: u32) -> Result<Vec<u8>> {
    let mut comp = Composite::new(CanvasDimensions::new(size, size)?)?;
    let canvas = comp.canvas();
    canvas.clear(skia::Color::from_argb(255, 236, 232, 222));
    let mut road = skia::Paint::default();
    road.set_anti_alias(true);
    road.set_style(skia::paint::Style::Stroke);
    road.set_color(skia::Color::from_argb(255, 60, 60, 66));
    let s = size as f32;
    road.set_stroke_width(2.0);
    let mut p = 0.0;
    while p <= s {
        canvas.draw_line((p, 0.0), (p, s), &road);
        canvas.draw_line((0.0, p), (s, p), &road);
        p += s / 16.0;
    }
    road.set_stroke_width(6.0);
    canvas.draw_line((0.0, s * 0.2), (s, s * 0.9), &road);
    canvas.draw_line((s * 0.1, s), (s * 0.8, 0.0), &road);
    comp.encode_png()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut settings = PosterSettings {
        width: 1800,
        height: 1200,
        radius_percent: 70.0,
        overlap_percent: 20.0,
        ..PosterSettings::default()
    };
    settings.text_items = vec![
        TextItem::new("The night we met", 1, TextPosition::Above).with_font("Georgia, serif", 56.0).with_style(true, false),
        TextItem::new("under these stars, on these streets", 2, TextPosition::Above).with_font("Georgia, serif", 28.0).with_style(false, true),
    ];
    let fixed = FixedFields {
        date: NaiveDate::from_ymd_opt(2021, 6, 19),
        time: None,
        coordinates: Some((38.7223, -9.1393)),
    };
    let template = TextItem::new("", 1, TextPosition::Below).with_font("Georgia, serif", 26.0).with_color("#e8dcb0");
    settings.text_items.extend(fixed.to_items(&template));

    let request = PosterRequest::new(
        settings,
        ImageSource::from(street_grid(1024)?),
        ImageSource::from(star_field(1024)?),
    );

    let mut pipeline = Pipeline::standard();
    pipeline.push(FrameStage { inset: 24.0, width: 3.0 });
    let controller = RenderController::new(FsImageLoader).with_pipeline(pipeline);
    let report = controller.render(&request).await?;
    println!("Slots: {:?} -> {:?}", report.order, report.slots);

    let out = std::path::PathBuf::from("target/out/example_combined.png");
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, controller.snapshot_png()?)?;
    println!("Wrote {}", out.display());
    Ok(())
}
