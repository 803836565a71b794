// File: crates/poster-core/tests/snapshot.rs
// Purpose: Golden snapshots of combined views with bless flow.
// Behavior:
// - Renders deterministic posters (no text, no captions) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and checks stripe, background and border pixels directly.

use poster_core::layout::{calculate_landscape_circles, calculate_portrait_circles};
use poster_core::{CirclePair, FsImageLoader, ImageSource, Orientation, PosterRequest, PosterSettings, RenderController};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8], pair: &CirclePair) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
        check_key_pixels(bytes, pair);
    }
}

/// Vertical stripes so cover scaling and clipping show up in the pixels.
fn striped_png(a: [u8; 4], b: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(64, 48, |x, _| image::Rgba(if (x / 8) % 2 == 0 { a } else { b }));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).expect("encode png");
    out.into_inner()
}

const STREET: ([u8; 4], [u8; 4]) = ([230, 230, 220, 255], [60, 60, 70, 255]);
const STAR: ([u8; 4], [u8; 4]) = ([20, 30, 80, 255], [250, 250, 200, 255]);
const MIDNIGHT_BG: [u8; 4] = [12, 18, 38, 255];
const MIDNIGHT_BORDER: [u8; 4] = [220, 200, 140, 255];

/// Stripe 4 (even) sits just right of each circle's center and stripe 3 (odd) just left,
/// 4 source pixels in at cover scale `diameter / 48`.
fn check_key_pixels(bytes: &[u8], pair: &CirclePair) {
    let img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
    let at = |x: f32, y: f32| img.get_pixel(x as u32, y as u32).0;
    for (slot, (even, odd)) in [STREET, STAR].into_iter().enumerate() {
        let c = pair.slot(slot);
        let step = 4.0 * c.diameter / 48.0;
        assert_eq!(at(c.center_x + step, c.center_y), even, "slot {slot} right of center");
        assert_eq!(at(c.center_x - step, c.center_y), odd, "slot {slot} left of center");
    }
    assert_eq!(img.get_pixel(0, 0).0, MIDNIGHT_BG, "background corner");
    let first = pair.first();
    let border = if pair.is_landscape() {
        at(first.left().floor(), first.center_y)
    } else {
        at(first.center_x, first.top().floor())
    };
    assert_eq!(border, MIDNIGHT_BORDER, "outer border of the first circle");
}

async fn render_bytes(orientation: Orientation) -> Vec<u8> {
    let settings = PosterSettings {
        width: 320,
        height: 240,
        orientation,
        radius_percent: 70.0,
        overlap_percent: 25.0,
        border_width: 3.0,
        captions: false,
        ..PosterSettings::default()
    };
    let req = PosterRequest::new(
        settings,
        ImageSource::from(striped_png(STREET.0, STREET.1)),
        ImageSource::from(striped_png(STAR.0, STAR.1)),
    );
    let ctl = RenderController::new(FsImageLoader);
    ctl.render(&req).await.expect("render");
    ctl.snapshot_png().expect("png bytes")
}

#[tokio::test]
async fn golden_landscape() {
    let bytes = render_bytes(Orientation::Landscape).await;
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/landscape.png");
    write_or_compare(&path, &bytes, &calculate_landscape_circles(320.0, 240.0, 70.0, 25.0));
}

#[tokio::test]
async fn golden_portrait() {
    let bytes = render_bytes(Orientation::Portrait).await;
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/portrait.png");
    write_or_compare(&path, &bytes, &calculate_portrait_circles(320.0, 240.0, 70.0, 25.0));
}
