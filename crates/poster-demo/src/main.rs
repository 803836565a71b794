// File: crates/poster-demo/src/main.rs
// Summary: Renders a combined star/street view from two map images and writes a PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use poster_core::{
    FixedFields, FsImageLoader, ImageSource, Orientation, PosterRequest, PosterSettings, RenderController,
    RenderOutcome, SlotStatus, TextItem, TextPosition,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a combined star map / street map poster")]
struct Args {
    /// Street map image (PNG or JPEG)
    #[arg(long)]
    street: PathBuf,
    /// Star map image (PNG or JPEG)
    #[arg(long)]
    star: PathBuf,
    /// JSON settings file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output PNG path
    #[arg(long, short, default_value = "target/out/poster.png")]
    out: PathBuf,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
    /// landscape | portrait
    #[arg(long)]
    orientation: Option<Orientation>,
    /// Circle size, percent of the usable short axis (1-100)
    #[arg(long)]
    radius: Option<f32>,
    /// Center pull-in, percent (0-100)
    #[arg(long)]
    overlap: Option<f32>,
    /// Put the star map first
    #[arg(long)]
    swap: bool,
    #[arg(long)]
    theme: Option<String>,
    /// CSV of text items: text,font,size,color,bold,italic,order,position
    #[arg(long)]
    text_csv: Option<PathBuf>,
    /// Fixed date line (YYYY-MM-DD)
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Fixed time appended to the date line (HH:MM)
    #[arg(long, requires = "date")]
    time: Option<String>,
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Per-image load timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let settings = build_settings(&args)?;
    info!(
        width = settings.width,
        height = settings.height,
        orientation = ?settings.orientation,
        items = settings.text_items.len(),
        "settings resolved"
    );

    let request = PosterRequest::new(settings, ImageSource::Path(args.street.clone()), ImageSource::Path(args.star.clone()));
    let controller = RenderController::new(FsImageLoader);
    let report = controller.render(&request).await?;
    if report.outcome != RenderOutcome::Complete {
        anyhow::bail!("render was superseded");
    }
    for (kind, status) in report.order.iter().zip(report.slots.iter()) {
        if *status != SlotStatus::Drawn {
            warn!(map = kind.caption(), ?status, "map not drawn; exporting partial poster");
        }
    }

    let png = controller.snapshot_png()?;
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&args.out, &png).with_context(|| format!("writing {}", args.out.display()))?;
    println!("Wrote {}", args.out.display());
    Ok(())
}

fn build_settings(args: &Args) -> Result<PosterSettings> {
    let mut s = match &args.config {
        Some(path) => PosterSettings::from_path(path).with_context(|| format!("loading {}", path.display()))?,
        None => PosterSettings::default(),
    };
    if let Some(w) = args.width { s.width = w; }
    if let Some(h) = args.height { s.height = h; }
    if let Some(o) = args.orientation { s.orientation = o; }
    if let Some(r) = args.radius { s.radius_percent = r; }
    if let Some(o) = args.overlap { s.overlap_percent = o; }
    if let Some(t) = &args.theme { s.theme = t.clone(); }
    if let Some(ms) = args.timeout_ms { s.load_timeout_ms = ms; }
    if args.swap { s.swap_order = true; }

    if let Some(path) = &args.text_csv {
        let items = load_text_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        println!("Loaded {} text items", items.len());
        s.text_items.extend(items);
    }

    let time = match &args.time {
        Some(raw) => Some(NaiveTime::parse_from_str(raw, "%H:%M").with_context(|| format!("bad --time '{raw}'"))?),
        None => None,
    };
    let fixed = FixedFields {
        date: args.date,
        time,
        coordinates: args.lat.zip(args.lon),
    };
    // Fixed lines go below everything the user typed.
    let next_order = s.text_items.iter().map(|t| t.order).max().map_or(0, |m| m + 1);
    let template = TextItem::new("", next_order, TextPosition::Below).with_font("Georgia, serif", 22.0);
    s.text_items.extend(fixed.to_items(&template));

    s.validate()?;
    Ok(s)
}

/// Load text items from a CSV with a header row. Column names are matched case-insensitively;
/// rows without text are skipped.
fn load_text_csv(path: &Path) -> Result<Vec<TextItem>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.iter().any(|want| h == want))
    };
    let i_text = idx(&["text", "line", "label"]);
    let i_font = idx(&["font", "font_family", "family"]);
    let i_size = idx(&["size", "font_size"]);
    let i_color = idx(&["color", "colour"]);
    let i_bold = idx(&["bold"]);
    let i_italic = idx(&["italic"]);
    let i_order = idx(&["order"]);
    let i_position = idx(&["position", "placement"]);

    if i_text.is_none() {
        anyhow::bail!("no text column in {}", path.display());
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let get = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).filter(|s| !s.is_empty());
        let Some(text) = get(i_text) else { continue };

        let mut item = TextItem { text: text.to_string(), order: row as i32, ..TextItem::default() };
        if let Some(f) = get(i_font) { item.font_family = f.to_string(); }
        if let Some(v) = get(i_size).and_then(|s| s.parse::<f32>().ok()) { item.font_size = v; }
        if let Some(c) = get(i_color) { item.color = c.to_string(); }
        if let Some(b) = get(i_bold) { item.bold = parse_flag(b); }
        if let Some(b) = get(i_italic) { item.italic = parse_flag(b); }
        if let Some(o) = get(i_order).and_then(|s| s.parse::<i32>().ok()) { item.order = o; }
        if let Some(p) = get(i_position) {
            item.position = p.parse().map_err(anyhow::Error::msg).with_context(|| format!("row {}", row + 1))?;
        }
        out.push(item);
    }
    Ok(out)
}

fn parse_flag(s: &str) -> bool {
    matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "y" | "x")
}
