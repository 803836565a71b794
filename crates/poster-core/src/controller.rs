// File: crates/poster-core/src/controller.rs
// Summary: Render controller: generation tokens, concurrent map loads, ordered stage execution.
//
// Each `render` call takes the next generation. Map loads for both circles run concurrently
// and each circle is painted as soon as its own load settles. A load that settles after a
// newer render has started is discarded and the older call reports `Superseded`.

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use skia_safe as skia;
use tracing::{debug, info};

use crate::compositor::{draw_caption, draw_circle_border, draw_image_in_circle, fill_circle, Composite};
use crate::config::PosterSettings;
use crate::geometry::CirclePair;
use crate::loader::{load_map, ImageLoader, ImageSource, MapLoad};
use crate::stage::{Frame, Pipeline, StagePhase};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::MapKind;

/// Settings plus the two resolved map sources.
#[derive(Clone, Debug)]
pub struct PosterRequest {
    pub settings: PosterSettings,
    pub street: ImageSource,
    pub star: ImageSource,
}

impl PosterRequest {
    pub fn new(settings: PosterSettings, street: ImageSource, star: ImageSource) -> Self {
        Self { settings, street, star }
    }

    pub fn source(&self, kind: MapKind) -> &ImageSource {
        match kind {
            MapKind::Street => &self.street,
            MapKind::Star => &self.star,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotStatus {
    /// Load has not settled (only seen on superseded renders).
    Pending,
    Drawn,
    /// Load timed out; the circle holds a flat placeholder.
    Placeholder,
    /// Load or decode failed; the circle shows background and border only.
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    Complete,
    /// A newer render started before this one finished; its late results were dropped.
    Superseded,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderReport {
    pub generation: u64,
    pub outcome: RenderOutcome,
    pub pair: CirclePair,
    /// Map shown in each slot (first = left/top).
    pub order: [MapKind; 2],
    pub slots: [SlotStatus; 2],
}

pub struct RenderController<L> {
    loader: L,
    pipeline: Pipeline,
    shaper: TextShaper,
    generation: AtomicU64,
    composite: RefCell<Option<Composite>>,
}

impl<L: ImageLoader> RenderController<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            pipeline: Pipeline::standard(),
            shaper: TextShaper::new(),
            generation: AtomicU64::new(0),
            composite: RefCell::new(None),
        }
    }

    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Generation of the most recently started render (0 before the first).
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Run `f` against the surface, if any render has created one.
    pub fn with_composite<R>(&self, f: impl FnOnce(&mut Composite) -> R) -> Option<R> {
        self.composite.borrow_mut().as_mut().map(f)
    }

    pub fn snapshot_png(&self) -> Result<Vec<u8>> {
        self.with_composite(|c| c.encode_png())
            .unwrap_or_else(|| Err(anyhow::anyhow!("nothing rendered yet")))
    }

    pub fn snapshot_rgba8(&self) -> Result<(Vec<u8>, u32, u32, usize)> {
        self.with_composite(|c| c.to_rgba8())
            .unwrap_or_else(|| Err(anyhow::anyhow!("nothing rendered yet")))
    }

    pub async fn render(&self, request: &PosterRequest) -> Result<RenderReport> {
        let settings = &request.settings;
        settings.validate()?;
        let layout = settings.request()?;
        let theme = settings.theme()?;
        let pair = layout.circles();
        let order = MapKind::source_order(settings.swap_order);
        let generation = self.begin();
        debug!(generation, ?order, "render started");

        let frame = Frame {
            dims: layout.dims,
            pair: &pair,
            border_width: settings.border_width,
            theme: &theme,
            items: &settings.text_items,
            shaper: &self.shaper,
        };

        {
            let mut slot = self.composite.borrow_mut();
            if slot.as_ref().map(Composite::dims) != Some(layout.dims) {
                *slot = Some(Composite::new(layout.dims)?);
            }
            if let Some(composite) = slot.as_mut() {
                self.pipeline.run(StagePhase::BeforeCircles, composite.canvas(), &frame);
            }
        }

        let timeout = settings.load_timeout();
        let first = load_map(&self.loader, request.source(order[0]), timeout);
        let second = load_map(&self.loader, request.source(order[1]), timeout);
        tokio::pin!(first, second);

        let mut slots = [SlotStatus::Pending; 2];
        let mut loads: [Option<MapLoad>; 2] = [None, None];
        let report = |outcome: RenderOutcome, slots: [SlotStatus; 2]| RenderReport { generation, outcome, pair, order, slots };

        while slots.contains(&SlotStatus::Pending) {
            let (index, load) = tokio::select! {
                load = &mut first, if slots[0] == SlotStatus::Pending => (0usize, load),
                load = &mut second, if slots[1] == SlotStatus::Pending => (1usize, load),
            };
            if !self.is_current(generation) {
                debug!(generation, current = self.generation(), slot = index, "discarding stale map result");
                return Ok(report(RenderOutcome::Superseded, slots));
            }

            let mut guard = self.composite.borrow_mut();
            let Some(composite) = guard.as_mut() else {
                anyhow::bail!("render surface disappeared mid-render");
            };
            let canvas = composite.canvas();
            slots[index] = paint_slot(canvas, &self.shaper, settings, &theme, &pair, index, order[index], &load);
            // The first slot sits below the second; repaint the second if it landed earlier.
            if index == 0 {
                if let Some(later) = &loads[1] {
                    paint_slot(canvas, &self.shaper, settings, &theme, &pair, 1, order[1], later);
                }
            }
            loads[index] = Some(load);
        }

        {
            let mut slot = self.composite.borrow_mut();
            if let Some(composite) = slot.as_mut() {
                self.pipeline.run(StagePhase::AfterCircles, composite.canvas(), &frame);
            }
        }

        info!(generation, ?slots, "combined view rendered");
        Ok(report(RenderOutcome::Complete, slots))
    }
}

#[allow(clippy::too_many_arguments)]
fn paint_slot(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    settings: &PosterSettings,
    theme: &Theme,
    pair: &CirclePair,
    index: usize,
    kind: MapKind,
    load: &MapLoad,
) -> SlotStatus {
    let circle = pair.slot(index);
    let status = match load {
        MapLoad::Ready(image) => {
            draw_image_in_circle(canvas, image, circle);
            SlotStatus::Drawn
        }
        MapLoad::TimedOut => {
            fill_circle(canvas, circle, theme.placeholder);
            SlotStatus::Placeholder
        }
        MapLoad::Failed(_) => SlotStatus::Failed,
    };
    draw_circle_border(canvas, circle, settings.border_width, theme.border);
    if settings.captions {
        draw_caption(canvas, shaper, pair, index, kind.caption(), settings.border_width, settings.caption_size, theme.caption);
    }
    status
}
