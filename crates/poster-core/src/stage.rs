// File: crates/poster-core/src/stage.rs
// Summary: Render stages run by the controller around the asynchronous circle phase.

use skia_safe as skia;
use tracing::debug;

use crate::geometry::CirclePair;
use crate::text::{TextItem, TextShaper};
use crate::text_layer::{draw_text_layers, plan_text_layers};
use crate::theme::Theme;
use crate::types::CanvasDimensions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StagePhase {
    /// Runs as soon as a render starts, before any map image arrives.
    BeforeCircles,
    /// Runs once both circle slots have settled.
    AfterCircles,
}

/// Everything a stage may read for one render pass.
pub struct Frame<'a> {
    pub dims: CanvasDimensions,
    pub pair: &'a CirclePair,
    pub border_width: f32,
    pub theme: &'a Theme,
    pub items: &'a [TextItem],
    pub shaper: &'a TextShaper,
}

pub trait RenderStage {
    fn id(&self) -> &'static str;
    fn phase(&self) -> StagePhase;
    fn draw(&self, canvas: &skia::Canvas, frame: &Frame<'_>);
}

/// Clears the surface to the theme background.
pub struct BackgroundStage;

impl RenderStage for BackgroundStage {
    fn id(&self) -> &'static str { "background" }
    fn phase(&self) -> StagePhase { StagePhase::BeforeCircles }
    fn draw(&self, canvas: &skia::Canvas, frame: &Frame<'_>) {
        canvas.clear(frame.theme.background);
    }
}

/// Stacked poster text above and below the cluster.
pub struct TextLayerStage;

impl RenderStage for TextLayerStage {
    fn id(&self) -> &'static str { "text_layer" }
    fn phase(&self) -> StagePhase { StagePhase::AfterCircles }
    fn draw(&self, canvas: &skia::Canvas, frame: &Frame<'_>) {
        let placed = plan_text_layers(frame.pair, frame.border_width, frame.items);
        draw_text_layers(canvas, frame.shaper, &placed, frame.theme.text);
    }
}

/// Rectangular poster frame inset from the canvas edge.
pub struct FrameStage {
    pub inset: f32,
    pub width: f32,
}

impl RenderStage for FrameStage {
    fn id(&self) -> &'static str { "frame" }
    fn phase(&self) -> StagePhase { StagePhase::AfterCircles }
    fn draw(&self, canvas: &skia::Canvas, frame: &Frame<'_>) {
        if self.width <= 0.0 {
            return;
        }
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(self.width);
        stroke.set_color(frame.theme.border);
        let half = self.width * 0.5;
        let rect = skia::Rect::from_ltrb(
            self.inset + half,
            self.inset + half,
            frame.dims.width_f32() - self.inset - half,
            frame.dims.height_f32() - self.inset - half,
        );
        canvas.draw_rect(rect, &stroke);
    }
}

/// Ordered stages; within a phase they run in insertion order.
pub struct Pipeline {
    stages: Vec<Box<dyn RenderStage>>,
}

impl Default for Pipeline {
    fn default() -> Self { Self::standard() }
}

impl Pipeline {
    pub fn empty() -> Self { Self { stages: Vec::new() } }

    /// Background first, text after both circles.
    pub fn standard() -> Self {
        let mut p = Self::empty();
        p.push(BackgroundStage);
        p.push(TextLayerStage);
        p
    }

    pub fn push(&mut self, stage: impl RenderStage + 'static) {
        self.stages.push(Box::new(stage));
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.id()).collect()
    }

    /// Run every stage of `phase`; returns how many ran.
    pub fn run(&self, phase: StagePhase, canvas: &skia::Canvas, frame: &Frame<'_>) -> usize {
        let mut ran = 0;
        for stage in self.stages.iter().filter(|s| s.phase() == phase) {
            debug!(stage = stage.id(), ?phase, "running render stage");
            stage.draw(canvas, frame);
            ran += 1;
        }
        ran
    }
}
