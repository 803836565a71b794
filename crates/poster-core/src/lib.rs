// File: crates/poster-core/src/lib.rs
// Summary: Core library entry point; exports circle layout, compositing, text layers and render control.

pub mod types;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod color;
pub mod theme;
pub mod text;
pub mod text_layer;
pub mod compositor;
pub mod fixed;
pub mod stage;
pub mod loader;
pub mod config;
pub mod controller;

pub use types::{CanvasDimensions, MapKind, Orientation};
pub use error::{ColorError, ConfigError, DimensionError, LoadError};
pub use geometry::{CircleDescriptor, CirclePair};
pub use layout::{calculate_landscape_circles, calculate_portrait_circles, RenderRequest};
pub use color::{parse_css_color, Hsv};
pub use theme::Theme;
pub use text::{TextItem, TextPosition, TextShaper};
pub use text_layer::{draw_text_layers, plan_text_layers, PlacedText};
pub use compositor::{cover_scale, draw_circle_border, draw_image_in_circle, Composite};
pub use fixed::FixedFields;
pub use stage::{Frame, Pipeline, RenderStage, StagePhase};
pub use loader::{FsImageLoader, ImageLoader, ImageSource};
pub use config::PosterSettings;
pub use controller::{PosterRequest, RenderController, RenderOutcome, RenderReport, SlotStatus};
