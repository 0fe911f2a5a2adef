pub mod config;
pub mod easing;
pub mod geometry;
pub mod scene;
pub mod state;
pub mod timeline;
pub mod view;
pub mod widget;

pub use config::{Palette, ProgressConfig, StyleOptions};
pub use geometry::{Point, Size};
pub use scene::{Glyph, Scene};
pub use state::{Outcome, WidgetState};
pub use widget::{AnimationProgress, ProgressWidget};
