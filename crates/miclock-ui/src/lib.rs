//! MiClock UI: widget layer on top of `miclock-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use miclock_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let font = scene.load_font(include_bytes!("my_font.ttf"))?;
//! let mut clock = ClockView::new().font(font);
//!
//! // Once per host frame:
//! scene.frame_widget(&mut clock, Vec2::new(800.0, 800.0));
//! target.render(&mut scene.draw_list, &scene.font_system);
//! if scene.needs_redraw() { /* schedule the next frame */ }
//! ```
//!
//! # Custom widgets
//!
//! Implement [`Widget`](widget::Widget) and paint through the
//! [`Painter`](painter::Painter); every painter call appends one command to
//! the frame's draw stream, above everything painted before it.

pub mod constraints;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything needed to host and extend the UI.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::clock::{
        ClockFaceRenderer, ClockView, FaceGeometry, HandKind, Palette, RingStyle, TimeAngles,
    };

    pub use miclock_engine::coords::{Rect, Transform, Vec2};
    pub use miclock_engine::paint::{Color, Paint};
    pub use miclock_engine::text::FontId;
    pub use miclock_engine::time::{FixedClock, SystemClock, TimeSource, WallTime};
}
