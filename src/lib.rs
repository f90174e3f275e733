//! Bézier Curve Engine Library.
//! Kurvenmathematik und Zeichenlogik als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CurveModel, DrawStrategy, DrawSummary,
};
pub use crate::core::{
    eval_curve, n_choose_k, subdivide, ContinuityMode, Curve, CurveConfig, CurveError, CurveMode,
    Vector2,
};
pub use render::{DrawCall, DrawList, RenderPort};
pub use shared::{EngineOptions, Scene};
