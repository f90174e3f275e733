//! Application-Layer: Kurvenmodell, Zeichenstrategien, Controller, State und Events.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod model;
pub mod state;
pub mod strategy;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use model::CurveModel;
pub use state::AppState;
pub use strategy::{DrawStrategy, DrawSummary};
