//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und Szenen-Dateien, die zwischen `app` und der
//! Binary geteilt werden.

pub mod options;
pub mod scene;

pub use options::EngineOptions;
pub use scene::Scene;
