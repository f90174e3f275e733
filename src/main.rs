//! Bézier Curve Engine (headless).
//!
//! Zeichnet eine Szene aus einer TOML-Datei und gibt die Zeichenaufrufe
//! als JSON auf stdout aus.
//!
//! Aufruf: `curve-engine <szene.toml> [optionen.toml]`

use anyhow::Context;
use curve_engine::{AppController, AppState, DrawList, EngineOptions, Scene};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Curve Engine v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args_os().skip(1);
    let scene_path = args
        .next()
        .map(PathBuf::from)
        .context("Aufruf: curve-engine <szene.toml> [optionen.toml]")?;
    let options_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(EngineOptions::config_path);

    let options = EngineOptions::load_from_file(&options_path);
    let mut state = AppState::with_options(options);

    let scene = Scene::load(&scene_path)?;
    scene.apply_to(&mut state.model);
    log::info!(
        "{} Kontrollpunkte geladen, Modus {}",
        state.model.control_points().len(),
        state.model.curve_mode()
    );

    let controller = AppController::new();
    let mut draw_list = DrawList::new();
    let summary = controller.draw(&state, &mut draw_list)?;
    log::info!(
        "{} Linien in {} Kurven gezeichnet",
        summary.lines,
        summary.curves
    );

    let json = serde_json::to_string_pretty(&draw_list)?;
    println!("{json}");
    Ok(())
}
