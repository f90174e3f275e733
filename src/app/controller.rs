//! Application Controller für zentrale Event-Verarbeitung.

use super::strategy::{draw_polylines, DrawSummary};
use super::{AppCommand, AppIntent, AppState};
use crate::render::RenderPort;
use anyhow::Context;

/// Orchestriert UI-Events und Modelländerungen auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Kontrollpunkte ===
            AppCommand::AddControlPoint { position } => {
                handlers::control_points::add(state, position)
            }
            AppCommand::RemoveControlPoint { position } => {
                handlers::control_points::remove(state, position)
            }
            AppCommand::ClearControlPoints => handlers::control_points::clear(state),
            AppCommand::PrintControlPoints => handlers::control_points::print(state),

            // === Kurven-Konfiguration ===
            AppCommand::SetCurveMode { mode } => handlers::config::set_curve_mode(state, mode),
            AppCommand::SetContinuityMode { mode } => {
                handlers::config::set_continuity_mode(state, mode)
            }
            AppCommand::SetSubdivisionLevel { level } => {
                handlers::config::set_subdivision_level(state, level)
            }
            AppCommand::SetPiecewiseDegree { degree } => {
                handlers::config::set_piecewise_degree(state, degree)
            }
            AppCommand::SetSamples { samples } => handlers::config::set_samples(state, samples),
            AppCommand::ApplyCurveConfig { config } => {
                handlers::config::apply_curve_config(state, config)
            }

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options),
            AppCommand::SaveOptions { path } => handlers::options::save(state, &path)?,
        }

        Ok(())
    }

    /// Zeichnet einen kompletten Frame: Setup, Kontrollpolygon und -punkte (je nach Optionen), Kurve.
    pub fn draw(&self, state: &AppState, port: &mut dyn RenderPort) -> anyhow::Result<DrawSummary> {
        let model = &state.model;
        // Kurve zuerst berechnen, damit ein Fehler keinen halben Frame erzeugt
        let polylines = model
            .strategy()
            .polylines(model.control_points())
            .with_context(|| format!("Kurve im Modus {} nicht zeichenbar", model.curve_mode()))?;

        model.draw_setup(port);
        if state.options.show_control_polygon {
            model.draw_control_polygon(port);
        }
        if state.options.show_control_points {
            model.draw_control_points(port);
        }

        Ok(draw_polylines(&polylines, port))
    }
}
