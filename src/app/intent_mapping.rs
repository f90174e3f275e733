//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ControlPointPlaced { position } => {
            vec![AppCommand::AddControlPoint { position }]
        }
        AppIntent::ControlPointRemoved { position } => {
            vec![AppCommand::RemoveControlPoint { position }]
        }
        AppIntent::ControlPointsCleared => vec![AppCommand::ClearControlPoints],
        AppIntent::CurveModeSelected { mode } => vec![AppCommand::SetCurveMode { mode }],
        AppIntent::ContinuityModeSelected { mode } => {
            vec![AppCommand::SetContinuityMode { mode }]
        }
        AppIntent::SubdivisionLevelChanged { level } => {
            vec![AppCommand::SetSubdivisionLevel { level }]
        }
        AppIntent::PiecewiseDegreeChanged { degree } => {
            vec![AppCommand::SetPiecewiseDegree { degree }]
        }
        AppIntent::SamplesChanged { samples } => vec![AppCommand::SetSamples { samples }],
        AppIntent::ConfigResetRequested => vec![AppCommand::ApplyCurveConfig {
            config: state.options.default_curve,
        }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::OptionsSaveRequested { path } => vec![AppCommand::SaveOptions { path }],
        AppIntent::PrintControlPointsRequested => vec![AppCommand::PrintControlPoints],
    }
}
