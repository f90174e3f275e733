//! Begrenztes Protokoll der ausgeführten Modelländerungen.

use super::AppCommand;

/// Obergrenze gespeicherter Commands; beim Erreichen fällt die ältere Hälfte weg.
const MAX_ENTRIES: usize = 1000;

/// Ausgeführte Commands in Reihenfolge, plus Gesamtzähler über alle Kürzungen hinweg.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
    total_recorded: u64,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt einen ausgeführten Command.
    pub fn record(&mut self, command: AppCommand) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.drain(..MAX_ENTRIES / 2);
            log::debug!(
                "Command-Log gekürzt, {} Einträge verbleiben",
                self.entries.len()
            );
        }
        self.entries.push(command);
        self.total_recorded += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    /// Anzahl aller jemals protokollierten Commands, inklusive verworfener.
    pub fn total_recorded(&self) -> u64 {
        self.total_recorded
    }

    /// Read-only Sicht auf die gespeicherten Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}
