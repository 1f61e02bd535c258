use std::sync::mpsc::{channel, Receiver};

use crate::egui_app::submit::{submit_message_blocking, SubmitOutcome};
use crate::egui_app::Config;

/// State behind the entry form: the text being typed and the last status.
pub struct FormState {
    pub config: Config,
    pub message_input: String,
    pub status: Option<String>,
    pub last_outcome: Option<SubmitOutcome>,
    pub pending: Option<Receiver<SubmitOutcome>>,
}

impl FormState {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            message_input: String::new(),
            status: None,
            last_outcome: None,
            pending: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Send the current text on a worker thread
    ///
    /// Ignored while a previous submission is still in flight.
    pub fn handle_submit(&mut self) {
        if self.is_loading() {
            return;
        }

        let message = self.message_input.clone();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(submit_message_blocking(&config, message));
        });

        self.pending = Some(rx);
    }

    /// Pick up a finished submission, if any
    pub fn check_submit_result(&mut self) {
        let outcome = match &self.pending {
            Some(rx) => match rx.try_recv() {
                Ok(outcome) => outcome,
                Err(std::sync::mpsc::TryRecvError::Empty) => return,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => SubmitOutcome::Unreachable,
            },
            None => return,
        };

        self.pending = None;
        self.apply_outcome(outcome);
    }

    /// Update the form after a submission finished
    pub fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        if outcome.is_saved() {
            self.message_input.clear();
        }
        self.status = Some(outcome.status_text());
        self.last_outcome = Some(outcome);
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
