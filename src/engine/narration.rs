//! Narrated status line
//!
//! Every step replaces the current message. The log keeps each message of
//! the latest run in order for the headless runner and for tests.

#[derive(Debug, Clone, Default)]
pub struct Narration {
    current: String,
    log: Vec<String>,
}

impl Narration {
    pub fn new(initial: impl Into<String>) -> Self {
        Narration {
            current: initial.into(),
            log: Vec::new(),
        }
    }

    pub fn say(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(narration = %message);
        self.log.push(message.clone());
        self.current = message;
    }

    /// Replace the current message outside a run. Drops the log of the
    /// previous run.
    pub fn announce(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(narration = %message);
        self.log.clear();
        self.current = message;
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Hand over the log collected so far
    pub fn take_log(&mut self) -> Vec<String> {
        std::mem::take(&mut self.log)
    }
}
