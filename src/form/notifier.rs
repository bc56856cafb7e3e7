use std::sync::Mutex;

/// Blocking user-facing message sink
///
/// Stands in for the page's alert dialog. Implementations must not fail;
/// an alert that cannot be shown is dropped.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Writes alerts to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Keeps every alert in memory, in the order shown
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alerts shown so far
    pub fn alerts(&self) -> Vec<String> {
        match self.alerts.lock() {
            Ok(alerts) => alerts.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        match self.alerts.lock() {
            Ok(mut alerts) => alerts.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}
