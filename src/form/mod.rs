// Form interaction exports
pub mod handler;
pub mod notifier;
pub mod page;

pub use handler::{render_result, FormHandler, SubmitOutcome, GENERIC_FAILURE_MESSAGE};
pub use notifier::{Notifier, RecordingNotifier, StderrNotifier};
pub use page::Page;
