mod form;
mod log_notifier;
mod new_ballot;
mod ui_state;
mod tests;

pub use form::{FormField, FormFieldKind, NewBallotForm, DESCRIPTION_MAX_LENGTH, TITLE_MAX_LENGTH};
pub use log_notifier::LogNotifier;
pub use new_ballot::{create_ballot, NewBallotTimeline, NEW_BALLOT_DURATION_SECS};
pub use ui_state::UiState;
