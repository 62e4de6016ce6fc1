mod activity;
mod pattern;
mod progress;
mod suggestion;

pub use activity::ActivityRecord;
pub use pattern::{StudyPattern, TimeSlot};
pub use progress::ProgressSnapshot;
pub use suggestion::{Suggestion, SuggestionKind};
