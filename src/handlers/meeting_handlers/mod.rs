/// Meeting handlers, organized by operation type:
/// - `create.rs`: POST new meeting within a group
/// - `update.rs`: POST completion flag
/// - `forms.rs`: form structures shared by both

pub mod create;
pub mod forms;
pub mod update;

pub use create::create;
pub use forms::{CompletionForm, MeetingForm};
pub use update::set_completion;
