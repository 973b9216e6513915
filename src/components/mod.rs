//! UI Components
//!
//! Leptos components making up the widget.

mod task_input;
mod task_list_view;
mod task_entry;

pub use task_input::TaskInput;
pub use task_list_view::TaskListView;
pub use task_entry::TaskEntry;
