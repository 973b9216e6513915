//! Task List Controller
//!
//! Wires user input to list mutations. The input field value and the list
//! container are injected as signals; the view renders whatever they hold.

use leptos::prelude::*;

use crate::error::TaskResult;
use crate::models::TaskId;
use crate::task_list::TaskList;

/// Key that submits the input field
const SUBMIT_KEY: &str = "Enter";

#[derive(Clone, Copy)]
pub struct TaskListController {
    /// Current value of the input field
    input: RwSignal<String>,
    /// Entries shown in the list container
    list: RwSignal<TaskList>,
}

impl TaskListController {
    pub fn new(input: RwSignal<String>, list: RwSignal<TaskList>) -> Self {
        Self { input, list }
    }

    pub fn input(&self) -> RwSignal<String> {
        self.input
    }

    pub fn list(&self) -> RwSignal<TaskList> {
        self.list
    }

    /// Mirror the input field's value
    pub fn set_input(&self, value: String) {
        self.input.set(value);
    }

    /// Add the trimmed input as a new task, then clear the input.
    /// Whitespace-only input is ignored and left in the field.
    pub fn add_task(&self) {
        let raw = self.input.get_untracked();
        match self.mutate(|list| list.add(&raw)) {
            Some(Ok(id)) => {
                log::info!("[TODO] Added task {}", id);
                self.input.set(String::new());
            }
            Some(Err(err)) => log::debug!("[TODO] Add ignored: {}", err),
            None => {}
        }
    }

    /// Remove exactly this task
    pub fn delete_task(&self, id: TaskId) {
        match self.mutate(|list| list.remove(id)) {
            Some(Ok(task)) => log::info!("[TODO] Deleted task {} ({})", id, task.state.as_str()),
            Some(Err(err)) => log::debug!("[TODO] Delete ignored: {}", err),
            None => {}
        }
    }

    /// Flip this task between Active and Done
    pub fn toggle_task(&self, id: TaskId) {
        match self.mutate(|list| list.toggle(id)) {
            Some(Ok(state)) => log::debug!("[TODO] Task {} is now {}", id, state.as_str()),
            Some(Err(err)) => log::debug!("[TODO] Toggle ignored: {}", err),
            None => {}
        }
    }

    /// Keyboard handler for the input field. Returns true if the key submitted.
    /// Enter while an IME composition is open confirms the candidate instead.
    pub fn submit_on_enter(&self, key: &str, composing: bool) -> bool {
        if key != SUBMIT_KEY || composing {
            return false;
        }
        self.add_task();
        true
    }

    /// Run a list operation, notifying subscribers only when it succeeded.
    /// `None` if the list signal was already disposed.
    fn mutate<T>(&self, op: impl FnOnce(&mut TaskList) -> TaskResult<T>) -> Option<TaskResult<T>> {
        self.list.try_maybe_update(|list| {
            let result = op(list);
            (result.is_ok(), result)
        })
    }
}
