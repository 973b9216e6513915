//! Task List
//!
//! Ordered container owning every task entry. Entries keep insertion order
//! and never move; ids are never reused.

use crate::error::{TaskError, TaskResult};
use crate::models::{Task, TaskId, TaskState};

/// Zero-width no-break space, stripped along with whitespace
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Strip leading and trailing whitespace, BOM included
pub fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u32,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task with the trimmed input as its text
    pub fn add(&mut self, raw: &str) -> TaskResult<TaskId> {
        let text = trim_input(raw);
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, text.to_string()));
        Ok(id)
    }

    /// Flip a task between Active and Done, returning the new state
    pub fn toggle(&mut self, id: TaskId) -> TaskResult<TaskState> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .map(Task::toggle)
            .ok_or(TaskError::NotFound(id))
    }

    /// Remove exactly one task
    pub fn remove(&mut self, id: TaskId) -> TaskResult<Task> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(TaskError::NotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    #[cfg(test)]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<&Task> {
        self.tasks.last()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task texts in display order
    #[cfg(test)]
    pub fn texts(&self) -> Vec<&str> {
        self.tasks.iter().map(Task::text).collect()
    }

    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_done()).count()
    }

    pub fn active_count(&self) -> usize {
        self.len() - self.done_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(texts: &[&str]) -> (TaskList, Vec<TaskId>) {
        let mut list = TaskList::new();
        let ids = texts.iter().map(|t| list.add(t).unwrap()).collect();
        (list, ids)
    }

    #[test]
    fn test_add_trims_and_appends_active() {
        let (mut list, _) = list_of(&["first"]);
        let cases = [
            ("Buy milk", "Buy milk"),
            ("  padded  ", "padded"),
            ("\ttabbed\n", "tabbed"),
            ("\u{FEFF}Buy milk\u{FEFF}", "Buy milk"),
            (" \u{FEFF} mixed \u{FEFF}\n", "mixed"),
            ("ünïcødé ✓", "ünïcødé ✓"),
            ("<b>raw</b>", "<b>raw</b>"),
        ];
        for (raw, expected) in cases {
            let id = list.add(raw).unwrap();
            let last = list.last().unwrap();
            assert_eq!(last.id, id);
            assert_eq!(last.text(), expected);
            assert_eq!(last.state, TaskState::Active);
        }
        assert_eq!(list.len(), 8);
    }

    #[test]
    fn test_add_whitespace_is_rejected() {
        let (mut list, _) = list_of(&["Task A"]);
        let before = list.clone();
        for raw in ["", " ", "  ", "\t\n", "\u{2003}", "\u{FEFF}", " \u{FEFF}\u{00A0}"] {
            assert_eq!(list.add(raw), Err(TaskError::EmptyText));
        }
        assert_eq!(list, before);
    }

    #[test]
    fn test_trim_input_keeps_inner_marks() {
        assert_eq!(trim_input("\u{FEFF}a\u{FEFF}b\u{FEFF}"), "a\u{FEFF}b");
        assert_eq!(trim_input("\u{FEFF}"), "");
    }

    #[test]
    fn test_insertion_order() {
        let (list, _) = list_of(&["Task A", "Task B", "Task C"]);
        assert_eq!(list.texts(), vec!["Task A", "Task B", "Task C"]);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let (mut list, ids) = list_of(&["X", "Y"]);
        assert_eq!(list.toggle(ids[0]), Ok(TaskState::Done));
        assert_eq!(list.toggle(ids[0]), Ok(TaskState::Active));

        list.toggle(ids[1]).unwrap();
        let done = list.clone();
        list.toggle(ids[1]).unwrap();
        list.toggle(ids[1]).unwrap();
        assert_eq!(list, done);
    }

    #[test]
    fn test_remove_only_target() {
        let (mut list, ids) = list_of(&["A", "B", "C"]);
        list.toggle(ids[2]).unwrap();

        let removed = list.remove(ids[1]).unwrap();
        assert_eq!(removed.text(), "B");
        assert_eq!(list.texts(), vec!["A", "C"]);
        assert_eq!(list.get(ids[0]).unwrap().state, TaskState::Active);
        assert_eq!(list.get(ids[2]).unwrap().state, TaskState::Done);
        assert!(list.get(ids[1]).is_none());
    }

    #[test]
    fn test_removed_is_terminal() {
        let (mut list, ids) = list_of(&["X"]);
        list.remove(ids[0]).unwrap();
        assert_eq!(list.toggle(ids[0]), Err(TaskError::NotFound(ids[0])));
        assert_eq!(list.remove(ids[0]).unwrap_err(), TaskError::NotFound(ids[0]));
        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_not_reused() {
        let (mut list, ids) = list_of(&["X"]);
        list.remove(ids[0]).unwrap();
        let next = list.add("Y").unwrap();
        assert_ne!(next, ids[0]);
        // A stale id must not hit the newer entry
        assert!(list.toggle(ids[0]).is_err());
        assert_eq!(list.get(next).unwrap().state, TaskState::Active);
    }

    #[test]
    fn test_counts() {
        let (mut list, ids) = list_of(&["A", "B", "C"]);
        list.toggle(ids[0]).unwrap();
        assert_eq!(list.done_count(), 1);
        assert_eq!(list.active_count(), 2);
    }
}
