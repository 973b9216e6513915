//! UI Configuration
//!
//! Labels, element ids and CSS classes used by the widget.

use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    pub title: String,
    pub placeholder: String,
    pub add_label: String,
    pub delete_label: String,
    pub input_id: String,
    pub add_button_id: String,
    pub list_id: String,
    /// Class applied to entries in the Done state
    pub done_class: String,
    pub delete_class: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "To-Do List".to_string(),
            placeholder: "Add a new task...".to_string(),
            add_label: "Add".to_string(),
            delete_label: "Delete".to_string(),
            input_id: "todo-input".to_string(),
            add_button_id: "add-btn".to_string(),
            list_id: "todo-list".to_string(),
            done_class: "done".to_string(),
            delete_class: "delete-btn".to_string(),
        }
    }
}

impl UiConfig {
    /// Class attribute for an entry in the given completion state
    pub fn entry_class(&self, done: bool) -> String {
        if done {
            self.done_class.clone()
        } else {
            String::new()
        }
    }
}

/// Get the config from context, falling back to defaults
pub fn use_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page() {
        let config = UiConfig::default();
        assert_eq!(config.input_id, "todo-input");
        assert_eq!(config.add_button_id, "add-btn");
        assert_eq!(config.list_id, "todo-list");
        assert_eq!(config.delete_label, "Delete");
        assert_eq!(config.delete_class, "delete-btn");
    }

    #[test]
    fn test_entry_class() {
        let config = UiConfig::default();
        assert_eq!(config.entry_class(true), "done");
        assert_eq!(config.entry_class(false), "");
    }
}
