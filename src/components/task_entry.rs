//! Task Entry Component
//!
//! One list item. Clicking the row toggles it; the delete button removes it
//! without reaching the row's click handler.

use leptos::prelude::*;

use crate::config::use_config;
use crate::controller::TaskListController;
use crate::models::Task;

#[component]
pub fn TaskEntry(task: Task, controller: TaskListController) -> impl IntoView {
    let config = use_config();
    let id = task.id;
    let class = config.entry_class(task.is_done());

    view! {
        <li
            class=class
            data-state=task.state.as_str()
            on:click=move |_| controller.toggle_task(id)
        >
            <span class="task-text">{task.text().to_string()}</span>
            <button
                class=config.delete_class
                on:click=move |ev| {
                    ev.stop_propagation();
                    controller.delete_task(id);
                }
            >
                {config.delete_label}
            </button>
        </li>
    }
}
