//! Task List View Component
//!
//! Renders the list container in insertion order.

use leptos::prelude::*;

use crate::components::TaskEntry;
use crate::config::use_config;
use crate::controller::TaskListController;
use crate::models::Task;

#[component]
pub fn TaskListView(controller: TaskListController) -> impl IntoView {
    let config = use_config();
    let list = controller.list();
    let tasks = move || list.with(|list| list.iter().cloned().collect::<Vec<Task>>());

    view! {
        <ul id=config.list_id class="todo-list">
            <For
                each=tasks
                // State is part of the key so a toggle re-renders the row
                key=|task: &Task| (task.id, task.state)
                children=move |task| view! { <TaskEntry task=task controller=controller /> }
            />
        </ul>
    }
}
