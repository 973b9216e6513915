//! To-Do Widget App
//!
//! Root component: owns the input and list state and hands both to the
//! controller.

use leptos::prelude::*;

use crate::components::{TaskInput, TaskListView};
use crate::config::UiConfig;
use crate::controller::TaskListController;
use crate::task_list::TaskList;

#[component]
pub fn App(#[prop(optional)] config: Option<UiConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let title = config.title.clone();

    // State
    let input = RwSignal::new(String::new());
    let list = RwSignal::new(TaskList::new());
    let controller = TaskListController::new(input, list);

    provide_context(config);

    Effect::new(move |_| {
        let count = list.with(TaskList::len);
        log::debug!("[APP] Rendering {} tasks", count);
    });

    view! {
        <main class="todo-app">
            <h1>{title}</h1>

            <TaskInput controller=controller />

            <TaskListView controller=controller />

            <p class="item-count">
                {move || list.with(|list| {
                    if list.is_empty() {
                        "No tasks".to_string()
                    } else {
                        format!("{} tasks, {} done, {} left", list.len(), list.done_count(), list.active_count())
                    }
                })}
            </p>
        </main>
    }
}
