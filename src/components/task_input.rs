//! Task Input Component
//!
//! Text field and add button. Enter in the field submits like the button.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::use_config;
use crate::controller::TaskListController;

#[component]
pub fn TaskInput(controller: TaskListController) -> impl IntoView {
    let config = use_config();
    let input = controller.input();

    view! {
        <div class="todo-input-row">
            <input
                type="text"
                id=config.input_id
                placeholder=config.placeholder
                prop:value=move || input.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let field = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    controller.set_input(field.value());
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if controller.submit_on_enter(&ev.key(), ev.is_composing()) {
                        ev.prevent_default();
                    }
                }
            />
            <button
                type="button"
                id=config.add_button_id
                on:click=move |_| controller.add_task()
            >
                {config.add_label}
            </button>
        </div>
    }
}
