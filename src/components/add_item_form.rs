//! Add Item Form Component
//!
//! Form for adding new entries to the shopping list, with inline validation.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_submit_entry, use_app_store};

/// Form with name/quantity/unit fields and a single error slot
#[component]
pub fn AddItemForm() -> impl IntoView {
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (unit, set_unit) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match store_submit_entry(&store, &name.get(), &quantity.get(), &unit.get()) {
            Ok(()) => {
                web_sys::console::log_1(&format!("[FORM] Added item '{}'", name.get()).into());
                set_name.set(String::new());
                set_quantity.set(String::new());
                set_unit.set(String::new());
                set_error.set(String::new());
            }
            // A failed submit replaces the previous error and nothing else
            Err(e) => set_error.set(e.to_string()),
        }
    };

    let bind_input = move |setter: WriteSignal<String>| {
        move |ev: web_sys::Event| {
            let target = ev.target().unwrap();
            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
            setter.set(input.value());
        }
    };

    view! {
        <form class="add-item-form" on:submit=add_item>
            <div class="card-body">
                <input
                    type="text"
                    placeholder="Item neve"
                    prop:value=move || name.get()
                    on:input=bind_input(set_name)
                />
                <input
                    type="text"
                    placeholder="Mennyiség"
                    prop:value=move || quantity.get()
                    on:input=bind_input(set_quantity)
                />
                <input
                    type="text"
                    placeholder="Mennyigési egység"
                    prop:value=move || unit.get()
                    on:input=bind_input(set_unit)
                />
                <button type="submit" class="btn btn-success">"Add Item"</button>
            </div>

            <Show when=move || !error.get().is_empty()>
                <p class="form-error" style="color: red;">{move || error.get()}</p>
            </Show>
        </form>
    }
}
