//! Styled button.
//!
//! `disabled` only affects presentation; handlers that gate an action must
//! check their own condition.

use leptos::prelude::*;

#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional)] class: &'static str,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() { "button".to_owned() } else { format!("button {class}") };
    view! {
        <button
            type=button_type.unwrap_or("button")
            class=class
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
