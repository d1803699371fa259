//! Rounded container used by every page.

use leptos::prelude::*;

#[component]
pub fn Card(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let class = if class.is_empty() { "card".to_owned() } else { format!("card {class}") };
    view! { <div class=class>{children()}</div> }
}
