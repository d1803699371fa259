//! Landing page shown once the session flag is set.

use leptos::prelude::*;

use crate::components::card::Card;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Card class="home">
            <h1>"Welcome back!"</h1>
        </Card>
    }
}
