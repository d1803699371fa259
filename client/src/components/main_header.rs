//! Top bar with the logout action.

use leptos::prelude::*;

use crate::components::button::Button;
use crate::state::auth::AuthContext;

#[component]
pub fn MainHeader() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let logged_in = auth.logged_in_signal();
    let on_logout = Callback::new(move |_: leptos::ev::MouseEvent| auth.logout());

    view! {
        <header class="main-header">
            <h1>"A Typical Page"</h1>
            <Show when=move || logged_in.get()>
                <nav>
                    <Button on_click=on_logout>"Logout"</Button>
                </nav>
            </Show>
        </header>
    }
}
