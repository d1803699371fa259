//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use logingate::LoginConfig;

use crate::components::main_header::MainHeader;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::auth::AuthContext;

/// Root application component.
///
/// Restores the session flag once and provides it, along with the login
/// configuration, to every descendant.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = LoginConfig::default();
    let auth = AuthContext::initialize(&config);
    let logged_in = auth.logged_in_signal();

    provide_context(config);
    provide_context(auth);

    view! {
        <Title text="Login"/>
        <MainHeader/>
        <main>
            <Show when=move || logged_in.get() fallback=|| view! { <LoginPage/> }>
                <HomePage/>
            </Show>
        </main>
    }
}
