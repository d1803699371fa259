//! Login page: email + password with debounced submit gating.
//!
//! DESIGN
//! ======
//! Field state lives in one `RwSignal<LoginForm>`. Each field's validity is
//! a `Memo`, so the gate effect re-runs only when a validity actually flips,
//! not on every keystroke. The effect feeds the `FormGate`, whose ticket is
//! fired by a `PendingTimeout` after the quiet period; the submit button's
//! `disabled` attribute is cosmetic, the submit handler re-checks the gate.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::html;
use leptos::prelude::*;
use logingate::{FieldEvent, FieldKind, Focus, FocusTargets, FormGate, LoginConfig, LoginForm, SubmitOutcome, Validity};

use crate::components::button::Button;
use crate::components::card::Card;
use crate::state::auth::AuthContext;
use crate::util::timer::PendingTimeout;

/// CSS class list for a field wrapper; only an explicit `Invalid` is flagged.
pub(crate) fn control_class(validity: Validity) -> &'static str {
    if validity.is_invalid() { "control invalid" } else { "control" }
}

/// Feed the latest validities to the gate and (re)arm the timeout.
pub(crate) fn schedule_recheck(
    gate: StoredValue<FormGate>,
    submittable: RwSignal<bool>,
    pending: PendingTimeout,
    observed: &[Validity],
) {
    let scheduled = gate
        .try_update_value(|g| g.observe(observed).map(|ticket| (ticket, g.quiet_period())))
        .flatten();
    let Some((ticket, delay)) = scheduled else {
        return;
    };
    pending.replace(delay, move || {
        if let Some(open) = gate.try_update_value(|g| g.fire(ticket)).flatten() {
            submittable.set(open);
        }
    });
}

/// Focus capability for a rendered `<input>`.
pub(crate) struct InputFocus(pub(crate) NodeRef<html::Input>);

impl Focus for InputFocus {
    fn focus(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = self.0.get_untracked() {
                let _ = input.focus();
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &self.0;
        }
    }
}

#[component]
fn FieldControl(kind: FieldKind, form: RwSignal<LoginForm>, node_ref: NodeRef<html::Input>) -> impl IntoView {
    view! {
        <div class=move || control_class(form.with(|f| f.field(kind).validity()))>
            <label for=kind.id()>{kind.label()}</label>
            <input
                type=kind.input_type()
                id=kind.id()
                node_ref=node_ref
                prop:value=move || form.with(|f| f.field(kind).value().to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.dispatch(kind, FieldEvent::UserInput(value)));
                }
                on:blur=move |_| form.update(|f| f.dispatch(kind, FieldEvent::InputBlur))
            />
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let config = expect_context::<LoginConfig>();

    let form = RwSignal::new(LoginForm::new());
    let gate = StoredValue::new(FormGate::new(config.quiet_period));
    let submittable = RwSignal::new(false);
    let pending = PendingTimeout::new();
    let email_ref = NodeRef::<html::Input>::new();
    let password_ref = NodeRef::<html::Input>::new();

    let email_validity = Memo::new(move |_| form.with(|f| f.field(FieldKind::Email).validity()));
    let password_validity = Memo::new(move |_| form.with(|f| f.field(FieldKind::Password).validity()));

    Effect::new(move |_| {
        let observed = [email_validity.get(), password_validity.get()];
        schedule_recheck(gate, submittable, pending, &observed);
    });

    on_cleanup(move || {
        gate.update_value(FormGate::teardown);
        pending.cancel();
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_focus = InputFocus(email_ref);
        let password_focus = InputFocus(password_ref);
        let targets = FocusTargets { email: &email_focus, password: &password_focus };

        let outcome = form.with_untracked(|f| f.submit(submittable.get_untracked(), auth.session(), &targets));
        match outcome {
            Ok(SubmitOutcome::LoggedIn) => auth.refresh(),
            Ok(other) => log::debug!("login refused: {other:?}"),
            Err(e) => log::warn!("login failed: {e}"),
        }
    };

    view! {
        <Card class="login">
            <form on:submit=on_submit>
                <FieldControl kind=FieldKind::Email form=form node_ref=email_ref/>
                <FieldControl kind=FieldKind::Password form=form node_ref=password_ref/>
                <div class="actions">
                    <Button button_type="submit" class="btn" disabled=Signal::derive(move || !submittable.get())>
                        "Login"
                    </Button>
                </div>
            </form>
        </Card>
    }
}
