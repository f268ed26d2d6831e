//! Login page supporting email + password, Google and Facebook sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use kit::Container;

use crate::app::use_app;
use crate::net::provider::Credentials;
use crate::state::actions::AuthCommand;

/// Shortest password the auth API accepts for new accounts.
pub const MIN_PASSWORD_LEN: usize = 6;

fn trimmed_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email and password.");
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email.to_owned()),
        _ => Err("Enter a valid email address."),
    }
}

/// Check the sign-in form. The email is trimmed; the password is sent as typed.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = trimmed_email(email)?;
    if password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok(Credentials::new(email, password))
}

/// Check the form for account creation, which also enforces a password length.
pub fn validate_new_account(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let credentials = validate_credentials(email, password)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Passwords must be at least 6 characters.");
    }
    Ok(credentials)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = StoredValue::new(use_app());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let hint = RwSignal::new(None::<&'static str>);

    let run = move |command: AuthCommand| app.with_value(|app| app.execute(command));
    let submit_with = move |validate: fn(&str, &str) -> Result<Credentials, &'static str>,
                            command: fn(Credentials) -> AuthCommand| {
        match validate(&email.get(), &password.get()) {
            Ok(credentials) => {
                hint.set(None);
                run(command(credentials));
            }
            Err(message) => hint.set(Some(message)),
        }
    };

    let on_sign_in = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_with(validate_credentials, AuthCommand::SignInWithEmailAndPassword);
    };
    let on_create = move |_| {
        submit_with(validate_new_account, AuthCommand::CreateUserWithEmailAndPassword);
    };
    let on_google = move |_| run(AuthCommand::SignInWithGoogle);
    let on_facebook = move |_| run(AuthCommand::SignInWithFacebook);
    let on_dismiss = move |_| run(AuthCommand::ClearError);

    let error_message = move || app.with_value(|app| app.selectors.error_message(&app.state.get()));

    view! {
        <Container>
            <div class="login-card">
                <h1>"Spent"</h1>
                <p class="login-card__subtitle">"Keep track of where your money goes"</p>
                <Show when=move || error_message().is_some()>
                    <div class="login-error" role="alert">
                        <span>{move || error_message().unwrap_or_default()}</span>
                        <button class="login-error__dismiss" type="button" on:click=on_dismiss>
                            "Dismiss"
                        </button>
                    </div>
                </Show>
                <form class="login-form" on:submit=on_sign_in>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">"Sign in"</button>
                    <button
                        class="login-button login-button--secondary"
                        type="button"
                        on:click=on_create
                    >
                        "Create account"
                    </button>
                </form>
                <Show when=move || hint.get().is_some()>
                    <p class="login-message">{move || hint.get().unwrap_or_default()}</p>
                </Show>
                <div class="login-divider">"or"</div>
                <button class="login-button login-button--google" type="button" on:click=on_google>
                    "Sign in with Google"
                </button>
                <button
                    class="login-button login-button--facebook"
                    type="button"
                    on:click=on_facebook
                >
                    "Sign in with Facebook"
                </button>
            </div>
        </Container>
    }
}
