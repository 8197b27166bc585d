use crate::auth::use_auth;
use crate::auth::AuthState;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::Route;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginError {
    #[error("Enter your user id.")]
    MissingUid,
    #[error("Sign in failed: {0}")]
    Rejected(String),
}

/// Trims the entered user id, rejecting blank input.
pub fn validate_uid(input: &str) -> Result<String, LoginError> {
    let uid = input.trim();
    if uid.is_empty() {
        return Err(LoginError::MissingUid);
    }
    Ok(uid.to_string())
}

#[allow(non_snake_case)]
#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();
    let mut auth = use_auth();
    let mut uid_input = use_signal(String::new);
    let mut error = use_signal(|| None::<LoginError>);
    let mut submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let uid = match validate_uid(&uid_input.read()) {
            Ok(uid) => uid,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        submitting.set(true);
        spawn(async move {
            match api::sign_in(uid).await {
                Ok(user) => {
                    error.set(None);
                    auth.set(AuthState::resolved(Some(user)));
                    navigator.push(Route::Home {});
                }
                Err(e) => {
                    warn!("sign in failed: {}", e);
                    error.set(Some(LoginError::Rejected(e.to_string())));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        Card {
            h3 { "Sign in" }
            form {
                onsubmit: submit,
                label {
                    "User id"
                    input {
                        name: "uid",
                        placeholder: "e.g. pharmacy-42",
                        autofocus: true,
                        value: "{uid_input}",
                        "aria-invalid": if error.read().is_some() { "true" } else { "" },
                        oninput: move |evt| uid_input.set(evt.value()),
                    }
                }
                if let Some(e) = error() {
                    small { class: "error", "{e}" }
                }
                Button {
                    busy: submitting(),
                    "Sign in"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_uid() {
        assert_eq!(validate_uid("  p1 ").unwrap(), "p1");
    }

    #[test]
    fn blank_uid_is_rejected() {
        assert_eq!(validate_uid("   "), Err(LoginError::MissingUid));
        assert_eq!(LoginError::MissingUid.to_string(), "Enter your user id.");
    }
}
