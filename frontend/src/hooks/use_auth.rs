use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::storage::AuthSession;

#[derive(Clone, PartialEq)]
pub struct AuthState {
    pub checking: bool,
    pub authenticated: bool,
    pub password: String,
    pub error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseAuthActions {
    pub on_password_input: Callback<InputEvent>,
    pub login: Callback<()>,
}

pub struct UseAuthResult {
    pub state: AuthState,
    pub actions: UseAuthActions,
}

/// Gate the app behind the admin password.
///
/// `on_first_setup` fires when no password exists yet; the session is then
/// opened without a prompt so the admin page can set one.
#[hook]
pub fn use_auth(api_client: &ApiClient, on_first_setup: Callback<()>) -> UseAuthResult {
    let checking = use_state(|| true);
    let authenticated = use_state(|| false);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);

    {
        let api_client = api_client.clone();
        let checking = checking.clone();
        let authenticated = authenticated.clone();
        use_effect_with((), move |_| {
            if AuthSession::is_open() {
                authenticated.set(true);
                checking.set(false);
            } else {
                spawn_local(async move {
                    match api_client.check_auth().await {
                        Ok(response) if !response.exists => {
                            Logger::info_with_component("auth", "no admin password yet, opening setup");
                            AuthSession::open();
                            authenticated.set(true);
                            on_first_setup.emit(());
                        }
                        Ok(_) => {}
                        Err(e) => Logger::error_with_component("auth", &format!("auth check failed: {}", e)),
                    }
                    checking.set(false);
                });
            }
            || ()
        });
    }

    let on_password_input = {
        let password = password.clone();
        use_callback((), move |e: InputEvent, _| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let login = {
        let api_client = api_client.clone();
        let authenticated = authenticated.clone();
        let error = error.clone();
        use_callback((*password).clone(), move |_: (), password| {
            let api_client = api_client.clone();
            let authenticated = authenticated.clone();
            let error = error.clone();
            let password = password.clone();
            error.set(None);
            spawn_local(async move {
                match api_client.login(&password).await {
                    Ok(_) => {
                        AuthSession::open();
                        authenticated.set(true);
                    }
                    Err(e) => {
                        Logger::warn_with_component("auth", &format!("login rejected: {}", e));
                        error.set(Some("비밀번호가 틀렸습니다.".to_string()));
                    }
                }
            });
        })
    };

    UseAuthResult {
        state: AuthState {
            checking: *checking,
            authenticated: *authenticated,
            password: (*password).clone(),
            error: (*error).clone(),
        },
        actions: UseAuthActions {
            on_password_input,
            login,
        },
    }
}
