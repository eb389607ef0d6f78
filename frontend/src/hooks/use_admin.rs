use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_notice::Notice;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Query flag the backend appends after a finished Gmail OAuth round trip
const GMAIL_CONNECTED_QUERY: &str = "gmail=connected";

#[derive(Clone, PartialEq)]
pub struct AdminState {
    pub password: String,
    pub manager: String,
    pub gmail_connected: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseAdminActions {
    pub on_password_input: Callback<InputEvent>,
    pub on_manager_input: Callback<InputEvent>,
    pub save_password: Callback<()>,
    pub save_manager: Callback<()>,
    pub connect_gmail: Callback<()>,
}

pub struct UseAdminResult {
    pub state: AdminState,
    pub actions: UseAdminActions,
}

/// True when the page was opened by the Gmail OAuth callback redirect
pub fn returned_from_gmail(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == GMAIL_CONNECTED_QUERY)
}

#[hook]
pub fn use_admin(api_client: &ApiClient, notify: Callback<Notice>) -> UseAdminResult {
    let password = use_state(String::new);
    let manager = use_state(String::new);
    let gmail_connected = use_state(|| false);

    {
        let api_client = api_client.clone();
        let manager = manager.clone();
        let gmail_connected = gmail_connected.clone();
        let notify = notify.clone();
        use_effect_with((), move |_| {
            let window = gloo::utils::window();
            let search = window.location().search().unwrap_or_default();
            if returned_from_gmail(&search) {
                gmail_connected.set(true);
                notify.emit(Notice::success("Gmail 연동 완료"));
                if let Ok(history) = window.history() {
                    let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some("/admin"));
                }
            }

            spawn_local(async move {
                match api_client.get_manager().await {
                    Ok(response) => {
                        if let Some(name) = response.name {
                            manager.set(name);
                        }
                    }
                    Err(e) => Logger::warn_with_component("admin", &format!("manager fetch failed: {}", e)),
                }
                match api_client.get_gmail_status().await {
                    Ok(status) => gmail_connected.set(status.connected),
                    Err(e) => Logger::warn_with_component("admin", &format!("gmail status failed: {}", e)),
                }
            });
            || ()
        });
    }

    let on_password_input = {
        let password = password.clone();
        use_callback((), move |e: InputEvent, _| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_manager_input = {
        let manager = manager.clone();
        use_callback((), move |e: InputEvent, _| {
            manager.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let save_password = {
        let api_client = api_client.clone();
        let password = password.clone();
        let notify = notify.clone();
        use_callback((*password).clone(), move |_: (), value| {
            if value.is_empty() {
                return;
            }
            let api_client = api_client.clone();
            let password = password.clone();
            let notify = notify.clone();
            let value = value.clone();
            spawn_local(async move {
                match api_client.set_password(&value).await {
                    Ok(_) => {
                        password.set(String::new());
                        notify.emit(Notice::success("비밀번호 설정 완료"));
                    }
                    Err(e) => notify.emit(Notice::error(e.user_message())),
                }
            });
        })
    };

    let save_manager = {
        let api_client = api_client.clone();
        let notify = notify.clone();
        use_callback((*manager).clone(), move |_: (), value| {
            let name = value.trim().to_string();
            if name.is_empty() {
                return;
            }
            let api_client = api_client.clone();
            let notify = notify.clone();
            spawn_local(async move {
                match api_client.set_manager(&name).await {
                    Ok(_) => notify.emit(Notice::success("운영진 설정 완료")),
                    Err(e) => notify.emit(Notice::error(e.user_message())),
                }
            });
        })
    };

    let connect_gmail = {
        let api_client = api_client.clone();
        let notify = notify.clone();
        use_callback((), move |_: (), _| {
            let api_client = api_client.clone();
            let notify = notify.clone();
            spawn_local(async move {
                let response = match api_client.get_gmail_auth_url().await {
                    Ok(response) => response,
                    Err(e) => return notify.emit(Notice::error(e.user_message())),
                };
                if let Some(error) = response.error.filter(|e| !e.is_empty()) {
                    return notify.emit(Notice::error(error));
                }
                if let Some(url) = response.url {
                    Logger::info_with_component("admin", "redirecting to Gmail consent");
                    if let Err(e) = gloo::utils::window().location().set_href(&url) {
                        Logger::error_with_component("admin", &format!("redirect failed: {:?}", e));
                    }
                }
            });
        })
    };

    UseAdminResult {
        state: AdminState {
            password: (*password).clone(),
            manager: (*manager).clone(),
            gmail_connected: *gmail_connected,
        },
        actions: UseAdminActions {
            on_password_input,
            on_manager_input,
            save_password,
            save_manager,
            connect_gmail,
        },
    }
}
