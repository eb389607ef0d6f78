use yew::prelude::*;

use crate::hooks::use_auth::use_auth;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct AuthGateProps {
    pub api_client: ApiClient,
    /// Fired when no admin password has been set yet
    pub on_first_setup: Callback<()>,
    pub children: Html,
}

/// Renders its children once the session is authenticated, otherwise a
/// password dialog over a blurred backdrop.
#[function_component(AuthGate)]
pub fn auth_gate(props: &AuthGateProps) -> Html {
    let auth = use_auth(&props.api_client, props.on_first_setup.clone());

    if auth.state.checking {
        return html! {};
    }
    if auth.state.authenticated {
        return props.children.clone();
    }

    let on_submit = {
        let login = auth.actions.login.clone();
        Callback::from(move |_: MouseEvent| login.emit(()))
    };

    let on_keydown = {
        let login = auth.actions.login.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                login.emit(());
            }
        })
    };

    html! {
        <>
            <div class="auth-backdrop" />
            <div class="modal-backdrop">
                <div class="modal auth-modal">
                    <h3 class="modal-title">{"Corgi Check"}</h3>
                    <p class="modal-subtitle">{"비밀번호를 입력하세요"}</p>
                    <input
                        type="password"
                        class="form-input"
                        value={auth.state.password.clone()}
                        oninput={auth.actions.on_password_input.clone()}
                        onkeydown={on_keydown}
                        autofocus=true
                    />
                    if let Some(error) = &auth.state.error {
                        <p class="form-error">{error}</p>
                    }
                    <button class="btn btn-primary btn-block" onclick={on_submit}>{"확인"}</button>
                </div>
            </div>
        </>
    }
}
