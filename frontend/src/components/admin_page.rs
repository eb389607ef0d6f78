use shared::ClientConfig;
use yew::prelude::*;

use crate::components::notice_banner::NoticeBanner;
use crate::hooks::use_admin::use_admin;
use crate::hooks::use_notice::use_notice;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct AdminPageProps {
    pub api_client: ApiClient,
    pub config: ClientConfig,
}

#[function_component(AdminPage)]
pub fn admin_page(props: &AdminPageProps) -> Html {
    let notice = use_notice(props.config.message_duration_ms);
    let admin = use_admin(&props.api_client, notice.show.clone());
    let state = &admin.state;

    let click = |callback: &Callback<()>| {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    html! {
        <div class="admin-page">
            <h2 class="page-title">{"관리자 메뉴"}</h2>
            <NoticeBanner notice={notice.current.clone()} />

            <div class="card">
                <h3 class="card-title">{"비밀번호 설정"}</h3>
                <div class="form-row">
                    <input
                        type="password"
                        class="form-input"
                        placeholder="새 비밀번호"
                        value={state.password.clone()}
                        oninput={admin.actions.on_password_input.clone()}
                    />
                    <button class="btn btn-primary" onclick={click(&admin.actions.save_password)}>{"저장"}</button>
                </div>
            </div>

            <div class="card">
                <h3 class="card-title">{"운영진 설정"}</h3>
                <div class="form-row">
                    <input
                        class="form-input"
                        placeholder="담당자 이름"
                        value={state.manager.clone()}
                        oninput={admin.actions.on_manager_input.clone()}
                    />
                    <button class="btn btn-primary" onclick={click(&admin.actions.save_manager)}>{"저장"}</button>
                </div>
            </div>

            <div class="card">
                <h3 class="card-title">{"Gmail 연동"}</h3>
                if state.gmail_connected {
                    <div class="gmail-status">
                        <span class="status-dot status-dot-ok" />
                        <span class="gmail-connected">{"연동됨"}</span>
                    </div>
                } else {
                    <button class="btn btn-primary" onclick={click(&admin.actions.connect_gmail)}>{"Google 계정 연결"}</button>
                }
            </div>
        </div>
    }
}
