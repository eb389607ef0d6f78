use shared::Member;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_members::LeaveForm;
use crate::services::date_utils::get_current_date;

#[derive(Properties, PartialEq)]
pub struct LeaveModalProps {
    pub member: Member,
    pub error: Option<String>,
    pub on_confirm: Callback<(Member, LeaveForm)>,
    pub on_close: Callback<()>,
}

#[function_component(LeaveModal)]
pub fn leave_modal(props: &LeaveModalProps) -> Html {
    let form = use_state(|| LeaveForm {
        left_date: get_current_date(),
        left_reason: String::new(),
    });

    let on_date_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let left_date = e.target_unchecked_into::<HtmlInputElement>().value();
            form.set(LeaveForm { left_date, ..(*form).clone() });
        })
    };

    let on_reason_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let left_reason = e.target_unchecked_into::<HtmlInputElement>().value();
            form.set(LeaveForm { left_reason, ..(*form).clone() });
        })
    };

    let on_confirm_click = {
        let form = form.clone();
        let member = props.member.clone();
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit((member.clone(), (*form).clone())))
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_cancel_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"탈퇴 처리"}</h3>
                <p class="modal-subtitle">{&props.member.name}</p>
                <div class="form-stack">
                    <input
                        class="form-input"
                        type="date"
                        value={form.left_date.clone()}
                        oninput={on_date_input}
                    />
                    <input
                        class="form-input"
                        placeholder="탈퇴 사유 (필수)"
                        value={form.left_reason.clone()}
                        oninput={on_reason_input}
                    />
                </div>
                if let Some(error) = &props.error {
                    <p class="form-error">{error}</p>
                }
                <div class="modal-footer">
                    <button class="btn btn-text" onclick={on_cancel_click}>{"취소"}</button>
                    <button class="btn btn-danger" onclick={on_confirm_click}>{"탈퇴 확인"}</button>
                </div>
            </div>
        </div>
    }
}
