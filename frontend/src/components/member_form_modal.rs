use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_members::MemberForm;

#[derive(Properties, PartialEq)]
pub struct MemberFormModalProps {
    pub title: AttrValue,
    pub initial: MemberForm,
    pub error: Option<String>,
    pub on_save: Callback<MemberForm>,
    pub on_close: Callback<()>,
}

/// Add/edit dialog: name and optional birth year
#[function_component(MemberFormModal)]
pub fn member_form_modal(props: &MemberFormModalProps) -> Html {
    let form = {
        let initial = props.initial.clone();
        use_state(move || initial)
    };

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let name = e.target_unchecked_into::<HtmlInputElement>().value();
            form.set(MemberForm { name, ..(*form).clone() });
        })
    };

    let on_birth_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let birth_year = e.target_unchecked_into::<HtmlInputElement>().value();
            form.set(MemberForm { birth_year, ..(*form).clone() });
        })
    };

    let on_save_click = {
        let form = form.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit((*form).clone()))
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
                <h3 class="modal-title">{props.title.clone()}</h3>
                <div class="form-stack">
                    <input
                        class="form-input"
                        placeholder="이름"
                        value={form.name.clone()}
                        oninput={on_name_input}
                    />
                    <input
                        class="form-input"
                        type="number"
                        placeholder="생년 (예: 1994)"
                        value={form.birth_year.clone()}
                        oninput={on_birth_input}
                    />
                </div>
                if let Some(error) = &props.error {
                    <p class="form-error">{error}</p>
                }
                <div class="modal-footer">
                    <button class="btn btn-text" onclick={on_cancel_click}>{"취소"}</button>
                    <button class="btn btn-primary" onclick={on_save_click}>{"저장"}</button>
                </div>
            </div>
        </div>
    }
}
