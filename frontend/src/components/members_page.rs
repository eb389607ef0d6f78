use shared::roster::birth_label;
use shared::Member;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::leave_modal::LeaveModal;
use crate::components::member_form_modal::MemberFormModal;
use crate::hooks::use_members::{use_members, MemberForm, MemberModal};
use crate::services::api::ApiClient;
use crate::services::date_utils::format_korean_date;

#[derive(Properties, PartialEq)]
pub struct MembersPageProps {
    pub api_client: ApiClient,
}

#[function_component(MembersPage)]
pub fn members_page(props: &MembersPageProps) -> Html {
    let members = use_members(&props.api_client);
    let state = &members.state;
    let actions = &members.actions;

    let on_toggle_sort = {
        let toggle_sort = actions.toggle_sort.clone();
        Callback::from(move |_: MouseEvent| toggle_sort.emit(()))
    };

    let on_add_click = {
        let open_modal = actions.open_modal.clone();
        Callback::from(move |_: MouseEvent| open_modal.emit(MemberModal::Add))
    };

    let on_hide_left_change = {
        let set_hide_left = actions.set_hide_left.clone();
        Callback::from(move |e: Event| {
            set_hide_left.emit(e.target_unchecked_into::<HtmlInputElement>().checked());
        })
    };

    let close_modal = {
        let open_modal = actions.open_modal.clone();
        Callback::from(move |_: ()| open_modal.emit(MemberModal::Closed))
    };

    let member_row = |(index, member): (usize, &Member)| {
        let on_edit = {
            let open_modal = actions.open_modal.clone();
            let member = member.clone();
            Callback::from(move |_: MouseEvent| open_modal.emit(MemberModal::Edit(member.clone())))
        };
        let on_leave = {
            let open_modal = actions.open_modal.clone();
            let member = member.clone();
            Callback::from(move |_: MouseEvent| open_modal.emit(MemberModal::Leave(member.clone())))
        };
        let on_return = {
            let return_member = actions.return_member.clone();
            let member = member.clone();
            Callback::from(move |_: MouseEvent| return_member.emit(member.clone()))
        };
        let on_delete = {
            let delete = actions.delete.clone();
            let member = member.clone();
            Callback::from(move |_: MouseEvent| delete.emit(member.clone()))
        };

        html! {
            <tr key={member.id.to_string()}>
                <td class="cell-index">{index + 1}</td>
                <td class="cell-name">{&member.name}</td>
                <td class="cell-birth">{birth_label(member.birth_date.as_deref())}</td>
                <td>
                    if member.is_active {
                        <span class="badge badge-active">{"활동"}</span>
                    } else {
                        <span class="badge badge-left">{"탈퇴"}</span>
                    }
                </td>
                <td>{member.left_date.as_deref().map(format_korean_date).unwrap_or_else(|| "-".to_string())}</td>
                <td>{member.left_reason.clone().unwrap_or_else(|| "-".to_string())}</td>
                <td class="cell-actions">
                    <button class="btn-link" onclick={on_edit}>{"수정"}</button>
                    if member.is_active {
                        <button class="btn-link btn-link-danger" onclick={on_leave}>{"탈퇴"}</button>
                    } else {
                        <button class="btn-link btn-link-success" onclick={on_return}>{"복귀"}</button>
                    }
                    <button class="btn-link btn-link-muted" onclick={on_delete}>{"삭제"}</button>
                </td>
            </tr>
        }
    };

    let modal = match &state.modal {
        MemberModal::Closed => html! {},
        MemberModal::Add => html! {
            <MemberFormModal
                title="멤버 추가"
                initial={MemberForm::default()}
                error={state.error.clone()}
                on_save={actions.add.clone()}
                on_close={close_modal.clone()}
            />
        },
        MemberModal::Edit(member) => {
            let edit = actions.edit.clone();
            let member_for_save = member.clone();
            let on_save = Callback::from(move |form: MemberForm| edit.emit((member_for_save.clone(), form)));
            html! {
                <MemberFormModal
                    key={member.id.to_string()}
                    title="멤버 수정"
                    initial={MemberForm::for_member(member)}
                    error={state.error.clone()}
                    {on_save}
                    on_close={close_modal.clone()}
                />
            }
        }
        MemberModal::Leave(member) => html! {
            <LeaveModal
                key={member.id.to_string()}
                member={member.clone()}
                error={state.error.clone()}
                on_confirm={actions.leave.clone()}
                on_close={close_modal.clone()}
            />
        },
    };

    html! {
        <div class="members-page">
            <div class="page-header">
                <h2 class="page-title">{"인원 관리"}</h2>
                <div class="page-actions">
                    <button class="btn btn-outline" onclick={on_toggle_sort}>
                        { format!("정렬 {}", if state.sort_ascending { "▲" } else { "▼" }) }
                    </button>
                    <button class="btn btn-primary" onclick={on_add_click}>{"+ 멤버 추가"}</button>
                </div>
            </div>

            <div class="member-counts">
                <div class="count-card"><span>{"전체"}</span><strong>{state.counts.total}</strong></div>
                <div class="count-card"><span>{"활동"}</span><strong class="count-active">{state.counts.active}</strong></div>
                <div class="count-card"><span>{"탈퇴"}</span><strong class="count-left">{state.counts.left}</strong></div>
            </div>

            <label class="checkbox-label">
                <input type="checkbox" checked={state.hide_left} onchange={on_hide_left_change} />
                {"탈퇴 인원 숨기기"}
            </label>

            if state.modal == MemberModal::Closed {
                if let Some(error) = &state.error {
                    <div class="notice notice-error">{error}</div>
                }
            }

            <table class="members-table">
                <thead>
                    <tr>
                        <th>{"번호"}</th>
                        <th>{"이름"}</th>
                        <th>{"생년"}</th>
                        <th>{"상태"}</th>
                        <th>{"탈퇴이력"}</th>
                        <th>{"사유"}</th>
                        <th>{"관리"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for state.members.iter().enumerate().map(member_row) }
                </tbody>
            </table>

            { modal }
        </div>
    }
}
