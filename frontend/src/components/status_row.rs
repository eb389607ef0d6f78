use shared::roster::birth_label;
use shared::{AttendanceStatus, ExcludeReason, MemberStatus};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::use_status_board::StatusRow as Row;

#[derive(Properties, PartialEq)]
pub struct StatusRowProps {
    pub row: Row,
    pub span_choices: Vec<u32>,
    pub on_status_change: Callback<(MemberStatus, AttendanceStatus)>,
    pub on_reason_change: Callback<(MemberStatus, ExcludeReason)>,
    pub on_span_select: Callback<(MemberStatus, u32)>,
}

fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

#[function_component(StatusRow)]
pub fn status_row(props: &StatusRowProps) -> Html {
    let row = &props.row;
    let member = &row.member;
    let is_excluded = member.status == AttendanceStatus::Exclude || row.pending.is_some();

    let on_status = {
        let member = member.clone();
        let on_status_change = props.on_status_change.clone();
        Callback::from(move |e: Event| {
            if let Some(status) = AttendanceStatus::from_value(&select_value(&e)) {
                on_status_change.emit((member.clone(), status));
            }
        })
    };

    let on_reason = {
        let member = member.clone();
        let on_reason_change = props.on_reason_change.clone();
        Callback::from(move |e: Event| {
            if let Some(reason) = ExcludeReason::from_value(&select_value(&e)) {
                on_reason_change.emit((member.clone(), reason));
            }
        })
    };

    let on_span = {
        let member = member.clone();
        let on_span_select = props.on_span_select.clone();
        Callback::from(move |e: Event| {
            if let Ok(weeks) = select_value(&e).parse::<u32>() {
                on_span_select.emit((member.clone(), weeks));
            }
        })
    };

    let shown_reason = row.shown_reason();
    let status_options = if AttendanceStatus::SELECTABLE.contains(&member.status) {
        AttendanceStatus::SELECTABLE.to_vec()
    } else {
        let mut options = vec![member.status];
        options.extend(AttendanceStatus::SELECTABLE);
        options
    };

    html! {
        <tr class="status-row">
            <td class="cell-name">{&member.name}</td>
            <td class="cell-birth">{birth_label(member.birth_date.as_deref())}</td>
            <td class="cell-status">
                <select class="form-select" onchange={on_status} disabled={row.committing}>
                    { for status_options.into_iter().map(|status| html! {
                        <option
                            value={status.as_str()}
                            selected={status == member.status}
                            disabled={!AttendanceStatus::SELECTABLE.contains(&status)}
                        >
                            {status.label()}
                        </option>
                    }) }
                </select>
                if is_excluded {
                    <select class="form-select" onchange={on_reason} disabled={row.committing}>
                        <option value="" selected={shown_reason.is_none()}>{"사유 선택"}</option>
                        { for ExcludeReason::ALL.into_iter().map(|reason| html! {
                            <option value={reason.as_str()} selected={Some(reason) == shown_reason}>
                                {reason.label()}
                            </option>
                        }) }
                    </select>
                    <select class="form-select" onchange={on_span} disabled={row.committing || shown_reason.is_none()}>
                        <option value="" selected=true>{"기간"}</option>
                        { for props.span_choices.iter().map(|weeks| html! {
                            <option value={weeks.to_string()}>{format!("{}주", weeks)}</option>
                        }) }
                    </select>
                }
                if let (Some(ExcludeReason::Custom), Some(detail)) = (shown_reason, row.shown_detail()) {
                    <span class="reason-detail">{format!("({})", detail)}</span>
                }
                if row.committing {
                    <span class="row-saving">{"저장 중..."}</span>
                } else if let Some(end) = &row.end_week_display {
                    <span class="exclude-end">{end}</span>
                }
            </td>
        </tr>
    }
}
