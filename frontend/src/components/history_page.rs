use shared::history::weeks_in_month;
use shared::roster::birth_label;
use shared::week::week_label_to_display;
use shared::{HistoryEntry, WeekLocale};
use yew::prelude::*;

use crate::hooks::use_history::use_history;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct HistoryPageProps {
    pub api_client: ApiClient,
    pub locale: WeekLocale,
}

fn remark(entry: &HistoryEntry) -> String {
    let mut remark = entry
        .exclude_reason
        .map(|reason| reason.label().to_string())
        .unwrap_or_else(|| "-".to_string());
    if let Some(detail) = entry.exclude_reason_detail.as_deref().filter(|d| !d.is_empty()) {
        remark.push_str(&format!(" ({})", detail));
    }
    remark
}

/// Settled weeks, drilled down year → month → week
#[function_component(HistoryPage)]
pub fn history_page(props: &HistoryPageProps) -> Html {
    let history = use_history(&props.api_client);
    let state = &history.state;
    let actions = &history.actions;
    let locale = props.locale;

    let on_back = {
        let back = actions.back.clone();
        Callback::from(move |_: MouseEvent| back.emit(()))
    };
    let on_toggle_sort = {
        let toggle_sort = actions.toggle_sort.clone();
        Callback::from(move |_: MouseEvent| toggle_sort.emit(()))
    };

    let body = match (state.selected_year, state.selected_month) {
        _ if state.loading => html! { <p class="loading">{"불러오는 중..."}</p> },
        (None, _) => html! {
            <div class="history-years">
                { for state.groups.iter().map(|group| {
                    let year = group.year;
                    let select_year = actions.select_year.clone();
                    let onclick = Callback::from(move |_: MouseEvent| select_year.emit(year));
                    html! { <button key={year.to_string()} class="btn btn-primary" {onclick}>{format!("{}년", year)}</button> }
                }) }
                if state.groups.is_empty() {
                    <p class="empty">{"저장된 주차 데이터가 없습니다."}</p>
                }
            </div>
        },
        (Some(year), None) => {
            let months = state
                .groups
                .iter()
                .find(|g| g.year == year)
                .map(|g| g.months.iter().map(|m| m.month).collect::<Vec<_>>())
                .unwrap_or_default();
            html! {
                <div>
                    <h3 class="section-title">{format!("{}년", year)}</h3>
                    <div class="history-months">
                        { for months.into_iter().map(|month| {
                            let select_month = actions.select_month.clone();
                            let onclick = Callback::from(move |_: MouseEvent| select_month.emit(month));
                            html! { <button key={month.to_string()} class="btn btn-secondary" {onclick}>{format!("{}월", month)}</button> }
                        }) }
                    </div>
                </div>
            }
        }
        (Some(year), Some(month)) if state.selected_week.is_none() => html! {
            <div>
                <h3 class="section-title">{format!("{}년 {}월", year, month)}</h3>
                <div class="history-weeks">
                    { for weeks_in_month(&state.groups, year, month).into_iter().map(|week| {
                        let select_week = actions.select_week.clone();
                        let onclick = Callback::from(move |_: MouseEvent| select_week.emit(week));
                        let label = week_label_to_display(&week.to_string(), locale);
                        html! { <button key={week.to_string()} class="btn btn-secondary" {onclick}>{label}</button> }
                    }) }
                </div>
            </div>
        },
        (Some(_), Some(_)) => match &state.detail {
            Some(detail) => html! {
                <div class="card">
                    <div class="card-header">
                        <h3 class="card-title">{week_label_to_display(&detail.week_label, locale)}</h3>
                        <button class="btn-link" onclick={on_back.clone()}>{"목록으로"}</button>
                    </div>
                    if let Some(summary) = detail.summary_text.as_deref().filter(|s| !s.is_empty()) {
                        <div class="summary-text">{summary}</div>
                    }
                    <table class="history-table">
                        <thead>
                            <tr>
                                <th>{"이름"}</th>
                                <th>{"생년"}</th>
                                <th>{"상태"}</th>
                                <th>{"비고"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for state.sorted_members.iter().map(|entry| html! {
                                <tr>
                                    <td>{&entry.name}</td>
                                    <td>{birth_label(entry.birth_date.as_deref())}</td>
                                    <td>{entry.status.label()}</td>
                                    <td>{remark(entry)}</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            },
            None => html! { <p class="loading">{"불러오는 중..."}</p> },
        },
    };

    html! {
        <div class="history-page">
            <div class="page-header">
                <div class="page-header-left">
                    <h2 class="page-title">{"과거 인증 내역"}</h2>
                    if state.selected_year.is_some() {
                        <button class="btn-link" onclick={on_back}>{"← 뒤로"}</button>
                    }
                </div>
                if state.detail.is_some() {
                    <button class="btn btn-outline" onclick={on_toggle_sort}>
                        { format!("정렬 {}", if state.sort_ascending { "▲" } else { "▼" }) }
                    </button>
                }
            </div>
            if let Some(error) = &state.error {
                <div class="notice notice-error">{error}</div>
            }
            { body }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{AttendanceStatus, ExcludeReason};
    use wasm_bindgen_test::*;

    fn entry(reason: Option<ExcludeReason>, detail: Option<&str>) -> HistoryEntry {
        HistoryEntry {
            name: "장영범".to_string(),
            birth_date: None,
            status: AttendanceStatus::Exclude,
            exclude_reason: reason,
            exclude_reason_detail: detail.map(str::to_string),
        }
    }

    #[wasm_bindgen_test]
    fn test_remark() {
        assert_eq!(remark(&entry(None, None)), "-");
        assert_eq!(remark(&entry(Some(ExcludeReason::Travel), None)), "여행");
        assert_eq!(remark(&entry(Some(ExcludeReason::Custom), Some("이사"))), "직접쓰기 (이사)");
    }
}
