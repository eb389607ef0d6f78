use shared::ClientConfig;
use yew::prelude::*;

use crate::components::settlement_panel::SettlementPanel;
use crate::components::status_row::StatusRow;
use crate::components::summary_popup::SummaryPopup;
use crate::hooks::use_notice::use_notice;
use crate::hooks::use_settlement::use_settlement;
use crate::hooks::use_status_board::use_status_board;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct StatusPageProps {
    pub api_client: ApiClient,
    pub config: ClientConfig,
}

#[function_component(StatusPage)]
pub fn status_page(props: &StatusPageProps) -> Html {
    let notice = use_notice(props.config.message_duration_ms);
    let board = use_status_board(&props.api_client, &props.config, notice.show.clone());
    let settlement = use_settlement(&props.api_client, props.config.toast_duration_ms, notice.show.clone());

    if board.state.loading && board.state.rows.is_empty() {
        return html! { <p class="loading">{"불러오는 중..."}</p> };
    }

    let on_toggle_sort = {
        let toggle_sort = board.actions.toggle_sort.clone();
        Callback::from(move |_: MouseEvent| toggle_sort.emit(()))
    };

    html! {
        <div class="status-page">
            <div class="page-header">
                <h2 class="page-title">
                    {"인증 현황"}
                    if let Some(display) = &board.state.week_display {
                        <span class="page-subtitle">{format!("({})", display)}</span>
                    }
                </h2>
                <button class="btn btn-outline" onclick={on_toggle_sort}>
                    { format!("정렬 {}", if board.state.sort_ascending { "▲" } else { "▼" }) }
                </button>
            </div>

            <SettlementPanel
                weeks={board.state.weeks.clone()}
                selected_week={board.state.selected_week.clone()}
                on_select_week={board.actions.select_week.clone()}
                settlement={settlement.state.clone()}
                on_run={settlement.actions.run.clone()}
                notice={notice.current.clone()}
            />

            <table class="status-table">
                <thead>
                    <tr>
                        <th>{"이름"}</th>
                        <th>{"생년"}</th>
                        <th>{"상태"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for board.state.rows.iter().map(|row| html! {
                        <StatusRow
                            key={row.member.id.to_string()}
                            row={row.clone()}
                            span_choices={board.state.span_choices.clone()}
                            on_status_change={board.actions.change_status.clone()}
                            on_reason_change={board.actions.choose_reason.clone()}
                            on_span_select={board.actions.commit_exclusion.clone()}
                        />
                    }) }
                </tbody>
            </table>

            if board.state.rows.is_empty() {
                <p class="empty">{"등록된 멤버가 없습니다."}</p>
            }

            if let Some(summary) = &settlement.state.summary {
                <SummaryPopup
                    summary={summary.clone()}
                    toast={settlement.state.toast.clone()}
                    on_copy={settlement.actions.copy_summary.clone()}
                    on_close={settlement.actions.close_summary.clone()}
                />
            }
        </div>
    }
}
