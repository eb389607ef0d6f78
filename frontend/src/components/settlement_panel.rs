use chrono::NaiveDate;
use shared::WeekOption;
use yew::prelude::*;

use crate::components::notice_banner::NoticeBanner;
use crate::components::week_selector::WeekSelector;
use crate::hooks::use_notice::Notice;
use crate::hooks::use_settlement::{SettlementKind, SettlementState};

#[derive(Properties, PartialEq)]
pub struct SettlementPanelProps {
    pub weeks: Vec<WeekOption>,
    pub selected_week: WeekOption,
    pub on_select_week: Callback<String>,
    pub settlement: SettlementState,
    pub on_run: Callback<(SettlementKind, NaiveDate)>,
    pub notice: Option<Notice>,
}

#[function_component(SettlementPanel)]
pub fn settlement_panel(props: &SettlementPanelProps) -> Html {
    let run = |kind: SettlementKind| {
        let on_run = props.on_run.clone();
        let week_start = props.selected_week.monday;
        Callback::from(move |_: MouseEvent| on_run.emit((kind, week_start)))
    };

    let connected = props.settlement.gmail_connected;
    let button_class = |enabled_class: &'static str| {
        if connected {
            classes!("btn", enabled_class)
        } else {
            classes!("btn", "btn-disabled")
        }
    };

    html! {
        <div class="card settlement-panel">
            <h3 class="card-title">{"정산 실행"}</h3>
            <NoticeBanner notice={props.notice.clone()} />
            <div class="settlement-controls">
                <WeekSelector
                    weeks={props.weeks.clone()}
                    selected={props.selected_week.clone()}
                    on_select={props.on_select_week.clone()}
                />
                <button
                    class={button_class("btn-dark")}
                    onclick={run(SettlementKind::Final)}
                    disabled={props.settlement.settling || !connected}
                >
                    { if props.settlement.settling { "정산 중..." } else { "정산 실행" } }
                </button>
                <button
                    class={button_class("btn-primary")}
                    onclick={run(SettlementKind::Mid)}
                    disabled={props.settlement.mid_settling || !connected}
                >
                    { if props.settlement.mid_settling { "집계 중..." } else { "중간정산" } }
                </button>
            </div>
            if !connected {
                <p class="hint">{"Gmail 연동 후 사용 가능합니다. (관리자 메뉴에서 연동)"}</p>
            }
        </div>
    }
}
