use chrono::NaiveDate;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_notice::Notice;
use crate::services::api::ApiClient;
use crate::services::clipboard::copy_text;
use crate::services::logging::Logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementKind {
    Final,
    Mid,
}

impl SettlementKind {
    fn fallback_error(self) -> &'static str {
        match self {
            SettlementKind::Final => "정산 실패",
            SettlementKind::Mid => "중간정산 실패",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct SettlementState {
    pub gmail_connected: bool,
    pub settling: bool,
    pub mid_settling: bool,
    /// Summary shown in the result popup
    pub summary: Option<String>,
    pub toast: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseSettlementActions {
    pub run: Callback<(SettlementKind, NaiveDate)>,
    pub close_summary: Callback<()>,
    pub copy_summary: Callback<()>,
}

pub struct UseSettlementResult {
    pub state: SettlementState,
    pub actions: UseSettlementActions,
}

#[hook]
pub fn use_settlement(api_client: &ApiClient, toast_duration_ms: u32, notify: Callback<Notice>) -> UseSettlementResult {
    let gmail_connected = use_state(|| false);
    let settling = use_state(|| false);
    let mid_settling = use_state(|| false);
    let summary = use_state(|| None::<String>);
    let toast = use_state(|| None::<String>);

    {
        let api_client = api_client.clone();
        let gmail_connected = gmail_connected.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.get_gmail_status().await {
                    Ok(status) => gmail_connected.set(status.connected),
                    Err(e) => Logger::warn_with_component("settlement", &format!("gmail status: {}", e)),
                }
            });
            || ()
        });
    }

    let run = {
        let api_client = api_client.clone();
        let settling = settling.clone();
        let mid_settling = mid_settling.clone();
        let summary = summary.clone();
        let notify = notify.clone();

        use_callback((), move |(kind, week_start): (SettlementKind, NaiveDate), _| {
            let api_client = api_client.clone();
            let busy = match kind {
                SettlementKind::Final => settling.clone(),
                SettlementKind::Mid => mid_settling.clone(),
            };
            let summary = summary.clone();
            let notify = notify.clone();

            spawn_local(async move {
                busy.set(true);
                Logger::info_with_component("settlement", &format!("{:?} settlement for {}", kind, week_start));
                let result = match kind {
                    SettlementKind::Final => api_client.run_settlement(week_start).await,
                    SettlementKind::Mid => api_client.run_mid_settlement(week_start).await,
                };
                match result.map(|response| response.into_summary()) {
                    Ok(Ok(text)) => summary.set(Some(text)),
                    Ok(Err(message)) => notify.emit(Notice::error(message)),
                    Err(e) => {
                        let message = e.detail().unwrap_or(kind.fallback_error()).to_string();
                        notify.emit(Notice::error(message));
                    }
                }
                busy.set(false);
            });
        })
    };

    let close_summary = {
        let summary = summary.clone();
        use_callback((), move |_: (), _| summary.set(None))
    };

    let copy_summary = {
        let toast = toast.clone();
        let notify = notify.clone();
        use_callback(
            ((*summary).clone(), toast_duration_ms),
            move |_: (), (summary, duration_ms)| {
                let Some(text) = summary else {
                    return;
                };
                let text = text.clone();
                let toast = toast.clone();
                let notify = notify.clone();
                let duration_ms = *duration_ms;
                spawn_local(async move {
                    if let Err(e) = copy_text(&text).await {
                        Logger::warn_with_component("settlement", &e);
                        notify.emit(Notice::error("복사 실패"));
                        return;
                    }
                    toast.set(Some("복사 완료".to_string()));
                    TimeoutFuture::new(duration_ms).await;
                    toast.set(None);
                });
            },
        )
    };

    UseSettlementResult {
        state: SettlementState {
            gmail_connected: *gmail_connected,
            settling: *settling,
            mid_settling: *mid_settling,
            summary: (*summary).clone(),
            toast: (*toast).clone(),
        },
        actions: UseSettlementActions {
            run,
            close_summary,
            copy_summary,
        },
    }
}
