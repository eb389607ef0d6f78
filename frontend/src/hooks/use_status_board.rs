//! Status board hook.
//!
//! Responsibilities:
//! - Fetch the member statuses of the selected week
//! - Route status, reason and span selections through the shared
//!   [`ExclusionReconciler`] so only server-confirmed end weeks are shown
//! - Grow the week window when an exclusion reaches past its last week

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use shared::roster::sort_by_birth_name;
use shared::week::monday_of;
use shared::{
    AttendanceStatus, ClientConfig, ExcludeReason, ExclusionReconciler, MemberStatus, MergeOutcome,
    PendingEdit, WeekOption, WeekWindowSettings,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_notice::Notice;
use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use crate::services::logging::Logger;
use crate::services::storage::LocalFutureWeeksStore;

const COMPONENT: &str = "status";

type SharedReconciler = Rc<RefCell<ExclusionReconciler>>;
type SharedSettings = Rc<RefCell<WeekWindowSettings<LocalFutureWeeksStore>>>;

/// One table row with its reconciler view
#[derive(Clone, PartialEq)]
pub struct StatusRow {
    pub member: MemberStatus,
    pub pending: Option<PendingEdit>,
    pub committing: bool,
    pub end_week_display: Option<String>,
}

impl StatusRow {
    /// Reason shown in the reason selector: the staged one wins
    pub fn shown_reason(&self) -> Option<ExcludeReason> {
        self.pending
            .as_ref()
            .map(|p| p.reason)
            .or(self.member.exclude_reason)
    }

    pub fn shown_detail(&self) -> Option<&str> {
        match &self.pending {
            Some(pending) => pending.detail.as_deref(),
            None => self.member.exclude_reason_detail.as_deref(),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct StatusBoardState {
    pub rows: Vec<StatusRow>,
    pub loading: bool,
    pub weeks: Vec<WeekOption>,
    pub selected_week: WeekOption,
    /// Backend's display of the week on screen, e.g. "26년 2월 2일(월) 주"
    pub week_display: Option<String>,
    pub sort_ascending: bool,
    pub span_choices: Vec<u32>,
}

#[derive(Clone, PartialEq)]
pub struct UseStatusBoardActions {
    /// Takes the `YYYY-MM-DD` value of a week option
    pub select_week: Callback<String>,
    pub refresh: Callback<()>,
    pub change_status: Callback<(MemberStatus, AttendanceStatus)>,
    pub choose_reason: Callback<(MemberStatus, ExcludeReason)>,
    pub commit_exclusion: Callback<(MemberStatus, u32)>,
    pub toggle_sort: Callback<()>,
}

pub struct UseStatusBoardResult {
    pub state: StatusBoardState,
    pub actions: UseStatusBoardActions,
}

#[hook]
pub fn use_status_board(api_client: &ApiClient, config: &ClientConfig, notify: Callback<Notice>) -> UseStatusBoardResult {
    let reconciler: SharedReconciler = {
        let locale = config.locale;
        use_mut_ref(move || ExclusionReconciler::new(locale))
    };
    let settings: SharedSettings = {
        let config = config.clone();
        use_mut_ref(move || WeekWindowSettings::new(&config, LocalFutureWeeksStore))
    };
    let statuses = use_state(Vec::<MemberStatus>::new);
    let loading = use_state(|| true);
    let weeks = {
        let settings = settings.clone();
        use_state(move || settings.borrow().window(today()))
    };
    let selected_week = {
        let locale = config.locale;
        use_state(move || WeekOption::new(monday_of(today()), locale))
    };
    let sort_ascending = use_state(|| true);
    let force_update = use_force_update();

    let refresh_week = {
        let api_client = api_client.clone();
        let reconciler = reconciler.clone();
        let statuses = statuses.clone();
        let loading = loading.clone();
        let notify = notify.clone();
        let force_update = force_update.clone();

        use_callback((), move |week_start: NaiveDate, _| {
            let api_client = api_client.clone();
            let reconciler = reconciler.clone();
            let statuses = statuses.clone();
            let loading = loading.clone();
            let notify = notify.clone();
            let force_update = force_update.clone();
            let ticket = reconciler.borrow_mut().begin_refresh(Some(week_start));

            spawn_local(async move {
                let fetched = api_client.get_current_statuses(Some(week_start)).await;
                let rows = match fetched {
                    Ok(rows) => rows,
                    Err(e) => {
                        if !reconciler.borrow().is_current(&ticket) {
                            Logger::debug_with_component(COMPONENT, &format!("superseded fetch for {} failed: {}", week_start, e));
                            return;
                        }
                        Logger::error_with_component(COMPONENT, &format!("status fetch failed: {}", e));
                        notify.emit(Notice::error(e.user_message()));
                        loading.set(false);
                        return;
                    }
                };

                let outcome = reconciler.borrow_mut().merge_refresh(&ticket, &rows);
                let needs_lookup = match outcome {
                    MergeOutcome::Stale => return,
                    MergeOutcome::Applied { needs_lookup } => needs_lookup,
                };
                Logger::debug_with_component(
                    COMPONENT,
                    &format!("{} statuses for {}, {} end weeks to look up", rows.len(), week_start, needs_lookup.len()),
                );
                statuses.set(rows);
                loading.set(false);

                for member_id in needs_lookup {
                    match api_client.get_exclude_end(member_id, week_start).await {
                        Ok(response) => {
                            reconciler.borrow_mut().apply_exclude_end(member_id, &response);
                            force_update.force_update();
                        }
                        Err(e) => Logger::warn_with_component(
                            COMPONENT,
                            &format!("exclude-end lookup for {} failed: {}", member_id, e),
                        ),
                    }
                }
            });
        })
    };

    {
        let refresh_week = refresh_week.clone();
        use_effect_with(selected_week.monday, move |week_start| {
            refresh_week.emit(*week_start);
            || ()
        });
    }

    let refresh = {
        let refresh_week = refresh_week.clone();
        use_callback(selected_week.monday, move |_: (), week_start| {
            refresh_week.emit(*week_start);
        })
    };

    let select_week = {
        let reconciler = reconciler.clone();
        let selected_week = selected_week.clone();
        let loading = loading.clone();
        let locale = config.locale;

        use_callback((), move |value: String, _| {
            match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
                Ok(date) => {
                    let monday = monday_of(date);
                    reconciler.borrow_mut().view_week(monday);
                    loading.set(true);
                    selected_week.set(WeekOption::new(monday, locale));
                }
                Err(e) => Logger::warn_with_component(COMPONENT, &format!("bad week value {}: {}", value, e)),
            }
        })
    };

    let change_status = {
        let api_client = api_client.clone();
        let reconciler = reconciler.clone();
        let refresh_week = refresh_week.clone();
        let notify = notify.clone();
        let force_update = force_update.clone();

        use_callback(
            selected_week.monday,
            move |(member, status): (MemberStatus, AttendanceStatus), week_start| {
                if member.status == status {
                    return;
                }
                let api_client = api_client.clone();
                let reconciler = reconciler.clone();
                let refresh_week = refresh_week.clone();
                let notify = notify.clone();
                let force_update = force_update.clone();
                let week_start = *week_start;
                let request = reconciler
                    .borrow_mut()
                    .status_change_request(&member, status, Some(week_start));

                spawn_local(async move {
                    match api_client.update_status(member.id, &request).await {
                        Ok(response) => {
                            reconciler.borrow_mut().complete_status_change(member.id, &response);
                            Logger::info_with_component(
                                COMPONENT,
                                &format!("{} -> {}", member.name, response.status.as_str()),
                            );
                        }
                        Err(e) => {
                            let message = reconciler.borrow_mut().fail_commit(member.id, &member.name, &e);
                            notify.emit(Notice::error(message));
                        }
                    }
                    force_update.force_update();
                    let target = reconciler.borrow().refresh_target(week_start);
                    refresh_week.emit(target);
                });
            },
        )
    };

    let choose_reason = {
        let reconciler = reconciler.clone();
        let force_update = force_update.clone();

        use_callback((), move |(member, reason): (MemberStatus, ExcludeReason), _| {
            let detail = if reason == ExcludeReason::Custom {
                match gloo::dialogs::prompt("세부 사유를 입력하세요:", member.exclude_reason_detail.as_deref()) {
                    Some(detail) => Some(detail),
                    None => return,
                }
            } else {
                None
            };
            if reconciler.borrow_mut().choose_reason(member.id, reason, detail) {
                force_update.force_update();
            }
        })
    };

    let commit_exclusion = {
        let api_client = api_client.clone();
        let reconciler = reconciler.clone();
        let settings = settings.clone();
        let weeks = weeks.clone();
        let refresh_week = refresh_week.clone();
        let notify = notify.clone();
        let force_update = force_update.clone();

        use_callback(
            selected_week.monday,
            move |(member, consecutive_weeks): (MemberStatus, u32), week_start| {
                let week_start = *week_start;
                let request = match reconciler
                    .borrow_mut()
                    .begin_commit(&member, consecutive_weeks, week_start)
                {
                    Ok(request) => request,
                    Err(e) => {
                        notify.emit(Notice::error(format!("{}: {}", member.name, e)));
                        return;
                    }
                };
                force_update.force_update();

                let api_client = api_client.clone();
                let reconciler = reconciler.clone();
                let settings = settings.clone();
                let weeks = weeks.clone();
                let refresh_week = refresh_week.clone();
                let notify = notify.clone();
                let force_update = force_update.clone();

                spawn_local(async move {
                    match api_client.update_status(member.id, &request).await {
                        Ok(response) => {
                            let message = reconciler
                                .borrow_mut()
                                .complete_commit(member.id, &member.name, &response);
                            if let Some(end) = response.exclude_end_label {
                                let today = today();
                                let mut settings = settings.borrow_mut();
                                if settings.ensure_covers(today, end.monday()) {
                                    weeks.set(settings.window(today));
                                }
                            }
                            notify.emit(Notice::success(message));
                        }
                        Err(e) => {
                            let message = reconciler.borrow_mut().fail_commit(member.id, &member.name, &e);
                            notify.emit(Notice::error(message));
                        }
                    }
                    force_update.force_update();
                    let target = reconciler.borrow().refresh_target(week_start);
                    refresh_week.emit(target);
                });
            },
        )
    };

    let toggle_sort = {
        let sort_ascending = sort_ascending.clone();
        use_callback(*sort_ascending, move |_: (), ascending| {
            sort_ascending.set(!*ascending);
        })
    };

    let rows = {
        let reconciler = reconciler.borrow();
        sort_by_birth_name(statuses.as_slice(), *sort_ascending)
            .into_iter()
            .map(|member| StatusRow {
                pending: reconciler.pending(member.id).cloned(),
                committing: reconciler.is_committing(member.id),
                end_week_display: reconciler.end_week_display(member.id),
                member,
            })
            .collect()
    };

    UseStatusBoardResult {
        state: StatusBoardState {
            rows,
            loading: *loading,
            weeks: (*weeks).clone(),
            selected_week: (*selected_week).clone(),
            week_display: statuses.first().map(|s| s.week_display.clone()),
            sort_ascending: *sort_ascending,
            span_choices: config.exclude_span_choices(),
        },
        actions: UseStatusBoardActions {
            select_week,
            refresh,
            change_status,
            choose_reason,
            commit_exclusion,
            toggle_sort,
        },
    }
}
