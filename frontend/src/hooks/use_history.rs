use shared::history::{group_history_weeks, HistoryYear};
use shared::roster::sort_by_birth_name;
use shared::{HistoryEntry, WeekDetail, WeekId};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct HistoryState {
    pub groups: Vec<HistoryYear>,
    pub loading: bool,
    pub selected_year: Option<i32>,
    pub selected_month: Option<u32>,
    pub selected_week: Option<WeekId>,
    pub detail: Option<WeekDetail>,
    /// Detail rows in the current sort order
    pub sorted_members: Vec<HistoryEntry>,
    pub sort_ascending: bool,
    pub error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseHistoryActions {
    pub select_year: Callback<i32>,
    pub select_month: Callback<u32>,
    pub select_week: Callback<WeekId>,
    pub back: Callback<()>,
    pub toggle_sort: Callback<()>,
}

pub struct UseHistoryResult {
    pub state: HistoryState,
    pub actions: UseHistoryActions,
}

#[hook]
pub fn use_history(api_client: &ApiClient) -> UseHistoryResult {
    let groups = use_state(Vec::<HistoryYear>::new);
    let loading = use_state(|| true);
    let selected_year = use_state(|| None::<i32>);
    let selected_month = use_state(|| None::<u32>);
    let selected_week = use_state(|| None::<WeekId>);
    let detail = use_state(|| None::<WeekDetail>);
    let sort_ascending = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let api_client = api_client.clone();
        let groups = groups.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.get_history_weeks().await {
                    Ok(weeks) => {
                        Logger::debug_with_component("history", &format!("{} settled weeks", weeks.len()));
                        groups.set(group_history_weeks(&weeks));
                    }
                    Err(e) => {
                        Logger::error_with_component("history", &format!("weeks fetch failed: {}", e));
                        error.set(Some(e.user_message()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let select_year = {
        let selected_year = selected_year.clone();
        let selected_month = selected_month.clone();
        let selected_week = selected_week.clone();
        let detail = detail.clone();
        use_callback((), move |year: i32, _| {
            selected_year.set(Some(year));
            selected_month.set(None);
            selected_week.set(None);
            detail.set(None);
        })
    };

    let select_month = {
        let selected_month = selected_month.clone();
        let selected_week = selected_week.clone();
        let detail = detail.clone();
        use_callback((), move |month: u32, _| {
            selected_month.set(Some(month));
            selected_week.set(None);
            detail.set(None);
        })
    };

    let select_week = {
        let api_client = api_client.clone();
        let selected_week = selected_week.clone();
        let detail = detail.clone();
        let sort_ascending = sort_ascending.clone();
        let error = error.clone();
        use_callback((), move |week: WeekId, _| {
            let api_client = api_client.clone();
            let detail = detail.clone();
            let sort_ascending = sort_ascending.clone();
            let error = error.clone();
            selected_week.set(Some(week));

            spawn_local(async move {
                match api_client.get_week_detail(&week.to_string()).await {
                    Ok(week_detail) => {
                        detail.set(Some(week_detail));
                        sort_ascending.set(true);
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error_with_component("history", &format!("detail for {} failed: {}", week, e));
                        error.set(Some(e.user_message()));
                    }
                }
            });
        })
    };

    let back = {
        let selected_year = selected_year.clone();
        let selected_month = selected_month.clone();
        let selected_week = selected_week.clone();
        let detail = detail.clone();
        use_callback(*selected_month, move |_: (), month| {
            if month.is_some() {
                selected_month.set(None);
                selected_week.set(None);
                detail.set(None);
            } else {
                selected_year.set(None);
            }
        })
    };

    let toggle_sort = {
        let sort_ascending = sort_ascending.clone();
        use_callback(*sort_ascending, move |_: (), ascending| sort_ascending.set(!*ascending))
    };

    let sorted_members = detail
        .as_ref()
        .map(|d| sort_by_birth_name(&d.members, *sort_ascending))
        .unwrap_or_default();

    UseHistoryResult {
        state: HistoryState {
            groups: (*groups).clone(),
            loading: *loading,
            selected_year: *selected_year,
            selected_month: *selected_month,
            selected_week: *selected_week,
            detail: (*detail).clone(),
            sorted_members,
            sort_ascending: *sort_ascending,
            error: (*error).clone(),
        },
        actions: UseHistoryActions {
            select_year,
            select_month,
            select_week,
            back,
            toggle_sort,
        },
    }
}
