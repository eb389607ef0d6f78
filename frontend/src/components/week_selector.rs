use shared::WeekOption;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WeekSelectorProps {
    pub weeks: Vec<WeekOption>,
    pub selected: WeekOption,
    /// Receives the `YYYY-MM-DD` value of the chosen week
    pub on_select: Callback<String>,
}

/// Week dropdown: furthest future week first, then the current week and the
/// past weeks.
#[function_component(WeekSelector)]
pub fn week_selector(props: &WeekSelectorProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            on_select.emit(e.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };

    let selected_value = props.selected.value();
    let has_selected = props.weeks.iter().any(|w| w.monday == props.selected.monday);

    html! {
        <div class="week-selector">
            <label class="form-label">{"주차 선택"}</label>
            <select class="form-select" {onchange}>
                if !has_selected {
                    <option value={selected_value.clone()} selected=true>
                        {format!("{} 주", props.selected.label)}
                    </option>
                }
                { for props.weeks.iter().map(|week| {
                    let value = week.value();
                    html! {
                        <option key={value.clone()} value={value.clone()} selected={value == selected_value}>
                            {format!("{} 주", week.label)}
                        </option>
                    }
                }) }
            </select>
        </div>
    }
}
