use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryPopupProps {
    pub summary: String,
    pub toast: Option<String>,
    pub on_copy: Callback<()>,
    pub on_close: Callback<()>,
}

/// Settlement result with copy and close buttons
#[function_component(SummaryPopup)]
pub fn summary_popup(props: &SummaryPopupProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_copy_click = {
        let on_copy = props.on_copy.clone();
        Callback::from(move |_: MouseEvent| on_copy.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal summary-modal" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3 class="modal-title">{"정산 결과"}</h3>
                    <button class="modal-close" onclick={on_close_click.clone()}>{"x"}</button>
                </div>
                <div class="modal-body">
                    <pre class="summary-text">{&props.summary}</pre>
                </div>
                <div class="modal-footer">
                    <button class="btn btn-primary" onclick={on_copy_click}>{"복사"}</button>
                    <button class="btn btn-secondary" onclick={on_close_click}>{"닫기"}</button>
                </div>
            </div>
            if let Some(toast) = &props.toast {
                <div class="toast">{toast}</div>
            }
        </div>
    }
}
