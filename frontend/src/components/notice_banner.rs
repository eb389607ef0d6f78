use yew::prelude::*;

use crate::hooks::use_notice::Notice;

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    match &props.notice {
        Some(notice) => html! { <div class={notice.css_class()}>{&notice.text}</div> },
        None => html! {},
    }
}
