use yew::prelude::*;

use crate::page::Page;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let cards = Page::NAV.into_iter().filter_map(|page| {
        let (title, description) = page.card()?;
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(page));
        Some(html! {
            <button key={page.path()} class="home-card" {onclick}>
                <div class="home-card-title">{title}</div>
                <div class="home-card-desc">{description}</div>
            </button>
        })
    });

    html! {
        <div class="home">
            <h1 class="home-title">{"Corgi Check"}</h1>
            <p class="home-subtitle">{"운동 인증 관리 시스템"}</p>
            <div class="home-grid">
                { for cards }
            </div>
        </div>
    }
}
