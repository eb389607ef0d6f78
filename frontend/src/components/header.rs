use yew::prelude::*;

use crate::page::Page;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_link = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_navigate.emit(page);
        });
        let class = if page == props.current { "nav-link active" } else { "nav-link" };
        html! {
            <a key={page.path()} href={page.path()} class={class} {onclick}>{page.nav_label()}</a>
        }
    };

    let on_brand_click = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Home);
        })
    };

    html! {
        <header class="header">
            <div class="container">
                <a href="/" class="brand" onclick={on_brand_click}>{"Corgi Check"}</a>
                <nav class="nav-desktop">
                    { for Page::NAV.into_iter().map(nav_link) }
                </nav>
                <button class="nav-toggle" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            if *menu_open {
                <nav class="nav-mobile">
                    { for Page::NAV.into_iter().map(nav_link) }
                </nav>
            }
        </header>
    }
}
