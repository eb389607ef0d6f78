use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use yew::prelude::*;

mod components;
mod hooks;
mod page;
mod services;

use components::admin_page::AdminPage;
use components::auth_gate::AuthGate;
use components::header::Header;
use components::history_page::HistoryPage;
use components::home_page::HomePage;
use components::members_page::MembersPage;
use components::status_page::StatusPage;
use page::Page;
use services::api::ApiClient;
use services::config::load_config;
use services::logging::Logger;

fn current_page() -> Page {
    let path = gloo::utils::window().location().pathname().unwrap_or_default();
    Page::from_path(&path)
}

fn push_history(page: Page) {
    let Ok(history) = gloo::utils::window().history() else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(page.path())) {
        Logger::warn_with_component("app", &format!("pushState failed: {:?}", e));
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| {
        let config = load_config();
        Logger::init(&config);
        Logger::debug_with_component("app", &format!("config: {:?}", config));
        config
    });
    let api_client = use_memo((), {
        let config = config.clone();
        move |_| ApiClient::new(&config)
    });
    let page = use_state(current_page);

    {
        let page = page.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&gloo::utils::window(), "popstate", move |_| {
                page.set(current_page());
            });
            move || drop(listener)
        });
    }

    let navigate = {
        let page = page.clone();
        use_callback((), move |next: Page, _| {
            push_history(next);
            page.set(next);
        })
    };

    let on_first_setup = {
        let navigate = navigate.clone();
        use_callback((), move |_: (), _| navigate.emit(Page::Admin))
    };

    let content = match *page {
        Page::Home => html! { <HomePage on_navigate={navigate.clone()} /> },
        Page::Status => html! {
            <StatusPage api_client={(*api_client).clone()} config={(*config).clone()} />
        },
        Page::History => html! {
            <HistoryPage api_client={(*api_client).clone()} locale={config.locale} />
        },
        Page::Members => html! { <MembersPage api_client={(*api_client).clone()} /> },
        Page::Admin => html! {
            <AdminPage api_client={(*api_client).clone()} config={(*config).clone()} />
        },
    };

    html! {
        <AuthGate api_client={(*api_client).clone()} {on_first_setup}>
            <div class="app">
                <Header current={*page} on_navigate={navigate} />
                <main class="container">
                    { content }
                </main>
            </div>
        </AuthGate>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
