use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short-lived message banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
        }
    }
}

pub struct UseNoticeResult {
    pub current: Option<Notice>,
    pub show: Callback<Notice>,
}

/// Show a notice for `duration_ms`. A newer notice replaces the current one
/// and restarts the timer.
#[hook]
pub fn use_notice(duration_ms: u32) -> UseNoticeResult {
    let current = use_state(|| None::<Notice>);
    let generation = use_mut_ref(|| 0u64);

    let show = {
        let current = current.clone();
        let generation = generation.clone();

        use_callback(duration_ms, move |notice: Notice, duration_ms| {
            let seq = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };
            current.set(Some(notice));

            let current = current.clone();
            let generation = generation.clone();
            let duration_ms = *duration_ms;
            spawn_local(async move {
                TimeoutFuture::new(duration_ms).await;
                if *generation.borrow() == seq {
                    current.set(None);
                }
            });
        })
    };

    UseNoticeResult {
        current: (*current).clone(),
        show,
    }
}
