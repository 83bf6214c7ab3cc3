use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast--info",
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Short-lived messages shown in the corner of the screen.
///
/// Copy handle, provided once through context by `App`.
#[derive(Clone, Copy)]
pub struct Notifications {
    pub toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    timeout_ms: u32,
}

impl Notifications {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
            timeout_ms,
        }
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let message = message.into();
        match kind {
            ToastKind::Error => log::error!("{}", message),
            _ => log::info!("{}", message),
        }
        self.toasts.update(|toasts| toasts.push(Toast { id, kind, message }));

        if self.timeout_ms > 0 {
            let this = *self;
            let delay = self.timeout_ms;
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                this.dismiss(id);
            });
        }
        id
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message)
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn dismiss(&self, id: u64) {
        // the signal may already be disposed when a timer fires after unmount
        let _ = self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }
}

pub fn use_notifications() -> Option<Notifications> {
    use_context::<Notifications>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let Some(notifications) = use_notifications() else {
        return ().into_any();
    };

    view! {
        <div class="toast-host">
            <For
                each=move || notifications.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="button button--icon toast__close"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
    .into_any()
}
