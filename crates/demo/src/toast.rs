use leptos::prelude::*;
use storefront::notifications::{Notification, NotificationLevel, Notifier};

/// How long a toast stays on screen.
#[cfg(target_arch = "wasm32")]
const TOAST_DURATION_MS: i32 = 3_000;

/// The toast currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Toast {
    /// Sequence number, so a late timer cannot dismiss a newer toast.
    pub(crate) id: u64,

    pub(crate) level: NotificationLevel,

    pub(crate) message: String,
}

/// Shows storefront notifications as a toast.
#[derive(Debug, Clone)]
pub(crate) struct ToastNotifier {
    toast: RwSignal<Option<Toast>>,
    next_id: u64,
}

impl ToastNotifier {
    pub(crate) fn new(toast: RwSignal<Option<Toast>>) -> Self {
        Self { toast, next_id: 0 }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&mut self, notification: Notification) {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        show_toast(self.toast, id, notification);
    }
}

pub(crate) fn show_toast(toast: RwSignal<Option<Toast>>, id: u64, notification: Notification) {
    toast.set(Some(Toast {
        id,
        level: notification.level,
        message: notification.message,
    }));

    #[cfg(target_arch = "wasm32")]
    schedule_dismiss(toast, id);
}

/// Hide the toast, unless it has been replaced since `id` was shown.
pub(crate) fn dismiss_toast(toast: RwSignal<Option<Toast>>, id: u64) {
    toast.update(|current| {
        if current.as_ref().is_some_and(|shown| shown.id == id) {
            *current = None;
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(toast: RwSignal<Option<Toast>>, id: u64) {
    use wasm_bindgen::{JsCast, closure::Closure};

    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::once_into_js(move || dismiss_toast(toast, id));

    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            TOAST_DURATION_MS,
        )
        .is_err()
    {
        leptos::logging::warn!("failed to schedule toast dismissal");
    }
}

fn toast_class(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Info => "toast toast-info",
        NotificationLevel::Error => "toast toast-error",
    }
}

#[component]
pub(crate) fn ToastRegion(toast: RwSignal<Option<Toast>>) -> impl IntoView {
    view! {
        <div class="toast-region" role="status" aria-live="polite" aria-atomic="true">
            {move || {
                toast
                    .get()
                    .map(|toast| {
                        view! {
                            <p class=toast_class(toast.level)>{toast.message}</p>
                        }
                    })
            }}
        </div>
    }
}
