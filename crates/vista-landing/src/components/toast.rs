use std::time::Duration;

use leptos::prelude::*;
use vista_leads::Notification;

/// Shows the current notification and clears it after `ttl_ms`.
///
/// A newer notification restarts the countdown; the timer of the one it
/// replaced does nothing when it fires.
#[component]
pub fn ToastHost(toast: RwSignal<Option<Notification>>, ttl_ms: u32) -> impl IntoView {
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        if toast.with(Option::is_none) {
            return;
        }

        generation.update_value(|g| *g += 1);
        let shown = generation.get_value();
        set_timeout(
            move || {
                if generation.get_value() == shown {
                    toast.set(None);
                }
            },
            Duration::from_millis(u64::from(ttl_ms)),
        );
    });

    view! {
        <div class="fixed top-24 right-6 z-[60]" aria-live="polite">
            {move || {
                toast
                    .get()
                    .map(|n| {
                        view! {
                            <div
                                class=format!("toast toast-{} rounded-lg shadow-xl px-5 py-4 text-sm font-medium", n.level().as_class())
                                role="status"
                                data-testid="toast"
                            >
                                {n.message().to_owned()}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
