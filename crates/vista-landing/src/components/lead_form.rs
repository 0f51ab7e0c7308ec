//! The contact form, bound to a [`LeadFormController`].
//!
//! The controller lives in one signal. A submit runs its first phase
//! synchronously, sends the payload from a local task, then settles the
//! second phase on the same signal. Every toast it raises goes through
//! the [`ToastHost`].

use leptos::{prelude::*, task::spawn_local};
use vista_leads::{
    BeginSubmit, Field, HttpLeadSink, LeadFormConfig, LeadFormController, LeadSink, Notification,
};

use crate::{components::toast::ToastHost, effects::FORM_ID};

const CONSENT: &str = "I authorise Agrocorp Landbase & its representatives to contact me with updates and notifications via email/sms/What'sApp/call. This will override DND/NDNC.";

fn build_sink(config: &LeadFormConfig) -> Option<HttpLeadSink> {
    let origin = window().location().origin().ok();
    let base = match (&config.api_base, &origin) {
        (Some(base), _) => base.as_str(),
        (None, Some(origin)) => origin.as_str(),
        (None, None) => {
            log::error!("no API base configured and no page origin");
            return None;
        }
    };

    match HttpLeadSink::new(base) {
        Ok(sink) => {
            log::info!("lead form posting to {}", sink.endpoint());
            Some(sink)
        }
        Err(err) => {
            log::error!("lead form disabled: {err}");
            None
        }
    }
}

#[component]
pub fn LeadForm() -> impl IntoView {
    let config = use_context::<LeadFormConfig>().unwrap_or_default();
    let ttl_ms = config.notification_ttl_ms;

    let sink = StoredValue::new_local(build_sink(&config));
    let form = RwSignal::new(LeadFormController::new(config));
    let toast = RwSignal::new(None::<Notification>);

    let raise_toast = move || {
        if let Some(n) = form.try_update(LeadFormController::take_notification).flatten() {
            toast.set(Some(n));
        }
    };

    let submitting = move || form.with(|f| f.state().is_submitting());
    let disabled = move || submitting() || sink.with_value(Option::is_none);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(sink) = sink.get_value() else {
            return;
        };
        let begin = form.try_update(LeadFormController::begin_submit);
        raise_toast();

        let Some(BeginSubmit::Send(payload)) = begin else {
            return;
        };

        spawn_local(async move {
            let result = sink.submit_lead(&payload).await;
            form.update(|f| {
                f.finish_submit(result);
            });
            raise_toast();
        });
    };

    view! {
        <form id=FORM_ID class="space-y-5" on:submit=on_submit data-testid="lead-form">
            <FieldInput form=form field=Field::Name label="Full Name" placeholder="Your name" input_type="text" />
            <FieldInput form=form field=Field::Email label="Email" placeholder="you@example.com" input_type="text" />
            <FieldInput form=form field=Field::Phone label="Phone" placeholder="+91 98765 43210" input_type="tel" />

            <div>
                <label for="message" class="block text-sm font-medium text-slate-700 mb-2">"Message (optional)"</label>
                <textarea
                    id="message"
                    name="message"
                    rows="3"
                    class="w-full p-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-olive-600"
                    placeholder="Tell us what you are looking for"
                    prop:value=move || form.with(|f| f.value(Field::Note).to_owned())
                    prop:disabled=submitting
                    on:input=move |ev| {
                        form.update(|f| {
                            f.edit(Field::Note, event_target_value(&ev));
                        });
                    }
                ></textarea>
            </div>

            <div class="flex items-start gap-3">
                <input id="consent" name="consent" type="checkbox" required class="mt-1 w-4 h-4 rounded border-gray-300" />
                <label for="consent" class="text-xs text-slate-500 leading-relaxed">{CONSENT}</label>
            </div>

            <button
                type="submit"
                class="w-full farmland-button text-white font-semibold py-4 rounded-lg disabled:opacity-60"
                disabled=disabled
                data-testid="lead-form-submit"
            >
                {move || if submitting() { "Submitting..." } else { "Get Investment Strategy" }}
            </button>
        </form>

        <ToastHost toast=toast ttl_ms=ttl_ms />
    }
}

/// A labelled input with its inline error.
#[component]
fn FieldInput(
    form: RwSignal<LeadFormController>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    let error = move || form.with(|f| f.error_message(field));

    view! {
        <div>
            <label for=field.as_str() class="block text-sm font-medium text-slate-700 mb-2">{label}</label>
            <input
                id=field.as_str()
                name=field.as_str()
                type=input_type
                placeholder=placeholder
                class=move || {
                    if error().is_some() {
                        "w-full p-3 border border-red-500 rounded-lg focus:ring-2 focus:ring-red-500"
                    } else {
                        "w-full p-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-olive-600"
                    }
                }
                prop:value=move || form.with(|f| f.value(field).to_owned())
                prop:disabled=move || form.with(|f| f.state().is_submitting())
                on:input=move |ev| {
                    form.update(|f| {
                        f.edit(field, event_target_value(&ev));
                    });
                }
            />
            {move || error().map(|message| view! { <p class="mt-1 text-sm text-red-600">{message}</p> })}
        </div>
    }
}
