//! Contact Form Component
//!
//! Collects a message and posts it to the server.

use leptos::*;

use crate::api;
use crate::state::notify;
use crate::widgets::{ContactDraft, ContactField};

#[component]
pub fn ContactForm() -> impl IntoView {
    let draft = create_rw_signal(ContactDraft::default());
    let submitting = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);

        let payload = draft.get_untracked();
        spawn_local(async move {
            let outcome = api::submit_contact(&payload).await;
            draft.update(|d| d.apply(outcome));
            submitting.set(false);
            notify(outcome.notice());
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="grid md:grid-cols-2 gap-4">
                <FieldInput draft=draft field=ContactField::FirstName />
                <FieldInput draft=draft field=ContactField::LastName />
            </div>
            <FieldInput draft=draft field=ContactField::Email />
            <FieldInput draft=draft field=ContactField::Subject />
            <textarea
                name=ContactField::Message.name()
                placeholder=ContactField::Message.placeholder()
                rows="6"
                required=true
                prop:value=move || draft.with(|d| d.message.clone())
                on:input=move |ev| {
                    draft.update(|d| d.set(ContactField::Message, event_target_value(&ev)));
                }
                class="w-full px-4 py-3 bg-background border border-border rounded-md focus:outline-none focus:ring-2 focus:ring-primary resize-none"
            />
            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full px-6 py-3 bg-primary text-primary-foreground rounded-md font-medium hover:bg-primary/90 disabled:opacity-50"
            >
                {move || if submitting.get() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}

/// Single-line input bound to one draft field
#[component]
fn FieldInput(draft: RwSignal<ContactDraft>, field: ContactField) -> impl IntoView {
    view! {
        <input
            type=field.input_type()
            name=field.name()
            placeholder=field.placeholder()
            required=true
            prop:value=move || draft.with(|d| d.get(field).to_string())
            on:input=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
            class="w-full px-4 py-3 bg-background border border-border rounded-md focus:outline-none focus:ring-2 focus:ring-primary"
        />
    }
}
