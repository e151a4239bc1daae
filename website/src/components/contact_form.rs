use folio_app::contact::{
    ContactFields, ContactForm, Field, LocalContactSubmitter, SubmitStatus, SIMULATED_DELIVERY,
};
use folio_app::toast::{ToastKind, ToastQueue};
use folio_core::prelude::*;
use leptos::ev;
use leptos::prelude::*;

use crate::dom;

/// Stand-in delivery: waits like a network call would, then succeeds
pub struct SimulatedSubmitter;

impl LocalContactSubmitter for SimulatedSubmitter {
    async fn deliver(&self, message: &ContactFields) -> Result<()> {
        dom::sleep(SIMULATED_DELIVERY).await?;
        info!("Contact form submitted by {} <{}>", message.name, message.email);
        Ok(())
    }
}

struct FieldSpec {
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
}

static FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        field: Field::Name,
        label: "Name *",
        input_type: "text",
        placeholder: "Your full name",
    },
    FieldSpec {
        field: Field::Email,
        label: "Email *",
        input_type: "email",
        placeholder: "your.email@example.com",
    },
    FieldSpec {
        field: Field::Subject,
        label: "Subject *",
        input_type: "text",
        placeholder: "What's this about?",
    },
    FieldSpec {
        field: Field::Message,
        label: "Message *",
        input_type: "textarea",
        placeholder: "Tell me about your project or just say hello!",
    },
];

#[component]
fn FormField(spec: &'static FieldSpec, form: RwSignal<ContactForm>) -> impl IntoView {
    let field = spec.field;
    let value = move || form.with(|f| f.fields.get(field).to_string());
    let error = move || form.with(|f| f.error(field)).map(|e| e.to_string());
    let disabled = move || form.with(|f| f.is_submitting());
    let on_input = move |event: ev::Event| {
        let value = event_target_value(&event);
        form.update(|f| f.set_field(field, value));
    };

    let control = if spec.input_type == "textarea" {
        view! {
            <textarea
                id=field.key()
                name=field.key()
                class="contact-form__textarea"
                class=("contact-form__textarea--error", move || error().is_some())
                placeholder=spec.placeholder
                rows=5
                prop:value=value
                on:input=on_input
                disabled=disabled
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=spec.input_type
                id=field.key()
                name=field.key()
                class="contact-form__input"
                class=("contact-form__input--error", move || error().is_some())
                placeholder=spec.placeholder
                prop:value=value
                on:input=on_input
                disabled=disabled
            />
        }
        .into_any()
    };

    view! {
        <div class="contact-form__field">
            <label for=field.key() class="contact-form__label">{spec.label}</label>
            {control}
            {move || error().map(|message| view! { <span class="contact-form__error-text">{message}</span> })}
        </div>
    }
}

#[component]
pub fn ContactFormView(toasts: RwSignal<ToastQueue>) -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let status = move || form.with(|f| f.status());
    let submitting = move || form.with(|f| f.is_submitting());

    let on_submit = move |event: ev::SubmitEvent| {
        event.prevent_default();
        let Some(payload) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome = SimulatedSubmitter.deliver(&payload).await;
            form.update(|f| f.finish_submit(outcome));
            let (kind, message) = match form.with_untracked(|f| f.status()) {
                SubmitStatus::Success => (ToastKind::Success, "Message sent"),
                _ => (ToastKind::Error, "Message could not be sent"),
            };
            toasts.update(|queue| {
                queue.push(kind, message);
            });
        });
    };

    view! {
        <div class="contact-form">
            <h4 class="contact-form__title">"Send me a message"</h4>

            <Show when=move || status() == SubmitStatus::Success>
                <div class="contact-form__success">
                    <span class="contact-form__success-icon">"✅"</span>
                    <p>"Thank you! Your message has been sent successfully."</p>
                </div>
            </Show>
            <Show when=move || status() == SubmitStatus::Error>
                <div class="contact-form__error">
                    <span class="contact-form__error-icon">"❌"</span>
                    <p>"Sorry, there was an error sending your message. Please try again."</p>
                </div>
            </Show>

            <form class="contact-form__form" on:submit=on_submit novalidate=true>
                {FIELDS
                    .iter()
                    .map(|spec| view! { <FormField spec=spec form=form /> })
                    .collect_view()}

                <button type="submit" class="contact-form__submit" disabled=submitting>
                    {move || {
                        if submitting() {
                            view! {
                                <span class="contact-form__spinner"></span>
                                "Sending..."
                            }
                                .into_any()
                        } else {
                            view! {
                                <span class="contact-form__submit-icon">"🚀"</span>
                                "Send Message"
                            }
                                .into_any()
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
