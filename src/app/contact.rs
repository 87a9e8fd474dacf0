use leptos::{ev::SubmitEvent, prelude::*};
use leptos_meta::Title;

use crate::config::FALLBACK_CONTACT_EMAIL;
use crate::intake::{
    start, BudgetRange, Field, IntakeForm, IntakeStore, ProjectType, Timeline,
};

/// The signal is the form for as long as its owner is mounted.
impl IntakeStore for RwSignal<IntakeForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut IntakeForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border bg-background text-foreground placeholder-muted-foreground focus:outline-none focus:ring-2 focus:ring-accent transition-all duration-200";

fn input_class(form: RwSignal<IntakeForm>, field: Field) -> impl Fn() -> String + Copy {
    move || {
        let border = if form.with(|f| f.error_for(field).is_some()) {
            "border-red-500"
        } else {
            "border-border"
        };
        format!("{INPUT_CLASS} {border}")
    }
}

#[component]
fn FieldError(form: RwSignal<IntakeForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.error_for(field).map(str::to_string))
            .map(|message| view! { <p class="mt-1 text-sm text-red-500">{message}</p> })
    }
}

#[component]
fn ChoiceField(
    form: RwSignal<IntakeForm>,
    field: Field,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block mb-2 text-sm font-medium text-foreground">
                {label}
            </label>
            <select
                id=id
                class=input_class(form, field)
                prop:value=move || form.with(|f| f.draft().get(field).to_string())
                on:change=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            >
                <option value="">{placeholder}</option>
                {options
                    .into_iter()
                    .map(|(value, text)| view! { <option value=value>{text}</option> })
                    .collect_view()}
            </select>
            <FieldError form=form field=field />
        </div>
    }
}

#[component]
fn TextField(
    form: RwSignal<IntakeForm>,
    field: Field,
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block mb-2 text-sm font-medium text-foreground">
                {label}
            </label>
            <input
                type=kind
                id=id
                placeholder=placeholder
                class=input_class(form, field)
                prop:value=move || form.with(|f| f.draft().get(field).to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
            <FieldError form=form field=field />
        </div>
    }
}

#[component]
pub fn IntakeFormView() -> impl IntoView {
    let form = RwSignal::new(IntakeForm::new());
    let submitting = move || form.with(IntakeForm::is_submitting);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // the form is already Submitting here, before anything is sent
        match start(&form) {
            #[cfg(feature = "hydrate")]
            Ok(submission) => leptos::task::spawn_local(async move {
                use crate::intake::{deliver, FetchTransport};
                let outcome = deliver(&form, &FetchTransport::default(), submission).await;
                log::info!("contact submission finished: {outcome:?}");
            }),
            // submit events only fire in the browser
            #[cfg(not(feature = "hydrate"))]
            Ok(_) => {}
            Err(outcome) => log::debug!("submission not started: {outcome:?}"),
        }
    };

    let success = move || {
        view! {
            <div class="py-16 mx-auto space-y-6 max-w-2xl text-center">
                <div class="flex justify-center items-center mx-auto w-16 h-16 text-3xl rounded-full bg-accent/10 text-accent">
                    "✓"
                </div>
                <h3 class="font-serif text-3xl font-bold text-foreground">
                    "Thanks for reaching out!"
                </h3>
                <p class="text-lg text-muted-foreground">
                    "I'll review your message and get back to you within 48 hours."
                </p>
                <button
                    class="py-3 px-6 font-semibold rounded-lg border-2 transition-all duration-200 border-border hover:border-accent hover:text-accent"
                    on:click=move |_| form.update(IntakeForm::reset)
                >
                    "Submit another inquiry"
                </button>
            </div>
        }
    };

    view! {
        <Show when=move || !form.with(IntakeForm::is_success) fallback=success>
            <form class="mx-auto space-y-6 max-w-2xl" on:submit=on_submit novalidate=true>
                <TextField
                    form=form
                    field=Field::Name
                    id="name"
                    label="Name *"
                    placeholder="Your full name"
                />
                <TextField
                    form=form
                    field=Field::Email
                    id="email"
                    label="Email *"
                    kind="email"
                    placeholder="your@email.com"
                />
                <TextField
                    form=form
                    field=Field::Company
                    id="company"
                    label="Company (optional)"
                    placeholder="Your company"
                />
                <ChoiceField
                    form=form
                    field=Field::ProjectType
                    id="projectType"
                    label="Project Type *"
                    placeholder="Select a type"
                    options=ProjectType::ALL.iter().map(|c| (c.as_str(), c.label())).collect()
                />
                <ChoiceField
                    form=form
                    field=Field::Timeline
                    id="timeline"
                    label="Timeline *"
                    placeholder="Select a timeline"
                    options=Timeline::ALL.iter().map(|c| (c.as_str(), c.label())).collect()
                />
                <ChoiceField
                    form=form
                    field=Field::BudgetRange
                    id="budgetRange"
                    label="Budget Range *"
                    placeholder="Select a budget range"
                    options=BudgetRange::ALL.iter().map(|c| (c.as_str(), c.label())).collect()
                />
                <div>
                    <label for="message" class="block mb-2 text-sm font-medium text-foreground">
                        "Tell me about your project *"
                    </label>
                    <textarea
                        id="message"
                        rows="6"
                        placeholder="What are you building? What's the goal? Any specific features or requirements?"
                        class=input_class(form, Field::Message)
                        prop:value=move || form.with(|f| f.draft().message.clone())
                        on:input=move |ev| {
                            form.update(|f| f.set_field(Field::Message, event_target_value(&ev)))
                        }
                    />
                    <FieldError form=form field=Field::Message />
                </div>
                {move || {
                    form.with(IntakeForm::banner)
                        .map(|banner| {
                            view! {
                                <div class="p-4 text-sm text-red-500 rounded-lg border border-red-500/30 bg-red-500/10">
                                    {banner}
                                </div>
                            }
                        })
                }}
                <button
                    type="submit"
                    disabled=submitting
                    class="flex gap-2 justify-center items-center py-4 px-8 w-full font-semibold rounded-lg transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed bg-accent text-accent-foreground hover:bg-accent/90"
                >
                    {move || {
                        if submitting() {
                            view! {
                                <span class="w-5 h-5 rounded-full border-2 animate-spin border-accent-foreground/30 border-t-accent-foreground" />
                                "Sending..."
                            }
                                .into_any()
                        } else {
                            view! { "Send message →" }.into_any()
                        }
                    }}
                </button>
                <p class="text-sm text-center text-muted-foreground">
                    "I typically respond within 48 hours. For urgent inquiries, email me at "
                    <a
                        href=format!("mailto:{FALLBACK_CONTACT_EMAIL}")
                        class="transition-colors text-accent hover:text-accent/80"
                    >
                        {FALLBACK_CONTACT_EMAIL}
                    </a>
                </p>
            </form>
        </Show>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <div class="py-16 px-4 pt-24 mx-auto max-w-7xl sm:px-6 lg:px-8">
            <div class="mb-12 space-y-4 text-center">
                <h1 class="text-4xl font-bold md:text-6xl text-foreground">"Let's talk"</h1>
                <p class="mx-auto max-w-2xl text-xl text-muted-foreground">
                    "Tell me your idea, timeline, and budget. I'll reply within 48 hours."
                </p>
            </div>
            <IntakeFormView />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_store_claims_form_on_start() {
        let owner = Owner::new();
        let form = owner.with(|| RwSignal::new(IntakeForm::new()));
        form.update(|f| {
            f.set_field(Field::Name, "Ada Lovelace".into());
            f.set_field(Field::Email, "ada@example.com".into());
            f.set_field(Field::ProjectType, "ai-app".into());
            f.set_field(Field::Timeline, "1-3-months".into());
            f.set_field(Field::BudgetRange, "discuss".into());
            f.set_field(Field::Message, "An analytics engine for a small team.".into());
        });

        let submission = start(&form).expect("valid draft starts");

        assert_eq!(submission.name, "Ada Lovelace");
        assert!(form.with_untracked(IntakeForm::is_submitting));
        assert!(start(&form).is_err());
        owner.cleanup();
    }

    #[test]
    fn test_disposed_signal_is_not_a_store() {
        let owner = Owner::new();
        let form = owner.with(|| RwSignal::new(IntakeForm::new()));
        assert_eq!(form.with_form(|f| f.is_submitting()), Some(false));

        owner.cleanup();

        assert_eq!(form.with_form(|f| f.set_field(Field::Name, "x".into())), None);
    }
}
