//! The "hire me" intake form: draft validation, submission state and the
//! async submit driver shared by the browser and the tests.

use std::{borrow::Cow, cell::RefCell, collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::config::FALLBACK_CONTACT_EMAIL;

pub const CONTACT_ENDPOINT: &str = "/api/contact";
pub const SUBMIT_TIMEOUT_MS: u32 = 15_000;

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $missing:literal {
            $($variant:ident => $wire:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            fn check(value: &str) -> Result<(), ValidationError> {
                value.parse::<$name>().map(|_| ()).map_err(|_| {
                    ValidationError::new("choice").with_message(Cow::Borrowed($missing))
                })
            }
        }

        impl FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice_enum! {
    ProjectType, "Please select a project type" {
        AiApp => "ai-app", "AI App";
        Product => "product", "Product";
        Quant => "quant", "Quant";
        Music => "music", "Music";
        Other => "other", "Other";
    }
}

choice_enum! {
    Timeline, "Please select a timeline" {
        UnderOneMonth => "less-than-1-month", "<1 month";
        OneToThreeMonths => "1-3-months", "1-3 months";
        OverThreeMonths => "3-plus-months", "3+ months";
    }
}

choice_enum! {
    BudgetRange, "Please select a budget range" {
        FiveToFifteen => "5k-15k", "$5k-15k";
        FifteenToThirty => "15k-30k", "$15k-30k";
        ThirtyPlus => "30k-plus", "$30k+";
        Discuss => "discuss", "Let's discuss";
    }
}

fn check_project_type(value: &str) -> Result<(), ValidationError> {
    ProjectType::check(value)
}

fn check_timeline(value: &str) -> Result<(), ValidationError> {
    Timeline::check(value)
}

fn check_budget_range(value: &str) -> Result<(), ValidationError> {
    BudgetRange::check(value)
}

/// Input fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    ProjectType,
    Timeline,
    BudgetRange,
    Message,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Company,
        Field::ProjectType,
        Field::Timeline,
        Field::BudgetRange,
        Field::Message,
    ];

    /// Field name as it appears on [`IntakeDraft`].
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::ProjectType => "project_type",
            Field::Timeline => "timeline",
            Field::BudgetRange => "budget_range",
            Field::Message => "message",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// Raw form values, exactly as typed or selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct IntakeDraft {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
    pub company: String,
    #[validate(custom(function = "check_project_type"))]
    pub project_type: String,
    #[validate(custom(function = "check_timeline"))]
    pub timeline: String,
    #[validate(custom(function = "check_budget_range"))]
    pub budget_range: String,
    #[validate(length(min = 20, message = "Please provide at least 20 characters"))]
    pub message: String,
}

impl IntakeDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::ProjectType => &self.project_type,
            Field::Timeline => &self.timeline,
            Field::BudgetRange => &self.budget_range,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::ProjectType => &mut self.project_type,
            Field::Timeline => &mut self.timeline,
            Field::BudgetRange => &mut self.budget_range,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Validate and convert into the wire record.
    pub fn check(&self) -> Result<ContactSubmission, FieldErrors> {
        self.validate().map_err(FieldErrors::from)?;
        let choice_error = |field: Field| {
            let mut errors = FieldErrors::default();
            errors.insert(field, "Invalid selection");
            errors
        };
        let company = self.company.trim();
        Ok(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            company: (!company.is_empty()).then(|| company.to_string()),
            project_type: self
                .project_type
                .parse()
                .map_err(|_| choice_error(Field::ProjectType))?,
            timeline: self
                .timeline
                .parse()
                .map_err(|_| choice_error(Field::Timeline))?,
            budget_range: self
                .budget_range
                .parse()
                .map_err(|_| choice_error(Field::BudgetRange))?,
            message: self.message.clone(),
        })
    }
}

/// One message per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (key, errs) in errors.field_errors() {
            let key: &str = key.as_ref();
            let Some(field) = Field::from_key(key) else {
                continue;
            };
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Invalid value".to_string());
            out.insert(field, message);
        }
        out
    }
}

/// The record POSTed to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub project_type: ProjectType,
    pub timeline: Timeline,
    pub budget_range: BudgetRange,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("server rejected the submission with status {status}")]
    Rejected { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    TimedOut,
}

impl SubmitError {
    /// Banner text, always pointing at the manual fallback.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::TimedOut => format!(
                "The request timed out. Please try again or email me directly at {FALLBACK_CONTACT_EMAIL}"
            ),
            _ => format!(
                "Something went wrong. Please try again or email me directly at {FALLBACK_CONTACT_EMAIL}"
            ),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BeginError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("form was already sent")]
    AlreadySent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Success,
    Failed(SubmitError),
}

/// Form state machine.
///
/// `Editing -> Submitting -> Success | Failed`. A failed form keeps its
/// values and can be resubmitted; a successful one must be [`reset`].
///
/// [`reset`]: IntakeForm::reset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeForm {
    draft: IntakeDraft,
    phase: FormPhase,
    errors: FieldErrors,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(draft: IntakeDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &IntakeDraft {
        &self.draft
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.phase == FormPhase::Success
    }

    pub fn banner(&self) -> Option<String> {
        match &self.phase {
            FormPhase::Failed(err) => Some(err.user_message()),
            _ => None,
        }
    }

    /// Editing a field clears its stale error.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
        self.errors.remove(field);
    }

    /// Validate and move to `Submitting`. The returned record is what to send.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, BeginError> {
        match self.phase {
            FormPhase::Submitting => return Err(BeginError::InFlight),
            FormPhase::Success => return Err(BeginError::AlreadySent),
            FormPhase::Editing | FormPhase::Failed(_) => {}
        }
        match self.draft.check() {
            Ok(submission) => {
                self.errors = FieldErrors::default();
                self.phase = FormPhase::Submitting;
                Ok(submission)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(BeginError::Invalid(errors))
            }
        }
    }

    /// Record the outcome of the in-flight request. Ignored in any other phase.
    pub fn finish(&mut self, outcome: Result<(), SubmitError>) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        match outcome {
            Ok(()) => {
                self.draft = IntakeDraft::default();
                self.phase = FormPhase::Success;
            }
            Err(err) => self.phase = FormPhase::Failed(err),
        }
    }

    /// Leave the confirmation screen for a fresh form.
    pub fn reset(&mut self) {
        if self.phase == FormPhase::Success {
            *self = Self::default();
        }
    }
}

/// Sends a submission somewhere.
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmitError>;
}

/// Owner of an [`IntakeForm`] that may go away while a request is in flight.
pub trait IntakeStore {
    /// Run `f` against the form, or return `None` if it no longer exists.
    fn with_form<R>(&self, f: impl FnOnce(&mut IntakeForm) -> R) -> Option<R>;
}

impl IntakeStore for RefCell<IntakeForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut IntakeForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Blocked(BeginError),
    Sent,
    Failed(SubmitError),
    /// The form was torn down before the response arrived.
    Detached,
}

/// Validate and claim the form for sending. Call from the event handler so
/// the phase flips before any other event is processed.
pub fn start<S: IntakeStore>(store: &S) -> Result<ContactSubmission, SubmitOutcome> {
    match store.with_form(IntakeForm::begin_submit) {
        None => Err(SubmitOutcome::Detached),
        Some(Err(err)) => Err(SubmitOutcome::Blocked(err)),
        Some(Ok(submission)) => Ok(submission),
    }
}

/// Send a submission claimed by [`start`] and record the result, unless the
/// form is gone by then.
pub async fn deliver<S, T>(store: &S, transport: &T, submission: ContactSubmission) -> SubmitOutcome
where
    S: IntakeStore,
    T: ContactTransport,
{
    let result = transport.send(&submission).await;
    let outcome = match &result {
        Ok(()) => SubmitOutcome::Sent,
        Err(err) => SubmitOutcome::Failed(err.clone()),
    };
    match store.with_form(|form| form.finish(result)) {
        Some(()) => outcome,
        None => SubmitOutcome::Detached,
    }
}

/// Drive one submission: validate, send once, record the result.
///
/// The phase flips to `Submitting` before the first await, so a second call
/// made while the first is pending is refused without touching the transport.
pub async fn submit<S, T>(store: &S, transport: &T) -> SubmitOutcome
where
    S: IntakeStore,
    T: ContactTransport,
{
    match start(store) {
        Ok(submission) => deliver(store, transport, submission).await,
        Err(outcome) => outcome,
    }
}

/// Browser transport: `fetch` POST with a hard timeout.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy)]
pub struct FetchTransport {
    pub endpoint: &'static str,
    pub timeout_ms: u32,
}

#[cfg(feature = "hydrate")]
impl Default for FetchTransport {
    fn default() -> Self {
        Self {
            endpoint: CONTACT_ENDPOINT,
            timeout_ms: SUBMIT_TIMEOUT_MS,
        }
    }
}

#[cfg(feature = "hydrate")]
impl ContactTransport for FetchTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        use futures::future::{select, Either};
        use gloo_net::http::Request;
        use gloo_timers::future::TimeoutFuture;

        let request = Request::post(self.endpoint)
            .json(submission)
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        let response = Box::pin(request.send());
        let timeout = Box::pin(TimeoutFuture::new(self.timeout_ms));

        let result = match select(response, timeout).await {
            Either::Left((Ok(resp), _)) if resp.ok() => Ok(()),
            Either::Left((Ok(resp), _)) => Err(SubmitError::Rejected {
                status: resp.status(),
            }),
            Either::Left((Err(e), _)) => Err(SubmitError::Network(e.to_string())),
            Either::Right(_) => Err(SubmitError::TimedOut),
        };
        if let Err(err) = &result {
            log::warn!("contact submission failed: {err}");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn valid_draft() -> IntakeDraft {
        IntakeDraft {
            name: "Al".to_string(),
            email: "al@example.com".to_string(),
            company: String::new(),
            project_type: "ai-app".to_string(),
            timeline: "1-3-months".to_string(),
            budget_range: "15k-30k".to_string(),
            message: "I need a chat app shipped before the demo day.".to_string(),
        }
    }

    struct MockTransport {
        calls: Cell<usize>,
        sent: RefCell<Vec<ContactSubmission>>,
        outcome: Result<(), SubmitError>,
    }

    impl MockTransport {
        fn returning(outcome: Result<(), SubmitError>) -> Self {
            Self {
                calls: Cell::new(0),
                sent: RefCell::new(Vec::new()),
                outcome,
            }
        }
    }

    impl ContactTransport for MockTransport {
        async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            self.sent.borrow_mut().push(submission.clone());
            // stay pending for one poll, like a real request
            tokio::task::yield_now().await;
            self.outcome.clone()
        }
    }

    /// A store whose view is torn down during the request.
    struct UnmountingStore {
        form: RefCell<IntakeForm>,
        alive: Cell<bool>,
    }

    impl IntakeStore for UnmountingStore {
        fn with_form<R>(&self, f: impl FnOnce(&mut IntakeForm) -> R) -> Option<R> {
            if !self.alive.get() {
                return None;
            }
            let out = f(&mut self.form.borrow_mut());
            // the first access is the click handler; navigation follows
            self.alive.set(false);
            Some(out)
        }
    }

    #[test]
    fn test_valid_draft_converts() {
        let submission = valid_draft().check().expect("valid draft");
        assert_eq!(submission.project_type, ProjectType::AiApp);
        assert_eq!(submission.timeline, Timeline::OneToThreeMonths);
        assert_eq!(submission.budget_range, BudgetRange::FifteenToThirty);
        assert_eq!(submission.company, None);
    }

    #[test]
    fn test_each_rule_reports_its_own_field() {
        let draft = IntakeDraft {
            name: "A".to_string(),
            email: "bad-email".to_string(),
            company: "anything goes".to_string(),
            project_type: String::new(),
            timeline: "next-week".to_string(),
            budget_range: "1m".to_string(),
            message: "too short".to_string(),
        };
        let errors = draft.check().unwrap_err();
        assert_eq!(errors.len(), 6);
        assert!(errors.get(Field::Company).is_none());
        assert_eq!(
            errors.get(Field::Name),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(errors.get(Field::Email), Some("Please enter a valid email"));
        assert_eq!(
            errors.get(Field::ProjectType),
            Some("Please select a project type")
        );
        assert_eq!(errors.get(Field::Timeline), Some("Please select a timeline"));
        assert_eq!(
            errors.get(Field::BudgetRange),
            Some("Please select a budget range")
        );
        assert_eq!(
            errors.get(Field::Message),
            Some("Please provide at least 20 characters")
        );
    }

    #[test]
    fn test_lengths_count_characters() {
        let mut draft = valid_draft();
        draft.name = "Zoë".to_string();
        draft.message = "é".repeat(20);
        assert!(draft.check().is_ok());
        draft.message = "é".repeat(19);
        assert!(draft.check().is_err());
    }

    #[test]
    fn test_wire_format() {
        let mut draft = valid_draft();
        draft.company = "  Acme  ".to_string();
        let json = serde_json::to_value(draft.check().expect("valid")).expect("serializes");
        assert_eq!(json["projectType"], "ai-app");
        assert_eq!(json["timeline"], "1-3-months");
        assert_eq!(json["budgetRange"], "15k-30k");
        assert_eq!(json["company"], "Acme");

        let bare = serde_json::to_value(valid_draft().check().expect("valid")).expect("serializes");
        assert!(bare.get("company").is_none());
    }

    #[test]
    fn test_choice_wire_names() {
        let timelines = Timeline::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>();
        assert_eq!(
            timelines,
            vec!["less-than-1-month", "1-3-months", "3-plus-months"]
        );
        let budgets = BudgetRange::ALL.iter().map(|b| b.as_str()).collect::<Vec<_>>();
        assert_eq!(budgets, vec!["5k-15k", "15k-30k", "30k-plus", "discuss"]);
        assert_eq!(ProjectType::ALL.len(), 5);
        assert_eq!("other".parse::<ProjectType>(), Ok(ProjectType::Other));
    }

    #[tokio::test]
    async fn test_invalid_email_makes_no_request() {
        let mut draft = valid_draft();
        draft.email = "bad-email".to_string();
        let store = RefCell::new(IntakeForm::with_draft(draft));
        let transport = MockTransport::returning(Ok(()));

        let outcome = submit(&store, &transport).await;

        assert!(matches!(outcome, SubmitOutcome::Blocked(BeginError::Invalid(_))));
        assert_eq!(transport.calls.get(), 0);
        let form = store.borrow();
        assert_eq!(form.phase(), &FormPhase::Editing);
        assert_eq!(form.error_for(Field::Email), Some("Please enter a valid email"));
        assert_eq!(form.error_for(Field::Name), None);
    }

    #[tokio::test]
    async fn test_valid_submission_posts_once_and_clears() {
        let store = RefCell::new(IntakeForm::with_draft(valid_draft()));
        let transport = MockTransport::returning(Ok(()));

        let outcome = submit(&store, &transport).await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(transport.sent.borrow()[0].name, "Al");
        let form = store.borrow();
        assert!(form.is_success());
        assert_eq!(form.draft(), &IntakeDraft::default());
    }

    #[tokio::test]
    async fn test_double_submit_sends_one_request() {
        let store = RefCell::new(IntakeForm::with_draft(valid_draft()));
        let transport = MockTransport::returning(Ok(()));

        let (first, second) = tokio::join!(submit(&store, &transport), submit(&store, &transport));

        assert_eq!(first, SubmitOutcome::Sent);
        assert_eq!(second, SubmitOutcome::Blocked(BeginError::InFlight));
        assert_eq!(transport.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_failure_keeps_values_and_allows_retry() {
        let store = RefCell::new(IntakeForm::with_draft(valid_draft()));
        let failing = MockTransport::returning(Err(SubmitError::Rejected { status: 500 }));

        let outcome = submit(&store, &failing).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(SubmitError::Rejected { status: 500 })
        );
        {
            let form = store.borrow();
            assert_eq!(form.draft(), &valid_draft());
            let banner = form.banner().expect("banner shown");
            assert!(banner.contains(FALLBACK_CONTACT_EMAIL));
            assert!(!form.is_submitting());
        }

        let working = MockTransport::returning(Ok(()));
        assert_eq!(submit(&store, &working).await, SubmitOutcome::Sent);
        assert!(store.borrow().is_success());
    }

    #[tokio::test]
    async fn test_timeout_is_distinct() {
        let store = RefCell::new(IntakeForm::with_draft(valid_draft()));
        let transport = MockTransport::returning(Err(SubmitError::TimedOut));

        submit(&store, &transport).await;

        let form = store.borrow();
        assert_eq!(form.phase(), &FormPhase::Failed(SubmitError::TimedOut));
        assert!(form.banner().expect("banner").contains("timed out"));
    }

    #[tokio::test]
    async fn test_unmounted_form_is_not_written() {
        let store = UnmountingStore {
            form: RefCell::new(IntakeForm::with_draft(valid_draft())),
            alive: Cell::new(true),
        };
        let transport = MockTransport::returning(Ok(()));

        let outcome = submit(&store, &transport).await;

        assert_eq!(outcome, SubmitOutcome::Detached);
        assert_eq!(transport.calls.get(), 1);
        // still mid-flight from the view's point of view: nothing was applied
        assert!(store.form.borrow().is_submitting());
    }

    #[tokio::test]
    async fn test_start_claims_form_before_sending() {
        let store = RefCell::new(IntakeForm::with_draft(valid_draft()));
        let submission = start(&store).expect("valid");
        assert!(store.borrow().is_submitting());
        assert_eq!(
            start(&store),
            Err(SubmitOutcome::Blocked(BeginError::InFlight))
        );

        let transport = MockTransport::returning(Ok(()));
        assert_eq!(
            deliver(&store, &transport, submission).await,
            SubmitOutcome::Sent
        );
        assert_eq!(transport.calls.get(), 1);
    }

    #[test]
    fn test_success_needs_explicit_reset() {
        let mut form = IntakeForm::with_draft(valid_draft());
        form.begin_submit().expect("valid");
        form.finish(Ok(()));
        assert_eq!(form.begin_submit(), Err(BeginError::AlreadySent));

        form.reset();
        assert_eq!(form, IntakeForm::new());
    }

    #[test]
    fn test_stray_finish_is_ignored() {
        let mut form = IntakeForm::with_draft(valid_draft());
        form.finish(Ok(()));
        assert_eq!(form.phase(), &FormPhase::Editing);
        assert_eq!(form.draft(), &valid_draft());
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut form = IntakeForm::new();
        assert!(form.begin_submit().is_err());
        assert!(form.error_for(Field::Name).is_some());
        form.set_field(Field::Name, "Ani".to_string());
        assert!(form.error_for(Field::Name).is_none());
        assert_eq!(form.draft().get(Field::Name), "Ani");
        assert!(form.error_for(Field::Email).is_some());
    }
}
