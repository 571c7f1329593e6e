use yew::prelude::*;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::config::{FORM_SEND_DELAY_MS, SUCCESS_DISMISS_MS};
use crate::content::INQUIRIES;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub inquiry: String,
    pub message: String,
}

pub fn validate(submission: &ContactSubmission) -> Result<(), FormError> {
    let fields = [
        &submission.name,
        &submission.email,
        &submission.inquiry,
        &submission.message,
    ];
    if fields.iter().any(|field| field.is_empty()) {
        return Err(FormError::MissingField);
    }
    if !is_valid_email(&submission.email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Error,
    Info,
    Success,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
            NoticeKind::Success => "success",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct FormNotice {
    pub text: String,
    pub kind: NoticeKind,
    generation: u32,
}

/// Everything the contact form shows. Kept apart from the component so the
/// submit flow can be driven without a browser.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct FormState {
    pub submission: ContactSubmission,
    pub phase: FormPhase,
    pub notice: Option<FormNotice>,
    generation: u32,
}

impl FormState {
    fn show(&mut self, kind: NoticeKind, text: String) -> u32 {
        self.generation += 1;
        self.notice = Some(FormNotice {
            text,
            kind,
            generation: self.generation,
        });
        self.generation
    }

    /// Validates the current fields. On success the form moves to `Sending`
    /// and the submitter's name is returned for the confirmation.
    pub fn submit(&mut self) -> Result<String, FormError> {
        match validate(&self.submission) {
            Ok(()) => {
                self.phase = FormPhase::Sending;
                self.show(NoticeKind::Info, "Sending...".to_string());
                Ok(self.submission.name.clone())
            }
            Err(e) => {
                self.phase = FormPhase::Idle;
                self.show(NoticeKind::Error, e.to_string());
                Err(e)
            }
        }
    }

    /// Marks the submission delivered and clears the fields. Returns the
    /// generation of the success notice for its dismiss timer.
    pub fn sent(&mut self, name: &str) -> u32 {
        self.phase = FormPhase::Sent;
        self.submission = ContactSubmission::default();
        self.show(
            NoticeKind::Success,
            format!(
                "Thanks {}! Your message has been sent. We'll respond within 24 hours.",
                name
            ),
        )
    }

    /// Hides the success notice of `generation` if it is still the one shown.
    pub fn dismiss(&mut self, generation: u32) -> bool {
        match &self.notice {
            Some(notice) if notice.generation == generation && notice.kind == NoticeKind::Success => {
                self.notice = None;
                true
            }
            _ => false,
        }
    }
}

pub enum ContactMsg {
    SetName(String),
    SetEmail(String),
    SetInquiry(String),
    SetMessage(String),
    Submit,
    Sent(String),
    Dismiss(u32),
}

pub struct ContactForm {
    state: FormState,
}

impl Component for ContactForm {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: FormState::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::SetName(name) => {
                self.state.submission.name = name;
                true
            }
            ContactMsg::SetEmail(email) => {
                self.state.submission.email = email;
                true
            }
            ContactMsg::SetInquiry(inquiry) => {
                self.state.submission.inquiry = inquiry;
                true
            }
            ContactMsg::SetMessage(message) => {
                self.state.submission.message = message;
                true
            }
            ContactMsg::Submit => {
                if self.state.phase == FormPhase::Sending {
                    return false;
                }
                match self.state.submit() {
                    Ok(name) => {
                        info!("Contact form submitted ({})", self.state.submission.inquiry);
                        ctx.link().send_future(async move {
                            TimeoutFuture::new(FORM_SEND_DELAY_MS).await;
                            ContactMsg::Sent(name)
                        });
                    }
                    Err(e) => debug!("Contact form rejected: {}", e),
                }
                true
            }
            ContactMsg::Sent(name) => {
                let generation = self.state.sent(&name);
                ctx.link().send_future(async move {
                    TimeoutFuture::new(SUCCESS_DISMISS_MS).await;
                    ContactMsg::Dismiss(generation)
                });
                true
            }
            ContactMsg::Dismiss(generation) => self.state.dismiss(generation),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let submission = &self.state.submission;
        let sending = self.state.phase == FormPhase::Sending;

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });

        html! {
            <form id="contactForm" class="contact-form" {onsubmit}>
                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input
                        type="text"
                        id="name"
                        placeholder="Your name"
                        value={submission.name.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            ContactMsg::SetName(input.value())
                        })}
                    />
                </div>

                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        placeholder="you@nyu.edu"
                        value={submission.email.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            ContactMsg::SetEmail(input.value())
                        })}
                    />
                </div>

                <div class="form-group">
                    <label for="inquiry">{"Inquiry"}</label>
                    <select
                        id="inquiry"
                        onchange={ctx.link().callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            ContactMsg::SetInquiry(select.value())
                        })}
                    >
                        <option value="" selected={submission.inquiry.is_empty()}>
                            {"Select inquiry type"}
                        </option>
                        { for INQUIRIES.iter().map(|(value, label)| html! {
                            <option value={*value} selected={submission.inquiry == *value}>
                                {*label}
                            </option>
                        }) }
                    </select>
                </div>

                <div class="form-group">
                    <label for="message">{"Message"}</label>
                    <textarea
                        id="message"
                        rows="5"
                        placeholder="How can we help?"
                        value={submission.message.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            ContactMsg::SetMessage(input.value())
                        })}
                    />
                </div>

                <button type="submit" class="submit-btn" disabled={sending}>
                    { if sending { "Sending..." } else { "Send Message" } }
                </button>

                if let Some(notice) = &self.state.notice {
                    <div id="formMessage" class={classes!("form-message", notice.kind.class())}>
                        {&notice.text}
                    </div>
                }
            </form>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactSubmission {
        ContactSubmission {
            name: "Alice".to_string(),
            email: "a@b.com".to_string(),
            inquiry: "membership".to_string(),
            message: "When does the pool open?".to_string(),
        }
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@nyu.edu"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn every_field_is_required() {
        let clears: [fn(&mut ContactSubmission); 4] = [
            |s| s.name.clear(),
            |s| s.email.clear(),
            |s| s.inquiry.clear(),
            |s| s.message.clear(),
        ];
        for clear in clears {
            let mut submission = filled();
            clear(&mut submission);
            assert_eq!(validate(&submission), Err(FormError::MissingField));
        }
        assert_eq!(validate(&filled()), Ok(()));
    }

    #[test]
    fn missing_field_shows_error_and_keeps_fields() {
        let mut state = FormState::default();
        state.submission = filled();
        state.submission.message.clear();

        assert_eq!(state.submit(), Err(FormError::MissingField));
        assert_eq!(state.phase, FormPhase::Idle);
        let notice = state.notice.clone().expect("no notice");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Please fill in all fields");
        assert_eq!(state.submission.name, "Alice");
    }

    #[test]
    fn bad_email_is_reported() {
        let mut state = FormState::default();
        state.submission = filled();
        state.submission.email = "a@b".to_string();

        assert_eq!(state.submit(), Err(FormError::InvalidEmail));
        assert_eq!(
            state.notice.map(|n| n.text),
            Some("Please enter a valid email address".to_string())
        );
    }

    #[test]
    fn valid_submission_sends_then_confirms_and_resets() {
        let mut state = FormState::default();
        state.submission = filled();

        let name = state.submit().expect("valid submission");
        assert_eq!(state.phase, FormPhase::Sending);
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Info));

        state.sent(&name);
        assert_eq!(state.phase, FormPhase::Sent);
        assert_eq!(state.submission, ContactSubmission::default());
        let notice = state.notice.clone().expect("no notice");
        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(notice.text.contains("Alice"));
    }

    #[test]
    fn success_notice_is_dismissed_by_its_own_timer() {
        let mut state = FormState::default();
        state.submission = filled();
        let name = state.submit().unwrap();
        let generation = state.sent(&name);

        assert!(state.dismiss(generation));
        assert!(state.notice.is_none());
    }

    #[test]
    fn stale_dismiss_keeps_newer_notice() {
        let mut state = FormState::default();
        state.submission = filled();
        let name = state.submit().unwrap();
        let generation = state.sent(&name);

        // A new attempt replaces the success notice before its timer fires.
        assert!(state.submit().is_err());
        assert!(!state.dismiss(generation));
        assert_eq!(state.notice.map(|n| n.kind), Some(NoticeKind::Error));
    }

    #[test]
    fn error_and_info_notices_persist() {
        let mut state = FormState::default();
        let _ = state.submit();
        assert!(!state.dismiss(1));
        assert!(state.notice.is_some());
    }
}
