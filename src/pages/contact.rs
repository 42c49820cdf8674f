/// Contact page: relocation badge, contact items and the message form
///
/// The form never talks to a server. Submitting a valid form clears it
/// and shows a confirmation for three seconds.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use iced::widget::{button, column, container, row, text, text_input, Column};
use iced::{Alignment, Element, Length, Task};

use super::Context;
use crate::color::chrome;
use crate::ui::{page_header, style, widgets};
use crate::Message;

pub const HEADING: &str = "Get in Touch";

/// How long "Message Sent!" stays up
pub const CONFIRMATION: Duration = Duration::from_secs(3);

/// Process-wide ticket source, so a timer from an earlier form (or an
/// earlier mount of this page) never matches a newer submission
static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    /// Ticket of the submission currently being confirmed
    confirming: Option<u64>,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Message => self.message = value,
        }
    }

    /// Required fields are filled and the email looks like an address
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.message.trim().is_empty() && is_email(&self.email)
    }

    pub fn is_submitted(&self) -> bool {
        self.confirming.is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.is_submitted()
    }

    /// Accept the form if it can be submitted
    ///
    /// Clears every field and returns the ticket the confirmation timer
    /// must present to end the confirmation.
    pub fn submit(&mut self) -> Option<u64> {
        if !self.can_submit() {
            return None;
        }

        let ticket = NEXT_TICKET.fetch_add(1, Ordering::Relaxed);
        tracing::info!(
            ticket,
            name_len = self.name.len(),
            email_len = self.email.len(),
            company_len = self.company.len(),
            message_len = self.message.len(),
            "contact form submitted"
        );

        *self = Self {
            confirming: Some(ticket),
            ..Self::default()
        };
        Some(ticket)
    }

    /// End the confirmation started by `ticket`. Stale tickets are ignored.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if self.confirming == Some(ticket) {
            self.confirming = None;
            true
        } else {
            tracing::debug!(ticket, "ignoring stale confirmation timer");
            false
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitted() {
            "Message Sent!"
        } else {
            "Send Message"
        }
    }
}

/// `local@domain`: one `@`, both sides non-empty, no whitespace, and a
/// domain that neither starts nor ends with a dot
pub fn is_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
}

/// Sleep out the confirmation window, then hand back the ticket
pub async fn confirmation_elapsed(ticket: u64) -> u64 {
    tokio::time::sleep(CONFIRMATION).await;
    ticket
}

/// Timer that ends the confirmation for `ticket`
pub fn confirmation_timer(ticket: u64) -> Task<Message> {
    Task::perform(confirmation_elapsed(ticket), Message::ContactConfirmationElapsed)
}

pub fn view<'a>(form: &'a ContactForm, ctx: &Context<'a>) -> Element<'a, Message> {
    let personal = &ctx.content.resume.personal;

    let mut info = Column::new().spacing(16).width(Length::Fill);
    if personal.open_to_relocate {
        info = info.push(widgets::pill("● Open to Relocate", chrome::TEAL_400));
    }
    info = info
        .push(widgets::strong("Ready for your next data engineering challenge", 24))
        .push(widgets::muted(
            "I'm always interested in hearing about new opportunities in data engineering, \
             cloud architecture, and building scalable data platforms. Whether you're looking \
             for a senior individual contributor or a technical lead, let's connect.",
        ));

    let items = [
        ("✉", "Email", &personal.email, true),
        ("☏", "Phone", &personal.phone, true),
        ("in", "LinkedIn", &personal.linkedin, true),
        ("⌖", "Location", &personal.location, false),
    ];
    for (glyph, label, value, copyable) in items {
        let body = row![
            container(text(glyph).size(18).color(chrome::ACCENT_400.color()))
                .width(48)
                .height(48)
                .center_x(48)
                .center_y(48)
                .style(style::washed(style::BRAND)),
            column![
                text(label).size(13).color(chrome::SLATE_500.color()),
                text(value.as_str()).font(style::SEMIBOLD).color(chrome::WHITE.color()),
            ]
            .spacing(2),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        let item: Element<'a, Message> = if copyable {
            button(body)
                .padding(16)
                .width(Length::Fill)
                .style(style::card_button)
                .on_press(Message::CopyToClipboard(value.clone()))
                .into()
        } else {
            widgets::card(body).padding(16).into()
        };
        info = info.push(item);
    }

    let form_card = widgets::card(
        column![
            labeled_input("Name *", "Your name", &form.name, Field::Name),
            labeled_input("Email *", "your@email.com", &form.email, Field::Email),
            labeled_input("Company", "Your company", &form.company, Field::Company),
            labeled_input("Message *", "Tell me about your opportunity...", &form.message, Field::Message),
            button(
                text(form.submit_label())
                    .font(style::SEMIBOLD)
                    .width(Length::Fill)
                    .align_x(Alignment::Center),
            )
            .padding(14)
            .width(Length::Fill)
            .style(style::primary)
            .on_press_maybe(form.can_submit().then_some(Message::SubmitContact)),
        ]
        .spacing(20),
    )
    .padding(32);

    let body: Element<'a, Message> = if ctx.wide {
        row![info, form_card].spacing(64).into()
    } else {
        column![info, form_card].spacing(40).into()
    };

    widgets::section(column![
        page_header(
            HEADING,
            Some("Let's discuss how I can contribute to your data engineering initiatives"),
        ),
        body,
    ])
}

fn labeled_input<'a>(label: &'a str, placeholder: &'a str, value: &'a str, field: Field) -> Element<'a, Message> {
    column![
        text(label).size(14).color(chrome::SLATE_300.color()),
        text_input(placeholder, value)
            .on_input(move |value| Message::ContactFieldChanged(field, value))
            .padding(12)
            .style(style::input),
    ]
    .spacing(8)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada".into());
        form.set(Field::Email, "ada@example.com".into());
        form.set(Field::Company, "Analytical Engines".into());
        form.set(Field::Message, "Let's talk lakehouses".into());
        form
    }

    #[test]
    fn test_email_shape() {
        assert!(is_email("a@b"));
        assert!(is_email("ada@example.com"));
        assert!(is_email("  ada@example.com "));
        assert!(!is_email(""));
        assert!(!is_email("ada"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("ada@"));
        assert!(!is_email("ada@@example.com"));
        assert!(!is_email("ada@.com"));
        assert!(!is_email("ada@example."));
        assert!(!is_email("a da@example.com"));
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        assert!(form.can_submit());

        form.set(Field::Company, String::new());
        assert!(form.can_submit());

        form.set(Field::Name, "   ".into());
        assert!(!form.can_submit());
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn test_submit_clears_and_confirms() {
        let mut form = filled();
        assert_eq!(form.submit_label(), "Send Message");

        let ticket = form.submit().unwrap();
        assert!(form.is_submitted());
        assert_eq!(form.submit_label(), "Message Sent!");
        assert!(form.name.is_empty() && form.email.is_empty());
        assert!(form.company.is_empty() && form.message.is_empty());

        assert!(form.expire(ticket));
        assert!(!form.is_submitted());
        assert_eq!(form.submit_label(), "Send Message");
    }

    #[test]
    fn test_submit_disabled_while_confirming() {
        let mut form = filled();
        form.submit().unwrap();

        form.set(Field::Name, "Ada".into());
        form.set(Field::Email, "ada@example.com".into());
        form.set(Field::Message, "again".into());
        assert!(form.is_valid());
        assert!(!form.can_submit());
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let mut earlier = filled();
        let stale = earlier.submit().unwrap();

        // The page was left and re-entered: a fresh form
        let mut form = filled();
        let current = form.submit().unwrap();
        assert_ne!(stale, current);

        assert!(!form.expire(stale));
        assert!(form.is_submitted());
        assert!(form.expire(current));
        assert!(!form.expire(current));
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirmation_timer_waits_three_seconds() {
        let started = tokio::time::Instant::now();
        assert_eq!(confirmation_elapsed(42).await, 42);
        assert!(started.elapsed() >= Duration::from_secs(3));
    }
}
