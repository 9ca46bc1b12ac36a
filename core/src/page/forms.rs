//! State machines for the public-facing forms.
//!
//! All three forms (booking, contact, newsletter) share one lifecycle:
//! `idle → submitting → {success, error}`. Success clears the entered
//! values; an error preserves them so the visitor can resubmit. As with the
//! list pages, results are matched against an epoch token so a response
//! landing after teardown is ignored.

use crate::error::ApiError;
use crate::types::{NewBooking, NewContact, NewSubscriber};

/// Where a form currently is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Ties an in-flight submission to the form state it was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitToken {
    epoch: u64,
}

/// Generic form state: the entered fields plus the submission lifecycle.
#[derive(Debug)]
pub struct FormController<F> {
    fields: F,
    phase: SubmitPhase,
    message: Option<String>,
    epoch: u64,
}

impl<F: Default> FormController<F> {
    pub fn new() -> Self {
        FormController {
            fields: F::default(),
            phase: SubmitPhase::Idle,
            message: None,
            epoch: 0,
        }
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    /// Mutable access for edits; editing returns the form to `Idle` and
    /// clears any leftover status message.
    pub fn fields_mut(&mut self) -> &mut F {
        self.phase = SubmitPhase::Idle;
        self.message = None;
        &mut self.fields
    }

    /// Begin a submission. Returns `None` while another submission is still
    /// in flight (the submit button is disabled during `Submitting`).
    pub fn start_submit(&mut self) -> Option<SubmitToken> {
        if self.phase == SubmitPhase::Submitting {
            return None;
        }
        self.epoch += 1;
        self.phase = SubmitPhase::Submitting;
        self.message = None;
        Some(SubmitToken { epoch: self.epoch })
    }

    /// Deliver the submission result. On success the fields reset to their
    /// defaults; on error they are preserved for resubmission. Stale tokens
    /// are ignored.
    pub fn finish_submit(
        &mut self,
        token: SubmitToken,
        result: Result<(), ApiError>,
        success_message: &str,
    ) {
        if token.epoch != self.epoch {
            return;
        }
        match result {
            Ok(()) => {
                self.fields = F::default();
                self.phase = SubmitPhase::Succeeded;
                self.message = Some(success_message.to_string());
            }
            Err(err) => {
                self.phase = SubmitPhase::Failed;
                self.message = Some(err.to_string());
            }
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl<F: Default> Default for FormController<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// A bookable experience offered on the booking page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    /// Display name, transmitted verbatim as the booking's `service` field.
    pub name: &'static str,
}

/// The catalog shown on the booking page.
pub const SERVICES: &[Service] = &[
    Service {
        id: "Conferencing",
        name: "Conferencing (room hire only)",
    },
    Service {
        id: "Picnic/team building only",
        name: "Picnic / Team Building Only",
    },
    Service {
        id: "Tour-of-Spice-Enclave",
        name: "Tour of Spice Enclave (Herb Garden)",
    },
    Service {
        id: "Tour of Bee Garden",
        name: "Tour of Bee Garden",
    },
    Service {
        id: "Combined: Spice Enclave and Bee Garden",
        name: "Combined: Spice Enclave & Bee Garden",
    },
    Service {
        id: "Photography/Video shooting",
        name: "Photography/Video Shooting",
    },
    Service {
        id: "Single room occupancy B&B",
        name: "Single Room Occupancy B&B",
    },
    Service {
        id: "Double Room Sharing B&B",
        name: "Double Room Sharing B&B",
    },
];

/// Entered values of the booking form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFields {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub date: String,
    pub time: String,
    pub number_of_people: u32,
    pub special_requests: String,
}

/// The booking page: a service selection plus the shared form lifecycle.
/// No payload exists until a service has been selected.
#[derive(Debug, Default)]
pub struct BookingForm {
    form: FormController<BookingFields>,
    selected_service: Option<&'static Service>,
}

impl BookingForm {
    const SUCCESS_MESSAGE: &'static str =
        "Booking submitted successfully! We will contact you soon.";

    pub fn new() -> Self {
        Self::default()
    }

    /// Select a service from the catalog by id. Unknown ids leave the
    /// selection unchanged.
    pub fn select_service(&mut self, id: &str) -> bool {
        match SERVICES.iter().find(|s| s.id == id) {
            Some(service) => {
                self.selected_service = Some(service);
                true
            }
            None => false,
        }
    }

    pub fn selected_service(&self) -> Option<&'static Service> {
        self.selected_service
    }

    pub fn fields(&self) -> &BookingFields {
        self.form.fields()
    }

    pub fn fields_mut(&mut self) -> &mut BookingFields {
        self.form.fields_mut()
    }

    /// The submission payload, if a service has been selected. The `service`
    /// field carries the selection's display name.
    pub fn payload(&self) -> Option<NewBooking> {
        let service = self.selected_service?;
        let fields = self.form.fields();
        let special_requests = fields.special_requests.trim();
        Some(NewBooking {
            full_name: fields.full_name.clone(),
            email: fields.email.clone(),
            phone_number: fields.phone_number.clone(),
            service: service.name.to_string(),
            date: fields.date.clone(),
            time: fields.time.clone(),
            number_of_people: fields.number_of_people,
            special_requests: (!special_requests.is_empty())
                .then(|| special_requests.to_string()),
        })
    }

    /// Begin a submission, yielding the token and the payload to send.
    /// Returns `None` without a selected service or while already
    /// submitting.
    pub fn start_submit(&mut self) -> Option<(SubmitToken, NewBooking)> {
        let payload = self.payload()?;
        let token = self.form.start_submit()?;
        Some((token, payload))
    }

    /// On success both the entered values and the service selection reset.
    pub fn finish_submit(&mut self, token: SubmitToken, result: Result<(), ApiError>) {
        self.form.finish_submit(token, result, Self::SUCCESS_MESSAGE);
        if self.form.phase() == SubmitPhase::Succeeded {
            self.selected_service = None;
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.form.phase()
    }

    pub fn message(&self) -> Option<&str> {
        self.form.message()
    }
}

/// Entered values of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub organization: String,
    pub subject: String,
    pub message: String,
}

pub type ContactForm = FormController<ContactFields>;

impl FormController<ContactFields> {
    /// Submission payload; empty optional fields are omitted from the wire.
    pub fn payload(&self) -> NewContact {
        let fields = self.fields();
        let optional = |value: &str| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        NewContact {
            full_name: fields.full_name.clone(),
            email: fields.email.clone(),
            phone_number: optional(&fields.phone_number),
            organization: optional(&fields.organization),
            subject: optional(&fields.subject),
            message: fields.message.clone(),
        }
    }
}

/// Entered values of the footer newsletter signup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterFields {
    pub email: String,
}

pub type NewsletterForm = FormController<NewsletterFields>;

impl FormController<NewsletterFields> {
    pub fn payload(&self) -> NewSubscriber {
        NewSubscriber {
            email: self.fields().email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_booking_form() -> BookingForm {
        let mut form = BookingForm::new();
        assert!(form.select_service("Tour of Bee Garden"));
        let fields = form.fields_mut();
        fields.full_name = "Jane Mwangi".to_string();
        fields.email = "jane@example.com".to_string();
        fields.phone_number = "+254700000000".to_string();
        fields.date = "2026-09-12".to_string();
        fields.time = "10:00".to_string();
        fields.number_of_people = 12;
        form
    }

    #[test]
    fn payload_requires_a_selected_service() {
        let form = BookingForm::new();
        assert!(form.payload().is_none());
    }

    #[test]
    fn payload_carries_the_service_display_name() {
        let mut form = filled_booking_form();
        form.select_service("Combined: Spice Enclave and Bee Garden");
        let payload = form.payload().unwrap();
        assert_eq!(payload.service, "Combined: Spice Enclave & Bee Garden");
        assert!(payload.special_requests.is_none());
    }

    #[test]
    fn successful_submit_clears_fields_and_selection() {
        let mut form = filled_booking_form();
        let (token, payload) = form.start_submit().unwrap();
        assert_eq!(form.phase(), SubmitPhase::Submitting);
        assert_eq!(payload.full_name, "Jane Mwangi");

        form.finish_submit(token, Ok(()));
        assert_eq!(form.phase(), SubmitPhase::Succeeded);
        assert_eq!(form.fields(), &BookingFields::default());
        assert!(form.selected_service().is_none());
        assert!(form.message().unwrap().contains("submitted successfully"));
    }

    #[test]
    fn failed_submit_preserves_entered_values() {
        let mut form = filled_booking_form();
        let (token, _) = form.start_submit().unwrap();
        form.finish_submit(
            token,
            Err(ApiError::Http {
                status: 500,
                message: "internal error".to_string(),
            }),
        );
        assert_eq!(form.phase(), SubmitPhase::Failed);
        assert_eq!(form.fields().full_name, "Jane Mwangi");
        assert!(form.selected_service().is_some());
        assert_eq!(form.message(), Some("HTTP 500: internal error"));
    }

    #[test]
    fn double_submit_is_rejected_while_in_flight() {
        let mut form = filled_booking_form();
        let first = form.start_submit();
        assert!(first.is_some());
        assert!(form.start_submit().is_none());
    }

    #[test]
    fn late_result_after_resubmit_is_ignored() {
        let mut form = filled_booking_form();
        let (stale, _) = form.start_submit().unwrap();
        form.finish_submit(
            stale,
            Err(ApiError::Http {
                status: 503,
                message: "unavailable".to_string(),
            }),
        );
        let (fresh, _) = form.start_submit().unwrap();
        // The older request's duplicate completion must not flip state back.
        form.finish_submit(stale, Ok(()));
        assert_eq!(form.phase(), SubmitPhase::Submitting);
        form.finish_submit(fresh, Ok(()));
        assert_eq!(form.phase(), SubmitPhase::Succeeded);
    }

    #[test]
    fn contact_payload_omits_blank_optionals() {
        let mut form = ContactForm::new();
        let fields = form.fields_mut();
        fields.full_name = "Sam Otieno".to_string();
        fields.email = "sam@example.com".to_string();
        fields.subject = "  ".to_string();
        fields.message = "Do you host school trips?".to_string();
        let payload = form.payload();
        assert!(payload.subject.is_none());
        assert!(payload.organization.is_none());
        assert_eq!(payload.full_name, "Sam Otieno");
    }

    #[test]
    fn newsletter_success_clears_email() {
        let mut form = NewsletterForm::new();
        form.fields_mut().email = "visitor@example.com".to_string();
        let token = form.start_submit().unwrap();
        form.finish_submit(token, Ok(()), "Subscribed!");
        assert!(form.fields().email.is_empty());
        assert_eq!(form.message(), Some("Subscribed!"));
    }

    #[test]
    fn service_catalog_ids_are_unique() {
        for (i, a) in SERVICES.iter().enumerate() {
            for b in &SERVICES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
