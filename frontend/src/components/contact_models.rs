use serde::{Deserialize, Serialize};

/// How long the "Solicitud Recibida" card stays up before the form returns.
pub const CONFIRMATION_DISPLAY_MS: u32 = 5_000;

pub const GENERIC_FAILURE_NOTICE: &str = "Error al enviar la solicitud.";
pub const CONNECTIVITY_NOTICE: &str =
    "No se pudo conectar con el servidor. Por favor, intente vía WhatsApp.";
pub const INCOMPLETE_NOTICE: &str = "Por favor complete todos los campos.";

/// JSON body sent to `POST /api/contacto`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub nombre: String,
    pub telefono: String,
    pub caso: String,
}

#[derive(Deserialize, Debug)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Phone,
    Case,
}

/// What came back from one submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { message: Option<String> },
    Unreachable,
}

/// Maps an HTTP reply to an outcome. `error_body` is `None` when the body was
/// not a JSON error object (an HTML 500 page, an empty body).
pub fn classify_response(status_ok: bool, error_body: Option<ErrorResponse>) -> SubmitOutcome {
    if status_ok {
        SubmitOutcome::Accepted
    } else {
        SubmitOutcome::Rejected {
            message: error_body.and_then(|body| body.error),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Sending,
    Confirmed,
}

/// Browser-independent state of the contact form.
///
/// At most one request is in flight: `begin_submit` hands out a payload only
/// from `Editing`, and nothing else leaves `Sending` except `finish`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormModel {
    name: String,
    phone: String,
    case_description: String,
    phase: Phase,
    notice: Option<String>,
}

impl ContactFormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Phone => &self.phone,
            ContactField::Case => &self.case_description,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Phone => self.phone = value,
            ContactField::Case => self.case_description = value,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Sending
    }

    pub fn is_confirmed(&self) -> bool {
        self.phase == Phase::Confirmed
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Returns the payload to send, or `None` when a request is already
    /// pending, the confirmation is showing, or a field is empty.
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        if self.phase != Phase::Editing {
            return None;
        }

        if self.name.is_empty() || self.phone.is_empty() || self.case_description.is_empty() {
            self.notice = Some(INCOMPLETE_NOTICE.to_string());
            return None;
        }

        self.phase = Phase::Sending;
        self.notice = None;

        Some(ContactRequest {
            nombre: self.name.clone(),
            telefono: self.phone.clone(),
            caso: self.case_description.clone(),
        })
    }

    /// Applies the result of the pending request. Returns the delay in
    /// milliseconds after which `confirmation_elapsed` must be called, if a
    /// confirmation is now showing.
    pub fn finish(&mut self, outcome: SubmitOutcome) -> Option<u32> {
        if self.phase != Phase::Sending {
            return None;
        }

        match outcome {
            SubmitOutcome::Accepted => {
                self.name.clear();
                self.phone.clear();
                self.case_description.clear();
                self.phase = Phase::Confirmed;
                Some(CONFIRMATION_DISPLAY_MS)
            }
            SubmitOutcome::Rejected { message } => {
                let message = message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE_NOTICE.to_string());
                self.notice = Some(message);
                self.phase = Phase::Editing;
                None
            }
            SubmitOutcome::Unreachable => {
                self.notice = Some(CONNECTIVITY_NOTICE.to_string());
                self.phase = Phase::Editing;
                None
            }
        }
    }

    pub fn confirmation_elapsed(&mut self) {
        if self.phase == Phase::Confirmed {
            self.phase = Phase::Editing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormModel {
        let mut model = ContactFormModel::new();
        model.set_field(ContactField::Name, "María López".to_string());
        model.set_field(ContactField::Phone, "614 468 1949".to_string());
        model.set_field(ContactField::Case, "Custodia de mis hijos".to_string());
        model
    }

    #[test]
    fn submit_yields_exact_values_under_wire_keys() {
        let mut model = filled();
        let request = model.begin_submit().expect("payload");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "nombre": "María López",
                "telefono": "614 468 1949",
                "caso": "Custodia de mis hijos"
            })
        );
        assert!(model.is_busy());
    }

    #[test]
    fn second_submit_while_pending_sends_nothing() {
        let mut model = filled();
        assert!(model.begin_submit().is_some());
        assert!(model.begin_submit().is_none());
        assert!(model.is_busy());
    }

    #[test]
    fn missing_field_blocks_request() {
        let mut model = filled();
        model.set_field(ContactField::Phone, String::new());

        assert!(model.begin_submit().is_none());
        assert_eq!(model.phase(), Phase::Editing);
        assert_eq!(model.notice(), Some(INCOMPLETE_NOTICE));
    }

    #[test]
    fn accepted_clears_fields_and_confirms() {
        let mut model = filled();
        model.begin_submit();

        assert_eq!(model.finish(SubmitOutcome::Accepted), Some(CONFIRMATION_DISPLAY_MS));
        assert!(model.is_confirmed());
        assert_eq!(model.field(ContactField::Name), "");
        assert_eq!(model.field(ContactField::Phone), "");
        assert_eq!(model.field(ContactField::Case), "");
        assert_eq!(model.notice(), None);
    }

    #[test]
    fn accepted_schedules_five_second_revert() {
        let mut model = filled();
        model.begin_submit();

        let delay = model.finish(SubmitOutcome::Accepted).expect("timer delay");
        assert_eq!(delay, 5_000);
        assert!(model.is_confirmed());

        model.confirmation_elapsed();
        assert_eq!(model.phase(), Phase::Editing);
    }

    #[test]
    fn late_timer_does_not_disturb_pending_request() {
        let mut model = filled();
        model.begin_submit();
        model.finish(SubmitOutcome::Accepted);
        model.confirmation_elapsed();

        model.set_field(ContactField::Name, "Otra".to_string());
        model.set_field(ContactField::Phone, "1".to_string());
        model.set_field(ContactField::Case, "Otro caso".to_string());
        model.begin_submit();
        model.confirmation_elapsed();
        assert!(model.is_busy());
    }

    #[test]
    fn no_submit_while_confirmation_shows() {
        let mut model = filled();
        model.begin_submit();
        model.finish(SubmitOutcome::Accepted);

        model.set_field(ContactField::Name, "Otra".to_string());
        model.set_field(ContactField::Phone, "1".to_string());
        model.set_field(ContactField::Case, "Otro caso".to_string());
        assert!(model.begin_submit().is_none());
    }

    #[test]
    fn server_message_is_shown_and_fields_kept() {
        let mut model = filled();
        model.begin_submit();

        let delay = model.finish(SubmitOutcome::Rejected {
            message: Some("Faltan campos obligatorios".to_string()),
        });

        assert_eq!(delay, None);
        assert_eq!(model.notice(), Some("Faltan campos obligatorios"));
        assert_eq!(model.field(ContactField::Name), "María López");
        assert_eq!(model.field(ContactField::Case), "Custodia de mis hijos");
        assert_eq!(model.phase(), Phase::Editing);
    }

    #[test]
    fn rejection_without_message_uses_generic_notice() {
        let mut model = filled();
        model.begin_submit();
        model.finish(SubmitOutcome::Rejected { message: None });
        assert_eq!(model.notice(), Some(GENERIC_FAILURE_NOTICE));

        model.begin_submit();
        model.finish(SubmitOutcome::Rejected { message: Some(String::new()) });
        assert_eq!(model.notice(), Some(GENERIC_FAILURE_NOTICE));
    }

    #[test]
    fn unreachable_server_suggests_whatsapp() {
        let mut model = filled();
        model.begin_submit();
        model.finish(SubmitOutcome::Unreachable);

        assert_eq!(model.notice(), Some(CONNECTIVITY_NOTICE));
        assert_eq!(model.field(ContactField::Phone), "614 468 1949");
    }

    #[test]
    fn resubmit_after_failure_clears_notice() {
        let mut model = filled();
        model.begin_submit();
        model.finish(SubmitOutcome::Unreachable);

        assert!(model.begin_submit().is_some());
        assert_eq!(model.notice(), None);
    }

    #[test]
    fn stale_outcome_is_ignored() {
        let mut model = filled();
        assert_eq!(model.finish(SubmitOutcome::Accepted), None);
        assert_eq!(model.field(ContactField::Name), "María López");
    }

    #[test]
    fn error_body_parses_with_or_without_message() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"error":"Faltan campos obligatorios"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Faltan campos obligatorios"));

        let body: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());
    }

    #[test]
    fn ok_status_is_accepted_regardless_of_body() {
        assert_eq!(classify_response(true, None), SubmitOutcome::Accepted);
        let stray = ErrorResponse { error: Some("ignorado".to_string()) };
        assert_eq!(classify_response(true, Some(stray)), SubmitOutcome::Accepted);
    }

    #[test]
    fn bad_request_carries_server_message() {
        let body = serde_json::from_str::<ErrorResponse>(r#"{"error":"Faltan campos obligatorios"}"#).ok();
        assert_eq!(
            classify_response(false, body),
            SubmitOutcome::Rejected {
                message: Some("Faltan campos obligatorios".to_string())
            }
        );
    }

    #[test]
    fn server_error_with_html_body_gets_generic_notice() {
        let body = serde_json::from_str::<ErrorResponse>("<html><body>500 Internal Server Error</body></html>").ok();
        let outcome = classify_response(false, body);
        assert_eq!(outcome, SubmitOutcome::Rejected { message: None });

        let mut model = filled();
        model.begin_submit();
        assert_eq!(model.finish(outcome), None);
        assert_eq!(model.notice(), Some(GENERIC_FAILURE_NOTICE));
        assert_eq!(model.field(ContactField::Name), "María López");
    }

    #[test]
    fn error_object_without_message_gets_generic_notice() {
        let body = serde_json::from_str::<ErrorResponse>(r#"{"detail":"boom"}"#).ok();
        assert_eq!(classify_response(false, body), SubmitOutcome::Rejected { message: None });
    }
}
