use tracing::info;

use crate::models::lead_models::Lead;

/// Destination for accepted leads. Called once per accepted submission.
#[cfg_attr(test, mockall::automock)]
pub trait LeadSink: Send + Sync {
    fn record(&self, lead: &Lead);
}

/// Writes each lead as one INFO event under the `intake` target.
/// Values are logged as submitted.
pub struct TracingLeadSink;

impl LeadSink for TracingLeadSink {
    fn record(&self, lead: &Lead) {
        info!(
            target: "intake",
            cliente = %lead.name,
            telefono = %lead.phone,
            caso = %lead.case_description,
            "Nuevo caso legal recibido"
        );
    }
}
