//! ShareFootprint - Command handler building share messages.

use tracing::debug;

use crate::domain::footprint::{ShareAudience, ShareMessage, ShareOutcome};
use crate::domain::foundation::{DomainError, ReportingPeriod};

/// Command to share a calculated total.
#[derive(Debug, Clone)]
pub struct ShareFootprintCommand {
    pub audience: ShareAudience,
    pub period: ReportingPeriod,
    pub total_kg: f64,
    /// Whether the caller has a native share capability.
    pub native_share_available: bool,
}

/// Handler for share requests.
#[derive(Debug, Clone)]
pub struct ShareFootprintHandler {
    public_url: String,
}

impl ShareFootprintHandler {
    pub fn new(public_url: impl Into<String>) -> Self {
        Self {
            public_url: public_url.into(),
        }
    }

    pub fn handle(&self, cmd: ShareFootprintCommand) -> Result<ShareOutcome, DomainError> {
        if !cmd.total_kg.is_finite() {
            return Err(DomainError::validation(
                "total_kg",
                "Total must be a finite number",
            ));
        }

        let message = ShareMessage::compose(cmd.audience, cmd.period, cmd.total_kg, &self.public_url);
        let outcome = ShareOutcome::resolve(message, cmd.native_share_available);

        debug!(
            audience = ?cmd.audience,
            native = cmd.native_share_available,
            "Built share message"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> ShareFootprintHandler {
        ShareFootprintHandler::new("https://www.climateos.in")
    }

    fn cmd(total_kg: f64, native: bool) -> ShareFootprintCommand {
        ShareFootprintCommand {
            audience: ShareAudience::Individual,
            period: ReportingPeriod::Monthly,
            total_kg,
            native_share_available: native,
        }
    }

    #[test]
    fn uses_configured_url() {
        let outcome = handler().handle(cmd(10.0, true)).unwrap();
        assert_eq!(outcome.message().url, "https://www.climateos.in");
        assert!(outcome.message().text.ends_with("https://www.climateos.in"));
    }

    #[test]
    fn falls_back_without_native_share() {
        let outcome = handler().handle(cmd(10.0, false)).unwrap();
        assert!(matches!(outcome, ShareOutcome::CopyFallback { .. }));
    }

    #[test]
    fn rejects_non_finite_total() {
        let err = handler().handle(cmd(f64::NAN, true)).unwrap_err();
        assert!(err.is_validation());
        assert!(err.details.contains_key("total_kg"));
    }
}
