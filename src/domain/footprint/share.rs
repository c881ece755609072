//! Share messages for a calculated footprint.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{format_kg_co2e, ReportingPeriod};

/// Prefix of the copy/paste text used when native sharing is unavailable.
pub const COPY_FALLBACK_PREFIX: &str =
    "Share feature not supported in this browser. You can copy this:\n\n";

/// Who is sharing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareAudience {
    Individual,
    Business,
}

/// Title, text and link handed to a share target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareMessage {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareMessage {
    pub fn compose(
        audience: ShareAudience,
        period: ReportingPeriod,
        total_kg: f64,
        url: &str,
    ) -> Self {
        let total = format_kg_co2e(total_kg);
        let (title, text) = match audience {
            ShareAudience::Individual => (
                "My Carbon Footprint",
                format!(
                    "My estimated {} carbon footprint is {}. Calculate yours at {}",
                    period.adjective(),
                    total,
                    url
                ),
            ),
            ShareAudience::Business => (
                "My Business GHG Footprint",
                format!(
                    "My company's estimated {} GHG footprint is {}. Calculate your business's impact with ClimateOS: {} #ClimateOS #GHGEmissions #Sustainability #India",
                    period.adjective(),
                    total,
                    url
                ),
            ),
        };
        Self {
            title: title.to_string(),
            text,
            url: url.to_string(),
        }
    }
}

/// What the caller should do with a share message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ShareOutcome {
    /// Hand the message to the platform share sheet.
    Native { message: ShareMessage },
    /// Show the text for manual copying.
    CopyFallback {
        message: ShareMessage,
        fallback_text: String,
    },
}

impl ShareOutcome {
    pub fn resolve(message: ShareMessage, native_share_available: bool) -> Self {
        if native_share_available {
            ShareOutcome::Native { message }
        } else {
            let fallback_text = format!("{}{}", COPY_FALLBACK_PREFIX, message.text);
            ShareOutcome::CopyFallback {
                message,
                fallback_text,
            }
        }
    }

    pub fn message(&self) -> &ShareMessage {
        match self {
            ShareOutcome::Native { message } | ShareOutcome::CopyFallback { message, .. } => {
                message
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.climateos.in";

    #[test]
    fn individual_message_mentions_period_and_total() {
        let message =
            ShareMessage::compose(ShareAudience::Individual, ReportingPeriod::Monthly, 220.7, URL);
        assert_eq!(message.title, "My Carbon Footprint");
        assert_eq!(
            message.text,
            "My estimated monthly carbon footprint is 220.700 kg CO2e. Calculate yours at https://www.climateos.in"
        );
    }

    #[test]
    fn business_message_carries_hashtags() {
        let message =
            ShareMessage::compose(ShareAudience::Business, ReportingPeriod::Annual, 12_300.0, URL);
        assert!(message
            .text
            .starts_with("My company's estimated annual GHG footprint is 12300.000 kg CO2e."));
        assert!(message.text.ends_with("#India"));
    }

    #[test]
    fn missing_native_share_falls_back_to_copy_text() {
        let message =
            ShareMessage::compose(ShareAudience::Individual, ReportingPeriod::Monthly, 1.0, URL);
        let outcome = ShareOutcome::resolve(message.clone(), false);

        match outcome {
            ShareOutcome::CopyFallback { fallback_text, .. } => {
                assert_eq!(
                    fallback_text,
                    format!(
                        "Share feature not supported in this browser. You can copy this:\n\n{}",
                        message.text
                    )
                );
            }
            other => panic!("expected copy fallback, got {:?}", other),
        }
    }

    #[test]
    fn native_share_keeps_message() {
        let message =
            ShareMessage::compose(ShareAudience::Business, ReportingPeriod::Monthly, 5.0, URL);
        let outcome = ShareOutcome::resolve(message.clone(), true);
        assert_eq!(outcome.message(), &message);
    }
}
