use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Decision state of a refund, derived from its per-transition timestamps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    Pending,
    Accepted,
    Rejected,
    Refunded,
}

impl RefundStatus {
    /// A rejection wins over every other timestamp; a refund that was never
    /// accepted stays pending even if a refund timestamp was written.
    pub fn from_timestamps(
        accepted_at: Option<DateTime<Utc>>,
        rejected_at: Option<DateTime<Utc>>,
        refunded_at: Option<DateTime<Utc>>,
    ) -> Self {
        match (accepted_at, rejected_at, refunded_at) {
            (_, Some(_), _) => RefundStatus::Rejected,
            (None, None, _) => RefundStatus::Pending,
            (Some(_), None, Some(_)) => RefundStatus::Refunded,
            (Some(_), None, None) => RefundStatus::Accepted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RefundStatus::Pending => "pending",
            RefundStatus::Accepted => "accepted",
            RefundStatus::Rejected => "rejected",
            RefundStatus::Refunded => "refunded",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(RefundStatus::Pending),
            "accepted" => Some(RefundStatus::Accepted),
            "rejected" => Some(RefundStatus::Rejected),
            "refunded" => Some(RefundStatus::Refunded),
            _ => None,
        }
    }
}

impl Display for RefundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_refund_is_pending() {
        assert_eq!(
            RefundStatus::from_timestamps(None, None, None),
            RefundStatus::Pending
        );
    }

    #[test]
    fn accepted_refund_without_payout_is_accepted() {
        let now = Utc::now();
        assert_eq!(
            RefundStatus::from_timestamps(Some(now), None, None),
            RefundStatus::Accepted
        );
    }

    #[test]
    fn rejection_takes_precedence() {
        let now = Utc::now();
        assert_eq!(
            RefundStatus::from_timestamps(Some(now), Some(now), None),
            RefundStatus::Rejected
        );
        assert_eq!(
            RefundStatus::from_timestamps(None, Some(now), Some(now)),
            RefundStatus::Rejected
        );
    }

    #[test]
    fn refunded_requires_acceptance() {
        let now = Utc::now();
        assert_eq!(
            RefundStatus::from_timestamps(Some(now), None, Some(now)),
            RefundStatus::Refunded
        );
        assert_eq!(
            RefundStatus::from_timestamps(None, None, Some(now)),
            RefundStatus::Pending
        );
    }

    #[test]
    fn parses_known_codes_only() {
        for status in [
            RefundStatus::Pending,
            RefundStatus::Accepted,
            RefundStatus::Rejected,
            RefundStatus::Refunded,
        ] {
            assert_eq!(RefundStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(RefundStatus::from_str("settled"), None);
    }
}
