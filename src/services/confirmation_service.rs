use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::models::booking::{BookingRecord, ConfirmedBooking};
use crate::services::pricing_service::PricingService;

pub struct ConfirmationService;

impl ConfirmationService {
    /// Mints the client-facing identifiers for a finished booking: a
    /// timestamp-derived booking ID and a random tracking number. These are
    /// presentation IDs, not database keys; nothing is persisted.
    pub fn confirm(record: &BookingRecord) -> ConfirmedBooking {
        let now = Utc::now();

        let millis = now.timestamp_millis().to_string();
        let suffix_at = millis.len().saturating_sub(6);
        let booking_id = format!("CLS{}", &millis[suffix_at..]);

        let tracking_suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(8)
            .map(|b| (b as char).to_ascii_uppercase())
            .collect();
        let tracking_number = format!("TRK{}", tracking_suffix);

        ConfirmedBooking {
            booking_id,
            tracking_number,
            total: PricingService::quote(record),
            record: record.clone(),
            confirmed_at: now,
        }
    }
}
