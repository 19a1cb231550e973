use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::booking::BookingRecord;

/// The wizard's ordered steps. `Frequency` is visited only for the
/// recurring standard service; `Confirmation` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Booking,
    Services,
    Frequency,
    Bedrooms,
    Addons,
    Email,
    Address,
    Confirmation,
}

/// One in-progress booking, owned by a single client session. Lives only in
/// the in-memory store; nothing survives a server restart.
#[derive(Debug, Clone, Serialize)]
pub struct BookingSession {
    pub id: Uuid,
    pub step: Step,
    pub record: BookingRecord,
    /// Bumped whenever a new availability check starts, so a slow check
    /// that was superseded by a resubmission cannot apply its result.
    #[serde(skip_serializing)]
    pub availability_generation: u64,
    pub created_at: DateTime<Utc>,
}

impl BookingSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            step: Step::Booking,
            record: BookingRecord::default(),
            availability_generation: 0,
            created_at: Utc::now(),
        }
    }

    /// Starts a new availability check, invalidating any still in flight.
    /// Returns the token the eventual result must present.
    pub fn begin_availability_check(&mut self) -> u64 {
        self.availability_generation += 1;
        self.availability_generation
    }

    /// True while `token` belongs to the most recently started check.
    pub fn availability_token_current(&self, token: u64) -> bool {
        self.availability_generation == token
    }
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new()
    }
}
