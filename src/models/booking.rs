use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed catalog of cleaning services offered during booking.
///
/// Unknown identifiers deserialize to `Unknown` rather than failing the
/// request; pricing falls back to the standard one-time rate for those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceId {
    RecurringStandard,
    OneTimeStandard,
    InitialDeep,
    DeepCleaning,
    MovingIn,
    MovingOut,
    MakeReady,
    PostRenovation,
    PostConstruction,
    #[serde(other)]
    Unknown,
}

impl ServiceId {
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceId::RecurringStandard => "Recurring Standard Clean",
            ServiceId::OneTimeStandard => "One Time Standard Clean",
            ServiceId::InitialDeep => "Initial Deep Clean & Ongoing",
            ServiceId::DeepCleaning => "Deep Cleaning",
            ServiceId::MovingIn => "Moving In Clean",
            ServiceId::MovingOut => "Moving Out Clean",
            ServiceId::MakeReady => "Make Ready Clean",
            ServiceId::PostRenovation => "Post Renovation Clean Up",
            ServiceId::PostConstruction => "Post Construction Cleanup",
            ServiceId::Unknown => "Cleaning Service",
        }
    }
}

/// Recurrence options, offered only for the recurring standard service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrequencyId {
    Weekly,
    BiWeekly,
    TriWeekly,
    Monthly,
}

impl FrequencyId {
    pub fn display_name(&self) -> &'static str {
        match self {
            FrequencyId::Weekly => "Weekly",
            FrequencyId::BiWeekly => "Every 2 Weeks",
            FrequencyId::TriWeekly => "Every 3 Weeks",
            FrequencyId::Monthly => "Every 4 Weeks",
        }
    }
}

/// Optional extras. Each has a catalog price shown on the selection screen,
/// but the aggregation charges a flat rate per add-on (see pricing_service).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddOnId {
    FridgeCleaning,
    OvenCleaning,
    GarageCleaning,
    LightFixtures,
    CabinetCleaning,
    TrashBins,
}

impl AddOnId {
    pub fn display_name(&self) -> &'static str {
        match self {
            AddOnId::FridgeCleaning => "Fridge Cleaning",
            AddOnId::OvenCleaning => "Oven Cleaning",
            AddOnId::GarageCleaning => "Garage Cleaning",
            AddOnId::LightFixtures => "Light Fixtures",
            AddOnId::CabinetCleaning => "Cabinet Cleaning",
            AddOnId::TrashBins => "Trash Bin Cleaning",
        }
    }

    /// Catalog price shown on the add-on cards. Display metadata only; the
    /// booking total always uses the flat per-add-on rate.
    pub fn display_price(&self) -> u32 {
        match self {
            AddOnId::FridgeCleaning => 25,
            AddOnId::OvenCleaning => 30,
            AddOnId::GarageCleaning => 40,
            AddOnId::LightFixtures => 20,
            AddOnId::CabinetCleaning => 35,
            AddOnId::TrashBins => 15,
        }
    }
}

/// Largest count on the bedroom step; the top card covers "5+" homes.
pub const MAX_BEDROOMS: u32 = 5;

/// Appointment windows offered on the scheduling step.
pub const TIME_SLOTS: [&str; 5] = [
    "8:00 AM - 10:00 AM",
    "10:00 AM - 12:00 PM",
    "12:00 PM - 2:00 PM",
    "2:00 PM - 4:00 PM",
    "4:00 PM - 6:00 PM",
];

/// The single accumulating aggregate for one booking session. Every field
/// starts unset and is filled in as steps complete; a later step never
/// clears what an earlier step wrote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingRecord {
    pub location: Option<String>,
    pub service: Option<ServiceId>,
    pub frequency: Option<FrequencyId>,
    pub bedrooms: Option<u32>,
    pub add_ons: BTreeSet<AddOnId>,
    /// Running total in whole dollars, recomputed from the other fields on
    /// every transition.
    pub price: u32,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub time_slot: Option<String>,
    pub instructions: Option<String>,
}

/// A finished booking, minted only once the wizard reaches confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmedBooking {
    pub booking_id: String,
    pub tracking_number: String,
    pub total: u32,
    pub record: BookingRecord,
    pub confirmed_at: DateTime<Utc>,
}
