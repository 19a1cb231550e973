use std::collections::BTreeSet;

use serde::Deserialize;

use crate::models::booking::{
    AddOnId, BookingRecord, FrequencyId, ServiceId, MAX_BEDROOMS, TIME_SLOTS,
};
use crate::models::session::Step;
use crate::services::availability_service::AvailabilityService;
use crate::services::otp_service::OtpService;
use crate::services::pricing_service::PricingService;

/// A completed step, reported by the client. Each variant is only accepted
/// while the wizard sits on the matching step.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum StepEvent {
    CheckLocation {
        location: String,
    },
    SelectService {
        service: ServiceId,
    },
    SelectFrequency {
        frequency: FrequencyId,
    },
    SelectBedrooms {
        bedrooms: u32,
    },
    SelectAddOns {
        #[serde(default)]
        add_ons: BTreeSet<AddOnId>,
    },
    VerifyEmail {
        email: String,
        code: String,
    },
    SubmitContact {
        address: String,
        name: String,
        phone: String,
        time_slot: String,
        #[serde(default)]
        instructions: Option<String>,
    },
}

impl StepEvent {
    pub fn name(&self) -> &'static str {
        match self {
            StepEvent::CheckLocation { .. } => "check-location",
            StepEvent::SelectService { .. } => "select-service",
            StepEvent::SelectFrequency { .. } => "select-frequency",
            StepEvent::SelectBedrooms { .. } => "select-bedrooms",
            StepEvent::SelectAddOns { .. } => "select-add-ons",
            StepEvent::VerifyEmail { .. } => "verify-email",
            StepEvent::SubmitContact { .. } => "submit-contact",
        }
    }

    /// The step this event completes.
    pub fn step(&self) -> Step {
        match self {
            StepEvent::CheckLocation { .. } => Step::Booking,
            StepEvent::SelectService { .. } => Step::Services,
            StepEvent::SelectFrequency { .. } => Step::Frequency,
            StepEvent::SelectBedrooms { .. } => Step::Bedrooms,
            StepEvent::SelectAddOns { .. } => Step::Addons,
            StepEvent::VerifyEmail { .. } => Step::Email,
            StepEvent::SubmitContact { .. } => Step::Address,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum FlowError {
    /// The event does not belong to the step the session is on.
    WrongStep { current: Step, event: &'static str },
    /// Required input is missing or malformed; the step stays active.
    Validation { fields: Vec<&'static str> },
    /// A gate refused the input (location out of area, wrong code). No
    /// state changes; the user may retry.
    Rejected { reason: String },
    /// The wizard is at confirmation; only a restart leaves it.
    Terminal,
    /// Already on the first step, nothing to go back to.
    AtStart,
}

impl std::fmt::Display for FlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowError::WrongStep { current, event } => {
                write!(f, "event '{}' not valid on step {:?}", event, current)
            }
            FlowError::Validation { fields } => {
                write!(f, "missing or invalid fields: {}", fields.join(", "))
            }
            FlowError::Rejected { reason } => write!(f, "{}", reason),
            FlowError::Terminal => write!(f, "booking is already confirmed; start a new session"),
            FlowError::AtStart => write!(f, "already on the first step"),
        }
    }
}

impl std::error::Error for FlowError {}

/// The wizard's transition function. Forward transitions merge the event's
/// data into the record and recompute the running total from scratch; back
/// transitions only move the cursor and never touch collected data.
pub struct BookingFlow;

impl BookingFlow {
    /// Applies a completed step to the record and returns the next step.
    /// On any error the record is left untouched.
    pub fn apply(
        step: Step,
        record: &mut BookingRecord,
        event: StepEvent,
    ) -> Result<Step, FlowError> {
        if step == Step::Confirmation {
            return Err(FlowError::Terminal);
        }
        if event.step() != step {
            return Err(FlowError::WrongStep {
                current: step,
                event: event.name(),
            });
        }

        let next = match event {
            StepEvent::CheckLocation { location } => {
                let trimmed = location.trim();
                if trimmed.is_empty() {
                    return Err(FlowError::Validation {
                        fields: vec!["location"],
                    });
                }
                if !AvailabilityService::is_serviceable(trimmed) {
                    return Err(FlowError::Rejected {
                        reason: "we currently only serve Texas locations".to_string(),
                    });
                }
                record.location = Some(trimmed.to_string());
                Step::Services
            }
            StepEvent::SelectService { service } => {
                record.service = Some(service);
                if service == ServiceId::RecurringStandard {
                    Step::Frequency
                } else {
                    Step::Bedrooms
                }
            }
            StepEvent::SelectFrequency { frequency } => {
                // Only reachable when the recurring standard service was
                // chosen, which keeps the frequency-iff-recurring invariant.
                record.frequency = Some(frequency);
                Step::Bedrooms
            }
            StepEvent::SelectBedrooms { bedrooms } => {
                if !(1..=MAX_BEDROOMS).contains(&bedrooms) {
                    return Err(FlowError::Validation {
                        fields: vec!["bedrooms"],
                    });
                }
                record.bedrooms = Some(bedrooms);
                Step::Addons
            }
            StepEvent::SelectAddOns { add_ons } => {
                // An explicitly empty set is a valid "skip".
                record.add_ons = add_ons;
                Step::Email
            }
            StepEvent::VerifyEmail { email, code } => {
                if !OtpService::is_valid_email(&email) {
                    return Err(FlowError::Validation {
                        fields: vec!["email"],
                    });
                }
                if !OtpService::verify(&code) {
                    return Err(FlowError::Rejected {
                        reason: "the verification code is incorrect".to_string(),
                    });
                }
                record.email = Some(email.trim().to_string());
                Step::Address
            }
            StepEvent::SubmitContact {
                address,
                name,
                phone,
                time_slot,
                instructions,
            } => {
                let mut missing = Vec::new();
                if address.trim().is_empty() {
                    missing.push("address");
                }
                if name.trim().is_empty() {
                    missing.push("name");
                }
                if phone.trim().is_empty() {
                    missing.push("phone");
                }
                if !TIME_SLOTS.contains(&time_slot.trim()) {
                    missing.push("time_slot");
                }
                if !missing.is_empty() {
                    return Err(FlowError::Validation { fields: missing });
                }

                record.address = Some(address.trim().to_string());
                record.name = Some(name.trim().to_string());
                record.phone = Some(phone.trim().to_string());
                record.time_slot = Some(time_slot.trim().to_string());
                if let Some(notes) = instructions {
                    if !notes.trim().is_empty() {
                        record.instructions = Some(notes);
                    }
                }
                Step::Confirmation
            }
        };

        record.price = PricingService::quote(record);
        Ok(next)
    }

    /// One step backwards, skipping the frequency step when it was skipped
    /// on the way forward. Collected data is left as-is.
    pub fn back(step: Step, record: &BookingRecord) -> Result<Step, FlowError> {
        match step {
            Step::Booking => Err(FlowError::AtStart),
            Step::Services => Ok(Step::Booking),
            Step::Frequency => Ok(Step::Services),
            Step::Bedrooms => {
                if record.service == Some(ServiceId::RecurringStandard) {
                    Ok(Step::Frequency)
                } else {
                    Ok(Step::Services)
                }
            }
            Step::Addons => Ok(Step::Bedrooms),
            Step::Email => Ok(Step::Addons),
            Step::Address => Ok(Step::Email),
            Step::Confirmation => Err(FlowError::Terminal),
        }
    }
}
