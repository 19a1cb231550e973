use std::sync::Arc;

pub mod availability_service;
pub mod booking_flow;
pub mod confirmation_service;
pub mod otp_service;
pub mod pricing_service;
pub mod summary_service;

use availability_service::AvailabilityCheck;
use otp_service::CodeDelivery;

/// The injectable backends behind the simulated network calls. Production
/// wires the fixed-delay simulators; tests wire zero-delay ones.
#[derive(Clone)]
pub struct Providers {
    pub availability: Arc<dyn AvailabilityCheck>,
    pub otp: Arc<dyn CodeDelivery>,
}
