use std::sync::OnceLock;
use std::time::Duration;

use futures::future::BoxFuture;
use regex::Regex;
use tokio::time::sleep;

/// Default simulated network latency for an availability lookup.
const DEFAULT_DELAY_MS: u64 = 1500;

static TEXAS_ZIP: OnceLock<Regex> = OnceLock::new();

fn texas_zip() -> &'static Regex {
    TEXAS_ZIP.get_or_init(|| Regex::new(r"^7[0-9]{4}$").unwrap())
}

pub struct AvailabilityService;

impl AvailabilityService {
    /// Approximate Texas service-area check: a 5-digit ZIP starting with 7,
    /// or any mention of "texas"/"tx" in the input. Deliberately permissive;
    /// this is a screening question, not geocoding.
    pub fn is_serviceable(input: &str) -> bool {
        let trimmed = input.trim();

        if texas_zip().is_match(trimmed) {
            return true;
        }

        let lowered = trimmed.to_lowercase();
        lowered.contains("texas") || lowered.contains("tx")
    }
}

/// Seam for the availability lookup so handlers and tests can swap the
/// simulated round trip for an instant one.
pub trait AvailabilityCheck: Send + Sync {
    fn check<'a>(&'a self, location: &'a str) -> BoxFuture<'a, bool>;
}

/// Stand-in for a real coverage API: waits out a fixed delay, then answers
/// from the local predicate.
pub struct SimulatedAvailabilityProvider {
    delay: Duration,
}

impl SimulatedAvailabilityProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_env() -> Self {
        let millis = std::env::var("AVAILABILITY_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_DELAY_MS);
        Self::new(Duration::from_millis(millis))
    }
}

impl AvailabilityCheck for SimulatedAvailabilityProvider {
    fn check<'a>(&'a self, location: &'a str) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            sleep(self.delay).await;
            AvailabilityService::is_serviceable(location)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texas_zip_codes_are_serviceable() {
        assert!(AvailabilityService::is_serviceable("75201"));
        assert!(AvailabilityService::is_serviceable("78701"));
        assert!(AvailabilityService::is_serviceable("  79901  "));
    }

    #[test]
    fn test_out_of_state_zip_codes_are_rejected() {
        assert!(!AvailabilityService::is_serviceable("90210"));
        assert!(!AvailabilityService::is_serviceable("10001"));
        // Six digits is not a ZIP even if it starts with 7.
        assert!(!AvailabilityService::is_serviceable("752011"));
    }

    #[test]
    fn test_keyword_matching() {
        assert!(AvailabilityService::is_serviceable("I live in Texas"));
        assert!(AvailabilityService::is_serviceable("Austin, TX"));
        assert!(!AvailabilityService::is_serviceable("california"));
        assert!(!AvailabilityService::is_serviceable(""));
    }

    #[test]
    fn test_simulated_provider_answers_from_predicate() {
        let provider = SimulatedAvailabilityProvider::new(Duration::from_millis(0));
        assert!(tokio_test::block_on(provider.check("78701")));
        assert!(!tokio_test::block_on(provider.check("90210")));
    }
}
