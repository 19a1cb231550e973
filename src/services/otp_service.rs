use std::time::Duration;

use futures::future::BoxFuture;
use tokio::time::sleep;

/// Placeholder secret standing in for a real one-time-code backend. Every
/// session accepts the same code; resending never rotates it.
const VERIFICATION_CODE: &str = "123456";

/// Default simulated delivery latency.
const DEFAULT_DELAY_MS: u64 = 1500;

pub struct OtpService;

impl OtpService {
    /// Same shape check the booking form applies before sending.
    pub fn is_valid_email(email: &str) -> bool {
        !email.trim().is_empty() && email.contains('@')
    }

    /// True only for the exact 6-character code.
    pub fn verify(code: &str) -> bool {
        code.len() == 6 && code == VERIFICATION_CODE
    }
}

/// Seam for code delivery; the simulated provider below never actually
/// sends anything.
pub trait CodeDelivery: Send + Sync {
    fn send_code<'a>(&'a self, email: &'a str) -> BoxFuture<'a, ()>;
}

pub struct SimulatedOtpProvider {
    delay: Duration,
}

impl SimulatedOtpProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_env() -> Self {
        let millis = std::env::var("OTP_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_DELAY_MS);
        Self::new(Duration::from_millis(millis))
    }
}

impl CodeDelivery for SimulatedOtpProvider {
    fn send_code<'a>(&'a self, _email: &'a str) -> BoxFuture<'a, ()> {
        // Delivery always "succeeds"; there is no real mailbox behind this.
        Box::pin(async move {
            sleep(self.delay).await;
        })
    }
}
