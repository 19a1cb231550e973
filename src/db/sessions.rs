use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::session::BookingSession;

/// In-memory session registry. Bookings are ephemeral by design: one
/// session per client flow, gone on restart, never written anywhere.
pub type SessionStore = Arc<RwLock<HashMap<Uuid, BookingSession>>>;

pub fn create_session_store() -> SessionStore {
    Arc::new(RwLock::new(HashMap::new()))
}
