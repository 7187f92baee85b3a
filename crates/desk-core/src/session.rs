//! Explicit session context for a reconciliation cycle.
//!
//! The calling application owns this value and passes it into every fetch.
//! Nothing in Frontdesk keeps a global "current hotel" or token.

use std::fmt;

/// The selected hotel and credentials for one dashboard session.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    /// Selected hotel; fetches are scoped to it when set.
    pub hotel_id: Option<String>,
    /// Bearer token sent with every source request.
    pub token: Option<String>,
}

impl SessionContext {
    #[must_use]
    pub fn new(hotel_id: Option<String>, token: Option<String>) -> Self {
        Self {
            hotel_id: hotel_id.filter(|id| !id.trim().is_empty()),
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Same credentials, different selected hotel.
    #[must_use]
    pub fn with_hotel(&self, hotel_id: impl Into<String>) -> Self {
        Self::new(Some(hotel_id.into()), self.token.clone())
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("hotel_id", &self.hotel_id)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
