//! Entity structs for all Frontdesk domain objects.
//!
//! [`RawRecord`] is what a source hands us. Every other struct here is a
//! canonical record produced by the field normalizer and rebuilt from scratch
//! on each reconciliation cycle. All structs derive `Serialize`, `Deserialize`,
//! and `JsonSchema`.

mod activity;
mod feedback;
mod guest;
mod hotel;
mod raw;
mod reservation;
mod room;

pub use activity::{ActivityEvent, RoomState};
pub use feedback::FeedbackEntry;
pub use guest::Guest;
pub use hotel::{DEFAULT_ESTABLISHED_YEAR, Hotel};
pub use raw::RawRecord;
pub use reservation::Reservation;
pub use room::Room;
