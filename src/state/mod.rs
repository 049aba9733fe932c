//! Client-side state stores
//!
//! Each store is scoped to the screen that owns it and dropped on
//! navigation; nothing here outlives the console command that created it.
//! The stores hold the only client-side logic in the system: the booking
//! composer's derived time/price, the availability grid's optimistic
//! toggling, and the review draft's input rules.

mod booking;
mod review;
mod slots;

pub use booking::BookingComposer;
pub use review::ReviewDraft;
pub use slots::{SlotGrid, SlotStats, SlotStatus};
