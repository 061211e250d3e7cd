pub mod assembler;
pub mod models;
pub mod render;
pub mod selection;
pub mod store;

pub use assembler::{BookingAssembler, BookingError, ItineraryQuote, Violation};
pub use models::{Booking, ContactInfo, Gender, Passenger, UnitAssignment};
pub use render::{RenderedUnit, SeatMapView, UnitStatus};
pub use selection::{RejectReason, SelectionState, ToggleOutcome};
pub use store::BookingStore;
