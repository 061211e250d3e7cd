pub mod reference;
pub mod session;
pub mod validation;

pub use reference::BookingReference;
pub use session::SessionId;
