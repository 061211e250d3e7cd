use voyago_booking::models::Booking;
use voyago_booking::store::BookingStore;

/// In-memory, session-scoped booking history. Discarded with the session;
/// durability is explicitly out of scope.
#[derive(Debug, Default)]
pub struct MemoryBookingStore {
    bookings: Vec<Booking>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingStore for MemoryBookingStore {
    fn append(&mut self, booking: Booking) {
        tracing::debug!(reference = %booking.reference, "Appending booking to history");
        self.bookings.push(booking);
    }

    fn list(&self) -> &[Booking] {
        &self.bookings
    }

    fn clear(&mut self) {
        tracing::debug!(count = self.bookings.len(), "Clearing booking history");
        self.bookings.clear();
    }
}
