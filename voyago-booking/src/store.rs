use crate::models::Booking;

/// Session-scoped booking history the assembler writes finalized bookings
/// to. Synchronous and non-failing at this boundary; durability is the
/// implementation's concern.
pub trait BookingStore: Send + Sync {
    /// Append a finalized booking, most-recent-last.
    fn append(&mut self, booking: Booking);

    /// All bookings in append order.
    fn list(&self) -> &[Booking];

    /// Bulk-clear the history. Individual bookings are never removed.
    fn clear(&mut self);

    /// Whether a reference is already in use within this store's scope.
    fn reference_exists(&self, reference: &str) -> bool {
        self.list().iter().any(|b| b.reference.as_str() == reference)
    }
}
