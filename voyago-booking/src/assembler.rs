use crate::models::{Booking, ContactInfo, Passenger, UnitAssignment};
use crate::selection::SelectionState;
use crate::store::BookingStore;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use voyago_core::reference::{BookingReference, DEFAULT_REFERENCE_LENGTH};
use voyago_core::validation::{is_valid_email, is_valid_phone};
use voyago_inventory::{AddonSelection, PricingRules, TravelKind};

/// A single validation failure. The assembler collects every violation
/// before failing so the user sees the complete list at once.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, thiserror::Error)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "code", content = "details")]
pub enum Violation {
    #[error("At least one passenger is required")]
    NoPassengers,

    #[error("Passenger {number} name is required")]
    EmptyPassengerName { number: usize },

    #[error("Valid email address is required")]
    InvalidEmail,

    #[error("Valid phone number is required")]
    InvalidPhone,

    #[error("Please select {required} unit(s) ({selected} selected)")]
    InsufficientUnits { required: usize, selected: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Booking validation failed with {} violation(s)", .0.len())]
    ValidationFailed(Vec<Violation>),
}

/// The chosen itinerary, as quoted by the provider at search time.
#[derive(Debug, Clone)]
pub struct ItineraryQuote {
    pub kind: TravelKind,
    pub itinerary: String,
    pub route: String,
    pub travel_date: NaiveDate,
    pub base_fare: i64,
}

/// Turns a satisfied selection plus form data into a finalized `Booking`.
#[derive(Debug, Clone)]
pub struct BookingAssembler {
    reference_length: usize,
}

impl Default for BookingAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_LENGTH)
    }
}

impl BookingAssembler {
    pub fn new(reference_length: usize) -> Self {
        Self { reference_length }
    }

    /// Validate and finalize. On any violation the form data is rejected
    /// as a whole: no booking is created, the store is untouched and the
    /// selection stays intact so the user can correct and resubmit.
    ///
    /// On success the booking is appended to the store (most-recent-last)
    /// and returned. The first `passengers.len()` selected units are paired
    /// with passengers in click order; extra selections stay unused.
    pub fn confirm(
        &self,
        selection: &SelectionState,
        passengers: &[Passenger],
        contact: &ContactInfo,
        addons: &AddonSelection,
        quote: &ItineraryQuote,
        rules: &PricingRules,
        store: &mut dyn BookingStore,
    ) -> Result<Booking, BookingError> {
        let mut violations = Vec::new();

        if passengers.is_empty() {
            violations.push(Violation::NoPassengers);
        }
        for (index, passenger) in passengers.iter().enumerate() {
            if passenger.name.trim().is_empty() {
                violations.push(Violation::EmptyPassengerName { number: index + 1 });
            }
        }
        if !is_valid_email(&contact.email) {
            violations.push(Violation::InvalidEmail);
        }
        if !is_valid_phone(&contact.phone) {
            violations.push(Violation::InvalidPhone);
        }

        // Hotels book without a unit layout; everything else needs one
        // selected unit per passenger.
        let required_units = match quote.kind {
            TravelKind::Hotel => 0,
            _ => passengers.len(),
        };
        if selection.selected().len() < required_units {
            violations.push(Violation::InsufficientUnits {
                required: required_units,
                selected: selection.selected().len(),
            });
        }

        if !violations.is_empty() {
            return Err(BookingError::ValidationFailed(violations));
        }

        let price = rules.quote(quote.base_fare, passengers.len(), addons);

        let mut reference = BookingReference::generate(self.reference_length);
        while store.reference_exists(reference.as_str()) {
            reference = BookingReference::generate(self.reference_length);
        }

        let assignments = passengers
            .iter()
            .zip(selection.selected().iter().take(required_units))
            .map(|(passenger, unit_id)| UnitAssignment {
                passenger: passenger.clone(),
                unit_id: unit_id.clone(),
            })
            .collect();

        let booking = Booking {
            reference,
            kind: quote.kind,
            itinerary: quote.itinerary.clone(),
            route: quote.route.clone(),
            travel_date: quote.travel_date,
            passengers: passengers.to_vec(),
            assignments,
            contact: contact.clone(),
            price,
            created_at: Utc::now(),
        };

        tracing::info!(
            reference = %booking.reference,
            kind = ?booking.kind,
            total = booking.price.total,
            "Booking confirmed"
        );
        store.append(booking.clone());
        Ok(booking)
    }
}
