use crate::map::InventoryError;
use crate::pricing::{AddonPrices, PricingRules};
use crate::provider::{
    Itinerary, InventoryProvider, LayoutParams, SearchCriteria, SearchResponse, TravelKind,
};
use crate::unit::LayoutKind;
use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use uuid::Uuid;

const AIRLINES: [&str; 6] = [
    "IndiGo",
    "Air India",
    "SpiceJet",
    "Vistara",
    "Go First",
    "Akasa Air",
];

const TRAIN_NAMES: [&str; 6] = [
    "Rajdhani Express",
    "Shatabdi Express",
    "Duronto Express",
    "Garib Rath",
    "Jan Shatabdi",
    "Superfast Express",
];

const HOTEL_NAMES: [&str; 5] = [
    "Grand Palace Hotel",
    "Seaside Resort",
    "City Central Inn",
    "Heritage Haveli",
    "Budget Stay Lodge",
];

/// Simulated supplier. Generates randomized candidates and a "taken"
/// snapshot per search, the way the demo data generators did.
#[derive(Debug, Clone, Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }

    fn flight_base_fare(class: &str) -> i64 {
        match class {
            "Premium Economy" => 6_000,
            "Business" => 12_000,
            "First" => 20_000,
            _ => 3_000,
        }
    }

    fn flight_tax_rate(class: &str) -> f64 {
        match class {
            "Premium Economy" => 0.08,
            "Business" => 0.12,
            "First" => 0.18,
            _ => 0.05,
        }
    }

    fn train_base_fare(class: &str) -> i64 {
        match class {
            "AC 3 Tier (3A)" => 1_200,
            "AC 2 Tier (2A)" => 1_800,
            "AC 1st Class (1A)" => 3_000,
            _ => 400,
        }
    }

    fn within_range(fare: i64, range: Option<(i64, i64)>) -> bool {
        match range {
            Some((min, max)) => fare >= min && fare <= max,
            None => true,
        }
    }

    /// Sample `count` pre-occupied units from the layout grid.
    fn sample_taken(params: &LayoutParams, count: usize) -> HashSet<String> {
        let labels = params.layout.labels();
        let all_ids: Vec<String> = (1..=params.rows)
            .flat_map(|row| {
                labels[..params.units_per_row]
                    .iter()
                    .map(move |label| format!("{}{}", row, label))
            })
            .collect();
        let mut rng = rand::thread_rng();
        all_ids
            .choose_multiple(&mut rng, count.min(all_ids.len()))
            .cloned()
            .collect()
    }

    fn search_flights(&self, criteria: &SearchCriteria) -> SearchResponse {
        let mut rng = rand::thread_rng();
        let base = Self::flight_base_fare(&criteria.class);

        let mut itineraries = Vec::new();
        for _ in 0..8 {
            let fare = base + rng.gen_range(-1_000..=2_000);
            if !Self::within_range(fare, criteria.price_range) {
                continue;
            }
            let airline = AIRLINES.choose(&mut rng).unwrap_or(&AIRLINES[0]);
            let dep_hour = rng.gen_range(5..22);
            let duration = rng.gen_range(2..=6);
            itineraries.push(Itinerary {
                id: Uuid::new_v4(),
                label: format!(
                    "{} {}{}",
                    airline,
                    &airline[..2].to_uppercase(),
                    rng.gen_range(100..999)
                ),
                departs: Some(format!("{:02}:{:02}", dep_hour, rng.gen_range(0..60))),
                arrives: Some(format!(
                    "{:02}:{:02}",
                    (dep_hour + duration) % 24,
                    rng.gen_range(0..60)
                )),
                duration_hours: duration,
                stops: rng.gen_range(0..=2),
                base_fare: fare,
            });
        }

        let layout = LayoutParams {
            layout: LayoutKind::FlightCabin,
            rows: 6,
            units_per_row: 6,
        };
        let taken_count = rng.gen_range(5..=15);

        SearchResponse {
            layout: (!itineraries.is_empty()).then_some(layout),
            taken_ids: Self::sample_taken(&layout, taken_count),
            pricing: PricingRules {
                tax_rate: Self::flight_tax_rate(&criteria.class),
                service_fee_rate: 0.025,
                addons: AddonPrices::default(),
            },
            itineraries,
        }
    }

    fn search_trains(&self, criteria: &SearchCriteria) -> SearchResponse {
        let mut rng = rand::thread_rng();
        let base = Self::train_base_fare(&criteria.class);

        let mut itineraries = Vec::new();
        for _ in 0..6 {
            let fare = base + rng.gen_range(-200..=500);
            if !Self::within_range(fare, criteria.price_range) {
                continue;
            }
            let name = TRAIN_NAMES.choose(&mut rng).unwrap_or(&TRAIN_NAMES[0]);
            let dep_hour = rng.gen_range(0..24);
            let duration = rng.gen_range(4..=18);
            itineraries.push(Itinerary {
                id: Uuid::new_v4(),
                label: format!("{} ({})", name, rng.gen_range(10_000..23_000)),
                departs: Some(format!("{:02}:{:02}", dep_hour, rng.gen_range(0..60))),
                arrives: Some(format!(
                    "{:02}:{:02}",
                    (dep_hour + duration) % 24,
                    rng.gen_range(0..60)
                )),
                duration_hours: duration,
                stops: rng.gen_range(0..=8),
                base_fare: fare,
            });
        }

        let layout = LayoutParams {
            layout: LayoutKind::TrainCoach,
            rows: 3,
            units_per_row: 4,
        };
        let taken_count = rng.gen_range(3..=8);

        SearchResponse {
            layout: (!itineraries.is_empty()).then_some(layout),
            taken_ids: Self::sample_taken(&layout, taken_count),
            // Trains carry a flat 2% convenience fee and no tax line.
            pricing: PricingRules {
                tax_rate: 0.0,
                service_fee_rate: 0.02,
                addons: AddonPrices::default(),
            },
            itineraries,
        }
    }

    fn search_hotels(&self, criteria: &SearchCriteria) -> SearchResponse {
        let mut rng = rand::thread_rng();

        let mut itineraries = Vec::new();
        for name in HOTEL_NAMES {
            let rate = rng.gen_range(1_500..=12_000);
            if !Self::within_range(rate, criteria.price_range) {
                continue;
            }
            itineraries.push(Itinerary {
                id: Uuid::new_v4(),
                label: name.to_string(),
                departs: None,
                arrives: None,
                duration_hours: 0,
                stops: 0,
                base_fare: rate,
            });
        }

        // No unit layout for hotels; selection stays disabled.
        SearchResponse {
            itineraries,
            layout: None,
            taken_ids: HashSet::new(),
            pricing: PricingRules {
                tax_rate: 0.12,
                service_fee_rate: 0.02,
                addons: AddonPrices::default(),
            },
        }
    }
}

#[async_trait]
impl InventoryProvider for MockProvider {
    async fn search(&self, criteria: &SearchCriteria) -> Result<SearchResponse, InventoryError> {
        tracing::debug!(
            kind = ?criteria.kind,
            origin = %criteria.origin,
            destination = %criteria.destination,
            "Running mock inventory search"
        );
        Ok(match criteria.kind {
            TravelKind::Flight => self.search_flights(criteria),
            TravelKind::Train => self.search_trains(criteria),
            TravelKind::Hotel => self.search_hotels(criteria),
        })
    }
}
