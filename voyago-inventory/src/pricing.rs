use serde::{Deserialize, Serialize};

/// Meal choices offered during booking. Purely an addon label; only food
/// with a surcharge shows up in the price breakdown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealPreference {
    #[default]
    Regular,
    Vegetarian,
    Vegan,
    Halal,
    Kosher,
    Diabetic,
}

/// Extra checked baggage tiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BaggageAllowance {
    #[default]
    None,
    Kg15,
    Kg20,
    Kg30,
}

/// Addon choices made on the booking form.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AddonSelection {
    #[serde(default)]
    pub meal: MealPreference,
    #[serde(default)]
    pub baggage: BaggageAllowance,
    #[serde(default)]
    pub insurance: bool,
    /// Bedding and linen, priced per passenger (train bookings).
    #[serde(default)]
    pub bedding: bool,
}

/// Addon price table in whole rupees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonPrices {
    pub baggage_15kg: i64,
    pub baggage_20kg: i64,
    pub baggage_30kg: i64,
    pub insurance: i64,
    pub bedding_per_passenger: i64,
}

impl Default for AddonPrices {
    fn default() -> Self {
        Self {
            baggage_15kg: 1_500,
            baggage_20kg: 2_500,
            baggage_30kg: 4_000,
            insurance: 800,
            bedding_per_passenger: 60,
        }
    }
}

/// Percentage-based tax/fee rules plus the addon price table, supplied by
/// the provider alongside each search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRules {
    pub tax_rate: f64,
    pub service_fee_rate: f64,
    pub addons: AddonPrices,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            tax_rate: 0.05,
            service_fee_rate: 0.025,
            addons: AddonPrices::default(),
        }
    }
}

impl PricingRules {
    /// Quote a full breakdown for one itinerary.
    ///
    /// Base is the per-head fare times the passenger count; taxes and fees
    /// are percentages of the base; addons are flat per the price table.
    pub fn quote(
        &self,
        base_fare: i64,
        passengers: usize,
        addons: &AddonSelection,
    ) -> PriceBreakdown {
        let base = base_fare * passengers as i64;
        let taxes = (base as f64 * self.tax_rate) as i64;
        let fees = (base as f64 * self.service_fee_rate) as i64;

        let mut addon_total = match addons.baggage {
            BaggageAllowance::None => 0,
            BaggageAllowance::Kg15 => self.addons.baggage_15kg,
            BaggageAllowance::Kg20 => self.addons.baggage_20kg,
            BaggageAllowance::Kg30 => self.addons.baggage_30kg,
        };
        if addons.insurance {
            addon_total += self.addons.insurance;
        }
        if addons.bedding {
            addon_total += self.addons.bedding_per_passenger * passengers as i64;
        }

        PriceBreakdown {
            base,
            taxes,
            fees,
            addons: addon_total,
            total: base + taxes + fees + addon_total,
        }
    }
}

/// Cost breakdown shown on the confirmation screen. `total` is always the
/// sum of the other components.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub base: i64,
    pub taxes: i64,
    pub fees: i64,
    pub addons: i64,
    pub total: i64,
}
