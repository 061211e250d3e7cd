use crate::food::{self, FoodRecommendation};
use crate::weather::WeatherSnapshot;
use serde::{Deserialize, Serialize};

/// Trip parameters collected by the planning form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripParameters {
    pub destination: String,
    pub days: u32,
    pub month: String,
    pub budget: String,
    pub travel_type: String,
    pub accommodation: String,
    pub pace: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub special_requests: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayPlan {
    pub day: u32,
    pub theme: String,
    pub morning: String,
    pub afternoon: String,
    pub evening: String,
    pub tip: Option<String>,
}

/// Narrative itinerary produced from trip parameters.
#[derive(Debug, Clone, Serialize)]
pub struct TravelPlan {
    pub title: String,
    pub weather: WeatherSnapshot,
    pub days: Vec<DayPlan>,
    pub interest_highlights: Vec<String>,
    /// Must-try dishes for the destination; empty when there is no curated
    /// table for it.
    pub local_dishes: Vec<FoodRecommendation>,
    pub tips: Vec<String>,
    pub special_requests: Option<String>,
}

/// Template-based plan generation. Arrival and departure days are fixed
/// templates; middle days rotate through interest-driven themes.
#[derive(Debug, Clone, Default)]
pub struct PlanGenerator;

impl PlanGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, params: &TripParameters) -> TravelPlan {
        tracing::debug!(destination = %params.destination, days = params.days, "Generating travel plan");

        let days = params.days.max(1);
        let mut day_plans = Vec::with_capacity(days as usize);

        day_plans.push(DayPlan {
            day: 1,
            theme: "Grand Arrival".to_string(),
            morning: format!(
                "Airport pickup and check-in to {}",
                params.accommodation.to_lowercase()
            ),
            afternoon: "Welcome lunch and neighborhood orientation walk".to_string(),
            evening: "Local market visit and traditional dinner".to_string(),
            tip: Some("Keep the first day light to adjust to the new environment".to_string()),
        });

        let themes = Self::middle_day_themes(&params.interests);
        for day in 2..days {
            let (theme, morning, afternoon, evening) =
                &themes[(day as usize - 2) % themes.len()];
            day_plans.push(DayPlan {
                day,
                theme: theme.to_string(),
                morning: morning.to_string(),
                afternoon: afternoon.to_string(),
                evening: evening.to_string(),
                tip: None,
            });
        }

        if days > 1 {
            day_plans.push(DayPlan {
                day: days,
                theme: "Farewell & Departure".to_string(),
                morning: "Final shopping and souvenir hunting".to_string(),
                afternoon: "Packing and checkout".to_string(),
                evening: "Airport transfer and departure".to_string(),
                tip: Some("Keep a 3-4 hour buffer for international flights".to_string()),
            });
        }

        TravelPlan {
            title: format!(
                "{}-Day {} Adventure to {}",
                days, params.travel_type, params.destination
            ),
            weather: WeatherSnapshot::sample(),
            days: day_plans,
            interest_highlights: Self::interest_highlights(&params.interests),
            local_dishes: food::local_dishes(&params.destination).to_vec(),
            tips: vec![
                "Download offline maps and a translation app".to_string(),
                "Save local emergency numbers".to_string(),
                "Keep some local cash for small vendors".to_string(),
            ],
            special_requests: params.special_requests.clone(),
        }
    }

    fn middle_day_themes(
        interests: &[String],
    ) -> Vec<(&'static str, &'static str, &'static str, &'static str)> {
        let mut themes = Vec::new();
        let has = |needle: &str| {
            interests
                .iter()
                .any(|i| i.to_lowercase().contains(needle))
        };

        if has("food") || has("culinary") {
            themes.push((
                "Culinary Experiences",
                "Food walking tour with a local guide",
                "Cooking class featuring regional dishes",
                "Street food adventure and restaurant hopping",
            ));
        }
        if has("history") || has("culture") {
            themes.push((
                "Cultural & Historical Sites",
                "Guided museum tour",
                "Historical monument visits",
                "Cultural performance or heritage walk",
            ));
        }
        if has("beach") || has("water") {
            themes.push((
                "Beach & Water Activities",
                "Beach relaxation with water sports",
                "Snorkeling or diving excursion",
                "Sunset boat ride and seafood dining",
            ));
        }
        if has("nature") || has("adventure") {
            themes.push((
                "Nature & Adventure",
                "National park or wildlife sanctuary visit",
                "Hiking trail with scenic viewpoints",
                "Landscape photography at golden hour",
            ));
        }
        if themes.is_empty() {
            themes.push((
                "Core Adventures",
                "City highlights tour",
                "Free exploration at your own pace",
                "Dinner at a recommended local spot",
            ));
        }
        themes
    }

    fn interest_highlights(interests: &[String]) -> Vec<String> {
        interests
            .iter()
            .map(|interest| format!("Curated {} experiences", interest.to_lowercase()))
            .collect()
    }
}
