pub mod food;
pub mod generator;
pub mod weather;

pub use food::{CuisineSection, FoodRecommendation};
pub use generator::{DayPlan, PlanGenerator, TravelPlan, TripParameters};
pub use weather::WeatherSnapshot;
