use rand::seq::SliceRandom;
use serde::Serialize;

/// Placeholder forecast shown in the trip overview. Picked at random from a
/// fixed table; there is no real weather integration.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct WeatherSnapshot {
    pub temperature: &'static str,
    pub condition: &'static str,
    pub humidity: &'static str,
}

const OPTIONS: [WeatherSnapshot; 4] = [
    WeatherSnapshot {
        temperature: "25°C",
        condition: "Sunny",
        humidity: "60%",
    },
    WeatherSnapshot {
        temperature: "22°C",
        condition: "Partly Cloudy",
        humidity: "65%",
    },
    WeatherSnapshot {
        temperature: "28°C",
        condition: "Light Rain",
        humidity: "80%",
    },
    WeatherSnapshot {
        temperature: "30°C",
        condition: "Clear",
        humidity: "55%",
    },
];

impl WeatherSnapshot {
    pub fn sample() -> Self {
        let mut rng = rand::thread_rng();
        OPTIONS.choose(&mut rng).copied().unwrap_or(OPTIONS[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_comes_from_table() {
        for _ in 0..20 {
            assert!(OPTIONS.contains(&WeatherSnapshot::sample()));
        }
    }
}
