use super::election::SeatCount;
use serde::{Deserialize, Serialize};

pub const DEFAULT_QUOTIENT_PRECISION: u32 = 6;
pub const DEFAULT_VACANCY_LABEL: &str = "Vacancy";
/// Upper bound on council size accepted from a snapshot or the command line.
pub const MAX_SEAT_COUNT: u32 = 1000;

/// Per-election settings, read from the snapshot's `config` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionConfig {
    #[serde(default)]
    pub seat_count: Option<SeatCount>,
    #[serde(default = "default_quotient_precision")]
    pub quotient_precision: u32,
    #[serde(default = "default_vacancy_label")]
    pub vacancy_label: String,
}

fn default_quotient_precision() -> u32 {
    DEFAULT_QUOTIENT_PRECISION
}

fn default_vacancy_label() -> String {
    DEFAULT_VACANCY_LABEL.to_string()
}

impl Default for ElectionConfig {
    fn default() -> Self {
        Self {
            seat_count: None,
            quotient_precision: DEFAULT_QUOTIENT_PRECISION,
            vacancy_label: DEFAULT_VACANCY_LABEL.to_string(),
        }
    }
}

impl ElectionConfig {
    /// Apply command-line overrides on top of the snapshot's values.
    pub fn with_overrides(mut self, seats: Option<u32>) -> Self {
        if let Some(seats) = seats {
            self.seat_count = Some(SeatCount::new(seats));
        }
        self
    }

    /// Placeholder name for an unfilled seat at `position` within a party.
    pub fn vacancy_name(&self, position: u32) -> String {
        format!("{} {}", self.vacancy_label, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: ElectionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ElectionConfig::default());
    }

    #[test]
    fn cli_seats_override_snapshot() {
        let config: ElectionConfig = serde_json::from_str(r#"{"seatCount": 6}"#).unwrap();
        assert_eq!(config.seat_count, Some(SeatCount::new(6)));
        let config = config.with_overrides(Some(8));
        assert_eq!(config.seat_count, Some(SeatCount::new(8)));
    }

    #[test]
    fn vacancy_name_is_position_labeled() {
        let config = ElectionConfig::default();
        assert_eq!(config.vacancy_name(3), "Vacancy 3");
    }
}
