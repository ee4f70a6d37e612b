use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::{Floor, model::GridPoint};

/// Opening hours as displayed, one entry per weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl Default for OperatingHours {
    fn default() -> Self {
        let weekday = || "9:00-18:00".to_string();
        Self {
            monday: weekday(),
            tuesday: weekday(),
            wednesday: weekday(),
            thursday: weekday(),
            friday: weekday(),
            saturday: weekday(),
            sunday: "10:00-16:00".to_string(),
        }
    }
}

impl OperatingHours {
    pub fn for_weekday(&self, day: Weekday) -> &str {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub title: String,
    pub valid_until: NaiveDate,
    pub active: bool,
}

impl Promotion {
    /// Active and not yet expired on `today`
    pub fn is_running(&self, today: NaiveDate) -> bool {
        self.active && self.valid_until > today
    }
}

/// Shop or service record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub floor: Floor,
    pub category: String,
    pub location: GridPoint,
    /// Topology node the store is reached through
    pub node_id: String,
    pub operating_hours: OperatingHours,
    pub contact: String,
    pub description: String,
    pub promotions: Vec<Promotion>,
    pub active: bool,
}

impl Store {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        floor: Floor,
        node_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            floor,
            category: category.into(),
            location: GridPoint::default(),
            node_id: node_id.into(),
            operating_hours: OperatingHours::default(),
            contact: String::new(),
            description: String::new(),
            promotions: Vec::new(),
            active: true,
        }
    }

    pub fn has_running_promotion(&self, today: NaiveDate) -> bool {
        self.promotions.iter().any(|p| p.is_running(today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hours_are_shorter_on_sunday() {
        let hours = OperatingHours::default();
        assert_eq!(hours.for_weekday(Weekday::Wed), "9:00-18:00");
        assert_eq!(hours.for_weekday(Weekday::Sun), "10:00-16:00");
    }

    #[test]
    fn promotion_expires_on_its_end_date() {
        let promo = Promotion {
            title: "Summer sale".into(),
            valid_until: NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
            active: true,
        };
        assert!(promo.is_running(NaiveDate::from_ymd_opt(2025, 8, 30).unwrap()));
        assert!(!promo.is_running(NaiveDate::from_ymd_opt(2025, 8, 31).unwrap()));

        let paused = Promotion {
            active: false,
            ..promo
        };
        assert!(!paused.is_running(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
    }
}
