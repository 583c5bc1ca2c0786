use serde::{Deserialize, Serialize};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HotelStatus {
    Clean,
    Affected,
}

impl HotelStatus {
    pub fn is_clean(self) -> bool {
        matches!(self, HotelStatus::Clean)
    }

    /// Parse a case-insensitive status name, as used in listing filters.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clean" => Some(HotelStatus::Clean),
            "affected" => Some(HotelStatus::Affected),
            _ => None,
        }
    }
}

impl std::fmt::Display for HotelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HotelStatus::Clean => write!(f, "Clean"),
            HotelStatus::Affected => write!(f, "Affected"),
        }
    }
}

// --- Records ---

/// One dated incident entry attached to a hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PestReport {
    #[serde(rename = "type")]
    pub pest_type: String,
    pub date: String,
    pub notes: String,
}

/// Static description of one hotel and its pest-report history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub city: String,
    pub image: String,
    pub description: String,
    pub avg_rating: f64,
    pub price_range: String,
    pub status: HotelStatus,
    pub last_updated: String,
    #[serde(default)]
    pub reports: Vec<PestReport>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hotel_reads_dataset_keys() {
        let hotel: Hotel = serde_json::from_value(json!({
            "id": "grand-plaza",
            "name": "Grand Plaza",
            "city": "Lisbon",
            "image": "https://img.example.org/plaza.jpg",
            "description": "Rooftop pool.\nNear the river.",
            "avgRating": 4.2,
            "priceRange": "$$$",
            "status": "Affected",
            "lastUpdated": "2024-05-02",
            "reports": [
                { "type": "Bed bugs", "date": "2024-04-30", "notes": "Room 412" }
            ]
        }))
        .unwrap();

        assert_eq!(hotel.status, HotelStatus::Affected);
        assert_eq!(hotel.price_range, "$$$");
        assert_eq!(hotel.reports.len(), 1);
        assert_eq!(hotel.reports[0].pest_type, "Bed bugs");
    }

    #[test]
    fn missing_reports_default_to_empty() {
        let hotel: Hotel = serde_json::from_value(json!({
            "id": "a", "name": "A", "city": "B", "image": "", "description": "",
            "avgRating": 3.0, "priceRange": "$", "status": "Clean", "lastUpdated": "2024-01-01"
        }))
        .unwrap();
        assert!(hotel.reports.is_empty());
        assert!(hotel.status.is_clean());
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(HotelStatus::parse("CLEAN"), Some(HotelStatus::Clean));
        assert_eq!(HotelStatus::parse(" affected "), Some(HotelStatus::Affected));
        assert_eq!(HotelStatus::parse("unknown"), None);
    }

    #[test]
    fn status_display_matches_serialized_name() {
        assert_eq!(HotelStatus::Clean.to_string(), "Clean");
        assert_eq!(
            serde_json::to_value(HotelStatus::Affected).unwrap(),
            json!("Affected")
        );
    }
}
