//! Admin API wire types
//!
//! Defaulting is uniform: a field missing from a server response takes the
//! field's documented default, never a deserialization error.

use serde::{Deserialize, Serialize};

/// A restaurant listing as exchanged with the admin API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Server-assigned identifier, never generated client-side
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub restaurant_id: String,

    #[serde(default)]
    pub restaurant_name: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub website: String,

    /// Cuisine category (free text, e.g. "Italian")
    #[serde(default)]
    pub cuisine_type: String,

    #[serde(default)]
    pub is_kosher: bool,

    #[serde(default)]
    pub opening_hours: OpeningHours,
}

/// Opening hours per weekday
///
/// Wire keys are capitalized day names ("Monday" .. "Sunday"); a day with
/// no configured hours is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OpeningHours {
    #[serde(default)]
    pub monday: String,

    #[serde(default)]
    pub tuesday: String,

    #[serde(default)]
    pub wednesday: String,

    #[serde(default)]
    pub thursday: String,

    #[serde(default)]
    pub friday: String,

    #[serde(default)]
    pub saturday: String,

    #[serde(default)]
    pub sunday: String,
}

impl OpeningHours {
    /// Day-name/value pairs in week order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("Monday", self.monday.as_str()),
            ("Tuesday", self.tuesday.as_str()),
            ("Wednesday", self.wednesday.as_str()),
            ("Thursday", self.thursday.as_str()),
            ("Friday", self.friday.as_str()),
            ("Saturday", self.saturday.as_str()),
            ("Sunday", self.sunday.as_str()),
        ]
        .into_iter()
    }
}

/// A single server-recorded access event
///
/// Entries are produced by the server's audit middleware; the client only
/// reads them. Fields the server did not record come back as `"N/A"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuditLogEntry {
    #[serde(default = "not_available")]
    pub timestamp: String,

    /// Query string of the audited request
    #[serde(default = "not_available")]
    pub query: String,

    #[serde(default = "not_available")]
    pub ip: String,

    #[serde(default = "not_available")]
    pub country: String,
}

fn not_available() -> String {
    "N/A".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_restaurant_full_deserialization() {
        let json = r#"{
            "restaurant_id": "abc-123",
            "restaurant_name": "Deli",
            "address": "1 Main St",
            "phone": "555-0100",
            "website": "https://deli.example",
            "cuisine_type": "Deli",
            "is_kosher": true,
            "opening_hours": {
                "Monday": "9:00-17:00",
                "Tuesday": "9:00-17:00",
                "Wednesday": "9:00-17:00",
                "Thursday": "9:00-17:00",
                "Friday": "9:00-14:00",
                "Saturday": "",
                "Sunday": "10:00-16:00"
            }
        }"#;

        let restaurant: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!(restaurant.restaurant_id, "abc-123");
        assert_eq!(restaurant.restaurant_name, "Deli");
        assert_eq!(restaurant.address, "1 Main St");
        assert!(restaurant.is_kosher);
        assert_eq!(restaurant.opening_hours.friday, "9:00-14:00");
        assert_eq!(restaurant.opening_hours.saturday, "");
    }

    #[test]
    fn test_restaurant_missing_opening_hours_defaults_to_empty_days() {
        let json = r#"{"restaurant_name": "Deli"}"#;

        let restaurant: Restaurant = serde_json::from_str(json).unwrap();
        for (_, hours) in restaurant.opening_hours.iter() {
            assert_eq!(hours, "");
        }
    }

    #[test]
    fn test_restaurant_missing_fields_default() {
        let restaurant: Restaurant = serde_json::from_str("{}").unwrap();
        assert_eq!(restaurant.restaurant_id, "");
        assert_eq!(restaurant.restaurant_name, "");
        assert_eq!(restaurant.address, "");
        assert_eq!(restaurant.phone, "");
        assert_eq!(restaurant.website, "");
        assert_eq!(restaurant.cuisine_type, "");
        assert!(!restaurant.is_kosher);
    }

    #[test]
    fn test_restaurant_serialization_uses_day_names() {
        let mut restaurant = Restaurant {
            restaurant_name: "Deli".to_string(),
            ..Restaurant::default()
        };
        restaurant.opening_hours.monday = "9:00-17:00".to_string();

        let value = serde_json::to_value(&restaurant).unwrap();
        assert_eq!(value["restaurant_name"], "Deli");
        assert_eq!(value["opening_hours"]["Monday"], "9:00-17:00");
        assert_eq!(value["opening_hours"]["Sunday"], "");
        // Server assigns the ID; an empty one must not go on the wire
        assert!(value.get("restaurant_id").is_none());
    }

    #[test]
    fn test_restaurant_serialization_keeps_existing_id() {
        let restaurant = Restaurant {
            restaurant_id: "abc-123".to_string(),
            ..Restaurant::default()
        };

        let value = serde_json::to_value(&restaurant).unwrap();
        assert_eq!(value["restaurant_id"], "abc-123");
    }

    #[test]
    fn test_restaurant_roundtrip_preserves_fields() {
        let submitted = Restaurant {
            restaurant_name: "Deli".to_string(),
            address: "1 Main St".to_string(),
            phone: "555-0100".to_string(),
            website: "https://deli.example".to_string(),
            cuisine_type: "Deli".to_string(),
            is_kosher: true,
            opening_hours: OpeningHours {
                monday: "9:00-17:00".to_string(),
                ..OpeningHours::default()
            },
            ..Restaurant::default()
        };

        let json = serde_json::to_string(&submitted).unwrap();
        let returned: Restaurant = serde_json::from_str(&json).unwrap();
        assert_eq!(returned, submitted);
    }

    #[test]
    fn test_audit_log_entry_full() {
        let json = json!([
            {"timestamp": "t1", "query": "q1", "ip": "1.2.3.4", "country": "US"}
        ]);

        let entries: Vec<AuditLogEntry> = serde_json::from_value(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].timestamp, "t1");
        assert_eq!(entries[0].query, "q1");
        assert_eq!(entries[0].ip, "1.2.3.4");
        assert_eq!(entries[0].country, "US");
    }

    #[test]
    fn test_audit_log_entry_missing_fields_use_sentinel() {
        let entry: AuditLogEntry = serde_json::from_str(r#"{"query": "q=1"}"#).unwrap();
        assert_eq!(entry.timestamp, "N/A");
        assert_eq!(entry.query, "q=1");
        assert_eq!(entry.ip, "N/A");
        assert_eq!(entry.country, "N/A");
    }

    #[test]
    fn test_opening_hours_iter_week_order() {
        let hours = OpeningHours::default();
        let days: Vec<&str> = hours.iter().map(|(day, _)| day).collect();
        assert_eq!(
            days,
            [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
    }
}
