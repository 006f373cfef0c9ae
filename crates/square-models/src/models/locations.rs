//! Seller locations.

use serde::{Deserialize, Serialize};
use square_core::Nullable;

use super::common::{Address, Coordinates};
use super::errors::Error;
use crate::enums::{Country, Currency, DayOfWeek, LocationCapability, LocationStatus, LocationType};

/// A physical or mobile place of business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Location {
    /// Square-assigned location ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Seller-facing name, unique per seller.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// IANA time zone, e.g. `America/Los_Angeles`.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub timezone: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<LocationCapability>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LocationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Seller that owns the location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    /// IETF BCP 47 code, e.g. `en-US`.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub language_code: Nullable<String>,
    /// Currency used for all amounts at this location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub phone_number: Nullable<String>,
    /// Buyer-facing name.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub business_name: Nullable<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub website_url: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_hours: Option<BusinessHours>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub business_email: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub description: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub twitter_username: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub instagram_username: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub facebook_url: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Merchant category code.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub mcc: Nullable<String>,
}

impl Location {
    #[must_use]
    pub fn has_capability(&self, capability: &LocationCapability) -> bool {
        self.capabilities
            .as_deref()
            .is_some_and(|caps| caps.contains(capability))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BusinessHours {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub periods: Nullable<Vec<BusinessHoursPeriod>>,
}

impl BusinessHours {
    /// Periods that start on `day`.
    pub fn periods_on(&self, day: &DayOfWeek) -> impl Iterator<Item = &BusinessHoursPeriod> {
        self.periods
            .value()
            .into_iter()
            .flatten()
            .filter(move |period| period.day_of_week.as_ref() == Some(day))
    }
}

/// An opening window on one day, in local `HH:MM:SS` time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BusinessHoursPeriod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<DayOfWeek>,
    /// `HH:MM:SS` in the location's time zone.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub start_local_time: Nullable<String>,
    /// `HH:MM:SS` in the location's time zone.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub end_local_time: Nullable<String>,
}

// --- Endpoint bodies ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListLocationsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Location>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_location() {
        let location: Location = serde_json::from_value(json!({
            "id": "L1",
            "name": "Main St",
            "type": "PHYSICAL",
            "capabilities": ["CREDIT_CARD_PROCESSING", "RECEIPT_PRINTING"],
            "coordinates": {"latitude": 37.7, "longitude": -122.4},
            "website_url": null
        }))
        .unwrap();

        assert_eq!(location.location_type, Some(LocationType::Physical));
        assert!(location.has_capability(&LocationCapability::CreditCardProcessing));
        assert!(location.has_capability(&LocationCapability::from_token("RECEIPT_PRINTING")));
        assert!(location.website_url.is_null());
        assert_eq!(location.coordinates.unwrap().latitude, Nullable::Value(37.7));
    }

    #[test]
    fn test_periods_on() {
        let hours: BusinessHours = serde_json::from_value(json!({
            "periods": [
                {"day_of_week": "MON", "start_local_time": "09:00:00", "end_local_time": "12:00:00"},
                {"day_of_week": "TUE", "start_local_time": "09:00:00", "end_local_time": "17:00:00"},
                {"day_of_week": "MON", "start_local_time": "13:00:00", "end_local_time": "17:00:00"}
            ]
        }))
        .unwrap();
        assert_eq!(hours.periods_on(&DayOfWeek::Mon).count(), 2);
        assert_eq!(BusinessHours::default().periods_on(&DayOfWeek::Mon).count(), 0);
    }
}
