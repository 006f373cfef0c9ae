//! Value objects shared across API domains.

use serde::{Deserialize, Serialize};
use square_core::Nullable;

use crate::enums::{Country, Currency};

/// An amount of money in the smallest denomination of its currency.
///
/// `amount` is in cents for USD, whole yen for JPY, and so on; see
/// [`Currency::minor_unit_exponent`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Money {
    /// Amount in the smallest denomination.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub amount: Nullable<i64>,

    /// ISO 4217 currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

impl Money {
    /// Create a fully populated amount.
    #[must_use]
    pub const fn new(amount: i64, currency: Currency) -> Self {
        Self {
            amount: Nullable::Value(amount),
            currency: Some(currency),
        }
    }

    /// The amount, if set.
    #[must_use]
    pub fn amount(&self) -> Option<i64> {
        self.amount.value().copied()
    }

    /// Sum two amounts of the same currency.
    ///
    /// Returns `None` when the currencies differ, either amount is unset,
    /// or the sum overflows.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        if self.currency != other.currency {
            return None;
        }
        let sum = self.amount()?.checked_add(other.amount()?)?;
        Some(Self {
            amount: Nullable::Value(sum),
            currency: self.currency.clone(),
        })
    }
}

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub address_line_1: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub address_line_2: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub address_line_3: Nullable<String>,
    /// City or town.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub locality: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub sublocality: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub sublocality_2: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub sublocality_3: Nullable<String>,
    /// State or province.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub administrative_district_level_1: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub administrative_district_level_2: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub administrative_district_level_3: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub postal_code: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub first_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub last_name: Nullable<String>,
}

/// Latitude and longitude of a location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Coordinates {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub latitude: Nullable<f64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub longitude: Nullable<f64>,
}

/// A time interval; either end may be open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TimeRange {
    /// RFC 3339 timestamp, inclusive.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub start_at: Nullable<String>,
    /// RFC 3339 timestamp, inclusive.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub end_at: Nullable<String>,
}

impl TimeRange {
    /// Range between two timestamps.
    pub fn between(start_at: impl Into<String>, end_at: impl Into<String>) -> Self {
        Self {
            start_at: Nullable::Value(start_at.into()),
            end_at: Nullable::Value(end_at.into()),
        }
    }
}

/// A range of calendar dates (`YYYY-MM-DD`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub start_date: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub end_date: Nullable<String>,
}

/// Cursor state embedded in paged responses.
///
/// Only the data shape lives here; walking pages belongs to the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PaginationCursor {
    /// Sort value of the last item on the previous page.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub order_value: Nullable<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_money_new() {
        let money = Money::new(1250, Currency::Usd);
        assert_eq!(
            serde_json::to_value(&money).unwrap(),
            json!({"amount": 1250, "currency": "USD"})
        );
    }

    #[test]
    fn test_money_null_amount() {
        let money = Money {
            amount: Nullable::Null,
            currency: None,
        };
        assert_eq!(serde_json::to_value(&money).unwrap(), json!({"amount": null}));
    }

    #[test]
    fn test_money_checked_add() {
        let a = Money::new(100, Currency::Usd);
        let b = Money::new(250, Currency::Usd);
        assert_eq!(a.checked_add(&b), Some(Money::new(350, Currency::Usd)));
        assert_eq!(a.checked_add(&Money::new(1, Currency::Eur)), None);
        assert_eq!(a.checked_add(&Money::default()), None);
    }

    #[test]
    fn test_address_numbered_fields_keep_names() {
        let address = Address {
            address_line_1: Nullable::Value("500 Electric Ave".to_string()),
            administrative_district_level_1: Nullable::Value("NY".to_string()),
            country: Some(Country::Us),
            ..Address::default()
        };
        assert_eq!(
            serde_json::to_value(&address).unwrap(),
            json!({
                "address_line_1": "500 Electric Ave",
                "administrative_district_level_1": "NY",
                "country": "US"
            })
        );
    }
}
