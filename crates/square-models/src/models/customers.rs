//! Customer profiles and customer search.

use serde::{Deserialize, Serialize};
use square_core::Nullable;

use super::common::{Address, TimeRange};
use super::errors::Error;
use crate::enums::{CustomerCreationSource, CustomerInclusionExclusion, CustomerSortField, SortOrder};

/// A customer profile in the seller's directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Customer {
    /// Square-assigned customer ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// First name.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub given_name: Nullable<String>,
    /// Last name.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub family_name: Nullable<String>,
    /// Name the seller knows the buyer by.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub nickname: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub company_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub email_address: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub phone_number: Nullable<String>,
    /// `YYYY-MM-DD`, or `0000-MM-DD` when the year is unknown.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub birthday: Nullable<String>,
    /// Seller-defined identifier, e.g. from another system.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub reference_id: Nullable<String>,
    /// Seller's private note.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub note: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<CustomerPreferences>,
    /// How the profile was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_source: Option<CustomerCreationSource>,
    /// Groups the customer was added to.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub group_ids: Nullable<Vec<String>>,
    /// Segments the customer falls into.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub segment_ids: Nullable<Vec<String>>,
    /// Incremented on each change; used for optimistic concurrency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_ids: Option<CustomerTaxIds>,
}

impl Customer {
    /// Given and family name joined by a space, if either is set.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.given_name.value(), self.family_name.value()]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            self.company_name.value().cloned()
        } else {
            Some(parts.join(" "))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CustomerPreferences {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub email_unsubscribed: Nullable<bool>,
}

/// Tax identifiers; only the EU VAT number is supported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CustomerTaxIds {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub eu_vat: Nullable<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CustomerCreationSourceFilter {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub values: Nullable<Vec<CustomerCreationSource>>,
    /// Whether `values` are included or excluded. Defaults to `INCLUDE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<CustomerInclusionExclusion>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CustomerFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_source: Option<CustomerCreationSourceFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<TimeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<TimeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<CustomerTextFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<CustomerTextFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<CustomerTextFilter>,
}

/// Exact or fuzzy match on a text attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CustomerTextFilter {
    /// Match the whole value.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub exact: Nullable<String>,
    /// Match by tokens, ignoring case.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub fuzzy: Nullable<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CustomerSort {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<CustomerSortField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CustomerQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<CustomerFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<CustomerSort>,
}

// --- Endpoint bodies ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateCustomerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_ids: Option<CustomerTaxIds>,
}

impl CreateCustomerRequest {
    /// True if at least one of the identifying fields the API requires is set.
    #[must_use]
    pub fn has_identity(&self) -> bool {
        [
            &self.given_name,
            &self.family_name,
            &self.company_name,
            &self.email_address,
            &self.phone_number,
        ]
        .iter()
        .any(|field| field.as_deref().is_some_and(|value| !value.trim().is_empty()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateCustomerResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchCustomersRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Page size, 1 to 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<CustomerQuery>,
    /// Also return the total number of matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchCustomersResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customers: Option<Vec<Customer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Only present when the request set `count`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}
