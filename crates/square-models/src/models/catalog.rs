//! Catalog objects and the catalog endpoints' bodies.
//!
//! A `CatalogObject` is a tagged envelope: `type` names the kind and exactly
//! one of the `*_data` fields carries the payload.

use serde::{Deserialize, Serialize};
use square_core::Nullable;

use super::common::Money;
use super::errors::Error;
use crate::enums::{
    CatalogDiscountModifyTaxBasis, CatalogDiscountType, CatalogItemProductType,
    CatalogModifierListSelectionType, CatalogObjectType, CatalogPricingType, InventoryAlertType,
    TaxCalculationPhase, TaxInclusionType,
};

/// Prefix marking a client-supplied temporary ID in upsert requests.
pub const TEMPORARY_ID_PREFIX: char = '#';

/// Envelope for every catalog entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogObject {
    /// Kind of object; selects which `*_data` field is populated.
    #[serde(rename = "type")]
    pub object_type: CatalogObjectType,

    /// Permanent ID, or a `#`-prefixed temporary ID when creating.
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Optimistic concurrency version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub catalog_v1_ids: Nullable<Vec<CatalogV1Id>>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub present_at_all_locations: Nullable<bool>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub present_at_location_ids: Nullable<Vec<String>>,

    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub absent_at_location_ids: Nullable<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_data: Option<CatalogItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_data: Option<CatalogCategory>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_variation_data: Option<CatalogItemVariation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_data: Option<CatalogTax>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_data: Option<CatalogDiscount>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier_list_data: Option<CatalogModifierList>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier_data: Option<CatalogModifier>,
}

impl CatalogObject {
    /// Create an object envelope with no payload.
    pub fn new(object_type: CatalogObjectType, id: impl Into<String>) -> Self {
        Self {
            object_type,
            id: id.into(),
            updated_at: None,
            version: None,
            is_deleted: None,
            catalog_v1_ids: Nullable::Absent,
            present_at_all_locations: Nullable::Absent,
            present_at_location_ids: Nullable::Absent,
            absent_at_location_ids: Nullable::Absent,
            item_data: None,
            category_data: None,
            item_variation_data: None,
            tax_data: None,
            discount_data: None,
            modifier_list_data: None,
            modifier_data: None,
        }
    }

    /// An `ITEM` object.
    pub fn item(id: impl Into<String>, data: CatalogItem) -> Self {
        Self {
            item_data: Some(data),
            ..Self::new(CatalogObjectType::Item, id)
        }
    }

    /// An `ITEM_VARIATION` object.
    pub fn item_variation(id: impl Into<String>, data: CatalogItemVariation) -> Self {
        Self {
            item_variation_data: Some(data),
            ..Self::new(CatalogObjectType::ItemVariation, id)
        }
    }

    /// A `CATEGORY` object.
    pub fn category(id: impl Into<String>, data: CatalogCategory) -> Self {
        Self {
            category_data: Some(data),
            ..Self::new(CatalogObjectType::Category, id)
        }
    }

    /// A `TAX` object.
    pub fn tax(id: impl Into<String>, data: CatalogTax) -> Self {
        Self {
            tax_data: Some(data),
            ..Self::new(CatalogObjectType::Tax, id)
        }
    }

    /// A `DISCOUNT` object.
    pub fn discount(id: impl Into<String>, data: CatalogDiscount) -> Self {
        Self {
            discount_data: Some(data),
            ..Self::new(CatalogObjectType::Discount, id)
        }
    }

    /// True if `id` is a client-side temporary ID.
    #[must_use]
    pub fn has_temporary_id(&self) -> bool {
        self.id.starts_with(TEMPORARY_ID_PREFIX)
    }

    /// True if the populated `*_data` field matches `type`.
    ///
    /// Objects of types without a modeled payload are consistent when no
    /// payload is set.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let populated = [
            self.item_data.is_some(),
            self.category_data.is_some(),
            self.item_variation_data.is_some(),
            self.tax_data.is_some(),
            self.discount_data.is_some(),
            self.modifier_list_data.is_some(),
            self.modifier_data.is_some(),
        ];
        let expected = match self.object_type {
            CatalogObjectType::Item => Some(0),
            CatalogObjectType::Category => Some(1),
            CatalogObjectType::ItemVariation => Some(2),
            CatalogObjectType::Tax => Some(3),
            CatalogObjectType::Discount => Some(4),
            CatalogObjectType::ModifierList => Some(5),
            CatalogObjectType::Modifier => Some(6),
            _ => None,
        };
        populated
            .iter()
            .enumerate()
            .all(|(i, &set)| set == (expected == Some(i)))
    }
}

/// Mapping to a legacy (Connect v1) ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogV1Id {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub catalog_v1_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub location_id: Nullable<String>,
}

/// A product for sale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogItem {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub description: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub abbreviation: Nullable<String>,
    /// Hex color, e.g. `"9da2a6"`.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub label_color: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub is_taxable: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub available_online: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub available_for_pickup: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub available_electronically: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub category_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub tax_ids: Nullable<Vec<String>>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub modifier_list_info: Nullable<Vec<CatalogItemModifierListInfo>>,
    /// `ITEM_VARIATION` objects belonging to this item.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub variations: Nullable<Vec<CatalogObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<CatalogItemProductType>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub skip_modifier_screen: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub image_ids: Nullable<Vec<String>>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub description_html: Nullable<String>,
    /// Read-only plain-text rendering of `description_html`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_plaintext: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub is_archived: Nullable<bool>,
}

impl CatalogItem {
    /// Item with a name and nothing else.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Nullable::Value(name.into()),
            ..Self::default()
        }
    }
}

/// Link between an item and a modifier list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogItemModifierListInfo {
    pub modifier_list_id: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub min_selected_modifiers: Nullable<i32>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub max_selected_modifiers: Nullable<i32>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub enabled: Nullable<bool>,
}

impl CatalogItemModifierListInfo {
    pub fn new(modifier_list_id: impl Into<String>) -> Self {
        Self {
            modifier_list_id: modifier_list_id.into(),
            min_selected_modifiers: Nullable::Absent,
            max_selected_modifiers: Nullable::Absent,
            enabled: Nullable::Absent,
        }
    }
}

/// A sellable variation (size, color, ...) of an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogItemVariation {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub item_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub sku: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub upc: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub ordinal: Nullable<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_type: Option<CatalogPricingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub track_inventory: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_alert_type: Option<InventoryAlertType>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub inventory_alert_threshold: Nullable<i64>,
    /// Arbitrary client data, up to 255 characters.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub user_data: Nullable<String>,
    /// Duration in milliseconds, for appointment services.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub service_duration: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub available_for_booking: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub sellable: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub stockable: Nullable<bool>,
}

impl CatalogItemVariation {
    /// Fixed-price variation of `item_id`.
    pub fn fixed_price(item_id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Self {
            item_id: Nullable::Value(item_id.into()),
            name: Nullable::Value(name.into()),
            pricing_type: Some(CatalogPricingType::FixedPricing),
            price_money: Some(price),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogCategory {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub image_ids: Nullable<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_top_level: Option<bool>,
}

/// A tax applied to items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogTax {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation_phase: Option<TaxCalculationPhase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclusion_type: Option<TaxInclusionType>,
    /// Decimal string, e.g. `"7.25"` for 7.25%.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub percentage: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub applies_to_custom_amounts: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub enabled: Nullable<bool>,
}

/// A discount that can be applied to items or orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogDiscount {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<CatalogDiscountType>,
    /// Decimal string; set for percentage discounts.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub percentage: Nullable<String>,
    /// Set for fixed-amount discounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub pin_required: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub label_color: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modify_tax_basis: Option<CatalogDiscountModifyTaxBasis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_amount_money: Option<Money>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogModifierList {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub ordinal: Nullable<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_type: Option<CatalogModifierListSelectionType>,
    /// `MODIFIER` objects in this list.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub modifiers: Nullable<Vec<CatalogObject>>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub image_ids: Nullable<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogModifier {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub ordinal: Nullable<i32>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub modifier_list_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub image_id: Nullable<String>,
}

/// Temporary-to-permanent ID mapping returned by upserts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogIdMapping {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub client_object_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub object_id: Nullable<String>,
}

// --- Endpoint bodies ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UpsertCatalogObjectRequest {
    /// Unique per logical request; replays return the original result.
    pub idempotency_key: String,
    pub object: CatalogObject,
}

impl UpsertCatalogObjectRequest {
    pub fn new(idempotency_key: impl Into<String>, object: CatalogObject) -> Self {
        Self {
            idempotency_key: idempotency_key.into(),
            object,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UpsertCatalogObjectResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_object: Option<CatalogObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_mappings: Option<Vec<CatalogIdMapping>>,
}

impl UpsertCatalogObjectResponse {
    /// Permanent ID assigned to a temporary client ID, if any.
    #[must_use]
    pub fn permanent_id(&self, client_object_id: &str) -> Option<&str> {
        self.id_mappings
            .as_deref()?
            .iter()
            .find(|m| m.client_object_id.value().is_some_and(|id| id == client_object_id))
            .and_then(|m| m.object_id.value())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogObjectBatch {
    pub objects: Vec<CatalogObject>,
}

impl CatalogObjectBatch {
    pub const fn new(objects: Vec<CatalogObject>) -> Self {
        Self { objects }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BatchUpsertCatalogObjectsRequest {
    pub idempotency_key: String,
    pub batches: Vec<CatalogObjectBatch>,
}

impl BatchUpsertCatalogObjectsRequest {
    pub fn new(idempotency_key: impl Into<String>, batches: Vec<CatalogObjectBatch>) -> Self {
        Self {
            idempotency_key: idempotency_key.into(),
            batches,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BatchUpsertCatalogObjectsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<CatalogObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_mappings: Option<Vec<CatalogIdMapping>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListCatalogResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,
    /// Opaque cursor for the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<CatalogObject>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Currency;
    use serde_json::json;

    #[test]
    fn test_type_field_renamed() {
        let obj = CatalogObject::new(CatalogObjectType::Image, "IMG1");
        assert_eq!(
            serde_json::to_value(&obj).unwrap(),
            json!({"type": "IMAGE", "id": "IMG1"})
        );
    }

    #[test]
    fn test_item_with_variation() {
        let mut item = CatalogItem::named("Coffee");
        item.variations.set(vec![CatalogObject::item_variation(
            "#small",
            CatalogItemVariation::fixed_price("#coffee", "Small", Money::new(300, Currency::Usd)),
        )]);
        let obj = CatalogObject::item("#coffee", item);

        assert!(obj.has_temporary_id());
        assert!(obj.is_consistent());
        assert_eq!(
            serde_json::to_value(&obj).unwrap(),
            json!({
                "type": "ITEM",
                "id": "#coffee",
                "item_data": {
                    "name": "Coffee",
                    "variations": [{
                        "type": "ITEM_VARIATION",
                        "id": "#small",
                        "item_variation_data": {
                            "item_id": "#coffee",
                            "name": "Small",
                            "pricing_type": "FIXED_PRICING",
                            "price_money": {"amount": 300, "currency": "USD"}
                        }
                    }]
                }
            })
        );
    }

    #[test]
    fn test_inconsistent_payload() {
        let mut obj = CatalogObject::tax("T1", CatalogTax::default());
        assert!(obj.is_consistent());
        obj.discount_data = Some(CatalogDiscount::default());
        assert!(!obj.is_consistent());

        let image = CatalogObject::new(CatalogObjectType::Image, "I1");
        assert!(image.is_consistent());
    }

    #[test]
    fn test_permanent_id_lookup() {
        let response = UpsertCatalogObjectResponse {
            id_mappings: Some(vec![CatalogIdMapping {
                client_object_id: Nullable::Value("#coffee".to_string()),
                object_id: Nullable::Value("R2TA2FOBUGCJZNIWJSOSNAI4".to_string()),
            }]),
            ..UpsertCatalogObjectResponse::default()
        };
        assert_eq!(response.permanent_id("#coffee"), Some("R2TA2FOBUGCJZNIWJSOSNAI4"));
        assert_eq!(response.permanent_id("#tea"), None);
    }
}
