//! # PA-API GetItems Schema
//!
//! Serde models for the GetItems request and response wire format, plus the
//! normalized records this library hands back to callers. Every nested
//! response field is optional: the upstream omits whole branches whenever a
//! resource was not requested or has no data for an item.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Partner type attached to every request. The affiliate program only
/// supports this value for storefront integrations.
pub const PARTNER_TYPE_ASSOCIATES: &str = "Associates";

/// The fixed resource set requested from the upstream API: title, listing
/// price, and the three primary image sizes.
pub const GET_ITEMS_RESOURCES: [&str; 5] = [
    "ItemInfo.Title",
    "Offers.Listings.Price",
    "Images.Primary.Small",
    "Images.Primary.Medium",
    "Images.Primary.Large",
];

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Body of a GetItems call. Constructed fresh per lookup, never reused.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetItemsRequest {
    pub item_ids: Vec<String>,
    pub partner_tag: String,
    pub partner_type: String,
    pub resources: Vec<String>,
}

impl GetItemsRequest {
    pub fn new(item_ids: Vec<String>, partner_tag: &str) -> Self {
        Self {
            item_ids,
            partner_tag: partner_tag.to_string(),
            partner_type: PARTNER_TYPE_ASSOCIATES.to_string(),
            resources: GET_ITEMS_RESOURCES.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Reports required properties that are missing or invalid, mirroring
    /// the upstream SDK's request validation.
    pub fn list_invalid_properties(&self) -> Vec<String> {
        let mut invalid = Vec::new();
        if self.item_ids.is_empty() {
            invalid.push("item_ids cannot be empty".to_string());
        }
        if self.partner_tag.is_empty() {
            invalid.push("partner_tag cannot be empty".to_string());
        }
        if self.partner_type.is_empty() {
            invalid.push("partner_type cannot be empty".to_string());
        }
        invalid
    }
}

// ---------------------------------------------------------------------------
// Response (raw wire shape, read-only)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetItemsResponse {
    pub items_result: Option<ItemsResult>,
    pub errors: Option<Vec<UpstreamError>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemsResult {
    pub items: Option<Vec<Item>>,
}

/// One upstream error entry, surfaced to callers as "{Code} - {Message}".
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpstreamError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Per-item response object graph. The adapter only ever reads from this.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    #[serde(default, rename = "ASIN")]
    pub asin: String,
    #[serde(rename = "DetailPageURL")]
    pub detail_page_url: Option<String>,
    pub item_info: Option<ItemInfo>,
    pub images: Option<ItemImageBlock>,
    pub offers: Option<Offers>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemInfo {
    pub title: Option<TitleInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TitleInfo {
    pub display_value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemImageBlock {
    pub primary: Option<PrimaryImageSet>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrimaryImageSet {
    pub small: Option<ImageDetail>,
    pub medium: Option<ImageDetail>,
    pub large: Option<ImageDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ImageDetail {
    #[serde(rename = "URL")]
    pub url: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Offers {
    pub listings: Option<Vec<Listing>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Listing {
    pub price: Option<ListingPrice>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListingPrice {
    pub display_amount: Option<String>,
}

// ---------------------------------------------------------------------------
// Normalized output
// ---------------------------------------------------------------------------

/// Primary images, re-shaped for presentation. Populated all-or-nothing:
/// present exactly when the response's `Images.Primary` block resolves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemImages {
    pub primary: PrimaryImages,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrimaryImages {
    pub small: Option<ImageDetail>,
    pub medium: Option<ImageDetail>,
    pub large: Option<ImageDetail>,
}

/// Simplified, presentation-ready projection of one catalog item. Every
/// field is independently nullable depending on what the upstream response
/// populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemRecord {
    pub title: Option<String>,
    pub url: Option<String>,
    pub images: Option<ItemImages>,
    pub price: Option<String>,
}

impl ItemRecord {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none() && self.images.is_none() && self.price.is_none()
    }
}

/// The adapter's sole output type. `data` preserves request order; a
/// non-null `error` can coexist with partially populated `data`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LookupResult {
    pub error: Option<String>,
    pub data: IndexMap<String, ItemRecord>,
}
