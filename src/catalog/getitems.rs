//! # Catalog Lookup Service
//!
//! High-level adapter over the PA-API GetItems operation. Accepts a batch of
//! ASINs and produces a mapping from ASIN to a normalized record, folding
//! every failure mode into the result's single legacy error string. The
//! caller never sees an `Err` from a lookup; only construction can fail.

use indexmap::IndexMap;

use crate::catalog::apicall::PaapiApi;
use crate::catalog::endpoints;
use crate::catalog::types::{GetItemsRequest, Item, ItemImages, ItemRecord, LookupResult, PrimaryImages};
use crate::configs::ClientCredentials;
use crate::core::error::CatalogError;
use crate::error;
use crate::loggers::Logger;

/// Service orchestrator for catalog item lookups.
pub struct CatalogLookup {
    /// Internal signed API client bound to the locale's regional gateway.
    api: PaapiApi,
    /// Immutable credential set supplied at construction.
    credentials: ClientCredentials,
    /// Shared logger for diagnostic tracking.
    logger: Logger,
}

impl CatalogLookup {
    /// Creates a new `CatalogLookup` bound to the credential set's locale.
    ///
    /// Fails fast with [`CatalogError::ConfigError`] when the locale code is
    /// not one of the fixed marketplace entries.
    pub fn new(credentials: ClientCredentials, logger: Logger) -> Result<Self, CatalogError> {
        let endpoint = endpoints::resolve(&credentials.locale)?;
        let api = PaapiApi::new(&credentials, endpoint, logger.clone());
        Ok(Self { api, credentials, logger })
    }

    /// Redirects the underlying transport to an alternate base URL.
    /// Intended for integration tests against a local mock gateway.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api = self.api.with_base_url(base_url);
        self
    }

    /// Looks up items by ASIN and normalizes the response.
    ///
    /// Behavior, in order:
    /// - empty input returns `error: "No item found"` without a remote call;
    /// - a request that fails validation returns `error: "Error forming the
    ///   request"` without a remote call;
    /// - a transport failure surfaces its display message verbatim;
    /// - each requested ASIN missing from the response leaves an empty
    ///   placeholder record and sets `error: "Item not found, check errors"`;
    /// - an upstream `Errors` list overwrites any earlier error with
    ///   `"{code} - {message}"` of its first entry.
    ///
    /// `data` preserves the input order and may be partially populated even
    /// when `error` is set.
    pub async fn lookup_by_ids(&self, item_ids: &[String]) -> LookupResult {
        let mut results = LookupResult::default();

        if item_ids.is_empty() {
            results.error = Some("No item found".to_string());
            return results;
        }

        let request = GetItemsRequest::new(item_ids.to_vec(), &self.credentials.partner_tag);

        if !request.list_invalid_properties().is_empty() {
            results.error = Some("Error forming the request".to_string());
            return results;
        }

        match self.api.get_items(&request).await {
            Ok(response) => {
                if let Some(items) = response.items_result.as_ref().and_then(|r| r.items.as_ref()) {
                    let keyed = parse_response(items);

                    for item_id in item_ids {
                        match keyed.get(item_id) {
                            Some(item) => {
                                results.data.insert(
                                    item_id.clone(),
                                    ItemRecord {
                                        title: item_title(item),
                                        url: item_url(item),
                                        images: item_images(item),
                                        price: item_price(item),
                                    },
                                );
                            }
                            None => {
                                // Placeholder keeps the slot visible; only the
                                // fixed message reaches the error field.
                                results.error = Some("Item not found, check errors".to_string());
                                results.data.insert(item_id.clone(), ItemRecord::default());
                            }
                        }
                    }
                }

                // An upstream error report wins over anything set above.
                if let Some(errors) = &response.errors {
                    if let Some(first) = errors.first() {
                        results.error = Some(format!("{} - {}", first.code, first.message));
                    }
                }
            }
            Err(e) => {
                error!(self.logger, "GetItems call failed", "error" => e.to_string());
                results.error = Some(e.to_string());
            }
        }

        results
    }
}

/// Re-keys a response item list by ASIN. Insertion order follows the input
/// list; a later duplicate ASIN overwrites an earlier one.
pub fn parse_response(items: &[Item]) -> IndexMap<String, Item> {
    let mut mapped = IndexMap::new();
    for item in items {
        mapped.insert(item.asin.clone(), item.clone());
    }
    mapped
}

/// Title, present only when `ItemInfo.Title.DisplayValue` fully resolves.
pub fn item_title(item: &Item) -> Option<String> {
    item.item_info
        .as_ref()
        .and_then(|info| info.title.as_ref())
        .and_then(|title| title.display_value.clone())
}

/// The item's detail-page URL, when present.
pub fn item_url(item: &Item) -> Option<String> {
    item.detail_page_url.clone()
}

/// Primary images in all three fixed sizes. All-or-nothing on the `Primary`
/// block: either the whole group is present or the field is `None`.
pub fn item_images(item: &Item) -> Option<ItemImages> {
    let primary = item.images.as_ref().and_then(|images| images.primary.as_ref())?;

    Some(ItemImages {
        primary: PrimaryImages {
            small: primary.small.clone(),
            medium: primary.medium.clone(),
            large: primary.large.clone(),
        },
    })
}

/// Display price of the FIRST listing only; any further listings are
/// ignored even when the first carries no price.
pub fn item_price(item: &Item) -> Option<String> {
    item.offers
        .as_ref()
        .and_then(|offers| offers.listings.as_ref())
        .and_then(|listings| listings.first())
        .and_then(|listing| listing.price.as_ref())
        .and_then(|price| price.display_amount.clone())
}
