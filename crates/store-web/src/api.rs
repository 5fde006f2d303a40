//! Catalog fetch glue for the UI

use store_core::{CatalogClient, HttpCatalogClient, Product};

/// Fetch the product list, mapping failures to display text.
///
/// One shot per page view; a failure yields no partial list and the
/// caller surfaces the message as a generic error state.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let catalog = HttpCatalogClient::new();

    catalog
        .fetch_products()
        .await
        .map_err(|e| e.user_message().to_string())
}
