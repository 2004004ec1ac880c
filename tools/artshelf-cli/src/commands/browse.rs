//! Catalog listing with search and brand filters.

use anyhow::Result;
use artshelf_catalog::catalog::Product;
use artshelf_catalog::Storefront;
use artshelf_store::DurableStore;

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{favorite_marker, product_columns};

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.storefront().await?;
    if let Some(search) = args.search {
        storefront.on_search_text_changed(search);
    }
    if let Some(brand) = args.brand {
        storefront.on_brand_changed(brand.as_str());
    }

    let products = storefront.current_filtered_catalog();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&heading(&storefront));

    if products.is_empty() {
        ctx.output.info("No products match.");
        return Ok(());
    }

    for product in &products {
        print_row(product, &storefront, ctx);
    }
    ctx.output.info(&format!("{} product(s)", products.len()));

    Ok(())
}

fn heading<S: DurableStore + 'static>(storefront: &Storefront<S>) -> String {
    let criteria = storefront.criteria();
    let mut heading = format!("Catalog: {}", criteria.brand);
    if criteria.has_search() {
        heading.push_str(&format!(" matching \"{}\"", criteria.search_text.trim()));
    }
    heading
}

fn print_row<S: DurableStore + 'static>(
    product: &Product,
    storefront: &Storefront<S>,
    ctx: &Context,
) {
    let marker = favorite_marker(storefront.is_favorite(&product.id));
    let [id, name, brand, price] = product_columns(product);
    ctx.output.table_row(
        &[marker.as_str(), id.as_str(), name.as_str(), brand.as_str(), price.as_str()],
        &[1, 4, 10, 16, 0],
    );
}
