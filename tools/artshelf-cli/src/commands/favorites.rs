//! Favorites management commands.

use anyhow::Result;
use artshelf_catalog::catalog::Product;
use artshelf_catalog::{CatalogError, ProductId, Storefront};
use artshelf_store::FileStore;

use super::{FavoritesArgs, FavoritesCommand};
use crate::context::Context;
use crate::output::product_columns;

/// Run the favorites command.
pub async fn run(args: FavoritesArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(FavoritesCommand::List) | None => list_favorites(ctx).await,
        Some(FavoritesCommand::Add { id }) => add_favorite(&id, ctx).await,
        Some(FavoritesCommand::Remove { id }) => remove_favorite(&id, ctx).await,
        Some(FavoritesCommand::Toggle { id }) => toggle_favorite(&id, ctx).await,
    }
}

async fn list_favorites(ctx: &Context) -> Result<()> {
    let favorites = ctx.favorites().await?.snapshot();

    if ctx.output.is_json() {
        ctx.output.json(&favorites);
        return Ok(());
    }

    ctx.output.header("Favorites");
    if favorites.is_empty() {
        ctx.output.info("No favorites yet.");
        ctx.output.info("Run `artshelf favorites add <ID>` to add one.");
        return Ok(());
    }

    for product in &favorites {
        let [id, name, brand, price] = product_columns(product);
        ctx.output.table_row(
            &[id.as_str(), name.as_str(), brand.as_str(), price.as_str()],
            &[4, 10, 16, 0],
        );
    }

    Ok(())
}

async fn add_favorite(id: &str, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront().await?;
    let product = catalog_product(&storefront, id)?;

    if storefront.is_favorite(&product.id) {
        ctx.output.info(&format!("{} is already a favorite", product.art_name));
        return report(&storefront, ctx);
    }

    storefront.favorites().add(product.clone()).await?;
    ctx.output.success(&format!("Added {} to favorites", product.art_name));
    report(&storefront, ctx)
}

async fn remove_favorite(id: &str, ctx: &Context) -> Result<()> {
    let favorites = ctx.favorites().await?;
    let id = ProductId::new(id);

    let Some(name) = favorites.snapshot().get(&id).map(|p| p.art_name.clone()) else {
        ctx.output.info(&format!("{} is not a favorite", id));
        return Ok(());
    };

    let remaining = favorites.remove(&id).await?;
    ctx.output.success(&format!("Removed {} from favorites", name));
    if ctx.output.is_json() {
        ctx.output.json(&remaining);
    }
    Ok(())
}

async fn toggle_favorite(id: &str, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront().await?;
    let product = catalog_product(&storefront, id)?;

    let toggled = storefront.on_toggle_favorite(&product).await?;
    if toggled.favorite {
        ctx.output.success(&format!("Added {} to favorites", product.art_name));
    } else {
        ctx.output.success(&format!("Removed {} from favorites", product.art_name));
    }
    report(&storefront, ctx)
}

fn catalog_product(storefront: &Storefront<FileStore>, id: &str) -> Result<Product> {
    let id = ProductId::new(id);
    let product = storefront
        .product(&id)
        .cloned()
        .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))?;
    Ok(product)
}

fn report(storefront: &Storefront<FileStore>, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&storefront.favorite_set_snapshot());
    } else {
        ctx.output.info(&format!("{} favorite(s)", storefront.favorites().len()));
    }
    Ok(())
}
