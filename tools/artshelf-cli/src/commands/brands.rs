//! Brand picker vocabulary.

use anyhow::Result;

use crate::context::Context;

/// Run the brands command.
pub async fn run(ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront().await?;
    let brands: Vec<String> = storefront
        .brands()
        .iter()
        .map(|brand| brand.label().to_string())
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&brands);
        return Ok(());
    }

    ctx.output.header("Brands");
    for brand in &brands {
        ctx.output.list_item(brand);
    }

    Ok(())
}
