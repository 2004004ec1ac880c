//! Submit a rating for a product.

use anyhow::Result;
use artshelf_catalog::ProductId;

use super::RateArgs;
use crate::context::Context;

/// Run the rate command.
///
/// Ratings live for the session only, so the summary printed here includes
/// the product's seeded reviews plus this submission.
pub async fn run(args: RateArgs, ctx: &Context) -> Result<()> {
    let user = args.user.unwrap_or_else(|| ctx.config.session.user.clone());
    let mut storefront = ctx.storefront_for(user).await?;
    let id = ProductId::new(args.id);
    let name = storefront.open_product(&id)?.art_name.clone();

    let summary = storefront.on_submit_rating(&id, args.score, args.comment)?;

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.success(&format!("Rated {} {} star(s)", name, args.score));
    ctx.output.kv(
        "average",
        &format!("{:.1} ({} ratings)", summary.average_rating, summary.total_ratings),
    );

    Ok(())
}
