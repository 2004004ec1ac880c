//! Product detail view.

use anyhow::Result;
use artshelf_catalog::catalog::Product;
use artshelf_catalog::reviews::{render_stars, Rating, RatingSummary, MAX_SCORE, MIN_SCORE};
use artshelf_catalog::ProductId;
use serde::Serialize;

use super::ShowArgs;
use crate::context::Context;
use crate::output::price_label;

/// Everything the detail view shows, for `--json`.
#[derive(Serialize)]
struct ProductDetail<'a> {
    product: &'a Product,
    discounted_price: String,
    favorite: bool,
    ratings: &'a RatingSummary,
    comments: &'a [Rating],
}

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.storefront().await?;
    let id = ProductId::new(args.id);
    let product = storefront.open_product(&id)?.clone();
    let favorite = storefront.is_favorite(&id);
    let summary = storefront.rating_summary(&id);

    if ctx.output.is_json() {
        ctx.output.json(&ProductDetail {
            product: &product,
            discounted_price: product.discounted_price().to_string(),
            favorite,
            ratings: &summary,
            comments: storefront.ratings().ratings(&id),
        });
        return Ok(());
    }

    ctx.output.header(&product.art_name);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("brand", &product.brand);
    ctx.output.kv("price", &price_label(&product));
    ctx.output.kv("glass surface", if product.glass_surface { "yes" } else { "no" });
    ctx.output.kv("favorite", if favorite { "yes" } else { "no" });
    if !product.description.is_empty() {
        ctx.output.kv("description", &product.description);
    }

    print_summary(&summary, ctx);

    ctx.output.header("Comments");
    for rating in storefront.ratings().ratings(&id) {
        ctx.output.list_item(&format!(
            "{} {}: {}",
            rating.render_stars(),
            rating.user,
            rating.comment
        ));
    }

    Ok(())
}

fn print_summary(summary: &RatingSummary, ctx: &Context) {
    ctx.output.header("Ratings");
    if !summary.has_ratings() {
        ctx.output.info("No ratings yet.");
        return;
    }

    ctx.output.kv(
        "average",
        &format!("{:.1} ({} ratings)", summary.average_rating, summary.total_ratings),
    );
    for stars in (MIN_SCORE..=MAX_SCORE).rev() {
        ctx.output.kv(
            &render_stars(stars),
            &format!(
                "{} ({:.0}%)",
                summary.distribution.count(stars),
                summary.distribution.percentage(stars)
            ),
        );
    }
}
