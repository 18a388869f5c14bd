use std::str::FromStr;

use anyhow::{Context, bail};

use business::domain::advice::model::WineQuery;
use business::domain::catalog::model::{Wine, WineCatalog};
use business::domain::catalog::value_objects::Language;

use crate::config::shop_config::ShopConfig;
use crate::setup::dependency_injection::DependencyContainer;

const PROMPT_TARGET: usize = 6;

/// `advise <catalog.json> <language> <message...>`
pub async fn advise(container: &DependencyContainer, args: &[String]) -> anyhow::Result<()> {
    let [catalog_path, language, message @ ..] = args else {
        bail!("usage: advise <catalog.json> <language> <message...>");
    };
    if message.is_empty() {
        bail!("usage: advise <catalog.json> <language> <message...>");
    }

    let language = parse_language(language)?;
    let catalog = load_catalog(catalog_path)?;
    let message = message.join(" ");

    container.suggestions.add_query(&message, language).await;

    let advice = container
        .advice
        .execute(WineQuery {
            message,
            language,
            wines: catalog.data,
        })
        .await;

    println!("{}", advice.message);

    if let Some(recommendations) = &advice.recommendations {
        println!("\nRecommended wines:");
        for wine in recommendations {
            println!("  {} - €{} ({})", wine.product_name, wine.price, wine.volume);
        }
    }

    if let Some(pairings) = &advice.food_pairings {
        println!("\nFood pairings: {}", pairings.join(", "));
    }

    Ok(())
}

/// `prompts <language>`
pub async fn prompts(container: &DependencyContainer, args: &[String]) -> anyhow::Result<()> {
    let [language] = args else {
        bail!("usage: prompts <language>");
    };
    let language = parse_language(language)?;

    for prompt in container
        .suggestions
        .suggested_prompts(language, PROMPT_TARGET)
        .await
    {
        println!("{}", prompt);
    }

    Ok(())
}

/// `cart list|add|remove|clear|checkout`
pub async fn cart(container: &DependencyContainer, args: &[String]) -> anyhow::Result<()> {
    match args {
        [subcommand] if subcommand.as_str() == "list" => {
            let items = container.cart.get_items().await;
            if items.is_empty() {
                println!("Cart is empty");
                return Ok(());
            }
            for item in &items {
                println!(
                    "  {} x{} - €{}",
                    item.wine.product_name,
                    item.quantity,
                    item.line_total()
                );
            }
            println!(
                "{} bottles, total €{}",
                container.cart.item_count().await,
                container.cart.total_price().await
            );
            Ok(())
        }
        [subcommand, catalog_path, wine_id, rest @ ..] if subcommand.as_str() == "add" => {
            let quantity = match rest {
                [] => 1,
                [quantity] => quantity.parse().context("invalid quantity")?,
                _ => bail!("usage: cart add <catalog.json> <wine-id> [quantity]"),
            };

            let catalog = load_catalog(catalog_path)?;
            let Some(wine) = catalog.data.iter().find(|wine| wine.id == *wine_id) else {
                bail!("wine {} not found in catalog", wine_id);
            };

            if container.cart.add_item(wine, quantity).await {
                println!("Added {} x{}", wine.product_name, quantity);
            } else {
                println!(
                    "Cart is full ({} distinct items max)",
                    business::domain::cart::model::MAX_DISTINCT_ITEMS
                );
            }
            Ok(())
        }
        [subcommand, wine_id] if subcommand.as_str() == "remove" => {
            container.cart.remove_item(wine_id).await;
            println!("Removed {}", wine_id);
            Ok(())
        }
        [subcommand] if subcommand.as_str() == "clear" => {
            container.cart.clear().await;
            println!("Cart cleared");
            Ok(())
        }
        [subcommand] if subcommand.as_str() == "checkout" => {
            let shop = ShopConfig::from_env();
            println!("{}", container.cart.checkout_url(&shop.base_url).await);
            Ok(())
        }
        _ => bail!(
            "usage: cart list | add <catalog.json> <wine-id> [quantity] | remove <wine-id> | clear | checkout"
        ),
    }
}

fn parse_language(raw: &str) -> anyhow::Result<Language> {
    Language::from_str(raw).map_err(anyhow::Error::msg)
}

fn load_catalog(path: &str) -> anyhow::Result<WineCatalog> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("could not read catalog file {}", path))?;
    let catalog: WineCatalog =
        serde_json::from_str(&raw).context("could not parse catalog file")?;

    validate_catalog(&catalog.data)?;
    Ok(catalog)
}

/// The core assumes unique ids and non-negative prices; reject feeds
/// that break that here at the boundary.
fn validate_catalog(wines: &[Wine]) -> anyhow::Result<()> {
    let mut seen = std::collections::HashSet::new();
    for wine in wines {
        if !seen.insert(wine.id.as_str()) {
            bail!("catalog contains duplicate id {}", wine.id);
        }
        if wine.price < 0.0 {
            bail!("catalog contains negative price for {}", wine.id);
        }
    }
    Ok(())
}
