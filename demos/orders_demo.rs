//! Order/product association demo.
//!
//! Migrates the configured database, creates a few orders and products,
//! links them through the association object, and prints every order with
//! its eagerly loaded lines.
//!
//! ```bash
//! export DATABASE_URL="sqlite://demo.db?mode=rwc"
//! cargo run --example orders_demo
//! ```

use std::time::Duration;

use dotenvy::dotenv;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use web_auth_demo::{crud, migration::Migrator, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    dotenv().ok();
    let settings = Settings::from_env();

    let mut opt = ConnectOptions::new(&settings.db.url);
    opt.max_connections(10)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .sqlx_logging(settings.db.echo);

    let db = Database::connect(opt).await?;
    Migrator::up(&db, None).await?;
    info!(url = %settings.db.url, "database migrated");

    // A few orders and products, linked through the association object.
    let order1 = crud::create_order(&db, None).await?;
    let order_promo = crud::create_order(&db, Some("promo")).await?;

    let iphone_16 = crud::create_product(&db, "Iphone 16", "Best for photos", 999).await?;
    let samsung_s24 = crud::create_product(&db, "Samsung S24", "Best for his price", 700).await?;

    crud::attach_product(&db, &order1, &samsung_s24, 1, samsung_s24.price).await?;
    crud::attach_product(&db, &order_promo, &samsung_s24, 2, samsung_s24.price).await?;
    crud::attach_product(&db, &order_promo, &iphone_16, 1, iphone_16.price).await?;

    // And a gift for everyone.
    crud::attach_gift_product(&db).await?;

    for entry in crud::list_orders_with_products(&db).await? {
        println!(
            "Order #{} (promo: {:?}, created: {})",
            entry.order.id, entry.order.promo_code, entry.order.created_at
        );
        for line in &entry.items {
            println!(
                "\t{} x{} @ {} (product #{})",
                line.product.name,
                line.association.quantity,
                line.association.unit_price,
                line.product.id
            );
        }
        println!();
    }

    Ok(())
}
