//! Seed utility — provisions the initial admin account and a starter
//! catalog against the configured store.

use stride_auth::password::PasswordHasher;
use stride_core::config::AppConfig;
use stride_core::error::AppError;
use stride_database::DataStores;
use stride_database::store::{AdminStore, ProductStore};
use stride_entity::admin::NewAdmin;
use stride_entity::product::{NewProduct, ProductImages};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_env_filter("info").init();

    if let Err(e) = run().await {
        tracing::error!("Seed failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let env = std::env::var("STRIDE_ENV").unwrap_or_else(|_| "development".to_string());
    let config = AppConfig::load(&env)?;
    let stores = DataStores::connect(&config.database).await?;

    seed_admin(&stores).await?;
    seed_products(&stores).await?;

    Ok(())
}

/// Creates the bootstrap admin account unless it already exists.
async fn seed_admin(stores: &DataStores) -> Result<(), AppError> {
    let email =
        std::env::var("STRIDE_SEED_ADMIN_EMAIL").unwrap_or_else(|_| "admin@stride.shop".to_string());

    if stores.admins.find_by_email(&email).await?.is_some() {
        tracing::info!(email = %email, "Admin already present, skipping");
        return Ok(());
    }

    let password = std::env::var("STRIDE_SEED_ADMIN_PASSWORD")
        .unwrap_or_else(|_| "Stride-Admin1!".to_string());

    let hasher = PasswordHasher::new();
    let admin = stores
        .admins
        .create(&NewAdmin {
            name: "Store Admin".to_string(),
            email,
            password_hash: hasher.hash_password(&password)?,
        })
        .await?;

    tracing::info!(admin_id = %admin.id, email = %admin.email, "Seeded admin account");
    Ok(())
}

/// Creates a starter catalog when the store is empty.
async fn seed_products(stores: &DataStores) -> Result<(), AppError> {
    if !stores.products.find_all().await?.is_empty() {
        tracing::info!("Catalog already populated, skipping");
        return Ok(());
    }

    let starters = [
        ("Apex Runner", "Stride", 129.0, "Running", "Men"),
        ("Cloudstep Low", "Stride", 99.0, "Lifestyle", "Women"),
        ("Terraform GTX", "Northpeak", 159.0, "Trail", "Unisex"),
        ("Court Classic", "Stride", 89.0, "Tennis", "Unisex"),
    ];

    for (name, brand, price, category, gender) in starters {
        let product = stores
            .products
            .create(&NewProduct {
                name: name.to_string(),
                brand: Some(brand.to_string()),
                price,
                category: category.to_string(),
                gender: Some(gender.to_string()),
                images: ProductImages::default(),
                description: None,
                stock: Some(24),
                in_stock: Some(true),
            })
            .await?;
        tracing::info!(product_id = %product.id, name = %product.name, "Seeded product");
    }

    Ok(())
}
