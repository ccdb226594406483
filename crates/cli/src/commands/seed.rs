//! Demo catalog seeding through the admin API.
//!
//! Creates a recognizable demo catalog (products, optionally banners and
//! lookbook photos) against a development backend.
//!
//! # Environment Variables
//!
//! - `KAWANE_API_URL` - Base URL of the Kawane backend REST API
//! - `KAWANE_ADMIN_TOKEN` - Admin service token

use kawane_core::Price;
use rand::Rng;
use secrecy::SecretString;
use tracing::info;

use kawane_admin::api::AdminApi;
use kawane_admin::api::types::{NewBanner, NewLookbookPhoto, NewProduct};
use kawane_admin::config::KawaneAdminApiConfig;

/// Base names the demo products cycle through.
const PRODUCT_NAMES: &[&str] = &[
    "Linen Shirt",
    "Canvas Tote",
    "Batik Scarf",
    "Denim Jacket",
    "Rattan Hat",
    "Cotton Tee",
    "Pleated Skirt",
    "Woven Belt",
];

/// Demo banner titles.
const BANNER_TITLES: &[&str] = &["Mid-year Sale", "New Arrivals", "Lookbook 2025"];

/// Seed a demo catalog.
///
/// # Errors
///
/// Returns an error if environment variables are missing or any create
/// call fails.
pub async fn catalog(products: u32, content: bool) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let base_url = std::env::var("KAWANE_API_URL").map_err(|_| "KAWANE_API_URL not set")?;
    let admin_token = std::env::var("KAWANE_ADMIN_TOKEN")
        .map(SecretString::from)
        .map_err(|_| "KAWANE_ADMIN_TOKEN not set")?;

    let api = AdminApi::new(&KawaneAdminApiConfig {
        base_url: base_url.trim_end_matches('/').to_string(),
        admin_token,
        timeout_secs: 15,
    });

    let mut rng = rand::rng();

    info!(count = products, "Seeding demo products");
    for i in 0..products {
        let base = PRODUCT_NAMES
            .get(i as usize % PRODUCT_NAMES.len())
            .copied()
            .unwrap_or("Demo Product");
        let price = Price::from_rupiah(rng.random_range(8_i64..=60) * 25_000);
        let stock = rng.random_range(0_u32..=40);

        let product = api
            .create_product(&NewProduct {
                name: format!("{base} {:02}", i + 1),
                description: format!("Demo listing for {base}."),
                price,
                stock,
                category_id: None,
                images: Vec::new(),
                is_published: true,
            })
            .await?;

        info!(product_id = %product.id, name = %product.name, "Created product");
    }

    if content {
        info!("Seeding demo banners and lookbook photos");
        for (i, title) in BANNER_TITLES.iter().enumerate() {
            let banner = api
                .create_banner(&NewBanner {
                    title: (*title).to_string(),
                    image_url: format!("https://cdn.kawane.studio/demo/banner-{i}.jpg"),
                    link_url: Some("/products".to_string()),
                    is_active: true,
                })
                .await?;
            info!(banner_id = %banner.id, "Created banner");
        }

        for i in 0..6 {
            let photo = api
                .create_lookbook_photo(&NewLookbookPhoto {
                    title: Some(format!("Look {:02}", i + 1)),
                    image_url: format!("https://cdn.kawane.studio/demo/look-{i}.jpg"),
                })
                .await?;
            info!(photo_id = %photo.id, "Created lookbook photo");
        }
    }

    info!("Seeding complete");
    Ok(())
}
