//! Admin product management.

use askama::Template;
use axum::{
    extract::{Multipart, Path, State},
    response::{Html, Redirect},
};
use tracing::instrument;

use impex_core::{FEATURED_COUNT, NewProduct, Product};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::services::uploads;
use crate::state::AppState;

/// Product list template.
#[derive(Template)]
#[template(path = "admin/products.html")]
struct ProductsTemplate {
    products: Vec<Product>,
    featured_count: usize,
}

/// Add-product form template.
#[derive(Template)]
#[template(path = "admin/add_product.html")]
struct AddProductTemplate;

/// List products in catalog order.
///
/// GET /admin/products
#[instrument(skip(_admin, state))]
pub async fn index(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Html<String>> {
    let products = state.catalog().load().await?;
    let template = ProductsTemplate {
        products,
        featured_count: FEATURED_COUNT,
    };
    Ok(Html(template.render()?))
}

/// Render the add-product form.
///
/// GET /admin/add-product
pub async fn add_page(RequireAdminAuth(_admin): RequireAdminAuth) -> Result<Html<String>> {
    Ok(Html(AddProductTemplate.render()?))
}

/// Create a product from a multipart form.
///
/// POST /admin/add-product
///
/// Accepts `title`, `description`, `price`, any number of `productImages`
/// file fields, and any number of `imageLinks` text fields. Uploaded files
/// are stored first; external links are appended after them in field order.
#[instrument(skip(_admin, state, multipart))]
pub async fn add(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect> {
    let mut title = String::new();
    let mut description = String::new();
    let mut price = String::new();
    let mut uploaded = Vec::new();
    let mut links = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "productImages" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                // Browsers submit an empty file part when no file is picked.
                if file_name.is_empty() || bytes.is_empty() {
                    continue;
                }
                let url =
                    uploads::store_upload(&state.config().uploads_dir, &file_name, &bytes)
                        .await
                        .map_err(impex_core::StoreError::Io)?;
                uploaded.push(url);
            }
            "imageLinks" => {
                let link = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                let link = link.trim();
                if !link.is_empty() {
                    links.push(link.to_string());
                }
            }
            "title" => {
                title = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            "description" => {
                description = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            "price" => {
                price = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            _ => {}
        }
    }

    if title.trim().is_empty() || price.trim().is_empty() {
        return Err(AppError::BadRequest(
            "title and price are required".to_string(),
        ));
    }

    let mut images = uploaded;
    images.extend(links);

    let stored = state
        .catalog()
        .append(NewProduct {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            price: price.trim().to_string(),
            images,
        })
        .await?;
    tracing::info!(id = %stored.id, title = %stored.title, "Product created");

    Ok(Redirect::to("/admin/products"))
}

/// Delete a product unless it is featured.
///
/// POST /admin/delete-product/{id}
///
/// Products at positions 0-2 answer 403 and stay untouched.
#[instrument(skip(_admin, state))]
pub async fn delete(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect> {
    state.catalog().delete(&id).await?;
    tracing::info!(%id, "Product deleted");
    Ok(Redirect::to("/admin/products"))
}
