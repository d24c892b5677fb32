//! Category endpoints of the Spendtrack API.

use super::{check, decode, ApiClient, ApiError};
use crate::models::{Category, CreateCategoryRequest, UpdateCategoryRequest};

/// Fetch all categories, sorted by name on the server
pub async fn list(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    let url = client.url("/categories?sort=name,asc");
    client.get_json(&url).await
}

/// Create a new category
pub async fn create(
    client: &ApiClient,
    request: &CreateCategoryRequest,
) -> Result<Category, ApiError> {
    let url = client.url("/categories");
    log::debug!("POST {}", url);
    let response = client.http.post(&url).json(request).send().await?;
    decode(response).await
}

/// Rename an existing category
pub async fn update(
    client: &ApiClient,
    id: &str,
    request: &UpdateCategoryRequest,
) -> Result<Category, ApiError> {
    let url = client.url(&format!("/categories/{}", urlencoding::encode(id)));
    log::debug!("PUT {}", url);
    let response = client.http.put(&url).json(request).send().await?;
    decode(response).await
}

/// Delete a category; expenses keep their records but lose the reference
pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    let url = client.url(&format!("/categories/{}", urlencoding::encode(id)));
    log::debug!("DELETE {}", url);
    let response = client.http.delete(&url).send().await?;
    check(response).await
}
