//! API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::catalog::{Product, ProductId};
use crate::error::Error;

/// Service identification, doubles as a liveness probe
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "LUMIÈRE E-Commerce API",
    })
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
}

/// List every product in definition order
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.list_all().to_vec())
}

/// Fetch a single product by id
///
/// The path segment is parsed here rather than by the extractor; a malformed
/// id maps to `invalid_product_id` and stays distinguishable from a miss.
pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Product>, Error> {
    let id: ProductId = match raw_id.parse() {
        Ok(id) => id,
        Err(_) => return Err(Error::InvalidProductId(raw_id)),
    };

    match state.catalog.find_by_id(id) {
        Some(product) => Ok(Json(product.clone())),
        None => Err(Error::ProductNotFound(id)),
    }
}

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Error::ProductNotFound(_) => StatusCode::NOT_FOUND,
            Error::InvalidProductId(_) => StatusCode::BAD_REQUEST,
            Error::DuplicateProductId(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Error::ProductNotFound(_) => "product_not_found",
            Error::InvalidProductId(_) => "invalid_product_id",
            Error::DuplicateProductId(_) => "duplicate_product_id",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": self.code(),
            "message": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::{builtin_products, Catalog};

    fn state() -> State<AppState> {
        State(AppState::new(Arc::new(
            Catalog::new(builtin_products()).unwrap(),
        )))
    }

    #[tokio::test]
    async fn get_product_returns_the_matching_record() {
        let Json(product) = get_product(state(), Path("2".to_string())).await.unwrap();

        assert_eq!(product.id, 2);
        assert_eq!(product.name, "Essential Cotton Sweatshirt");
    }

    #[tokio::test]
    async fn missing_product_maps_to_not_found() {
        let err = get_product(state(), Path("999".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ProductNotFound(999)));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_id_maps_to_bad_request() {
        let err = get_product(state(), Path("abc".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidProductId(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_products_returns_every_record() {
        let Json(products) = list_products(state()).await;
        assert_eq!(products.len(), 8);
    }
}
