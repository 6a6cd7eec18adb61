use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::categories::dtos::{CategoryNavigationDto, CategoryResponseDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, Meta};

/// List top-level categories for navigation
///
/// Preferred categories come first, the rest alphabetically. Each entry
/// embeds its direct subcategories.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Ordered categories with subcategories", body = ApiResponse<Vec<CategoryNavigationDto>>),
        (status = 500, description = "Category store unavailable")
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryNavigationDto>>>> {
    let categories = service.list_navigation().await?;
    let meta = Meta {
        total: categories.len() as i64,
    };
    Ok(Json(ApiResponse::success(Some(categories), None, Some(meta))))
}

/// Get category by slug
#[utoipa::path(
    get,
    path = "/api/categories/{slug}",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::features::categories::models::NewCategory;
    use crate::features::categories::ordering::PreferredOrder;
    use crate::features::categories::repositories::CategoryRepository;
    use crate::features::categories::routes;
    use crate::features::categories::services::CategoryService;
    use crate::shared::test_helpers::InMemoryCategoryRepository;
    use std::sync::Arc;

    async fn server(repo: Arc<InMemoryCategoryRepository>) -> TestServer {
        let service = Arc::new(CategoryService::new(
            repo,
            PreferredOrder::new(["all", "clothes"]),
        ));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_list_categories_response_shape() {
        let repo = Arc::new(InMemoryCategoryRepository::new());
        let parents = repo
            .insert_many(&[
                NewCategory::top_level("Candles", "candles", None),
                NewCategory::top_level("Clothes", "clothes", Some("#FF6B9D".to_string())),
                NewCategory::top_level("All", "all", None),
            ])
            .await
            .unwrap();
        repo.insert_many(&[NewCategory::child_of(parents[1].id, "T-Shirts", "t-shirts")])
            .await
            .unwrap();

        let response = server(repo).await.get("/api/categories").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["meta"]["total"], 3);

        let data = body["data"].as_array().unwrap();
        let slugs: Vec<&str> = data.iter().map(|c| c["slug"].as_str().unwrap()).collect();
        assert_eq!(slugs, vec!["all", "clothes", "candles"]);

        assert_eq!(data[0]["subcategories"], Value::Array(vec![]));
        assert!(data[0]["parent"].is_null());
        assert_eq!(data[1]["color"], "#FF6B9D");
        assert_eq!(data[1]["subcategories"][0]["slug"], "t-shirts");
        assert!(data[1]["subcategories"][0]["color"].is_null());
        assert_eq!(
            data[1]["subcategories"][0]["parent"],
            parents[1].id.to_string()
        );
    }

    #[tokio::test]
    async fn test_list_categories_store_failure() {
        let repo = Arc::new(InMemoryCategoryRepository::new());
        repo.set_unavailable(true);

        let response = server(repo).await.get("/api/categories").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_get_category_by_slug() {
        let repo = Arc::new(InMemoryCategoryRepository::new());
        repo.insert_many(&[NewCategory::top_level("Music", "music", None)])
            .await
            .unwrap();
        let server = server(repo).await;

        let found = server.get("/api/categories/music").await;
        found.assert_status_ok();
        assert_eq!(found.json::<Value>()["data"]["name"], "Music");

        let missing = server.get("/api/categories/unknown").await;
        missing.assert_status_not_found();
    }
}
