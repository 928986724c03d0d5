use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};
use tracing::{debug, instrument};

use gradeportal_access::{ROUTES, dashboard_home, menu_sections, normalize_path, resolve_route};
use gradeportal_core::AppError;
use gradeportal_observability::track_access_decision;

use crate::middleware::auth::{AuthUser, CurrentSession};
use crate::modules::navigation::model::{
    AccessQuery, AccessResponse, MenuSectionDto, NavigationResponse, RouteDto,
};

#[utoipa::path(
    get,
    path = "/api/navigation",
    responses(
        (status = 200, description = "Dashboard home and menu for the caller", body = NavigationResponse),
        (status = 401, description = "Missing or invalid token", body = gradeportal_core::errors::ErrorResponse)
    ),
    tag = "Navigation",
    security(("bearer_auth" = []))
)]
#[instrument(skip(auth_user), fields(principal_id = %auth_user.0.id))]
pub async fn get_navigation(auth_user: AuthUser) -> Json<NavigationResponse> {
    let principal = auth_user.principal();
    let sections: Vec<MenuSectionDto> = menu_sections(principal)
        .into_iter()
        .map(MenuSectionDto::from)
        .collect();

    debug!(sections = sections.len(), "Built navigation menu");

    Json(NavigationResponse {
        home: dashboard_home(principal).to_string(),
        sections,
    })
}

#[utoipa::path(
    get,
    path = "/api/access",
    params(AccessQuery),
    responses(
        (status = 200, description = "Access decision for the path", body = AccessResponse),
        (status = 400, description = "Missing path parameter", body = gradeportal_core::errors::ErrorResponse),
        (status = 404, description = "Path is not a portal route", body = gradeportal_core::errors::ErrorResponse)
    ),
    tag = "Navigation",
    security((), ("bearer_auth" = []))
)]
#[instrument(skip(session, query))]
pub async fn check_access(
    CurrentSession(session): CurrentSession,
    query: Result<Query<AccessQuery>, QueryRejection>,
) -> Result<Json<AccessResponse>, AppError> {
    let Query(query) = query.map_err(AppError::bad_request)?;

    let outcome = resolve_route(&session, &query.path)
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Unknown route: {}", query.path)))?;

    track_access_decision(outcome.kind());
    debug!(path = %query.path, outcome = outcome.kind(), "Resolved access");

    Ok(Json(AccessResponse::new(normalize_path(&query.path), outcome)))
}

#[utoipa::path(
    get,
    path = "/api/routes",
    responses(
        (status = 200, description = "The portal route table", body = Vec<RouteDto>)
    ),
    tag = "Navigation"
)]
pub async fn list_routes() -> Json<Vec<RouteDto>> {
    Json(ROUTES.iter().map(RouteDto::from).collect())
}
