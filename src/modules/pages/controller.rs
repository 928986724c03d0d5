use axum::{
    Json,
    extract::Path,
    response::{IntoResponse, Redirect, Response},
};
use tracing::{info, instrument};

use gradeportal_access::{AccessOutcome, ENTRY_ROUTE, RouteGuard, dashboard_home, route_for};
use gradeportal_core::AppError;
use gradeportal_observability::track_access_decision;

use crate::middleware::auth::CurrentSession;
use crate::modules::pages::model::{PageView, ViewerDto};

/// Where the page endpoints are mounted.
pub const PAGES_PREFIX: &str = "/app";

/// Maps a portal path to its URL on this gateway. The entry page is served
/// by the front end, not here.
pub fn page_location(portal_path: &str) -> String {
    if portal_path == ENTRY_ROUTE {
        ENTRY_ROUTE.to_string()
    } else {
        format!("{}{}", PAGES_PREFIX, portal_path)
    }
}

#[utoipa::path(
    get,
    path = "/app/{path}",
    params(("path" = String, Path, description = "Portal path without the leading slash, e.g. `teacher/grades`")),
    responses(
        (status = 200, description = "The caller may see the page", body = PageView),
        (status = 303, description = "Redirect to the entry page or profile setup"),
        (status = 404, description = "Path is not a portal route", body = gradeportal_core::errors::ErrorResponse)
    ),
    tag = "Pages",
    security((), ("bearer_auth" = []))
)]
#[instrument(skip(session))]
pub async fn render_page(
    CurrentSession(session): CurrentSession,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    let portal_path = format!("/{}", path);

    let route = route_for(&portal_path)
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Unknown route: {}", portal_path)))?;

    let mut location = None;
    let mut guard = RouteGuard::new(route.required);
    let outcome = guard.evaluate(&session, &portal_path, &mut |target: &str| {
        location = Some(page_location(target));
    });
    track_access_decision(outcome.kind());

    match (outcome, session.principal()) {
        (AccessOutcome::Render, Some(principal)) => {
            let menu = route.menu;
            Ok(Json(PageView {
                path: route.path.to_string(),
                title_key: menu.map(|menu| menu.label_key.to_string()),
                section: menu.map(|menu| menu.section),
                home: dashboard_home(principal).to_string(),
                viewer: ViewerDto::from(principal),
            })
            .into_response())
        }
        _ => {
            let location = location.unwrap_or_else(|| ENTRY_ROUTE.to_string());
            info!(path = %portal_path, to = %location, "Redirecting page request");
            Ok(Redirect::to(&location).into_response())
        }
    }
}
