use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use gradeportal_access::NavSection;
use gradeportal_core::errors::ErrorResponse;
use gradeportal_core::{Permission, Role};

use crate::modules::navigation::model::{
    AccessResponse, MenuDto, MenuSectionDto, NavLinkDto, NavigationResponse, RouteDto,
};
use crate::modules::pages::model::{PageView, ViewerDto};
use crate::modules::system::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::system::controller::health,
        crate::modules::navigation::controller::get_navigation,
        crate::modules::navigation::controller::check_access,
        crate::modules::navigation::controller::list_routes,
        crate::modules::pages::controller::render_page,
    ),
    components(
        schemas(
            Permission,
            Role,
            NavSection,
            NavLinkDto,
            MenuSectionDto,
            NavigationResponse,
            AccessResponse,
            RouteDto,
            MenuDto,
            PageView,
            ViewerDto,
            HealthResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Navigation", description = "Dashboard home, menu links and access checks"),
        (name = "Pages", description = "Guarded portal pages"),
        (name = "System", description = "Health and operational endpoints")
    ),
    info(
        title = "Grade Portal Gateway",
        version = "0.1.0",
        description = "Permission-gated routing and navigation for the university grade portal.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
