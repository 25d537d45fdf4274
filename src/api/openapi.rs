use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::routes::ambulances::nearby_ambulances,
        crate::api::routes::ambulances::list_ambulances,
        crate::api::routes::ambulances::get_ambulance,
        crate::api::routes::ambulances::register_ambulance,
        crate::api::routes::health,
        crate::api::routes::ready,
    ),
    components(
        schemas(
            crate::api::dtos::Coordinates,
            crate::api::dtos::RegisterAmbulanceRequest,
            crate::api::dtos::AmbulanceResponse,
            crate::api::dtos::NearbyAmbulanceResponse,
            crate::api::dtos::NearbyResponse,
            crate::api::dtos::NearbyStatus,
            crate::api::dtos::ErrorResponse,
        )
    ),
    tags(
        (name = "ambulances", description = "Locating and registering ambulances"),
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "Ambufind Backend API",
        version = "0.1.0",
        description = "Backend API for locating and registering ambulances",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub fn configure_swagger_ui(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
