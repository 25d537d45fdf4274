use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{
    AmbulanceResponse, ErrorResponse, NearbyQueryParams, NearbyResponse, NearbyStatus,
    RegisterAmbulanceRequest,
};
use crate::api::routes::{client_ip, AppState};
use crate::error::{AppError, AppResult};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/ambulances")
            .route("", web::get().to(list_ambulances))
            .route("", web::post().to(register_ambulance))
            .route("/nearby", web::get().to(nearby_ambulances))
            .route("/{id}", web::get().to(get_ambulance)),
    );
}

#[utoipa::path(
    get,
    path = "/api/v1/ambulances/nearby",
    params(NearbyQueryParams),
    responses(
        (status = 200, description = "Ranked ambulances within the radius, nearest first", body = NearbyResponse),
        (status = 400, description = "Invalid coordinates or radius", body = ErrorResponse),
    ),
    tag = "ambulances"
)]
pub(crate) async fn nearby_ambulances(
    state: web::Data<AppState>,
    request: HttpRequest,
    query: web::Query<NearbyQueryParams>,
) -> AppResult<HttpResponse> {
    let params = query.into_inner();
    params.validate()?;
    let origin = params
        .origin()
        .map_err(|message| AppError::validation_error(message))?;

    let result = state
        .finder_service
        .nearby_ambulances(origin, params.radius_km, &client_ip(&request))
        .await?;

    state
        .metrics
        .record_nearby_query(result.status != NearbyStatus::Ok);

    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/v1/ambulances",
    responses(
        (status = 200, description = "Every registered ambulance", body = [AmbulanceResponse]),
    ),
    tag = "ambulances"
)]
pub(crate) async fn list_ambulances(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let result = state.finder_service.list().await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/v1/ambulances/{id}",
    responses(
        (status = 200, description = "The requested ambulance", body = AmbulanceResponse),
        (status = 404, description = "No ambulance with this id", body = ErrorResponse),
    ),
    tag = "ambulances"
)]
pub(crate) async fn get_ambulance(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let result = state
        .registrar_service
        .get_by_id(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    post,
    path = "/api/v1/ambulances",
    request_body = RegisterAmbulanceRequest,
    responses(
        (status = 201, description = "Ambulance registered", body = AmbulanceResponse),
        (status = 400, description = "Invalid coordinates", body = ErrorResponse),
        (status = 503, description = "No location submitted and none resolvable", body = ErrorResponse),
    ),
    tag = "ambulances"
)]
pub(crate) async fn register_ambulance(
    state: web::Data<AppState>,
    request: HttpRequest,
    payload: web::Json<RegisterAmbulanceRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .registrar_service
        .register(payload.into_inner(), &client_ip(&request))
        .await?;

    state.metrics.record_registration();

    Ok(HttpResponse::Created().json(result))
}
