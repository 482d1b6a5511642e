use std::sync::Arc;

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::{
    AgriAdvisorError,
    advice::AdviceService,
    models::{
        AdviceRequest, DepartmentContact, ErrorAdvice, LandPrice, MarketPrice,
        MessageEnvelope, ValidationMessage,
    },
    reference,
};

const REGISTRATION_ACK: &str = "Registration successful!";

/// Shared, read-only handler state
#[derive(Clone)]
pub struct AppState {
    pub advice: Arc<AdviceService>,
}

impl AppState {
    pub fn new(advice: AdviceService) -> Self {
        Self {
            advice: Arc::new(advice),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/market-data", get(get_market_data))
        .route("/land-price", get(get_land_price))
        .route("/department-numbers", get(get_department_numbers))
        .route("/weather-advice", post(get_weather_advice))
        .with_state(state)
}

impl IntoResponse for AgriAdvisorError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            return (
                StatusCode::BAD_REQUEST,
                Json(MessageEnvelope::new(ValidationMessage::default())),
            )
                .into_response();
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageEnvelope::new(ErrorAdvice::from_error(&self))),
        )
            .into_response()
    }
}

async fn register(payload: Result<Json<Value>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(registration)) => info!("Received registration data: {}", registration),
        Err(JsonRejection::MissingJsonContentType(_)) => {
            info!("Received registration without a JSON body")
        }
        Err(rejection) => {
            warn!("Rejected registration payload: {}", rejection.body_text());
            return rejection.into_response();
        }
    }

    Json(MessageEnvelope::new(REGISTRATION_ACK)).into_response()
}

async fn get_market_data() -> Json<&'static [MarketPrice]> {
    info!("GET request received for /api/market-data");
    Json(reference::MARKET_DATA.as_slice())
}

async fn get_land_price() -> Json<&'static [LandPrice]> {
    info!("GET request received for /api/land-price");
    Json(reference::LAND_PRICE_DATA.as_slice())
}

async fn get_department_numbers() -> Json<&'static [DepartmentContact]> {
    info!("GET request received for /api/department-numbers");
    Json(reference::DEPARTMENT_NUMBERS.as_slice())
}

async fn get_weather_advice(
    State(state): State<AppState>,
    payload: Result<Json<AdviceRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        // Oversized or unreadable bodies keep their own status
        Err(JsonRejection::BytesRejection(rejection)) => {
            warn!("Failed to read weather advice body: {}", rejection.body_text());
            return rejection.into_response();
        }
        // Bodies that do not decode carry no usable place
        Err(_) => AdviceRequest::default(),
    };

    let Some(place) = request.place() else {
        return AgriAdvisorError::validation("place is required").into_response();
    };

    match state.advice.get_weather_advice(place).await {
        Ok(advice) => Json(MessageEnvelope::new(advice)).into_response(),
        Err(err) => {
            error!("Error fetching or generating weather advice: {}", err);
            err.into_response()
        }
    }
}
