use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    contact::{ContactField, ContactForm, ValidationOutcome},
    models::Catalog,
    render::{RenderOutcome, ResultRenderer},
    search::{self, SearchQuery},
    time,
};

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize)]
pub struct TimeParams {
    pub zone: String,
}

#[derive(Serialize)]
pub struct TimeResponse {
    pub zone: String,
    pub time: String,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ContactResponse {
    Accepted {
        message: String,
    },
    Rejected {
        message: String,
        missing: Vec<ContactField>,
    },
}

pub fn router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/catalog", get(get_catalog))
        .route("/search", get(search_recommendations))
        .route("/time", get(get_time))
        .route("/contact", post(submit_contact))
        .with_state(catalog)
}

async fn get_catalog(State(catalog): State<Arc<Catalog>>) -> Json<Catalog> {
    Json(catalog.as_ref().clone())
}

async fn search_recommendations(
    State(catalog): State<Arc<Catalog>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<RenderOutcome>, ApiError> {
    let query = SearchQuery::parse(&params.q).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.user_message(),
            }),
        )
    })?;

    let results = search::search(&catalog, &query);
    Ok(Json(ResultRenderer::new().render(results)))
}

async fn get_time(Query(params): Query<TimeParams>) -> Json<TimeResponse> {
    let time = time::current_local_time(&params.zone);
    Json(TimeResponse {
        zone: params.zone,
        time,
    })
}

async fn submit_contact(Json(form): Json<ContactForm>) -> (StatusCode, Json<ContactResponse>) {
    let mut form = form.trimmed();
    let outcome = form.submit();
    let message = outcome.user_message().to_string();
    match outcome {
        ValidationOutcome::Accepted => (StatusCode::OK, Json(ContactResponse::Accepted { message })),
        ValidationOutcome::Rejected { missing } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ContactResponse::Rejected { message, missing }),
        ),
    }
}
