use crate::{
    dto::{ResolveQuery, ResolveResponse, TraceEntryDto},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, instrument, warn};

/// Resolution outcome is always reported with HTTP 200; failures travel in
/// the `status` field of the body.
#[instrument(skip(state), name = "api_get_a_records")]
pub async fn get_a_records(
    State(state): State<AppState>,
    Query(params): Query<ResolveQuery>,
) -> Json<ResolveResponse> {
    let need_trace = params.need_trace();
    let Some(domain) = params.domain else {
        warn!("Request without domain parameter");
        return Json(ResolveResponse::Fail {
            error: "missing query parameter: domain".to_string(),
        });
    };

    match state.resolve_hostname.execute(&domain, need_trace).await {
        Ok(trace) => {
            debug!(domain = %domain, steps = trace.len(), "Resolution served");
            Json(ResolveResponse::Success {
                response: trace.into_iter().map(TraceEntryDto::from).collect(),
            })
        }
        Err(e) => Json(ResolveResponse::Fail {
            error: e.to_string(),
        }),
    }
}
