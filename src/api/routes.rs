use crate::api::api_error::APIError;
use crate::api::model::{IpInfoResponse, UpdateParams, UpdateResult};
use crate::api::server::AppState;
use crate::auth;
use crate::error::Error;
use axum::extract::{ConnectInfo, Query, State};
use axum::http::header::USER_AGENT;
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use std::net::{IpAddr, SocketAddr};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub(super) fn new(state: AppState) -> Router {
    Router::new()
        .route("/get", get(ip_info))
        .route("/update", get(update))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(state.config.api_timeout))
        .with_state(state)
}

async fn ip_info(
    State(state): State<AppState>,
    ConnectInfo(client_addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Json<IpInfoResponse> {
    let ip = client_addr.ip();
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let geo = state.geo.lookup(ip);
    let hostname = state.rdns.hostname(ip).await;
    Json(IpInfoResponse::new(ip, user_agent, hostname, geo))
}

async fn update(
    State(state): State<AppState>,
    ConnectInfo(client_addr): ConnectInfo<SocketAddr>,
    WithRejection(Query(params), _): WithRejection<Query<UpdateParams>, APIError>,
) -> Result<Json<UpdateResult>, APIError> {
    let source_ip = client_addr.ip();
    // Empty parameters count as missing.
    let (Some(domain), Some(proof)) = (
        params.domain.filter(|d| !d.is_empty()),
        params.hash.filter(|h| !h.is_empty()),
    ) else {
        return Err(Error::MissingParams.into());
    };

    // Unknown domains and registry failures are indistinguishable to callers.
    let config = match state.domains.lookup(&domain).await {
        Ok(Some(config)) => config,
        Ok(None) => {
            tracing::debug!("rejected update for unregistered \"{domain}\"");
            return Err(Error::InvalidDomain.into());
        }
        Err(err) => {
            tracing::warn!("domain registry lookup for \"{domain}\" failed: {err}");
            return Err(Error::InvalidDomain.into());
        }
    };

    if !auth::verify(&proof, &config.secret, &config.zone, source_ip) {
        tracing::debug!("rejected update from {source_ip} for \"{domain}\"");
        return Err(Error::InvalidProof.into());
    }

    // A records hold IPv4 only; a v6 source can authenticate but its address
    // can't be bound, matching the upstream rejection in the hosted zone.
    let IpAddr::V4(addr) = source_ip else {
        tracing::warn!("no A record value for v6 source {source_ip} (\"{domain}\")");
        return Err(Error::UpdateFailed.into());
    };

    if let Err(err) = state.dns.upsert_a(&domain, addr, &config.zone).await {
        tracing::warn!("record upsert for \"{domain}\" failed: {err}");
        return Err(Error::UpdateFailed.into());
    }

    tracing::info!("accepted update from {addr} for \"{domain}\"");
    Ok(Json(UpdateResult {
        message: "DNS updated".to_string(),
    }))
}
