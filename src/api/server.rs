use crate::api::routes;
use crate::config::SharedConfig;
use crate::dns::DynRecordMutator;
use crate::domains::DynDomainStore;
use crate::geo::{DynReverseDns, GeoDb};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Clone)]
pub(super) struct AppState {
    pub config: SharedConfig,
    pub domains: DynDomainStore,
    pub dns: DynRecordMutator,
    pub geo: Arc<GeoDb>,
    pub rdns: DynReverseDns,
}

pub fn new(
    config: SharedConfig,
    domains: DynDomainStore,
    dns: DynRecordMutator,
    geo: Arc<GeoDb>,
    rdns: DynReverseDns,
) -> impl Future<Output = hyper::Result<()>> {
    axum::Server::bind(&config.api_bind_addr).serve(
        routes::new(AppState {
            config,
            domains,
            dns,
            geo,
            rdns,
        })
        .into_make_service_with_connect_info::<SocketAddr>(),
    )
}
