//! HTTP surface for the civic assistant and the ward directory.

mod endpoints;
mod error;
mod handlers;
mod server;

pub use endpoints::{
    CHAT_ALIAS_ENDPOINT, CHAT_ENDPOINT, HEALTH_ENDPOINT, SEARCH_ENDPOINT, WARDS_ENDPOINT,
    WARD_DETAIL_ENDPOINT,
};
pub use server::{
    build_gateway_router, run_gateway_server, GatewayServerConfig, GatewayServerState,
    DEFAULT_BIND, DEFAULT_MAX_BODY_BYTES,
};
