// src/presentation/http/middleware/request_context.rs
//! Assigns every inbound call its `RequestContext` and logs its beginning
//! and its outcome.
use crate::application::{
    RequestContext, RequestId, context::REQUEST_ID_HEADER,
};
use axum::{
    extract::{ConnectInfo, Request},
    http::{HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use std::{net::SocketAddr, time::Instant};
use tracing::{error, info, warn};

pub async fn request_context(mut req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(RequestId::from_header)
        .unwrap_or_else(RequestId::generate);

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let client_ip = client_ip(&req);

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        client_ip = %client_ip,
        "request received"
    );

    req.extensions_mut()
        .insert(RequestContext::new(request_id.clone()));

    let mut outcome = OutcomeLog {
        request_id,
        method,
        path,
        started: Instant::now(),
        status: None,
    };

    let mut response = next.run(req).await;
    outcome.status = Some(response.status());

    if let Ok(value) = HeaderValue::from_str(outcome.request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

fn client_ip(req: &Request) -> String {
    if let Some(ConnectInfo(addr)) = req.extensions().get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }
    forwarded_for(req.headers()).unwrap_or_else(|| "unknown".to_string())
}

fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Emits the completion event exactly once, including when the handler
/// future is dropped before producing a response.
struct OutcomeLog {
    request_id: RequestId,
    method: Method,
    path: String,
    started: Instant,
    status: Option<StatusCode>,
}

impl Drop for OutcomeLog {
    fn drop(&mut self) {
        let elapsed_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        match self.status {
            Some(status) if status.is_server_error() => error!(
                request_id = %self.request_id,
                method = %self.method,
                path = %self.path,
                status = status.as_u16(),
                elapsed_ms,
                "request failed"
            ),
            Some(status) => info!(
                request_id = %self.request_id,
                method = %self.method,
                path = %self.path,
                status = status.as_u16(),
                elapsed_ms,
                "request completed"
            ),
            None => warn!(
                request_id = %self.request_id,
                method = %self.method,
                path = %self.path,
                elapsed_ms,
                "request aborted before completion"
            ),
        }
    }
}
