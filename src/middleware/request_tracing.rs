use std::net::SocketAddr;

use axum::{
    extract::ConnectInfo,
    http::{HeaderValue, Request},
    middleware::Next,
    response::IntoResponse,
};
use log::{info, warn};

#[derive(Clone)]
pub struct RequestTraceData {
    id: String,
}

impl RequestTraceData {
    pub fn get_id(&self) -> String {
        return self.id.clone();
    }
}

fn get_remote_ip_addr<T>(req: &Request<T>) -> String {
    let connect_info = req.extensions().get::<ConnectInfo<SocketAddr>>().copied();

    match connect_info {
        Some(socket_addr) => socket_addr.ip().to_string(),
        None => String::from("unknown"),
    }
}

fn get_header_or<T>(req: &Request<T>, key: &str) -> String {
    req.headers()
        .get(key)
        .and_then(|header| header.to_str().ok())
        .unwrap_or("not-set")
        .to_string()
}

pub async fn request_tracing<T>(mut req: Request<T>, next: Next<T>) -> impl IntoResponse {
    let request_id = nanoid::nanoid!(10);

    info!(
        "[{}] {} '{}' {} {}",
        request_id,
        get_remote_ip_addr(&req),
        get_header_or(&req, "user-agent"),
        req.method().as_str(),
        req.uri().to_string(),
    );

    req.extensions_mut().insert(RequestTraceData {
        id: request_id.clone(),
    });
    let mut response = next.run(req).await;

    match HeaderValue::from_str(&request_id) {
        Ok(header) => {
            response.headers_mut().insert("X-Request-Id", header);
        }
        Err(e) => warn!("[{}] request id is not a valid header: {}", request_id, e),
    }

    response
}
