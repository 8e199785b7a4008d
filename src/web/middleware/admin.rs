use axum::{
    body::Body,
    extract::Request,
    http::header,
    middleware::Next,
    response::Response,
};
use std::env;

/// Guards the privileged attendance dump. Callers present the shared
/// operator token as a bearer header; with no ADMIN_TOKEN configured the
/// route stays closed.
pub async fn require_admin(request: Request, next: Next) -> Response {
    let expected = env::var("ADMIN_TOKEN").ok().filter(|v| !v.is_empty());

    let provided = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|hv| hv.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    if let (Some(expected), Some(token)) = (expected, provided) {
        if token == expected {
            return next.run(request).await;
        }
    }

    Response::builder()
        .status(401)
        .body(Body::from("Unauthorized"))
        .unwrap()
}
