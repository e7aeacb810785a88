use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer.
///
/// Allows any origin. Matches the open CORS posture of the task API's
/// browser clients.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
