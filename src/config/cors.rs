// src/config/cors.rs
// DOCUMENTATION: Cross-origin policy
// PURPOSE: Let browser clients on any origin call the API

use actix_cors::Cors;

/// Allow-all CORS policy
/// DOCUMENTATION: Any origin, method and header; credentials allowed.
/// The web frontend runs on its own origin and calls this API directly.
pub fn cors_policy() -> Cors {
    Cors::permissive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::health_config;
    use actix_web::{http::header, test, App};

    #[actix_web::test]
    async fn test_cross_origin_request_is_allowed() {
        let app = test::init_service(App::new().wrap(cors_policy()).configure(health_config)).await;

        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:3000")
        );
    }

    #[actix_web::test]
    async fn test_preflight_is_answered() {
        let app = test::init_service(App::new().wrap(cors_policy()).configure(health_config)).await;

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/health")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    }
}
