mod common;

use std::sync::Arc;
use actix_web::{test, App};
use actix_web::http::StatusCode;
use aegis_netengine::engine::structs::packet::Packet;
use aegis_netengine::http::http::{http_service_cors, http_service_prom_generate_line, http_service_routes};
use aegis_netengine::http::structs::http_service_data::HttpServiceData;
use common::RecordingProcessor;

fn service_data(queue_capacity: usize) -> Arc<HttpServiceData> {
    let (engine, stats) = common::create_test_engine(2, queue_capacity, Arc::new(RecordingProcessor::default()));
    Arc::new(HttpServiceData { engine, stats })
}

#[actix_web::test]
async fn test_http_health_endpoint() {
    let app = test::init_service(
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(service_data(8))),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"ok");
}

#[actix_web::test]
async fn test_http_metrics_exposes_counters() {
    let data = service_data(2);
    data.engine.enqueue(Packet::from_slice(b"a"));
    data.engine.enqueue(Packet::from_slice(b"b"));
    data.engine.enqueue(Packet::from_slice(b"c"));

    let app = test::init_service(
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(data.clone())),
    )
    .await;

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let text = String::from_utf8_lossy(&body);
    assert!(text.contains("# TYPE packets_processed_total counter"));
    assert!(text.contains("packets_processed_total 0\n"));
    assert!(text.contains("packets_accepted_total 2\n"));
    assert!(text.contains("packets_dropped_total 1\n"));
    assert!(text.contains("queue_length 2\n"));
    assert!(text.contains("queue_capacity 2\n"));
}

#[actix_web::test]
async fn test_http_stats_endpoint_returns_json() {
    let data = service_data(16);
    data.engine.enqueue(Packet::from_slice(b"queued"));

    let app = test::init_service(
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(data)),
    )
    .await;

    let req = test::TestRequest::get().uri("/stats").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["stats"]["packets_accepted"], 1);
    assert_eq!(body["engine"]["state"], "idle");
    assert_eq!(body["engine"]["workers"], 2);
    assert_eq!(body["engine"]["queue_length"], 1);
    assert_eq!(body["engine"]["queue_capacity"], 16);
}

#[actix_web::test]
async fn test_http_unknown_route_is_not_found() {
    let app = test::init_service(
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(service_data(8))),
    )
    .await;

    let req = test::TestRequest::get().uri("/does-not-exist").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_prometheus_line_format() {
    let line = http_service_prom_generate_line("workers_active", "gauge", "Workers currently running", 4);
    assert_eq!(
        line,
        "# HELP workers_active Workers currently running\n# TYPE workers_active gauge\nworkers_active 4\n"
    );
}
