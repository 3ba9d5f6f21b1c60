use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::info;
use serde_json::json;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::http::structs::http_service_data::HttpServiceData;

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/health").route(web::get().to(http_service_health)));
        cfg.service(web::resource("/metrics").route(web::get().to(http_service_metrics)));
        cfg.service(web::resource("/stats").route(web::get().to(http_service_stats)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

#[tracing::instrument(level = "debug", skip(data))]
pub fn http_service(
    addr: SocketAddr,
    data: Arc<HttpServiceData>,
    config: &HttpServerConfig
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>> + use<>)>
{
    info!("[HTTP] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.threads.max(1) as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_health() -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::plaintext()).body("ok")
}

pub async fn http_service_stats(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let stats = data.stats.get_stats();
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "stats": stats,
        "engine": {
            "state": data.engine.state().to_string(),
            "workers": data.engine.workers(),
            "queue_length": data.engine.queue_len(),
            "queue_capacity": data.engine.queue_capacity()
        }
    }))
}

pub async fn http_service_metrics(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let stats = data.stats.get_stats();
    let engine = &data.engine;

    let mut string_output = String::new();
    string_output.push_str(&http_service_prom_generate_line("packets_processed_total", "counter", "Total number of packets processed", stats.packets_processed));
    string_output.push_str(&http_service_prom_generate_line("packets_failed_total", "counter", "Total number of packets whose processing failed", stats.packets_failed));
    string_output.push_str(&http_service_prom_generate_line("packets_accepted_total", "counter", "Total number of packets admitted into the intake queue", stats.packets_accepted));
    string_output.push_str(&http_service_prom_generate_line("packets_dropped_total", "counter", "Total number of packets dropped because the intake queue was full", stats.packets_dropped));
    string_output.push_str(&http_service_prom_generate_line("packets_rejected_total", "counter", "Total number of packets offered after shutdown started", stats.packets_rejected));
    string_output.push_str(&http_service_prom_generate_line("bytes_processed_total", "counter", "Total payload bytes of processed packets", stats.bytes_processed));
    string_output.push_str(&http_service_prom_generate_line("workers_active", "gauge", "Workers currently running", stats.workers_active));
    string_output.push_str(&http_service_prom_generate_line("queue_length", "gauge", "Packets waiting in the intake queue", engine.queue_len() as i64));
    string_output.push_str(&http_service_prom_generate_line("queue_capacity", "gauge", "Capacity of the intake queue", engine.queue_capacity() as i64));

    HttpResponse::Ok().content_type(ContentType::plaintext()).body(string_output)
}

pub fn http_service_prom_generate_line(metric: &str, type_metric: &str, description: &str, value: i64) -> String
{
    format!(
        "# HELP {metric} {description}\n# TYPE {metric} {type_metric}\n{metric} {value}\n"
    )
}

pub async fn http_service_not_found() -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}
