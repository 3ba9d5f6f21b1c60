use std::process::exit;
use std::sync::Arc;
use std::time::{Duration, Instant};
use clap::Parser;
use log::{error, info, warn};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use aegis_netengine::common::common::{parse_bind_address, setup_logging};
use aegis_netengine::config::structs::configuration::Configuration;
use aegis_netengine::engine::structs::engine::Engine;
use aegis_netengine::engine::structs::fixed_latency_processor::FixedLatencyProcessor;
use aegis_netengine::http::http::http_service;
use aegis_netengine::http::structs::http_service_data::HttpServiceData;
use aegis_netengine::stats::structs::stats_atomics::StatsAtomics;
use aegis_netengine::structs::Cli;
use aegis_netengine::udp::udp::udp_service;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    config.apply_cli(&args);
    if let Err(error) = config.validate() {
        eprintln!("[VALIDATE] {error}");
        exit(101);
    }
    let config = Arc::new(config);

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard: Option<ClientInitGuard> = if config.sentry_config.enabled {
        Some(sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            ..Default::default()
        })))
    } else {
        None
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let stats = Arc::new(StatsAtomics::new());
            let processor = Arc::new(FixedLatencyProcessor::new(Duration::from_millis(config.engine.process_latency_ms)));
            let engine = Arc::new(Engine::new(&config.engine, processor, stats.clone()));

            let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
            if let Err(error) = engine.start(shutdown_rx.clone()) {
                error!("[BOOT] Engine start failed: {error}");
                exit(1);
            }

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(error) => {
                    error!("[BOOT] Unable to install the signal handlers: {error:?}");
                    exit(1);
                }
            };

            let mut http_handle = None;
            if config.http_server.enabled {
                let address = parse_bind_address(&config.http_server.bind_address).map_err(std::io::Error::other)?;
                let data = Arc::new(HttpServiceData {
                    engine: engine.clone(),
                    stats: stats.clone(),
                });
                let (handle, future) = match http_service(address, data, &config.http_server) {
                    Ok(server) => server,
                    Err(error) => {
                        error!("[HTTP] Could not listen to the HTTP port: {error}");
                        exit(1);
                    }
                };
                tokio::spawn(async move {
                    if let Err(error) = future.await {
                        error!("[HTTP] Server error: {error}");
                    }
                });
                http_handle = Some(handle);
            }

            let mut udp_handle = None;
            if config.udp_server.enabled {
                let address = parse_bind_address(&config.udp_server.bind_address).map_err(std::io::Error::other)?;
                match udp_service(address, &config.udp_server, engine.clone(), shutdown_rx.clone()).await {
                    Ok(handle) => udp_handle = Some(handle),
                    Err(error) => {
                        sentry::capture_error(&error);
                        error!("[UDP] Could not listen to the UDP port: {error}");
                        exit(1);
                    }
                }
            }

            let stats_handler = tokio_shutdown.clone();
            let stats_console = stats.clone();
            let engine_console = engine.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                let mut last: Option<(Instant, i64, i64)> = None;
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = stats_console.get_stats();
                            let now = Instant::now();
                            let (processed_ps, dropped_ps) = match last {
                                Some((at, processed, dropped)) => {
                                    let dt = now.duration_since(at).as_secs_f64().max(1.0);
                                    (
                                        ((stats.packets_processed - processed) as f64 / dt) as i64,
                                        ((stats.packets_dropped - dropped) as f64 / dt) as i64
                                    )
                                }
                                None => (0, 0)
                            };
                            last = Some((now, stats.packets_processed, stats.packets_dropped));

                            info!(
                                "[STATS] Processed: {} ({}/s) - Failed: {} - Accepted: {} - Dropped: {} ({}/s) - Rejected: {} | Workers: {} | Q: {}/{}",
                                stats.packets_processed, processed_ps, stats.packets_failed, stats.packets_accepted,
                                stats.packets_dropped, dropped_ps, stats.packets_rejected, stats.workers_active,
                                engine_console.queue_len(), engine_console.queue_capacity()
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");

            shutdown_tx.send_replace(true);
            let shutdown_timeout = Duration::from_secs(config.shutdown_timeout);

            if let Some(handle) = http_handle
                && tokio::time::timeout(shutdown_timeout, handle.stop(true)).await.is_err() {
                warn!("[HTTP] Server did not stop within {}s", config.shutdown_timeout);
            }

            match tokio::time::timeout(shutdown_timeout, engine.stop()).await {
                Ok(()) => info!("[ENGINE] All workers drained"),
                Err(_) => warn!("[ENGINE] Workers did not drain within {}s, abandoning the wait", config.shutdown_timeout)
            }

            if let Some(handle) = udp_handle
                && let Err(error) = handle.await {
                error!("[UDP] Listener task failed: {error}");
            }

            info!("Server shutting down completed");
            Ok(())
        })
}
