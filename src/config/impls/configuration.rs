use std::fs::File;
use std::io::Write;
use std::thread::available_parallelism;
use crate::common::common::parse_bind_address;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::engine_config::EngineConfig;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::udp_server_config::UdpServerConfig;
use crate::engine::engine::DEFAULT_WORKERS;
use crate::structs::Cli;

const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            shutdown_timeout: 5,
            engine: EngineConfig::default(),
            udp_server: UdpServerConfig {
                enabled: true,
                bind_address: String::from("0.0.0.0:9000"),
                receive_buffer_size: 4_194_304,
                reuse_address: true
            },
            http_server: HttpServerConfig {
                enabled: true,
                bind_address: String::from("0.0.0.0:9090"),
                keep_alive: 60,
                request_timeout: 15,
                disconnect_timeout: 15,
                threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(1).min(4)
            },
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::new(),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false
            }
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads `path`, or writes a default file there when `create` is set.
    ///
    /// Writing the default file still returns an error: the operator is expected
    /// to review it before the first real start.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically the config file"));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE] {error}");
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::Invalid(format!("unknown log_level '{}'", self.log_level)));
        }
        if self.log_console_interval == 0 {
            return Err(ConfigurationError::Invalid(String::from("log_console_interval must be at least 1 second")));
        }

        let check_map = [
            ("udp_server.bind_address", self.udp_server.enabled, &self.udp_server.bind_address),
            ("http_server.bind_address", self.http_server.enabled, &self.http_server.bind_address),
        ];
        for (name, enabled, value) in check_map {
            if enabled && parse_bind_address(value).is_err() {
                return Err(ConfigurationError::Invalid(format!("{name} '{value}' is not a valid socket address")));
            }
        }

        if self.sentry_config.enabled && self.sentry_config.dsn.is_empty() {
            return Err(ConfigurationError::Invalid(String::from("sentry_config.dsn is required when Sentry is enabled")));
        }
        Ok(())
    }

    /// Applies the command-line overrides on top of the loaded file.
    pub fn apply_cli(&mut self, args: &Cli) {
        if let Some(listen) = &args.listen {
            self.udp_server.bind_address = listen.clone();
        }
        if let Some(http) = &args.http {
            self.http_server.bind_address = http.clone();
        }
        if let Some(workers) = args.workers {
            self.engine.workers = match usize::try_from(workers) {
                Ok(workers) if workers > 0 => workers,
                _ => DEFAULT_WORKERS
            };
        }
    }
}
