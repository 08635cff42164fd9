use crate::app::{new_app, AppOptions};
use actix_cors::Cors;
use actix_web::{
    dev::{ServiceFactory, ServiceRequest},
    middleware::Logger,
    web::{self, JsonConfig},
    App, HttpServer,
};
use anyhow::Context;
use bytesize::ByteSize;
use std::{
    net::{IpAddr, Ipv6Addr, SocketAddr},
    str::FromStr,
    sync::Arc,
};
use utoipa::openapi::{Info, OpenApi};
use utoipa_actix_web::{service_config::ServiceConfig, AppExt, UtoipaApp};
use utoipa_rapidoc::RapiDoc;

const DEFAULT_ADDR: SocketAddr = SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 8080);

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
#[command(
    rename_all_env = "SCREAMING_SNAKE_CASE",
    next_help_heading = "HTTP endpoint"
)]
#[group(id = "http")]
pub struct HttpServerConfig {
    /// The number of worker threads, defaults to zero, which falls back to the number of cores.
    #[arg(
        id = "http-server-workers",
        long,
        env = "HTTP_SERVER_WORKERS",
        default_value_t = 0
    )]
    pub workers: usize,

    /// The address to listen on
    #[arg(
        id = "http-server-bind-address",
        long,
        env = "HTTP_SERVER_BIND_ADDR",
        default_value_t = default::bind_addr(),
    )]
    pub bind_addr: String,

    /// The port to listen on
    #[arg(
        id = "http-server-bind-port",
        short = 'p',
        long,
        env = "HTTP_SERVER_BIND_PORT",
        default_value_t = DEFAULT_ADDR.port(),
    )]
    pub bind_port: u16,

    /// The overall request limit
    #[arg(
        id = "http-server-request-limit",
        long,
        env = "HTTP_SERVER_REQUEST_LIMIT",
        default_value = default::REQUEST_LIMIT,
    )]
    pub request_limit: ByteSize,

    /// The JSON request limit
    #[arg(
        id = "http-server-json-limit",
        long,
        env = "HTTP_SERVER_JSON_LIMIT",
        default_value = default::JSON_LIMIT,
    )]
    pub json_limit: ByteSize,
}

mod default {
    use super::*;

    pub fn bind_addr() -> String {
        "::1".to_string()
    }

    // `ByteSize` displays in SI units, which would not parse back to the same amount
    pub const REQUEST_LIMIT: &str = "256KiB";
    pub const JSON_LIMIT: &str = "64KiB";

    pub const fn request_limit() -> ByteSize {
        ByteSize::kib(256)
    }

    pub const fn json_limit() -> ByteSize {
        ByteSize::kib(64)
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            workers: 0,
            bind_addr: default::bind_addr(),
            bind_port: DEFAULT_ADDR.port(),
            request_limit: default::request_limit(),
            json_limit: default::json_limit(),
        }
    }
}

impl TryFrom<HttpServerConfig> for HttpServerBuilder {
    type Error = anyhow::Error;

    fn try_from(value: HttpServerConfig) -> Result<Self, Self::Error> {
        let addr = SocketAddr::new(
            IpAddr::from_str(&value.bind_addr).context("parse bind address")?,
            value.bind_port,
        );

        Ok(HttpServerBuilder::new()
            .workers(value.workers)
            .bind(addr)
            .request_limit(value.request_limit.as_u64() as _)
            .json_limit(value.json_limit.as_u64() as _))
    }
}

pub type ConfiguratorFn = dyn Fn(&mut ServiceConfig) + Send + Sync;

pub struct HttpServerBuilder {
    configurator: Option<Arc<ConfiguratorFn>>,

    bind: SocketAddr,

    workers: usize,
    json_limit: Option<usize>,
    request_limit: Option<usize>,

    openapi_info: Option<Info>,
}

impl Default for HttpServerBuilder {
    fn default() -> Self {
        HttpServerBuilder::new()
    }
}

impl HttpServerBuilder {
    pub fn new() -> Self {
        Self {
            configurator: None,
            bind: DEFAULT_ADDR,
            workers: 0,
            json_limit: None,
            request_limit: None,
            openapi_info: None,
        }
    }

    pub fn openapi_info(mut self, openapi_info: Info) -> Self {
        self.openapi_info = Some(openapi_info);
        self
    }

    pub fn configure<F>(mut self, configurator: F) -> Self
    where
        F: Fn(&mut ServiceConfig) + Send + Sync + 'static,
    {
        self.configurator = Some(Arc::new(configurator));
        self
    }

    pub fn bind(mut self, addr: impl Into<SocketAddr>) -> Self {
        self.bind = addr.into();
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn json_limit(mut self, json_limit: usize) -> Self {
        self.json_limit = Some(json_limit);
        self
    }

    pub fn request_limit(mut self, request_limit: usize) -> Self {
        self.request_limit = Some(request_limit);
        self
    }

    pub async fn run(self) -> anyhow::Result<()> {
        if let Some(limit) = self.request_limit {
            log::info!("Payload limit: {}", ByteSize(limit as _));
        }
        if let Some(limit) = self.json_limit {
            log::info!("JSON limit: {}", ByteSize(limit as _));
        }

        let mut http = HttpServer::new(move || {
            let mut json = JsonConfig::default();
            if let Some(limit) = self.json_limit {
                json = json.limit(limit);
            }

            let mut app = new_app(AppOptions {
                cors: Some(Cors::permissive()),
                logger: Some(Logger::default()),
            })
            .app_data(json)
            .into_utoipa_app();

            // configure payload limit

            if let Some(limit) = self.request_limit {
                app = app.app_data(web::PayloadConfig::new(limit));
            }

            // configure application

            let app = app.configure(|svc| {
                if let Some(config) = &self.configurator {
                    config(svc);
                }
            });

            app.apply_openapi(self.openapi_info.clone())
        });

        if self.workers > 0 {
            log::info!("Using {} worker(s)", self.workers);
            http = http.workers(self.workers);
        }

        log::info!("Binding to: {}", self.bind);
        http = http.bind(self.bind).context("bind")?;

        Ok(http.run().await?)
    }
}

pub trait ApplyOpenApi<T> {
    /// Turn a [`UtoipaApp`] into a [`App`] by applying the API spec
    fn apply_openapi(self, openapi_info: Option<Info>) -> App<T>;
}

impl<T> ApplyOpenApi<T> for UtoipaApp<T>
where
    T: ServiceFactory<ServiceRequest, Config = (), Error = actix_web::Error, InitError = ()>,
{
    fn apply_openapi(self, openapi_info: Option<Info>) -> App<T> {
        let (app, openapi) = self.split_for_parts();
        let openapi = with_info(openapi, openapi_info);

        // serves the document under `/openapi.json`, and a UI under `/openapi/`
        app.service(RapiDoc::with_openapi("/openapi.json", openapi).path("/openapi/"))
            .service(web::redirect("/openapi", "/openapi/"))
    }
}

fn with_info(mut openapi: OpenApi, info: Option<Info>) -> OpenApi {
    if let Some(info) = info {
        openapi.info = info;
    }
    openapi
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::Parser;

    #[derive(clap::Parser, Debug)]
    struct Cli {
        #[command(flatten)]
        http: HttpServerConfig,
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["test"]);
        assert_eq!(cli.http, HttpServerConfig::default());
        assert_eq!(cli.http.request_limit.as_u64(), 256 * 1024);
        assert_eq!(cli.http.json_limit.as_u64(), 64 * 1024);
    }

    #[test]
    fn limits_parse_units() {
        let cli = Cli::parse_from([
            "test",
            "--http-server-json-limit",
            "1 MiB",
            "--http-server-bind-port",
            "9090",
        ]);
        assert_eq!(cli.http.json_limit, ByteSize::mib(1));
        assert_eq!(cli.http.bind_port, 9090);
    }

    #[test]
    fn builder_from_config() {
        let builder = HttpServerBuilder::try_from(HttpServerConfig {
            bind_addr: "127.0.0.1".into(),
            ..Default::default()
        })
        .expect("must convert");

        assert_eq!(builder.bind.to_string(), "127.0.0.1:8080");
        assert_eq!(builder.json_limit, Some(64 * 1024));
    }

    #[test]
    fn invalid_bind_address() {
        assert!(HttpServerBuilder::try_from(HttpServerConfig {
            bind_addr: "not-an-address".into(),
            ..Default::default()
        })
        .is_err());
    }
}
