use clap::Parser;
use heroes_infrastructure::tracing::{init_tracing, LogFormat};
use std::process::{ExitCode, Termination};

mod db;
mod openapi;

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Run the API server, the default
    Api(heroes_server::Run),
    /// Manage the database
    Db(db::Run),
    /// Work with the OpenAPI document
    Openapi(openapi::Run),
}

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "heroesd",
    long_about = None
)]
pub struct Heroesd {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,

    /// The format of the log output
    #[arg(long, env, value_enum, global = true, default_value_t = LogFormat::default())]
    pub log_format: LogFormat,

    #[command(flatten)]
    pub api: heroes_server::Run,
}

impl Heroesd {
    async fn run(self) -> ExitCode {
        init_tracing("heroesd", self.log_format);

        match self.run_command().await {
            Ok(code) => code,
            Err(err) => {
                log::error!("Error: {err}");
                for (n, err) in err.chain().skip(1).enumerate() {
                    if n == 0 {
                        log::error!("Caused by:");
                    }
                    log::error!("\t{err}");
                }

                ExitCode::FAILURE
            }
        }
    }

    async fn run_command(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Some(Command::Api(run)) => run.run().await,
            Some(Command::Db(run)) => run.run().await,
            Some(Command::Openapi(run)) => run.run().await,
            None => self.api.run().await,
        }
    }
}

#[actix_web::main]
async fn main() -> impl Termination {
    Heroesd::parse().run().await
}
