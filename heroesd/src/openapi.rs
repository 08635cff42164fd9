use anyhow::Context;
use heroes_server::openapi::create_openapi;
use std::{fs, path::PathBuf, process::ExitCode};

#[derive(clap::Args, Debug)]
pub struct Run {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Export the OpenAPI document as JSON
    Export(Export),
}

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        use Command::*;
        match self.command {
            Export(export) => export.run().await,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct Export {
    /// The file the document should be written to, standard output if absent
    #[arg(long, env = "OPENAPI_FILE")]
    pub file: Option<PathBuf>,
}

impl Export {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let doc = create_openapi().await?.to_pretty_json()?;

        match self.file {
            Some(file) => fs::write(&file, doc)
                .with_context(|| format!("writing OpenAPI document to {}", file.display()))?,
            None => println!("{doc}"),
        }

        Ok(ExitCode::SUCCESS)
    }
}
