use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use form::request_form::RequestForm;
use log::{info, warn, LevelFilter};
use models::config::Config;
use services::test_generation_service::TestGenerationService;
use simple_logger::SimpleLogger;
use tokio::io::AsyncReadExt;

mod form;
mod models;
mod services;
mod utils;

/// Send a piece of code to the test generation service and show what it returns.
#[derive(Debug, Parser)]
#[command(name = "testgen", version)]
pub struct Args {
    /// File with the code to analyze, read from stdin when omitted
    pub file: Option<PathBuf>,

    /// Test generation endpoint, overrides the configured one
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Test framework to ask for (pytest, doctest, junit)
    #[arg(long)]
    pub framework: Option<String>,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }

        if let Some(framework) = &self.framework {
            config.framework = Some(framework.clone());
        }
    }
}

#[tokio::main]
pub async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    let mut config = Config::load()?;
    args.apply(&mut config);

    let level = config
        .log_level
        .parse::<LevelFilter>()
        .map_err(|_| anyhow!("Invalid log level: {}", config.log_level))?;
    SimpleLogger::new().with_level(level).init()?;

    let code = match &args.file {
        Some(path) => {
            info!("Reading code from {}", path.display());
            tokio::fs::read_to_string(path).await?
        }
        None => {
            let mut code = String::new();
            tokio::io::stdin().read_to_string(&mut code).await?;
            code
        }
    };

    let service = TestGenerationService::new(&config)?;

    let mut form = RequestForm::new();
    form.update_code(code);
    info!("Submitting {} bytes of code", form.input_code().len());
    form.submit(&service).await;

    if form.error().is_empty() {
        info!(
            "Detected {}, {} lines of test cases",
            form.detected_language(),
            form.generated_test_cases().lines().count()
        );
    } else {
        warn!("Submission finished with an error: {}", form.error());
    }

    print!("{}", form.render());

    Ok(())
}
