//! howdoi CLI
//!
//! Answers a programming question with code from the top-voted answer.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use howdoi::answer::Answers;
use howdoi::cli::Cli;
use howdoi::{output, pipeline, HowdoiError, HttpClient};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help is not an error
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    if cli.version {
        println!("howdoi {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<HowdoiError>() {
            Some(HowdoiError::NoSearchResults) => {
                println!("Sorry, couldn't find any help with that topic");
                ExitCode::SUCCESS
            }
            Some(HowdoiError::InvalidInput) => {
                eprintln!("Error: {}\n", e);
                let _ = Cli::command().print_help();
                ExitCode::FAILURE
            }
            _ => {
                log::debug!("{:?}", e);
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let request = cli.request();
    let config = cli.config();
    let client = HttpClient::new(&config).context("Failed to build HTTP client")?;

    let answers = pipeline::run(&client, &config, &request).await?;

    let failed = answers.failed();
    if let Answers::Many(blocks) = &answers {
        if failed > 0 {
            eprintln!("Fetched {}/{} answers", blocks.len() - failed, blocks.len());
        }
    }

    let rendered = if cli.json {
        output::render_json(&answers)?
    } else {
        output::render(&answers)
    };
    println!("{}", rendered);

    Ok(())
}
