use clap::Parser;
use cryptosentinel::application::prompt::PromptVerbosity;
use cryptosentinel::cli::commands::{parse_as_of, Cli, Commands};
use cryptosentinel::domain::entities::verdict::Verdict;
use cryptosentinel::infrastructure::config::Config;
use cryptosentinel::CryptoSentinel;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Lambda-style response envelope printed on stdout: 200 for every
/// decided run (including "no articles"), 500 for an aborted one.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InvocationResponse {
    status_code: u16,
    body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<Verdict>,
}

impl InvocationResponse {
    fn failure(message: String) -> Self {
        Self {
            status_code: 500,
            body: message,
            analysis: None,
        }
    }

    fn emit_and_exit(self) -> ! {
        println!("{}", serde_json::to_string_pretty(&self).unwrap_or_default());
        std::process::exit(if self.status_code == 200 { 0 } else { 1 });
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            as_of,
            no_window,
            dry_run,
            brief,
        } => {
            let config = match Config::from_env() {
                Ok(c) => c,
                Err(e) => InvocationResponse::failure(e.to_string()).emit_and_exit(),
            };

            let as_of = match as_of.as_deref().map(parse_as_of).transpose() {
                Ok(explicit) => {
                    if no_window {
                        None
                    } else {
                        Some(explicit.unwrap_or_else(chrono::Utc::now))
                    }
                }
                Err(e) => InvocationResponse::failure(e).emit_and_exit(),
            };

            let verbosity = if brief {
                PromptVerbosity::Brief
            } else {
                PromptVerbosity::Full
            };

            let sentinel = CryptoSentinel::new(&config, dry_run, verbosity);
            match sentinel.run(as_of).await {
                Ok(decision) => InvocationResponse {
                    status_code: 200,
                    body: decision.status.summary().to_string(),
                    analysis: decision.verdict,
                }
                .emit_and_exit(),
                Err(e) => InvocationResponse::failure(e.to_string()).emit_and_exit(),
            }
        }
        Commands::Fetch { as_of, limit, out } => {
            let config = match Config::from_env() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            };
            let as_of = match as_of.as_deref().map(parse_as_of).transpose() {
                Ok(v) => v,
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            };

            let sentinel = CryptoSentinel::new(&config, true, PromptVerbosity::default());
            match sentinel
                .fetch_articles(&config.asset_name, as_of, limit)
                .await
            {
                Ok(batch) => {
                    let json = serde_json::to_string_pretty(&batch).unwrap_or_default();
                    match out {
                        Some(path) => {
                            if let Err(e) = std::fs::write(&path, json) {
                                eprintln!("Error writing {path}: {e}");
                                std::process::exit(1);
                            }
                            eprintln!("Wrote {} articles to {path}", batch.len());
                        }
                        None => println!("{json}"),
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
