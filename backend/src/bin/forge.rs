//! Terminal client for the generation endpoint.
//!
//! ```text
//! forge --endpoint http://localhost:8080 A bakery that only sells sourdough
//! echo "A bakery that only sells sourdough" | forge
//! ```
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use colored::Colorize;
use reqwest::Url;
use tokio::runtime::Builder;

use nameforge::client::render::render_view;
use nameforge::client::{ClientView, HttpSuggestionGateway, SubmitRejected};

/// `forge` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "forge",
    about = "Generate business name suggestions from a short description",
    version
)]
struct CliArgs {
    /// Base URL of the NameForge server.
    #[arg(
        long,
        env = "NAMEFORGE_ENDPOINT",
        value_name = "url",
        default_value = "http://localhost:8080"
    )]
    endpoint: Url,
    /// Business description. Read from standard input when omitted.
    #[arg(value_name = "description")]
    description: Vec<String>,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(run(args))
}

async fn run(args: CliArgs) -> Result<ExitCode> {
    let description = if args.description.is_empty() {
        read_description()?
    } else {
        args.description.join(" ")
    };

    let gateway = HttpSuggestionGateway::new(&args.endpoint)
        .wrap_err_with(|| format!("configure client for {}", args.endpoint))?;
    let mut view = ClientView::new();
    view.set_description(description);

    if let Err(rejected) = view.submit(&gateway).await {
        let hint = match rejected {
            SubmitRejected::Blank => "describe your business or project first",
            SubmitRejected::Busy => "a request is already in flight",
        };
        eprintln!("{}: {hint}", "error".red().bold());
        return Ok(ExitCode::from(2));
    }

    let rendered = render_view(&view);
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(if view.error().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn read_description() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        print!("{} ", "Describe your business or project:".cyan());
        io::stdout().flush().wrap_err("flush prompt")?;
    }
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .wrap_err("read description from standard input")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}
