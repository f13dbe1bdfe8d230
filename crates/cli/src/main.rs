// ABOUTME: Interactive front end for pagescope: scan URLs and print the AI analysis.
// ABOUTME: One-shot positional URLs or an interactive prompt loop; --json skips the model call.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use pagescope_agent::{Agent, ChatClient, LogSink, Span};
use pagescope_extract::Client;

#[derive(Parser, Debug)]
#[command(name = "pagescope")]
#[command(about = "Extract structured signals from a webpage and analyze them with an LLM")]
struct Args {
    /// URLs to scan (one-shot mode)
    #[arg()]
    urls: Vec<String>,

    /// Read URLs interactively from stdin until EOF or a blank line
    #[arg(short = 'i', long = "interactive")]
    interactive: bool,

    /// Print the structured record as JSON instead of running analysis
    #[arg(long = "json")]
    json: bool,

    /// Chat-completion model for analysis
    #[arg(long = "model", default_value = pagescope_agent::DEFAULT_MODEL)]
    model: String,

    /// Fetch timeout in seconds
    #[arg(long = "timeout", default_value_t = 10)]
    timeout_secs: u64,

    /// Allow fetching from private/local networks
    #[arg(long = "allow-private-networks")]
    allow_private_networks: bool,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,
}

/// Scan one URL and print either the record JSON or the agent's analysis.
async fn process_url(
    url: &str,
    client: &Client,
    chat: Option<&ChatClient>,
    sink: &LogSink,
) -> anyhow::Result<()> {
    log::debug!("scanning {}", url);
    let record = {
        let _span = Span::enter("scan", sink);
        client.scan(url).await?
    };

    match chat {
        None => println!("{}", record.to_json_pretty()?),
        Some(chat) => {
            let agent = Agent::webpage_analyzer();
            let analysis = {
                let _span = Span::enter("analyze", sink);
                agent.run(chat, &record).await
            };
            println!("{}", analysis);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if args.urls.is_empty() && !args.interactive {
        eprintln!("error: provide at least one URL, or use --interactive");
        return ExitCode::from(1);
    }

    // The credential is resolved at startup, not at the first analysis call.
    let chat = if args.json {
        None
    } else {
        match ChatClient::from_env() {
            Ok(chat) => Some(chat.with_model(args.model.clone())),
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::from(1);
            }
        }
    };

    let client = Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .allow_private_networks(args.allow_private_networks)
        .build();
    let sink = LogSink;

    let start = Instant::now();
    let mut had_error = false;

    for url in &args.urls {
        if let Err(e) = process_url(url, &client, chat.as_ref(), &sink).await {
            eprintln!("error scanning {}: {}", url, e);
            had_error = true;
        }
    }

    if args.interactive {
        let stdin = io::stdin();
        loop {
            eprint!("url> ");
            let _ = io::stderr().flush();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    eprintln!("error reading input: {}", e);
                    had_error = true;
                    break;
                }
            }

            let url = line.trim();
            if url.is_empty() {
                break;
            }
            if let Err(e) = process_url(url, &client, chat.as_ref(), &sink).await {
                eprintln!("error scanning {}: {}", url, e);
                had_error = true;
            }
        }
    }

    if args.timing {
        eprintln!("elapsed: {}ms", start.elapsed().as_millis());
    }

    if had_error {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
