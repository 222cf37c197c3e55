//! Demo client for the build proxy
//!
//! Submits a placeholder DOCX with PDF conversion instructions to
//! `/api/build`, checks the result and writes it to disk.

use build_core::{BuildApiClient, DemoOutcome, DemoRunner};
use clap::{Arg, Command};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let matches = Command::new("build-demo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run the DOCX to PDF demo against a build proxy")
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .short('e')
                .value_name("URL")
                .env("BUILD_DEMO_ENDPOINT")
                .help("Build endpoint to call")
                .default_value("http://localhost:3000/api/build")
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Where to save the generated PDF")
                .default_value("demo-output.pdf")
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECS")
                .value_parser(clap::value_parser!(u64).range(1..))
                .help("Request timeout in seconds")
                .default_value("120")
        )
        .get_matches();

    // Defaults make these always present
    let endpoint = matches.get_one::<String>("endpoint").cloned().unwrap_or_default();
    let output = matches.get_one::<String>("output").cloned().unwrap_or_default();
    let timeout = matches.get_one::<u64>("timeout").copied().unwrap_or(120);

    let client = BuildApiClient::new(endpoint, Duration::from_secs(timeout))?;
    let mut runner = DemoRunner::new(client, output);

    match runner.run().await {
        DemoOutcome::Success { message, size, saved_to } => {
            println!("✅ Success: {}", message);
            println!("File size: {} bytes", size);
            println!("Saved to {}", saved_to.display());
            Ok(())
        }
        DemoOutcome::Failure { message } => Err(anyhow::anyhow!("{}", message)),
    }
}
