mod interactive;
mod output;

use anyhow::Result;
use clap::Parser;
use frcstats_lib::validation::parse_query_pair;
use frcstats_lib::{Config, Session};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "frcstats")]
#[command(about = "Rank FRC teams by average match score using The Blue Alliance")]
struct Cli {
    /// Output format: plain, table, markdown, json or csv
    #[arg(long, default_value = "plain")]
    output: String,

    /// API base URL (overrides TBA_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Client identifier sent with every request (overrides TBA_APP_ID)
    #[arg(long)]
    app_id: Option<String>,

    /// TEAM:YEAR pairs to rank without prompting, e.g. 254:2019
    queries: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("frcstats=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let mut config = Config::from_env()?;
    if let Some(url) = &cli.base_url {
        config = config.with_base_url(url)?;
    }
    if let Some(app_id) = &cli.app_id {
        config = config.with_app_id(app_id)?;
    }
    let client = config.client();

    let mut session = Session::new();
    let mut stdout = std::io::stdout().lock();

    if cli.queries.is_empty() {
        let mut stdin = std::io::stdin().lock();
        interactive::run_interactive(&mut session, &client, &format, &mut stdin, &mut stdout)
            .await?;
    } else {
        let queries = cli
            .queries
            .iter()
            .map(|q| parse_query_pair(q))
            .collect::<Result<Vec<_>, _>>()?;
        interactive::run_batch(&mut session, &client, &format, &queries, &mut stdout).await?;
    }

    Ok(())
}
