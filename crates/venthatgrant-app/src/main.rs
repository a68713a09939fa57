use eyre::Result;
use tracing_subscriber::EnvFilter;

use venthatgrant_app::Session;
use venthatgrant_app::config;
use venthatgrant_search::{Completion, SearchRequest};

const DEFAULT_QUERY: &str = "climate change";

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let dir = config::config_dir()?;
    let app_config = config::load_or_default(&dir)?;
    let info = config::config_info(&app_config);
    tracing::info!(
        search_mode = ?info.search_mode,
        endpoint = %info.endpoint,
        credential_type = %info.credential_type,
        key_hint = info.key_hint.as_deref().unwrap_or("none"),
        "configuration loaded"
    );

    let session = Session::from_config(&app_config)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let query = if args.is_empty() {
        DEFAULT_QUERY.to_string()
    } else {
        args.join(" ")
    };

    match session.search(SearchRequest::new(query.clone())).await? {
        Completion::Stored { count } => println!("{count} grants found for \"{query}\""),
        Completion::Stale => return Ok(()),
    }

    let displayed = session.displayed().await;
    for grant in &displayed {
        println!(
            "  [{:>3}] {} ({}, {}) deadline {}",
            grant.match_score, grant.title, grant.organization, grant.amount, grant.deadline
        );
    }

    let Some(top) = displayed.first() else {
        println!("nothing to save");
        return Ok(());
    };

    let saved = session.save_displayed_grant(top.id).await?;
    println!("saved {} as {}", saved.grant.title, saved.id);

    let proposal = session.draft_proposal(&saved.id).await?;
    println!("drafted \"{}\" ({})", proposal.title, proposal.id);

    let optimized = session.optimize_proposal(&proposal.id).await?;
    println!("proposal is now {}", optimized.status);

    for critique in session.generate_critique(&proposal.id).await? {
        let heading = critique.content.lines().next().unwrap_or_default();
        println!("  {}: {heading}", critique.critique_type);
    }

    Ok(())
}

/// Human-readable logs by default; `VENTHATGRANT_LOG_FORMAT=json` for structured output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("VENTHATGRANT_LOG_FORMAT").is_ok_and(|v| v == "json");

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
