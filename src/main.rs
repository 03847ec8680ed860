use tracing_subscriber::EnvFilter;

use nailbook::api::HttpBackend;
use nailbook::auth::Role;
use nailbook::catalog;
use nailbook::config::AppConfig;
use nailbook::pages;

// Console harness: connects to the configured backend and prints the roster
// and today's sales summary.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!("using backend at {}", config.api_base_url);

    let api = HttpBackend::new(config.api_base_url.clone());

    let techs = pages::load_nail_techs(&api).await;
    let services = pages::load_services(&api).await;
    tracing::info!(
        "loaded {} technician(s), {} service(s)",
        techs.len(),
        services.len()
    );

    for tech in &techs {
        let eligible = catalog::normalize_eligibility(Some(tech));
        println!("{}: offers {} service(s)", tech.name, eligible.len());
    }

    println!("\nDaily sales report");
    match pages::load_daily_report(&api, Role::Admin).await {
        Ok(rows) if rows.is_empty() => println!("No appointments for today."),
        Ok(rows) => {
            for row in rows {
                println!("{}: {}", row.nail_tech, row.formatted_total());
            }
        }
        Err(err) => tracing::error!("report unavailable: {err}"),
    }

    Ok(())
}
