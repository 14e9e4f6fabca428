use mealie_client::{ClientConfig, MealieClient};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    let base_url = config.base_url.clone();
    let mut client = MealieClient::new(config);

    let about = client.app().about().await.map_err(|e| {
        tracing::error!("Could not reach Mealie at {}: {}", base_url, e);
        e
    })?;
    tracing::info!("Connected to Mealie {} at {}", about.version, base_url);

    if !client.is_authenticated() {
        let (Ok(username), Ok(password)) = (env::var("MEALIE_USERNAME"), env::var("MEALIE_PASSWORD"))
        else {
            tracing::warn!("No MEALIE_TOKEN or MEALIE_USERNAME/MEALIE_PASSWORD set; only public endpoints are available");
            return Ok(());
        };

        tracing::info!("Logging in as {}...", username);
        if let Err(e) = client.login(&username, &password).await {
            tracing::error!("Login failed: {}", e);
            tracing::error!("Please verify:");
            tracing::error!("  - MEALIE_BASE_URL is correct: {}", base_url);
            tracing::error!("  - MEALIE_USERNAME is correct: {}", username);
            tracing::error!("  - MEALIE_PASSWORD is correct");
            std::process::exit(1);
        }
    }

    // Make sure the token is actually accepted
    match client.users().get_self().await {
        Ok(user) => {
            tracing::info!("Authenticated as {} ({})", user.username.as_deref().unwrap_or("?"), user.email);
        }
        Err(e) => {
            if e.as_api().is_some_and(|api| api.is_unauthorized()) {
                tracing::error!("Token rejected by Mealie: {}", e);
                std::process::exit(1);
            }
            return Err(e.into());
        }
    }

    let household = client.households().get_self().await?;
    let stats = client.households().statistics().await?;
    tracing::info!(
        "Household {}: {} recipes, {} users, {} categories, {} tags, {} tools",
        household.name,
        stats.total_recipes,
        stats.total_users,
        stats.total_categories,
        stats.total_tags,
        stats.total_tools
    );

    Ok(())
}
