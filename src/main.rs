use anyhow::{Context, Result};
use news_gateway::application::{
    ports::{moderation::ContentModerator, news::NewsFeed, time::Clock},
    queries::news::{AggregatorSettings, NewsSources},
    services::{ApplicationServices, NewsSettings},
};
use news_gateway::config::AppConfig;
use news_gateway::domain::comment::CommentRepository;
use news_gateway::infrastructure::{
    database,
    http::{HttpContentModerator, HttpNewsFeed, build_http_client},
    repositories::{HttpCommentRepository, SqliteCommentRepository},
    time::SystemClock,
};
use news_gateway::presentation::http::{routes::build_router, state::HttpState};
use news_gateway::telemetry::init_tracing;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let client = build_http_client(config.request_timeout())?;
    let news_feed: Arc<dyn NewsFeed> = Arc::new(HttpNewsFeed::new(client.clone()));
    let moderator: Arc<dyn ContentModerator> = Arc::new(HttpContentModerator::new(
        client.clone(),
        config.censorship_url().clone(),
    ));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let comment_repo: Arc<dyn CommentRepository> = if let Some(base) = config.comment_service_url()
    {
        tracing::info!(comment_service = %base, "using remote comment service");
        Arc::new(HttpCommentRepository::new(client, base)?)
    } else {
        let pool = database::init_pool(config.database_url())
            .await
            .with_context(|| format!("opening {}", config.database_url()))?;
        database::run_migrations(&pool).await?;
        Arc::new(SqliteCommentRepository::new(Arc::new(pool)))
    };

    let sources = NewsSources::new(
        config.news_sources().to_vec(),
        config.news_details_source().cloned(),
        config.news_filter_source().cloned(),
    )?;
    let news = NewsSettings {
        sources,
        aggregator: AggregatorSettings {
            max_concurrency: config.max_concurrency(),
            deadline: config.aggregate_timeout(),
        },
        page_size: config.page_size(),
    };

    let services = Arc::new(ApplicationServices::new(
        news_feed,
        news,
        comment_repo,
        moderator,
        clock,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        sources = config.news_sources().len(),
        "listening on {address}"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
