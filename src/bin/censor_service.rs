// src/bin/censor_service.rs
//! Stand-alone keyword censorship endpoint: `POST /censor {"text": ...}`
//! answers 200 when the text is allowed and 400 when it is not.
use anyhow::Result;
use news_gateway::application::ports::moderation::ContentModerator;
use news_gateway::infrastructure::keyword_moderator::{DEFAULT_FORBIDDEN_WORDS, KeywordModerator};
use news_gateway::presentation::http::routes::build_censor_router;
use news_gateway::telemetry::init_tracing;
use std::{env, net::SocketAddr, sync::Arc};

const DEFAULT_CENSOR_ADDR: &str = "127.0.0.1:8081";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let moderator = env::var("CENSOR_FORBIDDEN_WORDS").map_or_else(
        |_| KeywordModerator::new(DEFAULT_FORBIDDEN_WORDS),
        |words| KeywordModerator::new(words.split(',')),
    );
    let moderator: Arc<dyn ContentModerator> = Arc::new(moderator);

    let addr = env::var("CENSOR_LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_CENSOR_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("censor service listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        build_censor_router(moderator).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
