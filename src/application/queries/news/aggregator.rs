// src/application/queries/news/aggregator.rs
//! Fan-out/fan-in over the configured news sources.
//!
//! One worker task is spawned per source; a semaphore caps how many of them
//! talk to their upstream at the same time. Every worker writes exactly one
//! outcome into the slot reserved for its source, and the join does not
//! return before all workers are finished. The whole fan-out runs under a
//! deadline; when it expires (or the caller drops the future) the `JoinSet`
//! is dropped, which aborts every worker still in flight.
//!
//! Merge policy: all-or-nothing. If any source failed, the failure of the
//! earliest source in configured order is returned and no articles are. On
//! success articles are concatenated in configured source order and the
//! total page count is the sum over sources.
use crate::application::{
    ApplicationResult, RequestContext, error::ApplicationError, ports::news::NewsFeed,
};
use crate::domain::news::{NewsPage, NewsQuery, SourceRef};
use std::{sync::Arc, time::Duration};
use tokio::{sync::Semaphore, task::JoinSet};
use tracing::{debug, error, warn};

pub const DEFAULT_MAX_CONCURRENCY: usize = 8;
pub const DEFAULT_AGGREGATE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy)]
pub struct AggregatorSettings {
    pub max_concurrency: usize,
    pub deadline: Duration,
}

impl Default for AggregatorSettings {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            deadline: DEFAULT_AGGREGATE_TIMEOUT,
        }
    }
}

type FetchOutcome = ApplicationResult<NewsPage>;

pub struct NewsAggregator {
    feed: Arc<dyn NewsFeed>,
    settings: AggregatorSettings,
}

impl NewsAggregator {
    pub fn new(feed: Arc<dyn NewsFeed>, settings: AggregatorSettings) -> Self {
        Self { feed, settings }
    }

    pub async fn fetch_all(
        &self,
        ctx: &RequestContext,
        sources: &[SourceRef],
        query: &NewsQuery,
    ) -> ApplicationResult<NewsPage> {
        if sources.is_empty() {
            return Ok(NewsPage::empty(query.page()));
        }

        let outcomes = tokio::time::timeout(
            self.settings.deadline,
            self.join_workers(ctx, sources, query),
        )
        .await
        .map_err(|_| {
            warn!(
                request_id = %ctx.request_id(),
                sources = sources.len(),
                deadline_ms = self.settings.deadline.as_millis(),
                "news fan-out deadline expired, aborting outstanding sources"
            );
            ApplicationError::upstream_timeout(format!(
                "news sources did not answer within {}ms",
                self.settings.deadline.as_millis()
            ))
        })?;

        merge_outcomes(ctx, sources, query, outcomes)
    }

    async fn join_workers(
        &self,
        ctx: &RequestContext,
        sources: &[SourceRef],
        query: &NewsQuery,
    ) -> Vec<Option<FetchOutcome>> {
        let width = self.settings.max_concurrency.max(1).min(sources.len());
        let permits = Arc::new(Semaphore::new(width));
        let mut workers = JoinSet::new();

        for (slot, source) in sources.iter().cloned().enumerate() {
            let feed = Arc::clone(&self.feed);
            let permits = Arc::clone(&permits);
            let ctx = ctx.clone();
            let query = query.clone();

            workers.spawn(async move {
                let Ok(_permit) = permits.acquire_owned().await else {
                    return (
                        slot,
                        Err(ApplicationError::infrastructure(
                            "aggregator worker pool closed",
                        )),
                    );
                };
                debug!(request_id = %ctx.request_id(), %source, "fetching news source");
                (slot, feed.fetch(&ctx, &source, &query).await)
            });
        }

        let mut slots: Vec<Option<FetchOutcome>> = sources.iter().map(|_| None).collect();
        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok((slot, outcome)) => slots[slot] = Some(outcome),
                Err(err) => {
                    error!(request_id = %ctx.request_id(), error = %err, "news worker terminated abnormally");
                }
            }
        }
        slots
    }
}

fn merge_outcomes(
    ctx: &RequestContext,
    sources: &[SourceRef],
    query: &NewsQuery,
    outcomes: Vec<Option<FetchOutcome>>,
) -> ApplicationResult<NewsPage> {
    let mut merged = NewsPage::empty(query.page());
    let mut first_failure: Option<ApplicationError> = None;

    for (source, outcome) in sources.iter().zip(outcomes) {
        let outcome = outcome.unwrap_or_else(|| {
            Err(ApplicationError::infrastructure(format!(
                "worker for {source} produced no result"
            )))
        });

        match outcome {
            Ok(page) if first_failure.is_none() => merged.absorb(page),
            Ok(_) => {}
            Err(err) => {
                warn!(request_id = %ctx.request_id(), %source, error = %err, "news source failed");
                if first_failure.is_none() {
                    first_failure = Some(err);
                }
            }
        }
    }

    match first_failure {
        Some(err) => Err(err),
        None => Ok(merged),
    }
}
