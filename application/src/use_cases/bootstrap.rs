//! Startup liveness diagnostics
//!
//! Probes every council member and the chairman in parallel with a
//! 1-token request so the manifest can report who is reachable. Purely
//! diagnostic; no stage depends on this.

use crate::ports::chat_gateway::ChatGateway;
use council_domain::{Model, Roster};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Reachability of one roster entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberStatus {
    pub slug: Model,
    pub alias: String,
    pub online: bool,
}

/// Use case for the startup health check
pub struct BootstrapCouncilUseCase<G: ChatGateway + 'static> {
    gateway: Arc<G>,
    roster: Arc<Roster>,
}

impl<G: ChatGateway + 'static> BootstrapCouncilUseCase<G> {
    pub fn new(gateway: Arc<G>, roster: Arc<Roster>) -> Self {
        Self { gateway, roster }
    }

    /// Probe members and chairman concurrently; statuses come back in
    /// roster order with the chairman last.
    pub async fn execute(&self) -> Vec<MemberStatus> {
        let mut targets: Vec<(Model, String)> = self
            .roster
            .members()
            .iter()
            .map(|m| (m.slug.clone(), m.alias.clone()))
            .collect();
        let chairman = self.roster.chairman();
        targets.push((chairman.slug.clone(), chairman.alias.clone()));

        let mut join_set = JoinSet::new();
        for (slug, _) in &targets {
            let gateway = Arc::clone(&self.gateway);
            let slug = slug.clone();
            join_set.spawn(async move {
                let online = gateway.probe(&slug).await;
                (slug, online)
            });
        }

        let mut outcomes: HashMap<Model, bool> = HashMap::new();
        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((slug, online)) => {
                    if online {
                        info!("Model {} is reachable", slug);
                    } else {
                        warn!("Model {} is unreachable", slug);
                    }
                    outcomes.insert(slug, online);
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                }
            }
        }

        targets
            .into_iter()
            .map(|(slug, alias)| {
                let online = outcomes.get(&slug).copied().unwrap_or(false);
                MemberStatus {
                    slug,
                    alias,
                    online,
                }
            })
            .collect()
    }
}
