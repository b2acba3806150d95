//! Parallel fan-out to council members
//!
//! One concurrent gateway call per model, all sharing the same message
//! payload but each using its own configured output cap. The fan-in waits
//! for every call to settle; a failure becomes `None` for that model and
//! never aborts the others. No retries, no cancellation propagation.

use crate::ports::chat_gateway::{ChatGateway, ChatRequest};
use crate::ports::progress::ProgressNotifier;
use council_domain::{Message, Model, Stage};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::warn;

/// Issue one call per model and collect per-model outcomes.
///
/// The returned map has exactly one key per requested model; failed calls
/// map to `None`.
pub async fn dispatch<G: ChatGateway + 'static>(
    gateway: &Arc<G>,
    models: &[Model],
    messages: &[Message],
    caps: &HashMap<Model, u32>,
    stage: &Stage,
    progress: &dyn ProgressNotifier,
) -> HashMap<Model, Option<String>> {
    let mut join_set = JoinSet::new();

    for model in models {
        let gateway = Arc::clone(gateway);
        let model = model.clone();
        let mut request = ChatRequest::new(model.clone(), messages.to_vec());
        if let Some(cap) = caps.get(&model) {
            request = request.with_max_tokens(*cap);
        }

        join_set.spawn(async move {
            let result = gateway.complete(request).await;
            (model, result)
        });
    }

    let mut outcomes = HashMap::new();

    while let Some(result) = join_set.join_next().await {
        match result {
            Ok((model, Ok(reply))) => {
                progress.on_task_complete(stage, &model, true);
                outcomes.insert(model, Some(reply.content));
            }
            Ok((model, Err(e))) => {
                warn!("Model {} failed: {}", model, e);
                progress.on_task_complete(stage, &model, false);
                outcomes.insert(model, None);
            }
            Err(e) => {
                warn!("Task join error: {}", e);
            }
        }
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::chat_gateway::{ChatReply, GatewayError};
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;

    /// Gateway that fails for slugs containing "down" and echoes otherwise
    struct FlakyGateway;

    #[async_trait]
    impl ChatGateway for FlakyGateway {
        async fn complete(&self, request: ChatRequest) -> Result<ChatReply, GatewayError> {
            if request.model.as_str().contains("down") {
                return Err(GatewayError::ConnectionError("unreachable".to_string()));
            }
            Ok(ChatReply {
                content: format!("reply from {}", request.model),
                reasoning: None,
            })
        }
    }

    fn models(slugs: &[&str]) -> Vec<Model> {
        slugs.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[tokio::test]
    async fn test_one_failure_does_not_block_others() {
        let gateway = Arc::new(FlakyGateway);
        let models = models(&["test/a", "test/b", "test/down", "test/c"]);
        let messages = vec![Message::user("hello")];

        let outcomes = dispatch(
            &gateway,
            &models,
            &messages,
            &HashMap::new(),
            &Stage::Collect,
            &NoProgress,
        )
        .await;

        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes.values().filter(|v| v.is_some()).count(), 3);
        assert!(outcomes[&models[2]].is_none());
        assert_eq!(
            outcomes[&models[0]].as_deref(),
            Some("reply from test/a")
        );
    }

    #[tokio::test]
    async fn test_caps_applied_per_model() {
        /// Gateway that echoes the request cap back as content
        struct CapEcho;

        #[async_trait]
        impl ChatGateway for CapEcho {
            async fn complete(&self, request: ChatRequest) -> Result<ChatReply, GatewayError> {
                Ok(ChatReply {
                    content: format!("{:?}", request.max_tokens),
                    reasoning: None,
                })
            }
        }

        let gateway = Arc::new(CapEcho);
        let models = models(&["test/a", "test/b"]);
        let caps: HashMap<Model, u32> = [(models[0].clone(), 600)].into_iter().collect();

        let outcomes = dispatch(
            &gateway,
            &models,
            &[Message::user("q")],
            &caps,
            &Stage::Collect,
            &NoProgress,
        )
        .await;

        assert_eq!(outcomes[&models[0]].as_deref(), Some("Some(600)"));
        // No configured cap means the request carries none
        assert_eq!(outcomes[&models[1]].as_deref(), Some("None"));
    }
}
