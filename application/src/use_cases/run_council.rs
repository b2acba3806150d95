//! Run Council use case
//!
//! Orchestrates the full three-stage council flow: response collection,
//! anonymized peer ranking, rank aggregation, and chairman synthesis.

use crate::ports::chat_gateway::{ChatGateway, ChatRequest};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::dispatch::dispatch;
use council_domain::{
    aggregate_rankings, assign_labels, build_messages, CouncilMetadata, CouncilVerdict, LabelMap,
    Message, PromptTemplate, Question, Roster, Stage, StageOneResponse, StageTwoRanking,
    SynthesisResult,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur before a council run can start
///
/// Provider failures during a run are represented inside the verdict,
/// never raised across this boundary.
#[derive(Error, Debug)]
pub enum RunCouncilError {
    #[error("No council members configured")]
    EmptyRoster,
}

/// Input for the RunCouncil use case
#[derive(Debug, Clone)]
pub struct RunCouncilInput {
    /// The query put before the council
    pub question: Question,
    /// Optional system prompt prepended to Stage-1 and Stage-3 calls
    pub system_prompt: Option<String>,
}

impl RunCouncilInput {
    pub fn new(question: impl Into<Question>) -> Self {
        Self {
            question: question.into(),
            system_prompt: None,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }
}

/// Use case for running a full council deliberation
pub struct RunCouncilUseCase<G: ChatGateway + 'static> {
    gateway: Arc<G>,
    roster: Arc<Roster>,
}

impl<G: ChatGateway + 'static> RunCouncilUseCase<G> {
    pub fn new(gateway: Arc<G>, roster: Arc<Roster>) -> Self {
        Self { gateway, roster }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunCouncilInput) -> Result<CouncilVerdict, RunCouncilError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunCouncilInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<CouncilVerdict, RunCouncilError> {
        if self.roster.members().is_empty() {
            return Err(RunCouncilError::EmptyRoster);
        }

        info!(
            "Starting council with {} members",
            self.roster.members().len()
        );

        // Stage 1: every member answers the query
        let stage1 = self.stage_collect(&input, progress).await;

        if stage1.is_empty() {
            warn!("All council members failed in Stage 1; short-circuiting");
            return Ok(CouncilVerdict::total_failure(self.roster.chairman()));
        }

        // Stage 2: every member ranks the anonymized answers
        let (stage2, label_map) = self.stage_rank(&input, &stage1, progress).await;

        // Aggregate: fold all parsed rankings into a standing
        progress.on_stage_start(&Stage::Aggregate, stage2.len());
        let aggregate = aggregate_rankings(&stage2, &label_map);
        progress.on_stage_complete(&Stage::Aggregate);

        // Stage 3: the chairman synthesizes the verdict
        let synthesis = self.stage_synthesize(&input, &stage1, &stage2, progress).await;

        Ok(CouncilVerdict::new(
            stage1,
            stage2,
            synthesis,
            CouncilMetadata::new(label_map, aggregate),
        ))
    }

    /// Stage 1: dispatch the query to all members, keep successes in roster order
    async fn stage_collect(
        &self,
        input: &RunCouncilInput,
        progress: &dyn ProgressNotifier,
    ) -> Vec<StageOneResponse> {
        info!("Stage 1: Council Responses");
        progress.on_stage_start(&Stage::Collect, self.roster.members().len());

        let messages = build_messages(input.system_prompt(), input.question.content());
        let outcomes = dispatch(
            &self.gateway,
            &self.roster.slugs(),
            &messages,
            &self.roster.stage1_caps(),
            &Stage::Collect,
            progress,
        )
        .await;

        // Failed members are omitted entirely; list order is roster order
        let mut results = Vec::new();
        for member in self.roster.members() {
            if let Some(Some(content)) = outcomes.get(&member.slug) {
                results.push(StageOneResponse::new(
                    member.alias.clone(),
                    member.slug.clone(),
                    content.clone(),
                ));
            }
        }

        progress.on_stage_complete(&Stage::Collect);
        results
    }

    /// Stage 2: one shared ranking prompt; every member judges
    async fn stage_rank(
        &self,
        input: &RunCouncilInput,
        stage1: &[StageOneResponse],
        progress: &dyn ProgressNotifier,
    ) -> (Vec<StageTwoRanking>, LabelMap) {
        info!("Stage 2: Peer Rankings");
        progress.on_stage_start(&Stage::Rank, self.roster.members().len());

        // Labels follow Stage-1 list order; the map survives for de-anonymization
        let aliases: Vec<String> = stage1.iter().map(|r| r.member.clone()).collect();
        let label_map = LabelMap::assign(&aliases);

        let labeled: Vec<(String, String)> = assign_labels(stage1.len())
            .iter()
            .zip(stage1)
            .map(|(label, result)| (label.to_string(), result.content.clone()))
            .collect();

        let prompt = PromptTemplate::ranking_prompt(input.question.content(), &labeled);
        let messages = vec![Message::user(prompt)];

        // All members judge, including Stage-1 respondents; labels carry no
        // model identity at evaluation time
        let outcomes = dispatch(
            &self.gateway,
            &self.roster.slugs(),
            &messages,
            &self.roster.stage2_caps(),
            &Stage::Rank,
            progress,
        )
        .await;

        let mut results = Vec::new();
        for member in self.roster.members() {
            if let Some(Some(ranking)) = outcomes.get(&member.slug) {
                results.push(StageTwoRanking::new(
                    member.alias.clone(),
                    member.slug.clone(),
                    ranking.clone(),
                ));
            }
        }

        progress.on_stage_complete(&Stage::Rank);
        (results, label_map)
    }

    /// Stage 3: a single chairman call over the de-anonymized transcript
    async fn stage_synthesize(
        &self,
        input: &RunCouncilInput,
        stage1: &[StageOneResponse],
        stage2: &[StageTwoRanking],
        progress: &dyn ProgressNotifier,
    ) -> SynthesisResult {
        info!("Stage 3: Chairman Synthesis");
        progress.on_stage_start(&Stage::Synthesize, 1);

        let chairman = self.roster.chairman();

        let responses: Vec<(String, String)> = stage1
            .iter()
            .map(|r| (r.member.clone(), r.content.clone()))
            .collect();
        let rankings: Vec<(String, String)> = stage2
            .iter()
            .map(|r| (r.member.clone(), r.ranking.clone()))
            .collect();

        let prompt = PromptTemplate::chairman_prompt(
            &chairman.alias,
            input.question.content(),
            &responses,
            &rankings,
        );
        let messages = build_messages(input.system_prompt(), &prompt);

        let request =
            ChatRequest::new(chairman.slug.clone(), messages).with_max_tokens(chairman.max_tokens);

        let synthesis = match self.gateway.complete(request).await {
            Ok(reply) => {
                progress.on_task_complete(&Stage::Synthesize, &chairman.slug, true);
                SynthesisResult::new(chairman.alias.clone(), chairman.slug.clone(), reply.content)
            }
            Err(e) => {
                warn!("Chairman {} failed: {}", chairman.slug, e);
                progress.on_task_complete(&Stage::Synthesize, &chairman.slug, false);
                SynthesisResult::failed(chairman)
            }
        };

        progress.on_stage_complete(&Stage::Synthesize);
        synthesis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::chat_gateway::{ChatReply, ChatRequest, GatewayError};
    use async_trait::async_trait;
    use council_domain::{
        Chairman, CouncilMember, Model, COUNCIL_FAILURE_MESSAGE, SYNTHESIS_FAILURE_MESSAGE,
    };
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Gateway with a scripted queue of outcomes per model, recording
    /// every request it receives.
    struct MockGateway {
        replies: Mutex<HashMap<Model, VecDeque<Result<String, String>>>>,
        calls: Mutex<Vec<ChatRequest>>,
    }

    impl MockGateway {
        fn new() -> Self {
            Self {
                replies: Mutex::new(HashMap::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn script(self, slug: &str, outcome: Result<&str, &str>) -> Self {
            let model: Model = slug.parse().unwrap();
            self.replies
                .lock()
                .unwrap()
                .entry(model)
                .or_default()
                .push_back(outcome.map(String::from).map_err(String::from));
            self
        }

        fn calls(&self) -> Vec<ChatRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatGateway for MockGateway {
        async fn complete(&self, request: ChatRequest) -> Result<ChatReply, GatewayError> {
            self.calls.lock().unwrap().push(request.clone());
            let next = self
                .replies
                .lock()
                .unwrap()
                .get_mut(&request.model)
                .and_then(|queue| queue.pop_front());
            match next {
                Some(Ok(content)) => Ok(ChatReply {
                    content,
                    reasoning: None,
                }),
                Some(Err(e)) => Err(GatewayError::Other(e)),
                None => Err(GatewayError::Other("no scripted reply".to_string())),
            }
        }
    }

    fn roster() -> Arc<Roster> {
        Arc::new(
            Roster::new(
                vec![
                    CouncilMember::new("test/alpha".parse().unwrap(), "Alpha"),
                    CouncilMember::new("test/bravo".parse().unwrap(), "Bravo"),
                ],
                Chairman::new("test/chair".parse().unwrap(), "Chair"),
            )
            .unwrap(),
        )
    }

    const RANKING_AB: &str = "FINAL RANKING:\n1. Response A\n2. Response B";

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_full_pipeline_happy_path() {
        let gateway = Arc::new(
            MockGateway::new()
                .script("test/alpha", Ok("alpha answer"))
                .script("test/bravo", Ok("bravo answer"))
                .script("test/alpha", Ok(RANKING_AB))
                .script("test/bravo", Ok(RANKING_AB))
                .script("test/chair", Ok("the council verdict")),
        );

        let use_case = RunCouncilUseCase::new(Arc::clone(&gateway), roster());
        let verdict = use_case
            .execute(RunCouncilInput::new("What is Rust?"))
            .await
            .unwrap();

        assert_eq!(verdict.stage1.len(), 2);
        assert_eq!(verdict.stage1[0].member, "Alpha");
        assert_eq!(verdict.stage2.len(), 2);
        assert_eq!(verdict.synthesis.content, "the council verdict");

        // Labels follow Stage-1 list order
        let labels = &verdict.metadata.label_to_member;
        assert_eq!(labels.get("Response A"), Some("Alpha"));
        assert_eq!(labels.get("Response B"), Some("Bravo"));

        // Both judges placed Alpha first, Bravo second
        let aggregate = &verdict.metadata.aggregate_rankings;
        assert_eq!(aggregate[0].member, "Alpha");
        assert_eq!(aggregate[0].average_rank, 1.0);
        assert_eq!(aggregate[0].rankings_count, 2);
        assert_eq!(aggregate[1].member, "Bravo");
        assert_eq!(aggregate[1].average_rank, 2.0);

        // 2 stage-1 + 2 stage-2 + 1 chairman
        assert_eq!(gateway.calls().len(), 5);
    }

    #[tokio::test]
    async fn test_stage2_prompt_is_shared_and_anonymized() {
        let gateway = Arc::new(
            MockGateway::new()
                .script("test/alpha", Ok("alpha answer"))
                .script("test/bravo", Ok("bravo answer"))
                .script("test/alpha", Ok(RANKING_AB))
                .script("test/bravo", Ok(RANKING_AB))
                .script("test/chair", Ok("verdict")),
        );

        let use_case = RunCouncilUseCase::new(Arc::clone(&gateway), roster());
        use_case
            .execute(RunCouncilInput::new("What is Rust?"))
            .await
            .unwrap();

        let calls = gateway.calls();
        let stage2_calls: Vec<&ChatRequest> = calls
            .iter()
            .filter(|c| c.messages[0].content.contains("FINAL RANKING"))
            .collect();

        assert_eq!(stage2_calls.len(), 2);
        // Every judge sees the identical prompt
        assert_eq!(stage2_calls[0].messages, stage2_calls[1].messages);
        // Anonymized: labels present, aliases absent
        let prompt = &stage2_calls[0].messages[0].content;
        assert!(prompt.contains("Response A:\nalpha answer"));
        assert!(!prompt.contains("Alpha"));
    }

    #[tokio::test]
    async fn test_token_caps_per_stage() {
        let gateway = Arc::new(
            MockGateway::new()
                .script("test/alpha", Ok("a"))
                .script("test/bravo", Ok("b"))
                .script("test/alpha", Ok(RANKING_AB))
                .script("test/bravo", Ok(RANKING_AB))
                .script("test/chair", Ok("v")),
        );

        let use_case = RunCouncilUseCase::new(Arc::clone(&gateway), roster());
        use_case
            .execute(RunCouncilInput::new("q"))
            .await
            .unwrap();

        let calls = gateway.calls();
        let alpha: Model = "test/alpha".parse().unwrap();
        let chair: Model = "test/chair".parse().unwrap();

        let alpha_caps: Vec<Option<u32>> = calls
            .iter()
            .filter(|c| c.model == alpha)
            .map(|c| c.max_tokens)
            .collect();
        assert_eq!(alpha_caps, vec![Some(600), Some(300)]);

        let chair_call = calls.iter().find(|c| c.model == chair).unwrap();
        assert_eq!(chair_call.max_tokens, Some(1000));
    }

    #[tokio::test]
    async fn test_partial_stage1_failure_reduces_label_set() {
        let gateway = Arc::new(
            MockGateway::new()
                .script("test/alpha", Ok("alpha answer"))
                .script("test/bravo", Err("boom"))
                .script("test/alpha", Ok("FINAL RANKING:\n1. Response A"))
                .script("test/bravo", Ok("FINAL RANKING:\n1. Response A"))
                .script("test/chair", Ok("verdict")),
        );

        let use_case = RunCouncilUseCase::new(Arc::clone(&gateway), roster());
        let verdict = use_case
            .execute(RunCouncilInput::new("q"))
            .await
            .unwrap();

        // Bravo is absent from Stage 1, so only one label exists
        assert_eq!(verdict.stage1.len(), 1);
        assert_eq!(verdict.metadata.label_to_member.len(), 1);
        assert_eq!(
            verdict.metadata.label_to_member.get("Response A"),
            Some("Alpha")
        );

        // Bravo still judges: self-exclusion applies to answers, not judges
        assert_eq!(verdict.stage2.len(), 2);
    }

    #[tokio::test]
    async fn test_total_stage1_failure_short_circuits() {
        let gateway = Arc::new(
            MockGateway::new()
                .script("test/alpha", Err("down"))
                .script("test/bravo", Err("down")),
        );

        let use_case = RunCouncilUseCase::new(Arc::clone(&gateway), roster());
        let verdict = use_case
            .execute(RunCouncilInput::new("q"))
            .await
            .unwrap();

        assert!(verdict.stage1.is_empty());
        assert!(verdict.stage2.is_empty());
        assert!(verdict.metadata.label_to_member.is_empty());
        assert!(verdict.metadata.aggregate_rankings.is_empty());
        assert_eq!(verdict.synthesis.member, "Chair");
        assert_eq!(verdict.synthesis.content, COUNCIL_FAILURE_MESSAGE);

        // No Stage-2 or chairman calls were made
        assert_eq!(gateway.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_chairman_failure_substitutes_fixed_message() {
        let gateway = Arc::new(
            MockGateway::new()
                .script("test/alpha", Ok("alpha answer"))
                .script("test/bravo", Ok("bravo answer"))
                .script("test/alpha", Ok(RANKING_AB))
                .script("test/bravo", Ok(RANKING_AB))
                .script("test/chair", Err("chair down")),
        );

        let use_case = RunCouncilUseCase::new(Arc::clone(&gateway), roster());
        let verdict = use_case
            .execute(RunCouncilInput::new("q"))
            .await
            .unwrap();

        // Stage-1/2 data survives the chairman failure
        assert_eq!(verdict.stage1.len(), 2);
        assert_eq!(verdict.stage2.len(), 2);
        assert_eq!(verdict.synthesis.member, "Chair");
        assert_eq!(verdict.synthesis.content, SYNTHESIS_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_system_prompt_reaches_stage1_and_stage3() {
        let gateway = Arc::new(
            MockGateway::new()
                .script("test/alpha", Ok("a"))
                .script("test/bravo", Ok("b"))
                .script("test/alpha", Ok(RANKING_AB))
                .script("test/bravo", Ok(RANKING_AB))
                .script("test/chair", Ok("v")),
        );

        let use_case = RunCouncilUseCase::new(Arc::clone(&gateway), roster());
        use_case
            .execute(RunCouncilInput::new("q").with_system_prompt("Be brief."))
            .await
            .unwrap();

        let calls = gateway.calls();
        let with_system = calls
            .iter()
            .filter(|c| {
                c.messages
                    .first()
                    .is_some_and(|m| m.role == council_domain::Role::System)
            })
            .count();
        // 2 stage-1 calls + 1 chairman call; ranking calls carry no system prompt
        assert_eq!(with_system, 3);
    }
}
