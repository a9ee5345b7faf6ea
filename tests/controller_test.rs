// Interaction controller behavior against scripted generators
use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use psychotech::analogy::{AnalogyData, AnalogyGenerator, GenerateRequest, GenerateResponse};
use psychotech::controller::{
    Controller, SessionState, SubmitError, NOTICE_COPIED, NOTICE_EMPTY_CONCEPT,
    NOTICE_GENERATED, NOTICE_GENERATION_FAILED,
};
use psychotech::platform::{MemoryClipboard, RecordingNotifier, Severity};

#[derive(Clone, Copy)]
enum Script {
    Succeed,
    Reject,
    FailSemantically,
    SucceedWithoutData,
    RejectFirst,
}

/// Answers every call the same way and records what it was asked.
#[derive(Clone)]
struct ScriptedGenerator {
    script: Script,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl ScriptedGenerator {
    fn new(script: Script) -> Self {
        Self {
            script,
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn confirmation_bias() -> AnalogyData {
    AnalogyData {
        concept: "Biais de confirmation".to_string(),
        description: "Tendance à privilégier les informations qui confirment nos croyances."
            .to_string(),
        tech_analogy: "Fil d'actualité".to_string(),
        tech_description: "L'algorithme affiche surtout ce que vous aimez déjà.".to_string(),
        sophistication: "Diversifier ses abonnements comme on diversifie ses sources."
            .to_string(),
    }
}

#[async_trait]
impl AnalogyGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.requests.lock().unwrap().push(request.clone());
        match self.script {
            Script::Succeed => Ok(GenerateResponse::ok(confirmation_bias())),
            Script::Reject => bail!("connection refused"),
            Script::FailSemantically => Ok(GenerateResponse::failure("model refused")),
            Script::SucceedWithoutData => Ok(GenerateResponse {
                success: true,
                data: None,
                error: None,
            }),
            Script::RejectFirst if call == 1 => bail!("timeout"),
            Script::RejectFirst => Ok(GenerateResponse::ok(confirmation_bias())),
        }
    }
}

struct Harness {
    controller: Controller,
    generator: ScriptedGenerator,
    clipboard: MemoryClipboard,
    notifier: RecordingNotifier,
}

fn harness(script: Script) -> Harness {
    let generator = ScriptedGenerator::new(script);
    let clipboard = MemoryClipboard::new();
    let notifier = RecordingNotifier::new();
    let controller = Controller::new(
        Box::new(generator.clone()),
        Box::new(clipboard.clone()),
        Box::new(notifier.clone()),
    );
    Harness {
        controller,
        generator,
        clipboard,
        notifier,
    }
}

#[tokio::test]
async fn test_blank_concept_does_not_call_generator() {
    for concept in ["", "   ", "\t\n"] {
        let mut h = harness(Script::Succeed);
        h.controller.set_concept(concept);

        let err = h.controller.submit().await.unwrap_err();

        assert_eq!(err, SubmitError::EmptyConcept);
        assert_eq!(h.generator.calls(), 0);
        assert!(h.controller.analogies().is_empty());
        assert_eq!(h.controller.state(), SessionState::Idle);
        assert_eq!(
            h.notifier.last(),
            Some((Severity::Error, NOTICE_EMPTY_CONCEPT.to_string()))
        );
    }
}

#[tokio::test]
async fn test_success_prepends_and_clears_inputs() {
    let mut h = harness(Script::Succeed);
    h.controller.set_concept("Biais de confirmation");
    h.controller.set_context("Cours de psychologie cognitive");

    h.controller.submit().await.unwrap();

    assert_eq!(h.generator.calls(), 1);
    assert_eq!(h.controller.analogies().len(), 1);
    let first = &h.controller.analogies()[0];
    assert_eq!(first.concept, "Biais de confirmation");
    assert_eq!(first.tech_analogy, "Fil d'actualité");
    assert_eq!(first.description, confirmation_bias().description);
    assert_eq!(first.tech_description, confirmation_bias().tech_description);
    assert_eq!(first.sophistication, confirmation_bias().sophistication);
    assert_eq!(h.controller.concept(), "");
    assert_eq!(h.controller.context(), "");
    assert_eq!(h.controller.state(), SessionState::Idle);
    assert_eq!(
        h.notifier.last(),
        Some((Severity::Success, NOTICE_GENERATED.to_string()))
    );
}

#[tokio::test]
async fn test_request_carries_inputs() {
    let mut h = harness(Script::Succeed);
    h.controller.set_concept("Résilience");
    h.controller.submit().await.unwrap();
    h.controller.set_concept("Transfert émotionnel");
    h.controller.set_context("Séminaire");
    h.controller.submit().await.unwrap();

    let requests = h.generator.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], GenerateRequest::new("Résilience", ""));
    assert_eq!(requests[0].context, None);
    assert_eq!(requests[1].concept, "Transfert émotionnel");
    assert_eq!(requests[1].context.as_deref(), Some("Séminaire"));
}

#[tokio::test]
async fn test_newest_analogy_first() {
    let mut h = harness(Script::Succeed);
    h.controller.set_concept("Un");
    h.controller.submit().await.unwrap();
    let first_created = h.controller.analogies()[0].created_at;

    h.controller.set_concept("Deux");
    h.controller.submit().await.unwrap();

    assert_eq!(h.controller.analogies().len(), 2);
    assert!(h.controller.analogies()[0].created_at >= first_created);
    assert_eq!(h.controller.analogies()[1].created_at, first_created);
}

#[tokio::test]
async fn test_failures_keep_inputs_and_list() {
    for script in [
        Script::Reject,
        Script::FailSemantically,
        Script::SucceedWithoutData,
    ] {
        let mut h = harness(script);
        h.controller.set_concept("Résilience");
        h.controller.set_context("Master");

        let err = h.controller.submit().await.unwrap_err();

        assert!(matches!(err, SubmitError::Remote(_)));
        assert_eq!(h.generator.calls(), 1);
        assert!(h.controller.analogies().is_empty());
        assert_eq!(h.controller.concept(), "Résilience");
        assert_eq!(h.controller.context(), "Master");
        assert_eq!(h.controller.state(), SessionState::Idle);
        assert_eq!(
            h.notifier.last(),
            Some((Severity::Error, NOTICE_GENERATION_FAILED.to_string()))
        );
    }
}

#[tokio::test]
async fn test_rejection_reason_is_kept_in_error() {
    let mut h = harness(Script::Reject);
    h.controller.set_concept("Résilience");
    let err = h.controller.submit().await.unwrap_err();
    assert_eq!(err, SubmitError::Remote("connection refused".to_string()));
}

#[tokio::test]
async fn test_failure_then_retry_succeeds() {
    let mut h = harness(Script::RejectFirst);
    h.controller.set_concept("Biais de confirmation");
    assert!(h.controller.submit().await.is_err());

    // Inputs survived, so the same submission can be replayed
    h.controller.submit().await.unwrap();
    assert_eq!(h.generator.calls(), 2);
    assert_eq!(h.controller.analogies().len(), 1);
    assert_eq!(h.controller.concept(), "");
}

#[tokio::test]
async fn test_only_one_request_in_flight() {
    let mut h = harness(Script::Succeed);
    h.controller.set_concept("Résilience");

    let pending = h.controller.begin_submit().unwrap();
    assert!(h.controller.is_submitting());
    assert!(!h.controller.can_submit());
    assert_eq!(h.controller.submit().await.unwrap_err(), SubmitError::Busy);
    assert_eq!(h.generator.calls(), 0);

    let outcome = h.generator.generate(pending.request()).await;
    h.controller.finish_submit(pending, outcome).unwrap();
    assert_eq!(h.generator.calls(), 1);
    assert_eq!(h.controller.analogies().len(), 1);
}

#[tokio::test]
async fn test_copy_writes_once_in_order() {
    let mut h = harness(Script::Succeed);
    h.controller.set_concept("Biais de confirmation");
    h.controller.submit().await.unwrap();

    assert!(h.controller.copy(0));

    let writes = h.clipboard.writes();
    assert_eq!(writes.len(), 1);
    let text = &writes[0];
    let data = confirmation_bias();
    let positions: Vec<usize> = [
        data.concept.as_str(),
        data.description.as_str(),
        data.tech_analogy.as_str(),
        data.tech_description.as_str(),
    ]
    .iter()
    .map(|part| text.find(part).expect("part missing from copied text"))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(text.contains("→ Fil d'actualité"));
    assert!(!text.contains(&data.sophistication));
    assert_eq!(
        h.notifier.last(),
        Some((Severity::Success, NOTICE_COPIED.to_string()))
    );
}

#[tokio::test]
async fn test_copy_selects_by_position() {
    let mut h = harness(Script::Succeed);
    h.controller.set_concept("Un");
    h.controller.submit().await.unwrap();
    h.controller.set_concept("Deux");
    h.controller.submit().await.unwrap();

    assert!(h.controller.copy(1));
    assert!(!h.controller.copy(2));
    assert_eq!(h.clipboard.writes().len(), 1);
}
