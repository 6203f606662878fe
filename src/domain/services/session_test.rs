use anyhow::Result;

use super::SessionController;
use crate::domain::models::ComplexityLevel;
use crate::domain::models::GenerationRequest;
use crate::domain::models::Industry;
use crate::domain::models::ProjectSpecification;
use crate::domain::models::View;
use crate::domain::services::HistoryStore;

fn request(focus_area: &str) -> GenerationRequest {
    return GenerationRequest::build(Industry::FinTech, ComplexityLevel::Advanced, focus_area);
}

fn specs() -> Vec<ProjectSpecification> {
    return serde_json::from_str(&test_utils::specifications_json()).unwrap();
}

async fn controller(dir: &tempfile::TempDir) -> SessionController {
    return SessionController::new(HistoryStore::new(dir.path().to_path_buf())).await;
}

#[tokio::test]
async fn it_starts_on_the_landing_view() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let session = controller(&dir).await;

    assert_eq!(session.view, View::Landing);
    assert!(!session.loading);
    assert!(session.error.is_none());
    assert!(session.history.is_empty());
    assert!(session.active_history_id.is_none());
    assert!(session.last_request.is_none());
    assert!(session.current_result.is_empty());

    return Ok(());
}

#[tokio::test]
async fn it_moves_from_landing_to_home() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = controller(&dir).await;

    session.start();
    assert_eq!(session.view, View::Home);

    session.start();
    assert_eq!(session.view, View::Home);

    return Ok(());
}

#[tokio::test]
async fn it_submits_and_completes_a_generation() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = controller(&dir).await;
    session.start();

    let seq = session.submit(request("Event sourcing")).unwrap();
    assert!(session.loading);
    assert_eq!(session.view, View::Home);

    session
        .complete_generation(seq, request("Event sourcing"), specs())
        .await;

    assert_eq!(session.view, View::Results);
    assert!(!session.loading);
    assert!(session.error.is_none());
    assert_eq!(session.current_result, specs());
    assert_eq!(session.history.len(), 1);
    assert_eq!(
        session.active_history_id,
        Some(session.history[0].id.clone())
    );
    assert_eq!(session.last_request, Some(request("Event sourcing")));

    return Ok(());
}

#[tokio::test]
async fn it_gates_submissions_while_loading() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = controller(&dir).await;
    session.start();

    assert!(session.submit(request("first")).is_some());
    assert!(session.submit(request("second")).is_none());
    assert!(session.regenerate().is_none());
    assert_eq!(session.last_request, Some(request("first")));

    return Ok(());
}

#[tokio::test]
async fn it_records_failures_without_leaving_the_view() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = controller(&dir).await;
    session.start();

    let seq = session.submit(request("doomed")).unwrap();
    session.fail_generation(seq, "no response received from Gemini".to_string());

    assert_eq!(session.view, View::Home);
    assert!(!session.loading);
    assert_eq!(
        session.error,
        Some("no response received from Gemini".to_string())
    );
    assert!(session.history.is_empty());
    assert!(session.current_result.is_empty());

    return Ok(());
}

#[tokio::test]
async fn it_drops_stale_completions() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = controller(&dir).await;
    session.start();

    let first = session.submit(request("first")).unwrap();
    session.fail_generation(first, "timed out".to_string());
    let second = session.submit(request("second")).unwrap();

    // A late response for the first request lands after its replacement
    // was admitted. It must not touch state or history.
    session
        .complete_generation(first, request("first"), specs())
        .await;

    assert!(session.loading);
    assert_eq!(session.view, View::Home);
    assert!(session.history.is_empty());
    assert!(session.current_result.is_empty());

    session
        .complete_generation(second, request("second"), specs())
        .await;

    assert_eq!(session.view, View::Results);
    assert_eq!(session.history.len(), 1);
    assert_eq!(session.history[0].request.focus_area, "second");

    return Ok(());
}

#[tokio::test]
async fn it_drops_stale_failures() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = controller(&dir).await;
    session.start();

    let first = session.submit(request("first")).unwrap();
    session.fail_generation(first, "timed out".to_string());
    let second = session.submit(request("second")).unwrap();

    session.fail_generation(first, "duplicate late failure".to_string());

    assert!(session.loading);
    assert!(session.error.is_none());

    session
        .complete_generation(second, request("second"), specs())
        .await;
    assert_eq!(session.view, View::Results);

    return Ok(());
}

#[tokio::test]
async fn it_loads_results_from_history() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = controller(&dir).await;
    session.start();

    let seq = session.submit(request("stored")).unwrap();
    session
        .complete_generation(seq, request("stored"), specs())
        .await;
    let id = session.history[0].id.clone();

    session.new_project();
    assert!(session.current_result.is_empty());
    assert!(session.active_history_id.is_none());

    assert!(session.load_from_history(&id));
    assert_eq!(session.view, View::Results);
    assert_eq!(session.current_result, specs());
    assert_eq!(session.active_history_id, Some(id));
    assert_eq!(session.last_request, Some(request("stored")));

    return Ok(());
}

#[tokio::test]
async fn it_rejects_unknown_history_ids() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = controller(&dir).await;
    session.start();

    assert!(!session.load_from_history("not-a-real-id"));
    assert_eq!(session.view, View::Home);
    assert!(session.active_history_id.is_none());

    return Ok(());
}

#[tokio::test]
async fn it_keeps_history_when_starting_a_new_project() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = controller(&dir).await;
    session.start();

    let seq = session.submit(request("kept")).unwrap();
    session
        .complete_generation(seq, request("kept"), specs())
        .await;

    session.new_project();

    assert_eq!(session.view, View::Home);
    assert_eq!(session.history.len(), 1);
    assert!(session.current_result.is_empty());
    assert!(session.active_history_id.is_none());
    assert!(session.error.is_none());

    return Ok(());
}

#[tokio::test]
async fn it_opens_and_closes_developer_info() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = controller(&dir).await;
    session.start();

    let seq = session.submit(request("inspected")).unwrap();
    session
        .complete_generation(seq, request("inspected"), specs())
        .await;
    assert!(session.active_history_id.is_some());

    session.open_developer_info();
    assert_eq!(session.view, View::Developer);
    assert!(session.active_history_id.is_none());
    assert_eq!(session.current_result, specs());

    session.close_developer_info();
    assert_eq!(session.view, View::Home);

    // Closing when not on the developer screen changes nothing.
    session.close_developer_info();
    assert_eq!(session.view, View::Home);

    return Ok(());
}

#[tokio::test]
async fn it_clears_history_and_starts_a_new_project() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = controller(&dir).await;
    session.start();

    let seq = session.submit(request("cleared")).unwrap();
    session
        .complete_generation(seq, request("cleared"), specs())
        .await;
    assert_eq!(session.view, View::Results);

    session.clear_history().await;

    assert!(session.history.is_empty());
    assert!(session.active_history_id.is_none());
    assert!(session.current_result.is_empty());
    assert_eq!(session.view, View::Home);
    assert_eq!(session.last_request, Some(request("cleared")));

    let fresh = controller(&dir).await;
    assert!(fresh.history.is_empty());

    return Ok(());
}

#[tokio::test]
async fn it_regenerates_the_last_request() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = controller(&dir).await;
    session.start();

    let seq = session.submit(request("again")).unwrap();
    session
        .complete_generation(seq, request("again"), specs())
        .await;

    let (next_seq, rerun) = session.regenerate().unwrap();
    assert!(session.loading);
    assert_eq!(rerun, request("again"));
    assert!(next_seq > seq);

    session.complete_generation(next_seq, rerun, specs()).await;
    assert_eq!(session.history.len(), 2);

    return Ok(());
}

#[tokio::test]
async fn it_cannot_regenerate_without_a_prior_request() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = controller(&dir).await;
    session.start();

    assert!(session.regenerate().is_none());
    assert!(!session.loading);

    return Ok(());
}

#[tokio::test]
async fn it_restores_history_across_sessions() -> Result<()> {
    let dir = tempfile::tempdir()?;

    {
        let mut session = controller(&dir).await;
        session.start();
        let seq = session.submit(request("persisted")).unwrap();
        session
            .complete_generation(seq, request("persisted"), specs())
            .await;
    }

    let revived = controller(&dir).await;
    assert_eq!(revived.history.len(), 1);
    assert_eq!(revived.history[0].request.focus_area, "persisted");
    assert_eq!(revived.view, View::Landing);

    return Ok(());
}
