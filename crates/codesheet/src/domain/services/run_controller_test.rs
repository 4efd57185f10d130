use super::*;
use crate::domain::models::LanguageId;
use crate::domain::models::ModeId;
use crate::domain::models::RunResponse;
use crate::domain::models::SubPanel;
use crate::domain::models::TransportError;
use crate::domain::models::TRANSPORT_FAILURE_TEXT;
use crate::domain::services::ModeLoader;
use crate::infrastructure::editors::MemoryEditor;
use crate::test_utils::MockExecutionClient;
use crate::test_utils::MockModeFetcher;

struct Fixture {
    client: Arc<MockExecutionClient>,
    console: RunConsoleHandle,
    session: Arc<EditorSession>,
    controller: RunController,
}

fn setup(client: MockExecutionClient) -> Fixture {
    let editor = Arc::new(MemoryEditor::with_mode(&ModeId::new("javascript"), ""));
    let loader = Arc::new(ModeLoader::new(Arc::new(MockModeFetcher::new()), editor.clone()));
    let session = Arc::new(EditorSession::new(loader, editor, LanguageId::Nodejs));
    let console = RunConsole::new(1280).into_handle();
    let client = Arc::new(client);
    let controller = RunController::new(session.clone(), console.clone(), client.clone());

    return Fixture {
        client,
        console,
        session,
        controller,
    };
}

fn response(status: &str) -> RunResponse {
    return RunResponse {
        status: status.to_string(),
        ..Default::default()
    };
}

#[tokio::test]
async fn it_shows_stdout_on_success() {
    let fixture = setup(MockExecutionClient::new(Ok(RunResponse {
        stdout: Some("X".to_string()),
        ..response("Successful")
    })));

    let result = fixture.controller.submit_run().await.unwrap();

    assert!(!result.is_error());
    let console = fixture.console.lock().unwrap();
    assert_eq!(console.output(), "X");
    assert!(!console.has_error());
    assert_eq!(fixture.controller.last_outcome(), Some(RunState::Succeeded));
    assert!(fixture.controller.is_trigger_enabled());
}

#[tokio::test]
async fn it_falls_back_to_stderr() {
    let fixture = setup(MockExecutionClient::new(Ok(RunResponse {
        stdout: Some("".to_string()),
        stderr: Some("Y".to_string()),
        ..response("Successful")
    })));

    fixture.controller.submit_run().await.unwrap();

    assert_eq!(fixture.console.lock().unwrap().output(), "Y");
}

#[tokio::test]
async fn it_reports_execution_failures_with_stdout() {
    let fixture = setup(MockExecutionClient::new(Ok(RunResponse {
        error: Some("bad syntax".to_string()),
        stdout: Some("partial".to_string()),
        ..response("Error")
    })));

    fixture.controller.submit_run().await.unwrap();

    let console = fixture.console.lock().unwrap();
    assert!(console.output().contains("bad syntax"));
    assert!(console.output().contains("partial"));
    assert!(console.has_error());
    assert_eq!(fixture.controller.last_outcome(), Some(RunState::Failed));
    assert!(fixture.controller.is_trigger_enabled());
}

#[tokio::test]
async fn it_reports_transport_failures_and_reenables_the_trigger() {
    let fixture = setup(MockExecutionClient::new(Err(TransportError::Decode(
        "expected value at line 1 column 1".to_string(),
    ))));

    fixture.controller.submit_run().await.unwrap();

    let console = fixture.console.lock().unwrap();
    assert_eq!(console.output(), TRANSPORT_FAILURE_TEXT);
    assert!(console.has_error());
    assert_eq!(fixture.controller.state(), RunState::Idle);
    assert_eq!(fixture.controller.last_outcome(), Some(RunState::TransportFailed));
    assert!(fixture.controller.is_trigger_enabled());
}

#[tokio::test]
async fn it_sends_the_live_code_language_and_input() {
    let fixture = setup(MockExecutionClient::new(Ok(response("Successful"))));
    fixture.session.set_code("console.log(process.argv)");
    fixture.console.lock().unwrap().set_input("a b");

    fixture.controller.submit_run().await.unwrap();

    let requests = fixture.client.requests();
    assert_eq!(
        requests,
        vec![RunRequest::new(
            LanguageId::Nodejs,
            "console.log(process.argv)".to_string(),
            "a b".to_string(),
        )]
    );
}

#[tokio::test]
async fn it_ignores_clicks_while_running() {
    let fixture = setup(MockExecutionClient::gated(Ok(RunResponse {
        stdout: Some("done".to_string()),
        ..response("Successful")
    })));
    {
        let mut console = fixture.console.lock().unwrap();
        console.set_error_output("previous failure");
        console.toggle_subpanel(SubPanel::Output);
    }

    let (first, second) = tokio::join!(fixture.controller.submit_run(), async {
        tokio::task::yield_now().await;
        assert_eq!(fixture.controller.state(), RunState::Running);
        assert!(!fixture.controller.is_trigger_enabled());
        {
            let console = fixture.console.lock().unwrap();
            assert_eq!(console.output(), "Running nodejs code...");
            assert!(!console.has_error());
            assert!(!console.panel().is_collapsed(SubPanel::Output));
        }

        let second = fixture.controller.submit_run().await;
        assert_eq!(fixture.controller.state(), RunState::Running);
        fixture.client.release();
        second
    });

    assert!(first.is_some());
    assert_eq!(second, None);
    assert_eq!(fixture.client.calls(), 1);
    assert_eq!(fixture.console.lock().unwrap().output(), "done");
    assert!(fixture.controller.is_trigger_enabled());
}

#[tokio::test]
async fn it_snapshots_the_request_when_the_run_begins() {
    let fixture = setup(MockExecutionClient::new(Ok(response("Successful"))));
    fixture.session.set_code("console.log(1)");
    fixture.console.lock().unwrap().set_input("clicked");

    let request = fixture.controller.begin_run().unwrap();
    assert!(!fixture.controller.is_trigger_enabled());
    assert_eq!(fixture.controller.begin_run(), None);

    fixture.session.set_code("console.log(2)");
    fixture.console.lock().unwrap().set_input("typed later");
    fixture.controller.complete_run(request).await;

    let requests = fixture.client.requests();
    assert_eq!(requests[0].code, "console.log(1)");
    assert_eq!(requests[0].args, "clicked");
    assert!(fixture.controller.is_trigger_enabled());
}
