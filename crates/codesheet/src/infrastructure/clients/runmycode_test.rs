use mockito::Matcher;

use super::*;
use crate::domain::models::LanguageId;
use crate::domain::models::RunResult;

fn request(args: &str) -> RunRequest {
    return RunRequest::new(
        LanguageId::Python3,
        "import sys\nprint(sys.argv)".to_string(),
        args.to_string(),
    );
}

#[tokio::test]
async fn it_posts_the_code_with_key_and_encoded_args() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/run/python3")
        .match_query(Matcher::UrlEncoded("args".to_string(), "a b&c".to_string()))
        .match_header("x-api-key", "secret")
        .match_body("import sys\nprint(sys.argv)")
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"Successful","stdout":"['a', 'b&c']\n","stderr":""}"#)
        .create_async()
        .await;

    let client = RunMyCode::new(&format!("{}/run/", server.url()), "secret");
    let res = client.run(&request("a b&c")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(res.status, "Successful");
    assert_eq!(res.stdout, Some("['a', 'b&c']\n".to_string()));
}

#[tokio::test]
async fn it_reads_failure_reports_from_error_statuses() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/python3")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"status":"Failed","error":"SyntaxError","stdout":""}"#)
        .create_async()
        .await;

    let client = RunMyCode::new(&server.url(), "secret");
    let res = client.run(&request("")).await.unwrap();

    assert_eq!(res.status, "Failed");
    assert_eq!(res.error, Some("SyntaxError".to_string()));
}

#[tokio::test]
async fn it_reads_gateway_errors_without_a_status_as_failures() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/python3")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(r#"{"message":"Forbidden"}"#)
        .create_async()
        .await;

    let client = RunMyCode::new(&server.url(), "wrong");
    let res = client.run(&request("")).await;
    let result = RunResult::from_response(res);

    assert!(matches!(result, RunResult::Failure { .. }));
    assert_eq!(result.output_text(), "Failed: ");
}

#[tokio::test]
async fn it_rejects_non_json_bodies() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/python3")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let client = RunMyCode::new(&server.url(), "secret");
    let err = client.run(&request("")).await.unwrap_err();

    assert!(matches!(err, TransportError::Decode(_)));
}

#[tokio::test]
async fn it_reports_unreachable_services_as_network_errors() {
    let client = RunMyCode::new("http://127.0.0.1:1", "secret");
    let err = client.run(&request("")).await.unwrap_err();

    assert!(matches!(err, TransportError::Network(_)));
}

#[test]
fn it_builds_the_endpoint_from_the_base_url() {
    let client = RunMyCode::new("https://api.runmycode.online/run/", "key");

    assert_eq!(
        client.endpoint(&request("1 2")),
        "https://api.runmycode.online/run/python3?args=1%202"
    );
}
