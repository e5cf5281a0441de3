use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::{json, Value};

fn binary_command() -> Command {
    let mut command = Command::new(assert_cmd::cargo::cargo_bin!("civic"));
    command
        .env_remove("MOONSHOT_API_KEY")
        .env_remove("CIVIC_API_BASE")
        .env_remove("CIVIC_MODEL")
        .env_remove("CIVIC_TEMPERATURE")
        .env_remove("CIVIC_MAX_TOKENS")
        .env_remove("CIVIC_HISTORY_LIMIT")
        .env_remove("CIVIC_REQUEST_TIMEOUT_MS")
        .env_remove("RUST_LOG");
    command
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn ward_command_prints_display_record() {
    let output = binary_command()
        .args(["ward", "48"])
        .assert()
        .success()
        .get_output()
        .clone();
    let record = stdout_json(&output);
    assert_eq!(record["name"], "Ward 48");
    assert_eq!(record["representative"]["name"], "Leni Manaa-Hoppenworth");
    assert_eq!(record["office"]["hours"], "Mon-Fri: 9:00 AM - 5:00 PM");
}

#[test]
fn ward_command_rejects_unknown_ward() {
    binary_command()
        .args(["ward", "51"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ward 51 not found"));
}

#[test]
fn search_command_filters_by_neighborhood() {
    let output = binary_command()
        .args(["search", "Andersonville"])
        .assert()
        .success()
        .get_output()
        .clone();
    let results = stdout_json(&output);
    let ids: Vec<u64> = results
        .as_array()
        .expect("results array")
        .iter()
        .filter_map(|record| record["id"].as_u64())
        .collect();
    assert!(ids.contains(&48));
}

#[test]
fn search_without_query_lists_every_ward() {
    let output = binary_command()
        .arg("search")
        .assert()
        .success()
        .get_output()
        .clone();
    assert_eq!(stdout_json(&output).as_array().map(Vec::len), Some(50));
}

#[test]
fn functional_ask_without_key_answers_from_fallback() {
    let output = binary_command()
        .args(["ask", "Who is my representative?", "--ward", "48"])
        .assert()
        .success()
        .get_output()
        .clone();
    let response = stdout_json(&output);
    assert_eq!(response["source"], "local-fallback");
    assert_eq!(response["model"], "fallback");
    assert_eq!(response["citations"], json!([]));
    let message = response["message"].as_str().expect("message string");
    assert!(message.contains("Leni Manaa-Hoppenworth"));
    assert!(message.contains("(773) 784-5277"));
}

#[test]
fn ask_rejects_blank_message() {
    binary_command()
        .args(["ask", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("message is required"));
}

#[test]
fn integration_ask_uses_remote_model_when_key_is_set() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("authorization", "Bearer cli-test-key")
            .json_body_includes(
                json!({
                    "model": "kimi-k2-0711-preview",
                    "max_tokens": 1024,
                    "temperature": 0.7
                })
                .to_string(),
            );
        then.status(200).json_body(json!({
            "choices": [{"message": {"content": "Register at chicagoelections.gov."}}],
            "usage": {"prompt_tokens": 30, "completion_tokens": 6, "total_tokens": 36}
        }));
    });

    let output = binary_command()
        .args([
            "ask",
            "How do I register to vote?",
            "--api-key",
            "cli-test-key",
            "--api-base",
        ])
        .arg(format!("{}/v1", server.base_url()))
        .assert()
        .success()
        .get_output()
        .clone();

    mock.assert();
    let response = stdout_json(&output);
    assert_eq!(response["source"], "remote");
    assert_eq!(response["message"], "Register at chicagoelections.gov.");
    assert_eq!(
        response["citations"][0]["url"],
        "https://data.cityofchicago.org/resource/htai-wnw4.json"
    );
}

#[test]
fn regression_ask_falls_back_when_remote_returns_500() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(500).body("boom");
    });

    let output = binary_command()
        .env("MOONSHOT_API_KEY", "cli-test-key")
        .env("CIVIC_API_BASE", format!("{}/v1", server.base_url()))
        .args(["ask", "When is the next election?"])
        .assert()
        .success()
        .get_output()
        .clone();

    mock.assert_calls(1);
    let response = stdout_json(&output);
    assert_eq!(response["source"], "local-fallback");
    assert_eq!(response["remoteStatus"], 500);
    assert!(response["message"]
        .as_str()
        .expect("message string")
        .contains("chicagoelections.gov/your-voter-information"));
}

#[test]
fn rejects_out_of_range_temperature() {
    binary_command()
        .args(["--temperature", "3.5", "search"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("0.0..=2.0"));
}
