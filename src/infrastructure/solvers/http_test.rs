use anyhow::Result;

use super::HttpSolver;
use super::StepsResponse;
use super::UpdateStepRequest;
use crate::domain::models::sequence_is_contiguous;
use crate::domain::models::SolveClient;
use crate::domain::models::Step;
use crate::domain::models::StepStatus;

impl HttpSolver {
    fn with_url(url: String) -> HttpSolver {
        return HttpSolver {
            url,
            timeout: "200".to_string(),
        };
    }
}

fn steps_fixture(statuses: &[StepStatus]) -> Vec<Step> {
    return statuses
        .iter()
        .enumerate()
        .map(|(idx, status)| {
            return Step {
                index: idx + 1,
                content: format!("Step {}.", idx + 1),
                code: "print(sympy.latex(res))".to_string(),
                output: "e^{x}".to_string(),
                status: *status,
            };
        })
        .collect();
}

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/").with_status(200).create();

    let solver = HttpSolver::with_url(server.url());
    let res = solver.health_check().await;

    assert!(res.is_ok());
    mock.assert();
}

#[tokio::test]
async fn it_health_checks_a_service_without_a_root_route() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/").with_status(404).create();

    let solver = HttpSolver::with_url(server.url());
    let res = solver.health_check().await;

    assert!(res.is_ok());
    mock.assert();
}

#[tokio::test]
async fn it_fails_health_checks_without_a_url() {
    let solver = HttpSolver::with_url("".to_string());
    let res = solver.health_check().await;

    assert!(res.is_err());
}

#[tokio::test]
async fn it_solves_a_problem() -> Result<()> {
    let body = serde_json::to_string(&StepsResponse {
        steps: steps_fixture(&[StepStatus::Normal, StepStatus::Normal, StepStatus::Normal]),
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/solve")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "problem": "derivative of e^x"
        })))
        .with_status(200)
        .with_body(body)
        .create();

    let solver = HttpSolver::with_url(server.url());
    let steps = solver.solve("derivative of e^x").await?;
    mock.assert();

    assert_eq!(steps.len(), 3);
    assert!(sequence_is_contiguous(&steps));
    assert_eq!(steps[0].status, StepStatus::Normal);

    return Ok(());
}

#[tokio::test]
async fn it_fails_solves_on_server_errors() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/solve").with_status(500).create();

    let solver = HttpSolver::with_url(server.url());
    let res = solver.solve("derivative of e^x").await;

    assert!(res.is_err());
    mock.assert();
}

#[tokio::test]
async fn it_rejects_unknown_statuses() -> Result<()> {
    let body = r#"{"steps": [{"index": 1, "content": "a", "code": "b", "output": "c", "status": "confused"}]}"#;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/solve")
        .with_status(200)
        .with_body(body)
        .create();

    let solver = HttpSolver::with_url(server.url());
    let res = solver.solve("derivative of e^x").await;

    assert!(res.is_err());
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_rejects_non_contiguous_sequences() -> Result<()> {
    let mut steps = steps_fixture(&[StepStatus::Normal, StepStatus::Normal]);
    steps[1].index = 5;
    let body = serde_json::to_string(&StepsResponse { steps })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/solve")
        .with_status(200)
        .with_body(body)
        .create();

    let solver = HttpSolver::with_url(server.url());
    let res = solver.solve("derivative of e^x").await;

    assert!(res.is_err());
    assert!(res.unwrap_err().to_string().contains("non-contiguous"));
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_updates_a_step() -> Result<()> {
    let current = steps_fixture(&[StepStatus::Normal, StepStatus::Normal, StepStatus::Normal]);
    let expected_request = serde_json::to_value(&UpdateStepRequest {
        current_steps: current.clone(),
        edit_index: 2,
        new_content: "apply chain rule instead".to_string(),
        problem: "derivative of e^x".to_string(),
    })?;
    let body = serde_json::to_string(&StepsResponse {
        steps: steps_fixture(&[StepStatus::Valid, StepStatus::Valid]),
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/update_step")
        .match_body(mockito::Matcher::Json(expected_request))
        .with_status(200)
        .with_body(body)
        .create();

    let solver = HttpSolver::with_url(server.url());
    let steps = solver
        .update_step(&current, 2, "apply chain rule instead", "derivative of e^x")
        .await?;
    mock.assert();

    assert_eq!(steps.len(), 2);
    assert_eq!(steps[1].status, StepStatus::Valid);

    return Ok(());
}

#[tokio::test]
async fn it_accepts_error_status_steps_as_a_successful_response() -> Result<()> {
    let body = serde_json::to_string(&StepsResponse {
        steps: steps_fixture(&[StepStatus::Valid, StepStatus::Error]),
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/update_step")
        .with_status(200)
        .with_body(body)
        .create();

    let current = steps_fixture(&[StepStatus::Normal, StepStatus::Normal]);
    let solver = HttpSolver::with_url(server.url());
    let steps = solver
        .update_step(&current, 2, "divide by zero", "derivative of e^x")
        .await?;
    mock.assert();

    // A rejected edit is a verification failure, not a transport failure.
    assert_eq!(steps[1].status, StepStatus::Error);

    return Ok(());
}
