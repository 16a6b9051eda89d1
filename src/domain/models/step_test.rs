use anyhow::Result;

use super::sequence_is_contiguous;
use super::Step;
use super::StepStatus;

pub fn step_fixture(index: usize, status: StepStatus) -> Step {
    return Step {
        index,
        content: format!("Differentiate the expression at step {index}."),
        code: "print(sympy.latex(sympy.diff(sympy.exp(x), x)))".to_string(),
        output: "e^{x}".to_string(),
        status,
    };
}

#[test]
fn it_serializes_status_lowercase() -> Result<()> {
    let step = step_fixture(1, StepStatus::Valid);
    let json = serde_json::to_string(&step)?;

    assert!(json.contains("\"status\":\"valid\""));
    assert!(json.contains("\"index\":1"));

    return Ok(());
}

#[test]
fn it_deserializes_known_statuses() -> Result<()> {
    for (wire, expected) in [
        ("normal", StepStatus::Normal),
        ("valid", StepStatus::Valid),
        ("error", StepStatus::Error),
    ] {
        let json = format!(
            r#"{{"index": 1, "content": "a", "code": "b", "output": "c", "status": "{wire}"}}"#
        );
        let step: Step = serde_json::from_str(&json)?;
        assert_eq!(step.status, expected);
    }

    return Ok(());
}

#[test]
fn it_rejects_unknown_status() {
    let json = r#"{"index": 1, "content": "a", "code": "b", "output": "c", "status": "maybe"}"#;
    let res = serde_json::from_str::<Step>(json);

    assert!(res.is_err());
    assert!(res.unwrap_err().to_string().contains("maybe"));
}

#[test]
fn it_accepts_contiguous_sequences() {
    let steps: Vec<Step> = (1..=3)
        .map(|idx| return step_fixture(idx, StepStatus::Normal))
        .collect();

    assert!(sequence_is_contiguous(&steps));
    assert!(sequence_is_contiguous(&[]));
}

#[test]
fn it_flags_gapped_sequences() {
    let steps = vec![
        step_fixture(1, StepStatus::Normal),
        step_fixture(3, StepStatus::Normal),
    ];

    assert!(!sequence_is_contiguous(&steps));
}

#[test]
fn it_flags_zero_based_sequences() {
    let steps = vec![
        step_fixture(0, StepStatus::Normal),
        step_fixture(1, StepStatus::Normal),
    ];

    assert!(!sequence_is_contiguous(&steps));
}

#[test]
fn it_wraps_content_lines() {
    let mut step = step_fixture(1, StepStatus::Normal);
    step.content = "one two three four five".to_string();

    let lines = step.content_lines(10);

    assert_eq!(lines, vec!["one two", "three", "four five"]);
}

#[test]
fn it_keeps_blank_content_lines() {
    let mut step = step_fixture(1, StepStatus::Normal);
    step.content = "first\n\nsecond".to_string();

    let lines = step.content_lines(80);

    assert_eq!(lines, vec!["first", " ", "second"]);
}
