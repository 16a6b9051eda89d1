#[cfg(test)]
#[path = "step_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Validity of a step as judged by the solver backend. The backend is the
/// only writer; the client never computes or upgrades a status on its own.
/// Unknown wire values fail deserialization rather than being coerced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Normal,
    Valid,
    Error,
}

impl ToString for StepStatus {
    fn to_string(&self) -> String {
        match self {
            StepStatus::Normal => return String::from("normal"),
            StepStatus::Valid => return String::from("valid"),
            StepStatus::Error => return String::from("error"),
        }
    }
}

/// One unit of a derivation. Steps are produced only by the solver backend,
/// never synthesized client-side. `index` is a 1-based ordinal position
/// within the current sequence, not a stable identity across re-derivations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub index: usize,
    pub content: String,
    pub code: String,
    pub output: String,
    pub status: StepStatus,
}

impl Step {
    pub fn content_lines(&self, line_max_width: usize) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();

        for full_line in self.content.split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut char_count = 0;
            let mut current_lines: Vec<&str> = vec![];

            for word in full_line.split(' ') {
                if word.len() + char_count + 1 > line_max_width {
                    lines.push(current_lines.join(" ").trim_end().to_string());
                    current_lines = vec![word];
                    char_count = word.len() + 1;
                } else {
                    current_lines.push(word);
                    char_count += word.len() + 1;
                }
            }
            if !current_lines.is_empty() {
                lines.push(current_lines.join(" ").trim_end().to_string());
            }
        }

        return lines;
    }
}

/// A sequence is well formed when its indices are exactly 1..N with no gaps.
/// The empty sequence is valid, it is the pre-solve state.
pub fn sequence_is_contiguous(steps: &[Step]) -> bool {
    return steps
        .iter()
        .enumerate()
        .all(|(idx, step)| return step.index == idx + 1);
}
