use crate::analytics::performance::domain::ProgressStatus;

pub(crate) fn normalize_token(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

/// Map an exported status cell onto the progress enum. Unknown spellings
/// fall back to not-started rather than failing the row.
pub(crate) fn status_from(raw: &str) -> ProgressStatus {
    match normalize_token(raw).as_str() {
        "completed" | "complete" | "done" => ProgressStatus::Completed,
        "in progress" | "in-progress" | "in_progress" | "started" => ProgressStatus::InProgress,
        _ => ProgressStatus::NotStarted,
    }
}

#[cfg(test)]
pub(crate) fn normalize_for_tests(value: &str) -> String {
    normalize_token(value)
}
