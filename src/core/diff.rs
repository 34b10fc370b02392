use crate::domain::model::DiffReport;

/// Find the first line difference between the stored snapshot and the
/// current content. Later lines are not inspected once a difference is
/// found.
pub fn first_diff(expected: &str, current: &str) -> DiffReport {
    let expected_lines: Vec<&str> = expected.lines().collect();
    let current_lines: Vec<&str> = current.lines().collect();
    let max_lines = expected_lines.len().max(current_lines.len());

    for i in 0..max_lines {
        match (expected_lines.get(i), current_lines.get(i)) {
            (Some(expected_line), Some(current_line)) if expected_line != current_line => {
                return DiffReport::Changed {
                    line: i + 1,
                    expected: (*expected_line).to_string(),
                    current: (*current_line).to_string(),
                };
            }
            (Some(expected_line), None) => {
                return DiffReport::CurrentShorter {
                    line: i + 1,
                    expected: (*expected_line).to_string(),
                };
            }
            (None, Some(current_line)) => {
                return DiffReport::CurrentLonger {
                    line: i + 1,
                    current: (*current_line).to_string(),
                };
            }
            _ => {}
        }
    }

    DiffReport::Identical
}
