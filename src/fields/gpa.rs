//! GPA extraction and scale normalization.
//!
//! Three fallback patterns, tried in order:
//!
//! 1. Explicit `GPA: N.NN` (optionally `/ M.MM`).
//! 2. `N.NN / M.MM` co-located with the word "gpa" on the same line.
//! 3. Any bare `N.NN` on a line mentioning "gpa" or "grade", accepted only in
//!    `[0, 5]`.
//!
//! Stored values are always on a 4.0 scale: a non-4.0 denominator rescales as
//! `gpa / scale * 4.0`, and a bare value above 4 is read as a 5.0-scale grade.
//! The second number of an `N/M` pair is assumed to be the scale; a resume
//! using a ratio for unrelated reasons will be mis-read (known limitation).

/// Extract a GPA from `text`, normalized to a 4.0 scale. Returns 0.0 when no
/// pattern matches.
pub fn extract_gpa(text: &str) -> f64 {
    if let Some(gpa) = explicit_gpa(text) {
        return gpa;
    }
    if let Some(gpa) = ratio_near_gpa(text) {
        return gpa;
    }
    bare_value_on_grade_line(text).unwrap_or(0.0)
}

/// Pattern 1: `GPA[:]? N.NN[/M.MM]`.
fn explicit_gpa(text: &str) -> Option<f64> {
    let re = regex!(r"(?i)GPA[:\s]*([0-4](?:\.\d{1,2})?)\s*(?:/\s*([0-9](?:\.\d{1,2})?))?");
    let caps = re.captures(text)?;
    let gpa: f64 = caps.get(1)?.as_str().parse().ok()?;
    let scale: f64 = caps.get(2).and_then(|m| m.as_str().parse().ok()).unwrap_or(4.0);
    Some(rescale(gpa, scale))
}

/// Pattern 2: `N.NN / M.MM` on a line that mentions "gpa".
fn ratio_near_gpa(text: &str) -> Option<f64> {
    let re = regex!(r"(\d\.\d{1,2})\s*/\s*(\d(?:\.\d{1,2})?)");
    for line in text.lines() {
        if !line.to_lowercase().contains("gpa") {
            continue;
        }
        if let Some(caps) = re.captures(line) {
            let gpa: f64 = caps.get(1)?.as_str().parse().ok()?;
            let scale: f64 = caps.get(2)?.as_str().parse().ok()?;
            return Some(rescale(gpa, scale));
        }
    }
    None
}

/// Pattern 3: bare `N.NN` on a gpa/grade line, accepted only in `[0, 5]`.
fn bare_value_on_grade_line(text: &str) -> Option<f64> {
    let re = regex!(r"(\d\.\d{1,2})");
    for line in text.lines() {
        let lower = line.to_lowercase();
        if !lower.contains("gpa") && !lower.contains("grade") {
            continue;
        }
        if let Some(caps) = re.captures(line) {
            let value: f64 = caps.get(1)?.as_str().parse().ok()?;
            if (0.0..=5.0).contains(&value) {
                // A bare value above 4 can only be a 5.0-scale grade.
                return Some(if value > 4.0 { rescale(value, 5.0) } else { value });
            }
        }
    }
    None
}

fn rescale(gpa: f64, scale: f64) -> f64 {
    if scale != 4.0 && scale > 0.0 { gpa / scale * 4.0 } else { gpa }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, input: &str) {
        assert!((actual - expected).abs() < 1e-9, "input {input:?}: expected {expected}, got {actual}");
    }

    #[test]
    fn gpa_examples_matching() {
        // Array of (expected_value, input_string)
        let cases: Vec<(f64, &str)> = vec![
            (3.75, "GPA: 3.75"),
            (3.9, "GPA 3.9"),
            (2.8, "GPA: 3.5/5.0"),
            (3.6, "GPA: 3.6/4.0"),
            (4.0, "gpa: 4.0"),
            (2.8, "Cumulative GPA 3.5 / 5.0"),
            (3.2, "Grade point average listed as 3.2 gpa"),
            (0.0, "no academic numbers here"),
            (0.0, "3.9 appears without any academic context"),
            (0.0, ""),
        ];
        for (expected, input) in cases {
            assert_close(extract_gpa(input), expected, input);
        }
    }

    #[test]
    fn bare_value_requires_grade_context_and_bounds() {
        assert_close(extract_gpa("grade: 3.8"), 3.8, "grade: 3.8");
        // 9.5 exceeds the [0, 5] acceptance window for bare values.
        assert_close(extract_gpa("grade: 9.5"), 0.0, "grade: 9.5");
        // A bare 4.5 is read as a 5.0-scale grade: stored value stays in [0, 4].
        assert_close(extract_gpa("grade: 4.5"), 3.6, "grade: 4.5");
    }

    #[test]
    fn stored_value_is_always_in_unit_scale() {
        for input in ["GPA: 3.5/5.0", "GPA 3.9", "grade: 4.5", "gpa 4.0/4.0"] {
            let gpa = extract_gpa(input);
            assert!((0.0..=4.0).contains(&gpa), "input {input:?} produced out-of-range gpa {gpa}");
        }
    }
}
