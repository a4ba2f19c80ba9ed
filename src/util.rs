//! Small string and error helpers shared across the driver.

use rand::Rng;

const ALPHA_NUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Join two paths with exactly one `file_sep` between them.
///
/// Both halves are trimmed. A blank left half returns `right` unchanged.
/// Stage paths are not normalized: `a//b` and `a/b` name different files.
pub fn concat_file_path_names(left: &str, right: &str, file_sep: &str) -> String {
    let left_trimmed = left.trim();
    let right_trimmed = right.trim();

    if left_trimmed.is_empty() {
        return right.to_string();
    }

    let left_has = left_trimmed.ends_with(file_sep);
    let right_has = right_trimmed.starts_with(file_sep);

    match (left_has, right_has) {
        (true, true) => format!("{}{}", left_trimmed, &right_trimmed[file_sep.len()..]),
        (false, false) => format!("{}{}{}", left_trimmed, file_sep, right_trimmed),
        _ => format!("{}{}", left_trimmed, right_trimmed),
    }
}

/// Longest common prefix of two strings, or `None` if either is `None`.
pub fn greatest_common_prefix(a: Option<&str>, b: Option<&str>) -> Option<String> {
    let (a, b) = (a?, b?);
    Some(
        a.chars()
            .zip(b.chars())
            .take_while(|(x, y)| x == y)
            .map(|(x, _)| x)
            .collect(),
    )
}

/// True for `None`, the empty string, or whitespace only.
pub fn is_blank(input: Option<&str>) -> bool {
    input.map_or(true, |s| s.chars().all(char::is_whitespace))
}

/// Random string of `count` characters from `A-Z0-9`.
pub fn random_alphanumeric(count: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| ALPHA_NUMERIC[rng.gen_range(0..ALPHA_NUMERIC.len())] as char)
        .collect()
}

/// Innermost error in a `source()` chain.
pub fn root_cause<'a>(err: &'a (dyn std::error::Error + 'static)) -> &'a (dyn std::error::Error + 'static) {
    let mut cause = err;
    while let Some(next) = cause.source() {
        cause = next;
    }
    cause
}
