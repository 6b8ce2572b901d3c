//! LIKE pattern helpers shared by the in-memory executor and providers.

/// Escape SQL LIKE meta-characters so user input is treated literally.
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' | '%' | '_' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Evaluate a LIKE pattern case-insensitively against `candidate`.
///
/// `%` matches any run of characters, `_` exactly one, and `\` escapes the
/// following character. Matches ILIKE semantics closely enough for the
/// substring patterns the search providers emit.
pub fn like_match(pattern: &str, candidate: &str) -> bool {
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    let candidate: Vec<char> = candidate.to_lowercase().chars().collect();
    match_here(&pattern, &candidate)
}

fn match_here(pattern: &[char], candidate: &[char]) -> bool {
    let Some(&head) = pattern.first() else {
        return candidate.is_empty();
    };
    match head {
        '%' => {
            // Collapse runs of '%' and try every split point.
            let rest = &pattern[1..];
            (0..=candidate.len()).any(|i| match_here(rest, &candidate[i..]))
        }
        '_' => !candidate.is_empty() && match_here(&pattern[1..], &candidate[1..]),
        '\\' if pattern.len() > 1 => {
            !candidate.is_empty()
                && candidate[0] == pattern[1]
                && match_here(&pattern[2..], &candidate[1..])
        }
        c => !candidate.is_empty() && candidate[0] == c && match_here(&pattern[1..], &candidate[1..]),
    }
}
