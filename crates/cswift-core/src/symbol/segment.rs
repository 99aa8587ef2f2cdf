//! Word segmentation for `PascalCase`, `camelCase` and mixed-case identifiers.
//!
//! A run is one of: a lowercase run (only at the start of the text, or right
//! after underscores in mixed mode), a digit run, an uppercase letter followed
//! by lowercase letters, or an acronym. An acronym ends before an uppercase
//! letter that starts a lowercase word, before a digit, or at the end of the
//! text. Characters that start no run are dropped.

/// One segmented word and the underscores that preceded it (mixed mode only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Segment {
    pub joiner: Option<String>,
    pub text: String,
}

pub(super) fn segment(text: &str, mixed: bool) -> Vec<Segment> {
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    let mut out = Vec::new();
    let mut i = 0;

    while i < n {
        let mut j = i;
        if mixed {
            j = scan_while(&chars, i, |c| c == '_');
        }
        let underscores = j - i;
        let lower_allowed = j == 0 || underscores > 0;

        match run_end(&chars, j, lower_allowed, mixed) {
            Some(end) => {
                out.push(Segment {
                    joiner: (underscores > 0).then(|| "_".repeat(underscores)),
                    text: chars[j..end].iter().collect(),
                });
                i = end;
            }
            None => i += 1,
        }
    }

    out
}

fn run_end(chars: &[char], start: usize, lower_allowed: bool, mixed: bool) -> Option<usize> {
    let first = *chars.get(start)?;

    if first.is_ascii_lowercase() {
        return lower_allowed.then(|| scan_while(chars, start, |c| c.is_ascii_lowercase()));
    }
    if first.is_ascii_digit() {
        return Some(scan_while(chars, start, |c| c.is_ascii_digit()));
    }
    if !first.is_ascii_uppercase() {
        return None;
    }

    let word_end = scan_while(chars, start + 1, |c| c.is_ascii_lowercase());
    if word_end > start + 1 {
        return Some(word_end);
    }

    // Acronym: a maximal uppercase run, giving back its last letter when that
    // letter starts a lowercase word.
    let run_end = scan_while(chars, start, |c| c.is_ascii_uppercase());
    match chars.get(run_end) {
        None => Some(run_end),
        Some(c) if c.is_ascii_digit() => Some(run_end),
        Some('_') if mixed => Some(run_end),
        Some(c) if c.is_ascii_lowercase() && run_end - 1 > start => Some(run_end - 1),
        Some(_) => None,
    }
}

fn scan_while(chars: &[char], from: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut k = from;
    while k < chars.len() && pred(chars[k]) {
        k += 1;
    }
    k
}
