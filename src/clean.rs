/// Lines containing any of these substrings are navigation or footer noise.
pub const BLACKLIST: [&str; 4] = ["Sign In", "Sign Out", "All Articles", "Home"];

/// Collapses every run of consecutive `\n` into a single one.
pub fn collapse_line_breaks(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last_was_break = false;

    for ch in text.chars() {
        if ch == '\n' {
            if last_was_break {
                continue;
            }
            last_was_break = true;
        } else {
            last_was_break = false;
        }
        result.push(ch);
    }

    result
}

/// Case-sensitive substring match, so "Homework" counts as noise too.
pub fn is_noise(line: &str) -> bool {
    BLACKLIST.iter().any(|term| line.contains(term))
}

/// Turns raw extracted content into trimmed, non-empty, noise-free lines.
pub fn clean_text(text: &str) -> Vec<String> {
    collapse_line_breaks(text)
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !is_noise(line))
        .map(String::from)
        .collect()
}
