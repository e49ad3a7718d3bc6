//! Help text wrapping for generated doc comments.

/// Total line width of wrapped doc comments, indentation included.
pub const LINE_WIDTH: usize = 120;

/// Wrap `text` into lines of at most `width` columns, each starting with `prefix`.
///
/// Runs of whitespace (including newlines) collapse to a single space.
/// Empty text yields a single line holding the prefix without trailing spaces.
pub fn wrap(text: &str, prefix: &str, width: usize) -> Vec<String> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return vec![prefix.trim_end().to_string()];
    }
    let options = textwrap::Options::new(width.max(prefix.len() + 1))
        .initial_indent(prefix)
        .subsequent_indent(prefix)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);
    textwrap::wrap(&normalized, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}
