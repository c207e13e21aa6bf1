//! Selection clean-up and source-note editing

/// Width of the leading run of spaces and tabs
fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

/// Strip the indentation shared by every non-blank line.
///
/// Blank lines do not count towards the common indent and lose whatever
/// leading whitespace they have up to that width. Line endings are kept.
pub fn remove_default_indent(text: &str) -> String {
    let common = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(indent_width)
        .min()
        .unwrap_or(0);

    if common == 0 {
        return text.to_string();
    }

    text.split_inclusive('\n')
        .map(|line| {
            let strip = indent_width(line).min(common);
            &line[strip..]
        })
        .collect()
}

/// Wiki link to a note by basename
pub fn wiki_link(basename: &str) -> String {
    format!("[[{}]]", basename)
}

/// Replace the first occurrence of `selection` in `source` with a link to
/// `basename`. Returns `None` when the selection is empty or not present.
pub fn insert_link(source: &str, selection: &str, basename: &str) -> Option<String> {
    if selection.is_empty() || !source.contains(selection) {
        return None;
    }
    Some(source.replacen(selection, &wiki_link(basename), 1))
}
