use crate::units::Pt;

const TABSIZE: usize = 4;

/// Splits text into lines no wider than `max_width`, using `measure` to get the
/// advance of each character.
///
/// # Wrapping Behavior
///
/// Explicit newlines always end a line (`\r\n` and `\r` are normalized first,
/// tabs become four spaces). Within a line, break points are recorded after
/// every space; when a character would overflow the line, the layout rewinds
/// to the most recent break point and carries the partial word over to the
/// next line. If there is no break point (a single very long word), the word is
/// split at the exact character that overflows. Spaces at the start of a
/// wrapped line are dropped and trailing spaces are trimmed.
///
/// With `max_width` of [None] the text is only split on explicit newlines.
///
/// # Errors
///
/// The first error returned by `measure` aborts wrapping and is returned as-is.
pub fn wrap_lines<F, E>(text: &str, max_width: Option<Pt>, mut measure: F) -> Result<Vec<String>, E>
where
    F: FnMut(char) -> Result<Pt, E>,
{
    let text = text
        .replace('\t', &" ".repeat(TABSIZE))
        .replace("\r\n", "\n")
        .replace('\r', "\n");

    let mut lines: Vec<String> = Vec::new();
    for hard_line in text.split('\n') {
        let mut line: Vec<(char, Pt)> = Vec::new();
        let mut used = Pt(0.0);
        let mut break_at: Option<usize> = None;
        let mut wrapped = false;

        for ch in hard_line.chars() {
            let advance = measure(ch)?;

            if ch == ' ' {
                if line.is_empty() && wrapped {
                    continue;
                }
                line.push((ch, advance));
                used += advance;
                break_at = Some(line.len());
                continue;
            }

            if let Some(max_width) = max_width {
                if !line.is_empty() && used + advance > max_width {
                    // rewind to the last space, or split the word right here
                    let carry = match break_at.take() {
                        Some(at) if at < line.len() => line.split_off(at),
                        _ => Vec::new(),
                    };
                    lines.push(collect(&line));
                    used = carry.iter().map(|&(_, w)| w).sum();
                    line = carry;
                    wrapped = true;
                }
            }

            line.push((ch, advance));
            used += advance;
        }

        lines.push(collect(&line));
    }

    Ok(lines)
}

fn collect(line: &[(char, Pt)]) -> String {
    let text: String = line.iter().map(|&(ch, _)| ch).collect();
    text.trim_end().to_string()
}
