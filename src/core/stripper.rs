use crate::domain::model::{RemovedBlock, ResourceTarget, StripOutcome};
use crate::utils::error::Result;
use regex::Regex;

/// Header of a top-level resource: `  <Name>:`, its `Type:` line and `Properties:`.
pub fn header_pattern(target: &ResourceTarget) -> Result<Regex> {
    let pattern = format!(
        r"(?m)^  {}:\s+Type: {}\s+Properties:",
        regex::escape(&target.name),
        regex::escape(&target.resource_type)
    );
    Ok(Regex::new(&pattern)?)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// `\n` + two spaces + a word character: the next top-level key starts after this newline.
fn starts_top_level_entry(text: &str, at: usize) -> bool {
    text.as_bytes().get(at) == Some(&b'\n')
        && text[at..]
            .strip_prefix("\n  ")
            .and_then(|rest| rest.chars().next())
            .is_some_and(is_word_char)
}

/// Scans a block body starting at `from` and returns the offset of the newline that
/// ends it.
///
/// The body is a run of plain characters and single-level `{...}` groups. A boundary
/// inside a brace group does not count. A stray `}` or a nested/unclosed `{` means
/// there is no valid body, as does reaching the end of the text.
fn block_end(text: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = from;

    while i < bytes.len() {
        if starts_top_level_entry(text, i) {
            return Some(i);
        }
        match bytes[i] {
            b'{' => {
                let rest = &text[i + 1..];
                let close = rest.find(|c: char| c == '{' || c == '}')?;
                if rest.as_bytes()[close] != b'}' {
                    return None;
                }
                i += close + 2;
            }
            b'}' => return None,
            // multi-byte chars never contain braces or newlines, stepping bytes is fine
            _ => i += 1,
        }
    }

    None
}

fn line_number(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}

/// Removes every block declared for `target`, together with the newline that ends it.
pub fn remove_blocks(text: &str, target: &ResourceTarget) -> Result<(String, Vec<RemovedBlock>)> {
    let header = header_pattern(target)?;

    let mut output = String::with_capacity(text.len());
    let mut removed = Vec::new();
    let mut copied_up_to = 0;
    let mut search_from = 0;

    while let Some(found) = header.find_at(text, search_from) {
        let Some(boundary) = block_end(text, found.end()) else {
            search_from = found.end();
            continue;
        };

        let span_end = boundary + 1;
        output.push_str(&text[copied_up_to..found.start()]);
        removed.push(RemovedBlock {
            name: target.name.clone(),
            resource_type: target.resource_type.clone(),
            start_line: line_number(text, found.start()),
            line_count: text[found.start()..span_end].matches('\n').count(),
        });

        copied_up_to = span_end;
        search_from = span_end;
    }

    output.push_str(&text[copied_up_to..]);
    Ok((output, removed))
}

/// Collapses every whitespace run holding three or more newlines into a single blank line.
pub fn collapse_blank_lines(text: &str) -> Result<String> {
    let blank_run = Regex::new(r"\n\s*\n\s*\n")?;
    Ok(blank_run.replace_all(text, "\n\n").into_owned())
}

pub fn strip_resources(text: &str, targets: &[ResourceTarget]) -> Result<StripOutcome> {
    let mut content = text.to_string();
    let mut removed = Vec::new();
    let mut missed = Vec::new();

    for target in targets {
        let (next, blocks) = remove_blocks(&content, target)?;

        if blocks.is_empty() {
            tracing::debug!("No {} ({}) block found", target.name, target.resource_type);
            missed.push(target.clone());
        }

        removed.extend(blocks);
        content = next;
    }

    Ok(StripOutcome {
        content: collapse_blank_lines(&content)?,
        removed,
        missed,
    })
}
