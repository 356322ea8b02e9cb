use crate::parsing::blocks::{
    rule::BlockRule,
    types::{Block, CodeBlock},
};

const FENCE: &str = "```";

/// A backtick fenced code block.
///
/// The block opens on a line starting with three backticks. When that line
/// also ends with a separate closing fence (`` ```code``` ``) it is a block on
/// its own. Otherwise the block runs up to and including the first later line
/// ending with a fence; an unterminated fence runs to the end of the input.
/// Longer fences such as ```` ```` ```` are accepted on either side.
pub struct CodeBlockRule;

impl CodeBlockRule {
    fn is_single_line(line: &str) -> bool {
        line.len() >= 2 * FENCE.len() && line.starts_with(FENCE) && line.ends_with(FENCE)
    }

    /// Removes every fence marker from the joined block text.
    fn strip_fences(text: &str) -> String {
        text.replace(&format!("\n{FENCE}"), "")
            .replace(&format!("{FENCE}\n"), "")
            .replace(FENCE, "")
    }
}

impl BlockRule for CodeBlockRule {
    fn name(&self) -> &'static str {
        "code-block"
    }

    fn conforms(&self, lines: &[String]) -> bool {
        lines.first().is_some_and(|l| l.starts_with(FENCE))
    }

    fn lines_consumed(&self, lines: &[String]) -> usize {
        match lines.first() {
            Some(first) if Self::is_single_line(first) => 1,
            Some(_) => lines
                .iter()
                .skip(1)
                .position(|l| l.ends_with(FENCE))
                .map_or(lines.len(), |i| i + 2),
            None => 0,
        }
    }

    fn to_block(&self, lines: &[String]) -> Block {
        let Some((first, rest)) = lines.split_first() else {
            return Block::CodeBlock(CodeBlock {
                content: String::new(),
                language: None,
            });
        };

        if Self::is_single_line(first) {
            return Block::CodeBlock(CodeBlock {
                content: Self::strip_fences(first),
                language: None,
            });
        }

        let info = first.trim_start_matches('`').trim();
        let language = (!info.is_empty()).then(|| info.to_string());

        let mut text = String::from(FENCE);
        text.push('\n');
        for (i, line) in rest.iter().enumerate() {
            // A closing run of more than three backticks collapses to one fence.
            if i + 1 == rest.len() && line.ends_with(FENCE) {
                text.push_str(line.trim_end_matches('`'));
                text.push_str(FENCE);
            } else {
                text.push_str(line);
            }
            text.push('\n');
        }

        Block::CodeBlock(CodeBlock {
            content: Self::strip_fences(&text),
            language,
        })
    }
}
