//! Console rendering: banner, prompt, per-turn replies, and error report.
//!
//! Everything here writes plain text to the session's output so the same
//! code serves both a terminal and an in-memory buffer.

use std::fmt;
use std::io::{self, Write};

use crate::constants::{BANNER, FAREWELL, PROCESSING, PROMPT, RESTART_HINT};

use super::chat::AgentReply;

pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    for line in BANNER {
        writeln!(out, "{line}")?;
    }
    writeln!(out)
}

/// Print the input prompt without a newline and flush so it shows up.
pub fn write_prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()
}

pub fn write_processing(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{PROCESSING}")?;
    out.flush()
}

/// One `Label: text` line per reply, framed by blank lines.
pub fn write_replies(out: &mut impl Write, replies: &[AgentReply]) -> io::Result<()> {
    writeln!(out)?;
    for reply in replies {
        writeln!(out, "{}: {}", reply.label, reply.text)?;
    }
    writeln!(out)?;
    out.flush()
}

pub fn write_error(out: &mut impl Write, err: &dyn fmt::Display) -> io::Result<()> {
    writeln!(out, "\nAn unexpected error occurred: {err}")?;
    writeln!(out, "{RESTART_HINT}")?;
    out.flush()
}

pub fn write_farewell(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{FAREWELL}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn replies_render_one_labelled_line_each() {
        let replies = vec![
            AgentReply {
                agent: "TweetAnswerer".to_string(),
                label: "Answer".to_string(),
                text: "Paris. #QuickFact".to_string(),
            },
            AgentReply {
                agent: "SentimentAnalyzer".to_string(),
                label: "Sentiment".to_string(),
                text: "Neutral. #SentimentAnalysis".to_string(),
            },
        ];
        let mut out = Vec::new();
        write_replies(&mut out, &replies).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nAnswer: Paris. #QuickFact\nSentiment: Neutral. #SentimentAnalysis\n\n"
        );
    }

    #[test]
    fn banner_ends_with_a_blank_line() {
        let mut out = Vec::new();
        write_banner(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("--- Welcome to the Tweet-Style Answer"));
        assert!(text.ends_with("Type 'quit' or 'exit' to end the session.\n\n"));
    }
}
