//! Body rewriting for Droid compatibility
//!
//! Three passes run in order over each body:
//!
//! 1. Task calls: `Task repo-research-analyst(args)` becomes
//!    `Task repo-research-analyst: args`
//! 2. Slash commands: `/workflows:plan` becomes `/plan`; file paths such as
//!    `/tmp/output.md` and `/dev/null` are left alone
//! 3. Agent mentions: `@agent-security-sentinel` becomes
//!    `the security-sentinel droid`
//!
//! Matching is regex-level only. Code fences and inline code are rewritten
//! like any other text. Case folding is ASCII-only, so letters such as
//! `ſ` or the Kelvin sign never count as identifier characters.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::common::naming::{flatten_command_name, normalize_name};

/// Top-level directories that look like slash commands but are paths.
pub const PATH_LIKE_COMMANDS: &[&str] = &["dev", "tmp", "etc", "usr", "var", "bin", "home"];

fn task_call_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?m)^(\s*-?\s*)Task\s+([a-z][a-z0-9-]*)\(([^)]+)\)").expect("Invalid regex")
    })
}

fn slash_command_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i-u)/([a-z][a-z0-9_:-]*)").expect("Invalid regex"))
}

fn agent_mention_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i-u)@agent-([a-z][a-z0-9-]*)").expect("Invalid regex"))
}

/// Apply all three rewrite passes to a body.
pub fn transform_content_for_droid(body: &str) -> String {
    let result = rewrite_task_calls(body);
    let result = rewrite_slash_commands(&result);
    rewrite_agent_mentions(&result)
}

/// Rewrite `Task name(args)` lines into `Task name: args`.
///
/// Leading indentation and a `-` bullet are preserved.
pub fn rewrite_task_calls(body: &str) -> String {
    task_call_regex()
        .replace_all(body, |caps: &Captures| {
            format!(
                "{}Task {}: {}",
                &caps[1],
                normalize_name(&caps[2]),
                caps[3].trim()
            )
        })
        .into_owned()
}

/// Flatten namespaced slash command references to their leaf name.
///
/// A reference must not follow a `:` or word character (so URLs and words
/// are skipped) and must be followed by whitespace, `,` `.` `"` `'` `)` `]`
/// `}` a backtick, or the end of the text. Paths rooted at a directory in
/// [`PATH_LIKE_COMMANDS`] are not references.
pub fn rewrite_slash_commands(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut last = 0;

    for caps in slash_command_regex().captures_iter(body) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let command = &caps[1];

        let preceded_ok = body[..whole.start()]
            .chars()
            .next_back()
            .is_none_or(|c| c != ':' && !is_word_char(c));
        let followed_ok = body[whole.end()..]
            .chars()
            .next()
            .is_none_or(is_reference_terminator);

        if !preceded_ok || !followed_ok || is_path_like(command) {
            continue;
        }

        out.push_str(&body[last..whole.start()]);
        out.push('/');
        out.push_str(&flatten_command_name(command));
        last = whole.end();
    }

    out.push_str(&body[last..]);
    out
}

/// Replace `@agent-name` mentions with `the name droid`.
pub fn rewrite_agent_mentions(body: &str) -> String {
    agent_mention_regex()
        .replace_all(body, |caps: &Captures| {
            format!("the {} droid", normalize_name(&caps[1]))
        })
        .into_owned()
}

fn is_path_like(command: &str) -> bool {
    command.contains('/')
        || PATH_LIKE_COMMANDS
            .iter()
            .any(|dir| dir.eq_ignore_ascii_case(command))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_reference_terminator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '.' | '"' | '\'' | ')' | ']' | '}' | '`')
}
