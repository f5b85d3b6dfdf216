//! Telegram MarkdownV2 building blocks
//!
//! Replies are assembled from escaped fragments so user-provided text can
//! never break the markup.

/// Escapes special characters for Telegram's MarkdownV2 format.
///
/// Telegram requires escaping of:
/// `_`, `*`, `[`, `]`, `(`, `)`, `~`, `` ` ``, `>`, `#`, `+`, `-`, `=`, `|`, `{`, `}`, `.`, `!`
///
/// The backslash itself is escaped first so nothing gets escaped twice.
///
/// # Example
///
/// ```
/// use gakrcore::core::markdown::escape;
///
/// assert_eq!(escape("Hello. World!"), "Hello\\. World\\!");
/// ```
pub fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '_' | '*' | '[' | ']' | '(' | ')' | '~' | '`' | '>' | '#' | '+' | '-' | '=' | '|' | '{' | '}' | '.'
            | '!' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}

/// Escapes text placed inside a code span: only `` ` `` and `\` are special there.
pub fn escape_code(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        if c == '`' || c == '\\' {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

/// Escapes the URL part of an inline link: only `)` and `\` are special there.
pub fn escape_link_url(url: &str) -> String {
    let mut result = String::with_capacity(url.len() + 4);
    for c in url.chars() {
        if c == ')' || c == '\\' {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

/// `*text*`
pub fn bold(text: &str) -> String {
    format!("*{}*", escape(text))
}

/// `` `text` ``
pub fn code(text: &str) -> String {
    format!("`{}`", escape_code(text))
}

/// `[label](url)`
pub fn link(label: &str, url: &str) -> String {
    format!("[{}]({})", escape(label), escape_link_url(url))
}

/// Renders MarkdownV2 back to the text a user would see.
///
/// Escapes are resolved, `*`, `_` and `~` markers dropped, code spans kept
/// verbatim and links reduced to their label.
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    let mut in_code = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '`' => in_code = !in_code,
            _ if in_code => out.push(c),
            '*' | '_' | '~' | '[' => {}
            ']' => {
                let mut lookahead = chars.clone();
                if lookahead.next() == Some('(') {
                    chars = lookahead;
                    let mut escaped = false;
                    for u in chars.by_ref() {
                        if escaped {
                            escaped = false;
                        } else if u == '\\' {
                            escaped = true;
                        } else if u == ')' {
                            break;
                        }
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}
