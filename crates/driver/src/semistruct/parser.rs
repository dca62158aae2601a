//! Parser — the concrete grammar for `!<` semi-structured payloads.
//!
//! ```text
//! line     := "!<" ws* priority (ws+ token)* ws* ">" rest?
//! priority := decimal integer, 0..=7 (syslog ordinals)
//! token    := attr | tag
//! attr     := key "=" value
//! key      := 1+ chars, none of { ws, '=', '>' }
//! value    := '"' (escape | any-but-quote)* '"' | bare
//! bare     := 0+ chars, none of { ws, '>' }
//! tag      := 1+ chars, none of { ws, '=', '>' }
//! rest     := arbitrary trailing text, not part of the grammar
//! ```
//!
//! Escapes inside quoted values are `\"` and `\\`. Everything after the
//! closing `>` is ordinary message text and ignored here; the caller
//! forwards the whole original line regardless of parse outcome.
//!
//! Examples:
//!
//! ```text
//! !<3 tag1 tag2 key=val>rest of message
//! !<6 request path="/api/users" status=200>
//! !<4>plain warning, no tags or attributes
//! ```

use std::collections::HashMap;
use std::iter::Peekable;
use std::str::Chars;

use super::model::{ParseError, ParsedRecord};
use super::{MAX_LINE_SIZE, SENTINEL};
use crate::sink::Priority;

/// Stateless parser for the semi-structured grammar.
///
/// Holds no per-line state, so one instance can be shared across
/// concurrent `log` calls without locking.
#[derive(Debug, Default, Clone, Copy)]
pub struct SemistructParser;

impl SemistructParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a line that already passed the sentinel detector.
    ///
    /// Parsing one line never depends on, or affects, any other line.
    pub fn parse(&self, raw: &[u8]) -> Result<ParsedRecord, ParseError> {
        if raw.len() > MAX_LINE_SIZE {
            return Err(ParseError::LineTooLarge(raw.len(), MAX_LINE_SIZE));
        }
        if !raw.starts_with(SENTINEL) {
            return Err(ParseError::MissingSentinel);
        }

        let payload = std::str::from_utf8(&raw[SENTINEL.len()..])
            .map_err(|_| ParseError::NonUtf8)?;
        let mut chars = payload.chars().peekable();

        let priority = parse_priority(&mut chars)?;

        let mut tags = Vec::new();
        let mut attrs = HashMap::new();

        loop {
            skip_whitespace(&mut chars);
            match chars.peek() {
                None => return Err(ParseError::Truncated),
                Some('>') => {
                    chars.next();
                    break;
                }
                Some(_) => {}
            }

            let token = read_token(&mut chars);
            if chars.peek() == Some(&'=') {
                chars.next();
                if token.is_empty() {
                    return Err(ParseError::EmptyAttrKey);
                }
                let value = read_value(&mut chars)?;
                // Last occurrence of a repeated key wins.
                attrs.insert(token, value);
            } else {
                tags.push(token);
            }
        }

        Ok(ParsedRecord { priority, tags, attrs })
    }
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

/// Read a bare token: characters up to whitespace, `=`, or `>`.
fn read_token(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut token = String::new();
    while let Some(&c) = chars.peek() {
        if c == '=' || c == '>' || c.is_whitespace() {
            break;
        }
        token.push(c);
        chars.next();
    }
    token
}

fn parse_priority(chars: &mut Peekable<Chars<'_>>) -> Result<Priority, ParseError> {
    skip_whitespace(chars);
    let token = read_token(chars);
    if token.is_empty() {
        return Err(ParseError::MissingPriority);
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidPriority(token));
    }
    let ordinal: u64 = token
        .parse()
        .map_err(|_| ParseError::InvalidPriority(token.clone()))?;
    u8::try_from(ordinal)
        .ok()
        .and_then(Priority::from_ordinal)
        .ok_or(ParseError::PriorityOutOfRange(ordinal))
}

/// Read an attribute value: double-quoted with `\"`/`\\` escapes, or
/// bare up to whitespace or `>`. A bare value may be empty (`key=`).
fn read_value(chars: &mut Peekable<Chars<'_>>) -> Result<String, ParseError> {
    let mut value = String::new();

    if chars.peek() == Some(&'"') {
        chars.next();
        let mut escaped = false;
        loop {
            let Some(c) = chars.next() else {
                // Quote never closed, so the payload cannot close either.
                return Err(ParseError::Truncated);
            };
            if escaped {
                value.push(c);
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                return Ok(value);
            } else {
                value.push(c);
            }
        }
    }

    while let Some(&c) = chars.peek() {
        if c == '>' || c.is_whitespace() {
            break;
        }
        value.push(c);
        chars.next();
    }
    Ok(value)
}
