//! Request-body encoding helpers.
//!
//! # Responsibilities
//! - Classify the declared `Content-Type` into the encodings the executor
//!   distinguishes (exact media-type parse, parameters ignored)
//! - Parse JSON-ish body text with a relaxed grammar and hand back a
//!   `serde_json::Value` for canonical re-serialization
//! - Percent-encode form bodies as a URI component
//!
//! # Design Decisions
//! - Classification parses the media type with the `mime` crate instead
//!   of substring matching, so `application/jsonx` or a charset parameter
//!   cannot misclassify a body
//! - The relaxed grammar is a real recursive-descent parser, never
//!   dynamic evaluation of user text; it accepts strict JSON plus
//!   unquoted identifier keys, single-quoted strings, and trailing commas
//! - A parse miss is a soft failure: callers fall back to sending the
//!   text verbatim

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::{Map, Number, Value};

/// Body encodings the executor distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Form,
    Other,
}

/// Classify a declared `Content-Type` value. Parameters such as
/// `charset=utf-8` are ignored; an absent or unparseable value is `Other`.
pub fn classify(content_type: Option<&str>) -> BodyKind {
    let Some(raw) = content_type else {
        return BodyKind::Other;
    };
    let Ok(media) = raw.parse::<mime::Mime>() else {
        return BodyKind::Other;
    };
    match media.essence_str() {
        "application/json" => BodyKind::Json,
        "application/x-www-form-urlencoded" => BodyKind::Form,
        _ => BodyKind::Other,
    }
}

/// Everything `encodeURI` leaves intact besides alphanumerics.
const URI_KEPT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',')
    .remove(b'#');

/// Percent-encode a form body as a URI component, leaving the characters
/// that carry form structure (`&`, `=`, …) intact.
pub fn encode_form_body(content: &str) -> String {
    utf8_percent_encode(content, URI_KEPT).to_string()
}

/// Parse body text with the relaxed JSON grammar. `None` means "not a
/// recognizable literal" and the caller sends the text verbatim.
pub fn parse_lenient(input: &str) -> Option<Value> {
    let mut cursor = Cursor::new(input);
    cursor.skip_whitespace();
    let value = cursor.parse_value()?;
    cursor.skip_whitespace();
    if cursor.at_end() {
        Some(value)
    } else {
        None
    }
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> Option<()> {
        if self.peek() == Some(expected) {
            self.bump();
            Some(())
        } else {
            None
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn parse_value(&mut self) -> Option<Value> {
        match self.peek()? {
            '{' => self.parse_object(),
            '[' => self.parse_array(),
            '"' | '\'' => self.parse_string().map(Value::String),
            c if c.is_ascii_digit() || c == '-' => self.parse_number(),
            c if c.is_alphabetic() => self.parse_keyword(),
            _ => None,
        }
    }

    fn parse_object(&mut self) -> Option<Value> {
        self.eat('{')?;
        let mut object = Map::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some('}') {
                self.bump();
                return Some(Value::Object(object));
            }
            let key = match self.peek()? {
                '"' | '\'' => self.parse_string()?,
                _ => self.parse_identifier()?,
            };
            self.skip_whitespace();
            self.eat(':')?;
            self.skip_whitespace();
            let value = self.parse_value()?;
            object.insert(key, value);
            self.skip_whitespace();
            match self.peek()? {
                ',' => {
                    self.bump();
                }
                '}' => {}
                _ => return None,
            }
        }
    }

    fn parse_array(&mut self) -> Option<Value> {
        self.eat('[')?;
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some(']') {
                self.bump();
                return Some(Value::Array(items));
            }
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek()? {
                ',' => {
                    self.bump();
                }
                ']' => {}
                _ => return None,
            }
        }
    }

    fn parse_string(&mut self) -> Option<String> {
        let quote = self.bump()?;
        let mut text = String::new();
        loop {
            let c = self.bump()?;
            if c == quote {
                return Some(text);
            }
            if c != '\\' {
                text.push(c);
                continue;
            }
            match self.bump()? {
                'n' => text.push('\n'),
                't' => text.push('\t'),
                'r' => text.push('\r'),
                'b' => text.push('\u{0008}'),
                'f' => text.push('\u{000C}'),
                '/' => text.push('/'),
                '\\' => text.push('\\'),
                '"' => text.push('"'),
                '\'' => text.push('\''),
                'u' => {
                    let mut code = 0u32;
                    for _ in 0..4 {
                        code = code * 16 + self.bump()?.to_digit(16)?;
                    }
                    text.push(char::from_u32(code)?);
                }
                _ => return None,
            }
        }
    }

    /// Bare object key: identifier characters only.
    fn parse_identifier(&mut self) -> Option<String> {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '$' {
                name.push(c);
                self.bump();
            } else {
                break;
            }
        }
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    fn parse_number(&mut self) -> Option<Value> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'))
        {
            self.bump();
        }
        let text = &self.input[start..self.pos];
        if let Ok(i) = text.parse::<i64>() {
            return Some(Value::Number(Number::from(i)));
        }
        text.parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
    }

    fn parse_keyword(&mut self) -> Option<Value> {
        match self.parse_identifier()?.as_str() {
            "true" => Some(Value::Bool(true)),
            "false" => Some(Value::Bool(false)),
            "null" => Some(Value::Null),
            _ => None,
        }
    }
}
