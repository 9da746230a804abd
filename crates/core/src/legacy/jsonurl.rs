// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for the JSON→URL value grammar used by v2 dashboard links.
//!
//! ```text
//! ((is,country,(US)),(is,page,(/blog)))   array of arrays
//! (US:'United States')                    object
//! ()                                      empty object
//! true  false  null  42  -1.5             literals
//! 'quoted'                                string, never a literal
//! ```
//!
//! Atoms are percent-decoded after the structure is parsed, so `(`, `)`,
//! `,` and `:` inside values arrive escaped. Inside a quoted atom `''`
//! stands for one apostrophe.

use serde_json::{Map, Number, Value};

use crate::codec::decode_uri_component;
use crate::error::{Error, Result};

const STRUCTURAL: &[u8] = b"(),:";

/// Deepest nesting accepted. Real filter values nest three levels.
pub const MAX_DEPTH: usize = 64;

/// Parses one JSON→URL value.
///
/// # Errors
///
/// Returns [`Error::MalformedFragment`] on unbalanced parentheses, trailing
/// input, nesting deeper than [`MAX_DEPTH`], or corrupt percent-encoding.
pub fn parse(text: &str) -> Result<Value> {
    let mut parser = Parser { src: text, pos: 0, depth: 0 };
    let value = parser.value()?;
    if parser.pos != text.len() {
        return Err(parser.error("unexpected trailing characters"));
    }
    Ok(value)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn error(&self, reason: &str) -> Error {
        Error::MalformedFragment {
            fragment: self.src.to_string(),
            reason: format!("{reason} at byte {}", self.pos),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn expect(&mut self, byte: u8) -> Result<()> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(&format!("expected '{}'", byte as char)))
        }
    }

    fn value(&mut self) -> Result<Value> {
        if self.peek() == Some(b'(') {
            self.composite()
        } else {
            let raw = self.raw_atom();
            atom_value(raw)
        }
    }

    /// Reads bytes up to the next structural character.
    fn raw_atom(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if STRUCTURAL.contains(&b) {
                break;
            }
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    fn composite(&mut self) -> Result<Value> {
        if self.depth == MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        self.depth += 1;
        let value = self.composite_body();
        self.depth -= 1;
        value
    }

    fn composite_body(&mut self) -> Result<Value> {
        self.expect(b'(')?;
        if self.peek() == Some(b')') {
            self.pos += 1;
            return Ok(Value::Object(Map::new()));
        }

        if self.peek() == Some(b'(') {
            let first = self.composite()?;
            return self.array_rest(first);
        }

        let raw = self.raw_atom();
        if self.peek() == Some(b':') {
            self.pos += 1;
            let key = atom_string(raw)?;
            let value = self.value()?;
            return self.object_rest(key, value);
        }
        let first = atom_value(raw)?;
        self.array_rest(first)
    }

    fn array_rest(&mut self, first: Value) -> Result<Value> {
        let mut items = vec![first];
        loop {
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    items.push(self.value()?);
                }
                Some(b')') => {
                    self.pos += 1;
                    return Ok(Value::Array(items));
                }
                _ => return Err(self.error("unterminated array")),
            }
        }
    }

    fn object_rest(&mut self, key: String, value: Value) -> Result<Value> {
        let mut map = Map::new();
        map.insert(key, value);
        loop {
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    let key = atom_string(self.raw_atom())?;
                    self.expect(b':')?;
                    let value = self.value()?;
                    map.insert(key, value);
                }
                Some(b')') => {
                    self.pos += 1;
                    return Ok(Value::Object(map));
                }
                _ => return Err(self.error("unterminated object")),
            }
        }
    }
}

/// Decodes an atom as a string, honouring apostrophe quoting.
fn atom_string(raw: &str) -> Result<String> {
    match quoted_inner(raw) {
        Some(inner) => Ok(decode_uri_component(inner)?.replace("''", "'")),
        None => decode_uri_component(raw),
    }
}

fn quoted_inner(raw: &str) -> Option<&str> {
    raw.strip_prefix('\'')?.strip_suffix('\'')
}

/// Decodes an atom, inferring literals and numbers for unquoted text.
fn atom_value(raw: &str) -> Result<Value> {
    if quoted_inner(raw).is_some() {
        return atom_string(raw).map(Value::String);
    }

    let text = decode_uri_component(raw)?;
    Ok(match text.as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => match parse_number(&text) {
            Some(n) => Value::Number(n),
            None => Value::String(text),
        },
    })
}

fn parse_number(text: &str) -> Option<Number> {
    let first = text.bytes().next()?;
    if !(first == b'-' || first.is_ascii_digit()) || text.bytes().any(|b| b.is_ascii_whitespace()) {
        return None;
    }
    serde_json::from_str::<Number>(text).ok()
}

#[cfg(test)]
#[path = "jsonurl_tests.rs"]
mod tests;
