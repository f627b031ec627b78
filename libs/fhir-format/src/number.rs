//! Number literals exactly as written.
//!
//! With `arbitrary_precision` serde_json keeps the digits of a number but
//! still rewrites its exponent: `1.0e2` is stored as `1.0e+2` and `1E5` as
//! `1e+5`. After a parse, [`restore_literals`] reads the literals again from
//! the source text and puts back every one whose spelling was changed.

use serde_json::{Number, Value};
use std::borrow::Cow;

/// A JSON number that serializes as exactly `text`.
///
/// Returns `None` unless `text` is a valid JSON number.
pub fn exact_number(text: &str) -> Option<Number> {
    text.parse::<Number>().ok()?;
    Some(Number::from_string_unchecked(text.to_string()))
}

/// Give every number in `value` the spelling it has in `source`, the text
/// `value` was parsed from.
pub(crate) fn restore_literals(source: &str, value: &mut Value) {
    if !has_exponent(value) {
        return;
    }
    let mut cursor = Cursor { source, pos: 0 };
    // `source` already parsed; a `None` here only means there is nothing more
    // to restore.
    let _ = cursor.walk(Some(value));
}

fn has_exponent(value: &Value) -> bool {
    match value {
        Value::Number(number) => number.as_str().contains('e'),
        Value::Array(items) => items.iter().any(has_exponent),
        Value::Object(fields) => fields.values().any(has_exponent),
        _ => false,
    }
}

/// serde_json's spelling of a literal: lowercase `e`, explicit exponent sign.
fn normalized(literal: &str) -> Cow<'_, str> {
    let Some(at) = literal.find(['e', 'E']) else {
        return Cow::Borrowed(literal);
    };
    let (mantissa, exponent) = literal.split_at(at);
    let digits = &exponent[1..];
    if digits.starts_with(['+', '-']) {
        Cow::Owned(format!("{}e{}", mantissa, digits))
    } else {
        Cow::Owned(format!("{}e+{}", mantissa, digits))
    }
}

struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, byte: u8) -> Option<()> {
        self.skip_whitespace();
        if self.peek()? != byte {
            return None;
        }
        self.pos += 1;
        Some(())
    }

    /// A string literal, quotes included.
    fn string(&mut self) -> Option<&'a str> {
        let start = self.pos;
        self.pos += 1;
        loop {
            match self.peek()? {
                b'\\' => self.pos += 2,
                b'"' => {
                    self.pos += 1;
                    return self.source.get(start..self.pos);
                }
                _ => self.pos += 1,
            }
        }
    }

    fn key(&mut self) -> Option<Cow<'a, str>> {
        self.skip_whitespace();
        let literal = self.string()?;
        if literal.contains('\\') {
            serde_json::from_str::<String>(literal).ok().map(Cow::Owned)
        } else {
            literal.get(1..literal.len() - 1).map(Cow::Borrowed)
        }
    }

    fn number(&mut self) -> Option<&'a str> {
        let start = self.pos;
        while matches!(
            self.peek(),
            Some(b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E')
        ) {
            self.pos += 1;
        }
        self.source.get(start..self.pos)
    }

    /// Step over one value in the source, restoring numbers in `target` (the
    /// parsed value at the same position, if there is one).
    fn walk(&mut self, target: Option<&mut Value>) -> Option<()> {
        self.skip_whitespace();
        match self.peek()? {
            b'{' => {
                self.pos += 1;
                let mut fields = match target {
                    Some(Value::Object(fields)) => Some(fields),
                    _ => None,
                };
                self.skip_whitespace();
                if self.peek()? == b'}' {
                    self.pos += 1;
                    return Some(());
                }
                loop {
                    let key = self.key()?;
                    self.expect(b':')?;
                    // With a duplicate key only the last value survived the
                    // parse; earlier ones fail the spelling check below.
                    let child = fields.as_mut().and_then(|f| f.get_mut(key.as_ref()));
                    self.walk(child)?;
                    self.skip_whitespace();
                    match self.peek()? {
                        b',' => self.pos += 1,
                        b'}' => {
                            self.pos += 1;
                            return Some(());
                        }
                        _ => return None,
                    }
                }
            }
            b'[' => {
                self.pos += 1;
                let mut items = match target {
                    Some(Value::Array(items)) => Some(items),
                    _ => None,
                };
                self.skip_whitespace();
                if self.peek()? == b']' {
                    self.pos += 1;
                    return Some(());
                }
                let mut index = 0;
                loop {
                    let child = items.as_mut().and_then(|i| i.get_mut(index));
                    self.walk(child)?;
                    index += 1;
                    self.skip_whitespace();
                    match self.peek()? {
                        b',' => self.pos += 1,
                        b']' => {
                            self.pos += 1;
                            return Some(());
                        }
                        _ => return None,
                    }
                }
            }
            b'"' => self.string().map(|_| ()),
            b't' | b'f' | b'n' => {
                while matches!(self.peek(), Some(b'a'..=b'z')) {
                    self.pos += 1;
                }
                Some(())
            }
            _ => {
                let literal = self.number()?;
                if let Some(Value::Number(number)) = target {
                    if number.as_str() != literal && normalized(literal) == number.as_str() {
                        if let Some(exact) = exact_number(literal) {
                            *number = exact;
                        }
                    }
                }
                Some(())
            }
        }
    }
}
