// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use console::style;
use tsrt_vm::{Value, to_boolean, to_number, to_string, type_of};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralError {
    message: &'static str,
    offset: usize,
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.message, self.offset)
    }
}

impl std::error::Error for LiteralError {}

/// Reads a single literal: `undefined`, `null`, booleans, numbers
/// (including `NaN` and `Infinity`), quoted strings and bracketed lists of
/// literals.
pub fn read_literal(source: &str) -> Result<Value, LiteralError> {
    let mut reader = LiteralReader { source, offset: 0 };
    let value = reader.read_value()?;
    reader.skip_whitespace();
    if reader.offset != source.len() {
        return Err(reader.error("unexpected trailing input"));
    }
    Ok(value)
}

struct LiteralReader<'a> {
    source: &'a str,
    offset: usize,
}

impl LiteralReader<'_> {
    fn rest(&self) -> &str {
        &self.source[self.offset..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn error(&self, message: &'static str) -> LiteralError {
        LiteralError {
            message,
            offset: self.offset,
        }
    }

    fn read_value(&mut self) -> Result<Value, LiteralError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.error("expected a literal")),
            Some('[') => self.read_list(),
            Some(quote @ ('"' | '\'')) => self.read_string(quote),
            Some(_) => self.read_word(),
        }
    }

    fn read_list(&mut self) -> Result<Value, LiteralError> {
        self.bump();
        let mut elements = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.bump();
            return Ok(Value::from(elements));
        }
        loop {
            elements.push(self.read_value()?);
            self.skip_whitespace();
            match self.bump() {
                Some(',') => continue,
                Some(']') => return Ok(Value::from(elements)),
                _ => return Err(self.error("expected ',' or ']'")),
            }
        }
    }

    fn read_string(&mut self, quote: char) -> Result<Value, LiteralError> {
        self.bump();
        let mut text = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some('\\') => match self.bump() {
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some(c) => text.push(c),
                    None => return Err(self.error("unterminated string")),
                },
                Some(c) if c == quote => return Ok(Value::from(text)),
                Some(c) => text.push(c),
            }
        }
    }

    fn read_word(&mut self) -> Result<Value, LiteralError> {
        let start = self.offset;
        while self
            .peek()
            .is_some_and(|c| !c.is_whitespace() && c != ',' && c != ']')
        {
            self.bump();
        }
        let word = &self.source[start..self.offset];
        Ok(match word {
            "undefined" => Value::Undefined,
            "null" => Value::Null,
            "true" => Value::from(true),
            "false" => Value::from(false),
            "NaN" => Value::nan(),
            _ => {
                let number = to_number(&Value::from(word));
                if number.is_nan() {
                    return Err(LiteralError {
                        message: "not a literal",
                        offset: start,
                    });
                }
                Value::from(number)
            }
        })
    }
}

/// Prints what the coercions make of `value`.
pub fn print_inspection(value: &Value) {
    println!("{}", style(value.string_repr()).bold());
    println!("  typeof    {}", type_of(value));
    println!("  ToNumber  {}", to_number(value));
    println!("  ToString  {:?}", to_string(value).as_str());
    println!("  ToBoolean {}", to_boolean(value));
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_keywords_and_numbers() {
        assert_eq!(read_literal("undefined").unwrap(), Value::Undefined);
        assert_eq!(read_literal(" null ").unwrap(), Value::Null);
        assert_eq!(read_literal("true").unwrap(), Value::from(true));
        assert!(read_literal("NaN").unwrap().is_nan());
        assert_eq!(read_literal("-Infinity").unwrap(), Value::neg_inf());
        assert_eq!(read_literal("1.5e2").unwrap(), Value::from(150));
        assert_eq!(read_literal("0x10").unwrap(), Value::from(16));
    }

    #[test]
    fn reads_strings_and_lists() {
        assert_eq!(read_literal("'a b'").unwrap(), Value::from("a b"));
        assert_eq!(read_literal(r#""say \"hi\"""#).unwrap(), Value::from("say \"hi\""));
        assert_eq!(
            read_literal("[1, 'x', [null]]").unwrap(),
            Value::from(vec![
                Value::from(1),
                Value::from("x"),
                Value::from(vec![Value::Null]),
            ])
        );
        assert_eq!(read_literal("[]").unwrap(), Value::from(Vec::new()));
    }

    #[test]
    fn rejects_garbage() {
        assert!(read_literal("").is_err());
        assert!(read_literal("foo").is_err());
        assert!(read_literal("'open").is_err());
        assert!(read_literal("[1 2]").is_err());
        assert!(read_literal("1 2").is_err());
    }
}
