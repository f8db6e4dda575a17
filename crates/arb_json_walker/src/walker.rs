use crate::error::{JsonSyntaxError, JsonSyntaxResult};
use crate::util::char_length_from_byte;

/// A scalar JSON value as it appears in the source. Strings are given raw, without their
/// surrounding quotes and without decoding escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonValue<'a> {
    String(&'a str),
    Number(&'a str),
    Bool(bool),
    Null,
}

impl<'a> JsonValue<'a> {
    pub fn as_raw_str(&self) -> Option<&'a str> {
        match self {
            JsonValue::String(raw) => Some(raw),
            _ => None,
        }
    }
}

/// Callbacks for each structural event in a JSON document. All offsets are byte offsets into the
/// walked text. Lengths for strings include both quotes, so `offset + length` is always the byte
/// immediately after the token.
pub trait JsonVisitor {
    fn on_object_begin(&mut self, _offset: usize) {}
    fn on_object_property(&mut self, _name: &str, _offset: usize, _length: usize) {}
    fn on_object_end(&mut self, _offset: usize, _length: usize) {}
    fn on_array_begin(&mut self, _offset: usize) {}
    fn on_array_end(&mut self, _offset: usize, _length: usize) {}
    fn on_literal_value(&mut self, _value: JsonValue, _offset: usize, _length: usize) {}
}

/// How many objects and arrays may be open at once before the walk is aborted.
pub const MAX_NESTING_DEPTH: usize = 128;

pub struct JsonWalker<'a> {
    text: &'a str,
    position: usize,
    depth: usize,
}

impl<'a> JsonWalker<'a> {
    pub fn new(text: &'a str) -> JsonWalker<'a> {
        Self {
            text,
            position: 0,
            depth: 0,
        }
    }

    fn enter(&mut self) -> JsonSyntaxResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(JsonSyntaxError::NestingTooDeep {
                offset: self.position,
            });
        }
        self.depth += 1;
        Ok(())
    }

    #[inline]
    fn current(&self) -> u8 {
        self.text.as_bytes()[self.position]
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.position).copied()
    }

    #[inline]
    fn peek_at(&self, n: usize) -> Option<u8> {
        self.text.as_bytes().get(self.position + n).copied()
    }

    #[inline]
    fn current_slice(&self) -> &'a [u8] {
        &self.text.as_bytes()[self.position..]
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.position >= self.text.len()
    }

    fn unexpected(&self, expected: &'static str) -> JsonSyntaxError {
        match self.text[self.position..].chars().next() {
            Some(found) => JsonSyntaxError::UnexpectedCharacter {
                found,
                expected,
                offset: self.position,
            },
            None => JsonSyntaxError::UnexpectedEof {
                offset: self.position,
            },
        }
    }

    fn expect(&mut self, expected: u8, description: &'static str) -> JsonSyntaxResult<()> {
        if self.peek() == Some(expected) {
            self.position += 1;
            return Ok(());
        }
        Err(self.unexpected(description))
    }

    /// Walk the entire text as a single value, requiring that nothing but whitespace follows it.
    pub fn walk<V: JsonVisitor>(&mut self, visitor: &mut V) -> JsonSyntaxResult<()> {
        self.skip_trivia()?;
        self.parse_value(visitor)?;
        self.skip_trivia()?;
        if !self.is_eof() {
            return Err(self.unexpected("end of input"));
        }
        Ok(())
    }

    fn skip_trivia(&mut self) -> JsonSyntaxResult<()> {
        while let Some(byte) = self.peek() {
            match byte {
                b' ' | b'\t' | b'\n' | b'\r' => self.position += 1,
                b'/' if matches!(self.peek_at(1), Some(b'/' | b'*')) => {
                    return Err(JsonSyntaxError::CommentNotAllowed {
                        offset: self.position,
                    });
                }
                _ => break,
            }
        }
        Ok(())
    }

    fn parse_value<V: JsonVisitor>(&mut self, visitor: &mut V) -> JsonSyntaxResult<()> {
        let offset = self.position;
        match self.peek() {
            None => Err(JsonSyntaxError::UnexpectedEof { offset }),
            Some(b'{') => self.parse_object(visitor),
            Some(b'[') => self.parse_array(visitor),
            Some(b'"') => {
                let raw = self.parse_string()?;
                visitor.on_literal_value(JsonValue::String(raw), offset, self.position - offset);
                Ok(())
            }
            Some(b't') => self.parse_keyword("true", JsonValue::Bool(true), visitor),
            Some(b'f') => self.parse_keyword("false", JsonValue::Bool(false), visitor),
            Some(b'n') => self.parse_keyword("null", JsonValue::Null, visitor),
            Some(b'-' | b'0'..=b'9') => self.parse_number(visitor),
            Some(_) => Err(self.unexpected("a value")),
        }
    }

    fn parse_object<V: JsonVisitor>(&mut self, visitor: &mut V) -> JsonSyntaxResult<()> {
        self.enter()?;
        visitor.on_object_begin(self.position);
        self.position += 1;

        loop {
            self.skip_trivia()?;
            match self.peek() {
                Some(b'}') => break,
                Some(b'"') => {}
                _ => return Err(self.unexpected("a property name or `}`")),
            }

            let name_offset = self.position;
            let name = self.parse_string()?;
            visitor.on_object_property(name, name_offset, self.position - name_offset);

            self.skip_trivia()?;
            self.expect(b':', "`:`")?;
            self.skip_trivia()?;
            self.parse_value(visitor)?;
            self.skip_trivia()?;

            match self.peek() {
                Some(b',') => self.position += 1,
                Some(b'}') => break,
                _ => return Err(self.unexpected("`,` or `}`")),
            }
        }

        visitor.on_object_end(self.position, 1);
        self.position += 1;
        self.depth -= 1;
        Ok(())
    }

    fn parse_array<V: JsonVisitor>(&mut self, visitor: &mut V) -> JsonSyntaxResult<()> {
        self.enter()?;
        visitor.on_array_begin(self.position);
        self.position += 1;

        loop {
            self.skip_trivia()?;
            if self.peek() == Some(b']') {
                break;
            }
            self.parse_value(visitor)?;
            self.skip_trivia()?;

            match self.peek() {
                Some(b',') => self.position += 1,
                Some(b']') => break,
                _ => return Err(self.unexpected("`,` or `]`")),
            }
        }

        visitor.on_array_end(self.position, 1);
        self.position += 1;
        self.depth -= 1;
        Ok(())
    }

    /// Advance past a complete string token, returning its raw content between the quotes. The
    /// parser must currently be positioned on the opening quote.
    fn parse_string(&mut self) -> JsonSyntaxResult<&'a str> {
        let start = self.position;
        self.position += 1;
        let content_start = self.position;

        loop {
            let Some(next) = memchr::memchr3(b'"', b'\\', b'\n', self.current_slice()) else {
                self.position = self.text.len();
                return Err(JsonSyntaxError::UnterminatedString { offset: start });
            };
            self.position += next;

            match self.current() {
                b'"' => {
                    let raw = &self.text[content_start..self.position];
                    self.position += 1;
                    return Ok(raw);
                }
                b'\\' => {
                    // Skip the escape and whatever single character it applies to. Longer
                    // sequences like `\uXXXX` only contain characters that can't end the string.
                    self.position += 1;
                    if self.is_eof() {
                        return Err(JsonSyntaxError::UnterminatedString { offset: start });
                    }
                    self.position += char_length_from_byte(self.current()).max(1);
                }
                _ => return Err(JsonSyntaxError::UnterminatedString { offset: start }),
            }
        }
    }

    fn parse_keyword<V: JsonVisitor>(
        &mut self,
        keyword: &'static str,
        value: JsonValue<'a>,
        visitor: &mut V,
    ) -> JsonSyntaxResult<()> {
        let offset = self.position;
        if !self.text[offset..].starts_with(keyword) {
            return Err(self.unexpected("a value"));
        }
        self.position += keyword.len();
        visitor.on_literal_value(value, offset, keyword.len());
        Ok(())
    }

    fn parse_number<V: JsonVisitor>(&mut self, visitor: &mut V) -> JsonSyntaxResult<()> {
        let offset = self.position;
        let length = self
            .current_slice()
            .iter()
            .take_while(|byte| matches!(byte, b'-' | b'+' | b'.' | b'e' | b'E' | b'0'..=b'9'))
            .count();
        let raw = &self.text[offset..offset + length];
        if !raw.bytes().any(|byte| byte.is_ascii_digit()) {
            return Err(JsonSyntaxError::InvalidNumber { offset });
        }
        self.position += length;
        visitor.on_literal_value(JsonValue::Number(raw), offset, length);
        Ok(())
    }
}
