use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    node::node::{Node, Symbol},
    registry::registry::Registry,
    Position,
};

lazy_static! {
    static ref IDENT_RE: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref NUMBER_RE: Regex = Regex::new(r"^[0-9]+(\.[0-9]*)?").unwrap();
}

const OPERATOR_CHARS: &str = "!@#$%^*()-+=/?.,:;\"|/{}[]><";

/// On-demand lexer over a single source unit. Consumed strictly once.
pub struct Lexer<'a> {
    registry: &'a Registry,
    source: &'a str,
    offset: usize,
    line: u32,
    col: u32,
    cached: Option<Node>,
}

impl<'a> Lexer<'a> {
    pub fn new(registry: &'a Registry, source: &'a str) -> Lexer<'a> {
        Lexer {
            registry,
            source,
            offset: 0,
            line: 1,
            col: 1,
            cached: None,
        }
    }

    /// The cursor position. When a token has been peeked but not consumed,
    /// this still reports the position before that token.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    /// Consumes and returns the next node. After the input is exhausted this
    /// keeps returning `(EOF)` nodes without advancing.
    pub fn next(&mut self) -> Result<Node, Error> {
        // invalidate the peek cache
        self.cached = None;

        // interleave whitespace and comment skipping until neither makes
        // progress
        loop {
            let before = self.offset;
            self.skip_whitespace();
            self.skip_comment();
            if self.offset == before {
                break;
            }
        }

        let position = self.position();
        let Some(first) = self.current() else {
            return Ok(self
                .registry
                .node(Symbol::EOF, String::from("EOF"), position));
        };

        if first == '"' {
            self.bump(first);
            return self.scan_string(position);
        }
        if first.is_ascii_alphabetic() || first == '_' {
            return Ok(self.scan_word(position));
        }
        if first.is_ascii_digit() {
            return Ok(self.scan_number(position));
        }
        if OPERATOR_CHARS.contains(first) {
            return self.scan_operator(first, position);
        }

        Err(Error::new(
            ErrorImpl::InvalidCharacter { character: first },
            position,
        ))
    }

    /// Returns what `next()` would return without consuming it, memoized in
    /// the one-slot cache until a real advance invalidates it.
    pub fn peek(&mut self) -> Result<&Node, Error> {
        if let Some(ref node) = self.cached {
            return Ok(node);
        }

        let (offset, line, col) = (self.offset, self.line, self.col);
        let node = self.next()?;
        self.offset = offset;
        self.line = line;
        self.col = col;

        Ok(self.cached.insert(node))
    }

    fn current(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.col += 1;
        self.offset += c.len_utf8();
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current() {
            if !c.is_whitespace() {
                break;
            }
            if c == '\n' {
                self.line += 1;
                self.col = 1;
                self.offset += 1;
            } else {
                self.bump(c);
            }
        }
    }

    fn skip_comment(&mut self) {
        if self.current() != Some('#') {
            return;
        }
        while let Some(c) = self.current() {
            if c == '\n' {
                break;
            }
            self.bump(c);
        }
    }

    fn scan_string(&mut self, position: Position) -> Result<Node, Error> {
        let mut text = String::new();
        while let Some(c) = self.current() {
            if c == '"' {
                self.bump(c);
                break;
            }
            if c == '\n' {
                return Err(Error::new(ErrorImpl::UnterminatedString, self.position()));
            }
            if c == '\\' {
                self.bump(c);
                match self.current() {
                    Some(escaped) if !escaped.is_whitespace() => {
                        let resolved = match escaped {
                            'r' => '\r',
                            'n' => '\n',
                            't' => '\t',
                            other => other,
                        };
                        text.push(resolved);
                        self.bump(escaped);
                    }
                    // A backslash before whitespace or end of input is
                    // dropped without emitting anything; the following
                    // character is scanned normally on the next iteration.
                    _ => {}
                }
                continue;
            }
            text.push(c);
            self.bump(c);
        }
        Ok(self.registry.node(Symbol::String, text, position))
    }

    fn scan_word(&mut self, position: Position) -> Node {
        let text = IDENT_RE
            .find(&self.source[self.offset..])
            .unwrap()
            .as_str()
            .to_string();
        self.col += text.len() as u32;
        self.offset += text.len();

        match self.registry.lookup(&text) {
            Some(sym) => self.registry.node(sym, text, position),
            None => self.registry.node(Symbol::Identifier, text, position),
        }
    }

    fn scan_number(&mut self, position: Position) -> Node {
        let text = NUMBER_RE
            .find(&self.source[self.offset..])
            .unwrap()
            .as_str()
            .to_string();
        self.col += text.len() as u32;
        self.offset += text.len();

        self.registry.node(Symbol::Number, text, position)
    }

    fn scan_operator(&mut self, first: char, position: Position) -> Result<Node, Error> {
        // longest match up to two characters
        let mut chars = self.source[self.offset..].chars();
        chars.next();
        if let Some(second) = chars.next() {
            let two: String = [first, second].iter().collect();
            if let Some(sym) = self.registry.lookup(&two) {
                self.bump(first);
                self.bump(second);
                return Ok(self.registry.node(sym, two, position));
            }
        }

        let one = first.to_string();
        if let Some(sym) = self.registry.lookup(&one) {
            self.bump(first);
            return Ok(self.registry.node(sym, one, position));
        }

        Err(Error::new(
            ErrorImpl::InvalidCharacter { character: first },
            position,
        ))
    }
}
