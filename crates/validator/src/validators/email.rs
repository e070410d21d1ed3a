//! E-mail address rule
//!
//! Accepts a single mailbox in the permissive RFC 5322 grammar mail clients
//! use: either a bare `local@domain` addr-spec or a
//! `Display Name <local@domain>` name-addr.
//!
//! - The local part is a dot-atom (`rocket+groot`, `t'challa`, `-`, `_`) or a
//!   quoted string (`"Bruce Banner"`).
//! - The domain is a dot-atom (`example.com`, `localhost`) or a bracketed
//!   domain literal (`[192.0.2.1]`).
//! - Folding whitespace and `(comments)` are allowed around the address.

use crate::foundation::ValidationError;

// ============================================================================
// EMAIL RULE
// ============================================================================

crate::validator! {
    /// Validates that a string is a single e-mail address.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_validator::validators::email;
    /// use field_validator::foundation::Validate;
    ///
    /// assert!(email().validate("john@doe.com").is_ok());
    /// assert!(email().validate("\"Bruce Banner\"@batman.com").is_ok());
    /// assert!(email().validate("Barry Gibbs <bg@example.com>").is_ok());
    /// assert!(email().validate("hoi").is_err());
    /// ```
    pub Email for str;
    rule(input) { parse_address(input).is_some() }
    error(input) { ValidationError::new("email", "value is not an email") }
    fn email();
}

// ============================================================================
// PARSER
// ============================================================================

/// A parsed mailbox. Slices borrow from the input; quoted parts keep their quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address<'a> {
    /// Display name of a `Name <addr>` mailbox, as written.
    pub name: Option<&'a str>,
    /// Local part, before the `@`.
    pub local_part: &'a str,
    /// Domain, after the `@`.
    pub domain: &'a str,
}

/// Parses `input` as exactly one mailbox, or returns `None`.
pub fn parse_address(input: &str) -> Option<Address<'_>> {
    let mut cursor = Cursor::new(input);
    cursor.skip_cfws()?;
    if let Some((local_part, domain)) = cursor.addr_spec() {
        cursor.skip_cfws()?;
        if cursor.at_end() {
            return Some(Address {
                name: None,
                local_part,
                domain,
            });
        }
    }

    let mut cursor = Cursor::new(input);
    cursor.skip_cfws()?;
    let name = if cursor.peek() == Some('<') {
        None
    } else {
        Some(cursor.phrase()?)
    };
    if !cursor.eat('<') {
        return None;
    }
    let (local_part, domain) = cursor.addr_spec()?;
    if !cursor.eat('>') {
        return None;
    }
    cursor.skip_cfws()?;
    cursor.at_end().then_some(Address {
        name,
        local_part,
        domain,
    })
}

const SPECIALS: [char; 12] = ['(', ')', '<', '>', '[', ']', ':', ';', '@', '\\', ',', '"'];

/// Visible characters; anything outside ASCII counts as visible.
fn is_vchar(c: char) -> bool {
    ('!'..='~').contains(&c) || !c.is_ascii()
}

fn is_atext(c: char, dot: bool) -> bool {
    if c == '.' {
        return dot;
    }
    is_vchar(c) && !SPECIALS.contains(&c)
}

fn is_wsp(c: char) -> bool {
    c == ' ' || c == '\t'
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, want: char) -> bool {
        if self.peek() == Some(want) {
            self.pos += want.len_utf8();
            true
        } else {
            false
        }
    }

    fn at_end(&self) -> bool {
        self.pos == self.src.len()
    }

    fn slice(&self, start: usize) -> &'a str {
        &self.src[start..self.pos]
    }

    /// Skips whitespace and comments. `None` on an unterminated comment.
    fn skip_cfws(&mut self) -> Option<()> {
        loop {
            while self.peek().is_some_and(is_wsp) {
                self.pos += 1;
            }
            if self.peek() != Some('(') {
                return Some(());
            }
            self.skip_comment()?;
        }
    }

    fn skip_comment(&mut self) -> Option<()> {
        self.bump();
        let mut depth = 1_usize;
        while depth > 0 {
            match self.bump()? {
                '(' => depth += 1,
                ')' => depth -= 1,
                '\\' => {
                    self.bump()?;
                }
                _ => {}
            }
        }
        Some(())
    }

    fn atom(&mut self, dot: bool) -> Option<&'a str> {
        let start = self.pos;
        while self.peek().is_some_and(|c| is_atext(c, dot)) {
            self.bump();
        }
        (self.pos > start).then(|| self.slice(start))
    }

    fn dot_atom(&mut self) -> Option<&'a str> {
        let atom = self.atom(true)?;
        if atom.starts_with('.') || atom.ends_with('.') || atom.contains("..") {
            return None;
        }
        Some(atom)
    }

    fn quoted_string(&mut self) -> Option<&'a str> {
        let start = self.pos;
        if !self.eat('"') {
            return None;
        }
        loop {
            match self.bump()? {
                '"' => return Some(self.slice(start)),
                '\\' => {
                    let escaped = self.bump()?;
                    if !(is_vchar(escaped) || is_wsp(escaped)) {
                        return None;
                    }
                }
                c if is_vchar(c) || is_wsp(c) => {}
                _ => return None,
            }
        }
    }

    fn domain_literal(&mut self) -> Option<&'a str> {
        let start = self.pos;
        if !self.eat('[') {
            return None;
        }
        loop {
            match self.bump()? {
                ']' => return Some(self.slice(start)),
                '[' | '\\' => return None,
                c if is_vchar(c) || is_wsp(c) => {}
                _ => return None,
            }
        }
    }

    fn addr_spec(&mut self) -> Option<(&'a str, &'a str)> {
        let local_part = if self.peek() == Some('"') {
            // An empty quoted local part is not an address.
            self.quoted_string().filter(|quoted| *quoted != "\"\"")?
        } else {
            self.dot_atom()?
        };
        if !self.eat('@') {
            return None;
        }
        let domain = if self.peek() == Some('[') {
            self.domain_literal()?
        } else {
            self.dot_atom()?
        };
        Some((local_part, domain))
    }

    /// One or more words (atoms or quoted strings) separated by CFWS.
    fn phrase(&mut self) -> Option<&'a str> {
        let start = self.pos;
        let mut end = start;
        loop {
            let word = if self.peek() == Some('"') {
                self.quoted_string()
            } else {
                self.atom(true)
            };
            if word.is_none() {
                break;
            }
            end = self.pos;
            self.skip_cfws()?;
        }
        (end > start).then(|| &self.src[start..end])
    }
}

// ============================================================================
// TESTS
// ============================================================================
