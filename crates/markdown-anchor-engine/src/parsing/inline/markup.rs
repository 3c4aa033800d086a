//! # Embedded Markup
//!
//! Just enough of a markup reader to pull one attribute out of an inline
//! HTML fragment such as `<a name="top">Top</a>`. The fragment must be a
//! single well-formed element: quoted, non-duplicate attributes, and either
//! `/>` or content closed by a matching `</name>` at the very end.
//!
//! Content may hold text, comments and nested elements, but tags must
//! balance. A literal `<` or `&` is only allowed where it starts markup or
//! a reference. References, in content and in attribute values, are limited
//! to `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`, `&#N;` and `&#xH;`.
//!
//! Callers treat every [`MarkupError`] as "value not available"; nothing
//! here is fatal to inline parsing.

use std::borrow::Cow;

use thiserror::Error;

use super::cursor::Cursor;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("fragment does not start with an element")]
    MissingElement,

    #[error("malformed attribute at byte {at}")]
    MalformedAttribute { at: usize },

    #[error("duplicate attribute `{name}`")]
    DuplicateAttribute { name: String },

    #[error("start tag of `{element}` is not terminated")]
    UnterminatedStartTag { element: String },

    #[error("element `{element}` is not closed")]
    UnclosedElement { element: String },

    #[error("expected `</{expected}>`, found `</{found}>`")]
    MismatchedEndTag { expected: String, found: String },

    #[error("malformed end tag at byte {at}")]
    MalformedEndTag { at: usize },

    #[error("malformed comment at byte {at}")]
    MalformedComment { at: usize },

    #[error("`<` does not start a tag at byte {at}")]
    StrayLessThan { at: usize },

    #[error("invalid character reference at byte {at}")]
    InvalidReference { at: usize },

    #[error("unexpected content after the element at byte {at}")]
    TrailingContent { at: usize },

    #[error("attribute `{name}` not found")]
    MissingAttribute { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub key: &'a str,
    /// Value with character and entity references decoded.
    pub value: Cow<'a, str>,
}

/// The root element of a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<'a> {
    pub name: &'a str,
    pub attributes: Vec<Attribute<'a>>,
}

impl<'a> Element<'a> {
    /// Reads `fragment` as exactly one element.
    pub fn parse_fragment(fragment: &'a str) -> Result<Self, MarkupError> {
        let mut cur = Cursor::new(fragment, 0);
        if !cur.starts_with(b"<") {
            return Err(MarkupError::MissingElement);
        }
        let (element, self_closing) = start_tag(&mut cur)?;
        if !self_closing {
            content(&mut cur, element.name)?;
        }
        if !cur.eof() {
            return Err(MarkupError::TrailingContent { at: cur.pos() });
        }
        Ok(element)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_ref())
    }
}

/// Reads the value of attribute `key` on the single element in `fragment`.
pub fn attribute_value(fragment: &str, key: &str) -> Result<String, MarkupError> {
    let element = Element::parse_fragment(fragment)?;
    element
        .attribute(key)
        .map(str::to_owned)
        .ok_or_else(|| MarkupError::MissingAttribute {
            name: key.to_owned(),
        })
}

/// Reads a start tag at `<`. Returns the element and whether it was `/>`.
fn start_tag<'a>(cur: &mut Cursor<'a>) -> Result<(Element<'a>, bool), MarkupError> {
    cur.bump();
    let name = xml_name(cur).ok_or(MarkupError::MissingElement)?;

    let mut attributes: Vec<Attribute<'a>> = Vec::new();
    loop {
        let separated = !cur.eat_while(is_space).is_empty();
        if cur.starts_with(b"/>") {
            cur.bump_n(2);
            return Ok((Element { name, attributes }, true));
        }
        if cur.eat(b'>') {
            return Ok((Element { name, attributes }, false));
        }
        if cur.eof() {
            return Err(MarkupError::UnterminatedStartTag {
                element: name.to_owned(),
            });
        }
        if !separated {
            return Err(MarkupError::MalformedAttribute { at: cur.pos() });
        }

        let attr = attribute(cur)?;
        if attributes.iter().any(|a| a.key == attr.key) {
            return Err(MarkupError::DuplicateAttribute {
                name: attr.key.to_owned(),
            });
        }
        attributes.push(attr);
    }
}

fn attribute<'a>(cur: &mut Cursor<'a>) -> Result<Attribute<'a>, MarkupError> {
    let at = cur.pos();
    let malformed = || MarkupError::MalformedAttribute { at };

    let key = xml_name(cur).ok_or_else(malformed)?;
    cur.eat_while(is_space);
    if !cur.eat(b'=') {
        return Err(malformed());
    }
    cur.eat_while(is_space);
    let quote = cur
        .peek()
        .filter(|&q| q == b'"' || q == b'\'')
        .ok_or_else(malformed)?;
    cur.bump();

    let start = cur.i;
    loop {
        match cur.peek() {
            Some(b) if b == quote => break,
            Some(b'&') => reference(cur)?,
            None | Some(b'<') => return Err(malformed()),
            Some(_) => {
                cur.eat_while(|b| b != quote && b != b'&' && b != b'<');
            }
        }
    }
    let raw = cur.s.get(start..cur.i).unwrap_or_default();
    cur.bump();

    Ok(Attribute {
        key,
        value: html_escape::decode_html_entities(raw),
    })
}

/// Walks element content up to and including the end tag of `root`.
fn content<'a>(cur: &mut Cursor<'a>, root: &'a str) -> Result<(), MarkupError> {
    let mut open = vec![root];
    while let Some(&element) = open.last() {
        match cur.peek() {
            None => {
                return Err(MarkupError::UnclosedElement {
                    element: element.to_owned(),
                });
            }
            Some(b'&') => reference(cur)?,
            Some(b'<') if cur.starts_with(b"</") => {
                let found = end_tag(cur)?;
                if found != element {
                    return Err(MarkupError::MismatchedEndTag {
                        expected: element.to_owned(),
                        found: found.to_owned(),
                    });
                }
                open.pop();
            }
            Some(b'<') if cur.starts_with(b"<!--") => comment(cur)?,
            Some(b'<') => {
                if !cur.s.as_bytes().get(cur.i + 1).copied().is_some_and(is_name_start) {
                    return Err(MarkupError::StrayLessThan { at: cur.pos() });
                }
                let (nested, self_closing) = start_tag(cur)?;
                if !self_closing {
                    open.push(nested.name);
                }
            }
            Some(_) => {
                cur.eat_while(|b| b != b'<' && b != b'&');
            }
        }
    }
    Ok(())
}

/// Reads `</name>` with optional whitespace before `>`.
fn end_tag<'a>(cur: &mut Cursor<'a>) -> Result<&'a str, MarkupError> {
    let at = cur.pos();
    cur.bump_n(2);
    let name = xml_name(cur).ok_or(MarkupError::MalformedEndTag { at })?;
    cur.eat_while(is_space);
    if !cur.eat(b'>') {
        return Err(MarkupError::MalformedEndTag { at });
    }
    Ok(name)
}

/// Skips `<!-- ... -->`. The body may not contain `--`.
fn comment(cur: &mut Cursor<'_>) -> Result<(), MarkupError> {
    let at = cur.pos();
    cur.bump_n(4);
    let body = cur.rest();
    match body.find("--") {
        Some(i) if body[i..].starts_with("-->") => {
            cur.bump_n(i + 3);
            Ok(())
        }
        _ => Err(MarkupError::MalformedComment { at }),
    }
}

/// Checks one reference at `&` and steps past its `;`.
fn reference(cur: &mut Cursor<'_>) -> Result<(), MarkupError> {
    let at = cur.pos();
    cur.bump();
    let valid = if cur.eat(b'#') {
        let (radix, digits) = if cur.eat(b'x') {
            (16, cur.eat_while(|b| b.is_ascii_hexdigit()))
        } else {
            (10, cur.eat_while(|b| b.is_ascii_digit()))
        };
        u32::from_str_radix(digits, radix)
            .ok()
            .and_then(char::from_u32)
            .is_some_and(|c| c != '\0')
    } else {
        let name = cur.eat_while(|b| b.is_ascii_alphanumeric());
        matches!(name, "amp" | "lt" | "gt" | "quot" | "apos")
    };
    if valid && cur.eat(b';') {
        Ok(())
    } else {
        Err(MarkupError::InvalidReference { at })
    }
}

fn xml_name<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if !cur.peek().is_some_and(is_name_start) {
        return None;
    }
    Some(cur.eat_while(is_name_char))
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

// Non-ASCII bytes are accepted wholesale so names may contain any letter.
fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b':' || b >= 0x80
}

fn is_name_char(b: u8) -> bool {
    is_name_start(b) || b.is_ascii_digit() || b == b'-' || b == b'.'
}
