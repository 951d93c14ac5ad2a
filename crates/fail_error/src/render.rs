//! Selectable-field rendering of failures for logs.
//!
//! Templates use single-letter directives, each optionally preceded by a
//! precision that truncates the field to at most that many characters:
//!
//! | Directive | Renders |
//! |-----------|------------------------------------------------|
//! | `%%`      | A percent sign                                 |
//! | `%d`      | All details separated by `", "`                |
//! | `%e`      | The message of the wrapped cause               |
//! | `%f`      | File name where the failure was wrapped        |
//! | `%l`      | Line where the failure was wrapped             |
//! | `%m`      | Client message                                 |
//! | `%s`      | Numeric HTTP status                            |
//!
//! ```
//! use fail_error::not_found;
//!
//! let fail = not_found();
//! assert_eq!(fail.render("%s %.6m"), "404 object");
//! ```

use crate::FailError;
use std::{borrow::Cow, fmt};

/// A single renderable part of a [`FailError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Details joined with `", "`
    Details,
    /// Message of the wrapped cause
    Cause,
    /// File name where the failure was wrapped
    File,
    /// Line where the failure was wrapped
    Line,
    /// Client message
    Message,
    /// Numeric status
    Status,
}

impl Field {
    /// Field selected by a template directive letter.
    pub fn from_directive(directive: char) -> Option<Self> {
        match directive {
            'd' => Some(Field::Details),
            'e' => Some(Field::Cause),
            'f' => Some(Field::File),
            'l' => Some(Field::Line),
            'm' => Some(Field::Message),
            's' => Some(Field::Status),
            _ => None,
        }
    }
}

impl FailError {
    /// Render one field.
    pub fn field(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::Details => Cow::Owned(self.details().join(", ")),
            Field::Cause => Cow::Owned(self.cause().to_string()),
            Field::File => Cow::Borrowed(self.file()),
            Field::Line => Cow::Owned(self.line().to_string()),
            Field::Message => Cow::Borrowed(self.message()),
            Field::Status => Cow::Owned(self.status().to_string()),
        }
    }

    /// Render one field, cut to at most `max_chars` characters.
    pub fn field_truncated(&self, field: Field, max_chars: usize) -> Cow<'_, str> {
        truncate(self.field(field), max_chars)
    }

    /// Render a template into a string.
    pub fn render(&self, template: &str) -> String {
        self.template(template).to_string()
    }

    /// Lazily rendered template, handy as a log field.
    ///
    /// # Examples
    ///
    /// ```
    /// use fail_error::FailError;
    ///
    /// let fail = FailError::wrap("missing argument to vars").unexpected();
    /// let line = fail.line();
    /// assert_eq!(
    ///     format!("{}", fail.template("%l %e")),
    ///     format!("{line} missing argument to vars"),
    /// );
    /// ```
    pub fn template<'a>(&'a self, template: &'a str) -> Template<'a> {
        Template {
            fail: self,
            template,
        }
    }
}

/// A [`FailError`] rendered through a template on `Display`.
#[derive(Debug, Clone, Copy)]
pub struct Template<'a> {
    fail: &'a FailError,
    template: &'a str,
}

impl fmt::Display for Template<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in Pieces::new(self.template) {
            match piece {
                Piece::Literal(text) => f.write_str(text)?,
                Piece::Field {
                    field: Some(field),
                    precision,
                } => {
                    let value = self.fail.field(field);
                    match precision {
                        Some(max_chars) => f.write_str(&truncate(value, max_chars))?,
                        None => f.write_str(&value)?,
                    }
                }
                // Unknown directives render nothing.
                Piece::Field { field: None, .. } => {}
            }
        }
        Ok(())
    }
}

fn truncate(value: Cow<'_, str>, max_chars: usize) -> Cow<'_, str> {
    let end = value.char_indices().nth(max_chars).map(|(end, _)| end);
    let Some(end) = end else {
        return value;
    };
    match value {
        Cow::Borrowed(text) => Cow::Borrowed(&text[..end]),
        Cow::Owned(mut text) => {
            text.truncate(end);
            Cow::Owned(text)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    Literal(&'a str),
    Field {
        field: Option<Field>,
        precision: Option<usize>,
    },
}

struct Pieces<'a> {
    rest: &'a str,
}

impl<'a> Pieces<'a> {
    fn new(template: &'a str) -> Self {
        Self { rest: template }
    }

    fn take_rest(&mut self) -> &'a str {
        std::mem::take(&mut self.rest)
    }
}

impl<'a> Iterator for Pieces<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find('%') {
            None => return Some(Piece::Literal(self.take_rest())),
            Some(0) => {}
            Some(pos) => {
                let (literal, rest) = self.rest.split_at(pos);
                self.rest = rest;
                return Some(Piece::Literal(literal));
            }
        }

        let spec = &self.rest[1..];
        if spec.is_empty() {
            return Some(Piece::Literal(self.take_rest()));
        }
        if let Some(rest) = spec.strip_prefix('%') {
            self.rest = rest;
            return Some(Piece::Literal("%"));
        }

        let (precision, spec) = match spec.strip_prefix('.') {
            Some(after_dot) => {
                let digits = after_dot.bytes().take_while(u8::is_ascii_digit).count();
                let (number, rest) = after_dot.split_at(digits);
                let precision = if number.is_empty() {
                    0
                } else {
                    number.parse().unwrap_or(usize::MAX)
                };
                (Some(precision), rest)
            }
            None => (None, spec),
        };

        let mut chars = spec.chars();
        match chars.next() {
            Some(directive) => {
                self.rest = chars.as_str();
                Some(Piece::Field {
                    field: Field::from_directive(directive),
                    precision,
                })
            }
            // A precision with no directive, e.g. a trailing "%.3".
            None => Some(Piece::Literal(self.take_rest())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(template: &str) -> Vec<Piece<'_>> {
        Pieces::new(template).collect()
    }

    #[test]
    fn splits_literals_and_directives() {
        assert_eq!(
            pieces("at %f:%l"),
            vec![
                Piece::Literal("at "),
                Piece::Field {
                    field: Some(Field::File),
                    precision: None
                },
                Piece::Literal(":"),
                Piece::Field {
                    field: Some(Field::Line),
                    precision: None
                },
            ]
        );
    }

    #[test]
    fn parses_precision() {
        assert_eq!(
            pieces("%.12e"),
            vec![Piece::Field {
                field: Some(Field::Cause),
                precision: Some(12)
            }]
        );
        assert_eq!(
            pieces("%.m"),
            vec![Piece::Field {
                field: Some(Field::Message),
                precision: Some(0)
            }]
        );
    }

    #[test]
    fn percent_edge_cases() {
        assert_eq!(pieces("100%%"), vec![Piece::Literal("100"), Piece::Literal("%")]);
        assert_eq!(pieces("50%"), vec![Piece::Literal("50"), Piece::Literal("%")]);
        assert_eq!(pieces("%.3"), vec![Piece::Literal("%.3")]);
    }

    #[test]
    fn renders_every_field() {
        let fail = FailError::wrap("pool exhausted")
            .conflict_with("stale revision", ["expected 3", "found 4"]);

        assert_eq!(fail.render("%d"), "expected 3, found 4");
        assert_eq!(fail.render("%e"), "pool exhausted");
        assert_eq!(fail.render("%f"), "render.rs");
        assert_eq!(fail.render("%l"), fail.line().to_string());
        assert_eq!(fail.render("%m"), "stale revision");
        assert_eq!(fail.render("%s"), "409");
        assert_eq!(fail.render("%q|%%"), "|%");
    }

    #[test]
    fn truncation_saturates_and_respects_char_boundaries() {
        let fail = FailError::wrap("naïve cause").unexpected();
        assert_eq!(fail.render("%.3e"), "naï");
        assert_eq!(fail.render("%.500e"), "naïve cause");
        assert_eq!(fail.field_truncated(Field::Status, 1), "5");
        assert_eq!(fail.field_truncated(Field::Message, 0), "");
    }
}
