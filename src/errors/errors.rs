use std::fmt::Display;

use thiserror::Error;

use crate::{get_line_at_position, SourcePosition, Span};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    /// Builds an error covering the single location `position`.
    pub fn at(error_impl: ErrorImpl, position: SourcePosition) -> Self {
        Error::new(
            error_impl,
            Span {
                start: position.clone(),
                end: position,
            },
        )
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &SourcePosition {
        &self.span.start
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "Illegal Character",
            ErrorImpl::NestingTooDeep { .. } => "Nesting Too Deep",
            ErrorImpl::UnexpectedToken { .. } => "Unexpected Token",
            ErrorImpl::UnexpectedEndOfInput => "Unexpected End Of Input",
        }
    }

    /// The offending character or token, without decoration.
    pub fn details(&self) -> String {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { character } => character.to_string(),
            ErrorImpl::NestingTooDeep { limit } => format!("more than {} open parentheses", limit),
            ErrorImpl::UnexpectedToken { token } => token.clone(),
            ErrorImpl::UnexpectedEndOfInput => String::from("expected a number or '('"),
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { character } if character.is_whitespace() => {
                ErrorTip::Suggestion(String::from("Only plain spaces may separate tokens"))
            }
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::None,
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Parentheses may be nested at most {} deep",
                limit
            )),
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected a number, an operator or a parenthesis",
                token
            )),
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "The expression ended early, is an operand or `)` missing?",
            )),
        }
    }

    /// Two-line report: the error name with its details, then the file and
    /// one-based line of the error start.
    pub fn render(&self) -> String {
        let position = self.get_position();
        format!(
            "{}: {}\nFile {}, line {}",
            self.get_error_name(),
            self.details(),
            position.file_name,
            position.line + 1
        )
    }

    /// Caret-style excerpt of the source line the error points at.
    ///
    /// ```text
    /// Error: Illegal Character
    /// -> test.hin
    ///    |
    ///  1 | 1 + #
    ///    | ----^
    /// ```
    ///
    /// Falls back to [`Error::render`] when the source text is unavailable.
    pub fn render_excerpt(&self) -> String {
        let position = self.get_position();
        let Some((line, line_text, line_pos)) =
            get_line_at_position(&position.file_text, position.index.max(0) as usize)
        else {
            return self.render();
        };

        let line_str = line.to_string();
        let padding = line_str.len() + 2;

        let mut out = String::new();
        if let ErrorTip::None = self.get_tip() {
            out.push_str(&format!("Error: {}\n", self.get_error_name()));
        } else {
            out.push_str(&format!("Error: {} ({})\n", self.get_error_name(), self.get_tip()));
        }
        out.push_str(&format!("-> {}\n", position.file_name));
        out.push_str(&format!("{:>padding$}\n", "|"));

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

        let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
        out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

        out
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (string.chars().skip(start).collect(), start)
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("illegal character: {character:?}")]
    IllegalCharacter { character: char },
    #[error("parentheses nested deeper than {limit}")]
    NestingTooDeep { limit: usize },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}
