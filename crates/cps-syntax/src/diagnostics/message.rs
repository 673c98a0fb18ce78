use rowan::TextRange;

/// Diagnostic kinds ordered by class: lexical, syntactic, then reserved constructs.
///
/// Each kind belongs to exactly one [`ErrorClass`]. The parser records at most one
/// diagnostic per top-level definition, so no cross-diagnostic suppression is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum DiagnosticKind {
    // Lexer produced an error token
    InvalidCharacter,
    MalformedNumber,
    UnterminatedComment,

    // Opening delimiter never closed
    UnclosedParen,
    UnclosedBracket,
    UnclosedBlock,
    UnclosedNamespace,

    // Required piece missing
    ExpectedDefinition,
    ExpectedName,
    ExpectedType,
    ExpectedStatement,
    ExpectedExpression,
    ExpectedAssignOp,

    // Present but wrong
    InvalidArraySize,
    MalformedForHeader,
    MissingSeparator,
    TrailingSeparator,
    UnexpectedToken,

    // Reserved grammar slots
    UnsupportedUnaryOperator,
    UnsupportedMemberAccess,
    UnsupportedMemberCall,
    UnsupportedTypeDefinition,
}

/// Coarse error taxonomy exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum ErrorClass {
    /// Invalid character, unterminated or malformed literal.
    Lex,
    /// Unexpected token, missing field, unmatched delimiter, malformed `for` header.
    Parse,
    /// Syntax reserved for a future grammar version.
    Unsupported,
}

impl std::fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorClass::Lex => write!(f, "lex error"),
            ErrorClass::Parse => write!(f, "parse error"),
            ErrorClass::Unsupported => write!(f, "unsupported construct"),
        }
    }
}

impl DiagnosticKind {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidCharacter | Self::MalformedNumber | Self::UnterminatedComment => {
                ErrorClass::Lex
            }
            Self::UnsupportedUnaryOperator
            | Self::UnsupportedMemberAccess
            | Self::UnsupportedMemberCall
            | Self::UnsupportedTypeDefinition => ErrorClass::Unsupported,
            _ => ErrorClass::Parse,
        }
    }

    pub fn is_unclosed(&self) -> bool {
        matches!(
            self,
            Self::UnclosedParen | Self::UnclosedBracket | Self::UnclosedBlock | Self::UnclosedNamespace
        )
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::MalformedForHeader => {
                Some("the update clause is terminated by `;`: `for (init ; cond ; update ; )`")
            }
            Self::MissingSeparator => Some("statements in a block are separated by `;`"),
            Self::TrailingSeparator => Some("remove the `;` before `}`"),
            Self::InvalidArraySize => Some("e.g., `[16]int`"),
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::InvalidCharacter => "invalid character",
            Self::MalformedNumber => "malformed numeric literal",
            Self::UnterminatedComment => "unterminated block comment",

            Self::UnclosedParen => "missing closing `)`",
            Self::UnclosedBracket => "missing closing `]`",
            Self::UnclosedBlock => "missing closing `}`",
            Self::UnclosedNamespace => "missing closing `}` for namespace",

            Self::ExpectedDefinition => "expected a top-level definition",
            Self::ExpectedName => "expected a name",
            Self::ExpectedType => "expected a type",
            Self::ExpectedStatement => "expected a statement",
            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedAssignOp => "expected an assignment operator",

            Self::InvalidArraySize => "array size must be a decimal integer literal",
            Self::MalformedForHeader => "malformed `for` header",
            Self::MissingSeparator => "missing `;` between statements",
            Self::TrailingSeparator => "expected statement after `;`",
            Self::UnexpectedToken => "unexpected token",

            Self::UnsupportedUnaryOperator => "unary operators are not supported in this grammar version",
            Self::UnsupportedMemberAccess => "member access is not supported in this grammar version",
            Self::UnsupportedMemberCall => "member calls are not supported in this grammar version",
            Self::UnsupportedTypeDefinition => {
                "type definitions are not supported in this grammar version"
            }
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            // Detail is a full "expected X, found Y" sentence
            Self::UnexpectedToken => "{}".to_string(),

            // Detail is the offending lexeme
            Self::InvalidCharacter => "invalid character `{}`".to_string(),
            Self::MalformedNumber => "malformed numeric literal `{}`".to_string(),

            Self::UnsupportedTypeDefinition => {
                "`{}` definitions are not supported in this grammar version".to_string()
            }

            // Standard pattern: fallback + context
            _ => format!("{}, {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One collected problem with its location and rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl Diagnostic {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
            related: Vec::new(),
            hints: kind.default_hint().map(String::from).into_iter().collect(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn related(&self) -> &[RelatedInfo] {
        &self.related
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.class(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
