//! Syntax kinds for the cps language.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `CpsLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    /// Label marker `:name`, also the reserved member-call form `expr:(...)`.
    #[token(":")]
    Colon,

    /// Reserved: member access is not active in this grammar version.
    #[token(".")]
    Dot,

    #[token("=")]
    Eq,

    #[token("+=")]
    PlusEq,

    #[token("-=")]
    MinusEq,

    #[token("*=")]
    StarEq,

    #[token("/=")]
    SlashEq,

    #[token("%=")]
    PercentEq,

    #[token("<<=")]
    ShlEq,

    #[token(">>=")]
    ShrEq,

    #[token("&=")]
    AmpEq,

    #[token("^=")]
    CaretEq,

    #[token("|=")]
    PipeEq,

    #[token("||")]
    PipePipe,

    #[token("&&")]
    AmpAmp,

    #[token("|")]
    Pipe,

    #[token("^")]
    Caret,

    #[token("&")]
    Amp,

    #[token("==")]
    EqEq,

    #[token("!=")]
    BangEq,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("<<")]
    Shl,

    #[token(">>")]
    Shr,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    /// Multiplication, also the pointer type prefix `*name`.
    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    /// Reserved unary operator.
    #[token("!")]
    Bang,

    /// Reserved unary operator.
    #[token("~")]
    Tilde,

    #[token("fn")]
    KwFn,

    #[token("tail")]
    KwTail,

    #[token("coro")]
    KwCoro,

    #[token("namespace")]
    KwNamespace,

    #[token("var")]
    KwVar,

    #[token("let")]
    KwLet,

    #[token("return")]
    KwReturn,

    #[token("continue")]
    KwContinue,

    #[token("break")]
    KwBreak,

    #[token("suspend")]
    KwSuspend,

    #[token("goto")]
    KwGoto,

    #[token("if")]
    KwIf,

    #[token("else")]
    KwElse,

    #[token("while")]
    KwWhile,

    #[token("do")]
    KwDo,

    #[token("for")]
    KwFor,

    #[token("true")]
    KwTrue,

    #[token("false")]
    KwFalse,

    #[token("null")]
    KwNull,

    /// Unsigned decimal without leading zero; `_` separators allowed.
    #[token("0")]
    #[regex(r"[1-9][_0-9]*")]
    IntLiteral,

    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?[fFlL]?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+[fFlL]?")]
    FloatLiteral,

    #[regex(r"0[bB][01]+[uUlL]?")]
    BinaryLiteral,

    #[regex(r"0[xX][0-9a-fA-F]+[uUlL]?")]
    HexLiteral,

    #[regex(r"0[0-7]+[uUlL]?")]
    OctalLiteral,

    /// Identifier. Defined after keywords so they take precedence.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Id,

    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
    BlockComment,

    /// Coalesced unrecognized characters
    Garbage,
    /// Numeric token glued to identifier characters, digits, or dots (`09`, `0x`, `1.`)
    MalformedNumber,
    /// `/*` without a closing `*/`; runs to end of file
    UnterminatedComment,
    /// Pseudo-token returned by lookahead past the last token
    Eof,

    // --- Node kinds (non-terminals) ---
    Program,
    FunctionDef,
    TailFunctionDef,
    CoroutineDef,
    NamespaceDef,
    NamespaceSetDef,
    ParamList,
    Param,
    TypeList,
    NamedType,
    PointerType,
    FixedArrayType,
    FnType,
    TailFnType,
    CoroFnType,
    TypeParamList,
    VarDef,
    LetDef,
    Assignment,
    ReturnStmt,
    ContinueStmt,
    BreakStmt,
    SuspendStmt,
    GotoStmt,
    LabeledStmt,
    IfStmt,
    WhileStmt,
    DoWhileStmt,
    ForStmt,
    Block,
    StmtList,
    Literal,
    NameRef,
    CallExpr,
    ArgList,
    ParenExpr,
    BinaryExpr,
    Error,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

/// Abstract grammatical roles shared by several concrete node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Category {
    TopLevelDef,
    AtomicStmt,
    ComplexStmt,
    Type,
    Expr,
}

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment | BlockComment)
    }

    /// Lexer error tokens.
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Garbage | MalformedNumber | UnterminatedComment)
    }

    #[inline]
    pub fn is_token(self) -> bool {
        self < Program
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (KwFn as u16..=KwNull as u16).contains(&(self as u16))
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            IntLiteral
                | FloatLiteral
                | BinaryLiteral
                | HexLiteral
                | OctalLiteral
                | KwTrue
                | KwFalse
                | KwNull
        )
    }

    #[inline]
    pub fn is_number(self) -> bool {
        matches!(
            self,
            IntLiteral | FloatLiteral | BinaryLiteral | HexLiteral | OctalLiteral
        )
    }

    #[inline]
    pub fn is_assign_op(self) -> bool {
        matches!(
            self,
            Eq | PlusEq
                | MinusEq
                | StarEq
                | SlashEq
                | PercentEq
                | ShlEq
                | ShrEq
                | AmpEq
                | CaretEq
                | PipeEq
        )
    }

    /// Binding power of a binary operator. Higher binds tighter.
    pub fn binary_precedence(self) -> Option<u8> {
        let prec = match self {
            PipePipe => 4,
            AmpAmp => 5,
            Pipe => 6,
            Caret => 7,
            Amp => 8,
            EqEq | BangEq => 9,
            Lt | Gt | LtEq | GtEq => 10,
            Shl | Shr => 11,
            Plus | Minus => 12,
            Star | Slash | Percent => 13,
            _ => return None,
        };
        Some(prec)
    }

    pub fn is_top_level_def(self) -> bool {
        matches!(
            self,
            FunctionDef | TailFunctionDef | CoroutineDef | NamespaceDef | NamespaceSetDef
        )
    }

    pub fn is_atomic_stmt(self) -> bool {
        matches!(
            self,
            VarDef
                | LetDef
                | Assignment
                | ReturnStmt
                | ContinueStmt
                | BreakStmt
                | SuspendStmt
                | GotoStmt
                | LabeledStmt
        )
    }

    /// Every atomic statement is also a complex statement.
    pub fn is_complex_stmt(self) -> bool {
        self.is_atomic_stmt()
            || matches!(self, IfStmt | WhileStmt | DoWhileStmt | ForStmt | Block)
    }

    pub fn is_type(self) -> bool {
        matches!(
            self,
            NamedType | PointerType | FixedArrayType | FnType | TailFnType | CoroFnType
        )
    }

    pub fn is_expr(self) -> bool {
        matches!(self, Literal | NameRef | CallExpr | ParenExpr | BinaryExpr)
    }

    pub fn is_in(self, category: Category) -> bool {
        match category {
            Category::TopLevelDef => self.is_top_level_def(),
            Category::AtomicStmt => self.is_atomic_stmt(),
            Category::ComplexStmt => self.is_complex_stmt(),
            Category::Type => self.is_type(),
            Category::Expr => self.is_expr(),
        }
    }

    /// All categories this kind belongs to, narrowest first.
    pub fn categories(self) -> Vec<Category> {
        [
            Category::AtomicStmt,
            Category::ComplexStmt,
            Category::TopLevelDef,
            Category::Type,
            Category::Expr,
        ]
        .into_iter()
        .filter(|c| self.is_in(*c))
        .collect()
    }

    /// Narrowest category, if any.
    pub fn category(self) -> Option<Category> {
        self.categories().into_iter().next()
    }

    /// Human-readable token description for diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            ParenOpen => "`(`",
            ParenClose => "`)`",
            BraceOpen => "`{`",
            BraceClose => "`}`",
            BracketOpen => "`[`",
            BracketClose => "`]`",
            Comma => "`,`",
            Semicolon => "`;`",
            Colon => "`:`",
            Dot => "`.`",
            Eq => "`=`",
            KwFn => "`fn`",
            KwTail => "`tail`",
            KwCoro => "`coro`",
            KwNamespace => "`namespace`",
            KwElse => "`else`",
            KwWhile => "`while`",
            Id => "identifier",
            IntLiteral => "integer literal",
            FloatLiteral | BinaryLiteral | HexLiteral | OctalLiteral => "numeric literal",
            Eof => "end of file",
            k if k.is_keyword() => "keyword",
            k if k.binary_precedence().is_some() || k.is_assign_op() => "operator",
            _ => "token",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CpsLang {}

impl Language for CpsLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<CpsLang>;
pub type SyntaxToken = rowan::SyntaxToken<CpsLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 128-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Panics at compile time if any kind's discriminant >= 128.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 128 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..128u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const LITERALS: TokenSet = TokenSet::new(&[
        IntLiteral,
        FloatLiteral,
        BinaryLiteral,
        HexLiteral,
        OctalLiteral,
        KwTrue,
        KwFalse,
        KwNull,
    ]);

    /// FIRST set of expressions. `!`/`~` included so reserved unary syntax gets a precise error.
    pub const EXPR_FIRST: TokenSet =
        LITERALS.union(TokenSet::new(&[Id, ParenOpen, Bang, Tilde]));

    pub const TYPE_FIRST: TokenSet =
        TokenSet::new(&[Id, Star, BracketOpen, KwFn, KwTail, KwCoro]);

    pub const ATOMIC_STMT_FIRST: TokenSet = TokenSet::new(&[
        KwVar, KwLet, Id, KwReturn, KwContinue, KwBreak, KwSuspend, KwGoto, Colon,
    ]);

    pub const COMPLEX_STMT_FIRST: TokenSet = ATOMIC_STMT_FIRST.union(TokenSet::new(&[
        KwIf, KwWhile, KwDo, KwFor, BraceOpen,
    ]));

    pub const ASSIGN_OPS: TokenSet = TokenSet::new(&[
        Eq, PlusEq, MinusEq, StarEq, SlashEq, PercentEq, ShlEq, ShrEq, AmpEq, CaretEq, PipeEq,
    ]);

    /// Where an optional `for` header slot is empty.
    pub const FOR_HEADER_STOP: TokenSet = TokenSet::new(&[Semicolon, ParenClose]);

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, Newline, LineComment, BlockComment]);

    /// Keywords that may open a top-level definition.
    pub const DEF_KEYWORDS: TokenSet = TokenSet::new(&[KwFn, KwTail, KwCoro, KwNamespace]);
}
