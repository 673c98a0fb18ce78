//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind`; accessors return `None` for pieces
//! missing from error-recovered trees.

use rowan::TextRange;

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }

            pub fn text_range(&self) -> TextRange {
                self.0.text_range()
            }
        }
    };
}

ast_node!(Program, Program);
ast_node!(FunctionDef, FunctionDef);
ast_node!(TailFunctionDef, TailFunctionDef);
ast_node!(CoroutineDef, CoroutineDef);
ast_node!(NamespaceDef, NamespaceDef);
ast_node!(NamespaceSetDef, NamespaceSetDef);
ast_node!(ParamList, ParamList);
ast_node!(Param, Param);
ast_node!(TypeList, TypeList);
ast_node!(TypeParamList, TypeParamList);
ast_node!(NamedType, NamedType);
ast_node!(PointerType, PointerType);
ast_node!(FixedArrayType, FixedArrayType);
ast_node!(FnType, FnType);
ast_node!(TailFnType, TailFnType);
ast_node!(CoroFnType, CoroFnType);
ast_node!(VarDef, VarDef);
ast_node!(LetDef, LetDef);
ast_node!(Assignment, Assignment);
ast_node!(ReturnStmt, ReturnStmt);
ast_node!(ContinueStmt, ContinueStmt);
ast_node!(BreakStmt, BreakStmt);
ast_node!(SuspendStmt, SuspendStmt);
ast_node!(GotoStmt, GotoStmt);
ast_node!(LabeledStmt, LabeledStmt);
ast_node!(IfStmt, IfStmt);
ast_node!(WhileStmt, WhileStmt);
ast_node!(DoWhileStmt, DoWhileStmt);
ast_node!(ForStmt, ForStmt);
ast_node!(Block, Block);
ast_node!(StmtList, StmtList);
ast_node!(Literal, Literal);
ast_node!(NameRef, NameRef);
ast_node!(CallExpr, CallExpr);
ast_node!(ArgList, ArgList);
ast_node!(ParenExpr, ParenExpr);
ast_node!(BinaryExpr, BinaryExpr);
ast_node!(ErrorNode, Error);

/// Generates a category enum with `cast` and `as_cst` over its variants.
macro_rules! ast_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident($node:ident) = $kind:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($node)),+
        }

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                match node.kind() {
                    $(SyntaxKind::$kind => $node::cast(node).map($name::$variant),)+
                    _ => None,
                }
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                match self {
                    $($name::$variant(n) => n.as_cst(),)+
                }
            }

            pub fn text_range(&self) -> TextRange {
                self.as_cst().text_range()
            }
        }
    };
}

ast_enum!(
    /// Anything that may appear directly in a program or namespace body.
    TopLevelDef {
        Function(FunctionDef) = FunctionDef,
        TailFunction(TailFunctionDef) = TailFunctionDef,
        Coroutine(CoroutineDef) = CoroutineDef,
        Namespace(NamespaceDef) = NamespaceDef,
        NamespaceSet(NamespaceSetDef) = NamespaceSetDef,
    }
);

ast_enum!(
    /// Statements allowed in `for` headers; also valid anywhere a `ComplexStmt` is.
    AtomicStmt {
        Var(VarDef) = VarDef,
        Let(LetDef) = LetDef,
        Assignment(Assignment) = Assignment,
        Return(ReturnStmt) = ReturnStmt,
        Continue(ContinueStmt) = ContinueStmt,
        Break(BreakStmt) = BreakStmt,
        Suspend(SuspendStmt) = SuspendStmt,
        Goto(GotoStmt) = GotoStmt,
        Labeled(LabeledStmt) = LabeledStmt,
    }
);

ast_enum!(
    Type {
        Named(NamedType) = NamedType,
        Pointer(PointerType) = PointerType,
        FixedArray(FixedArrayType) = FixedArrayType,
        Fn(FnType) = FnType,
        TailFn(TailFnType) = TailFnType,
        CoroFn(CoroFnType) = CoroFnType,
    }
);

ast_enum!(
    Expr {
        Literal(Literal) = Literal,
        NameRef(NameRef) = NameRef,
        Call(CallExpr) = CallExpr,
        Paren(ParenExpr) = ParenExpr,
        Binary(BinaryExpr) = BinaryExpr,
    }
);

/// Any statement. Atomic statements are nested rather than duplicated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComplexStmt {
    Atomic(AtomicStmt),
    If(IfStmt),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
    For(ForStmt),
    Block(Block),
}

impl ComplexStmt {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::IfStmt => IfStmt::cast(node).map(ComplexStmt::If),
            SyntaxKind::WhileStmt => WhileStmt::cast(node).map(ComplexStmt::While),
            SyntaxKind::DoWhileStmt => DoWhileStmt::cast(node).map(ComplexStmt::DoWhile),
            SyntaxKind::ForStmt => ForStmt::cast(node).map(ComplexStmt::For),
            SyntaxKind::Block => Block::cast(node).map(ComplexStmt::Block),
            _ => AtomicStmt::cast(node).map(ComplexStmt::Atomic),
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            ComplexStmt::Atomic(n) => n.as_cst(),
            ComplexStmt::If(n) => n.as_cst(),
            ComplexStmt::While(n) => n.as_cst(),
            ComplexStmt::DoWhile(n) => n.as_cst(),
            ComplexStmt::For(n) => n.as_cst(),
            ComplexStmt::Block(n) => n.as_cst(),
        }
    }

    pub fn text_range(&self) -> TextRange {
        self.as_cst().text_range()
    }

    pub fn as_atomic(&self) -> Option<&AtomicStmt> {
        match self {
            ComplexStmt::Atomic(stmt) => Some(stmt),
            _ => None,
        }
    }
}

impl From<AtomicStmt> for ComplexStmt {
    fn from(stmt: AtomicStmt) -> Self {
        ComplexStmt::Atomic(stmt)
    }
}

/// Binary operators, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Shl,
    Shr,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    pub fn from_kind(kind: SyntaxKind) -> Option<Self> {
        let op = match kind {
            SyntaxKind::PipePipe => Self::Or,
            SyntaxKind::AmpAmp => Self::And,
            SyntaxKind::Pipe => Self::BitOr,
            SyntaxKind::Caret => Self::BitXor,
            SyntaxKind::Amp => Self::BitAnd,
            SyntaxKind::EqEq => Self::Eq,
            SyntaxKind::BangEq => Self::NotEq,
            SyntaxKind::Lt => Self::Lt,
            SyntaxKind::Gt => Self::Gt,
            SyntaxKind::LtEq => Self::LtEq,
            SyntaxKind::GtEq => Self::GtEq,
            SyntaxKind::Shl => Self::Shl,
            SyntaxKind::Shr => Self::Shr,
            SyntaxKind::Plus => Self::Add,
            SyntaxKind::Minus => Self::Sub,
            SyntaxKind::Star => Self::Mul,
            SyntaxKind::Slash => Self::Div,
            SyntaxKind::Percent => Self::Rem,
            _ => return None,
        };
        Some(op)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::BitAnd => "&",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Int,
    Float,
    Binary,
    Hex,
    Octal,
    Bool,
    Null,
}

fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

fn child<N>(node: &SyntaxNode, cast: impl Fn(SyntaxNode) -> Option<N>) -> Option<N> {
    node.children().find_map(cast)
}

fn children<N>(
    node: &SyntaxNode,
    cast: impl Fn(SyntaxNode) -> Option<N>,
) -> impl Iterator<Item = N> {
    node.children().filter_map(cast)
}

/// First node castable by `cast` that follows a direct `marker` token.
fn child_after<N>(
    node: &SyntaxNode,
    marker: SyntaxKind,
    cast: impl Fn(SyntaxNode) -> Option<N>,
) -> Option<N> {
    node.children_with_tokens()
        .skip_while(|it| it.kind() != marker)
        .filter_map(|it| it.into_node())
        .find_map(cast)
}

impl Program {
    pub fn defs(&self) -> impl Iterator<Item = TopLevelDef> + '_ {
        children(&self.0, TopLevelDef::cast)
    }

    /// Regions the parser could not turn into definitions.
    pub fn errors(&self) -> impl Iterator<Item = ErrorNode> + '_ {
        children(&self.0, ErrorNode::cast)
    }
}

impl TopLevelDef {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(self.as_cst(), SyntaxKind::Id)
    }
}

macro_rules! function_like {
    ($($name:ident),+) => {
        $(
            impl $name {
                pub fn name(&self) -> Option<SyntaxToken> {
                    token(&self.0, SyntaxKind::Id)
                }

                pub fn params(&self) -> Option<ParamList> {
                    child(&self.0, ParamList::cast)
                }

                pub fn return_types(&self) -> Option<TypeList> {
                    child(&self.0, TypeList::cast)
                }

                pub fn body(&self) -> Option<Block> {
                    child(&self.0, Block::cast)
                }
            }
        )+
    };
}

function_like!(FunctionDef, TailFunctionDef, CoroutineDef);

impl NamespaceDef {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }

    pub fn defs(&self) -> impl Iterator<Item = TopLevelDef> + '_ {
        children(&self.0, TopLevelDef::cast)
    }
}

impl NamespaceSetDef {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }
}

impl ParamList {
    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        children(&self.0, Param::cast)
    }
}

impl Param {
    pub fn ty(&self) -> Option<Type> {
        child(&self.0, Type::cast)
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }
}

impl TypeList {
    pub fn types(&self) -> impl Iterator<Item = Type> + '_ {
        children(&self.0, Type::cast)
    }
}

impl TypeParamList {
    pub fn types(&self) -> impl Iterator<Item = Type> + '_ {
        children(&self.0, Type::cast)
    }
}

impl NamedType {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }
}

impl PointerType {
    /// Pointee type name.
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }
}

impl FixedArrayType {
    pub fn size(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::IntLiteral)
    }

    /// Element type name.
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }
}

macro_rules! fn_type_like {
    ($($name:ident),+) => {
        $(
            impl $name {
                pub fn params(&self) -> Option<TypeParamList> {
                    child(&self.0, TypeParamList::cast)
                }

                pub fn returns(&self) -> Option<Type> {
                    child(&self.0, Type::cast)
                }
            }
        )+
    };
}

fn_type_like!(FnType, TailFnType, CoroFnType);

macro_rules! binding_like {
    ($($name:ident),+) => {
        $(
            impl $name {
                pub fn name(&self) -> Option<SyntaxToken> {
                    token(&self.0, SyntaxKind::Id)
                }

                pub fn ty(&self) -> Option<Type> {
                    child(&self.0, Type::cast)
                }

                pub fn expr(&self) -> Option<Expr> {
                    child(&self.0, Expr::cast)
                }
            }
        )+
    };
}

binding_like!(VarDef, LetDef);

impl Assignment {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }

    pub fn operator(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind().is_assign_op())
    }

    pub fn value(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl ReturnStmt {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl GotoStmt {
    pub fn label(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }
}

impl LabeledStmt {
    pub fn label(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }

    pub fn stmt(&self) -> Option<ComplexStmt> {
        child(&self.0, ComplexStmt::cast)
    }
}

impl IfStmt {
    pub fn cond_expr(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn true_stmt(&self) -> Option<ComplexStmt> {
        child(&self.0, ComplexStmt::cast)
    }

    pub fn false_stmt(&self) -> Option<ComplexStmt> {
        child_after(&self.0, SyntaxKind::KwElse, ComplexStmt::cast)
    }
}

impl WhileStmt {
    pub fn condition(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn body(&self) -> Option<ComplexStmt> {
        child(&self.0, ComplexStmt::cast)
    }
}

impl DoWhileStmt {
    pub fn body(&self) -> Option<ComplexStmt> {
        child(&self.0, ComplexStmt::cast)
    }

    pub fn condition(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl ForStmt {
    pub fn initializer(&self) -> Option<AtomicStmt> {
        self.header_slot(0).and_then(AtomicStmt::cast)
    }

    pub fn condition(&self) -> Option<Expr> {
        self.header_slot(1).and_then(Expr::cast)
    }

    pub fn update(&self) -> Option<AtomicStmt> {
        self.header_slot(2).and_then(AtomicStmt::cast)
    }

    pub fn body(&self) -> Option<ComplexStmt> {
        child_after(&self.0, SyntaxKind::ParenClose, ComplexStmt::cast)
    }

    /// Header slots are delimited by the direct `;` children.
    fn header_slot(&self, slot: usize) -> Option<SyntaxNode> {
        let mut separators = 0;
        for element in self.0.children_with_tokens() {
            match element {
                rowan::NodeOrToken::Token(t) if t.kind() == SyntaxKind::Semicolon => {
                    separators += 1;
                }
                rowan::NodeOrToken::Token(t) if t.kind() == SyntaxKind::ParenClose => break,
                rowan::NodeOrToken::Node(n) if separators == slot => return Some(n),
                _ => {}
            }
        }
        None
    }
}

impl Block {
    pub fn stmt_list(&self) -> Option<StmtList> {
        child(&self.0, StmtList::cast)
    }

    /// Statements in order; empty for `{ }`.
    pub fn stmts(&self) -> impl Iterator<Item = ComplexStmt> {
        self.stmt_list()
            .into_iter()
            .flat_map(|list| list.0.children().filter_map(ComplexStmt::cast))
    }
}

impl StmtList {
    pub fn stmts(&self) -> impl Iterator<Item = ComplexStmt> + '_ {
        children(&self.0, ComplexStmt::cast)
    }
}

impl Literal {
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind().is_literal())
    }

    pub fn kind(&self) -> Option<LiteralKind> {
        let kind = match self.token()?.kind() {
            SyntaxKind::IntLiteral => LiteralKind::Int,
            SyntaxKind::FloatLiteral => LiteralKind::Float,
            SyntaxKind::BinaryLiteral => LiteralKind::Binary,
            SyntaxKind::HexLiteral => LiteralKind::Hex,
            SyntaxKind::OctalLiteral => LiteralKind::Octal,
            SyntaxKind::KwTrue | SyntaxKind::KwFalse => LiteralKind::Bool,
            SyntaxKind::KwNull => LiteralKind::Null,
            _ => return None,
        };
        Some(kind)
    }
}

impl NameRef {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }
}

impl CallExpr {
    /// The `fn` field: any expression, including another call.
    pub fn callee(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn arguments(&self) -> Option<ArgList> {
        child(&self.0, ArgList::cast)
    }

    pub fn args(&self) -> impl Iterator<Item = Expr> {
        self.arguments()
            .into_iter()
            .flat_map(|list| list.0.children().filter_map(Expr::cast))
    }
}

impl ArgList {
    pub fn args(&self) -> impl Iterator<Item = Expr> + '_ {
        children(&self.0, Expr::cast)
    }
}

impl ParenExpr {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl BinaryExpr {
    pub fn lhs(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn rhs(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }

    pub fn operator(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind().binary_precedence().is_some())
    }

    pub fn op(&self) -> Option<BinaryOp> {
        self.operator().and_then(|t| BinaryOp::from_kind(t.kind()))
    }
}
