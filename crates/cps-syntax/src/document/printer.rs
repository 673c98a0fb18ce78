use std::fmt::Write;

use rowan::{NodeOrToken, TextRange};

use crate::parser::ast::{
    self, AtomicStmt, ComplexStmt, Expr, Program, TopLevelDef, Type,
};
use crate::parser::fields::labeled_children;
use crate::parser::{SyntaxKind, SyntaxNode, SyntaxToken};

/// Raw tree dump: one element per line, field labels as `label: ` prefixes.
pub struct CstPrinter {
    root: SyntaxNode,
    trivia: bool,
    spans: bool,
    fields: bool,
}

impl CstPrinter {
    pub fn new(root: SyntaxNode) -> Self {
        Self {
            root,
            trivia: false,
            spans: false,
            fields: true,
        }
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn with_fields(mut self, value: bool) -> Self {
        self.fields = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(&self.root, None, 0, w)
    }

    fn format_node(
        &self,
        node: &SyntaxNode,
        label: Option<&str>,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let label = self.label_str(label);
        let span = self.span_str(node.text_range());
        writeln!(w, "{prefix}{label}{:?}{span}", node.kind())?;

        let mut labels = labeled_children(node).into_iter().map(|(label, _)| label);
        for child in node.children_with_tokens() {
            let label = if child.kind().is_trivia() {
                None
            } else {
                labels.next().flatten()
            };
            match child {
                NodeOrToken::Node(n) => self.format_node(&n, label, indent + 1, w)?,
                NodeOrToken::Token(t) => self.format_token(&t, label, indent + 1, w)?,
            }
        }
        Ok(())
    }

    fn format_token(
        &self,
        token: &SyntaxToken,
        label: Option<&str>,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        if token.kind().is_trivia() && !self.trivia {
            return Ok(());
        }
        let prefix = "  ".repeat(indent);
        let label = self.label_str(label);
        let span = self.span_str(token.text_range());
        writeln!(w, "{prefix}{label}{:?}{span} {:?}", token.kind(), token.text())
    }

    fn label_str(&self, label: Option<&str>) -> String {
        match label {
            Some(name) if self.fields => format!("{name}: "),
            _ => String::new(),
        }
    }

    fn span_str(&self, range: TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(" [{}..{}]", u32::from(range.start()), u32::from(range.end()))
    }
}

/// Typed outline of a program: definition headers, then statements one per line.
///
/// Binary expressions are fully parenthesized. Pieces lost to recovery render
/// as `?`, unparsed regions as `<error>`.
pub struct AstPrinter {
    program: Program,
    spans: bool,
}

impl AstPrinter {
    pub fn new(program: Program) -> Self {
        Self {
            program,
            spans: false,
        }
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_items(self.program.as_cst(), 0, w)
    }

    /// Definitions and error regions of a program or namespace body, in source order.
    fn format_items(&self, parent: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        for child in parent.children() {
            if child.kind() == SyntaxKind::Error {
                self.line(indent, "<error>", child.text_range(), w)?;
            } else if let Some(def) = TopLevelDef::cast(child) {
                self.format_def(&def, indent, w)?;
            }
        }
        Ok(())
    }

    fn format_def(&self, def: &TopLevelDef, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let range = def.text_range();
        match def {
            TopLevelDef::Function(f) => {
                let header = function_header("fn", f.name(), f.params(), f.return_types());
                self.line(indent, &header, range, w)?;
                self.format_block_body(f.body(), indent + 1, w)
            }
            TopLevelDef::TailFunction(f) => {
                let header = function_header("tail fn", f.name(), f.params(), f.return_types());
                self.line(indent, &header, range, w)?;
                self.format_block_body(f.body(), indent + 1, w)
            }
            TopLevelDef::Coroutine(f) => {
                let header = function_header("coro", f.name(), f.params(), f.return_types());
                self.line(indent, &header, range, w)?;
                self.format_block_body(f.body(), indent + 1, w)
            }
            TopLevelDef::Namespace(ns) => {
                self.line(indent, &format!("namespace {}", name_or_hole(ns.name())), range, w)?;
                self.format_items(ns.as_cst(), indent + 1, w)
            }
            TopLevelDef::NamespaceSet(ns) => {
                self.line(indent, &format!("namespace {};", name_or_hole(ns.name())), range, w)
            }
        }
    }

    fn format_block_body(
        &self,
        block: Option<ast::Block>,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let Some(block) = block else {
            return self.line(indent, "?", TextRange::default(), w);
        };
        for stmt in block.stmts() {
            self.format_stmt(&stmt, indent, w)?;
        }
        Ok(())
    }

    /// Loop and branch bodies: a block is flattened into its statements.
    fn format_body(&self, body: Option<ComplexStmt>, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        match body {
            Some(ComplexStmt::Block(block)) => self.format_block_body(Some(block), indent, w),
            Some(stmt) => self.format_stmt(&stmt, indent, w),
            None => self.line(indent, "?", TextRange::default(), w),
        }
    }

    fn format_stmt(&self, stmt: &ComplexStmt, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let range = stmt.text_range();
        match stmt {
            ComplexStmt::Atomic(AtomicStmt::Labeled(labeled)) => {
                self.line(indent, &format!(":{}", name_or_hole(labeled.label())), range, w)?;
                self.format_body(labeled.stmt(), indent + 1, w)
            }
            ComplexStmt::Atomic(atomic) => self.line(indent, &atomic_text(atomic), range, w),
            ComplexStmt::If(stmt) => {
                self.line(indent, &format!("if {}", expr_text(stmt.cond_expr())), range, w)?;
                self.format_body(stmt.true_stmt(), indent + 1, w)?;
                if let Some(false_stmt) = stmt.false_stmt() {
                    self.line(indent, "else", false_stmt.text_range(), w)?;
                    self.format_body(Some(false_stmt), indent + 1, w)?;
                }
                Ok(())
            }
            ComplexStmt::While(stmt) => {
                self.line(indent, &format!("while {}", expr_text(stmt.condition())), range, w)?;
                self.format_body(stmt.body(), indent + 1, w)
            }
            ComplexStmt::DoWhile(stmt) => {
                self.line(indent, "do", range, w)?;
                self.format_body(stmt.body(), indent + 1, w)?;
                self.line(indent, &format!("while {}", expr_text(stmt.condition())), range, w)
            }
            ComplexStmt::For(stmt) => {
                let slot = |s: Option<AtomicStmt>| s.map_or_else(|| "_".to_string(), |s| atomic_text(&s));
                let condition = stmt
                    .condition()
                    .map_or_else(|| "_".to_string(), |e| expr_text(Some(e)));
                let header = format!(
                    "for {}; {}; {}",
                    slot(stmt.initializer()),
                    condition,
                    slot(stmt.update())
                );
                self.line(indent, &header, range, w)?;
                self.format_body(stmt.body(), indent + 1, w)
            }
            ComplexStmt::Block(block) => {
                self.line(indent, "block", range, w)?;
                self.format_block_body(Some(block.clone()), indent + 1, w)
            }
        }
    }

    fn line(&self, indent: usize, text: &str, range: TextRange, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        if self.spans && !range.is_empty() {
            writeln!(w, "{prefix}{text} [{}..{}]", u32::from(range.start()), u32::from(range.end()))
        } else {
            writeln!(w, "{prefix}{text}")
        }
    }
}

fn name_or_hole(token: Option<SyntaxToken>) -> String {
    token.map_or_else(|| "?".to_string(), |t| t.text().to_string())
}

fn function_header(
    keyword: &str,
    name: Option<SyntaxToken>,
    params: Option<ast::ParamList>,
    returns: Option<ast::TypeList>,
) -> String {
    let params = params
        .map(|list| {
            list.params()
                .map(|p| format!("{} {}", type_text(p.ty()), name_or_hole(p.name())))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();
    let returns = returns
        .map(|list| list.types().map(|t| type_text(Some(t))).collect::<Vec<_>>().join(", "))
        .unwrap_or_else(|| "?".to_string());
    format!("{keyword} {}({params}) {returns}", name_or_hole(name))
}

fn type_text(ty: Option<Type>) -> String {
    let Some(ty) = ty else {
        return "?".to_string();
    };
    match ty {
        Type::Named(t) => name_or_hole(t.name()),
        Type::Pointer(t) => format!("*{}", name_or_hole(t.name())),
        Type::FixedArray(t) => format!("[{}]{}", name_or_hole(t.size()), name_or_hole(t.name())),
        Type::Fn(t) => fn_type_text("fn", t.params(), t.returns()),
        Type::TailFn(t) => fn_type_text("tail fn", t.params(), t.returns()),
        Type::CoroFn(t) => fn_type_text("coro", t.params(), t.returns()),
    }
}

fn fn_type_text(keyword: &str, params: Option<ast::TypeParamList>, returns: Option<Type>) -> String {
    let params = params
        .map(|list| list.types().map(|t| type_text(Some(t))).collect::<Vec<_>>().join(", "))
        .unwrap_or_default();
    format!("{keyword}({params}) {}", type_text(returns))
}

fn atomic_text(stmt: &AtomicStmt) -> String {
    match stmt {
        AtomicStmt::Var(def) => format!(
            "var {} {} = {}",
            name_or_hole(def.name()),
            type_text(def.ty()),
            expr_text(def.expr())
        ),
        AtomicStmt::Let(def) => format!(
            "let {} {} = {}",
            name_or_hole(def.name()),
            type_text(def.ty()),
            expr_text(def.expr())
        ),
        AtomicStmt::Assignment(a) => format!(
            "{} {} {}",
            name_or_hole(a.name()),
            name_or_hole(a.operator()),
            expr_text(a.value())
        ),
        AtomicStmt::Return(r) => match r.expr() {
            Some(expr) => format!("return {}", expr_text(Some(expr))),
            None => "return".to_string(),
        },
        AtomicStmt::Continue(_) => "continue".to_string(),
        AtomicStmt::Break(_) => "break".to_string(),
        AtomicStmt::Suspend(_) => "suspend".to_string(),
        AtomicStmt::Goto(g) => format!("goto {}", name_or_hole(g.label())),
        AtomicStmt::Labeled(l) => format!(":{}", name_or_hole(l.label())),
    }
}

fn expr_text(expr: Option<Expr>) -> String {
    let Some(expr) = expr else {
        return "?".to_string();
    };
    match expr {
        Expr::Literal(lit) => name_or_hole(lit.token()),
        Expr::NameRef(name) => name_or_hole(name.name()),
        Expr::Call(call) => {
            let args = call.args().map(|a| expr_text(Some(a))).collect::<Vec<_>>().join(", ");
            format!("{}({args})", expr_text(call.callee()))
        }
        Expr::Paren(paren) => expr_text(paren.expr()),
        Expr::Binary(bin) => format!(
            "({} {} {})",
            expr_text(bin.lhs()),
            bin.op().map_or("?", |op| op.symbol()),
            expr_text(bin.rhs())
        ),
    }
}
