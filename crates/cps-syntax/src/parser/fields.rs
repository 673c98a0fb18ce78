//! Named fields over raw CST nodes.
//!
//! The schema table below is the single place where field names and
//! cardinalities are defined. Labels are assigned positionally from the direct,
//! non-trivia children of a node, so lookups work on any tree, including
//! partially recovered ones.

use indexmap::IndexMap;

use super::cst::{SyntaxElement, SyntaxKind, SyntaxNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Cardinality {
    Required,
    Optional,
    Repeated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub cardinality: Cardinality,
}

macro_rules! fields {
    ($($name:literal: $card:ident),* $(,)?) => {
        &[$(FieldSpec { name: $name, cardinality: Cardinality::$card }),*]
    };
}

/// Fields of `kind` in source order. Tokens-only and error kinds have none.
pub fn schema(kind: SyntaxKind) -> &'static [FieldSpec] {
    use SyntaxKind::*;
    match kind {
        Program => fields!["top_level_def": Repeated],
        FunctionDef | TailFunctionDef | CoroutineDef => fields![
            "name": Required,
            "params": Optional,
            "return_types": Required,
            "body": Required,
        ],
        NamespaceDef => fields!["name": Required, "defs": Repeated],
        NamespaceSetDef => fields!["name": Required],
        ParamList => fields!["param": Repeated],
        Param => fields!["type": Required, "name": Required],
        TypeList | TypeParamList => fields!["types": Repeated],
        NamedType | PointerType => fields!["name": Required],
        FixedArrayType => fields!["size": Required, "name": Required],
        FnType | TailFnType | CoroFnType => fields!["params": Required, "returns": Required],
        VarDef | LetDef => fields!["name": Required, "type": Required, "expr": Required],
        Assignment => fields!["name": Required, "operator": Required, "value": Required],
        ReturnStmt => fields!["expr": Optional],
        GotoStmt => fields!["label": Required],
        LabeledStmt => fields!["label": Required, "stmt": Required],
        IfStmt => fields![
            "cond_expr": Required,
            "true_stmt": Required,
            "false_stmt": Optional,
        ],
        WhileStmt => fields!["condition": Required, "body": Required],
        DoWhileStmt => fields!["body": Required, "condition": Required],
        ForStmt => fields![
            "initializer": Optional,
            "condition": Optional,
            "update": Optional,
            "body": Required,
        ],
        Block => fields!["stmts": Optional],
        StmtList => fields!["stmt": Repeated],
        NameRef => fields!["name": Required],
        CallExpr => fields!["fn": Required, "arguments": Optional],
        ArgList => fields!["args": Repeated],
        ParenExpr => fields!["expr": Required],
        BinaryExpr => fields![
            "lhs_expr": Required,
            "operator": Required,
            "rhs_expr": Required,
        ],
        _ => &[],
    }
}

/// Value of one field: a single slot or an ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Single(Option<SyntaxElement>),
    Repeated(Vec<SyntaxElement>),
}

impl FieldValue {
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Single(slot) => slot.is_some(),
            FieldValue::Repeated(items) => !items.is_empty(),
        }
    }

    pub fn elements(&self) -> Vec<SyntaxElement> {
        match self {
            FieldValue::Single(slot) => slot.iter().cloned().collect(),
            FieldValue::Repeated(items) => items.clone(),
        }
    }
}

/// Every schema field of `node`, in schema order, absent ones included.
pub fn fields(node: &SyntaxNode) -> IndexMap<&'static str, FieldValue> {
    let mut map: IndexMap<&'static str, FieldValue> = schema(node.kind())
        .iter()
        .map(|spec| {
            let value = match spec.cardinality {
                Cardinality::Repeated => FieldValue::Repeated(Vec::new()),
                _ => FieldValue::Single(None),
            };
            (spec.name, value)
        })
        .collect();

    for (label, element) in labeled_children(node) {
        let Some(name) = label else { continue };
        match map.get_mut(name) {
            Some(FieldValue::Single(slot)) if slot.is_none() => *slot = Some(element),
            Some(FieldValue::Repeated(items)) => items.push(element),
            _ => {}
        }
    }
    map
}

/// First child labeled `name`.
pub fn field(node: &SyntaxNode, name: &str) -> Option<SyntaxElement> {
    labeled_children(node)
        .into_iter()
        .find(|(label, _)| *label == Some(name))
        .map(|(_, element)| element)
}

/// All children labeled `name`, in order.
pub fn field_all(node: &SyntaxNode, name: &str) -> Vec<SyntaxElement> {
    labeled_children(node)
        .into_iter()
        .filter(|(label, _)| *label == Some(name))
        .map(|(_, element)| element)
        .collect()
}

/// Label of `element` within its parent.
pub fn field_name(element: &SyntaxElement) -> Option<&'static str> {
    let parent = element.parent()?;
    labeled_children(&parent)
        .into_iter()
        .find(|(_, child)| child == element)
        .and_then(|(label, _)| label)
}

/// Required fields that are absent. Empty for every node of a valid tree.
pub fn missing_required(node: &SyntaxNode) -> Vec<&'static str> {
    let present = fields(node);
    schema(node.kind())
        .iter()
        .filter(|spec| spec.cardinality == Cardinality::Required)
        .filter(|spec| !present.get(spec.name).is_some_and(FieldValue::is_present))
        .map(|spec| spec.name)
        .collect()
}

#[derive(Default)]
struct Cursor {
    separators: usize,
    past_marker: bool,
    exprs: usize,
}

/// Direct non-trivia children of `node`, each with its field label (if any).
pub fn labeled_children(node: &SyntaxNode) -> Vec<(Option<&'static str>, SyntaxElement)> {
    let parent = node.kind();
    let mut cursor = Cursor::default();
    node.children_with_tokens()
        .filter(|element| !element.kind().is_trivia())
        .map(|element| (label(parent, element.kind(), &mut cursor), element))
        .collect()
}

fn label(parent: SyntaxKind, kind: SyntaxKind, cursor: &mut Cursor) -> Option<&'static str> {
    use SyntaxKind::*;
    let label = match parent {
        Program if kind.is_top_level_def() => "top_level_def",
        FunctionDef | TailFunctionDef | CoroutineDef => match kind {
            Id => "name",
            ParamList => "params",
            TypeList => "return_types",
            Block => "body",
            _ => return None,
        },
        NamespaceDef | NamespaceSetDef if kind == Id => "name",
        NamespaceDef if kind.is_top_level_def() => "defs",
        ParamList if kind == Param => "param",
        Param if kind.is_type() => "type",
        Param if kind == Id => "name",
        TypeList | TypeParamList if kind.is_type() => "types",
        NamedType | PointerType if kind == Id => "name",
        FixedArrayType if kind == IntLiteral => "size",
        FixedArrayType if kind == Id => "name",
        FnType | TailFnType | CoroFnType if kind == TypeParamList => "params",
        FnType | TailFnType | CoroFnType if kind.is_type() => "returns",
        VarDef | LetDef => match kind {
            Id => "name",
            k if k.is_type() => "type",
            k if k.is_expr() => "expr",
            _ => return None,
        },
        Assignment => match kind {
            Id => "name",
            k if k.is_assign_op() => "operator",
            k if k.is_expr() => "value",
            _ => return None,
        },
        ReturnStmt if kind.is_expr() => "expr",
        GotoStmt if kind == Id => "label",
        LabeledStmt if kind == Id => "label",
        LabeledStmt if kind.is_complex_stmt() => "stmt",
        IfStmt => match kind {
            KwElse => {
                cursor.past_marker = true;
                return None;
            }
            k if k.is_expr() => "cond_expr",
            k if k.is_complex_stmt() && cursor.past_marker => "false_stmt",
            k if k.is_complex_stmt() => "true_stmt",
            _ => return None,
        },
        WhileStmt | DoWhileStmt if kind.is_expr() => "condition",
        WhileStmt | DoWhileStmt if kind.is_complex_stmt() => "body",
        ForStmt => match kind {
            Semicolon => {
                cursor.separators += 1;
                return None;
            }
            ParenClose => {
                cursor.past_marker = true;
                return None;
            }
            k if cursor.past_marker && k.is_complex_stmt() => "body",
            k if cursor.past_marker || k.is_token() => return None,
            _ => match cursor.separators {
                0 => "initializer",
                1 => "condition",
                2 => "update",
                _ => return None,
            },
        },
        Block if kind == StmtList => "stmts",
        StmtList if kind.is_complex_stmt() => "stmt",
        NameRef if kind == Id => "name",
        CallExpr if kind.is_expr() => "fn",
        CallExpr if kind == ArgList => "arguments",
        ArgList if kind.is_expr() => "args",
        ParenExpr if kind.is_expr() => "expr",
        BinaryExpr => match kind {
            k if k.is_expr() => {
                cursor.exprs += 1;
                if cursor.exprs == 1 { "lhs_expr" } else { "rhs_expr" }
            }
            k if k.binary_precedence().is_some() => "operator",
            _ => return None,
        },
        _ => return None,
    };
    Some(label)
}
