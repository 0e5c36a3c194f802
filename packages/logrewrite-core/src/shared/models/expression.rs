//! Expression tree
//!
//! A typed view over the engine's already-parsed expressions. Only the shapes
//! the rewrites reason about are modelled; everything else arrives as
//! [`ExprKind::Opaque`] with its source text.
//!
//! String literal values are stored decoded (`"a\nb"` holds a real newline).
//! Escaping is applied only when rendering, so rendering is the single place
//! where escape sequences are produced.

use super::types::{TypeDescriptor, SUPPLIER};
use crate::shared::text::{escape_java_char, escape_java_string};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralKind {
    String,
    Char,
    Int,
    Long,
    Float,
    Double,
    Boolean,
    Null,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub kind: LiteralKind,
    /// Decoded value (`"null"` for the null literal)
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    BitAnd,
    BitOr,
    BitXor,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::And => "&&",
            Self::Or => "||",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Self::Mul | Self::Div | Self::Rem => 12,
            Self::Add | Self::Sub => 11,
            Self::Lt | Self::Le | Self::Gt | Self::Ge => 9,
            Self::Eq | Self::Ne => 8,
            Self::BitAnd => 7,
            Self::BitXor => 6,
            Self::BitOr => 5,
            Self::And => 4,
            Self::Or => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodCall {
    /// Receiver; `None` for implicit `this` or an unqualified static call
    pub target: Option<Box<Expression>>,
    pub name: String,
    pub args: Vec<Expression>,
    pub is_static: bool,
    /// Declared parameter count of the resolved method
    pub param_count: usize,
    /// Fully-qualified declaring type, when resolved
    pub declaring_type: Option<String>,
}

impl MethodCall {
    pub fn is_declared_by(&self, fqn: &str) -> bool {
        self.declaring_type.as_deref() == Some(fqn)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExprKind {
    Literal(Literal),
    Identifier {
        name: String,
    },
    FieldAccess {
        target: Box<Expression>,
        name: String,
    },
    MethodCall(MethodCall),
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Lambda {
        params: Vec<String>,
        body: Box<Expression>,
    },
    New {
        class_name: String,
        args: Vec<Expression>,
    },
    Opaque {
        source: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expression {
    pub kind: ExprKind,
    pub ty: TypeDescriptor,
}

impl Expression {
    pub fn new(kind: ExprKind, ty: TypeDescriptor) -> Self {
        Self { kind, ty }
    }

    pub fn string_lit(value: impl Into<String>) -> Self {
        Self::literal(LiteralKind::String, value, TypeDescriptor::string())
    }

    pub fn int_lit(value: i64) -> Self {
        Self::literal(LiteralKind::Int, value.to_string(), TypeDescriptor::int())
    }

    pub fn bool_lit(value: bool) -> Self {
        Self::literal(LiteralKind::Boolean, value.to_string(), TypeDescriptor::boolean())
    }

    pub fn null_lit() -> Self {
        Self::literal(LiteralKind::Null, "null", TypeDescriptor::Unknown)
    }

    pub fn literal(kind: LiteralKind, value: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self::new(
            ExprKind::Literal(Literal {
                kind,
                value: value.into(),
            }),
            ty,
        )
    }

    pub fn ident(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self::new(ExprKind::Identifier { name: name.into() }, ty)
    }

    pub fn field(target: Expression, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self::new(
            ExprKind::FieldAccess {
                target: Box::new(target),
                name: name.into(),
            },
            ty,
        )
    }

    /// Instance call; `target: None` means implicit `this`
    pub fn call(
        target: Option<Expression>,
        name: impl Into<String>,
        args: Vec<Expression>,
        ty: TypeDescriptor,
    ) -> Self {
        let param_count = args.len();
        Self::new(
            ExprKind::MethodCall(MethodCall {
                target: target.map(Box::new),
                name: name.into(),
                args,
                is_static: false,
                param_count,
                declaring_type: None,
            }),
            ty,
        )
    }

    /// Static call qualified by its class (`String.format(..)`)
    pub fn static_call(
        class_fqn: &str,
        name: impl Into<String>,
        args: Vec<Expression>,
        ty: TypeDescriptor,
    ) -> Self {
        let simple = class_fqn.rsplit('.').next().unwrap_or(class_fqn);
        let param_count = args.len();
        Self::new(
            ExprKind::MethodCall(MethodCall {
                target: Some(Box::new(Expression::ident(
                    simple,
                    TypeDescriptor::class(class_fqn),
                ))),
                name: name.into(),
                args,
                is_static: true,
                param_count,
                declaring_type: Some(class_fqn.to_string()),
            }),
            ty,
        )
    }

    pub fn binary(op: BinaryOp, left: Expression, right: Expression, ty: TypeDescriptor) -> Self {
        Self::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            ty,
        )
    }

    /// String concatenation `left + right`
    pub fn concat(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOp::Add, left, right, TypeDescriptor::string())
    }

    /// Zero-argument supplier `() -> body`
    pub fn supplier(body: Expression) -> Self {
        Self::new(
            ExprKind::Lambda {
                params: Vec::new(),
                body: Box::new(body),
            },
            TypeDescriptor::class(SUPPLIER),
        )
    }

    pub fn new_object(class_fqn: impl Into<String>, args: Vec<Expression>) -> Self {
        let class_name: String = class_fqn.into();
        let ty = TypeDescriptor::class(class_name.clone());
        Self::new(ExprKind::New { class_name, args }, ty)
    }

    pub fn opaque(source: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self::new(
            ExprKind::Opaque {
                source: source.into(),
            },
            ty,
        )
    }

    /// Set the declaring type of a method call (no-op otherwise)
    pub fn declared_by(mut self, fqn: impl Into<String>) -> Self {
        if let ExprKind::MethodCall(call) = &mut self.kind {
            call.declaring_type = Some(fqn.into());
        }
        self
    }

    pub fn as_string_literal(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Literal(lit) if lit.kind == LiteralKind::String => Some(&lit.value),
            _ => None,
        }
    }

    pub fn as_method_call(&self) -> Option<&MethodCall> {
        match &self.kind {
            ExprKind::MethodCall(call) => Some(call),
            _ => None,
        }
    }

    /// `+` node producing a String
    pub fn is_string_concat(&self) -> bool {
        matches!(&self.kind, ExprKind::Binary { op: BinaryOp::Add, .. }) && self.ty.is_string()
    }

    pub fn is_lambda(&self) -> bool {
        matches!(self.kind, ExprKind::Lambda { .. })
    }

    /// Java source rendering
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Literal(lit) => match lit.kind {
                LiteralKind::String => write!(f, "\"{}\"", escape_java_string(&lit.value)),
                LiteralKind::Char => {
                    let c = lit.value.chars().next().unwrap_or('\0');
                    write!(f, "'{}'", escape_java_char(c))
                }
                LiteralKind::Long => write!(f, "{}L", lit.value),
                LiteralKind::Float => write!(f, "{}f", lit.value),
                _ => write!(f, "{}", lit.value),
            },
            ExprKind::Identifier { name } => write!(f, "{}", name),
            ExprKind::FieldAccess { target, name } => write!(f, "{}.{}", target, name),
            ExprKind::MethodCall(call) => {
                if let Some(target) = &call.target {
                    write!(f, "{}.", target)?;
                }
                write!(f, "{}(", call.name)?;
                write_args(f, &call.args)?;
                write!(f, ")")
            }
            ExprKind::Binary { op, left, right } => {
                write_operand(f, left, *op, false)?;
                write!(f, " {} ", op.symbol())?;
                write_operand(f, right, *op, true)
            }
            ExprKind::Lambda { params, body } => {
                match params.as_slice() {
                    [single] => write!(f, "{}", single)?,
                    _ => write!(f, "({})", params.join(", "))?,
                }
                write!(f, " -> {}", body)
            }
            ExprKind::New { class_name, args } => {
                let simple = class_name.rsplit('.').next().unwrap_or(class_name);
                write!(f, "new {}(", simple)?;
                write_args(f, args)?;
                write!(f, ")")
            }
            ExprKind::Opaque { source } => write!(f, "{}", source),
        }
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Expression]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", arg)?;
    }
    Ok(())
}

fn write_operand(
    f: &mut fmt::Formatter<'_>,
    operand: &Expression,
    parent: BinaryOp,
    is_right: bool,
) -> fmt::Result {
    let needs_parens = match &operand.kind {
        ExprKind::Binary { op, .. } => {
            op.precedence() < parent.precedence()
                || (is_right && op.precedence() == parent.precedence())
        }
        ExprKind::Lambda { .. } => true,
        _ => false,
    };
    if needs_parens {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}
