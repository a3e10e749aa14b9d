//! Type inference pass - attaches a type to every node and checks the rules

use crate::ast::*;
use crate::types::PrimitiveType;
use super::log::{Category, ErrorLog};
use super::rules::TypeChecker;
use super::symbols::SymbolTable;

/// A rule violation found while typing a node
type Violation = (Category, String);

/// Single post-order walk over a Nimble tree.
///
/// Children are typed before their parent, each node's `ty` is written
/// exactly once, and every violation is logged while the node falls back
/// to `PrimitiveType::Error`.
pub struct TypeInference<'a> {
    symbols: &'a mut SymbolTable,
    log: &'a mut ErrorLog,
    type_checker: TypeChecker,
}

impl<'a> TypeInference<'a> {
    pub fn new(symbols: &'a mut SymbolTable, log: &'a mut ErrorLog) -> Self {
        Self {
            symbols,
            log,
            type_checker: TypeChecker::new(),
        }
    }

    /// Analyze a complete script
    pub fn analyze_script(&mut self, script: &mut Script) {
        self.analyze_main(&mut script.main);
    }

    pub fn analyze_main(&mut self, main: &mut Main) {
        self.analyze_body(&mut main.body);
    }

    pub fn analyze_body(&mut self, body: &mut Body) {
        for decl in &mut body.vars.decls {
            self.analyze_var_dec(decl);
        }
        self.analyze_block(&mut body.block);
    }

    pub fn analyze_block(&mut self, block: &mut Block) {
        for stmt in &mut block.stmts {
            self.analyze_stmt(stmt);
        }
    }

    pub fn analyze_var_dec(&mut self, decl: &mut VarDec) -> PrimitiveType {
        let init_ty = decl.init.as_mut().map(|init| self.analyze_expr(init));

        let (ty, violation) = match PrimitiveType::from_type_name(&decl.type_name) {
            None => (
                PrimitiveType::Error,
                Some((
                    Category::UndefinedName,
                    format!("unknown type '{}' in declaration of '{}'", decl.type_name, decl.name),
                )),
            ),
            Some(declared) => match init_ty {
                Some(actual) if !self.type_checker.is_assignable(declared, actual) => (
                    PrimitiveType::Error,
                    Some((
                        Category::AssignToWrongType,
                        format!(
                            "'{}' is declared {} but initialised with {}",
                            decl.name, declared, actual
                        ),
                    )),
                ),
                _ => (declared, None),
            },
        };

        self.symbols.define(&decl.name, ty);
        decl.valid = violation.is_none();
        if let Some((category, message)) = violation {
            self.log.add(decl.to_string(), decl.span, category, message);
        }
        decl.ty = Some(ty);
        ty
    }

    pub fn analyze_stmt(&mut self, stmt: &mut Stmt) -> PrimitiveType {
        let (ty, violation) = match &mut stmt.kind {
            StmtKind::Assign { name, value, valid } => {
                let value_ty = self.analyze_expr(value);
                let outcome = self.assignment(name, value_ty);
                *valid = outcome.1.is_none();
                outcome
            }
            StmtKind::While { condition, body } => {
                let cond_ty = self.analyze_expr(condition);
                self.analyze_block(body);
                self.condition(condition, cond_ty)
            }
            StmtKind::If { condition, then_block, else_block } => {
                let cond_ty = self.analyze_expr(condition);
                self.analyze_block(then_block);
                if let Some(else_block) = else_block {
                    self.analyze_block(else_block);
                }
                self.condition(condition, cond_ty)
            }
            StmtKind::Print(expr) => {
                let expr_ty = self.analyze_expr(expr);
                if self.type_checker.is_printable(expr_ty) {
                    (expr_ty, None)
                } else {
                    (
                        PrimitiveType::Error,
                        Some((Category::UnprintableExpression, format!("cannot print {}", expr))),
                    )
                }
            }
        };

        if let Some((category, message)) = violation {
            self.log.add(stmt.to_string(), stmt.span, category, message);
        }
        stmt.ty = Some(ty);
        ty
    }

    /// Assignments check against the variable's current type. A variable
    /// already poisoned to `Error` stays poisoned whatever the value is.
    fn assignment(&mut self, name: &str, value_ty: PrimitiveType) -> (PrimitiveType, Option<Violation>) {
        match self.symbols.lookup(name) {
            None => (
                PrimitiveType::Error,
                Some((
                    Category::UndefinedName,
                    format!("cannot assign to '{}': it has not been declared", name),
                )),
            ),
            Some(PrimitiveType::Error) => (
                PrimitiveType::Error,
                Some((
                    Category::AssignToWrongType,
                    format!("'{}' was previously mis-assigned and cannot be assigned again", name),
                )),
            ),
            Some(current) if self.type_checker.is_assignable(current, value_ty) => (current, None),
            Some(current) => {
                self.symbols.define(name, PrimitiveType::Error);
                (
                    PrimitiveType::Error,
                    Some((
                        Category::AssignToWrongType,
                        format!("'{}' has type {} but was assigned {}", name, current, value_ty),
                    )),
                )
            }
        }
    }

    fn condition(&self, condition: &Expr, cond_ty: PrimitiveType) -> (PrimitiveType, Option<Violation>) {
        if self.type_checker.is_condition_type(cond_ty) {
            (cond_ty, None)
        } else {
            (
                PrimitiveType::Error,
                Some((
                    Category::ConditionNotBool,
                    format!("expression {} is {}, not Bool", condition, cond_ty),
                )),
            )
        }
    }

    pub fn analyze_expr(&mut self, expr: &mut Expr) -> PrimitiveType {
        let (ty, violation) = match &mut expr.kind {
            ExprKind::IntLiteral(_) => (PrimitiveType::Int, None),
            ExprKind::BoolLiteral(_) => (PrimitiveType::Bool, None),
            ExprKind::StringLiteral(_) => (PrimitiveType::String, None),

            ExprKind::Parens(inner) => (self.analyze_expr(inner), None),

            ExprKind::Variable(name) => match self.symbols.lookup(name) {
                Some(ty) => (ty, None),
                None => (
                    PrimitiveType::Error,
                    Some((
                        Category::UndefinedName,
                        format!("'{}' has not been declared", name),
                    )),
                ),
            },

            ExprKind::Unary { op, operand } => {
                let operand_ty = self.analyze_expr(operand);
                match self.type_checker.unary_result_type(*op, operand_ty) {
                    Some(ty) => (ty, None),
                    None => (
                        PrimitiveType::Error,
                        Some((
                            Category::InvalidNegation,
                            format!("cannot apply {} to {}", op.as_str(), operand_ty),
                        )),
                    ),
                }
            }

            ExprKind::Binary { op, left, right } => {
                let left_ty = self.analyze_expr(left);
                let right_ty = self.analyze_expr(right);
                match self.type_checker.binary_result_type(*op, left_ty, right_ty) {
                    Some(ty) => (ty, None),
                    None => (
                        PrimitiveType::Error,
                        Some((
                            Category::InvalidBinaryOp,
                            format!("cannot apply {} to {} and {}", op.as_str(), left_ty, right_ty),
                        )),
                    ),
                }
            }
        };

        if let Some((category, message)) = violation {
            self.log.add(expr.to_string(), expr.span, category, message);
        }
        expr.ty = Some(ty);
        ty
    }
}
