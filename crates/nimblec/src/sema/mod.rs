//! Semantic analysis module
//!
//! This module infers the type of every node, tracks declared variables
//! and records violations of the typing rules.

mod analyzer;
mod dump;
mod log;
mod rules;
mod symbols;

pub use analyzer::TypeInference;
pub use dump::{InferredTypes, TypedNode};
pub use log::{Category, ErrorLog, LogEntry};
pub use rules::TypeChecker;
pub use symbols::SymbolTable;

use crate::ast::Script;
use crate::common::CompileResult;

/// Configuration options for a semantic analysis run
#[derive(Debug, Clone, Default)]
pub struct SemaConfig {
    pub verbose: bool,
    /// Print every node's inferred type after the pass
    pub dump_types: bool,
}

/// Result of analysing one script
#[derive(Debug, Default)]
pub struct Analysis {
    pub symbols: SymbolTable,
    pub log: ErrorLog,
}

/// Run type inference over `script` with a fresh symbol table and log.
///
/// Rule violations end up in the returned log. An `Err` means a node was
/// left without a type, which is a bug in the pass.
pub fn check_script(script: &mut Script, config: &SemaConfig) -> CompileResult<Analysis> {
    let mut analysis = Analysis::default();

    if config.verbose {
        eprintln!("Inferring types...");
    }
    TypeInference::new(&mut analysis.symbols, &mut analysis.log).analyze_script(script);

    let types = InferredTypes::from_script(script);
    if config.dump_types {
        eprintln!("=== Inferred Types ===");
        eprint!("{}", types);
        eprintln!("=== End Inferred Types ===\n");
    }
    types.ensure_resolved()?;

    if config.verbose {
        eprintln!(
            "Analyzed {} variable(s), {} error(s)",
            analysis.symbols.len(),
            analysis.log.total_entries()
        );
    }

    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;
    use crate::types::PrimitiveType;
    use pretty_assertions::assert_eq;

    fn script(decls: Vec<VarDec>, stmts: Vec<Stmt>) -> Script {
        Script::new(Main::new(Body::new(VarBlock::new(decls), Block::new(stmts))))
    }

    #[test]
    fn test_check_clean_script() {
        let mut script = script(
            vec![
                VarDec::new("count", "Int", Some(Expr::int(0))),
                VarDec::new("greeting", "String", Some(Expr::string("\"hi\""))),
            ],
            vec![
                Stmt::while_loop(
                    Expr::binary(BinaryOp::Lt, Expr::variable("count"), Expr::int(10)),
                    Block::new(vec![
                        Stmt::assign(
                            "count",
                            Expr::binary(BinaryOp::Add, Expr::variable("count"), Expr::int(1)),
                        ),
                        Stmt::print(Expr::variable("greeting")),
                    ]),
                ),
            ],
        );

        let analysis = check_script(&mut script, &SemaConfig::default()).unwrap();
        assert!(analysis.log.is_empty());
        assert_eq!(
            analysis.symbols.iter().collect::<Vec<_>>(),
            vec![("count", PrimitiveType::Int), ("greeting", PrimitiveType::String)]
        );
        assert_eq!(script.main.body.block.stmts[0].ty, Some(PrimitiveType::Bool));
    }

    #[test]
    fn test_check_reports_and_continues() {
        let mut script = script(
            vec![VarDec::new("flag", "Bool", Some(Expr::int(1)))],
            vec![
                Stmt::if_else(Expr::variable("flag"), Block::empty(), None),
                Stmt::print(Expr::variable("missing")),
                Stmt::print(Expr::int(3)),
            ],
        );

        let analysis = check_script(&mut script, &SemaConfig::default()).unwrap();
        let categories: Vec<_> = analysis.log.entries().iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![
                Category::AssignToWrongType,
                Category::ConditionNotBool,
                Category::UndefinedName,
                Category::UnprintableExpression,
            ]
        );
        assert_eq!(analysis.symbols.lookup("flag"), Some(PrimitiveType::Error));
        assert_eq!(script.main.body.block.stmts[2].ty, Some(PrimitiveType::Int));
    }

    #[test]
    fn test_runs_do_not_share_state() {
        let mut first = script(vec![VarDec::new("x", "Int", None)], vec![]);
        let mut second = script(vec![], vec![Stmt::print(Expr::variable("x"))]);

        let config = SemaConfig { verbose: false, dump_types: false };
        let a = check_script(&mut first, &config).unwrap();
        let b = check_script(&mut second, &config).unwrap();

        assert!(a.log.is_empty());
        assert!(b.symbols.is_empty());
        assert!(b.log.includes_exactly(Category::UndefinedName, 1, "x"));
    }
}
