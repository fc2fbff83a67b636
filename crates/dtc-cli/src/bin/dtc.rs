//! The `dtc` CLI front end (spec §6 "Pretty-print surface"; §1 "the
//! pretty-printer, CLI, file I/O, and memory-allocator wrappers" are
//! out-of-scope collaborators — this binary is the thin shell a real
//! `dtc-parser` implementation would be wired into).
//!
//! Since no grammar is implemented ([`dtc_parser`] is a contract only),
//! `dtc` cannot actually compile a source file yet. `--print-ast` exists
//! so the [`dtc_ast::pretty`] surface (which spec §6 specifies completely
//! and which this workspace *does* implement) can be exercised end to end
//! on a small self-test fixture, matching the teacher's convention of a
//! CLI debug flag for inspecting an intermediate representation.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser as ClapParser;
use colored::Colorize;
use dtc_ast::{BinOp, Expr, ExprKind, Field, Literal, Param, Pretty, Stmt, TopLevel};
use dtc_common::Context;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser, Debug)]
#[command(name = "dtc", version, about = "Front end for the dtc compiler")]
struct CliArgs {
    /// Source file to compile.
    file: Option<PathBuf>,

    /// Pretty-print a built-in self-test fixture through dtc-ast's
    /// printer instead of compiling `file`.
    #[arg(long = "print-ast")]
    print_ast: bool,

    /// Increase log verbosity (tracing).
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// A small fixture exercising most of the pretty-printer's surface forms
/// (spec §6): a dependent struct parameter, a lambda body, and a
/// conditional — enough to sanity-check printing without a parser.
fn self_test_fixture(ctx: &mut Context) -> TopLevel {
    let n = ctx.intern("n");
    let flag = ctx.intern("flag");
    let point = ctx.intern("point");

    let struct_ty = Expr::new(
        ExprKind::Struct {
            fields: vec![
                Field {
                    ty: Expr::literal(Literal::U32, None),
                    name: n,
                },
                Field {
                    ty: Expr::literal(Literal::Bool, None),
                    name: flag,
                },
            ],
        },
        None,
    );

    let body = Expr::new(
        ExprKind::IfThenElse {
            cond: Box::new(Expr::new(
                ExprKind::Member {
                    record: Box::new(Expr::ident(point, None)),
                    field: flag,
                },
                None,
            )),
            then_branch: Box::new(Expr::new(
                ExprKind::Statement(Box::new(Stmt::Return(Expr::new(
                    ExprKind::BinOp(
                        BinOp::Add,
                        Box::new(Expr::new(
                            ExprKind::Member {
                                record: Box::new(Expr::ident(point, None)),
                                field: n,
                            },
                            None,
                        )),
                        Box::new(Expr::literal(Literal::Integral(1), None)),
                    ),
                    None,
                )))),
                None,
            )),
            else_branch: Box::new(Expr::new(
                ExprKind::Statement(Box::new(Stmt::Return(Expr::literal(Literal::Integral(0), None)))),
                None,
            )),
        },
        None,
    );
    TopLevel {
        name: ctx.intern("describe"),
        ret_ty: Expr::literal(Literal::U32, None),
        params: vec![Param {
            ty: struct_ty,
            name: Some(point),
        }],
        body,
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    if args.print_ast {
        let mut ctx = Context::new();
        let fixture = self_test_fixture(&mut ctx);
        println!("{}", Pretty::new(&fixture, &ctx.interner).to_string().green());
        return Ok(());
    }

    let Some(file) = args.file else {
        bail!("no input file given (pass a path, or --print-ast to exercise the printer)");
    };
    let _source = std::fs::read_to_string(&file)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", file.display()))?;

    bail!(
        "{}: no dtc-parser implementation is wired in yet (dtc-parser is a contract crate, \
         spec §1 out of scope)",
        file.display()
    );
}
