//! `pseudoc` — a thin CLI front-end over [`pseudoc_drv::compile`] for local
//! and CI use. Desktop packaging and the editor front-end are out of scope
//! per `spec.md` §1; this binary exists only so the pipeline has a manual
//! entry point without embedding a browser runtime.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pseudoc_drv::error::DrvError;
use pseudoc_drv::{compile, CompileRequest};

/// Compile an IGCSE pseudocode source file to Python.
///
/// Reads from `input`, or from stdin when `input` is omitted or `-`.
/// Diagnostics are always printed to stderr, one per line, in the same
/// `(line, column, code)` order the wire format guarantees. Exits `0` on
/// success, `1` when compilation produced an error diagnostic, `2` on an I/O
/// failure reading the source.
#[derive(Parser, Debug)]
#[command(name = "pseudoc")]
#[command(author = "Pseudoc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compile IGCSE pseudocode to Python", long_about = None)]
struct Cli {
    /// Source file to compile; omit or pass `-` to read stdin.
    input: Option<PathBuf>,

    /// Name to report in diagnostics and the astJson/pythonCode output
    /// (defaults to `input`, or `<stdin>`).
    #[arg(long)]
    filename: Option<String>,

    /// Print the serialized AST (astJson) to stdout instead of Python.
    #[arg(long, conflicts_with = "emit_python")]
    emit_ast: bool,

    /// Print the generated Python source to stdout (the default when
    /// compilation succeeds and no other `--emit-*` flag is given).
    #[arg(long)]
    emit_python: bool,

    /// Enable verbose (debug-level) pipeline tracing on stderr.
    #[arg(short, long, env = "PSEUDOC_VERBOSE")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .try_init()
        .ok();
}

fn run(cli: Cli) -> Result<ExitCode, DrvError> {
    let (source, filename) = read_source(&cli)?;
    let request = CompileRequest::new(source, filename);
    let result = compile(&request);

    for diagnostic in &result.diagnostics {
        eprintln!(
            "{}:{}: {} {}: {}",
            diagnostic.line, diagnostic.column, diagnostic.severity, diagnostic.code, diagnostic.message
        );
        if let Some(hint) = &diagnostic.hint {
            eprintln!("  hint: {hint}");
        }
    }

    if cli.emit_ast {
        if let Some(ast_json) = &result.ast_json {
            println!("{ast_json}");
        }
    } else if cli.emit_python || result.success {
        if let Some(python_code) = &result.python_code {
            println!("{python_code}");
        }
    }

    if result.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn read_source(cli: &Cli) -> Result<(String, String), DrvError> {
    match &cli.input {
        Some(path) if path.as_os_str() != "-" => {
            let source = std::fs::read_to_string(path)
                .map_err(|e| DrvError::ReadSource(path.clone(), e))?;
            let filename = cli
                .filename
                .clone()
                .unwrap_or_else(|| path.display().to_string());
            Ok((source, filename))
        }
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| DrvError::ReadSource(PathBuf::from("<stdin>"), e))?;
            let filename = cli
                .filename
                .clone()
                .unwrap_or_else(|| "<stdin>".to_string());
            Ok((source, filename))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_input_path_and_flags() {
        let cli = Cli::parse_from(["pseudoc", "program.pseudo", "--emit-ast", "--verbose"]);
        assert_eq!(cli.input, Some(PathBuf::from("program.pseudo")));
        assert!(cli.emit_ast);
        assert!(cli.verbose);
    }

    #[test]
    fn cli_defaults_to_no_input_meaning_stdin() {
        let cli = Cli::parse_from(["pseudoc"]);
        assert_eq!(cli.input, None);
        assert!(!cli.emit_ast);
    }

    #[test]
    fn cli_rejects_emit_ast_and_emit_python_together() {
        let result = Cli::try_parse_from(["pseudoc", "x.pseudo", "--emit-ast", "--emit-python"]);
        assert!(result.is_err());
    }
}
