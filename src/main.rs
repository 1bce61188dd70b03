use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    process::{self, Command},
    rc::Rc,
    time::Instant,
};

use clap::Parser;
use inkwell::context::Context;
use kirk::{
    compiler::compiler::compile,
    errors::errors::{Error, ErrorTip},
    get_line_at_position,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

/// Compiles a Kirk program to LLVM IR
#[derive(Parser, Debug)]
#[command(name = "kirk")]
#[command(version)]
#[command(about = "Compiles a Kirk program to LLVM IR", long_about = None)]
struct Cli {
    /// Source file to compile
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Where to write the textual IR
    #[arg(short = 'o', long = "output", value_name = "OUTPUT", default_value = "output.ll")]
    output: PathBuf,

    /// Also run llc and clang to produce an executable next to the IR
    #[arg(long)]
    build: bool,

    /// Print the tokens and stop (debug)
    #[arg(long, conflicts_with = "build")]
    lex: bool,

    /// Print the IR to stdout instead of only writing it (debug)
    #[arg(long = "print-ir")]
    print_ir: bool,
}

fn main() {
    // Initialize structured logging with env-based filter, defaulting to info
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let cli = Cli::parse();

    if let Err(message) = run(&cli) {
        eprintln!("{}", message);
        process::exit(1);
    }
}

/// Runs the driver. Compile errors are displayed here; the returned
/// message is for failures outside the compiler (I/O, backend tools).
fn run(cli: &Cli) -> Result<(), String> {
    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.display().to_string());

    let source = read_to_string(&cli.file)
        .map_err(|error| format!("Failed to read {}: {}", cli.file.display(), error))?;

    let start = Instant::now();
    let tokens = tokenize(&source, Some(file_name.clone()));

    if cli.lex {
        for token in tokens.iter() {
            token.debug();
        }
        return Ok(());
    }

    let ast = parse(tokens, Rc::new(file_name.clone())).map_err(|error| {
        display_error(&error, &source, &cli.file);
        String::from("Compilation failed")
    })?;

    let context = Context::create();
    let compiled = compile(&ast, &file_name, &context).map_err(|error| {
        display_error(&error, &source, &cli.file);
        String::from("Compilation failed")
    })?;

    tracing::info!(elapsed = ?start.elapsed(), "generated IR");

    if cli.print_ir {
        println!("{}", compiled.print_to_string());
    }

    compiled
        .save_module_to_file(&cli.output)
        .map_err(|error| error.to_string())?;

    tracing::info!(output = %cli.output.display(), "wrote IR");

    if cli.build {
        build_executable(&cli.output)?;
        tracing::info!(elapsed = ?start.elapsed(), "built executable");
    }

    Ok(())
}

/// Runs `llc` and `clang` over the written IR. The object file and the
/// executable go next to it.
fn build_executable(ir_file: &Path) -> Result<(), String> {
    let object_file = ir_file.with_extension("o");
    let executable = ir_file.with_extension("");

    let llc_result = Command::new("llc")
        .arg("-filetype=obj")
        .arg("-relocation-model=pic")
        .arg(ir_file)
        .arg("-o")
        .arg(&object_file)
        .output()
        .map_err(|error| format!("Failed to run llc: {}", error))?;

    if !llc_result.status.success() {
        return Err(format!(
            "Failed to compile using llc:\n{}",
            String::from_utf8_lossy(&llc_result.stderr)
        ));
    }

    tracing::debug!(object = %object_file.display(), "compiled using llc");

    let clang_result = Command::new("clang")
        .args(["-fPIE", "-pie", "-o"])
        .arg(&executable)
        .arg(&object_file)
        .output()
        .map_err(|error| format!("Failed to run clang: {}", error))?;

    if !clang_result.status.success() {
        return Err(format!(
            "Failed to link using clang:\n{}",
            String::from_utf8_lossy(&clang_result.stderr)
        ));
    }

    tracing::debug!(executable = %executable.display(), "linked using clang");

    Ok(())
}

fn display_error(error: &Error, source: &str, file: &Path) {
    /*
        Reference Error: Unknown variable name: 'y'
        -> main.kirk:2:1
           |
         2 | y = 3
           | ^
    */

    eprintln!("{}", error);
    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        eprintln!("tip: {}", tip);
    }

    let position = error.get_position();
    let line_text = match get_line_at_position(source, position.line) {
        Some(line_text) => line_text,
        None => return,
    };

    eprintln!("-> {}:{}:{}", file.display(), position.line, position.column);

    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;
    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    eprintln!("{} | {}", line_str, line_text_removed.trim_end());

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);
    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}
