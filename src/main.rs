//! The `oxidec` command line tool: argument handling, file loading and output.
//! The language itself lives in the library part of this crate.
#![deny(
    future_incompatible,
    keyword_idents,
    let_underscore,
    nonstandard_style,
    refining_impl_trait,
)]
#![deny(
    rust_2018_compatibility,
    rust_2021_compatibility,
)]
#![deny(
    clippy::all,
    clippy::pedantic,
)]
#![deny(
    clippy::absolute_paths,
    clippy::alloc_instead_of_core,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::arithmetic_side_effects,
    clippy::as_conversions,
    clippy::as_underscore,
    clippy::assertions_on_result_states,
    clippy::big_endian_bytes,
    clippy::cfg_not_test,
    clippy::clone_on_ref_ptr,
    clippy::create_dir,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::default_numeric_fallback,
    clippy::default_union_representation,
    clippy::deref_by_slicing,
    clippy::disallowed_script_idents,
    clippy::else_if_without_else,
    clippy::empty_drop,
    clippy::empty_enum_variants_with_brackets,
    clippy::empty_structs_with_brackets,
    clippy::error_impl_error,
    clippy::exhaustive_enums,
    clippy::exhaustive_structs,
    clippy::exit,
    clippy::field_scoped_visibility_modifiers,
    clippy::filetype_is_file,
    clippy::float_arithmetic,
    clippy::float_cmp_const,
    clippy::fn_to_numeric_cast_any,
    clippy::get_unwrap,
    clippy::host_endian_bytes,
    clippy::if_then_some_else_none,
    clippy::impl_trait_in_params,
    clippy::indexing_slicing,
    clippy::infinite_loop,
    clippy::inline_asm_x86_att_syntax,
    clippy::inline_asm_x86_intel_syntax,
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    clippy::iter_over_hash_type,
    clippy::large_include_file,
    clippy::let_underscore_must_use,
    clippy::let_underscore_untyped,
    clippy::little_endian_bytes,
    clippy::lossy_float_literal,
    clippy::map_err_ignore,
    clippy::mem_forget,
    clippy::min_ident_chars,
    clippy::missing_assert_message,
    clippy::missing_asserts_for_indexing,
    clippy::missing_docs_in_private_items,
    clippy::missing_inline_in_public_items,
    clippy::missing_trait_methods,
    clippy::mixed_read_write_in_expression,
    clippy::module_name_repetitions,
    clippy::modulo_arithmetic,
    clippy::multiple_inherent_impl,
    clippy::multiple_unsafe_ops_per_block,
    clippy::mutex_atomic,
    clippy::mutex_integer,
    clippy::needless_raw_strings,
    clippy::non_ascii_literal,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::partial_pub_fields,
    clippy::pathbuf_init_then_push,
    clippy::pattern_type_mismatch,
    clippy::pub_with_shorthand,
    clippy::pub_without_shorthand,
    clippy::rc_buffer,
    clippy::rc_mutex,
    clippy::redundant_type_annotations,
    clippy::renamed_function_params,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_name_method,
    clippy::self_named_module_files,
    clippy::semicolon_inside_block,
    clippy::semicolon_outside_block,
    clippy::separated_literal_suffix,
    clippy::single_char_lifetime_names,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::str_to_string,
    clippy::string_add,
    clippy::string_lit_chars_any,
    clippy::string_slice,
    clippy::string_to_string,
    clippy::suspicious_xor_used_as_pow,
    clippy::tests_outside_test_module,
    clippy::todo,
    clippy::try_err,
    clippy::undocumented_unsafe_blocks,
    clippy::unimplemented,
    clippy::unnecessary_safety_comment,
    clippy::unnecessary_safety_doc,
    clippy::unnecessary_self_imports,
    clippy::unneeded_field_pattern,
    clippy::unreachable,
    clippy::unused_result_ok,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::verbose_file_reads,
    clippy::wildcard_enum_match_arm
)]
#![warn(unused)]
mod logging;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, info, warn};

use oxidec::ox::errors::{EngineError, UnterminatedError};
use oxidec::ox::token::dump::write_tokens;
use oxidec::ox::token::lexer::{self, LexingError};

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::{ExitCode, Termination};

/// Extension every Ox source file carries.
const SOURCE_EXTENSION: &str = "ox";

/// Load a file and dump its tokens.
/// TODO: Hand the tokens to the parser once it exists.
fn run_file(source_file: &Path, options: &Options) -> Result<(), EngineError> {
    if source_file.extension().is_none_or(|ext| ext != SOURCE_EXTENSION) {
        return Err(EngineError::UsageError(format!(
            "oxidec <FILE.{SOURCE_EXTENSION}>, but got {}",
            source_file.display()
        )));
    }

    debug!(file = %source_file.display(), "reading source file");
    let bytes = fs::read(source_file).map_err(EngineError::reading(source_file))?;
    let source = String::from_utf8(bytes).unwrap_or_else(|err| {
        warn!(
            file = %source_file.display(),
            "source is not valid UTF-8, undecodable bytes become invalid tokens"
        );
        String::from_utf8_lossy(err.as_bytes()).into_owned()
    });
    let (tokens, diagnostics) = lexer::tokenize_with_diagnostics(&source);
    info!(
        file = %source_file.display(),
        tokens = tokens.len(),
        diagnostics = diagnostics.len(),
        "lexed source file"
    );

    let mut out = dump_target(options)?;
    write_tokens(&tokens, &mut out).map_err(EngineError::OutputError)?;

    report(diagnostics, options)
}

/// Where token dumps go: the `--output` file if given, standard output otherwise.
fn dump_target(options: &Options) -> Result<Box<dyn Write>, EngineError> {
    if let Some(ref output) = options.output {
        debug!(output = %output.display(), "writing token dump");
        let file = File::create(output).map_err(EngineError::OutputError)?;
        Ok(Box::new(BufWriter::new(file)))
    } else {
        Ok(Box::new(io::stdout()))
    }
}

/// Reports lexing diagnostics on standard error.
///
/// Warnings are only shown with `--Wall`. Errors are always shown, and only fail
/// the run with `--deny-invalid`.
fn report(diagnostics: Vec<LexingError>, options: &Options) -> Result<(), EngineError> {
    let (warnings, errors): (Vec<_>, Vec<_>) =
        diagnostics.into_iter().partition(LexingError::is_warning);

    if options.all_warnings {
        for warning in &warnings {
            eprintln!("warning: {warning}");
        }
    }
    if errors.is_empty() {
        return Ok(());
    }
    if options.deny_invalid {
        return Err(EngineError::LexingErrors(errors));
    }
    for error in &errors {
        eprintln!("error: {error}");
    }
    Ok(())
}

/// Run the REPL Prompt.
///
/// Every line is tokenized and dumped right away, unless it ended inside of a
/// string or block comment, in which case the next line continues it.
/// The REPL ends with the end of standard input. With `--output`, the dumps
/// of the whole session are collected in that file instead.
fn run_prompt(options: &Options) -> Result<(), EngineError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut out = dump_target(options)?;
    let mut input = String::new();
    loop {
        print!("{}", if input.is_empty() { "> " } else { ".. " });
        stdout.flush().map_err(EngineError::OutputError)?;

        let read = stdin
            .read_line(&mut input)
            .map_err(EngineError::reading("<stdin>"))?;
        let at_end = read == 0;
        if at_end && input.trim().is_empty() {
            println!();
            return Ok(());
        }

        let (tokens, diagnostics) = lexer::tokenize_with_diagnostics(&input);
        if !at_end && diagnostics.is_unterminated() {
            debug!("input continues on the next line");
            continue;
        }

        write_tokens(&tokens, &mut out).map_err(EngineError::OutputError)?;
        if let Err(err) = report(diagnostics, options) {
            eprintln!("{}", err.display_error());
        }
        input.clear();

        if at_end {
            return Ok(());
        }
    }
}

/// Isomorphic to `Result<T, EngineError>`,
/// this allows for overriding the [Termination]
/// trait impl and report custom exit codes instead.
///
/// As this is only supposed to be used on the very
/// outer shell, T defaults to `()`.
#[derive(Debug)]
enum EngineResult<T = ()> {
    /// Ok variant.
    Ok(T),
    /// Error variant
    Err(EngineError),
}

impl Termination for EngineResult {
    fn report(self) -> ExitCode {
        if let EngineResult::Err(err) = self {
            eprintln!("{}", err.display_error());
            err.into()
        } else {
            ExitCode::SUCCESS
        }
    }
}

impl<T, E> From<Result<T, E>> for EngineResult<T>
where
    EngineError: From<E>,
{
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => EngineResult::Ok(value),
            Err(err) => EngineResult::Err(err.into()),
        }
    }
}

/// oxidec is the work-in-progress compiler of the Ox programming language.
/// For now, it tokenizes Ox source files and prints the resulting tokens.
#[derive(Parser, Debug)]
#[command(name = "oxidec", version, about, long_about = None)]
#[command(subcommand_negates_reqs = true)]
struct OxArgs {
    /// Subcommands, either this or [`source_file`] needs to be specified.
    #[command(subcommand)]
    command: Option<OxCommands>,

    /// The .ox source file to tokenize
    #[arg(required = true)]
    source_file: Option<PathBuf>,

    /// Options shared by all modes.
    #[command(flatten)]
    options: Options,
}

/// Available commands in oxidec
#[derive(Subcommand, Debug)]
enum OxCommands {
    /// run the ox repl.
    Repl,
    /// tokenize the given file and print its tokens.
    Tokenize {
        /// The .ox source file to tokenize
        source_file: PathBuf,
    },
}

/// Flags that apply to every mode.
#[derive(Args, Debug)]
struct Options {
    /// Write the token dump to this file instead of standard output
    #[arg(short, long, env = "OXIDEC_OUTPUT", global = true)]
    output: Option<PathBuf>,

    /// Enable detailed debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Also report lexing warnings, like unterminated block comments
    #[arg(long = "Wall", global = true)]
    all_warnings: bool,

    /// Fail when the source contains invalid tokens
    #[arg(long, global = true)]
    deny_invalid: bool,

    /// Logging filter directives, taking precedence over RUST_LOG
    #[arg(long, env = "OXIDEC_LOG", global = true, value_name = "DIRECTIVES")]
    log: Option<String>,
}

/// Parses the arguments, sets up logging and dispatches to the chosen mode.
fn main() -> EngineResult {
    let OxArgs {
        command,
        source_file,
        options,
    } = OxArgs::parse();

    logging::init(options.verbose, options.log.as_deref());
    debug!(?command, ?source_file, "parsed arguments");

    match (command, source_file) {
        (None, Some(source_file))
        | (Some(OxCommands::Tokenize { source_file }), None) => {
            run_file(&source_file, &options).into()
        }

        (Some(OxCommands::Repl), None) => run_prompt(&options).into(),

        (Some(_), Some(_)) | (None, None) => EngineResult::Err(EngineError::UsageError(
            format!("oxidec [OPTIONS] <FILE.{SOURCE_EXTENSION}> or oxidec <COMMAND>"),
        )),
    }
}
