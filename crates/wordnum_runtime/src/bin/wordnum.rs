//! wordnum CLI entry point.

use std::env;
use std::process::ExitCode;

use wordnum_debug::{Tracer, TracerConfig};
use wordnum_parser::{InputTokenizer, NumberParser, ParserConfig};
use wordnum_runtime::{Repl, RuntimeError, run_self_test};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    words: Vec<String>,
    strict: bool,
    self_test: bool,
    trace: bool,
    json: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, RuntimeError> {
    let mut config = CliConfig::default();
    let mut words_only = false;

    for arg in args.into_iter().skip(1) {
        if words_only {
            config.words.push(arg);
            continue;
        }
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-s" | "--strict" => config.strict = true,
            "--self-test" => config.self_test = true,
            "--trace" => config.trace = true,
            "--json" => config.json = true,
            "--" => words_only = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(RuntimeError::usage(format!("unknown option: {flag}")));
            }
            _ => config.words.push(arg),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), RuntimeError> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("wordnum {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let parser_config = if config.strict {
        ParserConfig::strict()
    } else {
        ParserConfig::colloquial()
    };

    if config.self_test {
        let report = run_self_test();
        for line in report.lines() {
            println!("{line}");
        }
        if !report.is_success() {
            return Err(RuntimeError::SelfTest {
                failed: report.failed(),
                total: report.total(),
            });
        }
        return Ok(());
    }

    if config.words.is_empty() {
        let mut repl = Repl::new()?.with_config(parser_config);
        if config.trace {
            repl = repl.with_trace();
        }
        return repl.run();
    }

    let owned = InputTokenizer::tokenize(&config.words.join(" "));
    let tokens: Vec<&str> = owned.iter().map(String::as_str).collect();

    let mut tracer = if config.trace {
        let mut trace_config = TracerConfig::stderr();
        if config.json {
            trace_config = trace_config.json();
        }
        Tracer::new(trace_config)
    } else {
        Tracer::disabled()
    };
    tracer.begin_parse();

    let number = NumberParser::new(parser_config).parse_with(&tokens, &mut tracer)?;
    println!("{number}");
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mwordnum\x1b[0m - Read English number words

\x1b[1mUSAGE:\x1b[0m
    wordnum [OPTIONS] [WORDS...]

\x1b[1mARGUMENTS:\x1b[0m
    [WORDS...]    Number words to read; with none, start the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -s, --strict       Formal readings only (no \"double\", no digit-by-digit)
    --self-test        Run the built-in battery and exit

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace            Print slot decisions to stderr
    --json             With --trace, print one JSON object per decision

\x1b[1mEXAMPLES:\x1b[0m
    wordnum one thousand nine hundred ten    (cardinal, 1910, '1910', false)
    wordnum double oh seven                  (cardinal, 7, '007', false)
    wordnum twenty-third                     (ordinal, 23, '23', false)
    wordnum --trace three forty five         Show how the slots filled
    wordnum --self-test                      Check the known readings

\x1b[1mREPL COMMANDS:\x1b[0m
    :colloquial / :strict  Switch reading mode
    :trace on|off          Show slot decisions after each reading
    :selftest              Run the battery
    :locale NAME           Show a place and its time zone
    :zone ID               Show a time zone's offsets
    :help                  List commands
    :quit, Ctrl+D          Exit"
    );
}
