use clap::Parser;
use tracing::debug;

use crate::analysis::analyze_guarded;
use crate::cli::{Args, ColorChoice, Shell};
use crate::config::Config;
use crate::context::Environment;
use crate::errors::RawpulseError;
use crate::logging;
use crate::output::{format_result, OutputOptions};
use crate::reproduce::ReproduceOptions;
use crate::status::ExitStatus;

/// Main entry point for the CLI.
///
/// Handles argument parsing and configuration loading, then reads the
/// transcript and prints the analysis.
pub fn run(args: Vec<String>, env: Environment) -> ExitStatus {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}", e);
            Config::default()
        }
    };

    let merged_args = merge_default_options(args, &config);

    let parsed = match Args::try_parse_from(&merged_args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    if let Some(shell) = parsed.generate_completions {
        generate_completions(shell);
        return ExitStatus::Success;
    }

    if parsed.generate_manpage {
        return match generate_manpage() {
            Ok(()) => ExitStatus::Success,
            Err(e) => handle_error(e, parsed.traceback),
        };
    }

    logging::init(
        parsed.verbose,
        parsed.log_format.unwrap_or_default(),
        env.stderr_isatty && !parsed.no_color,
    );
    debug!(config_dir = %config.config_dir.display(), "Configuration loaded");

    match program(&parsed, &env) {
        Ok(status) => status,
        Err(e) => handle_error(e, parsed.traceback),
    }
}

/// Read the transcript, analyze it and print the result
pub fn program(args: &Args, env: &Environment) -> Result<ExitStatus, RawpulseError> {
    let raw = match &args.file {
        Some(path) if !args.reads_stdin() => env.read_file(path)?,
        _ => {
            if env.stdin_isatty {
                eprintln!("Paste the raw request, then press Ctrl-D:");
            }
            env.read_stdin()?
        }
    };

    let reproduce = ReproduceOptions {
        quote_style: args.quote_style,
    };
    let result = analyze_guarded(&raw, &reproduce)?;

    let output = OutputOptions {
        format: args.output,
        only: args.only,
        colors: use_colors(args, env),
    };
    let text = format_result(&result, &output)?;
    if !text.is_empty() {
        println!("{}", text);
    }

    Ok(ExitStatus::Success)
}

fn use_colors(args: &Args, env: &Environment) -> bool {
    if args.no_color {
        return false;
    }
    match args.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => env.colors_by_default(),
    }
}

fn merge_default_options(args: Vec<String>, config: &Config) -> Vec<String> {
    if config.default_options.is_empty() {
        return args;
    }

    let (flags, positional) = split_default_options(&config.default_options);

    if !positional.is_empty() {
        eprintln!(
            "\x1b[33mWarning: Positional arguments in default_options are ignored: {:?}\x1b[0m",
            positional
        );
        eprintln!("Only flags (starting with -) and their values can be used in default_options.");
    }

    if flags.is_empty() {
        return args;
    }

    let mut merged = Vec::with_capacity(args.len() + flags.len());

    if let Some(program) = args.first() {
        merged.push(program.clone());
    }

    merged.extend(flags);
    merged.extend(args.into_iter().skip(1));

    merged
}

/// Separate usable flags from stray positionals
///
/// A flag that takes a value keeps the entry after it, so both
/// `"--quote-style=cmd"` and `"--quote-style", "cmd"` work.
fn split_default_options(options: &[String]) -> (Vec<String>, Vec<String>) {
    use clap::CommandFactory;

    let mut cmd = Args::command();
    cmd.build();

    let mut flags = Vec::new();
    let mut positional = Vec::new();
    let mut iter = options.iter();

    while let Some(opt) = iter.next() {
        if !opt.starts_with('-') {
            positional.push(opt.clone());
            continue;
        }
        flags.push(opt.clone());
        if takes_separate_value(&cmd, opt) {
            if let Some(value) = iter.next() {
                flags.push(value.clone());
            }
        }
    }

    (flags, positional)
}

/// Whether `opt` is a value-taking option written without an inline value
fn takes_separate_value(cmd: &clap::Command, opt: &str) -> bool {
    let arg = if let Some(long) = opt.strip_prefix("--") {
        if long.contains('=') {
            return false;
        }
        cmd.get_arguments().find(|a| a.get_long() == Some(long))
    } else {
        let mut shorts = opt[1..].chars();
        match (shorts.next(), shorts.next()) {
            (Some(short), None) => cmd.get_arguments().find(|a| a.get_short() == Some(short)),
            _ => None,
        }
    };

    arg.is_some_and(|a| a.get_action().takes_values())
}

fn handle_error(error: RawpulseError, traceback: bool) -> ExitStatus {
    if traceback {
        eprintln!("Error: {:?}", error);
    } else {
        eprintln!("Error: {}", error);
    }

    ExitStatus::Error
}

fn generate_completions(shell: Shell) {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as ClapShell};

    let mut cmd = Args::command();
    let shell = match shell {
        Shell::Bash => ClapShell::Bash,
        Shell::Zsh => ClapShell::Zsh,
        Shell::Fish => ClapShell::Fish,
        Shell::PowerShell => ClapShell::PowerShell,
        Shell::Elvish => ClapShell::Elvish,
    };

    generate(shell, &mut cmd, "rawpulse", &mut std::io::stdout());
}

fn generate_manpage() -> Result<(), RawpulseError> {
    use clap::CommandFactory;

    let cmd = Args::command();
    let man = clap_mangen::Man::new(cmd);
    man.render(&mut std::io::stdout())?;
    Ok(())
}
