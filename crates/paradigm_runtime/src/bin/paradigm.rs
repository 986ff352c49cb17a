//! Paradigm CLI entry point.

use paradigm_debug::DebugConfig;
use paradigm_engine::{FormSource, GeneratorConfig};
use paradigm_foundation::{ClassId, ClassValueId, PosId, SlotId, WordId};
use paradigm_runtime::{Session, SessionConfig};
use paradigm_storage::Word;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    document: Option<PathBuf>,
    command: Vec<String>,
    show_help: bool,
    show_version: bool,
    verbose: bool,
    // Command flags
    all_slots: bool,
    trace: bool,
    json: bool,
    classes: Vec<(ClassId, ClassValueId)>,
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

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => config.verbose = true,
            "--all" => config.all_slots = true,
            "--trace" => config.trace = true,
            "--json" => config.json = true,
            "--class" => {
                i += 1;
                if i >= args.len() {
                    return Err("--class requires a value".into());
                }
                config.classes.push(parse_class(&args[i])?);
            }
            arg if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("unknown option: {arg}").into());
            }
            positional => {
                if config.document.is_none() {
                    config.document = Some(PathBuf::from(positional));
                } else {
                    config.command.push(positional.to_string());
                }
            }
        }
        i += 1;
    }

    Ok(config)
}

fn parse_class(raw: &str) -> Result<(ClassId, ClassValueId), Box<dyn std::error::Error>> {
    let (class, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid --class value (expected C=V): {raw}"))?;
    let class: u32 = class
        .parse()
        .map_err(|_| format!("invalid class id: {class}"))?;
    let value: u32 = value
        .parse()
        .map_err(|_| format!("invalid class value id: {value}"))?;
    Ok((ClassId::new(class), ClassValueId::new(value)))
}

fn parse_pos(raw: Option<&String>) -> Result<PosId, Box<dyn std::error::Error>> {
    let raw = raw.ok_or("missing part-of-speech id")?;
    let id: u32 = raw
        .parse()
        .map_err(|_| format!("invalid part-of-speech id: {raw}"))?;
    Ok(PosId::new(id))
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("warning: a tracing subscriber is already installed");
    }
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("paradigm {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.verbose);

    let Some(path) = config.document.clone() else {
        print_help();
        return Err("missing document path".into());
    };

    let session_config = SessionConfig::new()
        .with_generator(GeneratorConfig::new().with_trace(config.trace || config.json))
        .with_debug(DebugConfig::default().with_json_output(config.json));
    let mut session = Session::load(&path, session_config)?;

    let command = config.command.first().map(String::as_str);
    match command {
        Some("slots") => list_slots(&session, &config),
        Some("rules") => list_rules(&session, &config),
        Some("decline") => decline(&session, &config),
        Some("check") => {
            let pos = parse_pos(config.command.get(1))?;
            println!("{}", session.consistency_report(pos));
            Ok(())
        }
        Some("smooth") => {
            let changed = session.smooth_rules();
            session.save(&path)?;
            println!("renumbered {changed} rule(s)");
            Ok(())
        }
        Some(other) => Err(format!("unknown command: {other}").into()),
        None => Err("missing command (try --help)".into()),
    }
}

fn list_slots(session: &Session, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let pos = parse_pos(config.command.get(1))?;
    let entries = if config.all_slots {
        session.all_slots(pos)
    } else {
        session.visible_slots(pos)
    };
    for entry in entries {
        let hidden = if session.is_suppressed(pos, &entry.slot) {
            "  (suppressed)"
        } else {
            ""
        };
        println!("{}\t{}{hidden}", entry.slot, entry.label);
    }
    Ok(())
}

fn list_rules(session: &Session, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let pos = parse_pos(config.command.get(1))?;
    let rules = match config.command.get(2) {
        Some(slot) => session.rules_for_slot(pos, &SlotId::from(slot.as_str())),
        None => session.rules_for_pos(pos),
    };
    for (_, rule) in rules {
        let transforms: Vec<String> = rule
            .transforms
            .iter()
            .map(|t| format!("{} -> {}", t.pattern, t.replacement))
            .collect();
        println!(
            "[{}] {}\t{}\tif /{}/\t{}",
            rule.index.unwrap_or_default(),
            rule.display_name(),
            rule.slot,
            rule.pattern,
            transforms.join("; ")
        );
    }
    Ok(())
}

fn decline(session: &Session, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let pos = parse_pos(config.command.get(1))?;
    let headword = config.command.get(2).ok_or("missing headword")?;
    let slot = config.command.get(3).ok_or("missing slot")?;

    let mut word = Word::new(WordId::new(0), headword.as_str(), pos);
    for (class, value) in &config.classes {
        word = word.with_class(*class, *value);
    }

    let generation = session.decline_word(&word, &SlotId::from(slot.as_str()))?;
    if config.json {
        if let Some(trace) = &generation.trace {
            println!("{}", session.format_trace(trace));
        }
        return Ok(());
    }

    println!("{}", generation.form);
    if generation.source == FormSource::Absent {
        eprintln!("(part of speech has no rules)");
    }
    if config.trace {
        if let Some(trace) = &generation.trace {
            println!("{}", session.format_trace(trace));
        }
    }
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mParadigm\x1b[0m - Inflection engine for constructed languages

\x1b[1mUSAGE:\x1b[0m
    paradigm [OPTIONS] <DOCUMENT> <COMMAND> [ARGS...]

\x1b[1mARGUMENTS:\x1b[0m
    <DOCUMENT>    MessagePack document to operate on

\x1b[1mCOMMANDS:\x1b[0m
    slots <pos> [--all]                      List visible (or all) slots
    rules <pos> [<slot>]                     List rules in order
    decline <pos> <headword> <slot>          Generate one form
        [--class C=V]... [--trace] [--json]
    check <pos>                              Print the consistency report
    smooth                                   Renumber rule indices and save

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -v, --verbose      Log debug events to stderr

\x1b[1mEXAMPLES:\x1b[0m
    paradigm lang.msgpack slots 1
    paradigm lang.msgpack decline 1 kato ,3,7, --trace
    paradigm lang.msgpack decline 1 kato ,3,7, --class 2=5 --json"
    );
}
