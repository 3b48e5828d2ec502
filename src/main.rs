mod report;

use accord::{
    Gender, Lexicon, Number, PartOfSpeech, SentenceSlot, UnknownName, VerbConjugator, Word, WordFormGenerator,
    default_lexicon,
};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ACCORD_LOG";

fn main() {
    init_logging();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    run(&config, default_lexicon());
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn run(config: &CliConfig, lexicon: &Lexicon) {
    let palette = report::Palette::new(config.color);

    match &config.command {
        Command::Conjugate { verb } => {
            let infinitive = resolve_word(lexicon, verb, &[PartOfSpeech::AuxiliaryVerb, PartOfSpeech::Verb])
                .unwrap_or_else(|| Word::new(verb.as_str(), PartOfSpeech::Verb, ""));
            let paradigm = VerbConjugator::new(lexicon).conjugate(&infinitive);
            report::print_paradigm(&paradigm, &palette);
        }
        Command::Inflect { word, pos, gender, number } => {
            let categories = match pos {
                Some(pos) => vec![*pos],
                None => vec![PartOfSpeech::Noun, PartOfSpeech::Adjective],
            };
            let base = resolve_word(lexicon, word, &categories)
                .unwrap_or_else(|| Word::new(word.as_str(), categories[0], ""));

            let generator = WordFormGenerator::new(lexicon);
            let forms = match (gender, number) {
                (None, None) => generator.variants(&base),
                _ => vec![generator.inflect(
                    &base,
                    gender.unwrap_or(Gender::Masculine),
                    number.unwrap_or(Number::Singular),
                )],
            };
            report::print_inflection(&base, &forms, &palette);
        }
        Command::Elide { words } => {
            let slots: Vec<SentenceSlot> = words
                .iter()
                .enumerate()
                .map(|(i, text)| {
                    let word = resolve_word(lexicon, text, PartOfSpeech::ALL)
                        .map(|w| w.with_text(text.as_str()))
                        .unwrap_or_else(|| Word::new(text.as_str(), PartOfSpeech::Noun, "?"));
                    SentenceSlot::filled(i as u32, word)
                })
                .collect();

            let reduction = accord::ElisionEngine::new(lexicon).reduce_with_trace(slots.clone());
            let sentence = accord::SentenceAssembler::new().assemble(&reduction.slots);
            report::print_reduction(&slots, &reduction, &sentence, &palette);
        }
        Command::Words { pos } => {
            let words: Vec<&Word> = lexicon.words(*pos).collect();
            report::print_words(*pos, &words, &palette);
        }
    }
}

/// First lexicon entry for `text` among `categories`, in order.
fn resolve_word(lexicon: &Lexicon, text: &str, categories: &[PartOfSpeech]) -> Option<Word> {
    categories.iter().find_map(|pos| lexicon.lookup_as(text, *pos)).cloned()
}

// --- Arguments -----------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("error: no command given\n\n{}", help_text())]
    MissingCommand,
    #[error("error: unknown command '{0}'")]
    UnknownCommand(String),
    #[error("error: unknown option '{0}'")]
    UnknownOption(String),
    #[error("error: {0} expects a value")]
    MissingValue(&'static str),
    #[error("error: '{command}' expects {what}")]
    MissingArgument { command: &'static str, what: &'static str },
    #[error("error: '{command}' takes a single {what}")]
    ExtraArgument { command: &'static str, what: &'static str },
    #[error("error: {option} only applies to 'inflect'")]
    MisplacedOption { option: &'static str },
    #[error("error: {0}")]
    InvalidValue(#[from] UnknownName),
    #[error("error: failed to read stdin: {0}")]
    Stdin(#[from] io::Error),
}

#[derive(Debug, PartialEq)]
enum Command {
    Conjugate { verb: String },
    Inflect { word: String, pos: Option<PartOfSpeech>, gender: Option<Gender>, number: Option<Number> },
    Elide { words: Vec<String> },
    Words { pos: PartOfSpeech },
}

#[derive(Debug)]
struct CliConfig {
    command: Command,
    color: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliConfig, CliError> {
    let mut positional: Vec<String> = Vec::new();
    let mut pos: Option<PartOfSpeech> = None;
    let mut gender: Option<Gender> = None;
    let mut number: Option<Number> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("accord {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--pos" => pos = Some(args.next().ok_or(CliError::MissingValue("--pos"))?.parse()?),
            "--gender" => gender = Some(args.next().ok_or(CliError::MissingValue("--gender"))?.parse()?),
            "--number" => number = Some(args.next().ok_or(CliError::MissingValue("--number"))?.parse()?),
            "--" => {
                positional.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with("--pos=") => pos = Some(arg.trim_start_matches("--pos=").parse()?),
            _ if arg.starts_with("--gender=") => gender = Some(arg.trim_start_matches("--gender=").parse()?),
            _ if arg.starts_with("--number=") => number = Some(arg.trim_start_matches("--number=").parse()?),
            _ if arg.starts_with('-') => return Err(CliError::UnknownOption(arg)),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let name = positional.next().ok_or(CliError::MissingCommand)?;
    let rest: Vec<String> = positional.collect();

    if name != "inflect" {
        let misplaced = [("--pos", pos.is_some()), ("--gender", gender.is_some()), ("--number", number.is_some())];
        if let Some((option, _)) = misplaced.into_iter().find(|(_, set)| *set) {
            return Err(CliError::MisplacedOption { option });
        }
    }

    let command = match name.as_str() {
        "conjugate" => Command::Conjugate { verb: single(rest, "conjugate", "infinitive")? },
        "inflect" => Command::Inflect { word: single(rest, "inflect", "word")?, pos, gender, number },
        "elide" => {
            let words = if rest.is_empty() { read_stdin_words()? } else { rest };
            if words.is_empty() {
                return Err(CliError::MissingArgument { command: "elide", what: "at least one word" });
            }
            Command::Elide { words }
        }
        "words" => Command::Words { pos: single(rest, "words", "part of speech")?.parse()? },
        _ => return Err(CliError::UnknownCommand(name)),
    };

    Ok(CliConfig { command, color })
}

fn single(rest: Vec<String>, command: &'static str, what: &'static str) -> Result<String, CliError> {
    let mut rest = rest.into_iter();
    let value = rest.next().ok_or(CliError::MissingArgument { command, what })?;
    if rest.next().is_some() {
        return Err(CliError::ExtraArgument { command, what });
    }
    Ok(value)
}

fn read_stdin_words() -> Result<Vec<String>, CliError> {
    if io::stdin().is_terminal() {
        return Ok(Vec::new());
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.split_whitespace().map(str::to_string).collect())
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "accord {version}

French agreement, conjugation and elision engine.

Usage:
  accord [OPTIONS] conjugate <infinitive>
  accord [OPTIONS] inflect <word> [--pos <pos>] [--gender <gender>] [--number <number>]
  accord [OPTIONS] elide <word...>
  accord [OPTIONS] words <pos>

Commands:
  conjugate    Present-tense forms and past participle of a verb.
  inflect      Gender/number forms of a noun or adjective. Without
               --gender/--number, prints all four variants.
  elide        Merge contracting word pairs step by step and print the
               assembled sentence. Reads words from stdin when none are given.
  words        List the built-in words of one part of speech.

Options:
  --pos <pos>          noun | adjective (or any part of speech).
  --gender <gender>    masculine | feminine. Default: masculine.
  --number <number>    singular | plural. Default: singular.
  --color              Force ANSI color output.
  --no-color           Disable ANSI color output.
  -h, --help           Show this help message.
  -V, --version        Print version information.

Environment:
  {log_env}            Log filter (e.g. accord=debug). Default: warn.

Exit codes:
  0  Success.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV,
    )
}
