use std::path::PathBuf;

use structured_locale_core::{Args, Value, best_match, fallback_chain, plural_category};
use structured_locale_runtime::load_bundle;
use tracing::debug;

use crate::config::{DEFAULT_CONFIG_PATH, load_config_or_default};
use crate::error::CliError;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Chain {
        locale: String,
        default_locale: String,
    },
    Match {
        locale: String,
        available: Vec<String>,
        default_locale: String,
    },
    Plural {
        locale: String,
        count: u64,
    },
    Translate(TranslateOptions),
    Locales {
        config_path: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranslateOptions {
    pub locale: String,
    pub id: String,
    pub count: Option<u64>,
    pub args: Args,
    pub config_path: PathBuf,
}

pub fn run(args: Vec<String>) -> Result<String, CliError> {
    let command = parse_command(args)?;
    debug!(?command, "running command");
    execute(&command)
}

pub fn parse_command(args: Vec<String>) -> Result<Command, CliError> {
    let mut args = args.into_iter();
    let name = args.next().ok_or_else(|| CliError::Usage(usage()))?;
    let rest: Vec<String> = args.collect();
    match name.as_str() {
        "chain" => parse_chain_options(rest),
        "match" => parse_match_options(rest),
        "plural" => parse_plural_options(rest),
        "translate" => parse_translate_options(rest),
        "locales" => parse_locales_options(rest),
        _ => Err(CliError::Usage(usage())),
    }
}

pub fn execute(command: &Command) -> Result<String, CliError> {
    match command {
        Command::Chain {
            locale,
            default_locale,
        } => Ok(lines(fallback_chain(locale, default_locale))),
        Command::Match {
            locale,
            available,
            default_locale,
        } => Ok(lines([best_match(locale, available, default_locale)])),
        Command::Plural { locale, count } => Ok(lines([plural_category(locale, *count)])),
        Command::Translate(options) => {
            let config = load_config_or_default(&options.config_path)?;
            let bundle = load_bundle(&config.load_options())?;
            let localizer = bundle.localizer(&options.locale);
            let output = match options.count {
                Some(count) => localizer.tnf(&options.id, count, &options.args),
                None => localizer.tf(&options.id, &options.args),
            };
            Ok(lines([output]))
        }
        Command::Locales { config_path } => {
            let config = load_config_or_default(config_path)?;
            let bundle = load_bundle(&config.load_options())?;
            Ok(lines(bundle.available_locales()))
        }
    }
}

fn lines<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: ToString,
{
    let mut output = String::new();
    for item in items {
        output.push_str(&item.to_string());
        output.push('\n');
    }
    output
}

fn parse_chain_options(args: Vec<String>) -> Result<Command, CliError> {
    let mut locale = None;
    let mut default_locale = String::from("en");
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--locale" => locale = Some(next_value("--locale", &mut iter)?),
            "--default" => default_locale = next_value("--default", &mut iter)?,
            _ => return Err(CliError::Usage(usage())),
        }
    }
    let locale = locale.ok_or_else(|| CliError::Usage(usage()))?;
    Ok(Command::Chain {
        locale,
        default_locale,
    })
}

fn parse_match_options(args: Vec<String>) -> Result<Command, CliError> {
    let mut locale = None;
    let mut available = Vec::new();
    let mut default_locale = String::from("en");
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--locale" => locale = Some(next_value("--locale", &mut iter)?),
            "--available" => {
                let value = next_value("--available", &mut iter)?;
                available.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|item| !item.is_empty())
                        .map(String::from),
                );
            }
            "--default" => default_locale = next_value("--default", &mut iter)?,
            _ => return Err(CliError::Usage(usage())),
        }
    }
    let locale = locale.ok_or_else(|| CliError::Usage(usage()))?;
    Ok(Command::Match {
        locale,
        available,
        default_locale,
    })
}

fn parse_plural_options(args: Vec<String>) -> Result<Command, CliError> {
    let mut locale = None;
    let mut count = None;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--locale" => locale = Some(next_value("--locale", &mut iter)?),
            "--count" => count = Some(parse_count(&next_value("--count", &mut iter)?)?),
            _ => return Err(CliError::Usage(usage())),
        }
    }
    let locale = locale.ok_or_else(|| CliError::Usage(usage()))?;
    let count = count.ok_or_else(|| CliError::Usage(usage()))?;
    Ok(Command::Plural { locale, count })
}

fn parse_translate_options(args: Vec<String>) -> Result<Command, CliError> {
    let mut locale = None;
    let mut id = None;
    let mut count = None;
    let mut values = Args::new();
    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--locale" => locale = Some(next_value("--locale", &mut iter)?),
            "--id" => id = Some(next_value("--id", &mut iter)?),
            "--count" => count = Some(parse_count(&next_value("--count", &mut iter)?)?),
            "--var" => {
                let pair = next_value("--var", &mut iter)?;
                let (name, value) = pair.split_once('=').ok_or_else(|| {
                    CliError::Usage(format!("--var expects name=value, got {pair}"))
                })?;
                values.insert(name, parse_value(value));
            }
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            _ => return Err(CliError::Usage(usage())),
        }
    }
    let locale = locale.ok_or_else(|| CliError::Usage(usage()))?;
    let id = id.ok_or_else(|| CliError::Usage(usage()))?;
    Ok(Command::Translate(TranslateOptions {
        locale,
        id,
        count,
        args: values,
        config_path,
    }))
}

fn parse_locales_options(args: Vec<String>) -> Result<Command, CliError> {
    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            _ => return Err(CliError::Usage(usage())),
        }
    }
    Ok(Command::Locales { config_path })
}

fn parse_count(value: &str) -> Result<u64, CliError> {
    value
        .parse()
        .map_err(|_| CliError::Usage(format!("--count expects a non-negative integer, got {value}")))
}

fn parse_value(raw: &str) -> Value {
    if let Ok(number) = raw.parse::<i64>() {
        return Value::Int(number);
    }
    if let Ok(number) = raw.parse::<f64>() {
        if number.is_finite() {
            return Value::Float(number);
        }
    }
    Value::from(raw)
}

fn next_value(flag: &str, iter: &mut impl Iterator<Item = String>) -> Result<String, CliError> {
    iter.next()
        .ok_or_else(|| CliError::Usage(format!("{flag} requires a value\n\n{}", usage())))
}

fn usage() -> String {
    "usage: structured-locale chain --locale <tag> [--default <tag>]\n       structured-locale match --locale <tag> --available <tag,tag,...> [--default <tag>]\n       structured-locale plural --locale <tag> --count <n>\n       structured-locale translate --locale <tag> --id <id> [--count <n>] [--var <name=value>...] [--config <path>]\n       structured-locale locales [--config <path>]".to_string()
}
