//! Stopclock CLI Entry Point
//!
//! Exposes the library helpers on the command line.
//!
//! # Usage
//!
//! ```bash
//! # Time a jittered busy wait of about 1.5 seconds
//! stopclock time 1500 --threshold 1
//!
//! # Format and parse durations
//! stopclock hms 3723000
//! stopclock ms 01:02:03
//!
//! # Decode query parameters as JSON
//! stopclock query "https://example.com/?q=rust&page=2"
//! ```

use std::env;
use std::error::Error;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

use chrono::NaiveDate;
use colored::Colorize;
use log::{debug, info};

use stopclock::calc::{add_days, calculate_distance, create_period, date_diff, range, Coordinates};
use stopclock::format::{
    camel_to_snake, float_with_commas, format_ms_to_hms, number_with_commas, parse_hms_to_ms,
    phone_number_to_string, random_string, remove_commas, snake_to_camel, truncate,
    truncate_with, CharacterSet,
};
use stopclock::parse::{is_valid_email, parse_url_params};
use stopclock::timing::{jitter_busy_wait, jitter_sleep, DEFAULT_AMPLITUDE};
use stopclock::{ExecutionTime, APP_NAME, VERSION};

/// Default overtime threshold in seconds for `time`.
const DEFAULT_THRESHOLD_SECS: f64 = 1.0;

/// Default length for `random`.
const DEFAULT_RANDOM_LENGTH: usize = 16;

/// Date format accepted by the date commands.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Command-line configuration parsed from arguments.
#[derive(Debug)]
struct Config {
    command: Option<String>,
    args: Vec<String>,
    threshold: f64,
    amplitude: f64,
    verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: None,
            args: Vec::new(),
            threshold: DEFAULT_THRESHOLD_SECS,
            amplitude: DEFAULT_AMPLITUDE,
            verbose: false,
        }
    }
}

/// Configures the logging system with appropriate formatting.
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            use std::io::Write;

            match record.level() {
                log::Level::Warn | log::Level::Error => {
                    writeln!(buf, "[{}] {}", record.level(), record.args())
                }
                _ => writeln!(buf, "{}", record.args()),
            }
        })
        .init();
}

/// Prints usage information.
fn print_usage() {
    println!("Usage: stopclock [OPTIONS] <COMMAND> [ARGS...]");
    println!();
    println!("Commands:");
    println!("  time <MS>                     Busy-wait ~MS milliseconds and report the time taken");
    println!("  wait <MS>                     Sleep ~MS milliseconds with jitter");
    println!("  hms <MS>                      Format milliseconds as hh:mm:ss");
    println!("  ms <HH:MM:SS>                 Parse hh:mm:ss into milliseconds");
    println!("  phone <NUMBER>                Insert dashes into a phone number");
    println!("  commas <NUMBER>               Add thousands separators");
    println!("  uncommas <TEXT>               Remove thousands separators");
    println!("  distance <LAT> <LON> <LAT> <LON>  Great-circle distance in km");
    println!("  snake <TEXT>                  camelCase to snake_case");
    println!("  camel <TEXT>                  snake_case to camelCase");
    println!("  query <URL>                   Print query parameters as JSON");
    println!("  email <ADDRESS>               Validate an email address");
    println!("  truncate <TEXT> <LEN> [END]   Truncate text");
    println!("  random [LEN] [MODE]           Random string (alpha, num, alphanum)");
    println!("  range <START> <END>           Integers from START up to END");
    println!("  period <START> <END>          Dates from START to END (YYYY-MM-DD)");
    println!("  shift <DATE> <DAYS>           Add DAYS (may be negative) to DATE");
    println!("  diff <DATE> <DATE>            Days between two dates");
    println!();
    println!("Options:");
    println!("  --threshold SECS    Overtime threshold for `time` (default: {})", DEFAULT_THRESHOLD_SECS);
    println!("  --amplitude A       Jitter amplitude for `time` and `wait` (default: {})", DEFAULT_AMPLITUDE);
    println!("  --verbose           Enable debug logging");
    println!("  --help              Show this help message");
    println!("  --version           Show version information");
}

/// Parses command-line arguments into a Config struct.
fn parse_arguments(args: &[String]) -> Result<Config, String> {
    let mut config = Config::default();
    let mut i = 1; // Skip program name

    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            "--version" | "-V" => {
                println!("{} {}", APP_NAME, VERSION);
                std::process::exit(0);
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--threshold" => {
                i += 1;
                let value = args.get(i).ok_or("--threshold requires a number argument")?;
                config.threshold = parse_value(value, "threshold")?;
            }
            "--amplitude" => {
                i += 1;
                let value = args.get(i).ok_or("--amplitude requires a number argument")?;
                config.amplitude = parse_value(value, "amplitude")?;
            }
            arg if arg.starts_with("--") => {
                return Err(format!("Unknown option: {}", arg));
            }
            _ => {
                if config.command.is_none() {
                    config.command = Some(arg.clone());
                } else {
                    config.args.push(arg.clone());
                }
            }
        }
        i += 1;
    }

    Ok(config)
}

fn parse_value<T: FromStr>(value: &str, name: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("Invalid {} value: {}", name, value))
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| format!("Invalid date '{}' (expected YYYY-MM-DD): {}", value, e))
}

/// Returns the positional argument at `index` or a usage error.
fn required<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str, String> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing argument <{}>", name))
}

/// Runs a single command and returns its output.
fn run_command(command: &str, config: &Config) -> Result<String, Box<dyn Error>> {
    let args = &config.args;
    debug!("Running '{}' with {:?}", command, args);

    let output = match command {
        "time" => {
            let ms: u64 = parse_value(required(args, 0, "MS")?, "milliseconds")?;
            let mut timer = ExecutionTime::new();
            let target = jitter_busy_wait(Duration::from_millis(ms), config.amplitude)?;
            timer.stop()?;

            info!("Target wait: {} ms", target.as_millis());
            timer.is_over_time_secs(config.threshold);
            timer.to_string()
        }
        "wait" => {
            let ms: u64 = parse_value(required(args, 0, "MS")?, "milliseconds")?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()?;
            let slept = runtime.block_on(jitter_sleep(Duration::from_millis(ms), config.amplitude))?;
            format!("Slept {} ms", slept.as_millis())
        }
        "hms" => format_ms_to_hms(parse_value(required(args, 0, "MS")?, "milliseconds")?),
        "ms" => parse_hms_to_ms(required(args, 0, "HH:MM:SS")?)?.to_string(),
        "phone" => phone_number_to_string(required(args, 0, "NUMBER")?),
        "commas" => {
            let value = required(args, 0, "NUMBER")?;
            match value.parse::<i64>() {
                Ok(number) => number_with_commas(number),
                Err(_) => float_with_commas(parse_value(value, "number")?),
            }
        }
        "uncommas" => remove_commas(required(args, 0, "TEXT")?),
        "distance" => {
            let mut values = [0.0_f64; 4];
            for (index, slot) in values.iter_mut().enumerate() {
                *slot = parse_value(required(args, index, "COORDINATE")?, "coordinate")?;
            }
            let from = Coordinates::new(values[0], values[1]);
            let to = Coordinates::new(values[2], values[3]);
            format!("{:.3} km", calculate_distance(from, to))
        }
        "snake" => camel_to_snake(required(args, 0, "TEXT")?),
        "camel" => snake_to_camel(required(args, 0, "TEXT")?),
        "query" => serde_json::to_string_pretty(&parse_url_params(required(args, 0, "URL")?)?)?,
        "email" => {
            let email = required(args, 0, "ADDRESS")?;
            let verdict = if is_valid_email(email) { "valid" } else { "invalid" };
            format!("{}: {}", email, verdict)
        }
        "truncate" => {
            let text = required(args, 0, "TEXT")?;
            let length = parse_value(required(args, 1, "LEN")?, "length")?;
            match args.get(2) {
                Some(ending) => truncate_with(text, length, ending),
                None => truncate(text, length),
            }
        }
        "random" => {
            let length = match args.first() {
                Some(value) => parse_value(value, "length")?,
                None => DEFAULT_RANDOM_LENGTH,
            };
            let charset = match args.get(1) {
                Some(mode) => mode.parse::<CharacterSet>()?,
                None => CharacterSet::default(),
            };
            random_string(length, charset)
        }
        "range" => {
            let start = parse_value(required(args, 0, "START")?, "start")?;
            let end = parse_value(required(args, 1, "END")?, "end")?;
            range(start, end)
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        }
        "period" => {
            let start = parse_date(required(args, 0, "START")?)?;
            let end = parse_date(required(args, 1, "END")?)?;
            create_period(start, end)
                .iter()
                .map(|date| date.format(DATE_FORMAT).to_string())
                .collect::<Vec<_>>()
                .join("\n")
        }
        "shift" => {
            let date = parse_date(required(args, 0, "DATE")?)?;
            let days: i64 = parse_value(required(args, 1, "DAYS")?, "days")?;
            add_days(date, days)
                .ok_or_else(|| format!("Date out of range: {} {:+} days", date, days))?
                .format(DATE_FORMAT)
                .to_string()
        }
        "diff" => {
            let first = parse_date(required(args, 0, "DATE")?)?;
            let second = parse_date(required(args, 1, "DATE")?)?;
            date_diff(first, second).to_string()
        }
        other => return Err(format!("Unknown command: {}", other).into()),
    };

    Ok(output)
}

/// Main application entry point.
fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let config = parse_arguments(&args).map_err(|e| {
        eprintln!("Error: {}", e);
        eprintln!();
        print_usage();
        e
    })?;

    // Setup logging
    setup_logging(config.verbose);

    let Some(command) = config.command.as_deref() else {
        print_usage();
        return Err("No command given".into());
    };

    let output = run_command(command, &config)?;
    println!("{}", output);

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        std::iter::once("stopclock")
            .chain(items.iter().copied())
            .map(String::from)
            .collect()
    }

    fn run_with(items: &[&str]) -> Result<String, Box<dyn Error>> {
        let config = parse_arguments(&argv(items)).unwrap();
        let command = config.command.clone().unwrap();
        run_command(&command, &config)
    }

    #[test]
    fn test_parse_defaults() {
        let config = parse_arguments(&argv(&["hms", "1000"])).unwrap();
        assert_eq!(config.command.as_deref(), Some("hms"));
        assert_eq!(config.args, vec!["1000"]);
        assert_eq!(config.threshold, DEFAULT_THRESHOLD_SECS);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_options() {
        let config =
            parse_arguments(&argv(&["--threshold", "0.5", "time", "10", "--amplitude", "0", "-v"]))
                .unwrap();
        assert_eq!(config.threshold, 0.5);
        assert_eq!(config.amplitude, 0.0);
        assert!(config.verbose);
        assert_eq!(config.args, vec!["10"]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_arguments(&argv(&["--threshold"])).is_err());
        assert!(parse_arguments(&argv(&["--threshold", "abc"])).is_err());
        assert!(parse_arguments(&argv(&["--bogus"])).is_err());
    }

    #[test]
    fn test_negative_numbers_are_positional() {
        let config = parse_arguments(&argv(&["range", "-3", "0"])).unwrap();
        assert_eq!(config.args, vec!["-3", "0"]);
    }

    #[test]
    fn test_formatting_commands() {
        assert_eq!(run_with(&["hms", "3723000"]).unwrap(), "01:02:03");
        assert_eq!(run_with(&["ms", "01:02:03"]).unwrap(), "3723000");
        assert_eq!(run_with(&["phone", "01012345678"]).unwrap(), "010-1234-5678");
        assert_eq!(run_with(&["commas", "1234567"]).unwrap(), "1,234,567");
        assert_eq!(run_with(&["commas", "1234.5"]).unwrap(), "1,234.5");
        assert_eq!(run_with(&["uncommas", "1,234"]).unwrap(), "1234");
        assert_eq!(run_with(&["snake", "fooBar"]).unwrap(), "foo_bar");
        assert_eq!(run_with(&["camel", "foo_bar"]).unwrap(), "fooBar");
        assert_eq!(run_with(&["truncate", "abcdef", "3"]).unwrap(), "abc...");
        assert_eq!(run_with(&["truncate", "abcdef", "3", "!"]).unwrap(), "abc!");
    }

    #[test]
    fn test_calculation_commands() {
        assert_eq!(run_with(&["range", "-2", "2"]).unwrap(), "-2 -1 0 1");
        assert_eq!(run_with(&["diff", "2023-01-01", "2023-02-01"]).unwrap(), "31");
        assert_eq!(run_with(&["shift", "2023-01-31", "1"]).unwrap(), "2023-02-01");
        assert_eq!(
            run_with(&["period", "2023-01-01", "2023-01-02"]).unwrap(),
            "2023-01-01\n2023-01-02"
        );
        assert_eq!(run_with(&["distance", "0", "0", "0", "0"]).unwrap(), "0.000 km");
    }

    #[test]
    fn test_parsing_commands() {
        let json = run_with(&["query", "https://example.com/?a=1"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["a"], "1");

        assert_eq!(run_with(&["email", "a@b.com"]).unwrap(), "a@b.com: valid");
    }

    #[test]
    fn test_random_command() {
        let output = run_with(&["random", "8", "num"]).unwrap();
        assert_eq!(output.len(), 8);
        assert!(run_with(&["random", "8", "hex"]).is_err());
        assert_eq!(run_with(&["random"]).unwrap().len(), DEFAULT_RANDOM_LENGTH);
    }

    #[test]
    fn test_time_command_reports() {
        let output = run_with(&["--amplitude", "0", "time", "5"]).unwrap();
        assert!(output.starts_with("Total execution time in seconds: "));
    }

    #[test]
    fn test_wait_command() {
        let output = run_with(&["--amplitude", "0", "wait", "1"]).unwrap();
        assert_eq!(output, "Slept 1 ms");
    }

    #[test]
    fn test_command_errors() {
        assert!(run_with(&["hms"]).is_err());
        assert!(run_with(&["ms", "1:2"]).is_err());
        assert!(run_with(&["diff", "2023-13-01", "2023-01-01"]).is_err());
        assert!(run_with(&["nope"]).is_err());
        assert!(run_with(&["--amplitude", "2", "time", "1"]).is_err());
    }
}
