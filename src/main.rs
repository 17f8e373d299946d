use std::io;

use clap::{ArgAction, Args, Parser, Subcommand};
use stardate::{console::Console, convert, form, is_valid, EarthDate, Stardate, StardateError};

mod logging;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Stardate(#[from] StardateError),

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Exclusive sources of "today" for the `convert` subcommand.
#[derive(Args, Debug)]
#[group(required = false, multiple = false)]
struct DateProvider {
    /// [DATE PROVIDER] Convert the current UTC date. Exclusive with other date providers.
    #[arg(long)]
    utc: bool,

    /// [DATE PROVIDER] Convert the current local date. Exclusive with other date providers.
    #[arg(long)]
    local: bool,
}

impl DateProvider {
    fn today(&self) -> Option<EarthDate> {
        // the group is exclusive, so at most one of these is set
        if self.utc {
            return Some(EarthDate::today_utc());
        }
        if self.local {
            return Some(EarthDate::today_local());
        }
        None
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Do not print prompts in the console loop.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Subcommand to run. Omit to start the console loop.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Converts Earth dates to stardates.
    ///
    /// With one date, prints just its stardate. With several, prints one `DATE => STARDATE` line
    /// per date and exits with status 1 if any of them is invalid.
    ///
    /// # Date Providers
    ///
    /// Use one of `--utc` or `--local` instead of explicit dates to convert today's date.
    Convert {
        /// Dates to convert
        #[arg(
            value_name = "YYYY-MM-DD",
            required_unless_present_any = ["utc", "local"],
            conflicts_with_all = ["utc", "local"]
        )]
        dates: Vec<String>,

        #[command(flatten)]
        provider: DateProvider,
    },

    /// Checks that a date is `YYYY-MM-DD`. Prints `true` or `false`.
    Valid {
        /// The date to check
        date: String,
    },

    /// Reads dates from stdin, one per line, until a blank line or end of input.
    Console,
}

type Output = (String, i32);

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match do_work(cli) {
        Ok((output, exit_code)) => {
            if !output.is_empty() {
                println!("{output}");
            }
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn convert_many(dates: &[String]) -> Output {
    let mut exit_code = 0;
    let lines: Vec<String> = dates
        .iter()
        .map(|date| {
            let rendered = match convert(date) {
                Ok(stardate) => stardate.to_string(),
                Err(_) => {
                    exit_code = 1;
                    form::INVALID_OUTPUT.to_owned()
                }
            };
            format!("{} => {}", date.trim(), rendered)
        })
        .collect();
    (lines.join("\n"), exit_code)
}

fn run_console(quiet: bool) -> Result<Output, CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock())
        .with_prompts(!quiet)
        .run()?;
    Ok((String::new(), 0))
}

fn do_work(cli: Cli) -> Result<Output, CliError> {
    match cli.command {
        Some(Commands::Convert { dates, provider }) => {
            if let Some(today) = provider.today() {
                return Ok((Stardate::from_date(&today).to_string(), 0));
            }
            match dates.as_slice() {
                [date] => Ok((convert(date)?.to_string(), 0)),
                dates => Ok(convert_many(dates)),
            }
        }
        Some(Commands::Valid { date }) => Ok(if is_valid(&date) {
            ("true".to_string(), 0)
        } else {
            ("false".to_string(), 1)
        }),
        Some(Commands::Console) | None => run_console(cli.quiet),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn work(args: &[&str]) -> Result<Output, CliError> {
        let cli = Cli::try_parse_from(args).unwrap();
        do_work(cli)
    }

    #[test]
    fn test_convert_one() {
        let output = work(&["stardate", "convert", "2324-12-31"]).unwrap();
        assert_eq!(("1997.27".to_string(), 0), output);
    }

    #[test]
    fn test_convert_one_invalid() {
        let res = work(&["stardate", "convert", "2323-02-30"]);
        assert!(matches!(
            res,
            Err(CliError::Stardate(StardateError::InvalidDateFormat { .. }))
        ));
    }

    #[test]
    fn test_convert_many() {
        let output = work(&["stardate", "convert", "2323-01-01", "bogus", "2324-01-01"]).unwrap();
        assert_eq!(
            (
                "2323-01-01 => 0.00\nbogus => Invalid date format\n2324-01-01 => 1000.00"
                    .to_string(),
                1
            ),
            output
        );

        let output = work(&["stardate", "convert", "2323-01-01", "2324-01-01"]).unwrap();
        assert_eq!(0, output.1);
    }

    #[test]
    fn test_convert_today() {
        let (output, exit_code) = work(&["stardate", "convert", "--utc"]).unwrap();
        assert_eq!(0, exit_code);
        assert!(output.parse::<f64>().is_ok());
    }

    #[rstest]
    #[case(&["stardate", "convert"])]
    #[case(&["stardate", "convert", "--utc", "--local"])]
    #[case(&["stardate", "convert", "--utc", "2323-01-01"])]
    #[case(&["stardate", "valid"])]
    fn test_bad_args(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[rstest]
    #[case("2024-02-29", "true", 0)]
    #[case("2023-02-29", "false", 1)]
    fn test_valid(#[case] date: &str, #[case] expected: &str, #[case] exit_code: i32) {
        let output = work(&["stardate", "valid", date]).unwrap();
        assert_eq!((expected.to_string(), exit_code), output);
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["stardate", "-vv", "console", "--quiet"]).unwrap();
        assert_eq!(2, cli.verbose);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Commands::Console)));

        let cli = Cli::try_parse_from(["stardate"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
    }
}
