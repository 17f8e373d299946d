//! Line-oriented console loop over any reader and writer.

use crate::stardate::convert;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Printed once before the first line is read.
pub const BANNER: &str = "Enter Earth date (YYYY-MM-DD) or blank to exit:";
/// Printed after each answer.
pub const NEXT_PROMPT: &str = "Enter another date or blank to exit:";
/// Answer to a line that is not a valid date.
pub const INVALID_LINE: &str = "Invalid date format. Use YYYY-MM-DD.";
/// Printed when the loop ends.
pub const FAREWELL: &str = "Exiting.";

/// Counts of what a [Console] session saw.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines answered with a stardate.
    pub converted: usize,
    /// Lines answered with [INVALID_LINE].
    pub rejected: usize,
}

/// A line-oriented conversion loop.
///
/// Each non-blank line read is answered with `StarDate: <value>` or an invalid-format message. A
/// blank line or the end of input ends the session. Prompts are optional so that the loop can be
/// used over piped input without noise in the output.
///
/// ```
/// use stardate::console::{Console, Summary};
///
/// let input = b"2323-01-01\nbogus\n\n2324-01-01\n";
/// let mut output = Vec::new();
/// let summary = Console::new(&input[..], &mut output)
///     .with_prompts(false)
///     .run()
///     .unwrap();
///
/// assert_eq!(Summary { converted: 1, rejected: 1 }, summary);
/// assert_eq!(
///     "StarDate: 0.00\nInvalid date format. Use YYYY-MM-DD.\n",
///     String::from_utf8(output).unwrap()
/// );
/// ```
pub struct Console<R, W> {
    reader: R,
    writer: W,
    prompts: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console with prompts enabled.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            prompts: true,
        }
    }

    /// Enables or disables [BANNER], [NEXT_PROMPT] and [FAREWELL].
    pub fn with_prompts(mut self, prompts: bool) -> Self {
        self.prompts = prompts;
        self
    }

    /// Runs the loop until a blank line or end of input.
    ///
    /// # Errors
    ///
    /// - Returns any [io::Error] from reading or writing. Invalid dates, including lines that are
    ///   not valid UTF-8, are not errors.
    pub fn run(mut self) -> io::Result<Summary> {
        let mut summary = Summary::default();
        let mut buf = Vec::new();

        if self.prompts {
            writeln!(self.writer, "{BANNER}")?;
        }
        self.writer.flush()?;

        loop {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                break;
            }

            // undecodable bytes become U+FFFD and the line is rejected like any other bad date
            let line = String::from_utf8_lossy(&buf);
            let trimmed = line.trim();
            if trimmed.is_empty() {
                debug!("blank line");
                break;
            }

            match convert(trimmed) {
                Ok(stardate) => {
                    summary.converted += 1;
                    writeln!(self.writer, "StarDate: {stardate}")?;
                }
                Err(_) => {
                    summary.rejected += 1;
                    writeln!(self.writer, "{INVALID_LINE}")?;
                }
            }

            if self.prompts {
                writeln!(self.writer)?;
                writeln!(self.writer, "{NEXT_PROMPT}")?;
            }
            self.writer.flush()?;
        }

        if self.prompts {
            writeln!(self.writer, "{FAREWELL}")?;
        }
        self.writer.flush()?;

        info!(
            converted = summary.converted,
            rejected = summary.rejected,
            "console session finished"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn run_session(input: &str, prompts: bool) -> (Summary, String) {
        let mut output = Vec::new();
        let summary = Console::new(input.as_bytes(), &mut output)
            .with_prompts(prompts)
            .run()
            .unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[rstest]
    #[case("", 0, 0, "")]
    #[case("\n2323-01-01\n", 0, 0, "")]
    #[case("2323-01-01", 1, 0, "StarDate: 0.00\n")] // no trailing newline
    #[case("  2324-01-01  \r\n", 1, 0, "StarDate: 1000.00\n")]
    #[case(
        "2323-12-31\n2023-02-29\n2324-12-31\n",
        2,
        1,
        "StarDate: 997.26\nInvalid date format. Use YYYY-MM-DD.\nStarDate: 1997.27\n"
    )]
    #[case("not-a-date\n   \n2323-01-01\n", 0, 1, "Invalid date format. Use YYYY-MM-DD.\n")]
    fn test_quiet_session(
        #[case] input: &str,
        #[case] converted: usize,
        #[case] rejected: usize,
        #[case] expected: &str,
    ) {
        let (summary, output) = run_session(input, false);
        assert_eq!(Summary { converted, rejected }, summary);
        assert_eq!(expected, output);
    }

    #[rstest]
    #[case(b"\xff\n2323-01-01\n", 1, 1)]
    #[case(b"\xff\xfe\n2323-01-01\n", 1, 1)]
    #[case(b"2323\xc0-01-01\n2324-01-01", 1, 1)]
    fn test_invalid_utf8_lines_are_rejected(
        #[case] input: &[u8],
        #[case] converted: usize,
        #[case] rejected: usize,
    ) {
        let mut output = Vec::new();
        let summary = Console::new(input, &mut output)
            .with_prompts(false)
            .run()
            .unwrap();
        assert_eq!(Summary { converted, rejected }, summary);
        assert!(String::from_utf8(output)
            .unwrap()
            .starts_with("Invalid date format. Use YYYY-MM-DD.\nStarDate: "));
    }

    #[test]
    fn test_prompted_session() {
        let (summary, output) = run_session("2323-01-01\n", true);
        assert_eq!(
            Summary {
                converted: 1,
                rejected: 0
            },
            summary
        );
        let expected = format!("{BANNER}\nStarDate: 0.00\n\n{NEXT_PROMPT}\n{FAREWELL}\n");
        assert_eq!(expected, output);
    }

    #[test]
    fn test_prompted_empty_session() {
        let (_, output) = run_session("", true);
        assert_eq!(format!("{BANNER}\n{FAREWELL}\n"), output);
    }
}
