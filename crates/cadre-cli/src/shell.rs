//! Line-oriented wizard shell
//!
//! Reads one command per line, so the same session can be driven by hand or
//! by piping a script into `cadre`. Blank lines and lines starting with `#`
//! are skipped. A failing line is reported and the shell moves on.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use cadre_core::OperationStatus;
use clap::Parser;
use log::{debug, warn};

use crate::cli::{Cli, Flow, ShellLine};

/// Split a line into words. Double quotes group words containing spaces;
/// inside quotes a backslash escapes the next character.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            '\\' if quoted => match chars.next() {
                Some(next) => current.push(next),
                None => bail!("Line ends with a dangling escape"),
            },
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        bail!("Unterminated quote");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Run the shell until `quit` or end of input. Returns the number of lines
/// that failed.
pub fn run<R: BufRead>(cli: &mut Cli, input: R, interactive: bool) -> Result<usize> {
    let mut failures = 0;

    if interactive {
        println!("Cadre wizard. Type `help` for commands, `quit` to leave.");
        prompt(cli)?;
    }

    for line in input.lines() {
        let line = line?;
        match run_line(cli, &line) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => {
                failures += 1;
                warn!("Command failed: {line}");
                cli.renderer()
                    .render(&OperationStatus::failure(format!("{e:#}")).to_string())?;
            }
        }
        if interactive {
            prompt(cli)?;
        }
    }

    debug!("Shell finished with {failures} failed lines");
    Ok(failures)
}

fn run_line(cli: &mut Cli, line: &str) -> Result<Flow> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(Flow::Continue);
    }

    let words = tokenize(trimmed)?;
    match ShellLine::try_parse_from(words) {
        Ok(parsed) => cli.handle(parsed.command),
        Err(e) => {
            // Help output goes to stdout, usage errors to stderr.
            e.print()?;
            if e.use_stderr() {
                bail!("Could not parse `{trimmed}`");
            }
            Ok(Flow::Continue)
        }
    }
}

fn prompt(cli: &Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", cli.prompt())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use cadre_core::{Session, WizardStep};

    use super::*;
    use crate::renderer::TerminalRenderer;

    fn words(line: &str) -> Vec<String> {
        tokenize(line).expect("tokenize")
    }

    #[test]
    fn test_tokenize_plain_words() {
        assert_eq!(words("  select   2 "), ["select", "2"]);
        assert!(words("").is_empty());
    }

    #[test]
    fn test_tokenize_quotes_and_escapes() {
        assert_eq!(
            words(r#"create "Risk Officer" "Flags \"material\" risk""#),
            ["create", "Risk Officer", r#"Flags "material" risk"#]
        );
        assert_eq!(words(r#"task 1 results """#), ["task", "1", "results", ""]);
        assert_eq!(words(r#"objective --name=Q"3 review""#), ["objective", "--name=Q3 review"]);
    }

    #[test]
    fn test_tokenize_unterminated_quote() {
        assert!(tokenize(r#"create "Risk Officer"#).is_err());
    }

    #[test]
    fn test_run_counts_failures_and_continues() {
        let script = "\
# comment lines are skipped
objective --name \"Rule tracking\"
next
select 2
frobnicate
next
show
";
        let mut cli = Cli::new(Session::default(), TerminalRenderer::new(false));
        let failures = run(&mut cli, script.as_bytes(), false).expect("run");

        // `next` before selecting and the unknown command
        assert_eq!(failures, 2);
        assert_eq!(cli.session().current_step(), WizardStep::Tasks);
        assert_eq!(cli.session().objective().name, "Rule tracking");
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut cli = Cli::new(Session::default(), TerminalRenderer::new(false));
        run(&mut cli, "select 1\nquit\nselect 2\n".as_bytes(), false).expect("run");
        assert_eq!(cli.session().selection(), [1]);
    }
}
