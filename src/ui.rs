// UI layer: provides the numbered menu loop on top of `dialoguer` prompts.
// The functions are small and synchronous to make the flow easy to follow.
// Input goes through the `Prompt` trait and output through any `Write`, so
// the loop can be driven by a script in tests.

use crate::config::AppConfig;
use crate::record::AddOutcome;
use crate::session::{MenuChoice, Session, State};
use anyhow::{bail, Context, Result};
use crossterm::style::Stylize;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufRead, IsTerminal, Write};
use std::time::Duration;

const MENU_ITEMS: [&str; 5] = [
    "Add File",
    "View All Files",
    "Search Files",
    "Generate Summary",
    "Exit (Auto Save + Backup)",
];

/// Source of user input for the menu loop.
pub trait Prompt {
    /// Ask for one line of text. Surrounding whitespace is the caller's
    /// problem.
    fn ask(&mut self, prompt: &str, allow_empty: bool) -> Result<String>;
}

/// Reads from the terminal with `dialoguer::Input`.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, prompt: &str, allow_empty: bool) -> Result<String> {
        // `Input::interact_text()` prompts the user for input and returns it.
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()?;
        Ok(value)
    }
}

/// Reads plain lines, for when input is piped rather than typed.
/// `console` hands back an empty string forever without a terminal, so
/// `dialoguer` cannot be used there.
pub struct LinePrompt<R> {
    reader: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        LinePrompt { reader }
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn ask(&mut self, prompt: &str, allow_empty: bool) -> Result<String> {
        loop {
            print!("{prompt}: ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                bail!("end of input while waiting for {prompt:?}");
            }
            let value = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
            if allow_empty || !value.trim().is_empty() {
                return Ok(value.to_string());
            }
        }
    }
}

/// Main interactive menu. Loads the store named in `config` and runs the
/// loop until the user picks "Exit", or until piped input runs out.
pub fn main_menu(config: AppConfig) -> Result<()> {
    let store_path = config.store_path.clone();
    let mut session = Session::open(config)
        .with_context(|| format!("Failed to load {}", store_path.display()))?;

    let mut out = std::io::stdout();
    if console::user_attended_stderr() && std::io::stdin().is_terminal() {
        run_menu(&mut session, &mut TerminalPrompt, &mut out)
    } else {
        let mut prompt = LinePrompt::new(std::io::stdin().lock());
        run_menu(&mut session, &mut prompt, &mut out)
    }
}

/// Drive `session` from `prompt` until it reaches `State::Exited`.
pub fn run_menu<P: Prompt, W: Write>(
    session: &mut Session,
    prompt: &mut P,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Welcome to Smart Download Manager – File Assistant")?;

    while session.state() == State::Running {
        writeln!(out)?;
        for (i, item) in MENU_ITEMS.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, item)?;
        }
        out.flush()?;

        let input = prompt.ask("Choose an option (1-5)", true)?;
        match MenuChoice::parse(&input) {
            MenuChoice::Add => handle_add(session, prompt, out)?,
            MenuChoice::View => handle_view(session, out)?,
            MenuChoice::Search => handle_search(session, prompt, out)?,
            MenuChoice::Summarize => handle_summary(session, out)?,
            MenuChoice::Exit => handle_exit(session, out)?,
            MenuChoice::Invalid => writeln!(out, "Invalid choice. Try again.")?,
        }
    }
    Ok(())
}

fn handle_add<P: Prompt, W: Write>(
    session: &mut Session,
    prompt: &mut P,
    out: &mut W,
) -> Result<()> {
    let name = prompt.ask("Enter file name", false)?;
    let outcome = session.add(&name);
    writeln!(out, "{outcome}")?;
    if let AddOutcome::Added {
        cleanup: Some(warning),
        ..
    } = outcome
    {
        writeln!(out, "{}", warning.to_string().yellow())?;
    }
    Ok(())
}

fn handle_view<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let records = session.log().records();
    if records.is_empty() {
        writeln!(out, "No files logged yet.")?;
        return Ok(());
    }
    writeln!(out, "\n--- FILE LIST ---")?;
    for (i, record) in records.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, record)?;
    }
    writeln!(out, "-----------------")?;
    Ok(())
}

fn handle_search<P: Prompt, W: Write>(
    session: &Session,
    prompt: &mut P,
    out: &mut W,
) -> Result<()> {
    let keyword = prompt.ask("Enter keyword to search", true)?;
    let results = session.search(&keyword);
    if results.is_empty() {
        writeln!(out, "No matches found.")?;
        return Ok(());
    }
    writeln!(out, "Found {} matching files:", results.len())?;
    for record in results {
        writeln!(out, "- {record}")?;
    }
    Ok(())
}

fn handle_summary<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    session.summarize()?;
    writeln!(out, "Summary report generated ({}).", session.config().report_path.display())?;
    Ok(())
}

fn handle_exit<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    // indicatif's spinner stays hidden when stderr is not a terminal.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Saving...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    let result = session.exit();
    spinner.finish_and_clear();

    if let Err(e) = &result {
        writeln!(out, "{}", format!("Save failed: {e:#}").red())?;
    }
    result?;
    writeln!(out, "Summary report generated ({}).", session.config().report_path.display())?;
    writeln!(out, "All data saved and backup created. Goodbye!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn line_prompt_strips_line_endings() {
        let mut prompt = LinePrompt::new(Cursor::new("1\r\n a.png \n"));
        assert_eq!(prompt.ask("Choose", true).unwrap(), "1");
        assert_eq!(prompt.ask("Name", false).unwrap(), " a.png ");
    }

    #[test]
    fn line_prompt_skips_blank_lines_unless_allowed() {
        let mut prompt = LinePrompt::new(Cursor::new("\n  \nb.mp3\n\n"));
        assert_eq!(prompt.ask("Name", false).unwrap(), "b.mp3");
        assert_eq!(prompt.ask("Keyword", true).unwrap(), "");
    }

    #[test]
    fn line_prompt_errors_at_end_of_input() {
        let mut prompt = LinePrompt::new(Cursor::new("5\n"));
        assert_eq!(prompt.ask("Choose", true).unwrap(), "5");
        let err = prompt.ask("Choose", true).unwrap_err();
        assert!(err.to_string().contains("end of input"), "{err}");
    }

    #[test]
    fn piped_input_ending_early_stops_the_loop() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::open(AppConfig::in_dir(dir.path())).unwrap();
        let mut prompt = LinePrompt::new(Cursor::new("1\na.png\n2\n"));
        let mut out = Vec::new();

        let err = run_menu(&mut session, &mut prompt, &mut out).unwrap_err();
        assert!(err.to_string().contains("end of input"), "{err}");
        assert_eq!(session.state(), State::Running);
        assert_eq!(session.log().len(), 1);
        assert!(!dir.path().join("backup.txt").exists());

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Choose an option").count(), 0);
        assert_eq!(out.matches("1. Add File").count(), 3);
    }

    #[test]
    fn piped_exit_choice_saves_and_returns() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::open(AppConfig::in_dir(dir.path())).unwrap();
        let mut prompt = LinePrompt::new(Cursor::new("1\na.png\n5\n"));
        let mut out = Vec::new();

        run_menu(&mut session, &mut prompt, &mut out).unwrap();
        assert_eq!(session.state(), State::Exited);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("backup.txt")).unwrap(),
            "a.png,Image\n"
        );
    }
}
