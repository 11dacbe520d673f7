use alas_core::{gateways::map::MapDocumentFormatter, gateways::search::DeliveryOrderSearch};
use std::{
    io::{self, BufRead, Write},
    path::Path,
};

mod actions;
pub mod style;

use style::Theme;

const BANNER: &str = r"
    _    _               _____           _
   / \  | | __ _ ___    |_   _|__   ___ | |___
  / _ \ | |/ _` / __|_____| |/ _ \ / _ \| / __|
 / ___ \| | (_| \__ \_____| | (_) | (_) | \__ \
/_/   \_\_|\__,_|___/     |_|\___/ \___/|_|___/
";

/// Collaborators of the menu actions.
pub struct App<'a, S, F> {
    pub search: &'a S,
    pub map: &'a F,
    pub output_dir: &'a Path,
}

/// Line based terminal dialog.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    theme: Theme,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, theme: Theme) -> Self {
        Self {
            input,
            output,
            theme,
        }
    }

    /// Returns the trimmed line or `None` at the end of the input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Returns `false` at the end of the input.
    pub fn pause(&mut self) -> io::Result<bool> {
        let answer = self.prompt("\nPress Enter to return to the menu...")?;
        writeln!(self.output)?;
        Ok(answer.is_some())
    }

    pub fn clear(&mut self) -> io::Result<()> {
        if self.theme.is_colored() {
            write!(self.output, "\x1b[2J\x1b[H")?;
        }
        Ok(())
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn title(&mut self, text: &str) -> io::Result<()> {
        let text = self.theme.title(text);
        self.line(&text)
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        let text = self.theme.success(text);
        self.line(&text)
    }

    pub fn warning(&mut self, text: &str) -> io::Result<()> {
        let text = self.theme.warning(&format!("[WARNING] {text}"));
        self.line(&text)
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        let text = self.theme.error(&format!("[ERROR] {text}"));
        self.line(&text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    CorrectXY,
    OptimalRoute,
    RetrieveCoordinates,
    RenderMap,
    Help,
    Exit,
}

impl MenuEntry {
    pub const ALL: [Self; 6] = [
        Self::CorrectXY,
        Self::OptimalRoute,
        Self::RetrieveCoordinates,
        Self::RenderMap,
        Self::Help,
        Self::Exit,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::CorrectXY => "Correct X&Y",
            Self::OptimalRoute => "Optimized pallet route",
            Self::RetrieveCoordinates => "Retrieve pallet coordinates",
            Self::RenderMap => "Generate HTML map",
            Self::Help => "Help",
            Self::Exit => "Exit",
        }
    }

    pub fn from_choice(choice: &str) -> Option<Self> {
        let choice = choice.trim();
        if choice.eq_ignore_ascii_case("q") {
            return Some(Self::Exit);
        }
        let n: usize = choice.parse().ok()?;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }
}

fn print_menu<R: BufRead, W: Write>(term: &mut Terminal<R, W>) -> io::Result<()> {
    term.title("Main menu")?;
    for (i, entry) in MenuEntry::ALL.iter().enumerate() {
        term.line(&format!("  {}. {}", i + 1, entry.label()))?;
    }
    term.line("  q. Quit")
}

/// Runs the main menu until the user exits or the input ends.
pub fn run_menu<R, W, S, F>(term: &mut Terminal<R, W>, app: &App<S, F>) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    S: DeliveryOrderSearch,
    F: MapDocumentFormatter,
{
    term.title(BANNER)?;
    term.line(&format!("Alas-Tools-Cli v{}\n", env!("CARGO_PKG_VERSION")))?;
    loop {
        print_menu(term)?;
        let Some(choice) = term.prompt("\nSelect an option: ")? else {
            return Ok(());
        };
        let Some(entry) = MenuEntry::from_choice(&choice) else {
            term.warning(&format!("Invalid option: {choice:?}"))?;
            continue;
        };
        log::debug!("Selected {entry:?}");
        match entry {
            MenuEntry::Exit => {
                term.line("Bye!")?;
                return Ok(());
            }
            MenuEntry::CorrectXY | MenuEntry::OptimalRoute => actions::placeholder(term, entry)?,
            MenuEntry::RetrieveCoordinates => actions::retrieve_coordinates(term, app)?,
            MenuEntry::RenderMap => actions::render_map(term, app)?,
            MenuEntry::Help => actions::help(term)?,
        }
        if !term.pause()? {
            return Ok(());
        }
        term.clear()?;
    }
}
