//! Numbered text menu that dispatches to [`Explorer`] operations.

use crate::api::Fetch;
use crate::explorer::Explorer;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Search,
    Compare,
    Connections,
    SpeciesStats,
    Exit,
}

impl MenuChoice {
    /// Exact match against `"1"`..`"5"`; anything else is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Search),
            "2" => Some(Self::Compare),
            "3" => Some(Self::Connections),
            "4" => Some(Self::SpeciesStats),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\nStar Wars Explorer Menu:
1. Search Character
2. Compare Characters
3. Find Connections
4. Species Lifespan Stats (with Chart)
5. Exit";

/// Run the menu until the user exits or input ends.
pub fn run<F, W, R>(explorer: &mut Explorer<F, W>, mut input: R) -> io::Result<()>
where
    F: Fetch,
    W: Write,
    R: BufRead,
{
    loop {
        writeln!(explorer.out(), "{MENU}")?;
        let Some(choice) = prompt(explorer.out(), &mut input, "Enter option: ")? else {
            return Ok(());
        };

        match MenuChoice::parse(&choice) {
            Some(MenuChoice::Search) => {
                let Some(name) = prompt(explorer.out(), &mut input, "Character name: ")? else {
                    return Ok(());
                };
                explorer.search_character(&name)?;
            }
            Some(MenuChoice::Compare) => {
                let Some(first) = prompt(explorer.out(), &mut input, "First character: ")? else {
                    return Ok(());
                };
                let Some(second) = prompt(explorer.out(), &mut input, "Second character: ")?
                else {
                    return Ok(());
                };
                explorer.compare_characters(&first, &second)?;
            }
            Some(MenuChoice::Connections) => {
                let Some(name) = prompt(explorer.out(), &mut input, "Character name: ")? else {
                    return Ok(());
                };
                explorer.find_connections(&name)?;
            }
            Some(MenuChoice::SpeciesStats) => explorer.species_lifespan_stats()?,
            Some(MenuChoice::Exit) => {
                writeln!(explorer.out(), "Goodbye!")?;
                return Ok(());
            }
            None => {
                log::debug!("rejected menu input {choice:?}");
                writeln!(explorer.out(), "Error: Invalid choice.")?;
            }
        }
    }
}

/// Print `label`, then read one line without its terminator. `None` at end of input.
fn prompt<W: Write, R: BufRead>(
    out: &mut W,
    input: &mut R,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(Some(trimmed.to_string()))
}
