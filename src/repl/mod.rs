//! REPL Module
//!
//! The interactive `Pokedex > ` loop. Each line is one command; command
//! errors are printed and the loop carries on.

mod command;

use std::collections::BTreeMap;
use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::client::PokeApiClient;
use crate::error::{ReplError, ReplResult};
use crate::models::Pokemon;

pub use command::{clean_input, Command};

/// Printed before every line of input.
pub const PROMPT: &str = "Pokedex > ";

/// Upper bound (exclusive) of a catch roll. A creature is caught when the
/// roll is below `CATCH_ROLL_MAX - base_experience`.
pub const CATCH_ROLL_MAX: u32 = 300;

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Session ==
/// Per-user REPL state: pagination cursors and the caught collection.
#[derive(Debug)]
pub struct Session {
    client: PokeApiClient,
    next: Option<String>,
    previous: Option<String>,
    caught: BTreeMap<String, Pokemon>,
    rng: StdRng,
}

impl Session {
    /// Creates a session whose first `map` shows `page_size` areas.
    pub fn new(client: PokeApiClient, page_size: u32) -> Self {
        Self::with_rng(client, page_size, StdRng::from_entropy())
    }

    /// Creates a session with a caller-provided RNG for catch rolls.
    pub fn with_rng(client: PokeApiClient, page_size: u32, rng: StdRng) -> Self {
        let next = Some(client.first_location_page_url(page_size));
        Self {
            client,
            next,
            previous: None,
            caught: BTreeMap::new(),
            rng,
        }
    }

    pub fn caught(&self) -> &BTreeMap<String, Pokemon> {
        &self.caught
    }

    // == Run ==
    /// Reads commands from `input` until EOF or `exit`.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and run like any
    /// other input.
    ///
    /// # Errors
    /// Only I/O errors on `input` or `out` end the loop with an error.
    pub async fn run<R, W>(&mut self, mut input: R, out: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut buf = Vec::new();

        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                writeln!(out)?;
                break;
            }
            let line = String::from_utf8_lossy(&buf);

            match self.execute(&line, out).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(ReplError::Io(err)) => return Err(err),
                Err(err) => writeln!(out, "{err}")?,
            }
        }

        Ok(())
    }

    // == Execute ==
    /// Runs a single input line.
    pub async fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> ReplResult<Flow> {
        let words = clean_input(line);
        let Some((name, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };

        let Some(command) = Command::parse(name) else {
            writeln!(out, "Unknown command")?;
            return Ok(Flow::Continue);
        };

        debug!(command = command.name(), ?args, "executing command");

        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map_forward(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore => {
                let area = required_arg(args, command, "location area name")?;
                self.explore(area, out).await?;
            }
            Command::Catch => {
                let name = required_arg(args, command, "pokemon name")?;
                self.catch(name, out).await?;
            }
            Command::Inspect => {
                let name = required_arg(args, command, "pokemon name")?;
                self.inspect(name, out)?;
            }
            Command::Pokedex => self.pokedex(out)?,
        }

        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> ReplResult<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for command in Command::ALL {
            writeln!(out, "{}: {}", command.name(), command.description())?;
        }
        Ok(())
    }

    async fn map_forward<W: Write>(&mut self, out: &mut W) -> ReplResult<()> {
        let Some(url) = self.next.clone() else {
            writeln!(out, "you're on the last page")?;
            return Ok(());
        };
        self.show_page(&url, out).await
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> ReplResult<()> {
        let Some(url) = self.previous.clone() else {
            writeln!(out, "you're on the first page")?;
            return Ok(());
        };
        self.show_page(&url, out).await
    }

    async fn show_page<W: Write>(&mut self, url: &str, out: &mut W) -> ReplResult<()> {
        let page = self.client.location_areas(url).await?;

        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }

        self.next = page.next;
        self.previous = page.previous;
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> ReplResult<()> {
        let detail = self.client.location_area(area).await?;

        writeln!(out, "Exploring {area}...")?;
        writeln!(out, "Found Pokemon:")?;
        for name in detail.pokemon_names() {
            writeln!(out, " - {name}")?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> ReplResult<()> {
        writeln!(out, "Throwing a Pokeball at {name}...")?;

        let pokemon = self.client.pokemon(name).await?;

        let base_experience = pokemon.base_experience.unwrap_or(0);
        let chance = CATCH_ROLL_MAX.saturating_sub(base_experience);
        let roll = self.rng.gen_range(0..CATCH_ROLL_MAX);
        debug!(pokemon = %pokemon.name, roll, chance, "catch roll");

        if roll < chance {
            writeln!(out, "{} was caught!", pokemon.name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            self.caught.insert(pokemon.name.clone(), pokemon);
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> ReplResult<()> {
        let Some(pokemon) = self.caught.get(name) else {
            writeln!(out, "you have not caught that pokemon")?;
            return Ok(());
        };

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        Ok(())
    }

    fn pokedex<W: Write>(&self, out: &mut W) -> ReplResult<()> {
        if self.caught.is_empty() {
            writeln!(out, "Your Pokedex is empty")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for name in self.caught.keys() {
            writeln!(out, " - {name}")?;
        }
        Ok(())
    }
}

fn required_arg<'a>(
    args: &'a [String],
    command: Command,
    what: &'static str,
) -> ReplResult<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or(ReplError::MissingArgument {
            command: command.name(),
            what,
        })
}
