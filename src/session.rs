//! The interactive prompt loop.
//!
//! One iteration: read a name, search, let the user pick among several
//! matches, fetch the pick's report and render it. Lookup failures are
//! reported to the user and the loop carries on; only console I/O errors
//! end a session early.

use std::io::{BufRead, Write};

use log::debug;

use crate::{
    api::{get_player_stats, search_player, Lookup, PlayerApi, PlayerSummary},
    error::StatsError,
    render::render,
    Result,
};


pub const NAME_PROMPT: &str = "Enter player name (or \"exit\" to quit): ";
pub const SELECT_PROMPT: &str = "Select player number: ";
pub const RETRY_PROMPT: &str = "Press Enter to try again...";
pub const NEXT_PROMPT: &str = "\nPress Enter to search for another player...";

/// True when the user typed `exit`, in any case.
pub fn is_exit(input: &str) -> bool {
    input.eq_ignore_ascii_case("exit")
}

/// Turn a 1-based menu choice into an index into `count` results.
pub fn parse_selection(input: &str, count: usize) -> Result<usize> {
    let invalid = || StatsError::InvalidSelection {
        input: input.trim().to_string(),
        max: count,
    };
    let choice: usize = input.trim().parse().map_err(|_| invalid())?;
    if choice == 0 || choice > count {
        return Err(invalid());
    }
    Ok(choice - 1)
}

/// A prompt loop over any API and any console.
pub struct Session<'a, A, R, W> {
    api: &'a A,
    input: R,
    out: W,
}

impl<'a, A, R, W> Session<'a, A, R, W>
where
    A: PlayerApi,
    R: BufRead,
    W: Write,
{
    pub fn new(api: &'a A, input: R, out: W) -> Self {
        Self { api, input, out }
    }

    /// Give back the console handles, mostly so tests can read the output.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.out)
    }

    /// Run until the user types `exit` or input ends.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let Some(name) = self.prompt(NAME_PROMPT)? else {
                break;
            };
            if is_exit(&name) {
                break;
            }

            writeln!(self.out, "\nSearching...")?;
            let players = match search_player(self.api, &name).await {
                Lookup::Found(players) => players,
                Lookup::Empty | Lookup::Failed(_) => {
                    writeln!(self.out, "No players found.")?;
                    if self.prompt(RETRY_PROMPT)?.is_none() {
                        break;
                    }
                    continue;
                }
            };

            let Some(selected) = self.choose(&players)? else {
                break;
            };

            writeln!(self.out, "\nGetting stats for {}...", selected.name)?;
            match get_player_stats(self.api, &selected.id).await {
                Lookup::Found(report) => render(&mut self.out, &report)?,
                Lookup::Empty | Lookup::Failed(_) => {
                    writeln!(self.out, "No stats available.")?;
                    if self.prompt(RETRY_PROMPT)?.is_none() {
                        break;
                    }
                    continue;
                }
            }

            if self.prompt(NEXT_PROMPT)?.is_none() {
                break;
            }
        }
        Ok(())
    }

    /// Pick one of `players`, asking the user when there is more than one.
    ///
    /// Re-prompts until the answer is in range. `None` means input ended.
    fn choose<'p>(&mut self, players: &'p [PlayerSummary]) -> Result<Option<&'p PlayerSummary>> {
        if let [only] = players {
            return Ok(Some(only));
        }

        writeln!(self.out, "\nMultiple players found:")?;
        for (i, player) in players.iter().enumerate() {
            writeln!(self.out, "{}. {} ({})", i + 1, player.name, player.team)?;
        }

        loop {
            let Some(answer) = self.prompt(SELECT_PROMPT)? else {
                return Ok(None);
            };
            match parse_selection(&answer, players.len()) {
                Ok(idx) => return Ok(players.get(idx)),
                Err(e) => {
                    debug!("{}", e);
                    writeln!(
                        self.out,
                        "Please enter a number between 1 and {}.",
                        players.len()
                    )?;
                }
            }
        }
    }

    /// Print `text` and read one line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
