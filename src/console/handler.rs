use std::io::{self, BufRead, Write};

use anyhow::Result;
use rand::Rng;

use crate::{
    console::messages::GameEvent,
    game::{GhostEngine, HandRound, HandSession, SessionCommand},
    models::{GhostState, RoundResult},
};

/// Token that ends a hand-game round early
pub const STOP_TOKEN: &str = ".";

const SESSION_PROMPT: &str =
    "Enter n to start a new game, r to replay the last hand, or e to end game: ";
const WORD_PROMPT: &str = "Enter a word (or '.' to stop): ";

/// Source of player moves. `None` means input has run out.
pub trait TurnSupplier {
    fn next_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Receives every state change for display
pub trait Presenter {
    fn present(&mut self, event: &GameEvent) -> io::Result<()>;
}

/// Line-oriented input, optionally echoing prompts to `prompt_out`
pub struct ConsoleInput<R, W> {
    reader: R,
    prompt_out: Option<W>,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, prompt_out: Option<W>) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> TurnSupplier for ConsoleInput<R, W> {
    fn next_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if let Some(out) = self.prompt_out.as_mut() {
            write!(out, "{}", prompt)?;
            out.flush()?;
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Human-readable output
pub struct TextPresenter<W> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, event: &GameEvent) -> io::Result<()> {
        match event {
            GameEvent::GhostTurn { fragment, .. } => {
                writeln!(self.out, "\nCurrent word fragment: '{}'", fragment)
            }
            GameEvent::GhostWon { fragment, winner } => {
                writeln!(self.out, "'{}' is a word! {} wins.", fragment, winner)
            }
            GameEvent::GhostExhausted { fragment, winner } => writeln!(
                self.out,
                "{} wins! No valid word can be formed from the fragment '{}'.",
                winner, fragment
            ),
            GameEvent::HandDealt { replay, .. } => {
                if *replay {
                    writeln!(self.out, "Replaying the last hand.")
                } else {
                    writeln!(self.out, "Dealt a new hand.")
                }
            }
            GameEvent::HandTurn { letters, .. } => {
                let letters: Vec<String> = letters.iter().map(char::to_string).collect();
                writeln!(self.out, "Current hand: {}", letters.join(" "))
            }
            GameEvent::WordScored { word, points, total } => writeln!(
                self.out,
                "Word '{}' is valid! Score: {}, Total score: {}",
                word, points, total
            ),
            GameEvent::Rejected { message } => writeln!(self.out, "{}. Try again.", message),
            GameEvent::RoundEnd { total } => writeln!(self.out, "Final score: {}", total),
            GameEvent::SessionEnd => writeln!(self.out, "Goodbye!"),
        }
    }
}

/// One JSON object per event, newline separated
pub struct JsonPresenter<W> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn present(&mut self, event: &GameEvent) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Play one game of Ghost to the end.
///
/// Returns `None` if input ran out before the game was decided.
pub fn run_ghost<T, P>(
    engine: &mut GhostEngine<'_>,
    input: &mut T,
    presenter: &mut P,
) -> Result<Option<RoundResult>>
where
    T: TurnSupplier + ?Sized,
    P: Presenter + ?Sized,
{
    loop {
        let (fragment, player) = match engine.state() {
            GhostState::InProgress {
                fragment,
                current_player,
            } => (fragment.clone(), *current_player),
            _ => break,
        };

        presenter.present(&GameEvent::GhostTurn {
            fragment,
            player,
        })?;

        let Some(line) = input.next_line(&format!("{}, enter a letter: ", player))? else {
            tracing::warn!("Input ended during a game of Ghost");
            return Ok(None);
        };

        if let Err(e) = engine.play(&line) {
            if !e.is_recoverable() {
                return Err(e.into());
            }
            presenter.present(&GameEvent::Rejected {
                message: e.to_string(),
            })?;
        }
    }

    let event = match engine.state() {
        GhostState::Won { fragment, winner } => GameEvent::GhostWon {
            fragment: fragment.clone(),
            winner: *winner,
        },
        GhostState::LexiconExhausted { fragment, winner } => GameEvent::GhostExhausted {
            fragment: fragment.clone(),
            winner: *winner,
        },
        GhostState::InProgress { .. } => return Ok(None),
    };
    presenter.present(&event)?;
    Ok(engine.result())
}

/// Play words from one hand until it is used up or the player stops.
/// Running out of input counts as stopping.
pub fn run_hand_round<T, P>(
    mut round: HandRound<'_>,
    input: &mut T,
    presenter: &mut P,
) -> Result<RoundResult>
where
    T: TurnSupplier + ?Sized,
    P: Presenter + ?Sized,
{
    while !round.is_over() {
        presenter.present(&GameEvent::HandTurn {
            letters: round.hand().letters(),
            total: round.total_score(),
        })?;

        let line = match input.next_line(WORD_PROMPT)? {
            Some(line) if line != STOP_TOKEN => line,
            _ => break,
        };

        match round.play_word(&line) {
            Ok(played) => presenter.present(&GameEvent::WordScored {
                word: played.word,
                points: played.points,
                total: played.total,
            })?,
            Err(e) if e.is_recoverable() => presenter.present(&GameEvent::Rejected {
                message: e.to_string(),
            })?,
            Err(e) => return Err(e.into()),
        }
    }

    let total = round.total_score();
    tracing::info!("Hand round finished with {} points", total);
    presenter.present(&GameEvent::RoundEnd { total })?;
    Ok(round.stop())
}

/// Drive the new / replay / end menu until the player ends the session.
pub fn run_hand_session<R, T, P>(
    session: &mut HandSession<'_, R>,
    input: &mut T,
    presenter: &mut P,
) -> Result<Vec<RoundResult>>
where
    R: Rng,
    T: TurnSupplier + ?Sized,
    P: Presenter + ?Sized,
{
    let mut results = Vec::new();

    while let Some(line) = input.next_line(SESSION_PROMPT)? {
        let command = match SessionCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                presenter.present(&GameEvent::Rejected {
                    message: e.to_string(),
                })?;
                continue;
            }
        };

        match session.command(command) {
            Ok(Some(round)) => {
                presenter.present(&GameEvent::HandDealt {
                    letters: round.hand().letters(),
                    replay: command == SessionCommand::Replay,
                })?;
                results.push(run_hand_round(round, input, presenter)?);
            }
            Ok(None) => break,
            Err(e) if e.is_recoverable() => presenter.present(&GameEvent::Rejected {
                message: e.to_string(),
            })?,
            Err(e) => return Err(e.into()),
        }
    }

    presenter.present(&GameEvent::SessionEnd)?;
    Ok(results)
}
