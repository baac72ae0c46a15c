use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use word_games::{
    config::{Config, GameKind, OutputFormat},
    console::{self, ConsoleInput, JsonPresenter, Presenter, TextPresenter, TurnSupplier},
    dictionary::Lexicon,
    game::{GhostEngine, HandSession},
};

fn main() -> Result<()> {
    // Initialize tracing on stderr so it never interleaves with game output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_games=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env()?;
    let game = select_game(std::env::args().nth(1).as_deref(), config.game.default_game)?;
    tracing::info!("Configuration loaded, starting {:?}", game);

    // A missing lexicon is fatal: no game starts without one
    let lexicon = Lexicon::load(&config.game.dictionary_path).with_context(|| {
        format!(
            "Cannot start without a word list; set DICTIONARY_PATH (currently {})",
            config.game.dictionary_path
        )
    })?;

    let prompts = match config.output.format {
        OutputFormat::Text => Some(io::stdout()),
        OutputFormat::Json => None,
    };
    let mut input = ConsoleInput::new(io::stdin().lock(), prompts);
    let mut presenter: Box<dyn Presenter> = match config.output.format {
        OutputFormat::Text => Box::new(TextPresenter::new(io::stdout())),
        OutputFormat::Json => Box::new(JsonPresenter::new(io::stdout())),
    };

    play(game, &config, &lexicon, &mut input, presenter.as_mut())?;
    io::stdout().flush()?;

    Ok(())
}

/// The first command-line argument picks the game, falling back to configuration
fn select_game(arg: Option<&str>, default_game: GameKind) -> Result<GameKind> {
    match arg {
        Some(arg) => arg.parse(),
        None => Ok(default_game),
    }
}

fn play(
    game: GameKind,
    config: &Config,
    lexicon: &Lexicon,
    input: &mut dyn TurnSupplier,
    presenter: &mut dyn Presenter,
) -> Result<()> {
    match game {
        GameKind::Ghost => {
            let mut engine = GhostEngine::with_min_word_len(lexicon, config.game.ghost_min_word_len);
            let result = console::run_ghost(&mut engine, input, presenter)?;
            tracing::info!("Ghost finished: {:?}", result);
        }
        GameKind::Hand => {
            let mut session = HandSession::with_deal(
                lexicon,
                rand::rng(),
                config.game.hand_size,
                config.game.vowel_fraction,
            );
            let results = console::run_hand_session(&mut session, input, presenter)?;
            tracing::info!("Hand session finished after {} rounds", results.len());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_game_prefers_argument() {
        assert_eq!(select_game(Some("ghost"), GameKind::Hand).unwrap(), GameKind::Ghost);
        assert_eq!(select_game(None, GameKind::Ghost).unwrap(), GameKind::Ghost);
        assert!(select_game(Some("poker"), GameKind::Hand).is_err());
    }
}
