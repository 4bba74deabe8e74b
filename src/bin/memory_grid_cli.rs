// src/bin/memory_grid_cli.rs
//
// Консольный прогон игры:
//     memory_grid_cli <words.json> [config.json]
// Ввод: номер карточки (0..N-1), `again` – новый раунд, `quit` – выход.
// Логи: RUST_LOG=memory_grid_engine=debug

use std::io::{self, BufRead};
use std::process::ExitCode;
use std::time::Duration;

use memory_grid_engine::api::{
    build_board_view, execute, BoardViewDto, CardBackDto, Command, CommandResponse,
};
use memory_grid_engine::domain::{load_pool, GameConfig, SlotIndex};
use memory_grid_engine::engine::{Outcome, RandomSource};
use memory_grid_engine::infra::{DeterministicRng, SystemRng};
use memory_grid_engine::playback::{run_playback, AudioError, PlaybackSink, PlaybackToken};
use memory_grid_engine::GameSession;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// «Проигрывает» звуки текстом в консоль.
struct ConsoleSink;

impl PlaybackSink for ConsoleSink {
    fn play(&mut self, uri: &str) -> Result<(), AudioError> {
        println!("  ♪ {uri}");
        Ok(())
    }

    fn shake(&mut self, slot: SlotIndex, duration: Duration) {
        println!("  ~ карточка {slot} трясётся {} мс", duration.as_millis());
    }

    fn mark_completion(&mut self, slot: SlotIndex) {
        println!("  ⭐ звезда на карточке {slot}");
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = std::env::args().collect();
    let Some(words_path) = args.get(1) else {
        eprintln!("usage: memory_grid_cli <words.json> [config.json]");
        return ExitCode::from(2);
    };

    let config = match args.get(2) {
        Some(path) => match GameConfig::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                error!(error = %err, "конфиг не загружен");
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    let pool = match load_pool(words_path) {
        Ok(pool) => pool,
        Err(err) => {
            error!(error = %err, "Error Loading Game");
            return ExitCode::FAILURE;
        }
    };

    let seed = config.seed;
    let result = match seed {
        Some(seed) => {
            info!(seed, "детерминированная сессия");
            GameSession::start(config, pool, DeterministicRng::from_u64(seed)).map(run)
        }
        None => GameSession::start(config, pool, SystemRng).map(run),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "игру начать нельзя");
            ExitCode::FAILURE
        }
    }
}

fn run<R: RandomSource>(mut session: GameSession<R>) {
    let mut sink = ConsoleSink;
    print_board(&build_board_view(session.engine(), session.round_index()));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let input = line.trim();

        let command = match input {
            "quit" | "q" => break,
            "again" => Command::PlayAgain,
            other => match other.parse::<SlotIndex>() {
                Ok(slot) => Command::SelectSlot { slot },
                Err(_) => {
                    println!("Введите номер карточки, `again` или `quit`.");
                    continue;
                }
            },
        };

        match execute(&mut session, command) {
            Ok(CommandResponse::Resolved {
                outcome,
                playback,
                token,
            }) => {
                match &outcome {
                    Outcome::Accepted(reveal) => println!("Correct! 🎉 {}", reveal.word),
                    Outcome::Rejected { .. } => println!("Try again! 🤔"),
                    Outcome::Ignored { .. } => {}
                }
                run_playback(&playback, &mut sink, || {
                    if let Some(token) = token {
                        finish_playback(&mut session, token);
                    }
                });
            }
            Ok(CommandResponse::Dropped { slot }) => println!("(клик {slot} выброшен)"),
            Ok(_) => {}
            Err(err) => println!("Ошибка: {err:?}"),
        }

        print_board(&build_board_view(session.engine(), session.round_index()));
    }
}

/// Вернуть квитанцию замка. Если ввод не открылся, в консоли он бы завис молча.
fn finish_playback<R: RandomSource>(session: &mut GameSession<R>, token: PlaybackToken) {
    match execute(session, Command::FinishPlayback { token }) {
        Ok(CommandResponse::PlaybackFinished { released: true }) => {}
        Ok(CommandResponse::PlaybackFinished { released: false }) => {
            warn!(?token, "квитанция не принята, ввод может остаться закрытым");
        }
        Ok(other) => warn!(?other, "неожиданный ответ на FinishPlayback"),
        Err(err) => warn!(error = ?err, "FinishPlayback не выполнен"),
    }
}

fn print_board(board: &BoardViewDto) {
    let side = (board.round_size as f64).sqrt().ceil().max(1.0) as usize;

    println!();
    for row in board.cards.chunks(side) {
        let cells: Vec<String> = row
            .iter()
            .map(|card| match &card.back {
                CardBackDto::Hidden => format!("[{:>2}]", card.slot),
                CardBackDto::Word(word) => format!(" {word} "),
                CardBackDto::CompletionStar => " ⭐ ".to_string(),
            })
            .collect();
        println!("{}", cells.join(" "));
    }

    match &board.current_word {
        Some(word) => println!("Найди: {word}   ({}/{})", board.progress, board.round_size),
        None => println!("🎉 Game Complete! 🎉   (again – сыграть ещё раз)"),
    }
}
