//! Simple line-oriented game
//!
//! Text-based game without the TUI: one guess per line on stdin.

use crate::core::{Mode, normalize_char};
use crate::game::{Game, MeaningReply, MeaningRequest};
use crate::input::{Command, InputRouter};
use crate::output::formatters::upper_tr;
use crate::output::{
    print_board, print_disabled_keys, print_meaning, print_outcome, print_session_start,
};
use crate::session::{Rejection, SessionError, Submission};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

/// What one input line did
#[derive(Debug)]
pub enum Step {
    Quit,
    /// A new session is ready
    Started,
    SetupFailed(SessionError),
    /// The line was played as a guess
    ///
    /// `meaning` is the lookup still owed when the guess ended the session.
    Played {
        submission: Submission,
        meaning: Option<MeaningRequest>,
    },
    /// The line could not be understood
    Unknown(String),
    Empty,
}

/// Handle one line of input
///
/// `quit`, `new` and `mode <m>` are commands; anything else is a guess that
/// replaces whatever the current row holds.
pub async fn handle_line(game: &mut Game, router: &InputRouter, line: &str) -> Step {
    let line = line.trim();
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next()) {
        (None, _) => Step::Empty,
        (Some("quit" | "exit"), None) => Step::Quit,
        (Some("new"), None) => setup_step(game.restart().await),
        (Some("mode"), Some(name)) => match name.parse::<Mode>() {
            Ok(mode) => setup_step(game.select_mode(mode).await),
            Err(e) => Step::Unknown(e),
        },
        (Some("mode"), None) => {
            Step::Unknown("Mod adı eksik: mode <classic|hard7|easy>".to_string())
        }
        (Some(_), Some(_)) => Step::Unknown(format!("Anlaşılamadı: {line}")),
        (Some(word), None) => {
            let Some(session) = game.session() else {
                return Step::Unknown("Oyun başlamadı; 'new' yazın.".to_string());
            };
            let length = session.word_length();
            let mut commands = router.route_text(word);
            // a full-length guess also spells the revealed letter, which the row already holds
            if let Some(fixed) = session.fixed_slot()
                && commands.len() == length
            {
                match commands[fixed.index] {
                    Command::TypeLetter(c) if normalize_char(c) == normalize_char(fixed.letter) => {
                        commands.remove(fixed.index);
                    }
                    _ => {
                        return Step::Unknown(format!(
                            "{}. harf ipucundaki {} olmalı.",
                            fixed.index + 1,
                            upper_tr(fixed.letter)
                        ));
                    }
                }
            }

            for _ in 0..length {
                game.apply(Command::Delete);
            }
            for command in commands {
                game.apply(command);
            }
            let submission = game.apply(Command::Submit);
            let meaning = match submission {
                Submission::Scored {
                    outcome: Some(_), ..
                } => game.meaning_request(),
                _ => None,
            };
            Step::Played {
                submission,
                meaning,
            }
        }
    }
}

fn setup_step(result: Result<(), SessionError>) -> Step {
    match result {
        Ok(()) => Step::Started,
        Err(e) => Step::SetupFailed(e),
    }
}

/// Run the line-oriented game until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub async fn run_simple(mut game: Game, router: InputRouter) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║                  K E L İ M E                     ║");
    println!("╚══════════════════════════════════════════════════╝\n");
    println!("Her satıra bir tahmin yazın. Kutular:");
    println!("  🟩 doğru yerde, 🟨 kelimede var, ⬜ kelimede yok");
    println!("Komutlar: 'new' yeni kelime, 'mode <classic|hard7|easy>', 'quit' çıkış\n");

    let mode = game.mode();
    let step = with_spinner(game.select_mode(mode)).await;
    report(&game, setup_step(step));

    let (meaning_tx, mut meaning_rx) = mpsc::unbounded_channel::<MeaningReply>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt(&game)?;
        let line = tokio::select! {
            line = lines.next_line() => line?,
            Some(reply) = meaning_rx.recv() => {
                show_meaning(&mut game, reply);
                continue;
            }
        };
        let Some(line) = line else {
            // end of input: let pending lookups finish
            drop(meaning_tx);
            while let Some(reply) = meaning_rx.recv().await {
                show_meaning(&mut game, reply);
            }
            break;
        };
        debug!(line = %line, "input");

        let step = if is_setup_line(&line) {
            with_spinner(handle_line(&mut game, &router, &line)).await
        } else {
            handle_line(&mut game, &router, &line).await
        };
        if matches!(step, Step::Quit) {
            break;
        }
        if let Step::Played {
            meaning: Some(request),
            ..
        } = &step
        {
            let request = request.clone();
            let tx = meaning_tx.clone();
            tokio::spawn(async move {
                let _ = tx.send(request.resolve().await);
            });
        }
        report(&game, step);
    }

    println!("\nGörüşmek üzere!\n");
    Ok(())
}

/// Print the meaning once its lookup settles; stale replies print nothing
fn show_meaning(game: &mut Game, reply: MeaningReply) {
    if let Some(notice) = game.conclude(reply) {
        println!();
        print_meaning(&notice);
    }
}

fn is_setup_line(line: &str) -> bool {
    let first = line.split_whitespace().next();
    matches!(first, Some("new" | "mode"))
}

fn prompt(game: &Game) -> io::Result<()> {
    match game.session() {
        Some(session) if !session.is_over() => {
            print!("{}. tahmin: ", session.guesses_used() + 1);
        }
        _ => print!("> "),
    }
    io::stdout().flush()
}

fn report(game: &Game, step: Step) {
    match step {
        Step::Quit | Step::Empty => {}
        Step::Started => {
            if let Some(session) = game.session() {
                print_session_start(session);
            }
        }
        Step::SetupFailed(e) => {
            println!("{}", e.to_string().red().bold());
            println!("Tekrar denemek için 'new' yazın.");
        }
        Step::Unknown(message) => println!("{}", message.yellow()),
        Step::Played {
            submission,
            meaning,
        } => {
            match submission {
                Submission::Ignored => {
                    println!("{}", "Oyun bitti; 'new' ile yeni kelime isteyin.".yellow());
                    return;
                }
                Submission::Rejected(rejection) => {
                    print_rejection(rejection);
                    return;
                }
                Submission::Scored { .. } => {}
            }
            if let Some(session) = game.session() {
                print_board(session);
                print_disabled_keys(session);
                if meaning.is_some() {
                    print_outcome(session);
                    println!("{}", "Anlamı aranıyor...".bright_black());
                }
            }
        }
    }
}

fn print_rejection(rejection: Rejection) {
    println!("{}", rejection.to_string().red());
}

/// Show a spinner while a word list is fetched
async fn with_spinner<F: Future>(future: F) -> F::Output {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Kelime listesi alınıyor...");
    pb.enable_steady_tick(Duration::from_millis(100));
    let output = future.await;
    pb.finish_and_clear();
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::session::{Event, Outcome};
    use crate::wordsource::{StaticWordSource, WordSource};
    use async_trait::async_trait;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;

    async fn started_game() -> (Game, InputRouter) {
        let source = StaticWordSource::new(
            ["kalem", "limon", "kitap", "bardak", "masa"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        )
        .with_meaning("kalem", "Yazı yazmaya yarayan araç");
        let mut game = Game::with_rng(
            GameConfig::default(),
            Arc::new(source),
            StdRng::seed_from_u64(11),
        );
        game.select_mode(Mode::Classic).await.unwrap();
        (game, InputRouter::default())
    }

    /// Words come at once, meanings never
    struct SlowMeanings(StaticWordSource);

    #[async_trait]
    impl WordSource for SlowMeanings {
        async fn fetch_words(&self, length: usize) -> Vec<String> {
            self.0.fetch_words(length).await
        }

        async fn fetch_meaning(&self, _word: &str) -> Option<String> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            None
        }
    }

    async fn easy_game() -> (Game, InputRouter) {
        let (mut game, router) = started_game().await;
        game.select_mode(Mode::Easy).await.unwrap();
        (game, router)
    }

    fn target(game: &Game) -> String {
        game.session().unwrap().target().text().to_string()
    }

    #[tokio::test]
    async fn commands() {
        let (mut game, router) = started_game().await;
        assert!(matches!(handle_line(&mut game, &router, "  ").await, Step::Empty));
        assert!(matches!(handle_line(&mut game, &router, "quit").await, Step::Quit));
        assert!(matches!(handle_line(&mut game, &router, "new").await, Step::Started));
        assert!(matches!(
            handle_line(&mut game, &router, "mode nope").await,
            Step::Unknown(_)
        ));
        assert!(matches!(
            handle_line(&mut game, &router, "iki kelime").await,
            Step::Unknown(_)
        ));
    }

    #[tokio::test]
    async fn mode_switch_refetches() {
        let (mut game, router) = started_game().await;
        assert!(matches!(
            handle_line(&mut game, &router, "mode hard7").await,
            Step::SetupFailed(SessionError::WordListUnavailable { .. })
        ));
        assert!(matches!(
            handle_line(&mut game, &router, "mode easy").await,
            Step::Started
        ));
        let session = game.session().unwrap();
        assert_eq!(session.word_length(), 5);
        assert!(session.fixed_slot().is_some());

        // the full word is accepted even though one letter is already shown
        let word = target(&game);
        assert!(matches!(
            handle_line(&mut game, &router, &word).await,
            Step::Played {
                submission: Submission::Scored {
                    outcome: Some(Outcome::Won),
                    ..
                },
                ..
            }
        ));
    }

    #[tokio::test]
    async fn short_guess_rejected_then_replaced() {
        let (mut game, router) = started_game().await;
        let step = handle_line(&mut game, &router, "kal").await;
        assert!(matches!(
            step,
            Step::Played {
                submission: Submission::Rejected(Rejection::IncompleteGuess { length: 5 }),
                ..
            }
        ));

        // the next line starts from an empty row
        let word = target(&game);
        let step = handle_line(&mut game, &router, &word).await;
        match step {
            Step::Played {
                submission: Submission::Scored { outcome, .. },
                meaning,
            } => {
                assert_eq!(outcome, Some(Outcome::Won));
                let notice = game.conclude(meaning.unwrap().resolve().await).unwrap();
                assert_eq!(notice.word, word);
            }
            other => panic!("unexpected step: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_word_rejected() {
        let (mut game, router) = started_game().await;
        let step = handle_line(&mut game, &router, "zzzzz").await;
        assert!(matches!(
            step,
            Step::Played {
                submission: Submission::Rejected(Rejection::InvalidWord),
                meaning: None
            }
        ));
        assert_eq!(game.session().unwrap().guesses_used(), 0);
    }

    #[tokio::test]
    async fn uppercase_turkish_input_is_folded() {
        let (mut game, router) = started_game().await;
        let word = target(&game);
        let shouted: String = word
            .chars()
            .map(|c| match c {
                'i' => 'İ',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        let step = handle_line(&mut game, &router, &shouted).await;
        assert!(matches!(
            step,
            Step::Played {
                submission: Submission::Scored {
                    outcome: Some(Outcome::Won),
                    ..
                },
                ..
            }
        ));
    }

    #[test]
    fn setup_lines() {
        assert!(is_setup_line("new"));
        assert!(is_setup_line("mode easy"));
        assert!(!is_setup_line("kalem"));
    }

    #[tokio::test]
    async fn easy_guess_must_agree_with_hint() {
        let (mut game, router) = easy_game().await;
        let fixed = game.session().unwrap().fixed_slot().unwrap();
        let wrong: String = target(&game)
            .chars()
            .enumerate()
            .map(|(i, c)| match i {
                i if i == fixed.index && c == 'z' => 'y',
                i if i == fixed.index => 'z',
                _ => c,
            })
            .collect();
        let step = handle_line(&mut game, &router, &wrong).await;
        assert!(matches!(step, Step::Unknown(message) if message.contains("ipucu")));
        let session = game.session().unwrap();
        assert_eq!(session.guesses_used(), 0);
        assert_eq!(session.current_row().slots()[fixed.index], Some(fixed.letter));
    }

    #[tokio::test]
    async fn easy_guess_may_skip_hint() {
        let (mut game, router) = easy_game().await;
        let fixed = game.session().unwrap().fixed_slot().unwrap();
        let rest: String = target(&game)
            .chars()
            .enumerate()
            .filter(|&(i, _)| i != fixed.index)
            .map(|(_, c)| c)
            .collect();
        assert!(matches!(
            handle_line(&mut game, &router, &rest).await,
            Step::Played {
                submission: Submission::Scored {
                    outcome: Some(Outcome::Won),
                    ..
                },
                meaning: Some(_)
            }
        ));
    }

    #[tokio::test]
    async fn winning_line_does_not_wait_for_meaning() {
        let source = SlowMeanings(StaticWordSource::new(vec!["kalem".to_string()]));
        let mut game = Game::new(GameConfig::default(), Arc::new(source));
        game.select_mode(Mode::Classic).await.unwrap();
        let router = InputRouter::default();

        let step = tokio::time::timeout(
            Duration::from_secs(1),
            handle_line(&mut game, &router, "kalem"),
        )
        .await
        .expect("guess blocked on the meaning lookup");
        let Step::Played {
            meaning: Some(request),
            ..
        } = step
        else {
            panic!("unexpected step: {step:?}");
        };
        assert_eq!(request.word(), "kalem");
        assert!(game.session().unwrap().is_over());
        assert!(
            !game
                .drain_events()
                .iter()
                .any(|e| matches!(e, Event::GameEnded { .. }))
        );
    }
}
