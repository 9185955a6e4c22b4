//! Display functions for the line-oriented commands

use super::formatters::{feedback_row, plain_row};
use crate::core::{Feedback, MAX_GUESSES, Mode, Word};
use crate::game::EndNotice;
use crate::session::{GameSession, Outcome};
use colored::Colorize;

/// Banner printed when a session starts
pub fn print_session_start(session: &GameSession) {
    let mode = session.mode();
    println!("\n{}", "─".repeat(50).cyan());
    println!(
        "Yeni kelime: {} harf, {} deneme ({})",
        session.word_length().to_string().bright_yellow().bold(),
        MAX_GUESSES,
        mode_label(mode)
    );
    if let Some(fixed) = session.fixed_slot() {
        println!(
            "İpucu: {}. harf {}",
            fixed.index + 1,
            super::formatters::upper_tr(fixed.letter).bright_cyan().bold()
        );
    }
    println!("{}", "─".repeat(50).cyan());
}

/// Every scored row of the session, oldest first
pub fn print_board(session: &GameSession) {
    for (i, row) in session.rows().iter().enumerate() {
        let (Some(feedback), Some(word)) = (row.feedback(), row.word()) else {
            continue;
        };
        println!(
            "  {}. {}  {}",
            (i + 1).to_string().bright_black(),
            feedback_row(&word, feedback),
            feedback.to_emoji()
        );
    }
}

/// Letters ruled out so far
pub fn print_disabled_keys(session: &GameSession) {
    let letters = session.keyboard().disabled_letters();
    if letters.is_empty() {
        return;
    }
    let text: String = letters.iter().map(|&c| format!("{c} ")).collect();
    println!("  Olmayan harfler: {}", text.trim_end().bright_black());
}

/// Headline and target of a finished session
pub fn print_outcome(session: &GameSession) {
    let Some(outcome) = session.outcome() else {
        return;
    };
    let headline = match outcome {
        Outcome::Won => outcome.headline().green().bold(),
        Outcome::Exhausted => outcome.headline().red().bold(),
    };
    println!("\n{headline}");
    println!(
        "Kelime: \"{}\"",
        session.target().original().bright_yellow().bold()
    );
}

/// Meaning line of the end notice, printed once the lookup settles
pub fn print_meaning(notice: &EndNotice) {
    println!("Anlamı: {}", notice.meaning_text());
    println!(
        "{}",
        "Yeni kelime için 'new', mod değiştirmek için 'mode <classic|hard7|easy>' yazın."
            .bright_black()
    );
}

/// Result of the `evaluate` command
pub fn print_evaluation(target: &Word, guess: &Word, feedback: &Feedback) {
    println!("Hedef:  {}", plain_row(target).bright_black());
    println!("Tahmin: {}", feedback_row(guess, feedback));
    println!("        {}", feedback.to_emoji());
    if feedback.is_perfect() {
        println!("{}", "Tebrikler!".green().bold());
    }
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Classic => "klasik",
        Mode::Hard7 => "zor",
        Mode::Easy => "kolay, bir harf açık",
    }
}
