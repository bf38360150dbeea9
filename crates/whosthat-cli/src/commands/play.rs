//! The `whosthat play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use whosthat_core::quiz::{Quiz, ROUND_SIZE};
use whosthat_core::summary::SessionSummary;
use whosthat_core::QuizError;

use crate::render;
use crate::SourceArgs;

pub async fn execute(
    args: SourceArgs,
    rounds: Option<u32>,
    seed: Option<u64>,
    summary_path: Option<PathBuf>,
) -> Result<()> {
    let (config, source) = super::resolve_source(&args)?;
    let started_at = Utc::now();

    let mut quiz = match seed.or(config.seed) {
        Some(seed) => Quiz::with_seed(seed),
        None => Quiz::new(),
    };
    quiz.init(source.as_ref()).await;

    if quiz.current().is_none() {
        anyhow::bail!(
            "could not start a round: {} creature(s) loaded from {} source, need {ROUND_SIZE}",
            quiz.creatures().len(),
            source.name()
        );
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut quiz, stdin.lock(), &mut stdout, rounds)?;

    let summary = SessionSummary::capture(&quiz, started_at);
    writeln!(
        stdout,
        "\nFinal score: {}/{} ({} round(s))",
        summary.score, summary.answers_given, summary.rounds_played
    )?;
    info!(
        session = %summary.session_id,
        score = summary.score,
        answers = summary.answers_given,
        "session finished"
    );

    if let Some(path) = summary_path {
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write summary: {}", path.display()))?;
        writeln!(stdout, "Summary written to {}", path.display())?;
    }

    Ok(())
}

/// What the player typed at the answer prompt.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Answer(String),
    Quit,
    Invalid,
}

/// Map a line to an answer: `1`..`4` select a displayed choice, `q` quits,
/// anything else is taken as a typed name.
fn parse_answer(line: &str, quiz: &Quiz) -> Input {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") {
        return Input::Quit;
    }
    if trimmed.is_empty() {
        return Input::Invalid;
    }
    match trimmed.parse::<usize>() {
        Ok(n) => match n.checked_sub(1).and_then(|i| quiz.displayed().get(i)) {
            Some(choice) => Input::Answer(choice.name.clone()),
            None => Input::Invalid,
        },
        Err(_) => Input::Answer(trimmed.to_string()),
    }
}

/// Read one line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Drive rounds until the player quits, input ends or `max_rounds` is reached.
///
/// Expects a round to already be open.
pub fn run_session<R: BufRead, W: Write>(
    quiz: &mut Quiz,
    mut input: R,
    out: &mut W,
    max_rounds: Option<u32>,
) -> Result<()> {
    if max_rounds == Some(0) {
        return Ok(());
    }

    loop {
        write!(out, "{}", render::round(quiz))?;

        loop {
            write!(out, "Your answer (1-{}, name, or q): ", quiz.displayed().len())?;
            out.flush()?;

            let Some(line) = read_line(&mut input)? else {
                return Ok(());
            };
            match parse_answer(&line, quiz) {
                Input::Quit => return Ok(()),
                Input::Invalid => {
                    writeln!(out, "Pick a number between 1 and {}.", quiz.displayed().len())?;
                }
                Input::Answer(name) => match quiz.answer(&name) {
                    Ok(_) => break,
                    Err(QuizError::AnswerLocked) => break,
                    Err(e) => return Err(e.into()),
                },
            }
        }

        write!(out, "{}", render::verdict(quiz))?;

        if max_rounds.is_some_and(|max| quiz.rounds_played() >= max) {
            return Ok(());
        }

        write!(out, "Press Enter for the next round, or q to quit: ")?;
        out.flush()?;
        match read_line(&mut input)? {
            None => return Ok(()),
            Some(line) if line.trim().eq_ignore_ascii_case("q") => return Ok(()),
            Some(_) => quiz.next_round(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use whosthat_core::model::Creature;

    fn quiz() -> Quiz {
        let mut quiz = Quiz::with_seed(21);
        quiz.load(
            ["Pikachu", "Charmander", "Bulbasaur", "Squirtle", "Jigglypuff"]
                .iter()
                .map(|n| Creature::new(*n).with_silhouette(format!("{n}-s.png")))
                .collect(),
        );
        quiz
    }

    fn play(quiz: &mut Quiz, input: &str, max_rounds: Option<u32>) -> String {
        let mut out = Vec::new();
        run_session(quiz, Cursor::new(input.to_string()), &mut out, max_rounds).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn number_selects_displayed_choice() {
        let quiz = quiz();
        let second = quiz.displayed()[1].name.clone();
        assert_eq!(parse_answer("2\n", &quiz), Input::Answer(second));
        assert_eq!(parse_answer("5", &quiz), Input::Invalid);
        assert_eq!(parse_answer("0", &quiz), Input::Invalid);
        assert_eq!(parse_answer("  ", &quiz), Input::Invalid);
        assert_eq!(parse_answer("Q", &quiz), Input::Quit);
        assert_eq!(
            parse_answer(" Mew \n", &quiz),
            Input::Answer("Mew".to_string())
        );
    }

    #[test]
    fn typed_correct_name_scores() {
        let mut quiz = quiz();
        let name = quiz.current().unwrap().name.clone();
        let out = play(&mut quiz, &format!("{name}\n"), Some(1));

        assert_eq!(quiz.score(), 1);
        assert!(out.contains(&format!("Correct! It's {name}!")));
        assert!(out.contains("Score: 1"));
    }

    #[test]
    fn wrong_name_does_not_score() {
        let mut quiz = quiz();
        let name = quiz.current().unwrap().name.clone();
        let out = play(&mut quiz, "Missingno\n", Some(1));

        assert_eq!(quiz.score(), 0);
        assert!(out.contains(&format!("Incorrect! It's actually {name}!")));
    }

    #[test]
    fn invalid_input_reprompts() {
        let mut quiz = quiz();
        let out = play(&mut quiz, "9\n1\n", Some(1));
        assert!(out.contains("Pick a number between 1 and 4."));
        assert_eq!(quiz.answers_given(), 1);
    }

    #[test]
    fn stops_after_max_rounds() {
        let mut quiz = quiz();
        play(&mut quiz, "1\n\n2\n\n3\n\n", Some(2));
        assert_eq!(quiz.rounds_played(), 2);
        assert_eq!(quiz.answers_given(), 2);
    }

    #[test]
    fn zero_round_limit_plays_nothing() {
        let mut quiz = quiz();
        let out = play(&mut quiz, "1\n", Some(0));
        assert!(out.is_empty());
        assert_eq!(quiz.answers_given(), 0);
    }

    #[test]
    fn quit_between_rounds() {
        let mut quiz = quiz();
        let out = play(&mut quiz, "1\nq\n", None);
        assert_eq!(quiz.rounds_played(), 1);
        assert!(out.contains("Press Enter for the next round"));
    }

    #[test]
    fn quit_at_answer_prompt_leaves_round_open() {
        let mut quiz = quiz();
        play(&mut quiz, "q\n", None);
        assert_eq!(quiz.answers_given(), 0);
        assert!(!quiz.answer_disabled());
    }

    #[test]
    fn end_of_input_ends_session() {
        let mut quiz = quiz();
        play(&mut quiz, "1\n\n", None);
        assert_eq!(quiz.rounds_played(), 2);
        assert_eq!(quiz.answers_given(), 1);
    }
}
