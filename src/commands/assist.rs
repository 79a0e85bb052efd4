//! Interactive assist mode
//!
//! Suggests guesses for a game played elsewhere and reads back the feedback
//! line by line.

use crate::core::Pattern;
use crate::error::Result;
use crate::output::formatters::colored_guess;
use crate::solver::scoring::EntropyScorer;
use crate::solver::{Phase, Solver};
use std::io::{BufRead, Write};

/// Play one assisted game over the given input and output
///
/// Each line of input is a pattern (`gyr`, `G/Y/-` or emoji tiles), `win`
/// for all hits, or `quit`. Feedback the session rejects is reported and
/// asked for again. Returns the phase the game ended in, or `None` if the
/// user quit or the input ran out.
///
/// # Errors
///
/// Returns an error on I/O failures or if a scorer fails.
pub fn run_assist<R: BufRead, W: Write>(
    solver: &Solver<'_>,
    mut input: R,
    mut out: W,
) -> Result<Option<Phase>> {
    writeln!(out, "After each guess, enter the feedback pattern:")?;
    writeln!(out, "  g = right letter, right spot   y = right letter, wrong spot   r/- = miss")?;
    writeln!(out, "  or type 'win' if it was right, 'quit' to stop\n")?;

    let measure = EntropyScorer::new();
    let mut session = solver.session();

    while let Some(guess) = session.next_guess()? {
        let turn = session.steps().len() + 1;
        let candidates = session.candidates();

        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(out, "Turn {turn}: {} candidates remaining", candidates.len())?;
        writeln!(out, "Suggested guess: {}", guess.text().to_uppercase())?;
        if candidates.len() > 1 {
            let metrics = measure.metrics(guess, candidates)?;
            writeln!(
                out,
                "   Entropy {:.3} bits, expect {:.1} left, worst case {}",
                metrics.entropy, metrics.expected_remaining, metrics.max_partition
            )?;
        }
        if candidates.len() <= 10 {
            let listed: Vec<String> = candidates.iter().map(|w| w.text().to_uppercase()).collect();
            writeln!(out, "   Candidates: {}", listed.join(", "))?;
        }

        loop {
            write!(out, "Feedback: ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim().to_lowercase();

            let pattern = match line.as_str() {
                "quit" | "q" | "exit" => return Ok(None),
                "win" | "solved" => Pattern::perfect(guess.len()),
                text => match Pattern::from_str(text) {
                    Some(pattern) => pattern,
                    None => {
                        writeln!(out, "Invalid pattern, use g/y/r for each letter")?;
                        continue;
                    }
                },
            };

            match session.record_feedback(pattern) {
                Ok(_) => {
                    writeln!(out, "{}", colored_guess(guess.text(), pattern))?;
                    break;
                }
                Err(e) => writeln!(out, "Rejected: {e}")?,
            }
        }
    }

    let phase = session.phase();
    match phase {
        Phase::Solved { steps } => writeln!(out, "\nSolved in {steps} guesses!")?,
        Phase::Exhausted { steps } => writeln!(out, "\nOut of guesses after {steps}.")?,
        Phase::NoCandidates { .. } => {
            writeln!(out, "\nNo dictionary word fits that feedback.")?;
        }
        _ => {}
    }
    Ok(Some(phase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, compare};
    use crate::solver::SolverConfig;
    use crate::wordlists::Dictionary;

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(&["hoard", "wharf", "think", "arose", "solar", "polar"]).unwrap()
    }

    #[test]
    fn win_on_first_guess() {
        let dictionary = dictionary();
        let config = SolverConfig::default().with_opening(Word::new("think").unwrap());
        let solver = Solver::new(&dictionary, config).unwrap();

        let mut out = Vec::new();
        let phase = run_assist(&solver, "win\n".as_bytes(), &mut out).unwrap();

        assert_eq!(phase, Some(Phase::Solved { steps: 1 }));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Suggested guess: THINK"));
    }

    #[test]
    fn invalid_lines_are_asked_again() {
        let dictionary = dictionary();
        let config = SolverConfig::default().with_opening(Word::new("think").unwrap());
        let solver = Solver::new(&dictionary, config).unwrap();

        // bad characters, then a wrong length, then the real answer
        let mut out = Vec::new();
        let phase = run_assist(&solver, "xyz\nggg\nggggg\n".as_bytes(), &mut out).unwrap();

        assert_eq!(phase, Some(Phase::Solved { steps: 1 }));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid pattern"));
        assert!(text.contains("Rejected"));
    }

    #[test]
    fn feedback_drives_game_to_solution() {
        let dictionary = dictionary();
        let config = SolverConfig::default().with_opening(Word::new("think").unwrap());
        let solver = Solver::new(&dictionary, config).unwrap();
        let secret = Word::new("polar").unwrap();

        // Answer each suggestion honestly by replaying the same game
        let mut session = solver.session();
        let mut script = String::new();
        while let Some(guess) = session.next_guess().unwrap() {
            let pattern = compare(&secret, guess).unwrap();
            script.push_str(&format!("{pattern}\n"));
            session.record_feedback(pattern).unwrap();
        }

        let mut out = Vec::new();
        let phase = run_assist(&solver, script.as_bytes(), &mut out).unwrap();
        assert!(matches!(phase, Some(Phase::Solved { .. })));
    }

    #[test]
    fn quit_and_end_of_input_stop_early() {
        let dictionary = dictionary();
        let solver = Solver::new(&dictionary, SolverConfig::default()).unwrap();

        assert_eq!(run_assist(&solver, "quit\n".as_bytes(), Vec::new()).unwrap(), None);
        assert_eq!(run_assist(&solver, "".as_bytes(), Vec::new()).unwrap(), None);
    }
}
