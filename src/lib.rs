use anyhow::{Result, bail};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Inclusive lower bound of the secret range.
pub const RANGE_MIN: i32 = 0;
/// Exclusive upper bound of the secret range.
pub const RANGE_MAX: i32 = 100;

/// Verdict for a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    TooLow,
    TooHigh,
    Correct,
}

/// Compare a guess against the secret.
pub fn check_guess(guess: i32, secret: i32) -> Hint {
    if guess == secret {
        Hint::Correct
    } else if guess < secret {
        Hint::TooLow
    } else {
        Hint::TooHigh
    }
}

/// State for one run: the secret and how many guesses were counted so far.
#[derive(Debug)]
pub struct Game {
    secret: i32,
    attempts: u32,
}

impl Game {
    /// Draw a fresh secret from [RANGE_MIN, RANGE_MAX).
    pub fn new() -> Self {
        Self::with_secret(rand::random_range(RANGE_MIN..RANGE_MAX))
    }

    /// Start with a known secret (used by tests).
    pub fn with_secret(secret: i32) -> Self {
        Self {
            secret,
            attempts: 0,
        }
    }

    /// Count one guess and judge it.
    pub fn guess(&mut self, guess: i32) -> Hint {
        self.attempts += 1;
        check_guess(guess, self.secret)
    }

    /// Guesses counted so far, including a correct one.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// Run the prompt/read/compare loop until the secret is guessed.
/// Returns the number of counted guesses.
///
/// Each iteration consumes one whitespace-delimited token, so a single line
/// may carry several guesses. A token that does not parse as an integer is
/// answered with a short complaint and re-prompted without counting it. EOF
/// before a correct guess is an error, since the loop has no other way to
/// finish.
pub fn play<R: BufRead, W: Write>(game: &mut Game, input: &mut R, output: &mut W) -> Result<u32> {
    let mut pending: VecDeque<String> = VecDeque::new();
    let mut line = String::new();
    loop {
        // No trailing newline on the prompt, so flush before blocking on read
        write!(output, "Enter a number between 0 and 100:")?;
        output.flush()?;

        // Take the next buffered token, reading more lines as needed.
        // Blank lines contribute no tokens and are skipped silently.
        let token = loop {
            if let Some(tok) = pending.pop_front() {
                break tok;
            }
            line.clear();
            if input.read_line(&mut line)? == 0 {
                bail!("input closed before the number was guessed");
            }
            pending.extend(line.split_whitespace().map(str::to_owned));
        };

        let guess: i32 = match token.parse() {
            Ok(n) => n,
            Err(_) => {
                writeln!(output, "Please enter a whole number.")?;
                continue;
            }
        };

        match game.guess(guess) {
            Hint::Correct => {
                writeln!(output, "You guessed it in {} tries!", game.attempts())?;
                return Ok(game.attempts());
            }
            Hint::TooLow => writeln!(output, "Too low!")?,
            Hint::TooHigh => writeln!(output, "Too high!")?,
        }
    }
}
