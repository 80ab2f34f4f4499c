use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Timelike, Utc};
use regex::Regex;
use spanner_ids::{clock::Clock, letters::LetterSource};

pub const DATABASE_ID_PATTERN: &str = r"^[a-z]([a-z0-9_]*[a-z])?$";
pub const INSTANCE_SUFFIX_PATTERN: &str = r"-\d{8}-\d{6}-\d{6}$";

pub fn matches(pattern: &str, value: &str) -> bool {
    Regex::new(pattern).unwrap().is_match(value)
}

pub fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, micros: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .unwrap()
        .with_nanosecond(micros * 1_000)
        .unwrap()
}

/// Returns the queued instants in order, repeating the last one.
pub struct SteppingClock {
    instants: Mutex<Vec<DateTime<Utc>>>,
}

impl SteppingClock {
    pub fn new(mut instants: Vec<DateTime<Utc>>) -> Self {
        instants.reverse();
        Self {
            instants: Mutex::new(instants),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut instants = self.instants.lock().unwrap();
        if instants.len() > 1 {
            instants.pop().unwrap()
        } else {
            instants[0]
        }
    }
}

/// Cycles through the given letters.
pub struct CyclingLetters {
    letters: Vec<char>,
    next: Mutex<usize>,
}

impl CyclingLetters {
    pub fn new(letters: &str) -> Self {
        Self {
            letters: letters.chars().collect(),
            next: Mutex::new(0),
        }
    }
}

impl LetterSource for CyclingLetters {
    fn letter(&self) -> char {
        let mut next = self.next.lock().unwrap();
        let letter = self.letters[*next % self.letters.len()];
        *next += 1;
        letter
    }
}
