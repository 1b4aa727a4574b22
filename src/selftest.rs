//! The course-1 verification suite.
//!
//! Each check drives the memory and data modules through one scenario on a
//! 32-byte scratch set and reports either success or what went wrong.

use colored::Colorize;
use log::warn;

use crate::data::{ascii_to_int, int_to_ascii, MAX_ASCII_LEN};
use crate::memory::{
    free_words, my_memcopy, my_memmove, my_memset, my_memzero, my_reverse, reserve_words,
};

const SET_SIZE: usize = 32;
const TEST_SIZE: usize = 16;

type CheckFn = fn() -> Result<(), String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub result: Result<(), String>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

pub const CHECKS: &[(&str, CheckFn)] = &[
    ("data1", check_data1),
    ("data2", check_data2),
    ("memmove1", check_memmove1),
    ("memmove2", check_memmove2),
    ("memmove3", check_memmove3),
    ("memcopy", check_memcopy),
    ("memset", check_memset),
    ("reverse", check_reverse),
    ("words", check_words),
];

pub fn run_all() -> Vec<CheckOutcome> {
    CHECKS
        .iter()
        .map(|&(name, check)| {
            let result = check();
            if let Err(reason) = &result {
                warn!("check {name} failed: {reason}");
            }
            CheckOutcome { name, result }
        })
        .collect()
}

pub fn all_passed(outcomes: &[CheckOutcome]) -> bool {
    outcomes.iter().all(CheckOutcome::passed)
}

// =============================================================================
// Checks
// =============================================================================

fn ascii_round_trip(value: i32, base: u32, expected: &[u8]) -> Result<(), String> {
    let mut buf = [0u8; MAX_ASCII_LEN];
    let length = int_to_ascii(value, &mut buf, base).map_err(|e| e.to_string())?;
    if &buf[..length] != expected {
        return Err(format!(
            "expected {:?}, got {:?}",
            String::from_utf8_lossy(expected),
            String::from_utf8_lossy(&buf[..length])
        ));
    }

    let parsed = ascii_to_int(&buf, length, base).map_err(|e| e.to_string())?;
    if parsed != value {
        return Err(format!("parsed back {parsed}, expected {value}"));
    }
    Ok(())
}

fn check_data1() -> Result<(), String> {
    ascii_round_trip(-4096, 16, b"-1000\0")
}

fn check_data2() -> Result<(), String> {
    ascii_round_trip(123456, 10, b"123456\0")
}

fn counting_set() -> [u8; SET_SIZE] {
    let mut set = [0u8; SET_SIZE];
    for (i, slot) in set.iter_mut().enumerate() {
        *slot = i as u8;
    }
    set
}

fn expect_run(actual: &[u8], first: u8) -> Result<(), String> {
    for (i, &value) in actual.iter().enumerate() {
        let expected = first + i as u8;
        if value != expected {
            return Err(format!("byte {i} is {value}, expected {expected}"));
        }
    }
    Ok(())
}

fn check_memmove1() -> Result<(), String> {
    let mut set = counting_set();
    let moved = my_memmove(&mut set, 0, 16, TEST_SIZE).map_err(|e| e.to_string())?;
    expect_run(moved, 0)
}

fn check_memmove2() -> Result<(), String> {
    let mut set = counting_set();
    let moved = my_memmove(&mut set, 0, 8, TEST_SIZE).map_err(|e| e.to_string())?;
    expect_run(moved, 0)
}

fn check_memmove3() -> Result<(), String> {
    let mut set = counting_set();
    let moved = my_memmove(&mut set, 8, 0, TEST_SIZE).map_err(|e| e.to_string())?;
    expect_run(moved, 8)
}

fn check_memcopy() -> Result<(), String> {
    let mut set = counting_set();
    let (src, dst) = set.split_at_mut(16);
    let copied = my_memcopy(src, dst, TEST_SIZE).map_err(|e| e.to_string())?;
    expect_run(copied, 0)
}

fn check_memset() -> Result<(), String> {
    let mut set = counting_set();
    my_memset(&mut set, TEST_SIZE, 0xFF).map_err(|e| e.to_string())?;
    my_memzero(&mut set[16..], TEST_SIZE).map_err(|e| e.to_string())?;

    if let Some(i) = set[..16].iter().position(|&b| b != 0xFF) {
        return Err(format!("byte {i} was not set"));
    }
    if let Some(i) = set[16..].iter().position(|&b| b != 0) {
        return Err(format!("byte {} was not zeroed", i + 16));
    }
    Ok(())
}

fn check_reverse() -> Result<(), String> {
    const TEXT: &[u8; SET_SIZE] = b"?reversed when the check passes!";
    let mut set = *TEXT;
    my_reverse(&mut set, SET_SIZE).map_err(|e| e.to_string())?;

    let expected: Vec<u8> = TEXT.iter().rev().copied().collect();
    if set[..] != expected[..] {
        return Err(format!("got {:?}", String::from_utf8_lossy(&set)));
    }
    Ok(())
}

fn check_words() -> Result<(), String> {
    let mut block = reserve_words(TEST_SIZE).map_err(|e| e.to_string())?;
    for (i, word) in block.iter_mut().enumerate() {
        *word = -(i as i32) * 1000;
    }
    let sum: i32 = block.iter().sum();
    free_words(Some(block));

    let expected = -(0..TEST_SIZE as i32).sum::<i32>() * 1000;
    if sum != expected {
        return Err(format!("word sum {sum}, expected {expected}"));
    }
    Ok(())
}

// =============================================================================
// Report
// =============================================================================

pub fn format_summary(outcomes: &[CheckOutcome]) -> String {
    let passed = outcomes.iter().filter(|o| o.passed()).count();
    let failed = outcomes.len() - passed;
    format!("{passed} passed, {failed} failed")
}

pub fn format_report(outcomes: &[CheckOutcome], colors: bool) -> String {
    let mut output = String::new();
    for outcome in outcomes {
        let line = match &outcome.result {
            Ok(()) => format!("  PASS  {}", outcome.name),
            Err(reason) => format!("  FAIL  {}: {reason}", outcome.name),
        };
        let line = match (colors, outcome.passed()) {
            (false, _) => line,
            (true, true) => line.green().to_string(),
            (true, false) => line.red().to_string(),
        };
        output.push_str(&line);
        output.push('\n');
    }

    let summary = format_summary(outcomes);
    if colors {
        output.push_str(&summary.bold().to_string());
    } else {
        output.push_str(&summary);
    }
    output.push('\n');
    output
}
