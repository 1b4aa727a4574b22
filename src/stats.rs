//! Statistical analysis of an unsigned byte data set.
//!
//! Sorting is destructive: it reorders the caller's array, and
//! [`find_median`] sorts before it looks at the middle. Aggregates over an
//! empty set are `None`.

use std::fmt;
use std::io::{self, Write};

use log::warn;
use serde::Serialize;

use crate::platform::{printing_enabled, Platform};

// =============================================================================
// Sorting
// =============================================================================

/// Bubble sort, largest value first.
pub fn sort_descending(arr: &mut [u8]) {
    let size = arr.len();
    if size < 2 {
        return;
    }

    for i in 0..size - 1 {
        for j in 0..size - 1 - i {
            if arr[j] < arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
    }
}

// =============================================================================
// Aggregates
// =============================================================================

/// Sorts `arr` and returns its middle value, or the floor average of the two
/// middle values for an even length.
pub fn find_median(arr: &mut [u8]) -> Option<u8> {
    if arr.is_empty() {
        return None;
    }

    sort_descending(arr);
    let mid = arr.len() / 2;
    if arr.len() % 2 != 0 {
        return Some(arr[mid]);
    }

    let pair = u16::from(arr[mid]) + u16::from(arr[mid - 1]);
    Some((pair / 2) as u8)
}

/// Integer average, truncated.
pub fn find_mean(arr: &[u8]) -> Option<u8> {
    if arr.is_empty() {
        return None;
    }

    let sum: u64 = arr.iter().map(|&v| u64::from(v)).sum();
    Some((sum / arr.len() as u64) as u8)
}

pub fn find_maximum(arr: &[u8]) -> Option<u8> {
    let (&first, rest) = arr.split_first()?;
    let mut max = first;
    for &value in rest {
        if value > max {
            max = value;
        }
    }
    Some(max)
}

pub fn find_minimum(arr: &[u8]) -> Option<u8> {
    let (&first, rest) = arr.split_first()?;
    let mut min = first;
    for &value in rest {
        if value < min {
            min = value;
        }
    }
    Some(min)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub median: u8,
    pub mean: u8,
    pub maximum: u8,
    pub minimum: u8,
}

impl Statistics {
    /// Computes all four aggregates. Sorts `arr` as a side effect.
    pub fn compute(arr: &mut [u8]) -> Option<Self> {
        Some(Self {
            median: find_median(arr)?,
            mean: find_mean(arr)?,
            maximum: find_maximum(arr)?,
            minimum: find_minimum(arr)?,
        })
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Median  = {:>3}", self.median)?;
        writeln!(f, "Mean    = {:>3}", self.mean)?;
        writeln!(f, "Maximum = {:>3}", self.maximum)?;
        writeln!(f, "Minimum = {:>3}", self.minimum)
    }
}

// =============================================================================
// Printing
// =============================================================================

/// Gated diagnostic writer.
///
/// Output goes to `out` only when [`printing_enabled`] holds for the
/// platform and verbosity it was built with; otherwise every call succeeds
/// without writing.
pub struct Reporter<W: Write> {
    out: W,
    enabled: bool,
}

impl Reporter<io::Stdout> {
    pub fn stdout(platform: Platform, verbose: bool) -> Self {
        Self::new(io::stdout(), platform, verbose)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, platform: Platform, verbose: bool) -> Self {
        Self {
            out,
            enabled: printing_enabled(platform, verbose),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        if self.enabled {
            writeln!(self.out, "{text}")?;
        }
        Ok(())
    }

    pub fn print_array(&mut self, arr: &[u8]) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        for value in arr {
            write!(self.out, "{value:>3} ")?;
        }
        write!(self.out, "\n\n")
    }

    /// Prints median, mean, maximum and minimum. Sorts `arr`.
    pub fn print_statistics(&mut self, arr: &mut [u8]) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        match Statistics::compute(arr) {
            Some(stats) => writeln!(self.out, "{stats}"),
            None => {
                warn!("no statistics for an empty data set");
                Ok(())
            }
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Prints `arr` to standard output on a verbose host build.
pub fn print_array(arr: &[u8]) -> io::Result<()> {
    Reporter::stdout(Platform::Host, true).print_array(arr)
}

/// Prints the statistics of `arr` to standard output on a verbose host build.
pub fn print_statistics(arr: &mut [u8]) -> io::Result<()> {
    Reporter::stdout(Platform::Host, true).print_statistics(arr)
}
