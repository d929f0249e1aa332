//! Human-friendly ("natural") ordering of drone names.
//!
//! Names are split into runs of ASCII digits and runs of everything else.
//! Digit runs compare by numeric value, so `drone2 < drone10`; other runs
//! compare by code point. Runs of digits sort before runs of text at the same
//! position. When all runs compare equal (e.g. `d01` vs `d1`) the plain string
//! order decides, keeping the ordering total.

use std::cmp::Ordering;

/// Compare two strings in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ra = Runs { rest: a };
    let mut rb = Runs { rest: b };
    loop {
        match (ra.next(), rb.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = cmp_runs(x, y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Sort names in place using [`natural_cmp`].
pub fn natural_sort<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}

#[derive(Clone, Copy, Debug)]
enum Run<'a> {
    Digits(&'a str),
    Text(&'a str),
}

struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Run<'a>> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(self.rest.len());
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        Some(if digits {
            Run::Digits(head)
        } else {
            Run::Text(head)
        })
    }
}

fn cmp_runs(a: Run<'_>, b: Run<'_>) -> Ordering {
    match (a, b) {
        (Run::Digits(x), Run::Digits(y)) => cmp_digit_runs(x, y),
        (Run::Text(x), Run::Text(y)) => x.cmp(y),
        (Run::Digits(_), Run::Text(_)) => Ordering::Less,
        (Run::Text(_), Run::Digits(_)) => Ordering::Greater,
    }
}

// Arbitrary-length digit runs: no integer parsing, so no overflow.
fn cmp_digit_runs(x: &str, y: &str) -> Ordering {
    let xt = x.trim_start_matches('0');
    let yt = y.trim_start_matches('0');
    xt.len().cmp(&yt.len()).then_with(|| xt.cmp(yt))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/natsort.rs"]
mod tests;
