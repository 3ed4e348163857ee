//! Console driver that prints sample inputs next to their sorted forms.

use std::fmt::Write;
use std::num::ParseIntError;

use thiserror::Error;

use crate::unstable::rust_lomuto_quicksort::{sort_ascending, sort_descending};

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("invalid value `{token}`: {source}")]
    InvalidValue {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Which sorted forms are printed for each case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Order {
    Asc,
    Desc,
    #[default]
    Both,
}

pub struct SampleCase {
    pub title: &'static str,
    pub values: &'static [i32],
}

pub const SAMPLE_CASES: [SampleCase; 6] = [
    SampleCase {
        title: "case 1: 10,20,30,41",
        values: &[10, 20, 30, 41],
    },
    SampleCase {
        title: "case 2: regular array",
        values: &[64, 34, 25, 12, 22, 11, 90],
    },
    SampleCase {
        title: "case 3: reverse-sorted array",
        values: &[5, 4, 3, 2, 1],
    },
    SampleCase {
        title: "case 4: with duplicates",
        values: &[3, 1, 4, 1, 5, 9, 2, 6, 5],
    },
    SampleCase {
        title: "case 5: single element",
        values: &[42],
    },
    SampleCase {
        title: "case 6: empty array",
        values: &[],
    },
];

/// Formats `v` as `[a, b, c]`, or `null` if absent.
pub fn format_sequence(v: Option<&[i32]>) -> String {
    let Some(v) = v else {
        return "null".into();
    };

    let items: Vec<String> = v.iter().map(|x| x.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Renders the title, the input and the requested sorted forms, terminated by an empty line.
pub fn render_case(title: &str, input: Option<&[i32]>, order: Order) -> String {
    tracing::debug!(title, len = ?input.map(<[i32]>::len), ?order, "sorting case");

    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "original: {}", format_sequence(input));

    if matches!(order, Order::Asc | Order::Both) {
        let ascending = sort_ascending(input);
        let _ = writeln!(out, "ascending: {}", format_sequence(ascending.as_deref()));
    }

    if matches!(order, Order::Desc | Order::Both) {
        let descending = sort_descending(input);
        let _ = writeln!(out, "descending: {}", format_sequence(descending.as_deref()));
    }

    out.push('\n');
    out
}

/// Renders every built-in sample case in order.
pub fn render_samples(order: Order) -> String {
    SAMPLE_CASES
        .iter()
        .map(|case| render_case(case.title, Some(case.values), order))
        .collect()
}

/// Parses a comma and/or whitespace separated list of `i32` values. An empty list is valid.
pub fn parse_values(list: &str) -> Result<Vec<i32>, DemoError> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i32>().map_err(|source| DemoError::InvalidValue {
                token: token.to_owned(),
                source,
            })
        })
        .collect()
}
