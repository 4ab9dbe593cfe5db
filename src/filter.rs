//! Name filter
//!
//! Case-insensitive substring matching of a query against person names.

use std::io::Write;

use crate::error::PickError;
use crate::people::Person;

/// Returns the people whose name contains `query`, ignoring case.
///
/// An empty query keeps everyone. Dataset order is preserved.
pub fn filter_people<'a>(people: &'a [Person], query: &str) -> Vec<&'a Person> {
    if query.is_empty() {
        return people.iter().collect();
    }

    let query_lower = query.to_lowercase();
    people
        .iter()
        .filter(|person| person.name.to_lowercase().contains(&query_lower))
        .collect()
}

/// Write matching names to `out`, one per line. Returns how many matched.
pub fn write_matches<W: Write>(
    out: &mut W,
    people: &[Person],
    query: &str,
) -> Result<usize, PickError> {
    let matches = filter_people(people, query);
    for person in &matches {
        writeln!(out, "{}", person.name)?;
    }
    Ok(matches.len())
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
