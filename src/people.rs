//! People dataset
//!
//! The static list of people the picker searches over. The list is never
//! modified; every `&Person` handed out by the picker points into it.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "m"),
            Sex::Female => write!(f, "f"),
        }
    }
}

/// A single record of the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub name: &'static str,
    pub sex: Sex,
    /// Year of birth
    pub born: u16,
    /// Year of death
    pub died: u16,
}

impl Person {
    pub const fn new(name: &'static str, sex: Sex, born: u16, died: u16) -> Self {
        Self {
            name,
            sex,
            born,
            died,
        }
    }

    /// Heading shown once this person is selected, e.g. `Alice (1900 - 1980)`
    pub fn title(&self) -> String {
        format!("{} ({} - {})", self.name, self.born, self.died)
    }

    pub fn slug(&self) -> String {
        format!("{}-{}", self.name.to_lowercase().replace(' ', "-"), self.born)
    }
}

use Sex::{Female as F, Male as M};

pub static PEOPLE: &[Person] = &[
    Person::new("Carolus Haverbeke", M, 1832, 1905),
    Person::new("Emma de Milliano", F, 1876, 1956),
    Person::new("Maria de Rycke", F, 1683, 1724),
    Person::new("Jan van Brussel", M, 1714, 1748),
    Person::new("Philibert Haverbeke", M, 1907, 1997),
    Person::new("Jan Frans van Brussel", M, 1761, 1833),
    Person::new("Pauwels van Haverbeke", M, 1535, 1582),
    Person::new("Clara Aernoudts", F, 1918, 2012),
    Person::new("Emile Haverbeke", M, 1877, 1968),
    Person::new("Lieven de Causmaecker", M, 1696, 1724),
    Person::new("Pieter Haverbeke", M, 1602, 1642),
    Person::new("Livina Haverbeke", F, 1692, 1743),
    Person::new("Pieter Bernard Haverbeke", M, 1695, 1762),
    Person::new("Lieven van Haverbeke", M, 1570, 1636),
    Person::new("Joanna de Causmaecker", F, 1762, 1807),
    Person::new("Willem Haverbeke", M, 1668, 1731),
    Person::new("Pieter Antone Haverbeke", M, 1753, 1798),
    Person::new("Maria van Brussel", F, 1801, 1834),
    Person::new("Martina de Pauw", F, 1665, 1730),
    Person::new("Angela Haverbeke", F, 1728, 1734),
    Person::new("Elisabeth Haverbeke", F, 1711, 1754),
    Person::new("Lievijne Jans", F, 1542, 1582),
    Person::new("Bernardus de Causmaecker", M, 1721, 1789),
    Person::new("Jacoba Lammens", F, 1699, 1740),
    Person::new("Pieter de Decker", M, 1705, 1780),
    Person::new("Joanna de Pape", F, 1654, 1723),
    Person::new("Daniel Haverbeke", M, 1652, 1723),
    Person::new("Lieven Haverbeke", M, 1631, 1676),
    Person::new("Martin Haverbeke", M, 1657, 1666),
    Person::new("Jan Francies Haverbeke", M, 1725, 1779),
    Person::new("Maria Haverbeke", F, 1905, 1997),
    Person::new("Petronella de Decker", F, 1731, 1781),
    Person::new("Livina Sierens", F, 1761, 1826),
    Person::new("Laurentia Haverbeke", F, 1710, 1786),
    Person::new("Carel Haverbeke", M, 1796, 1837),
    Person::new("Elisabeth Hercke", F, 1632, 1674),
    Person::new("Jan Haverbeke", M, 1671, 1731),
    Person::new("Anna van Hecke", F, 1607, 1670),
    Person::new("Maria Sturm", F, 1835, 1917),
    Person::new("Jacobus Bernardus van Brussel", M, 1736, 1809),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_format() {
        let person = Person::new("Alice", Sex::Female, 1900, 1980);
        assert_eq!(person.title(), "Alice (1900 - 1980)");
    }

    #[test]
    fn test_slug_format() {
        let person = Person::new("Emma de Milliano", Sex::Female, 1876, 1956);
        assert_eq!(person.slug(), "emma-de-milliano-1876");
    }

    #[test]
    fn test_dataset_names_are_unique() {
        let mut names: Vec<&str> = PEOPLE.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PEOPLE.len());
    }

    #[test]
    fn test_dataset_years_are_ordered() {
        for person in PEOPLE {
            assert!(person.born <= person.died, "{}", person.name);
        }
    }

    #[test]
    fn test_person_serializes_to_json() {
        let person = Person::new("Alice", Sex::Female, 1900, 1980);
        let json = serde_json::to_string(&person).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Alice","sex":"f","born":1900,"died":1980}"#
        );
    }
}
