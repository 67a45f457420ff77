//! Competitor roster with name validation and bye padding

use std::collections::HashSet;

use thiserror::Error;

/// A slot in the padded roster: either a named competitor or the synthetic
/// bye appended when the input count is odd.
///
/// The bye is a proper variant rather than a reserved name, so a competitor
/// whose display name happens to match a placeholder string can never be
/// mistaken for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Competitor {
    Real(String),
    Bye,
}

impl Competitor {
    pub fn is_bye(&self) -> bool {
        matches!(self, Competitor::Bye)
    }

    /// Display name, `None` for the bye.
    pub fn name(&self) -> Option<&str> {
        match self {
            Competitor::Real(name) => Some(name),
            Competitor::Bye => None,
        }
    }
}

/// Validation failure while building a roster
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("blank competitor name at position {index}")]
    BlankName { index: usize },
    #[error("duplicate competitor name: {name}")]
    DuplicateName { name: String },
}

/// The ordered competitor list for one tournament.
///
/// Indices are 0-based and assigned in input order. When the input count is
/// odd a single [`Competitor::Bye`] is appended, so the padded length is
/// always even (the empty roster stays empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    competitors: Vec<Competitor>,
}

impl Roster {
    /// Build a roster from display names.
    ///
    /// Names must be non-blank (whitespace-only counts as blank) and unique.
    pub fn new(names: Vec<String>) -> Result<Self, RosterError> {
        let mut seen = HashSet::new();
        for (index, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(RosterError::BlankName { index });
            }
            if !seen.insert(name.as_str()) {
                return Err(RosterError::DuplicateName { name: name.clone() });
            }
        }

        let mut competitors: Vec<Competitor> =
            names.into_iter().map(Competitor::Real).collect();
        if competitors.len() % 2 == 1 {
            competitors.push(Competitor::Bye);
        }
        Ok(Self { competitors })
    }

    /// Padded length, including the bye if one was appended.
    pub fn len(&self) -> usize {
        self.competitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }

    /// Number of real competitors (padded length minus the bye).
    pub fn real_count(&self) -> usize {
        self.competitors.iter().filter(|c| !c.is_bye()).count()
    }

    pub fn has_bye(&self) -> bool {
        self.competitors.last().is_some_and(Competitor::is_bye)
    }

    pub fn is_bye(&self, index: usize) -> bool {
        self.competitors.get(index).is_some_and(Competitor::is_bye)
    }

    /// Display name for a padded index, `None` for the bye or out of range.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.competitors.get(index).and_then(Competitor::name)
    }

    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    /// Real display names in input order.
    pub fn real_names(&self) -> Vec<&str> {
        self.competitors.iter().filter_map(Competitor::name).collect()
    }
}
