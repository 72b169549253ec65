//! Pronoun sets used for event text substitution.

use serde::{Deserialize, Serialize};

/// Whether verbs following the subject conjugate singular ("she runs")
/// or plural ("they run").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conjugation {
    Singular,
    Plural,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronoun {
    pub subject: String,
    pub object: String,
    /// Possessive determiner ("her fur").
    pub possessive: String,
    /// Independent possessive ("the prey is hers").
    pub inposs: String,
    pub reflexive: String,
    pub conjugation: Conjugation,
}

impl Pronoun {
    pub fn new(
        subject: &str,
        object: &str,
        possessive: &str,
        inposs: &str,
        reflexive: &str,
        conjugation: Conjugation,
    ) -> Self {
        Self {
            subject: subject.to_string(),
            object: object.to_string(),
            possessive: possessive.to_string(),
            inposs: inposs.to_string(),
            reflexive: reflexive.to_string(),
            conjugation,
        }
    }

    pub fn they() -> Self {
        Self::new("they", "them", "their", "theirs", "themself", Conjugation::Plural)
    }

    pub fn she() -> Self {
        Self::new("she", "her", "her", "hers", "herself", Conjugation::Singular)
    }

    pub fn he() -> Self {
        Self::new("he", "him", "his", "his", "himself", Conjugation::Singular)
    }

    /// Default pronoun list for a gender label.
    pub fn defaults_for(gender: &str) -> Vec<Pronoun> {
        match gender.to_ascii_lowercase().as_str() {
            "female" | "trans female" => vec![Self::she()],
            "male" | "trans male" => vec![Self::he()],
            _ => vec![Self::they()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_gender() {
        assert_eq!(Pronoun::defaults_for("Female"), vec![Pronoun::she()]);
        assert_eq!(Pronoun::defaults_for("Male"), vec![Pronoun::he()]);
        assert_eq!(Pronoun::defaults_for("nonbinary"), vec![Pronoun::they()]);
    }

    #[test]
    fn test_they_is_plural() {
        assert_eq!(Pronoun::they().conjugation, Conjugation::Plural);
        assert_eq!(Pronoun::she().conjugation, Conjugation::Singular);
    }
}
