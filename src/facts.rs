// src/facts.rs
// THE FACT EXTRACTORS
// Each question type pulls a single property out of a subject's infobox text.

use std::sync::Arc;

use chrono::NaiveDate;
use regex::{Regex, RegexBuilder};
use tracing::info;

use crate::actions::{Action, Reply};
use crate::error::LookupError;
use crate::wiki::KnowledgeSource;

pub const NO_CITY: &str = "No city specified";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fact {
    BirthDate,
    PolarRadius,
    CityPopulation,
    CityCoordinates,
    CityCountry,
}

/// How the captured words become the subject looked up in the encyclopedia.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subject {
    /// Person names: every word, space-joined.
    AllWords,
    /// Planets: the first word only.
    FirstWord,
    /// Cities: the first word only, and an empty capture is answered locally.
    City,
}

impl Fact {
    /// Registry order.
    pub const ALL: [Fact; 5] = [
        Fact::BirthDate,
        Fact::PolarRadius,
        Fact::CityPopulation,
        Fact::CityCoordinates,
        Fact::CityCountry,
    ];

    pub fn template(self) -> &'static str {
        match self {
            Fact::BirthDate => "when was % born",
            Fact::PolarRadius => "what is the polar radius of %",
            Fact::CityPopulation => "what is the population of %",
            Fact::CityCoordinates => "what are the coordinates of %",
            Fact::CityCountry => "what country is % in",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Fact::BirthDate => "birth_date",
            Fact::PolarRadius => "polar_radius",
            Fact::CityPopulation => "city_population",
            Fact::CityCoordinates => "city_coordinates",
            Fact::CityCountry => "city_country",
        }
    }

    fn subject(self) -> Subject {
        match self {
            Fact::BirthDate => Subject::AllWords,
            Fact::PolarRadius => Subject::FirstWord,
            Fact::CityPopulation | Fact::CityCoordinates | Fact::CityCountry => Subject::City,
        }
    }

    // Group 1 is the answer in every pattern.
    fn pattern(self) -> &'static str {
        match self {
            Fact::BirthDate => r"(?:Born\D*)(\d{4}-\d{2}-\d{2})",
            Fact::PolarRadius => r"(?:Polar radius.*?)(?: ?[\d]+ )?([\d,.]+)(?:.*?)km",
            Fact::CityPopulation => {
                r"Population [a-zA-Z!@#$%^&*() \[\]]+\d{4}[a-zA-Z!@#$%^&*() \[\]]+\d{0,2}[a-zA-Z!@#$%^&*() \[\]]+?([0-9,]+)"
            }
            Fact::CityCoordinates => r"Coordinates: ?(\d+\s\d+\s+\d+\s\w\s\d+\s\d+\s\d+\s+\w)",
            Fact::CityCountry => r"Country\s*([A-Z][a-z]*(?: [A-Z][a-z]*)?)",
        }
    }

    fn missing_message(self) -> &'static str {
        match self {
            Fact::BirthDate => {
                "Page infobox has no birth information (at least none in xxxx-xx-xx format)"
            }
            Fact::PolarRadius => "Page infobox has no polar radius information",
            Fact::CityPopulation => "Page infobox has no population information",
            Fact::CityCoordinates => "Page infobox has no coordinates information",
            Fact::CityCountry => "Page infobox has no country information",
        }
    }

    fn compile(self) -> Result<Regex, LookupError> {
        Ok(RegexBuilder::new(self.pattern())
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()?)
    }
}

/// Answers one `Fact` question from a `KnowledgeSource`.
pub struct FactAction {
    fact: Fact,
    regex: Regex,
    source: Arc<dyn KnowledgeSource>,
}

impl FactAction {
    pub fn new(fact: Fact, source: Arc<dyn KnowledgeSource>) -> Result<Self, LookupError> {
        Ok(Self {
            fact,
            regex: fact.compile()?,
            source,
        })
    }

    /// Finds the fact in already-cleaned infobox text.
    pub fn extract(&self, infobox: &str) -> Result<String, LookupError> {
        let value = self
            .regex
            .captures(infobox)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| LookupError::missing(self.fact.missing_message()))?;

        if self.fact == Fact::BirthDate {
            NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                .map_err(|_| LookupError::InvalidDate {
                    value: value.clone(),
                })?;
        }
        Ok(value)
    }
}

impl Action for FactAction {
    fn name(&self) -> &str {
        self.fact.name()
    }

    fn execute(&self, words: &[String]) -> Result<Reply, LookupError> {
        let subject = match self.fact.subject() {
            Subject::AllWords => words.join(" "),
            Subject::FirstWord => words.first().cloned().ok_or(LookupError::MissingSubject)?,
            Subject::City => match words.first() {
                Some(city) if !city.is_empty() => city.clone(),
                _ => return Ok(Reply::Answers(vec![NO_CITY.to_string()])),
            },
        };
        if subject.is_empty() {
            return Err(LookupError::MissingSubject);
        }

        info!("🔎 FACT: Looking up {} for '{}'", self.fact.name(), subject);
        let infobox = self.source.infobox_text(&subject)?;
        Ok(Reply::Answers(vec![self.extract(&infobox)?]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Serves one canned infobox and remembers the subjects it was asked for.
    struct StubSource {
        infobox: String,
        asked: Mutex<Vec<String>>,
    }

    impl StubSource {
        fn new(infobox: &str) -> Arc<Self> {
            Arc::new(Self {
                infobox: infobox.to_string(),
                asked: Mutex::new(Vec::new()),
            })
        }
    }

    impl KnowledgeSource for StubSource {
        fn infobox_text(&self, subject: &str) -> Result<String, LookupError> {
            self.asked.lock().unwrap().push(subject.to_string());
            Ok(self.infobox.clone())
        }
    }

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn answer(fact: Fact, source: Arc<StubSource>, query: &str) -> Result<Reply, LookupError> {
        FactAction::new(fact, source).unwrap().execute(&words(query))
    }

    #[test]
    fn birth_date_joins_full_name() {
        let source = StubSource::new(
            "Marie Curie\nBorn Maria Salomea Sk odowska (1867-11-07)7 November 1867 Warsaw\nDied 4 July 1934",
        );
        let reply = answer(Fact::BirthDate, source.clone(), "marie curie").unwrap();
        assert_eq!(reply, Reply::Answers(vec!["1867-11-07".to_string()]));
        assert_eq!(*source.asked.lock().unwrap(), vec!["marie curie"]);
    }

    #[test]
    fn birth_date_must_be_a_real_date() {
        let source = StubSource::new("Born Someone (1867-13-45)");
        let err = answer(Fact::BirthDate, source, "someone").unwrap_err();
        assert!(matches!(err, LookupError::InvalidDate { value } if value == "1867-13-45"));
    }

    #[test]
    fn birth_date_missing_reports_property() {
        let source = StubSource::new("Born 7 November 1867");
        let err = answer(Fact::BirthDate, source, "marie curie").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Page infobox has no birth information (at least none in xxxx-xx-xx format)"
        );
    }

    #[test]
    fn polar_radius_uses_first_word() {
        let source = StubSource::new("Physical characteristics\nEquatorial radius 6378.137 km\nPolar radius 6356.752 km\nFlattening 0.0033528");
        let reply = answer(Fact::PolarRadius, source.clone(), "earth planet").unwrap();
        assert_eq!(reply, Reply::Answers(vec!["6356.752".to_string()]));
        assert_eq!(*source.asked.lock().unwrap(), vec!["earth"]);
    }

    #[test]
    fn city_population() {
        let source = StubSource::new("Population (2020)[3] City 8,804,190 Rank 1st");
        let reply = answer(Fact::CityPopulation, source, "chicago").unwrap();
        assert_eq!(reply, Reply::Answers(vec!["8,804,190".to_string()]));
    }

    #[test]
    fn city_coordinates() {
        let source = StubSource::new("Coordinates: 41 52 55 N 87 37 40 W");
        let reply = answer(Fact::CityCoordinates, source, "chicago").unwrap();
        assert_eq!(
            reply,
            Reply::Answers(vec!["41 52 55 N 87 37 40 W".to_string()])
        );
    }

    #[test]
    fn city_country() {
        let source = StubSource::new("Country United States\nState Illinois");
        let reply = answer(Fact::CityCountry, source, "chicago").unwrap();
        assert_eq!(reply, Reply::Answers(vec!["United States".to_string()]));
    }

    #[test]
    fn city_questions_without_a_city_skip_retrieval() {
        for fact in [Fact::CityPopulation, Fact::CityCoordinates, Fact::CityCountry] {
            let source = StubSource::new("irrelevant");
            let reply = answer(fact, source.clone(), "").unwrap();
            assert_eq!(reply, Reply::Answers(vec![NO_CITY.to_string()]));
            assert!(source.asked.lock().unwrap().is_empty());
        }
    }

    #[test]
    fn empty_name_is_an_error_not_a_lookup() {
        let source = StubSource::new("Born (1867-11-07)");
        let err = answer(Fact::BirthDate, source.clone(), "").unwrap_err();
        assert!(matches!(err, LookupError::MissingSubject));
        assert!(source.asked.lock().unwrap().is_empty());
    }

    #[test]
    fn every_pattern_compiles() {
        for fact in Fact::ALL {
            assert!(fact.compile().is_ok(), "{}", fact.name());
        }
    }
}
