//! Compiled regular expressions and vocabulary tables of a locale.

use std::collections::HashMap;

use regex::{Captures, Regex};

use super::LocaleDefinition;
use crate::error::Result;

/// Bullet-like symbols or a single outline letter/digit followed by a period:
/// `-`, `•`, `#`, `~`, `*`, `A.`, `1.`
const BULLET: &str = r"^(?:[A-Za-z0-9]\.|[-•#~*])";
const PAGE_NUMBER: &str = r"\d+";
const BASIC_INFO_SEPARATOR: &str = r",\s*";
const EDUCATION_DATE_SEPARATOR: &str = r"\s+-\s+";

/// Every pattern the lexer and section parsers need, compiled once per locale.
#[derive(Debug, Clone)]
pub struct Patterns {
    /// Language proficiency line, e.g. `(Native or bilingual proficiency)`
    pub language_proficiency: Regex,
    /// Separator between job title and organization
    pub job_title: Regex,
    /// Date range line of a job, e.g. `September 2014  -  Present`
    pub date_range: Regex,
    /// Separator between start and end date of a job
    pub date_separator: Regex,
    /// Parenthesized job duration, e.g. `(1 year 2 months)`
    pub job_duration: Regex,
    /// Degree names at the front of an education basic-info line
    pub degree: Regex,
    /// Start of the grade label line
    pub grade_label: Regex,
    /// Start of the activities-and-societies label line
    pub activities_label: Regex,
    /// Separator between start and end year of an education entry
    pub education_date_separator: Regex,
    /// Separator between education basic-info entries
    pub basic_info_separator: Regex,
    /// Start of a bulleted or outlined line
    pub bullet: Regex,
    /// Digits in the chunk following the localized "Page" word
    pub page_number: Regex,
}

impl Patterns {
    /// Compile the patterns of a locale definition.
    pub fn compile(definition: &LocaleDefinition) -> Result<Self> {
        let source = &definition.patterns;
        Ok(Self {
            language_proficiency: Regex::new(&source.language_proficiency)?,
            job_title: Regex::new(&source.job_title)?,
            date_range: Regex::new(&source.date_range)?,
            date_separator: Regex::new(&source.date_separator)?,
            job_duration: Regex::new(&source.job_duration)?,
            degree: Regex::new(&source.degree)?,
            grade_label: prefix_regex(&definition.markers.grade)?,
            activities_label: prefix_regex(&definition.markers.activities_and_societies)?,
            education_date_separator: Regex::new(EDUCATION_DATE_SEPARATOR)?,
            basic_info_separator: Regex::new(BASIC_INFO_SEPARATOR)?,
            bullet: Regex::new(BULLET)?,
            page_number: Regex::new(PAGE_NUMBER)?,
        })
    }
}

fn prefix_regex(marker: &str) -> Result<Regex> {
    Ok(Regex::new(&format!("^{}", regex::escape(marker)))?)
}

/// Whole-word phrase substitution table.
///
/// Longer phrases win over their prefixes (`anos` before `ano`), whatever
/// order the table was written in.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    pattern: Option<Regex>,
    table: HashMap<String, String>,
}

impl Vocabulary {
    /// Build a substitution table.
    pub fn new(table: &HashMap<String, String>) -> Result<Self> {
        if table.is_empty() {
            return Ok(Self::default());
        }

        let mut phrases: Vec<&String> = table.keys().collect();
        phrases.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        let alternation = phrases
            .iter()
            .map(|phrase| regex::escape(phrase))
            .collect::<Vec<_>>()
            .join("|");

        Ok(Self {
            pattern: Some(Regex::new(&format!(r"\b(?:{})\b", alternation))?),
            table: table.clone(),
        })
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Replace every known phrase in `text`.
    pub fn apply(&self, text: &str) -> String {
        match &self.pattern {
            Some(pattern) => pattern
                .replace_all(text, |caps: &Captures| {
                    let phrase = &caps[0];
                    self.table
                        .get(phrase)
                        .cloned()
                        .unwrap_or_else(|| phrase.to_string())
                })
                .into_owned(),
            None => text.to_string(),
        }
    }
}
