//! Chunk classification.
//!
//! The lexer turns the next chunk into exactly one [`Token`]. A fixed chain of
//! section-independent checks runs first (end of input, section header,
//! unsupported header, inside an unsupported run). Only when none of them
//! fires does the rule table of the current section decide. Rule order within
//! a table is part of the grammar: the first matching rule wins, and the
//! catch-all rules (education basic info, job section content) sit last.

use super::cursor::{Checkpoint, Cursor};
use super::token::Token;
use crate::error::{Error, Result};
use crate::locale::{Locale, Patterns};
use crate::model::{Chunk, Section};

/// Default vertical distance above which two lines are separate paragraphs.
pub const DEFAULT_NEWLINE_GAP: f64 = 2.0;

/// What a rule predicate may look at.
struct Probe<'p> {
    text: &'p str,
    bold: bool,
    previous: Token,
    section: Section,
    patterns: &'p Patterns,
}

/// One `(token, predicate)` entry of a section's rule table.
struct Rule {
    token: Token,
    matches: fn(&Probe<'_>) -> bool,
}

const SUMMARY_RULES: &[Rule] = &[Rule {
    token: Token::SectionContent,
    matches: is_section_content,
}];

const EDUCATION_RULES: &[Rule] = &[
    Rule {
        token: Token::School,
        matches: is_school,
    },
    Rule {
        token: Token::EduGradeLabel,
        matches: is_grade_label,
    },
    Rule {
        token: Token::EduGrade,
        matches: is_grade,
    },
    Rule {
        token: Token::EduActivitiesLabel,
        matches: is_activities_label,
    },
    Rule {
        token: Token::EduActivityOrSociety,
        matches: is_activity_or_society,
    },
    Rule {
        token: Token::EduBasicInfo,
        matches: is_edu_basic_info,
    },
];

const JOB_RULES: &[Rule] = &[
    Rule {
        token: Token::JobTitle,
        matches: is_job_title,
    },
    Rule {
        token: Token::JobDate,
        matches: is_date_range,
    },
    Rule {
        token: Token::JobDuration,
        matches: is_job_duration,
    },
    Rule {
        token: Token::SectionContent,
        matches: is_section_content,
    },
];

const LANGUAGE_RULES: &[Rule] = &[
    Rule {
        token: Token::LanguageProficiency,
        matches: is_language_proficiency,
    },
    Rule {
        token: Token::Language,
        matches: is_language,
    },
];

const SKILL_RULES: &[Rule] = &[Rule {
    token: Token::Skill,
    matches: is_skill,
}];

fn rules_for(section: Section) -> &'static [Rule] {
    match section {
        Section::Summary => SUMMARY_RULES,
        Section::Education => EDUCATION_RULES,
        Section::Experience | Section::VolunteerExperience => JOB_RULES,
        Section::Languages => LANGUAGE_RULES,
        Section::Skills => SKILL_RULES,
        Section::Unsupported => &[],
    }
}

/// Free text: never bold, and only after a header, a date/duration line or
/// more free text. Volunteer positions may go straight from title to text.
fn is_section_content(p: &Probe<'_>) -> bool {
    let after_title = p.section == Section::VolunteerExperience && p.previous == Token::JobTitle;
    !p.bold
        && (after_title
            || matches!(
                p.previous,
                Token::JobDuration | Token::JobDate | Token::SectionContent | Token::SectionHeader
            ))
}

fn is_school(p: &Probe<'_>) -> bool {
    p.bold && p.section == Section::Education
}

fn is_grade_label(p: &Probe<'_>) -> bool {
    p.patterns.grade_label.is_match(p.text)
}

fn is_grade(p: &Probe<'_>) -> bool {
    p.previous == Token::EduGradeLabel
}

fn is_activities_label(p: &Probe<'_>) -> bool {
    p.patterns.activities_label.is_match(p.text)
}

fn is_activity_or_society(p: &Probe<'_>) -> bool {
    matches!(
        p.previous,
        Token::EduActivitiesLabel | Token::EduActivityOrSociety
    )
}

fn is_edu_basic_info(p: &Probe<'_>) -> bool {
    matches!(p.previous, Token::School | Token::EduBasicInfo)
}

/// Experience titles follow a duration line, volunteer titles a date line,
/// since volunteer positions often carry no computed duration.
fn is_job_title(p: &Probe<'_>) -> bool {
    if !p.bold {
        return false;
    }
    match p.section {
        Section::Experience => matches!(
            p.previous,
            Token::SectionHeader | Token::JobDuration | Token::SectionContent | Token::JobTitle
        ),
        Section::VolunteerExperience => matches!(
            p.previous,
            Token::SectionHeader | Token::JobDate | Token::SectionContent | Token::JobTitle
        ),
        _ => false,
    }
}

fn is_date_range(p: &Probe<'_>) -> bool {
    matches!(p.previous, Token::JobTitle | Token::EduBasicInfo)
        && p.patterns.date_range.is_match(p.text)
}

fn is_job_duration(p: &Probe<'_>) -> bool {
    p.previous == Token::JobDate && p.patterns.job_duration.is_match(p.text)
}

fn is_language_proficiency(p: &Probe<'_>) -> bool {
    p.previous == Token::Language && p.patterns.language_proficiency.is_match(p.text)
}

fn is_language(p: &Probe<'_>) -> bool {
    p.section == Section::Languages || p.previous == Token::Language
}

fn is_skill(p: &Probe<'_>) -> bool {
    matches!(p.previous, Token::Skill | Token::SectionHeader) && p.section == Section::Skills
}

/// Single-pass tokenizer over a sanitized chunk sequence.
pub struct Lexer<'a> {
    chunks: &'a [Chunk],
    locale: &'a Locale,
    cursor: Cursor<'a>,
    owner_name: String,
    owner_job: String,
    newline_gap: f64,
}

impl<'a> Lexer<'a> {
    /// Create a lexer resting on chunk `start`; the first
    /// [`next_token`](Self::next_token) classifies chunk `start + 1`.
    pub fn new(chunks: &'a [Chunk], locale: &'a Locale, start: usize) -> Self {
        Self {
            chunks,
            locale,
            cursor: Cursor::new(start),
            owner_name: String::new(),
            owner_job: String::new(),
            newline_gap: DEFAULT_NEWLINE_GAP,
        }
    }

    /// Set the profile owner's name and current job, used to recognize the
    /// recommendations pseudo-section and to label errors.
    pub fn with_owner(mut self, name: impl Into<String>, current_job: impl Into<String>) -> Self {
        self.owner_name = name.into();
        self.owner_job = current_job.into();
        self
    }

    /// Set the vertical gap that separates paragraphs.
    pub fn with_newline_gap(mut self, gap: f64) -> Self {
        self.newline_gap = gap;
        self
    }

    pub fn token(&self) -> Token {
        self.cursor.token()
    }

    pub fn text(&self) -> &'a str {
        self.cursor.text()
    }

    pub fn section(&self) -> Section {
        self.cursor.section()
    }

    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    pub fn locale(&self) -> &'a Locale {
        self.locale
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn checkpoint(&self) -> Checkpoint<'a> {
        self.cursor.checkpoint()
    }

    pub fn restore(&mut self, checkpoint: Checkpoint<'a>) {
        self.cursor.restore(checkpoint);
    }

    /// Advance one chunk and classify it.
    pub fn next_token(&mut self) -> Result<Token> {
        let next = self.chunks.get(self.cursor.index() + 1);
        self.cursor.advance(next);

        let (token, section) = self.classify()?;
        log::trace!(
            "{} -> {} [{}] {:?}",
            self.cursor.last().token,
            token,
            section,
            self.cursor.text()
        );
        self.cursor.set_classification(token, section);
        Ok(token)
    }

    fn classify(&self) -> Result<(Token, Section)> {
        let section = self.cursor.section();
        let text = match self.cursor.current().text {
            Some(text) if !text.is_empty() => text,
            _ => return Ok((Token::Eof, Section::Unsupported)),
        };

        if let Some(header) = self.locale.section_for_header(text) {
            return Ok((Token::SectionHeader, header));
        }
        if self.is_unsupported(text) {
            return Ok((Token::Unsupported, Section::Unsupported));
        }

        let previous = self.cursor.last().token;
        if matches!(previous, Token::Unsupported | Token::Unknown) {
            return Ok((Token::Unknown, section));
        }

        let probe = Probe {
            text,
            bold: self.cursor.bold(),
            previous,
            section,
            patterns: self.locale.patterns(),
        };
        rules_for(section)
            .iter()
            .find(|rule| (rule.matches)(&probe))
            .map(|rule| (rule.token, section))
            .ok_or_else(|| Error::Token {
                text: text.to_string(),
                profile: self.owner_name.clone(),
            })
    }

    /// Unsupported header, or the owner's name followed by their current job,
    /// which is how the recommendations block starts.
    fn is_unsupported(&self, text: &str) -> bool {
        let follows_owner = !self.owner_name.is_empty()
            && text == self.owner_name
            && self
                .chunks
                .get(self.cursor.index() + 1)
                .is_some_and(|next| next.text == self.owner_job);

        let label = if follows_owner {
            self.locale.recommendations_label()
        } else {
            text
        };
        self.locale.is_unsupported_section(label)
    }

    /// Current text starts with a bullet or a one-character outline marker.
    pub fn is_bulleted(&self) -> bool {
        self.locale.patterns().bullet.is_match(self.cursor.text())
    }

    /// Current chunk sits further below the previous one than a line break.
    pub fn is_separated_by_newline(&self) -> bool {
        self.cursor.gap().is_some_and(|gap| gap > self.newline_gap)
    }

    /// Current chunk opens a new list item.
    pub fn starts_item(&self) -> bool {
        self.is_bulleted() || self.is_separated_by_newline()
    }
}
