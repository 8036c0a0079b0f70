//! Recursive-descent grammar over the token stream.
//!
//! ```text
//! profile    = name current_job [email] { section } EOF
//! section    = SECTION_HEADER body | (UNSUPPORTED | UNKNOWN) { UNKNOWN }
//! education  = { SCHOOL [ { BASIC_INFO } ] [ GRADE_LABEL GRADE ]
//!                [ ACTIVITIES_LABEL { ACTIVITY } ] }
//! job        = { JOB_TITLE } [ JOB_DATE [ JOB_DURATION ] ] [ { CONTENT } ]
//! languages  = { LANGUAGE [ PROFICIENCY ] }
//! ```
//!
//! Each section parser starts on the first token of its section and stops on
//! the first token that does not belong to it.

use regex::Regex;

use super::lexer::Lexer;
use super::options::ParseOptions;
use super::text::read_content;
use super::token::Token;
use crate::error::{Error, Result};
use crate::locale::{Locale, Patterns};
use crate::model::{Chunk, Education, Job, Language, Profile, Section};

/// Single-use parser for one sanitized chunk sequence.
pub struct SectionParser<'a> {
    lexer: Lexer<'a>,
    locale: &'a Locale,
    profile: Profile,
    normalize_vocabulary: bool,
}

impl<'a> SectionParser<'a> {
    /// Read the leading lines (name, current job, optional email) and set up
    /// the lexer after them.
    pub fn new(chunks: &'a [Chunk], locale: &'a Locale, options: &ParseOptions) -> Result<Self> {
        let name = chunks.first().ok_or(Error::MissingChunk("name"))?;
        let current_job = chunks.get(1).ok_or(Error::MissingChunk("current job"))?;
        let mut profile = Profile::new(name.text.as_str(), current_job.text.as_str());

        let mut start = 1;
        match chunks.get(2) {
            Some(chunk)
                if !chunk.is_empty()
                    && !locale.is_section_header(&chunk.text)
                    && !locale.is_unsupported_section(&chunk.text) =>
            {
                profile.email = Some(chunk.text.clone());
                start = 2;
            }
            _ => log::warn!("No email line found for profile {}", profile.name),
        }

        let lexer = Lexer::new(chunks, locale, start)
            .with_owner(profile.name.as_str(), profile.current_job.as_str())
            .with_newline_gap(options.newline_gap);

        Ok(Self {
            lexer,
            locale,
            profile,
            normalize_vocabulary: options.normalize_vocabulary,
        })
    }

    /// Run the grammar to the end of input.
    pub fn parse(mut self) -> Result<Profile> {
        self.lexer.next_token()?;
        while self.lexer.token() != Token::Eof {
            if !self.lexer.token().opens_section() {
                return Err(self.parsing_error("expected a section header"));
            }
            self.parse_section()?;
        }
        Ok(self.profile)
    }

    fn parse_section(&mut self) -> Result<()> {
        if matches!(self.lexer.token(), Token::Unsupported | Token::Unknown) {
            return self.parse_unsupported();
        }

        let section = self.lexer.section();
        if self.profile.has_section(section) {
            log::debug!("Section {} repeats, appending", section);
        } else {
            log::debug!("Parsing section {}", section);
        }
        self.profile.open_section(section);
        self.lexer.next_token()?;

        if self.lexer.token().is_boundary() {
            log::debug!("Section {} is empty", section);
            return Ok(());
        }

        match section {
            Section::Summary => {
                self.expect(Token::SectionContent)?;
                self.parse_summary()
            }
            Section::Education => {
                self.expect(Token::School)?;
                while self.lexer.token() == Token::School {
                    self.parse_education()?;
                }
                Ok(())
            }
            section if section.is_job_section() => {
                self.expect(Token::JobTitle)?;
                while self.lexer.token() == Token::JobTitle {
                    self.parse_job(section)?;
                }
                Ok(())
            }
            Section::Languages => {
                self.expect(Token::Language)?;
                self.parse_languages()
            }
            Section::Skills => {
                self.expect(Token::Skill)?;
                self.parse_skills()
            }
            _ => Err(self.parsing_error("header opens no known section")),
        }
    }

    fn parse_summary(&mut self) -> Result<()> {
        let items = read_content(&mut self.lexer)?;
        self.profile.bio_mut().extend(items);
        Ok(())
    }

    fn parse_education(&mut self) -> Result<()> {
        let mut education = Education::new(self.lexer.text());
        self.lexer.next_token()?;

        if self.lexer.token() == Token::EduBasicInfo {
            let mut info = String::new();
            while self.lexer.token() == Token::EduBasicInfo {
                info.push_str(self.lexer.text());
                self.lexer.next_token()?;
            }
            self.apply_basic_info(&mut education, &info);
        }

        if self.lexer.token() == Token::EduGradeLabel {
            self.lexer.next_token()?;
            self.expect(Token::EduGrade)?;
            education.grade = Some(self.lexer.text().to_string());
            self.lexer.next_token()?;
        }

        if self.lexer.token() == Token::EduActivitiesLabel {
            self.lexer.next_token()?;
            self.expect(Token::EduActivityOrSociety)?;
            let mut activities = String::new();
            while self.lexer.token() == Token::EduActivityOrSociety {
                activities.push_str(self.lexer.text());
                self.lexer.next_token()?;
            }
            education.activities_and_societies = Some(activities);
        }

        log::debug!("Parsed school {}", education.school);
        self.profile.education_mut().push(education);
        Ok(())
    }

    /// Split a basic-info line into degree, details and years.
    fn apply_basic_info(&self, education: &mut Education, info: &str) {
        let patterns = self.locale.patterns();
        let mut entries: Vec<String> = patterns
            .basic_info_separator
            .split(info)
            .map(str::to_string)
            .collect();

        if entries
            .first()
            .is_some_and(|first| patterns.degree.is_match(first))
        {
            education.degree = Some(entries.remove(0));
        }

        if entries
            .last()
            .is_some_and(|last| patterns.date_range.is_match(last))
        {
            if let Some(years) = entries.pop() {
                let mut dates = patterns.education_date_separator.split(&years);
                education.start_date = dates.next().map(|date| self.normalize_date(date.trim()));
                education.end_date = dates.next().map(|date| self.normalize_date(date.trim()));
            }
        }

        education.basic_info = Some(entries);
    }

    fn parse_job(&mut self, section: Section) -> Result<()> {
        let locale = self.locale;
        let patterns = locale.patterns();

        let mut title = String::new();
        while self.lexer.token() == Token::JobTitle {
            title.push_str(self.lexer.text());
            self.lexer.next_token()?;
        }
        let (job_title, organization) = split_title(title.trim(), patterns).ok_or_else(|| {
            self.parsing_error_at(&title, "job title must have the form '<title> at <organization>'")
        })?;
        let mut job = Job::new(job_title, organization);

        if self.lexer.token() == Token::JobDate {
            let text = self.lexer.text();
            let (start, end) = split_dates(text.trim(), &patterns.date_separator)
                .ok_or_else(|| self.parsing_error("date range must have exactly two dates"))?;
            job.start_date = Some(self.normalize_date(start));
            job.end_date = Some(self.normalize_date(end));
            self.lexer.next_token()?;

            if self.lexer.token() == Token::JobDuration {
                let duration = split_duration(self.lexer.text()).ok_or_else(|| {
                    self.parsing_error("duration must have exactly one parenthesized group")
                })?;
                job.duration = Some(self.normalize_duration(duration));
                self.lexer.next_token()?;
            }
        }

        if self.lexer.token() == Token::SectionContent {
            let items = read_content(&mut self.lexer)?;
            job.responsibilities.get_or_insert_with(Vec::new).extend(items);
        }

        log::debug!("Parsed job {} at {}", job.job_title, job.organization);
        match self.profile.jobs_mut(section) {
            Some(jobs) => {
                jobs.push(job);
                Ok(())
            }
            None => Err(self.parsing_error("job outside of an experience section")),
        }
    }

    fn parse_languages(&mut self) -> Result<()> {
        while self.lexer.token() == Token::Language {
            let mut language = Language::new(self.lexer.text());
            self.lexer.next_token()?;
            if self.lexer.token() == Token::LanguageProficiency {
                language.proficiency = Some(self.lexer.text().to_string());
                self.lexer.next_token()?;
            }
            self.profile.languages_mut().push(language);
        }
        Ok(())
    }

    fn parse_skills(&mut self) -> Result<()> {
        while self.lexer.token() == Token::Skill {
            self.profile.skills_mut().push(self.lexer.text().to_string());
            self.lexer.next_token()?;
        }
        Ok(())
    }

    /// Raw lines, each distinct text kept once (dotted separator lines repeat).
    fn parse_unsupported(&mut self) -> Result<()> {
        log::debug!("Collecting unsupported section {:?}", self.lexer.text());
        self.profile.open_section(Section::Unsupported);
        while matches!(self.lexer.token(), Token::Unsupported | Token::Unknown) {
            let text = self.lexer.text();
            let lines = self.profile.unsupported_mut();
            if !lines.iter().any(|line| line == text) {
                lines.push(text.to_string());
            }
            self.lexer.next_token()?;
        }
        Ok(())
    }

    fn expect(&self, token: Token) -> Result<()> {
        let found = self.lexer.token();
        if found == token {
            Ok(())
        } else {
            Err(self.parsing_error(&format!("expected {} but found {}", token, found)))
        }
    }

    fn normalize_date(&self, date: &str) -> String {
        if self.normalize_vocabulary {
            self.locale.normalize_date(date)
        } else {
            date.to_string()
        }
    }

    fn normalize_duration(&self, duration: &str) -> String {
        if self.normalize_vocabulary {
            self.locale.normalize_duration(duration)
        } else {
            duration.to_string()
        }
    }

    fn parsing_error(&self, reason: &str) -> Error {
        self.parsing_error_at(self.lexer.text(), reason)
    }

    fn parsing_error_at(&self, text: &str, reason: &str) -> Error {
        Error::Parsing {
            text: text.to_string(),
            profile: self.profile.name.clone(),
            reason: reason.to_string(),
        }
    }
}

/// `"Engineer  at   Acme"` into title and organization.
pub fn split_title<'t>(title: &'t str, patterns: &Patterns) -> Option<(&'t str, &'t str)> {
    split_pair(title, &patterns.job_title)
}

/// `"May 2012  -  Present"` into start and end date.
pub fn split_dates<'t>(dates: &'t str, separator: &Regex) -> Option<(&'t str, &'t str)> {
    split_pair(dates, separator)
}

/// `"(1 year 2 months)"` into `"1 year 2 months"`.
pub fn split_duration(duration: &str) -> Option<&str> {
    let parts: Vec<&str> = duration.split(['(', ')']).collect();
    match parts.as_slice() {
        [_, inner, _] => Some(inner),
        _ => None,
    }
}

fn split_pair<'t>(text: &'t str, separator: &Regex) -> Option<(&'t str, &'t str)> {
    let parts: Vec<&str> = separator.split(text).collect();
    match parts.as_slice() {
        [first, second] => Some((first, second)),
        _ => None,
    }
}
