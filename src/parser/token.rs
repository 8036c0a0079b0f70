//! Token kinds produced by the lexer.

use std::fmt;

/// Classification of the current chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Token {
    /// Nothing has been classified yet
    #[default]
    Start,
    /// End of input
    Eof,
    /// Header of a supported section
    SectionHeader,
    /// (Part of) a bold `title  at   organization` line
    JobTitle,
    /// Job date range, e.g. `September 2014  -  Present`
    JobDate,
    /// Parenthesized job duration, e.g. `(1 year 2 months)`
    JobDuration,
    /// Free text of a summary or job description
    SectionContent,
    /// Bold school name
    School,
    /// Degree, field of study and years of an education entry
    EduBasicInfo,
    /// `Grade:` label
    EduGradeLabel,
    /// Grade value following the label
    EduGrade,
    /// `Activities and Societies:` label
    EduActivitiesLabel,
    /// Activity or society following the label
    EduActivityOrSociety,
    Skill,
    Language,
    LanguageProficiency,
    /// Header of a section without a dedicated grammar
    Unsupported,
    /// Line inside an unsupported section
    Unknown,
}

impl Token {
    /// Tokens that may start a section at the top level.
    pub fn opens_section(self) -> bool {
        matches!(
            self,
            Token::SectionHeader | Token::Unsupported | Token::Unknown
        )
    }

    /// Tokens that end a section without belonging to it.
    pub fn is_boundary(self) -> bool {
        matches!(
            self,
            Token::SectionHeader | Token::Unsupported | Token::Eof
        )
    }

    /// Lowercase name used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Token::Start => "start",
            Token::Eof => "eof",
            Token::SectionHeader => "section_header",
            Token::JobTitle => "job_title",
            Token::JobDate => "date_range",
            Token::JobDuration => "duration",
            Token::SectionContent => "section_content",
            Token::School => "school",
            Token::EduBasicInfo => "basic_info",
            Token::EduGradeLabel => "grade",
            Token::EduGrade => "grade_received",
            Token::EduActivitiesLabel => "activities_and_societies",
            Token::EduActivityOrSociety => "activity_or_society",
            Token::Skill => "skill",
            Token::Language => "language",
            Token::LanguageProficiency => "proficiency",
            Token::Unsupported => "unsupported",
            Token::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
