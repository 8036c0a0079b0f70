//! Profile document types.

use serde::{Deserialize, Serialize};

/// A named region of a profile.
///
/// `Unsupported` is the sentinel for sections the parser only collects as raw
/// lines (Publications, Projects, recommendations, ...), and for the position
/// before the first header and after the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Summary,
    Education,
    Experience,
    VolunteerExperience,
    Languages,
    Skills,
    #[default]
    Unsupported,
}

impl Section {
    /// Sections with a dedicated grammar.
    pub const SUPPORTED: [Section; 6] = [
        Section::Summary,
        Section::Education,
        Section::Experience,
        Section::VolunteerExperience,
        Section::Languages,
        Section::Skills,
    ];

    /// Key of this section in the output document.
    pub fn json_key(self) -> &'static str {
        match self {
            Section::Summary => "bio",
            Section::Education => "educationExperience",
            Section::Experience => "workExperience",
            Section::VolunteerExperience => "volunteerExperience",
            Section::Languages => "languages",
            Section::Skills => "skills",
            Section::Unsupported => "unsupported",
        }
    }

    /// Whether jobs (title/organization/dates) live in this section.
    pub fn is_job_section(self) -> bool {
        matches!(self, Section::Experience | Section::VolunteerExperience)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.json_key())
    }
}

/// The structured result of parsing one profile.
///
/// Section fields stay `None` until their header is seen; a header that is
/// followed by no content still leaves an empty list behind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Profile owner's name (first line)
    pub name: String,

    /// Current job headline (second line)
    pub current_job: String,

    /// Contact email, when the export includes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Summary paragraphs or bullet items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<Vec<String>>,

    /// Education entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_experience: Option<Vec<Education>>,

    /// Work experience entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<Vec<Job>>,

    /// Volunteer experience entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volunteer_experience: Option<Vec<Job>>,

    /// Spoken languages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Language>>,

    /// Skills & Expertise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,

    /// Raw lines of sections without a dedicated grammar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsupported: Option<Vec<String>>,
}

impl Profile {
    /// Create a profile with only the leading lines filled in.
    pub fn new(name: impl Into<String>, current_job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current_job: current_job.into(),
            ..Default::default()
        }
    }

    /// Make sure the field for `section` exists, creating an empty list.
    pub fn open_section(&mut self, section: Section) {
        match section {
            Section::Summary => {
                self.bio.get_or_insert_with(Vec::new);
            }
            Section::Education => {
                self.education_experience.get_or_insert_with(Vec::new);
            }
            Section::Experience => {
                self.work_experience.get_or_insert_with(Vec::new);
            }
            Section::VolunteerExperience => {
                self.volunteer_experience.get_or_insert_with(Vec::new);
            }
            Section::Languages => {
                self.languages.get_or_insert_with(Vec::new);
            }
            Section::Skills => {
                self.skills.get_or_insert_with(Vec::new);
            }
            Section::Unsupported => {
                self.unsupported.get_or_insert_with(Vec::new);
            }
        }
    }

    /// Whether the field for `section` has been created.
    pub fn has_section(&self, section: Section) -> bool {
        match section {
            Section::Summary => self.bio.is_some(),
            Section::Education => self.education_experience.is_some(),
            Section::Experience => self.work_experience.is_some(),
            Section::VolunteerExperience => self.volunteer_experience.is_some(),
            Section::Languages => self.languages.is_some(),
            Section::Skills => self.skills.is_some(),
            Section::Unsupported => self.unsupported.is_some(),
        }
    }

    pub(crate) fn bio_mut(&mut self) -> &mut Vec<String> {
        self.bio.get_or_insert_with(Vec::new)
    }

    pub(crate) fn education_mut(&mut self) -> &mut Vec<Education> {
        self.education_experience.get_or_insert_with(Vec::new)
    }

    /// Job list of an Experience or Volunteer Experience section.
    pub(crate) fn jobs_mut(&mut self, section: Section) -> Option<&mut Vec<Job>> {
        match section {
            Section::Experience => Some(self.work_experience.get_or_insert_with(Vec::new)),
            Section::VolunteerExperience => {
                Some(self.volunteer_experience.get_or_insert_with(Vec::new))
            }
            _ => None,
        }
    }

    pub(crate) fn languages_mut(&mut self) -> &mut Vec<Language> {
        self.languages.get_or_insert_with(Vec::new)
    }

    pub(crate) fn skills_mut(&mut self) -> &mut Vec<String> {
        self.skills.get_or_insert_with(Vec::new)
    }

    pub(crate) fn unsupported_mut(&mut self) -> &mut Vec<String> {
        self.unsupported.get_or_insert_with(Vec::new)
    }
}

/// One school entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub school: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,

    /// Comma-separated details left over after degree and dates are taken out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_info: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities_and_societies: Option<String>,
}

impl Education {
    pub fn new(school: impl Into<String>) -> Self {
        Self {
            school: school.into(),
            ..Default::default()
        }
    }
}

/// One position in Experience or Volunteer Experience.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub job_title: String,

    pub organization: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    /// Length of the position as printed, without parentheses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<Vec<String>>,
}

impl Job {
    pub fn new(job_title: impl Into<String>, organization: impl Into<String>) -> Self {
        Self {
            job_title: job_title.into(),
            organization: organization.into(),
            ..Default::default()
        }
    }
}

/// A spoken language with optional proficiency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub language: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<String>,
}

impl Language {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            proficiency: None,
        }
    }
}
