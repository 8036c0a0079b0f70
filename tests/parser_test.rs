//! End-to-end tests for profile parsing.

use linkedin_pdf_to_json::{
    parse_chunks, parse_chunks_with_options, Chunk, Education, Error, Job, Language, Locale,
    ParseOptions, Profile,
};

fn line(text: &str, y: f64) -> Chunk {
    Chunk::new(text).at(y)
}

fn bold(text: &str, y: f64) -> Chunk {
    Chunk::bold(text).at(y)
}

fn full_profile() -> Vec<Chunk> {
    vec![
        bold("Jane Doe", 0.0),
        line("Senior Engineer at Acme", 1.0),
        line("jane@example.com", 2.0),
        bold("Summary", 10.0),
        line("Engineer with a ", 11.0),
        line("taste for parsers.", 12.0),
        bold("Experience", 20.0),
        bold("Senior Engineer  at   Acme Corp", 21.0),
        line("May 2012  -  Present  ", 22.0),
        line("(4 years 1 month)", 23.0),
        line("• Led the platform team", 24.0),
        line(" of five engineers", 25.0),
        line("• Shipped the v2 API", 26.0),
        bold("Intern  at   Initech", 28.0),
        line("June 2011  -  August 2011  ", 29.0),
        line("(3 months)", 30.0),
        line("Page", 90.0),
        line("1", 91.0),
        line("Wrote tests.", 100.0),
        bold("Volunteer Experience", 101.0),
        bold("Mentor  at   Code Club", 102.0),
        line("June 2015  -  June 2016", 103.0),
        line("Taught kids Rust.", 104.0),
        bold("Education", 110.0),
        bold("State University", 111.0),
        line("Bachelor of Science (B.S.), Computer Science, 2008 - 2012", 112.0),
        bold("Languages", 120.0),
        line("English", 121.0),
        line("(Native or bilingual proficiency)", 122.0),
        line("Portuguese", 123.0),
        bold("Skills & Expertise", 130.0),
        line("Rust", 131.0),
        line("Parsing", 132.0),
        line("Distributed Systems", 133.0),
        bold("Honors and Awards", 140.0),
        line(".", 141.0),
        line("Dean's list", 142.0),
        line(".", 143.0),
        line("Jane Doe", 150.0),
        line("Senior Engineer at Acme", 151.0),
        line("\"Jane is great.\"", 152.0),
        line("Contact Jane Doe on LinkedIn", 160.0),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_full_profile() {
    let profile = parse_chunks(full_profile()).unwrap();

    assert_eq!(profile.name, "Jane Doe");
    assert_eq!(profile.current_job, "Senior Engineer at Acme");
    assert_eq!(profile.email.as_deref(), Some("jane@example.com"));
    assert_eq!(
        profile.bio,
        Some(strings(&["Engineer with a taste for parsers."]))
    );

    let jobs = profile.work_experience.as_ref().unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(
        jobs[0],
        Job {
            job_title: "Senior Engineer".to_string(),
            organization: "Acme Corp".to_string(),
            start_date: Some("May 2012".to_string()),
            end_date: Some("Present".to_string()),
            duration: Some("4 years 1 month".to_string()),
            responsibilities: Some(strings(&[
                "• Led the platform team of five engineers",
                "• Shipped the v2 API",
            ])),
        }
    );
    assert_eq!(jobs[1].job_title, "Intern");
    assert_eq!(jobs[1].organization, "Initech");
    assert_eq!(jobs[1].end_date.as_deref(), Some("August 2011"));
    assert_eq!(jobs[1].duration.as_deref(), Some("3 months"));
    assert_eq!(jobs[1].responsibilities, Some(strings(&["Wrote tests."])));

    let volunteer = profile.volunteer_experience.as_ref().unwrap();
    assert_eq!(volunteer.len(), 1);
    assert_eq!(volunteer[0].organization, "Code Club");
    assert_eq!(volunteer[0].start_date.as_deref(), Some("June 2015"));
    assert_eq!(volunteer[0].duration, None);
    assert_eq!(
        volunteer[0].responsibilities,
        Some(strings(&["Taught kids Rust."]))
    );

    assert_eq!(
        profile.education_experience,
        Some(vec![Education {
            school: "State University".to_string(),
            degree: Some("Bachelor of Science (B.S.)".to_string()),
            basic_info: Some(strings(&["Computer Science"])),
            start_date: Some("2008".to_string()),
            end_date: Some("2012".to_string()),
            grade: None,
            activities_and_societies: None,
        }])
    );

    let mut english = Language::new("English");
    english.proficiency = Some("(Native or bilingual proficiency)".to_string());
    assert_eq!(
        profile.languages,
        Some(vec![english, Language::new("Portuguese")])
    );

    assert_eq!(
        profile.skills,
        Some(strings(&["Rust", "Parsing", "Distributed Systems"]))
    );

    // the owner's name followed by their headline opens the recommendations block
    assert_eq!(
        profile.unsupported,
        Some(strings(&[
            "Honors and Awards",
            ".",
            "Dean's list",
            "Jane Doe",
            "Senior Engineer at Acme",
            "\"Jane is great.\"",
        ]))
    );
}

#[test]
fn test_minimal_profile() {
    let chunks = vec![
        Chunk::new("Jane Doe"),
        Chunk::new("Engineer"),
        Chunk::new("jane@example.com"),
        Chunk::new("Skills & Expertise"),
        Chunk::new("Rust"),
        Chunk::new("Go"),
        Chunk::new("SQL"),
        Chunk::new("Contact Jane Doe on LinkedIn"),
    ];
    let profile = parse_chunks(chunks).unwrap();
    assert_eq!(
        profile,
        Profile {
            name: "Jane Doe".to_string(),
            current_job: "Engineer".to_string(),
            email: Some("jane@example.com".to_string()),
            skills: Some(strings(&["Rust", "Go", "SQL"])),
            ..Default::default()
        }
    );
}

#[test]
fn test_every_header_yields_a_key() {
    let chunks = vec![
        Chunk::new("Jane Doe"),
        Chunk::new("Engineer"),
        Chunk::new("Summary"),
        Chunk::new("Experience"),
        Chunk::new("Volunteer Experience"),
        Chunk::new("Education"),
        Chunk::new("Languages"),
        Chunk::new("Skills & Expertise"),
        Chunk::new("Contact Jane Doe on LinkedIn"),
    ];
    let profile = parse_chunks(chunks).unwrap();
    assert_eq!(profile.email, None);
    assert_eq!(profile.bio, Some(vec![]));
    assert_eq!(profile.work_experience, Some(vec![]));
    assert_eq!(profile.volunteer_experience, Some(vec![]));
    assert_eq!(profile.education_experience, Some(vec![]));
    assert_eq!(profile.languages, Some(vec![]));
    assert_eq!(profile.skills, Some(vec![]));
    assert_eq!(profile.unsupported, None);
}

#[test]
fn test_repeated_section_appends() {
    let chunks = vec![
        Chunk::new("Jane Doe"),
        Chunk::new("Engineer"),
        Chunk::new("Skills & Expertise"),
        Chunk::new("Rust"),
        Chunk::new("Projects"),
        Chunk::new("Compiler"),
        Chunk::new("Skills & Expertise"),
        Chunk::new("Go"),
        Chunk::new("Contact Jane Doe on LinkedIn"),
    ];
    let profile = parse_chunks(chunks).unwrap();
    assert_eq!(profile.skills, Some(strings(&["Rust", "Go"])));
    assert_eq!(profile.unsupported, Some(strings(&["Projects", "Compiler"])));
}

#[test]
fn test_portuguese_profile() {
    let chunks = vec![
        line("Maria Silva", 0.0),
        line("Engenheira de Software", 1.0),
        line("maria@example.com", 2.0),
        bold("Experiência", 10.0),
        bold("Engenheira  na   Empresa", 11.0),
        line("janeiro de 2014  -  Presente", 12.0),
        line("(2 anos 3 meses)", 13.0),
        line("Construí sistemas.", 14.0),
        bold("Idiomas", 20.0),
        line("Português", 21.0),
        line("(Nível nativo ou bilíngue)", 22.0),
        line("Página", 90.0),
        line("1", 91.0),
        line("Entre em contato com Maria Silva no LinkedIn", 95.0),
    ];

    let options = ParseOptions::new().with_locale_tag("pt-BR");
    let profile = parse_chunks_with_options(chunks.clone(), options).unwrap();
    let job = &profile.work_experience.as_ref().unwrap()[0];
    assert_eq!(job.job_title, "Engenheira");
    assert_eq!(job.organization, "Empresa");
    assert_eq!(job.start_date.as_deref(), Some("January 2014"));
    assert_eq!(job.end_date.as_deref(), Some("Present"));
    assert_eq!(job.duration.as_deref(), Some("2 years 3 months"));
    assert_eq!(
        profile.languages.as_ref().unwrap()[0].proficiency.as_deref(),
        Some("(Nível nativo ou bilíngue)")
    );

    let options = ParseOptions::new()
        .with_locale(Locale::bundled("pt").unwrap())
        .with_vocabulary_normalization(false);
    let profile = parse_chunks_with_options(chunks, options).unwrap();
    let job = &profile.work_experience.as_ref().unwrap()[0];
    assert_eq!(job.start_date.as_deref(), Some("janeiro de 2014"));
    assert_eq!(job.duration.as_deref(), Some("2 anos 3 meses"));
}

#[test]
fn test_portuguese_education_years() {
    let chunks = vec![
        Chunk::new("Maria Silva"),
        Chunk::new("Engenheira de Software"),
        Chunk::new("Formação acadêmica"),
        Chunk::bold("Universidade de São Paulo"),
        Chunk::new("Bacharelado, Engenharia, janeiro de 2010 - dezembro de 2014"),
        Chunk::new("Entre em contato com Maria Silva no LinkedIn"),
    ];

    let options = ParseOptions::new().with_locale_tag("pt");
    let profile = parse_chunks_with_options(chunks.clone(), options).unwrap();
    let education = &profile.education_experience.as_ref().unwrap()[0];
    assert_eq!(education.degree.as_deref(), Some("Bacharelado"));
    assert_eq!(education.basic_info, Some(strings(&["Engenharia"])));
    assert_eq!(education.start_date.as_deref(), Some("January 2010"));
    assert_eq!(education.end_date.as_deref(), Some("December 2014"));

    let options = ParseOptions::new()
        .with_locale_tag("pt")
        .with_vocabulary_normalization(false);
    let profile = parse_chunks_with_options(chunks, options).unwrap();
    let education = &profile.education_experience.as_ref().unwrap()[0];
    assert_eq!(education.start_date.as_deref(), Some("janeiro de 2010"));
    assert_eq!(education.end_date.as_deref(), Some("dezembro de 2014"));
}

#[test]
fn test_token_error_names_profile() {
    let chunks = vec![
        Chunk::new("Jane Doe"),
        Chunk::new("Engineer"),
        Chunk::new("Education"),
        Chunk::new("not a school"),
        Chunk::new("Contact Jane Doe on LinkedIn"),
    ];
    let err = parse_chunks(chunks).unwrap_err();
    assert!(err.is_grammar_error());
    assert!(matches!(err, Error::Token { .. }));
    assert_eq!(
        err.to_string(),
        "TokenError: could not successfully set the token for the following text chunk: \
         'not a school' (profile: Jane Doe)"
    );
}

#[test]
fn test_structural_error_on_title_without_separator() {
    let chunks = vec![
        Chunk::new("Jane Doe"),
        Chunk::new("Engineer"),
        Chunk::new("Experience"),
        Chunk::bold("Freelance  at   Acme  at   Initech"),
        Chunk::new("Contact Jane Doe on LinkedIn"),
    ];
    let err = parse_chunks(chunks).unwrap_err();
    assert!(matches!(err, Error::Parsing { .. }));
    assert!(err.to_string().starts_with("ParsingError:"));
}

#[test]
fn test_structural_error_on_bad_duration() {
    let chunks = vec![
        Chunk::new("Jane Doe"),
        Chunk::new("Engineer"),
        Chunk::new("Experience"),
        Chunk::bold("Engineer  at   Acme"),
        Chunk::new("May 2012  -  Present"),
        Chunk::new("(1 year) (2 months)"),
        Chunk::new("Contact Jane Doe on LinkedIn"),
    ];
    let err = parse_chunks(chunks).unwrap_err();
    assert!(matches!(
        err,
        Error::Parsing { ref text, .. } if text == "(1 year) (2 months)"
    ));
}

#[test]
fn test_missing_current_job() {
    let chunks = vec![Chunk::new("Jane Doe"), Chunk::new("trailer")];
    assert!(matches!(
        parse_chunks(chunks),
        Err(Error::MissingChunk("current job"))
    ));
}

#[test]
fn test_newline_gap_option() {
    let chunks = vec![
        line("Jane Doe", 0.0),
        line("Engineer", 1.0),
        line("Summary", 10.0),
        line("First.", 11.0),
        line("Second.", 14.0),
        line("trailer", 20.0),
    ];
    let profile = parse_chunks(chunks.clone()).unwrap();
    assert_eq!(profile.bio, Some(strings(&["First.", "Second."])));

    let options = ParseOptions::new().with_newline_gap(5.0);
    let profile = parse_chunks_with_options(chunks, options).unwrap();
    assert_eq!(profile.bio, Some(strings(&["First.Second."])));
}
