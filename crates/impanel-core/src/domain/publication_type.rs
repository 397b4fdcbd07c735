//! Publication-type catalogue for the type filter
//!
//! Each entry carries a wire value (sent in search criteria) and a
//! display label (shown in the type filter, and what the service
//! returns in `Dataset.publication_type`).

/// Publication type of a dataset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublicationType {
    None,
    AnnotationCollection,
    Book,
    BookSection,
    ConferencePaper,
    DataManagementPlan,
    JournalArticle,
    Patent,
    Preprint,
    ProjectDeliverable,
    ProjectMilestone,
    Proposal,
    Report,
    SoftwareDocumentation,
    TaxonomicTreatment,
    TechnicalNote,
    Thesis,
    WorkingPaper,
    Other,
}

impl PublicationType {
    /// Wire value sent in search criteria
    pub fn value(&self) -> &'static str {
        match self {
            PublicationType::None => "none",
            PublicationType::AnnotationCollection => "annotationcollection",
            PublicationType::Book => "book",
            PublicationType::BookSection => "section",
            PublicationType::ConferencePaper => "conferencepaper",
            PublicationType::DataManagementPlan => "datamanagementplan",
            PublicationType::JournalArticle => "article",
            PublicationType::Patent => "patent",
            PublicationType::Preprint => "preprint",
            PublicationType::ProjectDeliverable => "deliverable",
            PublicationType::ProjectMilestone => "milestone",
            PublicationType::Proposal => "proposal",
            PublicationType::Report => "report",
            PublicationType::SoftwareDocumentation => "softwaredocumentation",
            PublicationType::TaxonomicTreatment => "taxonomictreatment",
            PublicationType::TechnicalNote => "technicalnote",
            PublicationType::Thesis => "thesis",
            PublicationType::WorkingPaper => "workingpaper",
            PublicationType::Other => "other",
        }
    }

    /// Visible label shown in the type select and on card badges
    pub fn label(&self) -> &'static str {
        match self {
            PublicationType::None => "None",
            PublicationType::AnnotationCollection => "Annotation Collection",
            PublicationType::Book => "Book",
            PublicationType::BookSection => "Book Section",
            PublicationType::ConferencePaper => "Conference Paper",
            PublicationType::DataManagementPlan => "Data Management Plan",
            PublicationType::JournalArticle => "Journal Article",
            PublicationType::Patent => "Patent",
            PublicationType::Preprint => "Preprint",
            PublicationType::ProjectDeliverable => "Project Deliverable",
            PublicationType::ProjectMilestone => "Project Milestone",
            PublicationType::Proposal => "Proposal",
            PublicationType::Report => "Report",
            PublicationType::SoftwareDocumentation => "Software Documentation",
            PublicationType::TaxonomicTreatment => "Taxonomic Treatment",
            PublicationType::TechnicalNote => "Technical Note",
            PublicationType::Thesis => "Thesis",
            PublicationType::WorkingPaper => "Working Paper",
            PublicationType::Other => "Other",
        }
    }

    /// Look up a catalogue entry by wire value
    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.value() == value)
    }

    /// Look up a catalogue entry by visible label.
    ///
    /// The input is trimmed before matching; badge text can carry
    /// surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::all().iter().copied().find(|t| t.label() == label)
    }

    /// All catalogue entries in select-option order
    pub fn all() -> &'static [PublicationType] {
        &[
            PublicationType::None,
            PublicationType::AnnotationCollection,
            PublicationType::Book,
            PublicationType::BookSection,
            PublicationType::ConferencePaper,
            PublicationType::DataManagementPlan,
            PublicationType::JournalArticle,
            PublicationType::Patent,
            PublicationType::Preprint,
            PublicationType::ProjectDeliverable,
            PublicationType::ProjectMilestone,
            PublicationType::Proposal,
            PublicationType::Report,
            PublicationType::SoftwareDocumentation,
            PublicationType::TaxonomicTreatment,
            PublicationType::TechnicalNote,
            PublicationType::Thesis,
            PublicationType::WorkingPaper,
            PublicationType::Other,
        ]
    }
}

impl std::fmt::Display for PublicationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
