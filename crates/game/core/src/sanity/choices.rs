//! Sanity costs of narrative and exploration choices.
//!
//! Only the cost table lives here; which choices are offered and in what
//! order belongs to the story layer.

/// A story or exploration choice with a fixed sanity consequence.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NarrativeChoice {
    // Opening scene
    EnterLibrary,
    ExamineVictims,
    SeekKnowledge,
    // Library approach
    MainEntrance,
    BackEntrance,
    ExamineSymbols,
    // Exploration
    InvestigateAlley,
    ResearchOccult,
    InvestigateRitualCircle,
    PerformRitual,
    // Random events
    StrangeWhispers,
    ShadowyFigure,
    EldritchInsight,
    ProtectiveWard,
}

impl NarrativeChoice {
    /// Signed sanity change; negative values cost sanity.
    pub const fn sanity_delta(self) -> i32 {
        match self {
            Self::EnterLibrary => -5,
            Self::ExamineVictims => -10,
            Self::SeekKnowledge => -15,
            Self::MainEntrance => -3,
            Self::BackEntrance => -2,
            Self::ExamineSymbols => -8,
            Self::InvestigateAlley => -2,
            Self::ResearchOccult => -5,
            Self::InvestigateRitualCircle => -10,
            Self::PerformRitual => -15,
            Self::StrangeWhispers => -5,
            Self::ShadowyFigure => -3,
            Self::EldritchInsight => -8,
            Self::ProtectiveWard => 5,
        }
    }
}
