use crate::{Candidate, CandidateId, CandidateInput};

/// Whether the admin form creates a new candidate or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit { candidate_id: CandidateId },
}

/// The single reusable buffer behind the admin create/update form.
///
/// The selected candidate id lives inside [`FormMode::Edit`], so it exists
/// exactly when the form is in edit mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminFormState {
    pub name: String,
    pub party: String,
    pub age: u32,
    mode: FormMode,
}

impl AdminFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn edit_mode(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn selected_candidate_id(&self) -> Option<&CandidateId> {
        match &self.mode {
            FormMode::Edit { candidate_id } => Some(candidate_id),
            FormMode::Create => None,
        }
    }

    /// Load `candidate` into the form and switch to edit mode.
    pub fn begin_edit(&mut self, candidate: &Candidate) {
        self.name = candidate.name.clone();
        self.party = candidate.party.clone();
        self.age = candidate.age;
        self.mode = FormMode::Edit {
            candidate_id: candidate.id.clone(),
        };
    }

    /// Empty every field and return to create mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Request body for the current field values.
    pub fn to_input(&self) -> CandidateInput {
        CandidateInput {
            name: self.name.clone(),
            party: self.party.clone(),
            age: self.age,
        }
    }
}
