use crate::{ClientError, ClientResult, ViewContext, ViewScope};

use log::{debug, info};
use vote_core::{AdminFormState, Candidate, CandidateId, FormMode};

/// The admin's screen: candidate list plus one create/update form.
///
/// Mutations re-read the list once they are confirmed by the backend. A
/// failed mutation raises an error notification, keeps the form as it was and
/// does not re-read the list.
pub struct AdminDashboard {
    ctx: ViewContext,
    scope: ViewScope,
    candidates: Vec<Candidate>,
    form: AdminFormState,
    refresh_count: u64,
}

impl AdminDashboard {
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            ctx,
            scope: ViewScope::new(),
            candidates: Vec::new(),
            form: AdminFormState::new(),
            refresh_count: 0,
        }
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn form(&self) -> &AdminFormState {
        &self.form
    }

    /// Field access for the form; the mode only changes through
    /// [`begin_edit`](Self::begin_edit), [`cancel_edit`](Self::cancel_edit)
    /// and completed submissions.
    pub fn form_mut(&mut self) -> &mut AdminFormState {
        &mut self.form
    }

    /// Number of candidate list reads issued so far
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    pub async fn mount(&mut self) -> ClientResult<()> {
        self.refresh().await
    }

    /// Re-read the candidate list. Does nothing without a session token.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        let Some(token) = self.ctx.session.token() else {
            debug!("No session token; skipping candidate fetch");
            return Ok(());
        };

        self.refresh_count += 1;
        let result = self
            .scope
            .run(self.ctx.api.list_candidates(Some(&token)))
            .await;

        match result {
            Ok(candidates) => {
                debug!("Fetched {} candidates", candidates.len());
                self.candidates = candidates;
                Ok(())
            }
            Err(e) => {
                self.ctx.report_failure("Error fetching candidates", &e);
                Err(e)
            }
        }
    }

    /// Load `candidate` into the form for editing. No network call.
    pub fn begin_edit(&mut self, candidate: &Candidate) {
        self.form.begin_edit(candidate);
    }

    /// Like [`begin_edit`](Self::begin_edit), looking the candidate up in the
    /// loaded list.
    pub fn begin_edit_by_id(&mut self, id: &CandidateId) -> ClientResult<()> {
        let candidate = self
            .candidates
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| ClientError::candidate_not_found(id.as_str()))?;
        self.form.begin_edit(&candidate);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.form.reset();
    }

    /// Create or update, depending on the form mode.
    pub async fn submit(&mut self) -> ClientResult<()> {
        let token = self.ctx.session.token();
        let input = self.form.to_input();

        let (result, success_title, failure_title) = match self.form.mode().clone() {
            FormMode::Create => (
                self.scope
                    .run(self.ctx.api.create_candidate(token.as_deref(), &input))
                    .await,
                "Candidate created.",
                "Create candidate failed.",
            ),
            FormMode::Edit { candidate_id } => (
                self.scope
                    .run(
                        self.ctx
                            .api
                            .update_candidate(token.as_deref(), &candidate_id, &input),
                    )
                    .await,
                "Candidate updated.",
                "Update candidate failed.",
            ),
        };

        match result {
            Ok(_) => {
                info!("{} {} ({})", success_title, input.name, input.party);
                self.ctx.notifications.success(success_title, input.name);
                self.form.reset();
                self.refresh_after_mutation().await
            }
            Err(e) => {
                self.ctx.report_failure(failure_title, &e);
                Err(e)
            }
        }
    }

    /// Delete a candidate. Editing that candidate is abandoned.
    pub async fn delete(&mut self, id: &CandidateId) -> ClientResult<()> {
        let token = self.ctx.session.token();
        let result = self
            .scope
            .run(self.ctx.api.delete_candidate(token.as_deref(), id))
            .await;

        match result {
            Ok(()) => {
                info!("Candidate {} deleted", id);
                self.ctx
                    .notifications
                    .success("Candidate deleted.", id.as_str());
                if self.form.selected_candidate_id() == Some(id) {
                    self.form.reset();
                }
                self.refresh_after_mutation().await
            }
            Err(e) => {
                self.ctx.report_failure("Delete candidate failed.", &e);
                Err(e)
            }
        }
    }

    /// The mutation itself succeeded; a failed re-read is already reported.
    async fn refresh_after_mutation(&mut self) -> ClientResult<()> {
        match self.refresh().await {
            Err(e) if e.is_cancelled() => Err(e),
            _ => Ok(()),
        }
    }
}
