use crate::{ClientError, ClientResult, ViewContext, ViewScope};

use log::info;
use vote_core::{Candidate, CandidateId, UserProfile, VoteCount};

/// The voter's screen: candidates, live tallies, profile and password change.
pub struct VoterDashboard {
    ctx: ViewContext,
    scope: ViewScope,
    candidates: Vec<Candidate>,
    vote_counts: Vec<VoteCount>,
    profile: Option<UserProfile>,
    profile_error: Option<String>,
    loading: bool,
    pub current_password: String,
    pub new_password: String,
}

impl VoterDashboard {
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            ctx,
            scope: ViewScope::new(),
            candidates: Vec::new(),
            vote_counts: Vec::new(),
            profile: None,
            profile_error: None,
            loading: true,
            current_password: String::new(),
            new_password: String::new(),
        }
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn vote_counts(&self) -> &[VoteCount] {
        &self.vote_counts
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Why the profile could not be shown, once its read has failed
    pub fn profile_error(&self) -> Option<&str> {
        self.profile_error.as_deref()
    }

    /// True until the profile read has resolved, successfully or not
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Load candidates, tallies and profile concurrently.
    ///
    /// Each read is reported on its own; one failing does not hold back the
    /// others. Returns an error only when the view was closed mid-flight.
    pub async fn mount(&mut self) -> ClientResult<()> {
        let token = self.ctx.session.token();
        let token = token.as_deref();
        let api = &self.ctx.api;

        let (candidates, vote_counts, profile) = self
            .scope
            .run(async {
                Ok::<_, ClientError>(tokio::join!(
                    api.list_candidates(token),
                    api.vote_counts(token),
                    api.profile(token),
                ))
            })
            .await?;

        // each section reports its own failure
        let _ = self.apply_candidates(candidates);
        self.apply_vote_counts(vote_counts);
        let _ = self.apply_profile(profile);

        Ok(())
    }

    /// Re-read only the candidate list.
    pub async fn load_candidates(&mut self) -> ClientResult<()> {
        let token = self.ctx.session.token();
        let result = self
            .scope
            .run(self.ctx.api.list_candidates(token.as_deref()))
            .await;
        match result {
            Err(e) if e.is_cancelled() => Err(e),
            other => self.apply_candidates(other),
        }
    }

    /// Re-read only the profile. Clears the loading gate either way.
    pub async fn load_profile(&mut self) -> ClientResult<()> {
        let token = self.ctx.session.token();
        let result = self
            .scope
            .run(self.ctx.api.profile(token.as_deref()))
            .await;
        match result {
            Err(e) if e.is_cancelled() => Err(e),
            other => self.apply_profile(other),
        }
    }

    /// Re-read the tallies. A failed read leaves an empty list.
    pub async fn refresh_vote_counts(&mut self) -> ClientResult<()> {
        let token = self.ctx.session.token();
        let result = self
            .scope
            .run(self.ctx.api.vote_counts(token.as_deref()))
            .await;

        match result {
            Ok(counts) => {
                self.vote_counts = counts;
                Ok(())
            }
            Err(e) if e.is_cancelled() => Err(e),
            Err(e) => {
                self.vote_counts_failed(&e);
                Err(e)
            }
        }
    }

    fn apply_candidates(&mut self, result: ClientResult<Vec<Candidate>>) -> ClientResult<()> {
        match result {
            Ok(candidates) => {
                self.candidates = candidates;
                Ok(())
            }
            Err(e) => {
                self.ctx.report_load_failure(
                    "Error fetching candidates",
                    "Unable to load candidates. Please try again later.",
                    &e,
                );
                Err(e)
            }
        }
    }

    fn apply_vote_counts(&mut self, result: ClientResult<Vec<VoteCount>>) {
        match result {
            Ok(counts) => self.vote_counts = counts,
            Err(e) => self.vote_counts_failed(&e),
        }
    }

    fn apply_profile(&mut self, result: ClientResult<UserProfile>) -> ClientResult<()> {
        self.loading = false;
        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                self.profile_error = None;
                Ok(())
            }
            Err(e) => {
                self.profile_error = Some(e.user_message());
                self.ctx.report_load_failure(
                    "Error fetching user profile",
                    "Unable to load user profile. Please try again later.",
                    &e,
                );
                Err(e)
            }
        }
    }

    fn vote_counts_failed(&mut self, err: &ClientError) {
        self.ctx.report_load_failure(
            "Error fetching vote counts",
            "Unable to load vote counts. Please try again later.",
            err,
        );
        self.vote_counts.clear();
    }

    /// Cast a vote, then re-read the tallies.
    ///
    /// Every call issues its own request; repeated calls are not collapsed.
    pub async fn vote(&mut self, candidate_id: &CandidateId) -> ClientResult<()> {
        let token = self.ctx.session.token();
        let result = self
            .scope
            .run(self.ctx.api.vote(token.as_deref(), candidate_id))
            .await;

        match result {
            Ok(()) => {
                info!("Vote recorded for candidate {}", candidate_id);
                self.ctx
                    .notifications
                    .success("Vote successful!", "Your vote has been recorded.");
                // refresh failures are reported by refresh_vote_counts
                let _ = self.refresh_vote_counts().await;
                Ok(())
            }
            Err(e) => {
                self.ctx.report_failure("Vote failed.", &e);
                Err(e)
            }
        }
    }

    /// Submit the password fields. They are cleared only on success.
    pub async fn change_password(&mut self) -> ClientResult<()> {
        let token = self.ctx.session.token();
        let result = self
            .scope
            .run(self.ctx.api.change_password(
                token.as_deref(),
                &self.current_password,
                &self.new_password,
            ))
            .await;

        match result {
            Ok(()) => {
                self.current_password.clear();
                self.new_password.clear();
                self.ctx.notifications.success(
                    "Password updated!",
                    "Your password has been changed successfully.",
                );
                Ok(())
            }
            Err(e) => {
                self.ctx.report_failure("Password update failed.", &e);
                Err(e)
            }
        }
    }
}
