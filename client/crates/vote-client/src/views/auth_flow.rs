use crate::{ClientError, ClientResult, Route, ViewContext, ViewScope};

use std::sync::Arc;

use log::info;
use tokio::task::JoinHandle;
use vote_core::{Credentials, LoginResponse, Role, Session, SignupRequest};

/// Signup and login screens.
pub struct AuthFlow {
    ctx: ViewContext,
    scope: ViewScope,
}

/// Dashboard redirect scheduled by a successful login.
#[derive(Debug)]
pub struct PendingRedirect {
    route: Route,
    handle: JoinHandle<bool>,
}

impl PendingRedirect {
    pub fn route(&self) -> Route {
        self.route
    }

    /// Wait for the redirect; `false` if it was cancelled before it fired.
    pub async fn wait(self) -> bool {
        self.handle.await.unwrap_or(false)
    }
}

impl AuthFlow {
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            ctx,
            scope: ViewScope::new(),
        }
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    /// Submit a signup. The request is only borrowed, so a failed attempt
    /// leaves the caller's form as it was.
    pub async fn signup(&self, request: &SignupRequest) -> ClientResult<()> {
        match self.scope.run(self.ctx.api.signup(request)).await {
            Ok(_) => {
                info!("Signed up {} as {}", request.name, request.role);
                self.ctx
                    .notifications
                    .success("Signup successful.", "Please login.");
                self.ctx.navigator.navigate(Route::Login);
                Ok(())
            }
            Err(e) => {
                self.ctx.report_failure("Signup failed.", &e);
                Err(e)
            }
        }
    }

    /// Log in, persist the session and schedule the dashboard redirect.
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<PendingRedirect> {
        let result = self
            .scope
            .run(self.ctx.api.login(credentials))
            .await
            .and_then(session_from_response);

        let session = match result {
            Ok(session) => session,
            Err(e) => {
                self.ctx.report_failure("Login failed.", &e);
                return Err(e);
            }
        };

        let route = Route::dashboard_for(session.role);
        if let Err(e) = self.ctx.session.establish(session) {
            self.ctx.report_failure("Login failed.", &e);
            return Err(e);
        }

        self.ctx
            .notifications
            .success("Login successful.", "Welcome back!");

        let navigator = Arc::clone(&self.ctx.navigator);
        let handle = self
            .scope
            .run_after(self.ctx.login_redirect_delay, move || navigator.navigate(route));

        Ok(PendingRedirect { route, handle })
    }
}

/// A login only counts when the backend names a token and a known role.
fn session_from_response(response: LoginResponse) -> ClientResult<Session> {
    let token = match response.token {
        Some(token) if !token.is_empty() => token,
        _ => return Err(ClientError::invalid_login_response("no token in response")),
    };

    let role = match response.role.as_deref().map(str::parse::<Role>) {
        Some(Ok(role)) => role,
        _ => return Err(ClientError::unrecognized_role(response.role)),
    };

    Ok(Session::new(token, role))
}
