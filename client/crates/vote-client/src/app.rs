use crate::{
    AdminDashboard, ApiClient, AuthFlow, ClientResult, FileSessionStore, Navigator,
    NotificationCenter, Route, SessionContext, SessionStore, ViewContext, VoterDashboard,
};

use std::sync::Arc;
use std::time::Duration;

use log::info;
use vote_config::Config;

/// One client instance: shared services plus factories for its views.
pub struct App {
    ctx: ViewContext,
}

impl App {
    /// Build the client from configuration, restoring any persisted session.
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        let api = ApiClient::from_config(&config.api)?;
        let store = FileSessionStore::new(config.session_path()?);
        info!("Session file: {}", store.path().display());

        Self::with_parts(
            api,
            Box::new(store),
            config.notifications.duration(),
            config.auth.login_redirect_delay(),
        )
    }

    pub fn with_parts(
        api: ApiClient,
        store: Box<dyn SessionStore>,
        notification_duration: Duration,
        login_redirect_delay: Duration,
    ) -> ClientResult<Self> {
        let session = SessionContext::restore(store)?;
        let start = Self::landing_route_for(&session);

        Ok(Self {
            ctx: ViewContext {
                api: Arc::new(api),
                session: Arc::new(session),
                notifications: Arc::new(NotificationCenter::new(notification_duration)),
                navigator: Arc::new(Navigator::new(start)),
                login_redirect_delay,
            },
        })
    }

    pub fn new(ctx: ViewContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ViewContext {
        &self.ctx
    }

    pub fn session(&self) -> &SessionContext {
        &self.ctx.session
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.ctx.notifications
    }

    pub fn navigator(&self) -> &Navigator {
        &self.ctx.navigator
    }

    pub fn auth_flow(&self) -> AuthFlow {
        AuthFlow::new(self.ctx.clone())
    }

    pub fn voter_dashboard(&self) -> VoterDashboard {
        VoterDashboard::new(self.ctx.clone())
    }

    pub fn admin_dashboard(&self) -> AdminDashboard {
        AdminDashboard::new(self.ctx.clone())
    }

    /// Drop the session and go back to the login screen.
    pub fn logout(&self) -> ClientResult<()> {
        self.ctx.session.logout()?;
        self.ctx.navigator.navigate(Route::Login);
        Ok(())
    }

    /// Where a freshly started client should land
    pub fn landing_route(&self) -> Route {
        Self::landing_route_for(&self.ctx.session)
    }

    fn landing_route_for(session: &SessionContext) -> Route {
        match session.role() {
            Some(role) => Route::dashboard_for(role),
            None => Route::Signup,
        }
    }
}
