//! Admin login page

use astro_client::{AstroClient, Session};
use shared::error::AppError;
use std::sync::Arc;

use crate::error::FrontResult;
use crate::notify::{Notice, Notifier};
use crate::routing::Route;

pub struct LoginScreen {
    notifier: Arc<dyn Notifier>,
    pub email: String,
    pub password: String,
}

impl LoginScreen {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            email: String::new(),
            password: String::new(),
        }
    }

    fn check(&self) -> Result<(), AppError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AppError::validation("Email dan password wajib diisi"));
        }
        Ok(())
    }

    /// Log in; on success the client carries the session token and the
    /// returned route is the dashboard
    pub async fn submit(&self, client: &mut AstroClient) -> FrontResult<(Session, Route)> {
        if let Err(e) = self.check() {
            self.notifier.notify(Notice::error(e.message.clone()));
            return Err(e.into());
        }

        match client.login(self.email.trim(), &self.password).await {
            Ok(session) => {
                let message = if session.message.is_empty() {
                    "Login berhasil".to_string()
                } else {
                    session.message.clone()
                };
                self.notifier.notify(Notice::success(message));
                Ok((session, Route::AdminDashboard))
            }
            Err(e) => {
                self.notifier.notify(Notice::error(e.to_string()));
                Err(e.into())
            }
        }
    }
}
