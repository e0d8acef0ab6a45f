//! Admin user management screen

use astro_client::UserRepository;
use shared::error::AppError;
use shared::models::{Role, User, UserId};
use shared::search::UserFilter;
use std::sync::Arc;

use crate::error::{FrontError, FrontResult};
use crate::forms::{FormMode, UserForm};
use crate::notify::{Confirm, Notice, Notifier};

/// Header counters of the users page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    /// Every account not marked `Diblokir`
    pub active: usize,
    pub receptionists: usize,
    pub admins: usize,
}

impl UserStats {
    pub fn from_users(users: &[User]) -> Self {
        users.iter().fold(Self::default(), |mut s, u| {
            s.total += 1;
            if !u.role.is_blocked() {
                s.active += 1;
            }
            match u.role {
                Role::Resepsionis => s.receptionists += 1,
                Role::Admin => s.admins += 1,
                _ => {}
            }
            s
        })
    }
}

pub struct AdminUsersScreen<U> {
    repo: U,
    notifier: Arc<dyn Notifier>,
    users: Vec<User>,
    pub filter: UserFilter,
}

impl<U: UserRepository> AdminUsersScreen<U> {
    pub fn new(repo: U, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            repo,
            notifier,
            users: Vec::new(),
            filter: UserFilter::default(),
        }
    }

    pub async fn mount(&mut self) -> FrontResult<()> {
        match self.repo.list().await {
            Ok(users) => {
                self.users = users;
                Ok(())
            }
            Err(e) => {
                self.users.clear();
                self.notifier
                    .notify(Notice::error(format!("Gagal memuat data pengguna: {e}")));
                Err(e.into())
            }
        }
    }

    async fn refresh(&mut self) {
        match self.repo.list().await {
            Ok(users) => self.users = users,
            Err(e) => {
                tracing::warn!(error = %e, "User refetch failed");
                self.notifier
                    .notify(Notice::error(format!("Gagal memuat ulang data pengguna: {e}")));
            }
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn visible(&self) -> Vec<&User> {
        self.filter.apply(&self.users)
    }

    pub fn stats(&self) -> UserStats {
        UserStats::from_users(&self.users)
    }

    pub fn find(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Form for a new user, or prefilled from a listed one; an unknown id
    /// is reported once
    pub fn open_form(&self, id: Option<&UserId>) -> FrontResult<UserForm> {
        let Some(id) = id else {
            return Ok(UserForm::new(None));
        };
        match self.find(id) {
            Some(user) => Ok(UserForm::new(Some(user))),
            None => {
                let err = AppError::not_found(format!("User {id}"));
                self.notifier.notify(Notice::error(err.message.clone()));
                Err(FrontError::from(err))
            }
        }
    }

    pub async fn save(&mut self, form: &UserForm) -> FrontResult<()> {
        let draft = match form.submit() {
            Ok(draft) => draft,
            Err(e) => {
                self.notifier.notify(Notice::error(e.message.clone()));
                return Err(e.into());
            }
        };

        let (result, done) = match &form.mode {
            FormMode::Create => (self.repo.create(&draft).await, "User created successfully"),
            FormMode::Edit(id) => (self.repo.update(id, &draft).await, "User updated successfully"),
        };
        if let Err(e) = result {
            self.notifier.notify(Notice::error(e.to_string()));
            return Err(e.into());
        }

        self.notifier.notify(Notice::success(done));
        self.refresh().await;
        Ok(())
    }

    pub async fn delete(&mut self, id: &UserId, confirm: &dyn Confirm) -> FrontResult<bool> {
        let name = self
            .find(id)
            .map(|u| u.name.clone())
            .unwrap_or_else(|| id.to_string());
        if !confirm.confirm(&format!("Hapus pengguna \"{name}\"?")) {
            return Ok(false);
        }

        if let Err(e) = self.repo.delete(id).await {
            self.notifier
                .notify(Notice::error(format!("Gagal menghapus pengguna: {e}")));
            return Err(e.into());
        }

        self.notifier.notify(Notice::success("User deleted"));
        self.refresh().await;
        Ok(true)
    }
}
