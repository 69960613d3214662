use chrono::Utc;
use model::entities::user;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};
use tracing::{debug, info, instrument, trace, warn};

use crate::email::normalize_email;
use crate::error::{AccountError, Result};
use crate::password::{make_password, PasswordExt};

/// Additional fields accepted when creating a user.
///
/// Everything defaults to empty names and no privileges, so a plain
/// `NewUser::default()` produces an inactive regular account.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub paternal_surname: String,
    pub maternal_surname: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// The only sanctioned way to create accounts.
///
/// Emails are canonicalized and passwords hashed before anything reaches the
/// store. All other constraints (unique email, lengths) are left to the
/// database and surface as [`AccountError`]s.
#[derive(Clone, Debug)]
pub struct UserManager {
    db: DatabaseConnection,
}

impl UserManager {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Creates and stores a user with the given email and password.
    ///
    /// Fails with [`AccountError::EmptyEmail`] before touching the store when
    /// the email is blank. Blank includes whitespace-only input, which a plain
    /// non-empty check would let through. A `None` password leaves the
    /// account without a usable password.
    #[instrument(skip(self, password, extra))]
    pub async fn create_user(
        &self,
        email: &str,
        password: Option<&str>,
        extra: NewUser,
    ) -> Result<user::Model> {
        trace!("Entering create_user");
        if email.trim().is_empty() {
            warn!("Refusing to create a user without an email address");
            return Err(AccountError::EmptyEmail);
        }

        let email = normalize_email(email);
        debug!("Normalized email: {}", email);

        let new_user = user::ActiveModel {
            email: Set(email),
            name: Set(extra.name),
            paternal_surname: Set(extra.paternal_surname),
            maternal_surname: Set(extra.maternal_surname),
            password: Set(make_password(password)?),
            last_login: Set(None),
            is_active: Set(extra.is_active),
            is_staff: Set(extra.is_staff),
            is_superuser: Set(extra.is_superuser),
            ..Default::default()
        };

        let user = new_user.insert(&self.db).await?;
        info!(
            "User created successfully with ID: {}, email: {}",
            user.id, user.email
        );
        Ok(user)
    }

    /// Creates a user and promotes it to an active staff superuser.
    #[instrument(skip(self, password))]
    pub async fn create_superuser(&self, email: &str, password: &str) -> Result<user::Model> {
        let user = self
            .create_user(email, Some(password), NewUser::default())
            .await?;

        let mut promoted = user.into_active_model();
        promoted.is_staff = Set(true);
        promoted.is_superuser = Set(true);
        promoted.is_active = Set(true);
        let user = promoted.update(&self.db).await?;

        info!("Superuser {} created with ID: {}", user.email, user.id);
        Ok(user)
    }

    /// Looks a user up by the login identifier, matched exactly.
    pub async fn get_by_natural_key(&self, email: &str) -> Result<Option<user::Model>> {
        Ok(user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    /// Verifies credentials and records the login time.
    ///
    /// Returns `Ok(None)` for an unknown email, a wrong password or an
    /// inactive account.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Option<user::Model>> {
        let Some(user) = self.get_by_natural_key(&normalize_email(email)).await? else {
            debug!("No user with this email");
            return Ok(None);
        };

        if !user.check_password(password) {
            debug!("Password mismatch for user {}", user.id);
            return Ok(None);
        }
        if !user.is_active {
            debug!("User {} is not active", user.id);
            return Ok(None);
        }

        let mut logged_in = user.into_active_model();
        logged_in.last_login = Set(Some(Utc::now()));
        let user = logged_in.update(&self.db).await?;
        info!("User {} authenticated", user.id);
        Ok(Some(user))
    }

    /// Replaces the stored password. `None` makes the password unusable.
    #[instrument(skip(self, password))]
    pub async fn set_password(&self, user_id: i32, password: Option<&str>) -> Result<user::Model> {
        let user = user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or(AccountError::UserNotFound(user_id))?;

        let mut changed = user.into_active_model();
        changed.password = Set(make_password(password)?);
        Ok(changed.update(&self.db).await?)
    }
}
