use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{error, info, instrument, warn};

use crate::model::user::User;
use crate::repository::user_repo::{MongoUserRepository, UserRepository};
use crate::util::error::ServiceError;
use crate::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl, TokenPair};
use crate::util::password::{PasswordUtils, PasswordUtilsImpl};

const GENERATED_PASSWORD_LENGTH: usize = 12;

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithoutPassword {
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub role: String,
    pub active: bool,
    pub blocked: bool,
    pub must_change_password: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<User> for UserWithoutPassword {
    fn from(user: User) -> Self {
        UserWithoutPassword {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            active: user.active,
            blocked: user.blocked,
            must_change_password: user.must_change_password,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAuthResponse {
    pub user: UserWithoutPassword,
    pub tokens: TokenPair,
}

/// Returned once at account creation; the generated password is not
/// recoverable afterwards.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUserResponse {
    pub user: UserWithoutPassword,
    pub generated_password: String,
}

#[async_trait]
pub trait UserService: Send + Sync {
    async fn register(&self, user: User, password: String) -> Result<UserWithoutPassword, ServiceError>;
    async fn login(&self, email: String, password: String) -> Result<UserAuthResponse, ServiceError>;
    async fn refresh_token(&self, refresh_token: String) -> Result<TokenPair, ServiceError>;
    async fn create_user(&self, name: String, email: String) -> Result<CreatedUserResponse, ServiceError>;
    async fn list_users(&self) -> Result<Vec<UserWithoutPassword>, ServiceError>;
    async fn update_flags(
        &self,
        id: ObjectId,
        active: Option<bool>,
        blocked: Option<bool>,
    ) -> Result<UserWithoutPassword, ServiceError>;
    async fn change_password(
        &self,
        user_id: &str,
        current_password: String,
        new_password: String,
    ) -> Result<(), ServiceError>;
    /// Re-checks the account behind a validated token. Tokens outlive
    /// flag flips, so blocked/deactivated users are cut off here.
    async fn verify_active(&self, user_id: &str) -> Result<(), ServiceError>;
}

pub struct UserServiceImpl {
    pub user_repo: Arc<MongoUserRepository>,
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<MongoUserRepository>, jwt_utils: Arc<JwtTokenUtilsImpl>) -> Self {
        Self { user_repo, jwt_utils }
    }

    fn check_account_usable(user: &User) -> Result<(), ServiceError> {
        if user.blocked {
            return Err(ServiceError::Forbidden("Account is blocked".to_string()));
        }
        if !user.active {
            return Err(ServiceError::Forbidden("Account is inactive".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    #[instrument(skip(self, user, password), fields(email = %user.email))]
    async fn register(&self, mut user: User, password: String) -> Result<UserWithoutPassword, ServiceError> {
        info!("Registering user");
        if self.user_repo.find_by_email(&user.email).await?.is_some() {
            return Err(ServiceError::Conflict("A user with this email already exists".to_string()));
        }
        let hash = PasswordUtilsImpl::hash_password(&password)
            .map_err(|e| ServiceError::InternalError(format!("Password hash error: {}", e)))?;
        user.password_hash = hash;
        let inserted = self.user_repo.insert(user).await?;
        info!("User registered");
        Ok(inserted.into())
    }

    #[instrument(skip(self, password), fields(email = %email))]
    async fn login(&self, email: String, password: String) -> Result<UserAuthResponse, ServiceError> {
        info!("User login attempt");
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ServiceError::InvalidInput("Invalid credentials".to_string()))?;

        let valid = PasswordUtilsImpl::verify_password(&password, &user.password_hash)
            .map_err(|e| ServiceError::InternalError(format!("Password verify error: {}", e)))?;
        if !valid {
            warn!("Invalid credentials for user: {}", email);
            return Err(ServiceError::InvalidInput("Invalid credentials".to_string()));
        }
        Self::check_account_usable(&user)?;

        let tokens = self
            .jwt_utils
            .generate_token_pair(
                &user.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
                &user.email,
                &user.role,
            )
            .map_err(|e| ServiceError::InternalError(format!("JWT error: {}", e)))?;
        info!("User logged in successfully");
        Ok(UserAuthResponse { user: user.into(), tokens })
    }

    #[instrument(skip(self, refresh_token))]
    async fn refresh_token(&self, refresh_token: String) -> Result<TokenPair, ServiceError> {
        info!("Refreshing token");
        let claims = self
            .jwt_utils
            .validate_refresh_token(&refresh_token)
            .map_err(|e| ServiceError::InvalidInput(format!("Invalid refresh token: {}", e)))?;
        self.verify_active(&claims.sub).await?;
        let tokens = self
            .jwt_utils
            .generate_token_pair(&claims.sub, &claims.email, &claims.role)
            .map_err(|e| ServiceError::InternalError(format!("JWT error: {}", e)))?;
        Ok(tokens)
    }

    #[instrument(skip(self), fields(email = %email))]
    async fn create_user(&self, name: String, email: String) -> Result<CreatedUserResponse, ServiceError> {
        info!("Creating back-office user");
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ServiceError::Conflict("A user with this email already exists".to_string()));
        }
        let generated_password = PasswordUtilsImpl::generate_random_password(GENERATED_PASSWORD_LENGTH);
        let hash = PasswordUtilsImpl::hash_password(&generated_password)
            .map_err(|e| ServiceError::InternalError(format!("Password hash error: {}", e)))?;
        let user = User {
            id: None,
            name,
            email,
            password_hash: hash,
            role: "admin".to_string(),
            active: true,
            blocked: false,
            must_change_password: true,
            created_at: None,
            updated_at: None,
        };
        let inserted = self.user_repo.insert(user).await?;
        info!("User created with generated password");
        Ok(CreatedUserResponse { user: inserted.into(), generated_password })
    }

    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<UserWithoutPassword>, ServiceError> {
        let users = self.user_repo.list().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self), fields(user_id = %id))]
    async fn update_flags(
        &self,
        id: ObjectId,
        active: Option<bool>,
        blocked: Option<bool>,
    ) -> Result<UserWithoutPassword, ServiceError> {
        info!("Updating user flags");
        let mut user = self
            .user_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;
        if let Some(active) = active {
            user.active = active;
        }
        if let Some(blocked) = blocked {
            user.blocked = blocked;
        }
        let updated = self.user_repo.update(id, user).await?;
        Ok(updated.into())
    }

    #[instrument(skip(self, current_password, new_password), fields(user_id = %user_id))]
    async fn change_password(
        &self,
        user_id: &str,
        current_password: String,
        new_password: String,
    ) -> Result<(), ServiceError> {
        info!("Changing user password");
        let id = ObjectId::parse_str(user_id)
            .map_err(|_| ServiceError::InvalidInput("Invalid user id in token".to_string()))?;
        let mut user = self
            .user_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;

        let valid = PasswordUtilsImpl::verify_password(&current_password, &user.password_hash)
            .map_err(|e| ServiceError::InternalError(format!("Password verify error: {}", e)))?;
        if !valid {
            error!("Current password mismatch for user: {}", user_id);
            return Err(ServiceError::InvalidInput("Current password is incorrect".to_string()));
        }
        if let Err(problems) = PasswordUtilsImpl::validate_password_strength(&new_password) {
            return Err(ServiceError::InvalidInput(problems.join("; ")));
        }

        user.password_hash = PasswordUtilsImpl::hash_password(&new_password)
            .map_err(|e| ServiceError::InternalError(format!("Password hash error: {}", e)))?;
        user.must_change_password = false;
        self.user_repo.update(id, user).await?;
        info!("Password changed");
        Ok(())
    }

    async fn verify_active(&self, user_id: &str) -> Result<(), ServiceError> {
        let id = ObjectId::parse_str(user_id)
            .map_err(|_| ServiceError::InvalidInput("Invalid user id in token".to_string()))?;
        let user = self
            .user_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;
        Self::check_account_usable(&user)
    }
}
