use crate::{
    auth,
    db::Repository,
    errors::{AppError, Missing},
    models::{CompletedContent, ContentNote, CreateUserRequest, UpdateUserRequest, User},
};

pub const USER_CREATED: &str = "Usuário criado com sucesso";
pub const USER_UPDATED: &str = "Usuário editado com sucesso";
pub const USER_DELETED: &str = "Usuário excluído com sucesso";
pub const CONTENT_NOTE_ADDED: &str = "Anotação adicionada com sucesso";
pub const COMPLETED_CONTENT_ADDED: &str = "Conteúdo concluído registrado com sucesso";
pub const LOGIN_FAILED: &str = "Dados de login incorretos.";

pub struct UserService<'a> {
    repo: &'a Repository,
}

impl<'a> UserService<'a> {
    pub fn new(repo: &'a Repository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, request: &CreateUserRequest) -> Result<&'static str, AppError> {
        let password_hash = hash_blocking(request.password.clone()).await?;

        self.repo
            .create_user(request, &password_hash)
            .await
            .map_err(|e| e.or_message("Erro ao criar usuário"))?;
        Ok(USER_CREATED)
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.repo
            .list_users()
            .await
            .map_err(|e| e.or_message("Não foi possível listar usuários"))
    }

    pub async fn get(&self, email: &str) -> Result<User, AppError> {
        self.repo
            .get_user_by_email(email)
            .await
            .map_err(|e| e.or_message("Erro ao listar usuário por e-mail"))?
            .ok_or(AppError::NotFound(Missing::User))
    }

    /// Partial update; a supplied password is re-hashed before it is stored.
    pub async fn update(
        &self,
        email: &str,
        request: &UpdateUserRequest,
    ) -> Result<&'static str, AppError> {
        let password_hash = match &request.password {
            Some(password) => Some(hash_blocking(password.clone()).await?),
            None => None,
        };

        let updated = self
            .repo
            .update_user(email, request, password_hash.as_deref())
            .await
            .map_err(|e| e.or_message("Erro ao atualizar usuário por e-mail"))?;

        if !updated {
            return Err(AppError::NotFound(Missing::User));
        }
        Ok(USER_UPDATED)
    }

    pub async fn delete(&self, email: &str) -> Result<&'static str, AppError> {
        let deleted = self
            .repo
            .delete_user(email)
            .await
            .map_err(|e| e.or_message("Erro ao deletar usuário por e-mail"))?;

        if !deleted {
            return Err(AppError::NotFound(Missing::User));
        }
        Ok(USER_DELETED)
    }

    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.repo.get_user_by_email(email).await? else {
            return Err(AppError::Unauthorized(LOGIN_FAILED.to_string()));
        };

        let password = password.to_string();
        let hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || auth::verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::Internal(format!("Password task failed: {}", e)))??;

        if !matches {
            tracing::warn!(user_id = %user.id, "Failed login attempt");
            return Err(AppError::Unauthorized(LOGIN_FAILED.to_string()));
        }
        Ok(user)
    }

    pub async fn add_content_note(
        &self,
        email: &str,
        note: &ContentNote,
    ) -> Result<&'static str, AppError> {
        let added = self
            .repo
            .add_content_note(email, note)
            .await
            .map_err(|e| e.or_message("Não foi possível adicionar a anotação"))?;

        if !added {
            return Err(AppError::NotFound(Missing::User));
        }
        Ok(CONTENT_NOTE_ADDED)
    }

    pub async fn add_completed_content(
        &self,
        email: &str,
        completed: &CompletedContent,
    ) -> Result<&'static str, AppError> {
        let added = self
            .repo
            .add_completed_content(email, completed)
            .await
            .map_err(|e| e.or_message("Não foi possível registrar o conteúdo concluído"))?;

        if !added {
            return Err(AppError::NotFound(Missing::User));
        }
        Ok(COMPLETED_CONTENT_ADDED)
    }
}

/// Argon2 is CPU-bound; keep it off the async workers.
async fn hash_blocking(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || auth::hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(format!("Password task failed: {}", e)))?
}
