use crate::{
    db::Repository,
    errors::{AppError, Missing},
    models::{CreateNoticeRequest, Notice, UpdateNoticeRequest},
};

pub const NOTICE_CREATED: &str = "Aviso criado com sucesso";
pub const RECORD_UPDATED: &str = "Registro editado com sucesso";
pub const RECORD_DELETED: &str = "Registro excluído com sucesso";

pub struct NoticeService<'a> {
    repo: &'a Repository,
}

impl<'a> NoticeService<'a> {
    pub fn new(repo: &'a Repository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, request: &CreateNoticeRequest) -> Result<&'static str, AppError> {
        self.repo
            .create_notice(request)
            .await
            .map_err(|e| e.or_message("Erro ao criar aviso"))?;
        Ok(NOTICE_CREATED)
    }

    pub async fn list(&self) -> Result<Vec<Notice>, AppError> {
        self.repo
            .list_notices()
            .await
            .map_err(|e| e.or_message("Não foi possível listar avisos"))
    }

    pub async fn get(&self, id: &str) -> Result<Notice, AppError> {
        self.repo
            .get_notice(id)
            .await
            .map_err(|e| e.or_message("Erro ao buscar aviso"))?
            .ok_or(AppError::NotFound(Missing::Notice))
    }

    pub async fn update(
        &self,
        id: &str,
        request: &UpdateNoticeRequest,
    ) -> Result<&'static str, AppError> {
        let updated = self
            .repo
            .update_notice(id, request)
            .await
            .map_err(|e| e.or_message("Erro ao atualizar aviso"))?;

        if !updated {
            return Err(AppError::NotFound(Missing::Notice));
        }
        Ok(RECORD_UPDATED)
    }

    pub async fn delete(&self, id: &str) -> Result<&'static str, AppError> {
        let deleted = self
            .repo
            .delete_notice(id)
            .await
            .map_err(|e| e.or_message("Erro ao excluir aviso"))?;

        if !deleted {
            return Err(AppError::NotFound(Missing::Notice));
        }
        Ok(RECORD_DELETED)
    }
}
