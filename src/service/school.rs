use super::notice::{RECORD_DELETED, RECORD_UPDATED};
use crate::{
    db::Repository,
    errors::{AppError, Missing},
    models::{SchoolData, SchoolDataRequest},
};

pub const RECORD_CREATED: &str = "Registro criado com sucesso";

pub struct SchoolDataService<'a> {
    repo: &'a Repository,
}

impl<'a> SchoolDataService<'a> {
    pub fn new(repo: &'a Repository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, request: &SchoolDataRequest) -> Result<&'static str, AppError> {
        self.repo
            .create_school_data(request)
            .await
            .map_err(|e| e.or_message("Erro ao criar registro"))?;
        Ok(RECORD_CREATED)
    }

    pub async fn list(&self) -> Result<Vec<SchoolData>, AppError> {
        self.repo
            .list_school_data()
            .await
            .map_err(|e| e.or_message("Não foi possível listar registros"))
    }

    pub async fn get(&self, id: &str) -> Result<SchoolData, AppError> {
        self.repo
            .get_school_data(id)
            .await
            .map_err(|e| e.or_message("Erro ao buscar registro"))?
            .ok_or(AppError::NotFound(Missing::SchoolData))
    }

    pub async fn update(
        &self,
        id: &str,
        request: &SchoolDataRequest,
    ) -> Result<&'static str, AppError> {
        let updated = self
            .repo
            .update_school_data(id, request)
            .await
            .map_err(|e| e.or_message("Erro ao atualizar registro"))?;

        if !updated {
            return Err(AppError::NotFound(Missing::SchoolData));
        }
        Ok(RECORD_UPDATED)
    }

    pub async fn delete(&self, id: &str) -> Result<&'static str, AppError> {
        let deleted = self
            .repo
            .delete_school_data(id)
            .await
            .map_err(|e| e.or_message("Erro ao deletar registro"))?;

        if !deleted {
            return Err(AppError::NotFound(Missing::SchoolData));
        }
        Ok(RECORD_DELETED)
    }
}
