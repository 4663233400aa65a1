use crate::{
    db::Repository,
    errors::{AppError, Missing},
    models::{
        CreateForumRequest, CreateReplyRequest, CreateTopicRequest, Forum, Reply, Topic,
        UpdateForumRequest, UpdateReplyRequest, UpdateTopicRequest,
    },
};

pub const FORUM_CREATED: &str = "Fórum criado com sucesso";
pub const FORUM_DELETED: &str = "Fórum apagado com sucesso";
pub const TOPIC_DELETED: &str = "Tópico apagado com sucesso";
pub const REPLY_DELETED: &str = "Resposta apagada com sucesso";

/// Turns absent store results into tagged not-found errors.
pub struct ForumService<'a> {
    repo: &'a Repository,
}

impl<'a> ForumService<'a> {
    pub fn new(repo: &'a Repository) -> Self {
        Self { repo }
    }

    pub async fn create_forum(&self, request: &CreateForumRequest) -> Result<Forum, AppError> {
        self.repo
            .create_forum(request)
            .await
            .map_err(|e| e.or_message("Erro ao criar fórum"))
    }

    pub async fn list_forums(&self) -> Result<Vec<Forum>, AppError> {
        self.repo
            .list_forums()
            .await
            .map_err(|e| e.or_message("Não foi possível listar os fóruns"))
    }

    pub async fn get_forum(&self, forum_id: i64) -> Result<Forum, AppError> {
        self.repo
            .get_forum_by_id(forum_id)
            .await
            .map_err(|e| e.or_message("Erro ao buscar fórum"))?
            .ok_or(AppError::NotFound(Missing::Forum))
    }

    pub async fn update_forum(
        &self,
        forum_id: i64,
        request: &UpdateForumRequest,
    ) -> Result<Forum, AppError> {
        self.repo
            .update_forum(forum_id, request)
            .await
            .map_err(|e| e.or_message("Erro ao atualizar fórum"))?
            .ok_or(AppError::NotFound(Missing::Forum))
    }

    /// Deletes the forum and everything under it.
    pub async fn delete_forum(&self, forum_id: i64) -> Result<&'static str, AppError> {
        let deleted = self
            .repo
            .delete_forum_by_id(forum_id)
            .await
            .map_err(|e| e.or_message("Erro ao apagar fórum"))?;

        if !deleted {
            return Err(AppError::NotFound(Missing::Forum));
        }
        Ok(FORUM_DELETED)
    }

    pub async fn create_topic(
        &self,
        forum_id: i64,
        request: &CreateTopicRequest,
    ) -> Result<Topic, AppError> {
        self.repo
            .create_topic(forum_id, request)
            .await
            .map_err(|e| e.or_message("Erro ao criar tópico"))?
            .ok_or(AppError::NotFound(Missing::ParentForum))
    }

    pub async fn list_topics(&self, forum_id: i64) -> Result<Vec<Topic>, AppError> {
        self.repo
            .list_topics(forum_id)
            .await
            .map_err(|e| e.or_message("Erro ao listar tópicos"))?
            .ok_or(AppError::NotFound(Missing::Forum))
    }

    pub async fn get_topic(&self, forum_id: i64, topic_id: i64) -> Result<Topic, AppError> {
        self.repo
            .get_topic_by_id(forum_id, topic_id)
            .await
            .map_err(|e| e.or_message("Erro ao buscar tópico"))?
            .ok_or(AppError::NotFound(Missing::Topic))
    }

    pub async fn update_topic(
        &self,
        forum_id: i64,
        topic_id: i64,
        request: &UpdateTopicRequest,
    ) -> Result<Topic, AppError> {
        self.repo
            .update_topic(forum_id, topic_id, request)
            .await
            .map_err(|e| e.or_message("Erro ao atualizar tópico"))?
            .ok_or(AppError::NotFound(Missing::Topic))
    }

    pub async fn delete_topic(&self, forum_id: i64, topic_id: i64) -> Result<&'static str, AppError> {
        let deleted = self
            .repo
            .delete_topic(forum_id, topic_id)
            .await
            .map_err(|e| e.or_message("Erro ao apagar tópico"))?;

        if !deleted {
            return Err(AppError::NotFound(Missing::Topic));
        }
        Ok(TOPIC_DELETED)
    }

    pub async fn create_reply(
        &self,
        forum_id: i64,
        topic_id: i64,
        request: &CreateReplyRequest,
    ) -> Result<Reply, AppError> {
        self.repo
            .create_reply(forum_id, topic_id, request)
            .await
            .map_err(|e| e.or_message("Erro ao criar resposta"))?
            .ok_or(AppError::NotFound(Missing::ParentTopic))
    }

    pub async fn list_replies(&self, forum_id: i64, topic_id: i64) -> Result<Vec<Reply>, AppError> {
        self.repo
            .list_replies(forum_id, topic_id)
            .await
            .map_err(|e| e.or_message("Erro ao listar respostas"))?
            .ok_or(AppError::NotFound(Missing::Topic))
    }

    pub async fn get_reply(
        &self,
        forum_id: i64,
        topic_id: i64,
        reply_id: i64,
    ) -> Result<Reply, AppError> {
        self.repo
            .get_reply_by_id(forum_id, topic_id, reply_id)
            .await
            .map_err(|e| e.or_message("Erro ao buscar resposta"))?
            .ok_or(AppError::NotFound(Missing::Reply))
    }

    pub async fn update_reply(
        &self,
        forum_id: i64,
        topic_id: i64,
        reply_id: i64,
        request: &UpdateReplyRequest,
    ) -> Result<Reply, AppError> {
        self.repo
            .update_reply(forum_id, topic_id, reply_id, request)
            .await
            .map_err(|e| e.or_message("Erro ao atualizar resposta"))?
            .ok_or(AppError::NotFound(Missing::Reply))
    }

    pub async fn delete_reply(
        &self,
        forum_id: i64,
        topic_id: i64,
        reply_id: i64,
    ) -> Result<&'static str, AppError> {
        let deleted = self
            .repo
            .delete_reply(forum_id, topic_id, reply_id)
            .await
            .map_err(|e| e.or_message("Erro ao apagar resposta"))?;

        if !deleted {
            return Err(AppError::NotFound(Missing::Reply));
        }
        Ok(REPLY_DELETED)
    }
}
