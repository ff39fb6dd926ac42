//! Client Info Operations
//!
//! Edits to the intake questionnaire. Every write lands on a
//! normalized copy of the stored questionnaire first: a schema
//! question the blob never contained must exist before an answer can
//! stick to it. Deleting a default question is allowed here; the read
//! projection will re-add it with an empty answer, so the effect is a
//! reset rather than a removal.

use std::path::Path;

use super::{map_by_id, remove_by_id, AppStore};
use crate::domain::{
    normalize_client_info, Attachment, ClientInfo, ClientInfoQuestion, DomainResult, SectionId,
};
use crate::files;

impl AppStore {
    /// Normalize the questionnaire, apply one edit, store the result.
    async fn update_client_info<F>(&self, client_id: &str, f: F) -> DomainResult<()>
    where
        F: FnOnce(&mut ClientInfo),
    {
        self.update_clients(|clients| {
            map_by_id(clients, client_id, |client| {
                let mut client = client.clone();
                let mut info = normalize_client_info(&client.client_info);
                f(&mut info);
                client.client_info = info;
                client
            })
        })
        .await
    }

    pub async fn update_answer(
        &self,
        client_id: &str,
        section_id: SectionId,
        question_id: &str,
        answer: impl Into<String>,
    ) -> DomainResult<()> {
        let answer = answer.into();
        self.update_client_info(client_id, |info| {
            if let Some(section) = info.get_mut(&section_id) {
                section.questions = map_by_id(&section.questions, question_id, |question| {
                    let mut question = question.clone();
                    question.answer = answer;
                    question
                });
            }
        })
        .await
    }

    /// Append an admin-added question (non-default, empty answer).
    pub async fn add_question(
        &self,
        client_id: &str,
        section_id: SectionId,
        question: impl Into<String>,
    ) -> DomainResult<()> {
        let question = ClientInfoQuestion::custom(question);
        self.update_client_info(client_id, |info| {
            if let Some(section) = info.get_mut(&section_id) {
                section.questions.push(question);
            }
        })
        .await
    }

    pub async fn delete_question(
        &self,
        client_id: &str,
        section_id: SectionId,
        question_id: &str,
    ) -> DomainResult<()> {
        self.update_client_info(client_id, |info| {
            if let Some(section) = info.get_mut(&section_id) {
                section.questions = remove_by_id(&section.questions, question_id);
            }
        })
        .await
    }

    /// Attach in-memory file bytes to a question's answer.
    ///
    /// The encode runs before the write lock is taken, so the commit
    /// applies to whatever snapshot is current once encoding finishes.
    pub async fn add_attachment(
        &self,
        client_id: &str,
        section_id: SectionId,
        question_id: &str,
        name: &str,
        mime_type: Option<String>,
        bytes: &[u8],
    ) -> DomainResult<()> {
        let attachment = files::encode_attachment(name, mime_type, bytes);
        self.append_attachment(client_id, section_id, question_id, attachment)
            .await
    }

    /// Attach a file read from disk, guessing its MIME type.
    pub async fn add_attachment_from_path(
        &self,
        client_id: &str,
        section_id: SectionId,
        question_id: &str,
        path: &Path,
    ) -> DomainResult<()> {
        let attachment = files::read_attachment(path).await?;
        self.append_attachment(client_id, section_id, question_id, attachment)
            .await
    }

    async fn append_attachment(
        &self,
        client_id: &str,
        section_id: SectionId,
        question_id: &str,
        attachment: Attachment,
    ) -> DomainResult<()> {
        self.update_client_info(client_id, |info| {
            if let Some(section) = info.get_mut(&section_id) {
                section.questions = map_by_id(&section.questions, question_id, |question| {
                    let mut question = question.clone();
                    question.attachments.push(attachment);
                    question
                });
            }
        })
        .await
    }

    pub async fn delete_attachment(
        &self,
        client_id: &str,
        section_id: SectionId,
        question_id: &str,
        attachment_id: &str,
    ) -> DomainResult<()> {
        self.update_client_info(client_id, |info| {
            if let Some(section) = info.get_mut(&section_id) {
                section.questions = map_by_id(&section.questions, question_id, |question| {
                    let mut question = question.clone();
                    question.attachments = remove_by_id(&question.attachments, attachment_id);
                    question
                });
            }
        })
        .await
    }
}
