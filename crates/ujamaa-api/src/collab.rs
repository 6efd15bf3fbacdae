//! Project updates, comments and workspace discussions.

use chrono::Utc;
use uuid::Uuid;

use ujamaa_shared::models::{Comment, Discussion, DiscussionThread, ProjectUpdate};

use crate::error::{ApiError, Result};
use crate::Platform;

impl Platform {
    /// Post a progress update on a project.
    pub fn post_update(
        &mut self,
        actor: Uuid,
        project_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<ProjectUpdate> {
        self.require_actor(actor)?;
        if self.store.get_project(project_id).is_none() {
            return Err(ApiError::NotFound);
        }

        let update = ProjectUpdate {
            id: Uuid::new_v4(),
            project_id,
            author_id: actor,
            title: title.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        };
        let created = update.clone();
        self.store.put_update(update);
        self.store.save()?;
        Ok(created)
    }

    /// Comment on a project update.
    pub fn comment_on_update(
        &mut self,
        actor: Uuid,
        update_id: Uuid,
        content: &str,
    ) -> Result<Comment> {
        self.require_actor(actor)?;
        if self.store.get_update(update_id).is_none() {
            return Err(ApiError::NotFound);
        }

        let comment = Comment {
            id: Uuid::new_v4(),
            update_id,
            author_id: actor,
            content: content.to_string(),
            created_at: Utc::now(),
        };
        let created = comment.clone();
        self.store.put_comment(comment);
        self.store.save()?;
        Ok(created)
    }

    /// Open a discussion in a workspace the actor belongs to.
    pub fn open_discussion(
        &mut self,
        actor: Uuid,
        workspace_id: Uuid,
        title: &str,
    ) -> Result<Discussion> {
        self.require_actor(actor)?;
        let workspace = self
            .store
            .get_workspace(workspace_id)
            .ok_or(ApiError::NotFound)?;
        if !workspace.members.contains(&actor) {
            return Err(ApiError::Forbidden);
        }

        let discussion = Discussion {
            id: Uuid::new_v4(),
            workspace_id,
            created_by_id: actor,
            title: title.to_string(),
            created_at: Utc::now(),
        };
        let created = discussion.clone();
        self.store.put_discussion(discussion);
        self.store.save()?;
        Ok(created)
    }

    /// Reply inside a discussion.
    pub fn reply_to_discussion(
        &mut self,
        actor: Uuid,
        discussion_id: Uuid,
        content: &str,
    ) -> Result<DiscussionThread> {
        self.require_actor(actor)?;
        if self.store.get_discussion(discussion_id).is_none() {
            return Err(ApiError::NotFound);
        }

        let thread = DiscussionThread {
            id: Uuid::new_v4(),
            discussion_id,
            author_id: actor,
            content: content.to_string(),
            created_at: Utc::now(),
        };
        let created = thread.clone();
        self.store.put_thread(thread);
        self.store.save()?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ngos::NgoDetails;
    use crate::projects::ProjectDetails;

    #[test]
    fn update_comment_discussion_reply_flow() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = Platform::open_at(dir.path().join("store.json")).unwrap();

        let founder = p
            .register("founder@example.org", "pw123456", "F", "O")
            .unwrap();
        let founder_id = Uuid::parse_str(&founder.id).unwrap();
        p.create_ngo(founder_id, "N1", "n1@example.org", "Kenya", NgoDetails::default())
            .unwrap();
        let project = p
            .create_project(founder_id, "P1", "d", "6", ProjectDetails::default())
            .unwrap();
        let ws = p
            .create_workspace(founder_id, project.id, "Planning", None)
            .unwrap();

        let update = p
            .post_update(founder_id, project.id, "Week 1", "Dug the trench")
            .unwrap();
        p.comment_on_update(founder_id, update.id, "Good pace").unwrap();

        let discussion = p.open_discussion(founder_id, ws.id, "Pipe sourcing").unwrap();
        p.reply_to_discussion(founder_id, discussion.id, "Local supplier?")
            .unwrap();

        assert_eq!(p.store().list_updates_for_project(project.id).len(), 1);
        assert_eq!(p.store().list_comments_for_update(update.id).len(), 1);
        assert_eq!(p.store().list_threads_for_discussion(discussion.id).len(), 1);
    }

    #[test]
    fn commenting_on_missing_update_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = Platform::open_at(dir.path().join("store.json")).unwrap();
        let u = p.register("u@example.org", "pw123456", "U", "V").unwrap();
        let uid = Uuid::parse_str(&u.id).unwrap();

        assert!(matches!(
            p.comment_on_update(uid, Uuid::new_v4(), "hi"),
            Err(ApiError::NotFound)
        ));
    }
}
