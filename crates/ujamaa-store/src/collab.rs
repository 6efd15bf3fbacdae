//! Accessors for the collaboration records: project updates, comments,
//! discussions and their threads.

use uuid::Uuid;

use ujamaa_shared::models::{Comment, Discussion, DiscussionThread, ProjectUpdate};

use crate::store::DataStore;

impl DataStore {
    pub fn put_update(&mut self, update: ProjectUpdate) {
        self.updates.insert(update.id, update);
    }

    pub fn get_update(&self, id: Uuid) -> Option<&ProjectUpdate> {
        self.updates.get(&id)
    }

    /// Updates posted on one project, newest first.
    pub fn list_updates_for_project(&self, project_id: Uuid) -> Vec<&ProjectUpdate> {
        let mut updates: Vec<&ProjectUpdate> = self
            .updates
            .values()
            .filter(|u| u.project_id == project_id)
            .collect();
        updates.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        updates
    }

    pub fn put_comment(&mut self, comment: Comment) {
        self.comments.insert(comment.id, comment);
    }

    pub fn get_comment(&self, id: Uuid) -> Option<&Comment> {
        self.comments.get(&id)
    }

    /// Comments on one update, oldest first (conversation order).
    pub fn list_comments_for_update(&self, update_id: Uuid) -> Vec<&Comment> {
        let mut comments: Vec<&Comment> = self
            .comments
            .values()
            .filter(|c| c.update_id == update_id)
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        comments
    }

    pub fn put_discussion(&mut self, discussion: Discussion) {
        self.discussions.insert(discussion.id, discussion);
    }

    pub fn get_discussion(&self, id: Uuid) -> Option<&Discussion> {
        self.discussions.get(&id)
    }

    /// Discussions opened in one workspace, newest first.
    pub fn list_discussions_for_workspace(&self, workspace_id: Uuid) -> Vec<&Discussion> {
        let mut discussions: Vec<&Discussion> = self
            .discussions
            .values()
            .filter(|d| d.workspace_id == workspace_id)
            .collect();
        discussions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        discussions
    }

    pub fn put_thread(&mut self, thread: DiscussionThread) {
        self.discussion_threads.insert(thread.id, thread);
    }

    pub fn get_thread(&self, id: Uuid) -> Option<&DiscussionThread> {
        self.discussion_threads.get(&id)
    }

    /// Replies inside one discussion, oldest first (conversation order).
    pub fn list_threads_for_discussion(&self, discussion_id: Uuid) -> Vec<&DiscussionThread> {
        let mut threads: Vec<&DiscussionThread> = self
            .discussion_threads
            .values()
            .filter(|t| t.discussion_id == discussion_id)
            .collect();
        threads.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        threads
    }
}
