//! In-memory task registry

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::protocol::task::Task;

/// Process-local store of tasks, keyed by task id
///
/// All mutation goes through the inner lock, so concurrent handlers can
/// insert and update tasks under distinct keys safely. Tasks are never
/// evicted; the map grows for the lifetime of the process.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: RwLock<HashMap<String, Task>>,
}

impl TaskRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task in the working state and return a copy of it
    pub async fn create(
        &self,
        task_id: impl Into<String>,
        context_id: impl Into<String>,
    ) -> Task {
        let task = Task::working(task_id, context_id);
        self.tasks
            .write()
            .await
            .insert(task.id.clone(), task.clone());
        task
    }

    /// Mark a task completed, embedding the response text when present
    ///
    /// Returns the updated task, or `None` when the id is unknown.
    pub async fn complete(&self, task_id: &str, text: Option<String>) -> Option<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks.get_mut(task_id)?;
        task.mark_completed(text);
        Some(task.clone())
    }

    /// Mark a task failed with the given failure description
    ///
    /// Returns the updated task, or `None` when the id is unknown.
    pub async fn fail(&self, task_id: &str, text: impl Into<String>) -> Option<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks.get_mut(task_id)?;
        task.mark_error(text);
        Some(task.clone())
    }

    /// Look up a task by id; reads never mutate registry state
    pub async fn get(&self, task_id: &str) -> Option<Task> {
        self.tasks.read().await.get(task_id).cloned()
    }

    /// Number of tasks ever registered in this process
    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    /// Whether no task has been registered yet
    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::protocol::task::TaskState;

    use super::*;

    #[tokio::test]
    async fn test_create_registers_working_task() {
        let registry = TaskRegistry::new();
        let task = registry.create("task-1", "ctx-1").await;

        assert_eq!(task.status.state, TaskState::Working);

        let looked_up = registry.get("task-1").await.unwrap();
        assert_eq!(looked_up.status.state, TaskState::Working);
    }

    #[tokio::test]
    async fn test_complete_transitions_once() {
        let registry = TaskRegistry::new();
        registry.create("task-1", "ctx-1").await;

        let task = registry
            .complete("task-1", Some("answer".to_string()))
            .await
            .unwrap();

        assert_eq!(task.status.state, TaskState::Completed);
        assert_eq!(task.response_text(), Some("answer"));
    }

    #[tokio::test]
    async fn test_fail_records_description() {
        let registry = TaskRegistry::new();
        registry.create("task-1", "ctx-1").await;

        let task = registry.fail("task-1", "agent exploded").await.unwrap();

        assert_eq!(task.status.state, TaskState::Error);
        assert_eq!(task.response_text(), Some("agent exploded"));
    }

    #[tokio::test]
    async fn test_unknown_ids_are_misses() {
        let registry = TaskRegistry::new();

        assert!(registry.get("missing").await.is_none());
        assert!(registry.complete("missing", None).await.is_none());
        assert!(registry.fail("missing", "x").await.is_none());
    }

    #[tokio::test]
    async fn test_reads_are_idempotent() {
        let registry = TaskRegistry::new();
        registry.create("task-1", "ctx-1").await;
        registry.complete("task-1", Some("done".to_string())).await;

        let first = registry.get("task-1").await.unwrap();
        let second = registry.get("task-1").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_tasks_accumulate() {
        let registry = TaskRegistry::new();
        assert!(registry.is_empty().await);

        for i in 0..10 {
            registry.create(format!("task-{i}"), "ctx").await;
        }
        assert_eq!(registry.len().await, 10);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_under_distinct_keys() {
        let registry = std::sync::Arc::new(TaskRegistry::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let registry = registry.clone();
                tokio::spawn(async move {
                    registry.create(format!("task-{i}"), "ctx").await;
                    registry.complete(&format!("task-{i}"), None).await;
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(registry.len().await, 32);
    }
}
