use super::actions::Action;
use crate::service::ClassroomService;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

const LOAD_DESCRIPTION: &str = "Loading classrooms";

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs service calls off the UI loop and reports back through [`Action`]s.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a background fetch of the full classroom list
    pub fn spawn_data_load(&mut self, service: Arc<dyn ClassroomService>) -> TaskId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let action = match service.list().await {
                Ok(classrooms) => Action::DataLoaded(classrooms),
                Err(e) => Action::LoadFailed(e.to_string()),
            };
            let _ = action_sender.send(action);
        });

        self.track(handle, LOAD_DESCRIPTION.to_string())
    }

    /// Spawn a background mutation (create, update, delete).
    ///
    /// The operation resolves to the success message shown to the user, or to
    /// the error message shown in the error dialog.
    pub fn spawn_operation<F, Fut>(&mut self, operation: F, description: String) -> TaskId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Result<String, String>> + Send + 'static,
    {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let action = match operation().await {
                Ok(message) => Action::OperationCompleted(message),
                Err(message) => Action::OperationFailed(message),
            };
            let _ = action_sender.send(action);
        });

        self.track(handle, description)
    }

    fn track(&mut self, handle: JoinHandle<()>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Drop finished tasks, returning how many were removed
    pub fn cleanup_finished_tasks(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|_, task| !task.handle.is_finished());
        before - self.tasks.len()
    }

    /// Check if a list fetch is currently running
    pub fn is_loading(&self) -> bool {
        self.tasks
            .values()
            .any(|task| task.description == LOAD_DESCRIPTION && !task.handle.is_finished())
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all_tasks();
    }
}
