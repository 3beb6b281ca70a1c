//! Sample task API wired through the server transport.
//!
//! This module plays the role of generated server code: an API trait with
//! one async method per operation, plus registration glue that binds each
//! operation to the transport with its route pattern and declared query
//! parameter names.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use openapi_edge_core::{
    Body, BoxError, Method, Response, ServerRequestMetadata, ServerTransport, request_handler,
};
use openapi_edge_transport::{EdgeTransport, TransportError};

/// A tracked task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Whether the task is finished.
    pub done: bool,
}

/// Request body for task creation.
#[derive(Debug, Deserialize)]
pub struct NewTask {
    /// Title of the task to create.
    pub title: String,
}

/// Errors surfaced by API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No task exists with the requested id.
    #[error("Task not found: {id}")]
    TaskNotFound { id: String },

    /// The request body could not be interpreted.
    #[error("Invalid request body: {reason}")]
    InvalidBody { reason: String },
}

/// The task-management API surface.
///
/// One method per operation; a code generator would emit this trait from an
/// OpenAPI document.
#[async_trait]
pub trait TaskApi: Send + Sync + 'static {
    /// List tasks, optionally paged.
    async fn list_tasks(
        &self,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<Vec<Task>, ApiError>;

    /// Fetch one task by id.
    async fn get_task(&self, id: &str) -> Result<Task, ApiError>;

    /// Create a task.
    async fn create_task(&self, new_task: NewTask) -> Result<Task, ApiError>;

    /// Delete a task by id.
    async fn delete_task(&self, id: &str) -> Result<(), ApiError>;
}

/// In-memory task store.
#[derive(Default)]
pub struct InMemoryTasks {
    tasks: DashMap<String, Task>,
}

impl InMemoryTasks {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskApi for InMemoryTasks {
    async fn list_tasks(
        &self,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<Vec<Task>, ApiError> {
        let mut tasks: Vec<Task> = self.tasks.iter().map(|entry| entry.value().clone()).collect();
        tasks.sort_by(|a, b| a.id.cmp(&b.id));

        let mut tasks: Vec<Task> = tasks.into_iter().skip(offset.unwrap_or(0)).collect();
        if let Some(limit) = limit {
            tasks.truncate(limit);
        }
        Ok(tasks)
    }

    async fn get_task(&self, id: &str) -> Result<Task, ApiError> {
        self.tasks
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ApiError::TaskNotFound { id: id.to_string() })
    }

    async fn create_task(&self, new_task: NewTask) -> Result<Task, ApiError> {
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: new_task.title,
            done: false,
        };
        self.tasks.insert(task.id.clone(), task.clone());
        Ok(task)
    }

    async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        self.tasks
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ApiError::TaskNotFound { id: id.to_string() })
    }
}

/// Register every API operation on the transport.
///
/// This is the glue a code generator would emit: one `register` call per
/// operation with its method, route pattern, and declared query parameter
/// names.
///
/// # Errors
///
/// Propagates registration failures from the transport.
pub fn register_operations<A: TaskApi>(
    transport: &mut EdgeTransport,
    api: Arc<A>,
) -> Result<(), TransportError> {
    let list = api.clone();
    transport.register(
        request_handler(move |_request, metadata| {
            let api = list.clone();
            async move {
                let limit = query_usize(&metadata, "limit");
                let offset = query_usize(&metadata, "offset");
                match api.list_tasks(limit, offset).await {
                    Ok(tasks) => json_response(200, &tasks),
                    Err(e) => Ok(error_to_response(&e)),
                }
            }
        }),
        Method::Get,
        "/tasks",
        declared(&["limit", "offset"]),
    )?;

    let get = api.clone();
    transport.register(
        request_handler(move |_request, metadata| {
            let api = get.clone();
            async move {
                let Some(id) = metadata.path_parameters.get("id") else {
                    return Ok(Response::new(500));
                };
                match api.get_task(id).await {
                    Ok(task) => json_response(200, &task),
                    Err(e) => Ok(error_to_response(&e)),
                }
            }
        }),
        Method::Get,
        "/tasks/{id}",
        BTreeSet::new(),
    )?;

    let create = api.clone();
    transport.register(
        request_handler(move |request, _metadata| {
            let api = create.clone();
            async move {
                let Some(body) = request.body else {
                    return Ok(error_to_response(&ApiError::InvalidBody {
                        reason: "empty body".to_string(),
                    }));
                };
                let bytes = body.collect(usize::MAX).await?;
                let new_task: NewTask = match serde_json::from_slice(&bytes) {
                    Ok(new_task) => new_task,
                    Err(e) => {
                        return Ok(error_to_response(&ApiError::InvalidBody {
                            reason: e.to_string(),
                        }));
                    }
                };
                match api.create_task(new_task).await {
                    Ok(task) => json_response(201, &task),
                    Err(e) => Ok(error_to_response(&e)),
                }
            }
        }),
        Method::Post,
        "/tasks",
        BTreeSet::new(),
    )?;

    let delete = api;
    transport.register(
        request_handler(move |_request, metadata| {
            let api = delete.clone();
            async move {
                let Some(id) = metadata.path_parameters.get("id") else {
                    return Ok(Response::new(500));
                };
                match api.delete_task(id).await {
                    Ok(()) => Ok(Response::new(204)),
                    Err(e) => Ok(error_to_response(&e)),
                }
            }
        }),
        Method::Delete,
        "/tasks/{id}",
        BTreeSet::new(),
    )?;

    Ok(())
}

fn declared(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

fn query_usize(metadata: &ServerRequestMetadata, name: &str) -> Option<usize> {
    metadata
        .query_parameters
        .iter()
        .find(|item| item.name == name)
        .and_then(|item| item.value.parse().ok())
}

fn json_response<T: Serialize>(status: u16, value: &T) -> Result<Response, BoxError> {
    let body = serde_json::to_vec(value)?;
    Ok(Response::new(status)
        .with_header("content-type", "application/json")
        .with_body(Body::full(body)))
}

/// Convert an API error to a response.
fn error_to_response(error: &ApiError) -> Response {
    let status = match error {
        ApiError::TaskNotFound { .. } => 404,
        ApiError::InvalidBody { .. } => 400,
    };
    let body = serde_json::json!({ "error": error.to_string() }).to_string();
    Response::new(status)
        .with_header("content-type", "application/json")
        .with_body(Body::full(body.into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use openapi_edge_core::QueryItem;

    #[tokio::test]
    async fn test_create_and_get_task() {
        let api = InMemoryTasks::new();

        let created = api
            .create_task(NewTask {
                title: "write tests".to_string(),
            })
            .await
            .unwrap();
        assert!(!created.done);

        let fetched = api.get_task(&created.id).await.unwrap();
        assert_eq!(fetched.title, "write tests");
    }

    #[tokio::test]
    async fn test_get_unknown_task() {
        let api = InMemoryTasks::new();
        let result = api.get_task("missing").await;
        assert!(matches!(result, Err(ApiError::TaskNotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_task() {
        let api = InMemoryTasks::new();
        let created = api
            .create_task(NewTask {
                title: "ephemeral".to_string(),
            })
            .await
            .unwrap();

        api.delete_task(&created.id).await.unwrap();
        assert!(api.get_task(&created.id).await.is_err());
    }

    #[tokio::test]
    async fn test_list_tasks_paging() {
        let api = InMemoryTasks::new();
        for index in 0..5 {
            api.create_task(NewTask {
                title: format!("task {index}"),
            })
            .await
            .unwrap();
        }

        let all = api.list_tasks(None, None).await.unwrap();
        assert_eq!(all.len(), 5);

        let page = api.list_tasks(Some(2), Some(1)).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, all[1].id);
    }

    #[test]
    fn test_query_usize() {
        let metadata = ServerRequestMetadata {
            query_parameters: vec![
                QueryItem::new("limit", "10"),
                QueryItem::new("offset", "abc"),
            ],
            ..Default::default()
        };

        assert_eq!(query_usize(&metadata, "limit"), Some(10));
        assert_eq!(query_usize(&metadata, "offset"), None);
        assert_eq!(query_usize(&metadata, "missing"), None);
    }

    #[test]
    fn test_error_to_response_statuses() {
        let response = error_to_response(&ApiError::TaskNotFound {
            id: "42".to_string(),
        });
        assert_eq!(response.status, 404);

        let response = error_to_response(&ApiError::InvalidBody {
            reason: "bad json".to_string(),
        });
        assert_eq!(response.status, 400);
    }
}
