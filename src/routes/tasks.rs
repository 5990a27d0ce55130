use crate::{
    auth::{AuthenticatedUser, SessionMiddleware},
    error::AppError,
    models::{TaskInput, TaskUpdate},
    services::TaskService,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body returned by `POST /add`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedTask {
    pub id: i64,
}

/// Creates a new task for the caller.
///
/// ## Request Body:
/// - `title`: 1 to 200 characters (required).
/// - `description` (optional): up to 1000 characters.
///
/// ## Responses:
/// - `201 Created`: `{"id": n}`, the caller-scoped id of the new task.
/// - `400 Bad Request`: malformed or invalid body.
/// - `401 Unauthorized`: no session, or the session names an unknown account.
#[post("/add", wrap = "SessionMiddleware")]
pub async fn add_task(
    tasks: web::Data<TaskService>,
    user: AuthenticatedUser,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;
    let id = tasks.add(&user, task_data.into_inner()).await?;

    Ok(HttpResponse::Created().json(CreatedTask { id }))
}

/// Replaces the title and description of one of the caller's tasks.
///
/// ## Responses:
/// - `200 OK`
/// - `400 Bad Request`: malformed body or missing `id`.
/// - `404 Not Found`: the caller has no task with that id.
#[post("/update", wrap = "SessionMiddleware")]
pub async fn update_task(
    tasks: web::Data<TaskService>,
    user: AuthenticatedUser,
    task_data: web::Json<TaskUpdate>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;
    tasks.update(&user, task_data.into_inner()).await?;

    Ok(HttpResponse::Ok().finish())
}

#[post("/resolve/{id}", wrap = "SessionMiddleware")]
pub async fn resolve_task(
    tasks: web::Data<TaskService>,
    user: AuthenticatedUser,
    task_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    tasks.resolve(&user, task_id.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Soft-deletes a task: it leaves the active list and shows up in `/archive`.
#[post("/delete/{id}", wrap = "SessionMiddleware")]
pub async fn delete_task(
    tasks: web::Data<TaskService>,
    user: AuthenticatedUser,
    task_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    tasks.delete(&user, task_id.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Lists the caller's active tasks in creation order.
#[get("/get", wrap = "SessionMiddleware")]
pub async fn get_tasks(
    tasks: web::Data<TaskService>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(tasks.active(&user).await?))
}

#[get("/get/{id}", wrap = "SessionMiddleware")]
pub async fn get_task(
    tasks: web::Data<TaskService>,
    user: AuthenticatedUser,
    task_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(tasks.get(&user, task_id.into_inner()).await?))
}

/// Lists the caller's resolved and deleted tasks in creation order.
#[get("/archive", wrap = "SessionMiddleware")]
pub async fn get_archive(
    tasks: web::Data<TaskService>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(tasks.archived(&user).await?))
}
