//! One handler per route.
//!
//! Mutating handlers all follow the same contract: load the document,
//! mutate the first board, save, redirect to the dashboard. Validation
//! failures and missing entities are silent no-ops; the login flow owns the
//! only user-visible error messages.

use axum::{
    extract::{Form, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::boards::BoardManager;
use crate::error::KanbanError;
use crate::tasks::TaskManager;

use super::auth;
use super::forms::*;
use super::pages;
use super::server::AppState;
use super::session::{self, SessionUser};

const DASHBOARD: &str = "/dashboard";

/// Silent no-op: log the reason at debug level and go back to the dashboard.
fn skip(action: &str, err: KanbanError) -> Response {
    match err {
        KanbanError::IoError(_) | KanbanError::JsonError(_) => {
            tracing::error!(action, error = %err, "Failed to persist document");
        },
        _ => tracing::debug!(action, reason = %err, "Mutation skipped"),
    }
    Redirect::to(DASHBOARD).into_response()
}

pub async fn home() -> Html<String> {
    Html(pages::home_page())
}

pub async fn onboarding() -> Html<String> {
    Html(pages::onboarding_page())
}

pub async fn onboarding_submit() -> Redirect {
    Redirect::to(DASHBOARD)
}

pub async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let doc = state.store.load();
    let user = state.sessions.user_from_headers(&headers).await;
    let board = doc.select_board(query.board_id.as_deref());

    Html(pages::dashboard_page(&doc, board, user.as_ref()))
}

// ===== Board and category mutations =====

pub async fn create_board(
    State(state): State<AppState>,
    Form(form): Form<NewBoardForm>,
) -> Response {
    let mgr = BoardManager::new(state.store.as_ref());
    match mgr.create_board(&form.name) {
        Ok(board) => Redirect::to(&format!("{}?boardId={}", DASHBOARD, board.id)).into_response(),
        Err(e) => skip("create_board", e),
    }
}

pub async fn create_category(
    State(state): State<AppState>,
    Form(form): Form<NewCategoryForm>,
) -> Response {
    let mgr = BoardManager::new(state.store.as_ref());
    match mgr.create_category(&form.name) {
        Ok(_) => Redirect::to(DASHBOARD).into_response(),
        Err(e) => skip("create_category", e),
    }
}

pub async fn rename_category(
    State(state): State<AppState>,
    Form(form): Form<RenameCategoryForm>,
) -> Response {
    let mgr = BoardManager::new(state.store.as_ref());
    match mgr.rename_category(&form.category_id, &form.name) {
        Ok(()) => Redirect::to(DASHBOARD).into_response(),
        Err(e) => skip("rename_category", e),
    }
}

pub async fn delete_category(
    State(state): State<AppState>,
    Form(form): Form<DeleteCategoryForm>,
) -> Response {
    let mgr = BoardManager::new(state.store.as_ref());
    match mgr.delete_category(&form.category_id) {
        Ok(()) => Redirect::to(DASHBOARD).into_response(),
        Err(e) => skip("delete_category", e),
    }
}

// ===== Task mutations =====

pub async fn create_task(State(state): State<AppState>, Form(form): Form<NewTaskForm>) -> Response {
    let mgr = TaskManager::new(state.store.as_ref());
    match mgr.create_task(
        &form.category_id,
        &form.title,
        form.description.as_deref(),
        form.due_date.as_deref(),
        form.status.as_deref(),
    ) {
        Ok(_) => Redirect::to(DASHBOARD).into_response(),
        Err(e) => skip("create_task", e),
    }
}

pub async fn edit_task(State(state): State<AppState>, Form(form): Form<EditTaskForm>) -> Response {
    let mgr = TaskManager::new(state.store.as_ref());
    match mgr.edit_task(
        &form.task_id,
        form.title.as_deref(),
        form.description.as_deref(),
        form.due_date.as_deref(),
    ) {
        Ok(()) => Redirect::to(DASHBOARD).into_response(),
        Err(e) => skip("edit_task", e),
    }
}

pub async fn delete_task(
    State(state): State<AppState>,
    Form(form): Form<DeleteTaskForm>,
) -> Response {
    let mgr = TaskManager::new(state.store.as_ref());
    match mgr.delete_task(&form.task_id) {
        Ok(()) => Redirect::to(DASHBOARD).into_response(),
        Err(e) => skip("delete_task", e),
    }
}

pub async fn change_status(
    State(state): State<AppState>,
    Form(form): Form<ChangeStatusForm>,
) -> Response {
    let mgr = TaskManager::new(state.store.as_ref());
    match mgr.change_status(&form.task_id, &form.status) {
        Ok(()) => Redirect::to(DASHBOARD).into_response(),
        Err(e) => skip("change_status", e),
    }
}

/// Drag-and-drop reorder. Invoked asynchronously by the board page, so the
/// answer is a bare status code rather than a redirect.
pub async fn reorder_tasks(
    State(state): State<AppState>,
    Form(form): Form<ReorderTaskForm>,
) -> StatusCode {
    let mgr = TaskManager::new(state.store.as_ref());
    match mgr.reorder_task(&form.task_id, &form.category_id, &form.position) {
        Ok(()) => StatusCode::OK,
        Err(KanbanError::NoBoard) | Err(KanbanError::TaskNotFound(_)) => StatusCode::NOT_FOUND,
        Err(e) => {
            tracing::error!(error = %e, "Failed to reorder task");
            StatusCode::INTERNAL_SERVER_ERROR
        },
    }
}

// ===== Simulated authentication =====

pub async fn login_form() -> Html<String> {
    Html(pages::login_page(None, false, None))
}

pub async fn login_email(Form(form): Form<EmailLoginForm>) -> Html<String> {
    if form.email.is_empty() {
        return Html(pages::login_page(None, false, Some("Ingresa un correo válido")));
    }

    Html(pages::login_page(Some(&form.email), true, None))
}

pub async fn login_code(
    State(state): State<AppState>,
    Form(form): Form<CodeLoginForm>,
) -> Response {
    if form.email.is_empty() {
        return Redirect::to("/login").into_response();
    }

    if !auth::verify_code(&form.code) {
        return Html(pages::login_page(
            Some(&form.email),
            true,
            Some("Código incorrecto. Revisa e inténtalo de nuevo."),
        ))
        .into_response();
    }

    let id = state
        .sessions
        .create(SessionUser::from_email(&form.email))
        .await;
    tracing::info!(email = %form.email, "Email login");

    (
        [(header::SET_COOKIE, session::session_cookie(&id))],
        Redirect::to(DASHBOARD),
    )
        .into_response()
}

pub async fn social_login(
    State(state): State<AppState>,
    Path(provider): Path<String>,
) -> Response {
    let Some(user) = auth::social_identity(&provider) else {
        return (StatusCode::NOT_FOUND, "Provider no válido").into_response();
    };

    let id = state.sessions.create(user).await;
    tracing::info!(%provider, "Social login");

    (
        [(header::SET_COOKIE, session::session_cookie(&id))],
        Redirect::to(DASHBOARD),
    )
        .into_response()
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(id) = session::session_id_from_headers(&headers) {
        state.sessions.destroy(&id).await;
    }

    (
        [(header::SET_COOKIE, session::clear_session_cookie())],
        Redirect::to("/"),
    )
        .into_response()
}
