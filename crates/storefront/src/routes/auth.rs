//! Authentication route handlers.
//!
//! Login is the site's front page. Registration logs the new user straight
//! in, as the original flow did.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::Result;
use crate::filters;
use crate::middleware::{OptionalAuth, clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;
use crate::users::StoredUser;

// =============================================================================
// Form and Query Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
}

fn login_error_message(code: &str) -> String {
    match code {
        "credentials" => "Invalid email or password.",
        "session" => "Could not start a session. Please try again.",
        _ => "Something went wrong. Please try again.",
    }
    .to_string()
}

fn register_error_message(code: &str) -> String {
    match code {
        "missing" => "All fields are required.",
        "email" => "Please enter a valid email address.",
        "exists" => "An account with this email already exists.",
        "session" => "Could not start a session. Please try again.",
        _ => "Something went wrong. Please try again.",
    }
    .to_string()
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the login page, or skip straight to the dashboard when a user is
/// already logged in.
pub async fn index(
    OptionalAuth(user): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> Response {
    if user.is_some() {
        return Redirect::to("/dashboard").into_response();
    }

    LoginTemplate {
        error: query.error.as_deref().map(login_error_message),
    }
    .into_response()
}

/// Display the registration page.
pub async fn register_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    RegisterTemplate {
        error: query.error.as_deref().map(register_error_message),
    }
}

/// Handle registration form submission, logging the new user in on success.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    match AuthService::new(state.store()).register(&form.name, &form.email, &form.password) {
        Ok(user) => start_session(&session, &user, "/auth/register").await,
        Err(AuthError::MissingFields) => {
            Ok(Redirect::to("/auth/register?error=missing").into_response())
        }
        Err(AuthError::InvalidEmail(_)) => {
            Ok(Redirect::to("/auth/register?error=email").into_response())
        }
        Err(AuthError::UserAlreadyExists) => {
            Ok(Redirect::to("/auth/register?error=exists").into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Handle login form submission.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match AuthService::new(state.store()).login(&form.email, &form.password) {
        Ok(user) => start_session(&session, &user, "/").await,
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("Login failed");
            Ok(Redirect::to("/?error=credentials").into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Handle logout.
pub async fn logout(session: Session) -> Redirect {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("Failed to clear session: {e}");
    }
    Redirect::to("/")
}

/// Put the authenticated user into the session and send them to the
/// dashboard; `fallback` is where to bounce if the session write fails.
async fn start_session(session: &Session, user: &StoredUser, fallback: &str) -> Result<Response> {
    let current = CurrentUser {
        email: user.email.clone(),
        name: user.name.clone(),
    };

    if let Err(e) = set_current_user(session, &current).await {
        tracing::error!("Failed to set session: {e}");
        return Ok(Redirect::to(&format!("{fallback}?error=session")).into_response());
    }

    Ok(Redirect::to("/dashboard").into_response())
}
