use actix_web::{cookie::Cookie, http::header, web, HttpRequest, HttpResponse};

use crate::services::auth_service::{self, CredentialsForm};
use crate::session::{SessionStore, SESSION_COOKIE};
use crate::storage::UserStore;
use crate::utils::AppError;

#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body(content = CredentialsForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Login successful, session cookie set, redirect to /dashboard"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    users: web::Data<UserStore>,
    sessions: web::Data<SessionStore>,
    form: web::Form<CredentialsForm>,
) -> HttpResponse {
    log::info!("🔐 POST /login - username: {}", form.username);

    match auth_service::authenticate(&users, &form.username, &form.password) {
        Ok(()) => {
            let token = sessions.create(&form.username);
            log::info!("✅ Login successful: {}", form.username);
            HttpResponse::Found()
                .cookie(
                    Cookie::build(SESSION_COOKIE, token)
                        .path("/")
                        .http_only(true)
                        .finish(),
                )
                .append_header((header::LOCATION, "/dashboard"))
                .finish()
        }
        Err(AppError::InvalidCredentials) => {
            log::warn!("❌ Login failed: {}", form.username);
            HttpResponse::Unauthorized()
                .content_type("text/plain; charset=utf-8")
                .body("Invalid credentials")
        }
        Err(e) => {
            log::error!("❌ Login error for {}: {}", form.username, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/signup",
    tag = "Auth",
    request_body(content = CredentialsForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Registration successful, redirect to /login"),
        (status = 400, description = "Username already exists")
    )
)]
pub async fn signup(
    users: web::Data<UserStore>,
    form: web::Form<CredentialsForm>,
) -> HttpResponse {
    log::info!("📝 POST /signup - username: {}", form.username);

    match auth_service::register(&users, &form.username, &form.password) {
        Ok(()) => {
            log::info!("✅ Registration successful: {}", form.username);
            HttpResponse::Found()
                .append_header((header::LOCATION, "/login"))
                .finish()
        }
        Err(AppError::DuplicateUser(_)) => {
            log::warn!("❌ Registration failed, username taken: {}", form.username);
            HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body("Username already exists")
        }
        Err(e) => {
            log::error!("❌ Registration error for {}: {}", form.username, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/logout",
    tag = "Auth",
    responses(
        (status = 302, description = "Session cleared (idempotent), redirect to /")
    )
)]
pub async fn logout(req: HttpRequest, sessions: web::Data<SessionStore>) -> HttpResponse {
    log::info!("👋 GET /logout");

    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        sessions.clear(cookie.value());
    }

    let mut removal = Cookie::new(SESSION_COOKIE, "");
    removal.set_path("/");
    removal.make_removal();

    HttpResponse::Found()
        .cookie(removal)
        .append_header((header::LOCATION, "/"))
        .finish()
}
