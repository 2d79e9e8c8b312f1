use crate::{
    middleware::{jwt::auth_middleware, validate::ValidatedJson},
    state::{AppState, CookiePolicy},
};
use axum::{
    Extension, Json,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use shared::{
    config::{ACCESS_TOKEN_MINUTES, REFRESH_TOKEN_DAYS},
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{ApiResponse, MessageResponse, TokenPair, UserResponse},
    },
    errors::HttpError,
    service::AuthService,
};
use std::sync::Arc;
use time::Duration;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

pub const ACCESS_COOKIE: &str = "accessToken";
pub const REFRESH_COOKIE: &str = "refreshToken";

fn build_cookie(
    name: &'static str,
    value: String,
    max_age: Duration,
    policy: CookiePolicy,
) -> Cookie<'static> {
    Cookie::build((name, value))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(policy.secure)
        .max_age(max_age)
        .build()
}

fn set_auth_cookies(jar: CookieJar, tokens: &TokenPair, policy: CookiePolicy) -> CookieJar {
    jar.add(build_cookie(
        ACCESS_COOKIE,
        tokens.access_token.clone(),
        Duration::minutes(ACCESS_TOKEN_MINUTES),
        policy,
    ))
    .add(build_cookie(
        REFRESH_COOKIE,
        tokens.refresh_token.clone(),
        Duration::days(REFRESH_TOKEN_DAYS),
        policy,
    ))
}

/// Removal only takes effect when path and flags match the cookies as they
/// were set; a mismatch leaves the stale cookie behind in some browsers.
fn removal_cookie(name: &'static str, policy: CookiePolicy) -> Cookie<'static> {
    Cookie::build((name, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(policy.secure)
        .build()
}

fn clear_auth_cookies(jar: CookieJar, policy: CookiePolicy) -> CookieJar {
    jar.remove(removal_cookie(ACCESS_COOKIE, policy))
        .remove(removal_cookie(REFRESH_COOKIE, policy))
}

pub async fn health_checker_handler() -> Result<impl IntoResponse, HttpError> {
    const MESSAGE: &str = "Plant shop API: Axum, Postgres and SQLX";

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "success",
            "message": MESSAGE
        })),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Signup successful, cookies set", body = MessageResponse),
        (status = 409, description = "Email already registered")
    ),
    tag = "Auth"
)]
pub async fn signup_handler(
    Extension(service): Extension<AuthService>,
    Extension(policy): Extension<CookiePolicy>,
    jar: CookieJar,
    ValidatedJson(body): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let tokens = service.signup(&body).await?;
    let jar = set_auth_cookies(jar, &tokens, policy);

    Ok((
        StatusCode::OK,
        jar,
        Json(MessageResponse::success("Signup successful")),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, cookies set", body = MessageResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login_handler(
    Extension(service): Extension<AuthService>,
    Extension(policy): Extension<CookiePolicy>,
    jar: CookieJar,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let tokens = service.login(&body).await?;
    let jar = set_auth_cookies(jar, &tokens, policy);

    Ok((
        StatusCode::OK,
        jar,
        Json(MessageResponse::success("Login successful")),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/refresh",
    responses(
        (status = 200, description = "Token refreshed, cookies replaced", body = MessageResponse),
        (status = 401, description = "Missing, unknown or expired refresh token")
    ),
    tag = "Auth"
)]
pub async fn refresh_handler(
    Extension(service): Extension<AuthService>,
    Extension(policy): Extension<CookiePolicy>,
    jar: CookieJar,
) -> Result<impl IntoResponse, HttpError> {
    let refresh_token = jar
        .get(REFRESH_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| HttpError::Unauthorized("No refresh token".into()))?;

    let tokens = service.refresh(&refresh_token).await?;
    let jar = set_auth_cookies(jar, &tokens, policy);

    Ok((
        StatusCode::OK,
        jar,
        Json(MessageResponse::success("Token refreshed")),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Cookies cleared", body = MessageResponse),
        (status = 401, description = "Unknown refresh token")
    ),
    tag = "Auth"
)]
pub async fn logout_handler(
    Extension(service): Extension<AuthService>,
    Extension(policy): Extension<CookiePolicy>,
    jar: CookieJar,
) -> Result<impl IntoResponse, HttpError> {
    // a missing cookie still clears client state; an unknown one is a 401
    if let Some(cookie) = jar.get(REFRESH_COOKIE) {
        service.logout(cookie.value()).await?;
    }

    let jar = clear_auth_cookies(jar, policy);

    Ok((
        StatusCode::OK,
        jar,
        Json(MessageResponse::success("Logged out successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/auth/profile",
    responses(
        (status = 200, description = "Authenticated user", body = ApiResponse<UserResponse>),
        (status = 401, description = "Missing or invalid access token")
    ),
    tag = "Auth"
)]
pub async fn get_profile_handler(
    Extension(service): Extension<AuthService>,
    Extension(user_id): Extension<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let profile = service.profile(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Profile fetched", profile)),
    ))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/auth/signup", post(signup_handler))
        .route("/auth/login", post(login_handler))
        .route("/auth/refresh", post(refresh_handler))
        .route("/auth/logout", post(logout_handler))
        .route("/healthchecker", get(health_checker_handler));

    let private_routes = OpenApiRouter::new()
        .route("/auth/profile", get(get_profile_handler))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes
        .merge(private_routes)
        .layer(Extension(app_state.di_container.auth_service.clone()))
        .layer(Extension(app_state.cookie_policy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_cookies_carry_required_attributes() {
        let policy = CookiePolicy { secure: false };
        let tokens = TokenPair {
            access_token: "a".into(),
            refresh_token: "r".into(),
        };

        let jar = set_auth_cookies(CookieJar::default(), &tokens, policy);

        for name in [ACCESS_COOKIE, REFRESH_COOKIE] {
            let cookie = jar.get(name).unwrap();
            assert_eq!(cookie.path(), Some("/"));
            assert_eq!(cookie.http_only(), Some(true));
            assert_eq!(cookie.same_site(), Some(SameSite::Lax));
            assert_eq!(cookie.secure(), Some(false));
        }
    }

    #[test]
    fn test_removal_cookie_attributes_match_set_attributes() {
        // clearing with different path/flags silently fails in some
        // browsers, so removal must mirror the set attributes exactly
        for secure in [false, true] {
            let policy = CookiePolicy { secure };
            for name in [ACCESS_COOKIE, REFRESH_COOKIE] {
                let set = build_cookie(name, "value".into(), Duration::minutes(15), policy);
                let removal = removal_cookie(name, policy);

                assert_eq!(removal.path(), set.path());
                assert_eq!(removal.http_only(), set.http_only());
                assert_eq!(removal.same_site(), set.same_site());
                assert_eq!(removal.secure(), set.secure());
            }
        }
    }

    #[test]
    fn test_secure_flag_follows_policy() {
        let tokens = TokenPair {
            access_token: "a".into(),
            refresh_token: "r".into(),
        };

        let jar = set_auth_cookies(CookieJar::default(), &tokens, CookiePolicy { secure: true });

        assert_eq!(jar.get(ACCESS_COOKIE).unwrap().secure(), Some(true));
        assert_eq!(jar.get(REFRESH_COOKIE).unwrap().secure(), Some(true));
    }
}
