use crate::server::{
    error::AppError,
    middleware::auth::{accepts_json, route_access, AuthGuard, Permission, RouteAccess},
    model::auth::AuthUser,
};
use axum::http::{header::ACCEPT, HeaderMap, HeaderValue};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod require;
mod route_access;

fn auth_user(user: &entity::user::Model) -> AuthUser {
    AuthUser::from_entity(user.clone())
}
