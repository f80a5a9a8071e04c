use actix_web::{web, HttpResponse};
use mongodb::bson::oid::ObjectId;

use crate::database::UserStore;
use crate::models::{CreateUserRequest, UserResponse};
use crate::utils::error::AppError;
use crate::utils::object_id::parse_object_id;

/// Rotas do recurso `/user`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .route("", web::post().to(create_user))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::delete().to(delete_user)),
    );
}

/// GET /user/{id} - Busca usuário pelo ObjectId
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "24-char hex ObjectId")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "Malformed id or user not found"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn get_user(
    path: web::Path<String>,
    store: web::Data<dyn UserStore>,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    let object_id = parse_object_id(&raw_id)?;

    match store.find_by_id(object_id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(UserResponse::from(user))),
        None => {
            log::debug!("🔍 User {} not found", raw_id);
            Err(AppError::NotFound(format!("user {}", object_id.to_hex())))
        }
    }
}

/// POST /user - Cria usuário (o id é sempre gerado aqui)
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Body is not valid JSON"),
        (status = 500, description = "Insert failed")
    )
)]
pub async fn create_user(
    body: web::Bytes,
    store: web::Data<dyn UserStore>,
) -> Result<HttpResponse, AppError> {
    let request: CreateUserRequest = serde_json::from_slice(&body).map_err(|e| {
        log::warn!("⚠️ Rejecting create payload: {}", e);
        AppError::MalformedPayload(e.to_string())
    })?;

    let mut user = request.into_user(ObjectId::new());
    user.id = store.insert(&user).await?;

    log::info!("✅ User created: {}", user.id.to_hex());

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// DELETE /user/{id} - Remove usuário
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "24-char hex ObjectId")),
    responses(
        (status = 200, description = "User deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "Malformed id or nothing deleted"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn delete_user(
    path: web::Path<String>,
    store: web::Data<dyn UserStore>,
) -> Result<HttpResponse, AppError> {
    let object_id = parse_object_id(&path.into_inner())?;
    let id = object_id.to_hex();

    if store.delete_by_id(object_id).await? == 0 {
        return Err(AppError::NotFound(format!("user {}", id)));
    }

    log::info!("🗑️  User deleted: {}", id);

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(format!("Deleted user {}\n", id)))
}
