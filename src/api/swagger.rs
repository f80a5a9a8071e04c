use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "Create, fetch and delete users stored in MongoDB.\n\nUser ids are 24-char hex ObjectIds generated by the service."
    ),
    paths(
        // Users
        crate::api::users::get_user,
        crate::api::users::create_user,
        crate::api::users::delete_user,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::CreateUserRequest,
            crate::models::UserResponse,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Users", description = "User resource: create, fetch by id, delete by id."),
        (name = "Health", description = "Health check and request metrics."),
    )
)]
pub struct ApiDoc;
