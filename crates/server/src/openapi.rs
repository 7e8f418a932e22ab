use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDoc {
    pub id: String,
    pub name: String,
    pub genre: String,
    /// ISO date, `YYYY-MM-DD`
    pub formation_date: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupInputDoc {
    /// Only read on create; a fresh id is generated when omitted.
    pub id: Option<String>,
    pub name: String,
    pub genre: String,
    /// ISO date, `YYYY-MM-DD`
    pub formation_date: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::groups::create,
        crate::routes::groups::list,
        crate::routes::groups::get,
        crate::routes::groups::delete,
        crate::routes::groups::update,
    ),
    components(
        schemas(
            HealthResponse,
            GroupDoc,
            GroupInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "group")
    )
)]
pub struct ApiDoc;
