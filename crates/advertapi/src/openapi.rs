//! OpenAPI/Swagger documentation for the advert API.
//!
//! The generated document is served at `/api-docs/openapi.json` and browsable
//! at `/swagger-ui`.

use utoipa::OpenApi;

use advertapi_core::advert::{AddAdvertResponse, Advert, AdvertStatus, AdvertView, ConfirmAdvert};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Web Advertisement Apis",
        version = "version 1",
        description = "Submit adverts, confirm them once their file is uploaded, and list them."
    ),
    paths(
        crate::handlers::adverts::create_advert,
        crate::handlers::adverts::confirm_advert,
        crate::handlers::adverts::get_advert,
        crate::handlers::adverts::list_adverts,
        crate::handlers::health::health,
    ),
    components(schemas(Advert, AdvertView, AdvertStatus, ConfirmAdvert, AddAdvertResponse)),
    tags(
        (name = "adverts", description = "Advert submission and lifecycle"),
        (name = "health", description = "Storage health check"),
    )
)]
pub struct ApiDoc;
