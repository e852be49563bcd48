use utoipa::OpenApi;

use crate::modules::classes::model::{Class, ClassFilterParams, CreateClassDto, UpdateClassDto};
use crate::modules::sessions::model::{
    CreateSessionDto, Session, SessionFilterParams, UpdateSessionDto,
};
use crate::utils::responses::{AckResponse, CreatedResponse, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::update_class,
        crate::modules::classes::controller::delete_class,
        crate::modules::sessions::controller::get_sessions,
        crate::modules::sessions::controller::create_session,
        crate::modules::sessions::controller::update_session,
        crate::modules::sessions::controller::delete_session,
    ),
    components(
        schemas(
            Class,
            CreateClassDto,
            UpdateClassDto,
            ClassFilterParams,
            Session,
            CreateSessionDto,
            UpdateSessionDto,
            SessionFilterParams,
            CreatedResponse,
            AckResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Classes", description = "Class records and roster filters"),
        (name = "Sessions", description = "Scheduled sessions per class")
    )
)]
pub struct ApiDoc;
