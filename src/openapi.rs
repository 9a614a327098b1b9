use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MedVet API",
        version = "1.0.0",
        description = "Backend API para MedVet - gestão de veterinários e clínicas",
        contact(
            name = "MedVet Team"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    tags(
        (name = "auth", description = "Autenticação"),
        (name = "veterinaries", description = "Veterinários"),
        (name = "clinics", description = "Clínicas")
    ),
    paths(
        crate::api::auth::login,
        crate::api::veterinaries::create_veterinarian,
        crate::api::veterinaries::list_veterinarians,
        crate::api::veterinaries::get_veterinarian,
        crate::api::veterinaries::update_veterinarian,
        crate::api::veterinaries::delete_veterinarian,
        crate::api::clinics::create_clinic,
        crate::api::clinics::list_clinics,
        crate::api::clinics::get_clinic,
        crate::api::clinics::update_clinic,
        crate::api::clinics::delete_clinic,
    ),
    components(
        schemas(
            crate::api::auth::LoginRequest,
            crate::models::User,
            crate::models::UserPublic,
            crate::models::UserRole,
            crate::models::Clinic,
            crate::models::CreateClinicRequest,
            crate::models::UpdateClinicRequest,
            crate::models::Veterinarian,
            crate::models::VeterinarianResponse,
            crate::models::CreateVeterinarianRequest,
            crate::models::UpdateVeterinarianRequest,
        )
    )
)]
pub struct ApiDoc;
