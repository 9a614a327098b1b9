pub mod auth_service;
pub mod clinic_service;
pub mod veterinarian_service;

pub use auth_service::AuthService;
pub use clinic_service::ClinicService;
pub use veterinarian_service::VeterinarianService;
