pub mod clinic;
pub mod user;
pub mod veterinarian;

pub use clinic::{Clinic, CreateClinicRequest, UpdateClinicRequest};
pub use user::{Capability, User, UserPublic, UserRole};
pub use veterinarian::{
    CreateVeterinarianRequest, UpdateVeterinarianRequest, Veterinarian, VeterinarianResponse,
};
