mod finder_service;
mod registrar_service;

pub use finder_service::FinderService;
pub use registrar_service::RegistrarService;
