use crate::core::domain::Configuration;
use crate::library::domain::LibraryService;
use crate::library::domain::service::LibraryServiceImpl;

pub fn create_library_service(config: &Configuration) -> Box<dyn LibraryService> {
    Box::new(LibraryServiceImpl::new(config))
}
