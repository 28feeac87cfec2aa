mod mock;
mod repository;

pub use mock::MockUserRepository;
pub use repository::UserRepository;
