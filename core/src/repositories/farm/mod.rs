mod mock;
mod repository;

pub use mock::MockFarmStore;
pub use repository::{
    ActivityRepository, AnimalRepository, CropRepository, FarmRepository, FieldRepository,
    ProfileRepository,
};
