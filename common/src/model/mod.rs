pub mod attachment;
pub mod location;
pub mod observation;
pub mod schema;
pub mod station;
