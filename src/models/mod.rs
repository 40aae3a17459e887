pub mod query;
pub mod sensor;

pub use query::{QueryParameters, SensorCategory};
pub use sensor::SensorRecord;
