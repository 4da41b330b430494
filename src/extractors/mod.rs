mod rejection;

pub use rejection::{ApiJson, ApiPath, ApiQuery};
