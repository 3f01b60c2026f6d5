pub mod decode;
pub mod http;
pub mod memory;
pub mod traits;
