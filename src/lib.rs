pub mod constants;
pub mod rpc;
pub mod utils;
