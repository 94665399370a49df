pub mod client;
pub mod http;
pub mod in_process;
