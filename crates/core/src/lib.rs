mod env;
mod env_file;
mod provider;

pub use env::*;
pub use env_file::*;
pub use provider::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
