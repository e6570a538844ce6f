//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;
mod password;

pub use charset::PoolMode;
pub use generate::generate;
pub use password::Password;
