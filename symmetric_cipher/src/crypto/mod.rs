pub mod cipher_traits;
pub mod error;
pub mod utils;
