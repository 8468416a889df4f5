pub mod credentials;
pub mod film;
pub mod user;

pub use credentials::*;
pub use film::*;
pub use user::*;
