//! Authentication endpoints: registration, login, and the email
//! verification pair (send-code / verify-code).

pub mod login;
pub mod register;
pub mod send_code;
pub mod verify_code;

pub use login::login;
pub use register::register;
pub use send_code::send_code;
pub use verify_code::verify_code;
