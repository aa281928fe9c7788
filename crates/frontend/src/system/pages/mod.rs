pub mod home;
pub mod redirect;
pub mod session_required;
