pub mod health;
pub mod home;
pub mod submissions;
pub mod submit;
