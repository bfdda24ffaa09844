pub mod attendance;
pub mod check;
pub mod presence;
pub mod student;
