mod home;
pub use home::Home;

mod register;
pub use register::Register;

mod shell;
pub use shell::Shell;
