pub mod agreement;
pub mod init;
pub mod inspect;
