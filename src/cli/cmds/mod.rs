pub mod drill;
pub mod init;
pub mod root;
pub mod table;
