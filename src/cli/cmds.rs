pub mod init;
pub mod labels;
pub mod monthly;
pub mod root;
pub mod sum;
