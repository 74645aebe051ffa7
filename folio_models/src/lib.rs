pub mod config_status;
pub mod contact;
pub mod email;
pub mod email_address;
