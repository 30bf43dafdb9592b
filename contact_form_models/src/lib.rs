pub mod contact;
pub mod email_address;
pub mod form;
mod macros;
pub mod validation;
pub mod view;
