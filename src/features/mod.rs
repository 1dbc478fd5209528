pub mod contact;
pub mod pages;
pub mod registration;
pub mod users;
