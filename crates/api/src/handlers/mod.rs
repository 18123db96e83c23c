pub mod contact;
pub mod errors;
pub mod pages;
