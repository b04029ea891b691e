pub mod admin;
pub mod form;
pub mod header;
pub mod site;
