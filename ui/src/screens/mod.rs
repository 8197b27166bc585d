// This file makes the screen modules available to the rest of the application.

pub mod dashboard;
pub mod history;
pub mod home;
pub mod login;
pub mod not_found;
pub mod pharmacy_dashboard;
pub mod request_detail;
