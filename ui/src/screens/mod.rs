// This file makes the screen modules available to the rest of the application.

pub mod about;
pub mod admin;
pub mod booking;
pub mod contact;
pub mod faq;
pub mod home;
pub mod legal;
pub mod login;
pub mod not_found;
pub mod pricing;
pub mod services;
