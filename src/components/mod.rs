pub mod contact_form;
pub mod cursor;
pub mod navbar;
pub mod pointer_effects;
pub mod progress_bar;
pub mod sections;
