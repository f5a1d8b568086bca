pub mod contact;
pub mod cursor;
pub mod scroll;
pub mod theme;
