pub mod context;
pub mod cursor;
pub mod error;
pub mod module;
pub mod protocol;
pub mod route;
pub mod snapshot;
pub mod swapinfo;
