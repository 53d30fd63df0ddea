pub mod allocator;
pub mod client;
pub mod error;
pub mod presenter;
pub mod protocol;
pub mod usecase;
// cmd and reports are binary modules (declared in main.rs).
