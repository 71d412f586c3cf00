pub mod advice;
pub mod market;
pub mod session;
