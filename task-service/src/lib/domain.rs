pub mod access;
pub mod task;
pub mod user;

#[cfg(test)]
pub(crate) mod mocks;
