pub mod config;
pub mod copy;
pub mod dispatch;
pub mod list;
pub mod local;
pub mod preview;
pub mod upload;
pub mod visibility;

#[cfg(test)]
pub(crate) mod test_support;
