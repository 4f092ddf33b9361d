//! Integration tests for async extensions.

#[cfg(feature = "async")]
mod async_result_tests;


#[cfg(feature = "async")]
mod collect_all_tests;
