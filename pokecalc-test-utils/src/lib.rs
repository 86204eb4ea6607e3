mod data_store;
mod error_assert;

pub use data_store::{
    TestDataStore,
    test_data_dir,
};
pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
