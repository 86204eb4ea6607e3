use std::fmt::Display;

/// [`assert`]s that the result is an error with the given message.
#[track_caller]
pub fn assert_error_message<T, E>(result: Result<T, E>, message: &str)
where
    E: Display,
{
    match result {
        Ok(_) => panic!("expected error \"{message}\", got Ok"),
        Err(err) => assert_eq!(err.to_string(), message),
    }
}

/// [`assert`]s that the result is an error that contains the given message.
///
/// The full context chain of the error is searched.
#[track_caller]
pub fn assert_error_message_contains<T, E>(result: Result<T, E>, message: &str)
where
    E: Display,
{
    match result {
        Ok(_) => panic!("expected error containing \"{message}\", got Ok"),
        Err(err) => {
            let err = format!("{err:#}");
            assert!(
                err.contains(message),
                "expected error containing \"{message}\", got \"{err}\""
            );
        }
    }
}
