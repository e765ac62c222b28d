use outcome_rail::{failure, lazy_success, success, Outcome, UnwrapError, UNWRAP_ON_FAILURE};
use std::borrow::Cow;
use std::error::Error;

#[test]
fn try_unwrap_returns_value_for_successes() {
    let eager: Outcome<i32, String> = success(1);
    let lazy: Outcome<i32, String> = lazy_success(|| 2);

    assert_eq!(eager.try_unwrap().ok(), Some(1));
    assert_eq!(lazy.try_unwrap().ok(), Some(2));
}

#[test]
fn textual_errors_become_the_message() {
    let owned: Outcome<(), String> = failure("owned".to_string());
    let borrowed: Outcome<(), &'static str> = failure("borrowed");
    let cow: Outcome<(), Cow<'static, str>> = failure(Cow::Borrowed("cow"));

    assert_eq!(owned.try_unwrap().unwrap_err().message(), "owned");
    assert_eq!(borrowed.try_unwrap().unwrap_err().message(), "borrowed");
    assert_eq!(cow.try_unwrap().unwrap_err().message(), "cow");
}

#[test]
fn non_textual_errors_use_generic_message() {
    #[derive(Debug, PartialEq)]
    struct Code(u16);

    let out: Outcome<(), Code> = failure(Code(404));
    let fault = out.try_unwrap().unwrap_err();

    assert_eq!(fault.message(), UNWRAP_ON_FAILURE);
    assert_eq!(fault.to_string(), UNWRAP_ON_FAILURE);
    assert_eq!(fault.error(), &Code(404));
    assert_eq!(fault.into_error(), Code(404));
}

#[test]
fn unwrap_error_is_a_std_error() {
    let out: Outcome<(), &str> = failure("io");
    let fault: UnwrapError<&str> = out.try_unwrap().unwrap_err();
    let boxed: Box<dyn Error> = Box::new(fault);

    assert_eq!(boxed.to_string(), "io");
}

#[test]
fn unwrap_error_debug_includes_error_and_message() {
    let out: Outcome<(), u8> = failure(3);
    let fault = out.try_unwrap().unwrap_err();

    let debug = format!("{fault:?}");
    assert!(debug.starts_with("UnwrapError { error: 3"));
    assert!(debug.contains("Check is_ok()"));
}

#[test]
fn borrowed_textual_errors_become_the_message() {
    let owned = String::from("short lived");
    let borrowed: Outcome<(), &str> = failure(owned.as_str());
    let cow: Outcome<(), Cow<'_, str>> = failure(Cow::Borrowed(owned.as_str()));

    assert_eq!(borrowed.try_unwrap().unwrap_err().message(), "short lived");
    assert_eq!(cow.try_unwrap().unwrap_err().message(), "short lived");
}
