use outcome_rail::{failure, success, Outcome, Variant};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn success_reports_ok_and_exposes_value() {
    let out: Outcome<i32, String> = success(42);

    assert!(out.is_ok());
    assert!(!out.is_err());
    assert!(!out.is_lazy());
    assert!(out.is_evaluated());
    assert_eq!(out.variant(), Variant::Success);
    assert_eq!(out.value(), Some(&42));
    assert_eq!(out.get_error(), None);
    assert!(out.context().is_some_and(|ctx| ctx.is_empty()));
}

#[test]
fn failure_reports_err_and_exposes_error() {
    let out: Outcome<i32, &str> = failure("fail");

    assert!(out.is_err());
    assert!(!out.is_ok());
    assert_eq!(out.variant(), Variant::Failure);
    assert_eq!(out.value(), None);
    assert_eq!(out.get_error(), Some(&"fail"));
    assert!(out.context().is_none());
}

#[test]
fn map_transforms_success_value() {
    let out: Outcome<i32, String> = success(5).map(|x| x * 2);
    assert_eq!(out.unwrap(), 10);
}

#[test]
fn map_skips_callback_on_failure() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let out: Outcome<i32, &str> = failure("error");

    let mapped = out.map(move |x| {
        counter.set(counter.get() + 1);
        x * 2
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(mapped.get_error(), Some(&"error"));
}

#[test]
fn map_keeps_failure_error_unchanged() {
    let out: Outcome<i32, &str> = failure("error");
    let mapped = out.map(|x| x.to_string());

    assert_eq!(mapped.into_error(), Some("error"));
}

#[test]
fn bind_chains_successes_and_stops_at_first_failure() {
    let half = |n: i32| -> Outcome<'static, i32, String> {
        if n % 2 == 0 {
            success(n / 2)
        } else {
            failure(format!("{n} is odd"))
        }
    };

    assert_eq!(success(20).bind(half).bind(half).unwrap(), 5);

    let calls = Cell::new(0);
    let stopped = success(6).bind(half).bind(half).bind(|n| {
        calls.set(calls.get() + 1);
        success(n)
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(stopped.into_error().as_deref(), Some("3 is odd"));
}

#[test]
fn bind_can_turn_success_into_failure() {
    let out: Outcome<i32, &str> = success(5).bind(|_| failure("nope"));
    assert_eq!(out.get_error(), Some(&"nope"));
}

#[test]
fn map_err_transforms_only_failures() {
    let err: Outcome<(), &str> = failure("not found");
    let mapped = err.map_err(|e| format!("Error: {e}"));
    assert_eq!(mapped.into_error().as_deref(), Some("Error: not found"));

    let calls = Cell::new(0);
    let ok: Outcome<i32, &str> = success(1);
    let mapped = ok.map_err(|e| {
        calls.set(calls.get() + 1);
        e.len()
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(mapped.unwrap(), 1);
}

#[test]
fn map_err_keeps_success_context() {
    let out: Outcome<i32, &str> = success(1).use_("flag", |_, _| success(true));
    let mapped = out.map_err(|e| e.to_uppercase());

    assert_eq!(mapped.context().and_then(|ctx| ctx.get::<bool>("flag")), Some(&true));
}

#[test]
fn tap_observes_success_and_returns_self() {
    let seen = Cell::new(0);
    let out: Outcome<i32, String> = success(7).tap(|v| seen.set(*v));

    assert_eq!(seen.get(), 7);
    assert_eq!(out.unwrap(), 7);
}

#[test]
fn tap_is_skipped_on_failure() {
    let seen = Cell::new(false);
    let out: Outcome<i32, &str> = failure("x");
    let out = out.tap(|_| seen.set(true));

    assert!(!seen.get());
    assert_eq!(out.get_error(), Some(&"x"));
}

#[test]
fn tap_err_observes_failure_only() {
    let seen = Cell::new(None);
    let err: Outcome<i32, &str> = failure("oops");
    let err = err.tap_err(|e| seen.set(Some(*e)));
    assert_eq!(seen.get(), Some("oops"));
    assert!(err.is_err());

    let called = Cell::new(false);
    let ok: Outcome<i32, &str> = success(1);
    let _ = ok.tap_err(|_| called.set(true));
    assert!(!called.get());
}

#[test]
fn unwrap_or_returns_default_for_failure() {
    let ok: Outcome<i32, &str> = success(42);
    let err: Outcome<i32, &str> = failure("x");

    assert_eq!(ok.unwrap_or(0), 42);
    assert_eq!(err.unwrap_or(0), 0);
}

#[test]
fn unwrap_or_else_computes_from_error() {
    let err: Outcome<usize, &str> = failure("four");
    assert_eq!(err.unwrap_or_else(str::len), 4);

    let ok: Outcome<usize, &str> = success(9);
    assert_eq!(ok.unwrap_or_else(str::len), 9);
}

#[test]
#[should_panic(expected = "boom")]
fn unwrap_panics_with_textual_error() {
    let out: Outcome<i32, String> = failure("boom".to_string());
    out.unwrap();
}

#[test]
#[should_panic(expected = "Failure value encountered in unwrap()")]
fn unwrap_panics_with_generic_message_for_non_text_errors() {
    let out: Outcome<i32, u16> = failure(404);
    out.unwrap();
}

#[test]
fn get_error_on_success_is_none() {
    let out: Outcome<i32, String> = success(1);
    assert!(out.get_error().is_none());
    assert!(out.into_error().is_none());
}

#[test]
fn flatten_collapses_nested_success() {
    let nested: Outcome<Outcome<i32, &str>, &str> = success(success(5));
    assert_eq!(nested.flatten().unwrap(), 5);
}

#[test]
fn flatten_returns_inner_failure() {
    let nested: Outcome<Outcome<i32, &str>, &str> = success(failure("inner"));
    assert_eq!(nested.flatten().get_error(), Some(&"inner"));
}

#[test]
fn flatten_keeps_outer_failure() {
    let nested: Outcome<Outcome<i32, &str>, &str> = failure("outer");
    assert_eq!(nested.flatten().get_error(), Some(&"outer"));
}

#[test]
fn flatten_uses_inner_context() {
    let inner: Outcome<i32, &str> = success(1).use_("inner", |_, _| success(2u8));
    let nested: Outcome<Outcome<i32, &str>, &str> =
        success(inner).use_("outer", |_, _| success(3u8));

    let flat = nested.flatten();
    let ctx = flat.context().unwrap();
    assert!(ctx.contains("inner"));
    assert!(!ctx.contains("outer"));
}

#[test]
fn into_result_converts_both_variants() {
    let ok: Outcome<i32, &str> = success(1);
    let err: Outcome<i32, &str> = failure("e");

    assert_eq!(ok.into_result(), Ok(1));
    assert_eq!(err.into_result(), Err("e"));
}

#[test]
fn map_with_reads_context_in_insertion_order() {
    let out: Outcome<String, String> = success("order")
        .use_("first", |_, _| success(1u8))
        .use_("second", |_, _| success(2u8))
        .use_("third", |_, _| success(3u8))
        .map_with(|value, ctx| {
            let names: Vec<&str> = ctx.names().collect();
            format!("{value}: {}", names.join(","))
        });

    assert_eq!(out.unwrap(), "order: first,second,third");
}

#[test]
fn map_with_keeps_context() {
    let out: Outcome<i32, String> = success(2)
        .use_("factor", |_, _| success(5i32))
        .map_with(|v, ctx| v * ctx.get::<i32>("factor").copied().unwrap_or(0));

    assert_eq!(out.value(), Some(&10));
    assert_eq!(out.context().map(|ctx| ctx.len()), Some(1));
}

#[test]
fn map_with_skips_callback_on_failure() {
    let called = Rc::new(Cell::new(false));
    let flag = Rc::clone(&called);
    let out: Outcome<i32, &str> = failure("stop");

    let mapped = out.map_with(move |v, _| {
        flag.set(true);
        v
    });

    assert!(!called.get());
    assert_eq!(mapped.get_error(), Some(&"stop"));
}

#[test]
fn map_with_args_destructures_context_positionally() {
    let out: Outcome<String, String> = success(())
        .use_("name", |_, _| success("Luna".to_string()))
        .use_("age", |_, _| success(7u32))
        .map_with_args(|_, (name, age): (String, u32)| format!("{name} is {age}"));

    assert_eq!(out.unwrap(), "Luna is 7");
}

#[test]
fn map_with_args_fails_on_type_mismatch() {
    let out: Outcome<u32, String> = success(())
        .use_("name", |_, _| success("Luna".to_string()))
        .map_with_args(|_, (age,): (u32,)| age);

    let error = out.into_error().unwrap();
    assert!(error.contains("'name'"));
    assert!(error.contains("u32"));
}

#[test]
fn map_with_args_fails_when_fields_are_missing() {
    let out: Outcome<u32, String> = success(())
        .use_("one", |_, _| success(1u32))
        .map_with_args(|_, (a, b): (u32, u32)| a + b);

    assert_eq!(out.into_error().as_deref(), Some("context field #1 requested but only 1 stored"));
}

#[test]
fn map_accepts_closures_borrowing_locals() {
    let factor = String::from("four");
    let f = &factor;

    let out: Outcome<usize, String> = success(1usize).map(move |n| n + f.len());
    assert_eq!(out.unwrap(), 5);
}

#[test]
fn values_may_borrow_from_the_caller() {
    let owned = String::from("borrowed");

    let out: Outcome<&str, ()> = success(owned.as_str());
    assert_eq!(out.map(|s| s.len()).unwrap(), 8);

    let with: Outcome<String, ()> = success(owned.as_str())
        .use_("suffix", |_, _| success('!'))
        .map_with(|s, ctx| format!("{s}{}", ctx.get::<char>("suffix").copied().unwrap_or('?')));
    assert_eq!(with.unwrap(), "borrowed!");
}

#[test]
#[should_panic(expected = "boom")]
fn unwrap_panics_with_borrowed_textual_error() {
    let owned = String::from("boom");
    let out: Outcome<i32, &str> = failure(owned.as_str());
    out.unwrap();
}
