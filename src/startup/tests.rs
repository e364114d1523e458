#![cfg(test)]

use super::*;

fn server_arguments() -> ArgumentRegistry {
    let mut args = ArgumentRegistry::new();
    args.add("port", 8080).add("host", "localhost");
    args
}

#[test]
fn test_argument_state() {
    let mut arg = StartupArgument::new(20);
    assert!(!arg.is_set(), "A new argument shouldn't have an explicit value.");
    assert_eq!(*arg.value(), 20, "An unset argument should resolve to its default.");

    assert_eq!(arg.set_value(30), None);
    assert!(arg.is_set());
    assert_eq!(*arg.value(), 30, "An explicit value should take the place of the default.");

    assert_eq!(
        arg.set_value(40),
        Some(30),
        "Setting again should return the replaced value."
    );
    assert_eq!(*arg.value(), 40, "The last value set should win.");
    assert_eq!(*arg.default_value(), 20, "The default should never change.");
    assert_eq!(arg.into_value(), 40);

    assert_eq!(StartupArgument::new("a").into_value(), "a");
}

#[test]
fn test_argument_equality() {
    assert_eq!(StartupArgument::new(1), StartupArgument::new(1));
    assert_eq!(
        StartupArgument::with_value(2, 1),
        StartupArgument::with_value(2, 1)
    );
    assert_ne!(
        StartupArgument::with_value(2, 1),
        StartupArgument::with_value(3, 1),
        "Arguments with different values should differ."
    );
    assert_ne!(
        StartupArgument::with_value(2, 1),
        StartupArgument::with_value(2, 5),
        "Arguments with different defaults should differ."
    );
    assert_ne!(
        StartupArgument::with_value(1, 1),
        StartupArgument::new(1),
        "An argument set to its default is still distinct from an unset one."
    );

    let debug = format!("{:?}", StartupArgument::with_value(2, 1));
    assert!(
        debug.contains("value: Some(2)") && debug.contains("default_value: 1"),
        "Debug output should expose both fields."
    );
}

#[test]
fn test_missing_keys() {
    let args = server_arguments();
    assert!(args.get("timeout").is_none(), "Unregistered keys should be absent.");
    assert!(!args.contains_key("timeout"));
    assert!(ArgumentRegistry::new().get("port").is_none());

    let error = args.get_as::<i32>("timeout").unwrap_err();
    assert!(error.is_missing());
    assert_eq!(
        error.to_string(),
        "no startup argument registered under key \"timeout\""
    );
}

#[test]
fn test_defaults_and_overrides() {
    let mut args = server_arguments();
    assert_eq!(args.len(), 2);
    assert_eq!(
        args.get("port").map(|a| a.value()),
        Some(&ArgumentValue::Int(8080)),
        "An argument that was never set should resolve to its default."
    );
    assert_eq!(
        args.get("host").map(|a| a.value()),
        Some(&ArgumentValue::Str("localhost".into()))
    );

    args.get_mut("port")
        .expect("port should be registered")
        .set_value(ArgumentValue::Int(9090));
    assert_eq!(args.get_as::<i32>("port").ok(), Some(9090));

    args.set("port", 9091).expect("the kinds should match");
    assert_eq!(
        args.get_as::<i32>("port").ok(),
        Some(9091),
        "The last value set should win."
    );
}

#[test]
fn test_re_adding_discards_previous() {
    let mut args = server_arguments();
    args.set("port", 9090).expect("the kinds should match");

    args.add("port", 25565);
    let port = args.get("port").expect("port should still be registered");
    assert!(!port.is_set(), "Re-adding should discard the previously set value.");
    assert_eq!(*port.value(), ArgumentValue::Int(25565));
    assert_eq!(args.len(), 2, "Re-adding shouldn't create a second entry.");

    args.add("port", "any");
    assert_eq!(
        args.get_as::<String>("port").ok().as_deref(),
        Some("any"),
        "Re-adding may change the kind of an argument."
    );
}

#[test]
fn test_typed_access() {
    let mut args = ArgumentRegistry::new();
    args.add("online", true)
        .add("ratio", 0.5)
        .add("motd", String::from("hello"))
        .add("big", i64::MAX);

    assert_eq!(args.get_as::<bool>("online").ok(), Some(true));
    assert_eq!(args.get_as::<f64>("ratio").ok(), Some(0.5));
    assert_eq!(args.get_as::<String>("motd").ok().as_deref(), Some("hello"));
    assert_eq!(args.get_as::<i64>("big").ok(), Some(i64::MAX));

    let error = args.get_as::<i32>("big").unwrap_err();
    assert!(
        error.is_type_mismatch(),
        "An integer out of range for the requested type should be a mismatch, not a truncation."
    );

    match args.get_as::<f64>("online") {
        Err(ArgumentError::TypeMismatch(mismatch)) => {
            assert_eq!(mismatch.key, "online");
            assert_eq!(mismatch.expected, ArgumentKind::Float);
            assert_eq!(mismatch.found, ArgumentKind::Bool);
            assert_eq!(
                mismatch.to_string(),
                "startup argument \"online\" holds a bool value, which can't be used as a float"
            );
        },
        other => panic!("expected a type mismatch, got {other:?}"),
    }
}

#[test]
fn test_set_checks_kind() {
    let mut args = server_arguments();

    let error = args.set("port", "not a port").unwrap_err();
    assert!(error.is_type_mismatch());
    assert!(
        !args.get("port").is_some_and(|a| a.is_set()),
        "A rejected value shouldn't be stored."
    );

    assert!(args.set("timeout", 30).unwrap_err().is_missing());
    assert!(!args.contains_key("timeout"), "Setting shouldn't register new keys.");
}

#[test]
fn test_build_leaves_arguments_unchanged() {
    let mut args = server_arguments();
    args.set("host", "0.0.0.0").expect("the kinds should match");
    let before = args.clone();

    args.build(["--port", "1234", "--host=example.org"]);
    assert_eq!(args, before, "Raw arguments shouldn't be bound to registered keys.");

    args.build(Vec::<String>::new()).add("timeout", 30);
    assert_eq!(args.len(), 3, "Building should still allow chaining.");
}

#[test]
fn test_iteration_order() {
    let mut args = server_arguments();
    args.add("timeout", 30).add("port", 1);

    assert_eq!(
        args.iter().map(|(k, _)| k).collect::<Vec<_>>(),
        ["port", "host", "timeout"],
        "Keys should iterate in the order they were first registered."
    );
    assert_eq!((&args).into_iter().count(), 3);
}

#[test]
fn test_value_conversions() {
    assert_eq!(ArgumentValue::from(8080_u16), ArgumentValue::Int(8080));
    assert_eq!(ArgumentValue::from(-1_i8), ArgumentValue::Int(-1));
    assert_eq!(ArgumentValue::from("a"), ArgumentValue::Str("a".into()));
    assert_eq!(ArgumentValue::from(1.5).kind(), ArgumentKind::Float);
    assert!(ArgumentValue::from(false).is_bool());

    assert_eq!(ArgumentValue::Int(3).to_string(), "3");
    assert_eq!(ArgumentValue::Str("localhost".into()).to_string(), "localhost");

    assert_eq!(u8::from_value(&ArgumentValue::Int(256)), None);
    assert_eq!(u8::from_value(&ArgumentValue::Int(255)), Some(255));
    assert_eq!(
        f64::from_value(&ArgumentValue::Int(1)),
        None,
        "Integers shouldn't be coerced into floats."
    );
}
