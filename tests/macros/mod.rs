use safetry::{fail, safe, Error, RunConfig, SafeResult};

#[test]
fn safe_macro_wraps_expression() {
    let result = safe!("12".parse::<u32>());
    assert_eq!(result.unwrap(), 12);
}

#[test]
fn safe_macro_wraps_block() {
    let result = safe!({
        let raw = "not a number";
        raw.parse::<u32>()
    });

    assert_eq!(result.unwrap_err().message(), "invalid digit found in string");
}

#[test]
fn safe_macro_catches_panics() {
    let result: SafeResult<()> = safe!({
        if "trigger".len() > 3 {
            panic!("macro panic");
        }
        Ok::<_, Error>(())
    });

    assert_eq!(result.unwrap_err().message(), "macro panic");
}

#[test]
fn safe_macro_uses_given_config() {
    let config = RunConfig::new().error_transform(|_| Error::new("from config"));
    let result = safe!(config => Err::<(), _>("original"));

    assert_eq!(result.unwrap_err().message(), "from config");
}

#[test]
fn fail_macro_formats_message() {
    let result: SafeResult<i32> = fail!("user {} not found in {}", 42, "accounts");
    assert_eq!(result.unwrap_err().message(), "user 42 not found in accounts");
}

#[test]
fn fail_macro_supports_early_return() {
    fn check(age: u32) -> SafeResult<u32> {
        if age < 18 {
            return fail!("age {age} is below 18");
        }
        Ok(age)
    }

    assert_eq!(check(21), Ok(21));
    assert_eq!(check(3).unwrap_err(), Error::new("age 3 is below 18"));
}
