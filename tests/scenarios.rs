use quienny::*;

fn minimize(input: &str) -> Result<String, QuiennyError> {
    let mut output = Vec::new();
    batch::run(input.as_bytes(), "<test>", &mut output, &Config::default())?;
    Ok(String::from_utf8(output).unwrap())
}

#[test]
fn constant_true() -> Result<(), QuiennyError> {
    assert_eq!(minimize("00\n01\n10\n11\n")?, "--\n");
    Ok(())
}

#[test]
fn single_minterm() -> Result<(), QuiennyError> {
    assert_eq!(minimize("00\n")?, "00\n");
    Ok(())
}

#[test]
fn distant_minterms() -> Result<(), QuiennyError> {
    assert_eq!(minimize("11\n00\n")?, "00\n11\n");
    Ok(())
}

#[test]
fn half_cube() -> Result<(), QuiennyError> {
    assert_eq!(minimize("000\n001\n010\n011\n")?, "0--\n");
    Ok(())
}

#[test]
fn empty_input() -> Result<(), QuiennyError> {
    assert_eq!(minimize("")?, "");
    Ok(())
}

#[test]
fn duplicate_rows() -> Result<(), QuiennyError> {
    assert_eq!(minimize("10\n10\n10\n")?, "10\n");
    Ok(())
}

#[test]
fn zero_variables() -> Result<(), QuiennyError> {
    assert_eq!(minimize("\n\n")?, "\n");
    Ok(())
}

#[test]
fn all_but_one() -> Result<(), QuiennyError> {
    let input = tools::minterm_table(6, true);
    let output = minimize(&input)?;
    assert_eq!(output.lines().count(), 6);
    for line in output.lines() {
        assert_eq!(line.matches('0').count(), 1);
        assert_eq!(line.matches('-').count(), 5);
    }
    Ok(())
}

#[test]
fn capacity_rejection() {
    let input = format!("{}\n", "1".repeat(65));
    let mut output = Vec::new();
    let err = batch::run(input.as_bytes(), "wide.txt", &mut output, &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        QuiennyError::Parse {
            line: 1,
            kind: ParseError::Capacity { capacity: 64 },
            ..
        }
    ));

    let config = Config::new(Representation::Growable, Strategy::Sliced);
    batch::run(input.as_bytes(), "wide.txt", &mut output, &config).unwrap();
    assert_eq!(output, format!("{}\n", "1".repeat(65)).into_bytes());
}

#[test]
fn wide_growable() -> Result<(), QuiennyError> {
    // Two minterms over 100 variables differing in the last one
    let a = format!("{}0\n", "10".repeat(50).get(..99).unwrap());
    let b = format!("{}1\n", "10".repeat(50).get(..99).unwrap());
    let mut output = Vec::new();
    let config = Config::new(Representation::Growable, Strategy::Sliced);
    batch::run(format!("{}{}", a, b).as_bytes(), "<test>", &mut output, &config)?;
    let expected = format!("{}-\n", "10".repeat(50).get(..99).unwrap());
    assert_eq!(String::from_utf8(output).unwrap(), expected);
    Ok(())
}
