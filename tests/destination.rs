//! Tests for the file-or-database rule.

use scalog::destination::{resolve, should_write_to_database};
use scalog::{Destination, Environment, EnvironmentSource};

#[test]
fn always_flag_wins_in_every_environment() {
    for env in [Environment::Development, Environment::Production] {
        assert!(should_write_to_database(true, true, env));
        assert!(should_write_to_database(true, false, env));
    }
}

#[test]
fn connection_goes_to_database_only_outside_development() {
    assert!(should_write_to_database(false, true, Environment::Production));
    assert!(!should_write_to_database(false, true, Environment::Development));
}

#[test]
fn no_connection_means_file() {
    assert!(!should_write_to_database(false, false, Environment::Production));
    assert!(!should_write_to_database(false, false, Environment::Development));
}

#[test]
fn environment_values() {
    assert_eq!(Environment::from_value(None), Environment::Development);
    assert_eq!(Environment::from_value(Some("  ")), Environment::Development);
    assert_eq!(Environment::from_value(Some("Development")), Environment::Development);
    assert_eq!(Environment::from_value(Some("DEV")), Environment::Development);
    assert_eq!(Environment::from_value(Some("production")), Environment::Production);
    assert_eq!(Environment::from_value(Some("staging")), Environment::Production);
}

#[test]
fn fixed_source_ignores_variables() {
    let source = EnvironmentSource::Fixed(Environment::Production);
    assert_eq!(resolve(false, true, &source), Destination::Database);
}

#[test]
fn variable_source_is_read_on_every_call() {
    const VAR: &str = "SCALOG_TEST_DESTINATION_REREAD";
    let source = EnvironmentSource::Variable(VAR.to_string());

    // SAFETY: the variable name is unique to this test.
    unsafe { std::env::set_var(VAR, "production") };
    assert_eq!(resolve(false, true, &source), Destination::Database);

    unsafe { std::env::set_var(VAR, "development") };
    assert_eq!(resolve(false, true, &source), Destination::File);

    unsafe { std::env::remove_var(VAR) };
    assert_eq!(resolve(false, true, &source), Destination::File);
}

#[test]
fn default_source_reads_scalog_environment() {
    assert_eq!(
        EnvironmentSource::default(),
        EnvironmentSource::Variable("SCALOG_ENVIRONMENT".to_string())
    );
}
