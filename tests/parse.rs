//! Integration tests for parsing raw tokens into objects.

use argtree::args::{parse, ArgsError, Flag, Object};
use argtree::config::{Config, ConfigCommand, ConfigFlag};

fn open_config() -> Config {
    Config::new(ConfigCommand::new("tldr"))
        .allow_unconfigured_flags()
        .allow_multiple_flags()
}

// =============================================================================
// COMMANDS AND ARGUMENTS
// =============================================================================

#[test]
fn parse_argument() {
    let config = Config::new(ConfigCommand::new("tldr"));
    let objects = parse(&config, ["tldr", "nmap"]).unwrap();
    assert_eq!(
        objects.to_vec(),
        vec![Object::command("tldr"), Object::argument("nmap")]
    );
}

#[test]
fn parse_empty_input_fails() {
    let config = Config::new(ConfigCommand::new("tldr"));
    assert_eq!(
        parse(&config, Vec::<String>::new()),
        Err(ArgsError::EmptyInput)
    );
}

#[test]
fn first_token_is_root_command_whatever_its_name() {
    let config = Config::new(ConfigCommand::new("tldr"));
    let objects = parse(&config, ["/usr/bin/tldr"]).unwrap();
    assert_eq!(objects.to_vec(), vec![Object::command("/usr/bin/tldr")]);
}

#[test]
fn parse_subcommand_and_argument() {
    let config = Config::new(ConfigCommand::new("tldr").with_command(ConfigCommand::new("add")));
    let objects = parse(&config, ["tldr", "add", "nmap"]).unwrap();
    assert_eq!(
        objects.to_vec(),
        vec![
            Object::command("tldr"),
            Object::command("add"),
            Object::argument("nmap"),
        ]
    );
}

#[test]
fn unknown_plain_token_is_an_argument() {
    let config = Config::new(ConfigCommand::new("tldr").with_command(ConfigCommand::new("add")));
    let objects = parse(&config, ["tldr", "nmap"]).unwrap();
    assert_eq!(
        objects.to_vec(),
        vec![Object::command("tldr"), Object::argument("nmap")]
    );
}

#[test]
fn subcommand_ends_parent_level() {
    let config = Config::new(
        ConfigCommand::new("git")
            .with_command(ConfigCommand::new("remote").with_command(ConfigCommand::new("add")))
            .with_command(ConfigCommand::new("status")),
    );
    let objects = parse(&config, ["git", "x", "remote", "add", "status", "origin"]).unwrap();
    assert_eq!(
        objects.to_vec(),
        vec![
            Object::command("git"),
            Object::argument("x"),
            Object::command("remote"),
            Object::command("add"),
            // A sibling of `remote` is just an argument once inside it.
            Object::argument("status"),
            Object::argument("origin"),
        ]
    );
    assert_eq!(objects.commands(), vec!["git", "remote", "add"]);
}

// =============================================================================
// FLAGS
// =============================================================================

#[test]
fn parse_bool_flag_and_argument() {
    let config =
        Config::new(ConfigCommand::new("tldr").with_flag(ConfigFlag::boolean("--verbose")));
    let objects = parse(&config, ["tldr", "--verbose", "nmap"]).unwrap();
    assert_eq!(
        objects.to_vec(),
        vec![
            Object::command("tldr"),
            Flag::boolean("--verbose").into(),
            Object::argument("nmap"),
        ]
    );
}

#[test]
fn parse_flag_and_argument() {
    let config = Config::new(ConfigCommand::new("tldr").with_flag(ConfigFlag::value("--level")));
    let objects = parse(&config, ["tldr", "--level", "5", "nmap"]).unwrap();
    assert_eq!(
        objects.to_vec(),
        vec![
            Object::command("tldr"),
            Flag::with_value("--level", "5").into(),
            Object::argument("nmap"),
        ]
    );
}

#[test]
fn value_flag_followed_by_flag_is_invalid() {
    let config = Config::new(
        ConfigCommand::new("tldr")
            .with_flag(ConfigFlag::value("--level"))
            .with_flag(ConfigFlag::boolean("--verbose")),
    );
    assert_eq!(
        parse(&config, ["tldr", "--level", "--verbose"]),
        Err(ArgsError::InvalidFlag("--level".into()))
    );
    assert_eq!(
        parse(&config, ["tldr", "--level"]),
        Err(ArgsError::InvalidFlag("--level".into()))
    );
}

#[test]
fn unconfigured_flag_rejected_by_default() {
    let config = Config::new(ConfigCommand::new("tldr"));
    assert_eq!(
        parse(&config, ["tldr", "--typo"]),
        Err(ArgsError::UnconfiguredFlag("--typo".into()))
    );
}

#[test]
fn unconfigured_flag_takes_value_when_available() {
    let config = Config::new(ConfigCommand::new("tldr")).allow_unconfigured_flags();
    let objects = parse(&config, ["tldr", "--a", "1", "--b", "--c"]).unwrap();
    assert_eq!(
        objects.to_vec(),
        vec![
            Object::command("tldr"),
            Flag::with_value("--a", "1").into(),
            Flag::boolean("--b").into(),
            Flag::boolean("--c").into(),
        ]
    );
}

#[test]
fn subcommand_flags_shadow_parent_flags() {
    let config = Config::new(
        ConfigCommand::new("tldr")
            .with_command(ConfigCommand::new("add").with_flag(ConfigFlag::value("--level")))
            .with_flag(ConfigFlag::boolean("--level")),
    );
    let objects = parse(&config, ["tldr", "add", "--level", "5", "nmap"]).unwrap();
    assert_eq!(
        objects.to_vec(),
        vec![
            Object::command("tldr"),
            Object::command("add"),
            Flag::with_value("--level", "5").into(),
            Object::argument("nmap"),
        ]
    );

    // At the root the same flag is bool, so `5` stays an argument.
    let objects = parse(&config, ["tldr", "--level", "5"]).unwrap();
    assert_eq!(
        objects.to_vec(),
        vec![
            Object::command("tldr"),
            Flag::boolean("--level").into(),
            Object::argument("5"),
        ]
    );
}

#[test]
fn parent_flags_are_visible_in_subcommands() {
    let config = Config::new(
        ConfigCommand::new("tldr")
            .with_command(ConfigCommand::new("add"))
            .with_flag(ConfigFlag::boolean("--verbose")),
    );
    let objects = parse(&config, ["tldr", "add", "--verbose"]).unwrap();
    assert!(objects.flag("--verbose").unwrap().is_bool());
}

#[test]
fn flag_value_is_not_taken_as_subcommand() {
    let config = Config::new(
        ConfigCommand::new("tldr")
            .with_command(ConfigCommand::new("add"))
            .with_flag(ConfigFlag::value("--page")),
    );
    let objects = parse(&config, ["tldr", "--page", "add"]).unwrap();
    assert_eq!(
        objects.to_vec(),
        vec![
            Object::command("tldr"),
            Flag::with_value("--page", "add").into(),
        ]
    );
}

// =============================================================================
// CLUSTERS AND COMBINED VALUES
// =============================================================================

#[test]
fn parse_multiple_flags_and_argument() {
    let objects = parse(&open_config(), ["tldr", "-vbl", "5", "nmap"]).unwrap();
    assert_eq!(
        objects.to_vec(),
        vec![
            Object::command("tldr"),
            Flag::boolean("-v").starting_cluster().into(),
            Flag::boolean("-b").into(),
            Flag::with_value("-l", "5").ending_cluster().into(),
            Object::argument("nmap"),
        ]
    );
}

#[test]
fn parse_combined_multiple_flag_values_and_argument() {
    let objects = parse(&open_config(), ["tldr", "-vl=5", "nmap"]).unwrap();
    assert_eq!(
        objects.to_vec(),
        vec![
            Object::command("tldr"),
            Flag::boolean("-v").starting_cluster().into(),
            Flag::with_value("-l", "5").ending_cluster().combined().into(),
            Object::argument("nmap"),
        ]
    );
}

#[test]
fn cluster_members_use_configured_bool_flags() {
    let config = Config::new(
        ConfigCommand::new("ls")
            .with_flag(ConfigFlag::boolean("-a"))
            .with_flag(ConfigFlag::boolean("-l")),
    )
    .allow_multiple_flags();
    let objects = parse(&config, ["ls", "-al", "dir"]).unwrap();
    assert_eq!(
        objects.to_vec(),
        vec![
            Object::command("ls"),
            Flag::boolean("-a").starting_cluster().into(),
            Flag::boolean("-l").ending_cluster().into(),
            Object::argument("dir"),
        ]
    );
}

#[test]
fn value_flag_in_cluster_middle_is_incomplete() {
    let config = Config::new(
        ConfigCommand::new("ls")
            .with_flag(ConfigFlag::value("-n"))
            .with_flag(ConfigFlag::boolean("-a")),
    )
    .allow_multiple_flags();
    assert_eq!(
        parse(&config, ["ls", "-na", "dir"]),
        Err(ArgsError::IncompleteMultipleFlag)
    );
}

#[test]
fn parse_combined_flag_value() {
    let config = Config::new(ConfigCommand::new("tldr").with_flag(ConfigFlag::value("--level")));
    let objects = parse(&config, ["tldr", "--level=5", "nmap"]).unwrap();
    assert_eq!(
        objects.to_vec(),
        vec![
            Object::command("tldr"),
            Flag::with_value("--level", "5").combined().into(),
            Object::argument("nmap"),
        ]
    );
}

#[test]
fn combined_value_on_bool_flag_becomes_next_token() {
    let config = Config::new(
        ConfigCommand::new("tldr")
            .with_command(ConfigCommand::new("add"))
            .with_flag(ConfigFlag::boolean("--verbose")),
    );
    let objects = parse(&config, ["tldr", "--verbose=yes", "nmap"]).unwrap();
    assert_eq!(
        objects.to_vec(),
        vec![
            Object::command("tldr"),
            Flag::boolean("--verbose").into(),
            Object::argument("yes"),
            Object::argument("nmap"),
        ]
    );

    let objects = parse(&config, ["tldr", "--verbose=add", "nmap"]).unwrap();
    assert_eq!(objects.commands(), vec!["tldr", "add"]);
    assert_eq!(objects.arguments(), vec!["nmap"]);
}

#[test]
fn flag_shaped_combined_value_is_not_a_value() {
    let config = Config::new(ConfigCommand::new("tldr").with_flag(ConfigFlag::value("--level")));
    assert_eq!(
        parse(&config, ["tldr", "--level=-5"]),
        Err(ArgsError::InvalidFlag("--level".into()))
    );
}

#[test]
fn combined_values_disallowed_keeps_token_literal() {
    let config = Config::new(ConfigCommand::new("tldr"))
        .allow_unconfigured_flags()
        .disallow_combined_flag_values();
    let objects = parse(&config, ["tldr", "--level=5"]).unwrap();
    assert_eq!(
        objects.to_vec(),
        vec![Object::command("tldr"), Flag::boolean("--level=5").into()]
    );
}

// =============================================================================
// DOUBLE DASH
// =============================================================================

#[test]
fn double_dash_is_an_argument() {
    let config = Config::new(ConfigCommand::new("tldr"));
    let objects = parse(&config, ["tldr", "--", "nmap"]).unwrap();
    assert_eq!(
        objects.to_vec(),
        vec![
            Object::command("tldr"),
            Object::argument("--"),
            Object::argument("nmap"),
        ]
    );
}

#[test]
fn double_dash_rejected_when_disallowed() {
    let config = Config::new(ConfigCommand::new("tldr")).disallow_double_dash();
    assert_eq!(
        parse(&config, ["tldr", "--", "nmap"]),
        Err(ArgsError::InvalidFlag("--".into()))
    );
}

#[test]
fn double_dash_is_never_a_flag_value() {
    let config = Config::new(ConfigCommand::new("tldr")).allow_unconfigured_flags();
    let objects = parse(&config, ["tldr", "--x", "--"]).unwrap();
    assert_eq!(
        objects.to_vec(),
        vec![
            Object::command("tldr"),
            Flag::boolean("--x").into(),
            Object::argument("--"),
        ]
    );
}
