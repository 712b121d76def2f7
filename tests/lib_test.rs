//! Library integration tests.

use current::CurrentError;

#[test]
fn error_types_are_public() {
    let err = CurrentError::StackNotFound {
        name: "Svelte".into(),
    };
    assert!(err.to_string().contains("Svelte"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> current::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use current::cli::{Cli, Commands};

    // Actually test parsing with parse_from
    let cli = Cli::parse_from(["current", "trending", "--json"]);
    assert!(cli.command.is_some());

    if let Some(Commands::Trending(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Trending command");
    }
}
