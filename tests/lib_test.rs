//! Library integration tests.

use mcp_validate::ValidateError;

#[test]
fn error_types_are_public() {
    let err = ValidateError::InvalidUtf8 {
        path: "memory-bank/current-mr.md".into(),
    };
    assert!(err.to_string().contains("current-mr.md"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> mcp_validate::Result<bool> {
        Ok(true)
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use mcp_validate::cli::Cli;

    let cli = Cli::parse_from(["mcp-validate", "--no-color"]);
    assert!(cli.no_color);
}

#[test]
fn groups_can_be_run_with_custom_registry() {
    use mcp_validate::checks::{CheckContext, CheckGroup};
    use mcp_validate::packages::StaticProbe;
    use mcp_validate::runner::run_groups;
    use mcp_validate::ui::MockUI;

    let groups = [
        CheckGroup {
            name: "Broken",
            run: |_, _| Err(ValidateError::Other(anyhow::anyhow!("unexpected"))),
        },
        CheckGroup {
            name: "Fine",
            run: |_, ui| {
                ui.success("fine");
                Ok(true)
            },
        },
    ];
    let ctx = CheckContext::with_vars(
        ".",
        Box::new(StaticProbe::new()),
        Vec::<(String, String)>::new(),
    );
    let mut ui = MockUI::new();

    let report = run_groups(&groups, &ctx, &mut ui);

    assert_eq!(report.get("Broken"), Some(false));
    assert_eq!(report.get("Fine"), Some(true));
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn mask_preview_is_public() {
    assert_eq!(mcp_validate::secrets::mask_preview("abcdefghijkl"), "abcd...ijkl");
}
