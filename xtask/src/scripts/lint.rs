use crate::cli::LintArgs;
use color_eyre::eyre::{eyre, Result};
use duct::cmd;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckId {
    Fmt,
    Clippy,
    Test,
}

/// One step of the lint pipeline.
struct Check {
    id: CheckId,
    program: &'static str,
    args: &'static [&'static str],
}

#[derive(Debug)]
enum CheckOutcome {
    Passed { output: String },
    Failed { output: String },
}

/// Checks run in order; the first failure stops the pipeline.
const CHECKS: &[Check] = &[
    Check {
        id: CheckId::Fmt,
        program: "cargo",
        args: &["fmt", "--all", "--check"],
    },
    Check {
        id: CheckId::Clippy,
        program: "cargo",
        args: &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    },
    Check {
        id: CheckId::Test,
        program: "cargo",
        args: &["test", "--workspace"],
    },
];

fn should_skip(id: CheckId, args: &LintArgs) -> bool {
    match id {
        CheckId::Fmt => args.no_fmt,
        CheckId::Clippy => args.no_clippy,
        CheckId::Test => args.no_test,
    }
}

/// Arguments to use in `--fix` mode, or `None` to keep the defaults.
fn fix_args(id: CheckId) -> Option<Vec<&'static str>> {
    match id {
        CheckId::Fmt => Some(vec!["fmt", "--all"]),
        CheckId::Clippy => Some(vec![
            "clippy",
            "--workspace",
            "--all-targets",
            "--fix",
            "--allow-dirty",
            "--",
            "-D",
            "warnings",
        ]),
        CheckId::Test => None,
    }
}

fn display_name(program: &str, args: &[&str]) -> String {
    format!("{} {}", program, args.join(" "))
}

fn determine_outcome(success: bool, output: String) -> CheckOutcome {
    if success {
        CheckOutcome::Passed { output }
    } else {
        CheckOutcome::Failed { output }
    }
}

pub fn run(args: &LintArgs) -> Result<()> {
    for check in CHECKS {
        if should_skip(check.id, args) {
            continue;
        }

        let effective = if args.fix { fix_args(check.id) } else { None };
        let check_args: Vec<&str> = effective.unwrap_or_else(|| check.args.to_vec());
        let name = display_name(check.program, &check_args);

        println!("==> {name}");

        let output = cmd(check.program, &check_args)
            .stderr_to_stdout()
            .stdout_capture()
            .unchecked()
            .run()?;
        let text = String::from_utf8_lossy(&output.stdout).into_owned();

        match determine_outcome(output.status.success(), text) {
            CheckOutcome::Passed { output } => {
                if args.verbose {
                    print!("{output}");
                }
            }
            CheckOutcome::Failed { output } => {
                print!("{output}");
                return Err(eyre!("lint failed at: {name}"));
            }
        }
    }

    println!("lint passed");
    Ok(())
}
