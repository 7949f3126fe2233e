//! Component 4 – render the simulator run-script.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::model::RunPlan;

/// One line of the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `file <name>` – load an object file.
    File(String),
    /// `c` – continue until halt.
    Continue,
    /// `d <args>` – dump memory; `args` may be empty.
    Dump(String),
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::File(name) => write!(f, "file {name}"),
            Directive::Continue => write!(f, "c"),
            Directive::Dump(args) => write!(f, "d {args}"),
        }
    }
}

pub fn build(plan: &RunPlan) -> Vec<Directive> {
    let mut lines: Vec<Directive> = plan
        .input_files
        .iter()
        .map(|name| Directive::File(name.clone()))
        .collect();
    if plan.auto_continue {
        lines.push(Directive::Continue);
    }
    if plan.auto_dump {
        lines.push(Directive::Dump(plan.dump_line_args()));
    }
    lines
}

/// Script text, every line newline-terminated.
pub fn render(plan: &RunPlan) -> String {
    build(plan)
        .iter()
        .map(|d| format!("{d}\n"))
        .collect()
}

/// Create (or truncate) `path` and write the script into it.
pub fn emit(plan: &RunPlan, path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(render(plan).as_bytes())?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(files: &[&str]) -> RunPlan {
        RunPlan {
            input_files: files.iter().map(|f| f.to_string()).collect(),
            output_script_name: ".run_script".into(),
            save_script: false,
            auto_continue: true,
            auto_dump: false,
            dump_args: Vec::new(),
            sim_output_file: "a.out".into(),
            write_sim_output: false,
            auto_run: false,
            use_assembler: false,
        }
    }

    #[test]
    fn test_render() {
        let test_cases = vec![
            (plan(&["a", "b", "c"]), "file a\nfile b\nfile c\nc\n"),
            (
                RunPlan {
                    auto_continue: false,
                    ..plan(&["a"])
                },
                "file a\n",
            ),
            (
                RunPlan {
                    auto_dump: true,
                    dump_args: vec!["label1".into(), "label2".into()],
                    ..plan(&["a"])
                },
                "file a\nc\nd label1 label2\n",
            ),
            (
                RunPlan {
                    auto_dump: true,
                    ..plan(&["a"])
                },
                "file a\nc\nd \n",
            ),
        ];

        for (plan, expected) in test_cases {
            assert_eq!(render(&plan), expected);
        }
    }

    #[test]
    fn test_build_order() {
        let p = RunPlan {
            auto_dump: true,
            dump_args: vec!["x3000".into()],
            ..plan(&["main", "lib"])
        };
        assert_eq!(
            build(&p),
            vec![
                Directive::File("main".into()),
                Directive::File("lib".into()),
                Directive::Continue,
                Directive::Dump("x3000".into()),
            ]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let p = RunPlan {
            auto_dump: true,
            dump_args: vec!["x".into()],
            ..plan(&["a", "b"])
        };
        assert_eq!(render(&p), render(&p));
    }
}
