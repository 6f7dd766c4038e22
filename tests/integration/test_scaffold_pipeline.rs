use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

use next_scaffold::models::external_command::ExternalCommand;
use next_scaffold::models::pipeline::PipelineStep;
use next_scaffold::models::project::{resolve_project_name, ProjectLayout, DEFAULT_PROJECT_NAME};
use next_scaffold::services::command_runner::CommandRunner;
use next_scaffold::services::orchestrator::Orchestrator;
use next_scaffold::templates::{STALE_ENTRY_PAGE, TEMPLATE_FILES};
use next_scaffold::utils::config::ScaffoldConfig;
use next_scaffold::utils::error::{Result, ScaffoldError};

/// Integration tests for the full scaffolding pipeline
/// External generators are replaced by a runner that records each call and
/// mimics what create-next-app leaves on disk

#[derive(Debug, Clone, PartialEq, Eq)]
struct Invocation {
    step: PipelineStep,
    command: String,
    cwd: PathBuf,
}

impl Invocation {
    fn args_contain(&self, needle: &str) -> bool {
        self.command.split(' ').any(|arg| arg == needle)
    }
}

#[derive(Default)]
struct FakeRunner {
    calls: Mutex<Vec<Invocation>>,
    fail_at: Option<(PipelineStep, i32)>,
    /// Leave `src` behind as a plain file instead of a directory
    src_as_file: bool,
}

impl FakeRunner {
    fn failing_at(step: PipelineStep, code: i32) -> Self {
        Self {
            fail_at: Some((step, code)),
            ..Self::default()
        }
    }

    fn leaving_src_as_file() -> Self {
        Self {
            src_as_file: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, command: &ExternalCommand, cwd: &Path) -> Result<()> {
        self.calls.lock().unwrap().push(Invocation {
            step: command.step,
            command: command.to_string(),
            cwd: cwd.to_path_buf(),
        });

        if let Some((step, code)) = self.fail_at {
            if step == command.step {
                return Err(ScaffoldError::CommandFailed {
                    step,
                    command: command.to_string(),
                    code: Some(code),
                });
            }
        }

        if command.step == PipelineStep::ScaffoldingExternalApp {
            let root = cwd.join(&command.args[1]);
            if self.src_as_file {
                fs::create_dir_all(&root).unwrap();
                fs::write(root.join("src"), "not a directory").unwrap();
            } else {
                fs::create_dir_all(root.join("src/app")).unwrap();
                fs::write(root.join(STALE_ENTRY_PAGE), "export default function Page() {}").unwrap();
            }
        }

        Ok(())
    }
}

/// Every file under `root`, relative and with `/` separators
fn collect_files(root: &Path) -> Vec<String> {
    fn walk(dir: &Path, root: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(&path, root, out);
            } else {
                let relative = path.strip_prefix(root).unwrap();
                out.push(relative.to_string_lossy().replace('\\', "/"));
            }
        }
    }

    let mut files = Vec::new();
    walk(root, root, &mut files);
    files.sort();
    files
}

#[tokio::test]
async fn test_pipeline_produces_fixed_tree() {
    let temp_dir = TempDir::new().unwrap();
    let layout = ProjectLayout::new(temp_dir.path(), "my-next-app");
    let orchestrator = Orchestrator::new(FakeRunner::default(), ScaffoldConfig::default());

    let report = orchestrator.run(&layout).await.unwrap();

    let mut expected: Vec<String> = TEMPLATE_FILES.iter().map(|f| f.path.to_string()).collect();
    expected.sort();
    assert_eq!(collect_files(layout.root()), expected);

    for file in TEMPLATE_FILES {
        let written = fs::read_to_string(layout.resolve(file.path)).unwrap();
        assert_eq!(written, file.contents, "content mismatch in {}", file.path);
    }

    assert!(report.removed_stale_entry);
    assert_eq!(report.files_written.len(), TEMPLATE_FILES.len());
    assert_eq!(report.completed_steps, PipelineStep::ALL.to_vec());
}

#[tokio::test]
async fn test_middleware_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let layout = ProjectLayout::new(temp_dir.path(), "my-next-app");
    let orchestrator = Orchestrator::new(FakeRunner::default(), ScaffoldConfig::default());

    orchestrator.run(&layout).await.unwrap();

    let middleware =
        fs::read_to_string(temp_dir.path().join("my-next-app/src/middleware.ts")).unwrap();
    assert!(middleware.contains(r#"["/", "/register", "/login"]"#));
    for excluded in ["api", "_next/static", "_next/image", "favicon.ico", "sitemap.xml", "robots.txt"] {
        assert!(middleware.contains(excluded), "matcher should exclude {excluded}");
    }
}

#[tokio::test]
async fn test_commands_run_in_order_with_threaded_working_dir() {
    let temp_dir = TempDir::new().unwrap();
    let layout = ProjectLayout::new(temp_dir.path(), "shop");
    let orchestrator = Orchestrator::new(FakeRunner::default(), ScaffoldConfig::default());

    orchestrator.run(&layout).await.unwrap();

    let calls = orchestrator.runner().calls();
    assert_eq!(calls.len(), 4);

    assert_eq!(calls[0].command, "npx create-next-app@latest shop --ts --eslint");
    assert_eq!(calls[0].cwd, temp_dir.path());

    assert!(calls[1].command.starts_with("yarn add @tanstack/react-query "));
    assert_eq!(calls[2].command, "yarn add -D @tanstack/eslint-plugin-query orval");
    assert_eq!(calls[3].command, "npx shadcn@latest init");

    for call in &calls[1..] {
        assert_eq!(call.cwd, temp_dir.path().join("shop"));
    }
}

#[tokio::test]
async fn test_default_name_is_used_everywhere() {
    let temp_dir = TempDir::new().unwrap();
    let name = resolve_project_name(None);
    let layout = ProjectLayout::new(temp_dir.path(), name);
    let orchestrator = Orchestrator::new(FakeRunner::default(), ScaffoldConfig::default());

    let report = orchestrator.run(&layout).await.unwrap();

    assert_eq!(report.project_root, temp_dir.path().join(DEFAULT_PROJECT_NAME));
    let calls = orchestrator.runner().calls();
    assert!(calls[0].args_contain(DEFAULT_PROJECT_NAME));
    assert!(temp_dir.path().join(DEFAULT_PROJECT_NAME).join("src/middleware.ts").exists());
}

#[tokio::test]
async fn test_empty_name_falls_back_to_default() {
    let temp_dir = TempDir::new().unwrap();
    let layout = ProjectLayout::new(temp_dir.path(), resolve_project_name(Some("")));
    let orchestrator = Orchestrator::new(FakeRunner::default(), ScaffoldConfig::default());

    orchestrator.run(&layout).await.unwrap();

    let root = temp_dir.path().join(DEFAULT_PROJECT_NAME);
    let mut expected: Vec<String> = TEMPLATE_FILES.iter().map(|f| f.path.to_string()).collect();
    expected.sort();
    assert_eq!(collect_files(&root), expected);
}

#[tokio::test]
async fn test_failure_stops_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let layout = ProjectLayout::new(temp_dir.path(), "shop");
    let runner = FakeRunner::failing_at(PipelineStep::InstallingDevDeps, 4);
    let orchestrator = Orchestrator::new(runner, ScaffoldConfig::default());

    let result = orchestrator.run(&layout).await;

    match result {
        Err(ScaffoldError::CommandFailed { step, code, .. }) => {
            assert_eq!(step, PipelineStep::InstallingDevDeps);
            assert_eq!(code, Some(4));
        }
        other => panic!("Expected CommandFailed, got {other:?}"),
    }

    let steps: Vec<_> = orchestrator.runner().calls().iter().map(|c| c.step).collect();
    assert_eq!(
        steps,
        vec![
            PipelineStep::ScaffoldingExternalApp,
            PipelineStep::InstallingDeps,
            PipelineStep::InstallingDevDeps,
        ]
    );

    // Nothing after the failing step touched the project
    assert!(!layout.resolve("src/middleware.ts").exists());
    assert!(layout.resolve(STALE_ENTRY_PAGE).exists());
}

#[tokio::test]
async fn test_scaffolder_failure_runs_nothing_else() {
    let temp_dir = TempDir::new().unwrap();
    let layout = ProjectLayout::new(temp_dir.path(), "shop");
    let runner = FakeRunner::failing_at(PipelineStep::ScaffoldingExternalApp, 1);
    let orchestrator = Orchestrator::new(runner, ScaffoldConfig::default());

    assert!(orchestrator.run(&layout).await.is_err());
    assert_eq!(orchestrator.runner().calls().len(), 1);
    assert!(!layout.root().exists());
}

#[tokio::test]
async fn test_rerun_over_existing_project_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    let layout = ProjectLayout::new(temp_dir.path(), "shop");

    let first = Orchestrator::new(FakeRunner::default(), ScaffoldConfig::default());
    first.run(&layout).await.unwrap();
    fs::write(layout.resolve(".env"), "NEXT_PUBLIC_API_URL='https://api.example.com'").unwrap();

    let second = Orchestrator::new(FakeRunner::default(), ScaffoldConfig::default());
    second.run(&layout).await.unwrap();

    let env = fs::read_to_string(layout.resolve(".env")).unwrap();
    assert_eq!(env, "NEXT_PUBLIC_API_URL=' '");
}

#[tokio::test]
async fn test_ui_kit_failure_leaves_filesystem_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let layout = ProjectLayout::new(temp_dir.path(), "shop");
    let runner = FakeRunner::failing_at(PipelineStep::InitializingUiKit, 2);
    let orchestrator = Orchestrator::new(runner, ScaffoldConfig::default());

    let result = orchestrator.run(&layout).await;
    assert!(matches!(
        result,
        Err(ScaffoldError::CommandFailed { step: PipelineStep::InitializingUiKit, code: Some(2), .. })
    ));
    assert_eq!(orchestrator.runner().calls().len(), 4);

    // Only what the scaffolder left behind is on disk
    assert_eq!(collect_files(layout.root()), vec![STALE_ENTRY_PAGE.to_string()]);
    assert!(!layout.resolve("src/app/(private)").exists());
    assert!(!layout.resolve("src/app/(public)").exists());
}

#[cfg(unix)]
#[tokio::test]
async fn test_directory_failure_stops_before_writing_files() {
    let temp_dir = TempDir::new().unwrap();
    let layout = ProjectLayout::new(temp_dir.path(), "shop");
    let orchestrator = Orchestrator::new(FakeRunner::leaving_src_as_file(), ScaffoldConfig::default());

    let result = orchestrator.run(&layout).await;
    assert!(matches!(
        result,
        Err(ScaffoldError::Filesystem { step: PipelineStep::CreatingDirectories, .. })
    ));

    assert_eq!(collect_files(layout.root()), vec!["src".to_string()]);
    assert!(!layout.resolve(".env").exists());
    assert!(!layout.resolve("orval.config.ts").exists());
}
