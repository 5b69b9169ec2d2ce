//! Show command implementation.
//!
//! The `ci-diff show` command reports the detected provider and every
//! build property it can resolve.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::ci::{get_config, CiConfig};
use crate::cli::args::ShowArgs;
use crate::error::{CiError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult, EXIT_NO_PROVIDER};

/// Serialized form of a provider's properties.
#[derive(Debug, Serialize)]
pub struct ShowReport {
    /// Provider display name.
    pub provider: &'static str,
    /// Every property that resolved.
    pub properties: BTreeMap<&'static str, serde_json::Value>,
    /// Every property that failed, with its error message.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<&'static str, String>,
}

impl ShowReport {
    /// Resolve every property of `config`.
    pub fn collect(config: &dyn CiConfig) -> Self {
        let mut properties = BTreeMap::new();
        let mut errors = BTreeMap::new();
        for property in config.properties() {
            match property.value {
                Ok(value) => {
                    properties.insert(property.name, value);
                }
                Err(message) => {
                    errors.insert(property.name, message);
                }
            }
        }
        Self {
            provider: config.name(),
            properties,
            errors,
        }
    }
}

/// The show command implementation.
pub struct ShowCommand {
    context: CommandContext,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(context: CommandContext, args: ShowArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ShowArgs {
        &self.args
    }
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "none".to_string(),
        other => other.to_string(),
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let active = get_config(self.context.env.clone(), self.context.runner.clone());
        let Some(config) = active.as_config() else {
            ui.error("No CI provider detected");
            return Ok(CommandResult::failure(EXIT_NO_PROVIDER));
        };

        let report = ShowReport::collect(config);

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| CiError::Other(e.into()))?;
            ui.message(&json);
        } else if self.args.yaml {
            let yaml = serde_yaml::to_string(&report).map_err(|e| CiError::Other(e.into()))?;
            ui.message(yaml.trim_end());
        } else {
            ui.show_header(&format!("<{} (active={})>", config.name(), config.active()));
            for property in config.properties() {
                match &property.value {
                    Ok(value) => ui.show_property(property.name, &display_value(value)),
                    Err(message) => {
                        ui.show_property(property.name, &format!("<error: {}>", message))
                    }
                }
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::MapEnv;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use std::sync::Arc;

    fn context(pairs: &[(&str, &str)], runner: MockRunner) -> CommandContext {
        CommandContext {
            env: Arc::new(MapEnv::from_pairs(pairs)),
            runner: Arc::new(runner),
        }
    }

    fn travis_pr_env() -> Vec<(&'static str, &'static str)> {
        vec![
            ("TRAVIS", "true"),
            ("TRAVIS_EVENT_TYPE", "pull_request"),
            ("TRAVIS_BRANCH", "master"),
            ("TRAVIS_PULL_REQUEST", "1234"),
            ("TRAVIS_REPO_SLUG", "org/repo"),
        ]
    }

    fn merge_head_runner() -> MockRunner {
        let runner = MockRunner::new();
        runner.respond(&["git", "log", "--pretty=%P", "-1", "HEAD"], "abc");
        runner
    }

    #[test]
    fn no_provider_exits_two() {
        let cmd = ShowCommand::new(context(&[], MockRunner::new()), ShowArgs::default());
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn text_output_lists_properties() {
        let cmd = ShowCommand::new(
            context(&travis_pr_env(), merge_head_runner()),
            ShowArgs::default(),
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.headers(), &["<Travis (active=true)>".to_string()]);
        assert_eq!(ui.property("branch"), Some("master"));
        assert_eq!(ui.property("base"), Some("master"));
        assert_eq!(ui.property("pull_request"), Some("1234"));
        assert_eq!(ui.property("tag"), Some("none"));
        assert_eq!(ui.property("is_merge"), Some("false"));
    }

    #[test]
    fn json_output() {
        let cmd = ShowCommand::new(
            context(&travis_pr_env(), merge_head_runner()),
            ShowArgs {
                json: true,
                yaml: false,
            },
        );
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.stdout()).unwrap();
        assert_eq!(value["provider"], "Travis");
        assert_eq!(value["properties"]["event_type"], "pull_request");
        assert_eq!(value["properties"]["slug"], "org/repo");
        assert_eq!(value["properties"]["in_pull_request"], true);
    }

    #[test]
    fn errors_are_reported_separately() {
        let cmd = ShowCommand::new(
            context(&[("CIRCLECI", "true")], MockRunner::new()),
            ShowArgs {
                json: true,
                yaml: false,
            },
        );
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.stdout()).unwrap();
        assert_eq!(value["provider"], "CircleCI");
        assert!(value["errors"]["branch"]
            .as_str()
            .unwrap()
            .contains("CIRCLE_BRANCH"));
        assert!(value["properties"].get("branch").is_none());
    }

    #[test]
    fn yaml_output() {
        let cmd = ShowCommand::new(
            context(&[("APPVEYOR", "true"), ("APPVEYOR_REPO_PROVIDER", "gitlab")], MockRunner::new()),
            ShowArgs {
                json: false,
                yaml: true,
            },
        );
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();
        let out = ui.stdout();
        assert!(out.contains("provider: AppVeyor"));
        assert!(out.contains("repository_provider: gitlab"));
    }

    #[test]
    fn text_shows_errors_in_place() {
        let cmd = ShowCommand::new(
            context(&[("CIRCLECI", "true")], MockRunner::new()),
            ShowArgs::default(),
        );
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();
        let branch = ui.property("branch").unwrap();
        assert!(branch.starts_with("<error: "));
        assert!(branch.contains("CIRCLE_BRANCH"));
    }
}
