//! Pipeline logging commands: implements `PipelineReporter`.
//!
//! The agent scans task stdout for `##vso[area.action key=value;]message`
//! lines. Data and property values are escaped the way the agent expects.

use crate::application::ports::PipelineReporter;
use crate::domain::TaskResult;

/// Writes agent logging commands to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct VsoReporter;

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%AZP25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(']', "%5D").replace(';', "%3B")
}

/// Render one logging command line.
#[must_use]
pub fn logging_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let props = properties
        .iter()
        .map(|(k, v)| format!("{k}={};", escape_property(v)))
        .collect::<String>();
    let head = if props.is_empty() {
        command.to_string()
    } else {
        format!("{command} {props}")
    };
    format!("##vso[{head}]{}", escape_data(message))
}

impl PipelineReporter for VsoReporter {
    fn set_secret(&self, value: &str) {
        println!("{}", logging_command("task.setsecret", &[], value));
    }

    fn error(&self, message: &str) {
        println!("{}", logging_command("task.logissue", &[("type", "error")], message));
    }

    fn complete(&self, result: TaskResult, message: Option<&str>) {
        let result = result.to_string();
        println!(
            "{}",
            logging_command("task.complete", &[("result", &result)], message.unwrap_or_default())
        );
    }
}
