use serde::Serialize;

use crate::core::RunReport;

#[derive(Debug, Serialize)]
struct JsonEntry {
    name: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct JsonReport {
    root: String,
    eval: String,
    dry_run: bool,
    success: usize,
    failure: usize,
    entries: Vec<JsonEntry>,
}

pub(crate) fn output_report_json(report: &RunReport) -> String {
    let entries = report
        .outcomes
        .iter()
        .map(|outcome| {
            let name = outcome.name.to_string_lossy().into_owned();
            match &outcome.result {
                Ok(renamed) => JsonEntry {
                    name,
                    status: if report.dry_run { "planned" } else { "renamed" },
                    new_name: Some(renamed.new_name.to_string_lossy().into_owned()),
                    date: Some(renamed.date.clone()),
                    path: None,
                    error: None,
                },
                Err(e) => JsonEntry {
                    name,
                    status: e.status(),
                    new_name: None,
                    date: None,
                    path: Some(e.path().display().to_string()),
                    error: Some(e.to_string()),
                },
            }
        })
        .collect();

    let output = JsonReport {
        root: report.root.display().to_string(),
        eval: report.eval.display().to_string(),
        dry_run: report.dry_run,
        success: report.success_count(),
        failure: report.failure_count(),
        entries,
    };

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, Renamed};
    use crate::error::RenameError;
    use serde_json::Value;
    use std::path::PathBuf;

    #[test]
    fn report_shape() {
        let report = RunReport {
            root: PathBuf::from("/saves"),
            eval: PathBuf::from("level.dat"),
            dry_run: false,
            outcomes: vec![
                Outcome {
                    name: "World1".into(),
                    result: Ok(Renamed {
                        new_name: "20140326_World1".into(),
                        date: "20140326".to_string(),
                    }),
                },
                Outcome {
                    name: "World3".into(),
                    result: Err(RenameError::MissingEvalFile {
                        path: PathBuf::from("/saves/World3/level.dat"),
                    }),
                },
            ],
        };

        let json: Value = serde_json::from_str(&output_report_json(&report)).unwrap();
        assert_eq!(json["root"], "/saves");
        assert_eq!(json["eval"], "level.dat");
        assert_eq!(json["success"], 1);
        assert_eq!(json["failure"], 1);

        let entries = json["entries"].as_array().unwrap();
        assert_eq!(entries[0]["status"], "renamed");
        assert_eq!(entries[0]["new_name"], "20140326_World1");
        assert_eq!(entries[0]["date"], "20140326");
        assert!(entries[0].get("error").is_none());
        assert_eq!(entries[1]["status"], "missing_eval_file");
        assert_eq!(entries[1]["path"], "/saves/World3/level.dat");
        assert!(entries[1].get("new_name").is_none());
    }

    #[test]
    fn dry_run_entries_are_planned() {
        let report = RunReport {
            root: PathBuf::from("/saves"),
            eval: PathBuf::from("level.dat"),
            dry_run: true,
            outcomes: vec![Outcome {
                name: "World2".into(),
                result: Ok(Renamed {
                    new_name: "20151213_World2".into(),
                    date: "20151213".to_string(),
                }),
            }],
        };
        let json: Value = serde_json::from_str(&output_report_json(&report)).unwrap();
        assert_eq!(json["dry_run"], true);
        assert_eq!(json["entries"][0]["status"], "planned");
    }
}
