use crate::core::{Outcome, RunReport};

/// Print the warning line for a failed directory to stderr
pub(crate) fn print_warning(outcome: &Outcome) {
    if let Err(failure) = &outcome.result {
        eprintln!("{failure}");
    }
}

pub(crate) fn format_summary(report: &RunReport) -> String {
    let mut out = String::new();
    if report.dry_run {
        for outcome in &report.outcomes {
            if let Ok(renamed) = &outcome.result {
                out.push_str(&format!(
                    "{} -> {}\n",
                    outcome.name.to_string_lossy(),
                    renamed.new_name.to_string_lossy()
                ));
            }
        }
        out.push_str("DRY RUN COMPLETE\n");
    } else {
        out.push_str("OPERATION COMPLETE\n");
    }
    out.push_str(&format!("Success: {}\n", report.success_count()));
    out.push_str(&format!("Failure: {}\n", report.failure_count()));
    out
}

pub(crate) fn print_summary(report: &RunReport) {
    print!("{}", format_summary(report));
}
