mod json;
mod text;

pub(crate) use json::output_report_json;
pub(crate) use text::{print_summary, print_warning};
