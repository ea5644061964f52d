use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::consts::DATE_PREFIX_FORMAT;

/// Format a file modification time as a `YYYYMMDD` prefix in local time
pub(crate) fn date_prefix(modified: SystemTime) -> String {
    let local: DateTime<Local> = modified.into();
    local.format(DATE_PREFIX_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local_noon(y: i32, m: u32, d: u32) -> SystemTime {
        Local
            .with_ymd_and_hms(y, m, d, 12, 0, 0)
            .single()
            .expect("unambiguous local time")
            .into()
    }

    #[test]
    fn formats_eight_digit_date() {
        assert_eq!(date_prefix(local_noon(2014, 3, 26)), "20140326");
        assert_eq!(date_prefix(local_noon(2015, 12, 13)), "20151213");
    }

    #[test]
    fn pads_month_and_day() {
        let prefix = date_prefix(local_noon(2001, 1, 2));
        assert_eq!(prefix, "20010102");
        assert_eq!(prefix.len(), 8);
    }
}
