use time::OffsetDateTime;

pub trait StrExt: AsRef<str> {
    fn is_blank(&self) -> bool {
        self.as_ref().trim().is_empty()
    }
}

impl<T: AsRef<str>> StrExt for T {}

pub fn unix_millis(at: OffsetDateTime) -> i64 {
    (at.unix_timestamp_nanos() / 1_000_000) as i64
}

#[macro_export]
macro_rules! error_exit {
    ($($arg:tt)+) => ({
        log::error!($($arg)+);
        std::process::exit(1)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_blank() {
        assert!("\n".is_blank());
        assert!(" \t".is_blank());
        assert!(!" a ".is_blank());
    }

    #[test]
    fn unix_millis_truncates_nanos() {
        let at = OffsetDateTime::from_unix_timestamp_nanos(1_700_000_000_123_456_789)
            .unwrap();
        assert_eq!(unix_millis(at), 1_700_000_000_123);
    }
}
