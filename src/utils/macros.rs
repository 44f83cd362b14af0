/// Creates a [`TimeStamp`](crate::time::TimeStamp) from a literal like
/// `time_stamp!(09:30)`, the range of the hour and minute is checked at
/// compile time.
#[macro_export]
macro_rules! time_stamp {
    ( $hour:literal : $minute:literal ) => {{
        static_assertions::const_assert!($hour < 24);
        static_assertions::const_assert!($minute < 60);

        match $crate::time::TimeStamp::new($hour, $minute) {
            Ok(time_stamp) => time_stamp,
            Err(_) => unreachable!(),
        }
    }};
}
