#[macro_export]
macro_rules! internal_error_message {
    () => {
        format!("Internal error at {}:{}.", file!(), line!())
    };
    ($($arg:tt)+) => {
        format!("Internal error at {}:{}: {}.", file!(), line!(), format!($($arg)*))
    };
}

#[derive(Clone, Debug)]
pub enum ClientError<E> {
    // The view failed to draw or to show a notice.
    View(E),
    // An event from the server could not be applied. The position is left as it was.
    CannotApplyEvent(String),
}
