#[derive(Debug, PartialEq)]
pub enum FindError {
    NotFound,
    Unknown,
}

#[derive(Debug, PartialEq)]
pub enum InsertError {
    Unknown,
}

impl<T> From<std::sync::PoisonError<T>> for FindError {
    fn from(value: std::sync::PoisonError<T>) -> Self {
        log::error!("occurred an error in the schedule store: {}", value);
        Self::Unknown
    }
}

impl<T> From<std::sync::PoisonError<T>> for InsertError {
    fn from(value: std::sync::PoisonError<T>) -> Self {
        log::error!("occurred an error in the schedule store: {}", value);
        Self::Unknown
    }
}
