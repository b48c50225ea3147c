use thiserror::Error;

/// Everything the simulator core can fail with. Logical anomalies found
/// while a tick is running (feedback cycles, unlinked inputs) are not
/// errors: they resolve to `Tristate::Undefined`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("pin {pin} is out of range for component '{component}'")]
    OutOfRangePin { component: String, pin: usize },

    #[error("unknown component: {0}")]
    UnknownComponent(String),

    #[error("component already exists: {0}")]
    DuplicateComponent(String),

    #[error("unknown component type: {0}")]
    UnknownComponentType(String),

    #[error("component is not an input or clock: {0}")]
    NotWritable(String),

    #[error("parsing error at line {line}: {message}")]
    Parsing { line: usize, message: String },
}

impl Error {
    pub(crate) fn out_of_range(component: &str, pin: usize) -> Self {
        Error::OutOfRangePin {
            component: component.to_string(),
            pin,
        }
    }

    pub(crate) fn parsing(line: usize, message: impl Into<String>) -> Self {
        Error::Parsing {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
