use thiserror::Error;

/// Colour channel named in configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Saturation,
    Lightness,
    Alpha,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Channel::Saturation => "saturation",
            Channel::Lightness => "lightness",
            Channel::Alpha => "alpha",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("The {channel} range is inverted: minimum {min} is greater than maximum {max}")]
    InvertedBounds { channel: Channel, min: u32, max: u32 },
    #[error("The {channel} bound {value} is not a percentage (0-100)")]
    OutOfRange { channel: Channel, value: u32 },
    #[error("The hue step must be a positive, finite number of degrees, got {0}")]
    Step(f64),
    #[error("Unable to allocate {0} distinct hues with a step of {1}")]
    Exhausted(usize, f64),
    #[error("Cannot generate {0} colours, at most {1} are supported")]
    TooMany(usize, usize),
}

pub type Result<T> = std::result::Result<T, Error>;
