//! Colour statistics over a whole buffer.

use std::fmt;
use std::str::FromStr;

use crate::buffer::PixelBuffer;
use crate::error::{FilterError, FilterResult};
use crate::filters::core::ensure_non_empty;

/// A colour channel that can be amplified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Index of the channel within an RGBA pixel.
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        })
    }
}

impl FromStr for Channel {
    type Err = FilterError;

    /// Accepts `red`/`green`/`blue` or `r`/`g`/`b`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Channel::Red),
            "green" | "g" => Ok(Channel::Green),
            "blue" | "b" => Ok(Channel::Blue),
            other => Err(FilterError::InvalidParameter(format!(
                "unknown channel '{}'",
                other
            ))),
        }
    }
}

/// Integer mean of each colour channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelAverages {
    pub red: i64,
    pub green: i64,
    pub blue: i64,
}

impl ChannelAverages {
    pub const fn get(&self, channel: Channel) -> i64 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }
}

/// Mean red, green and blue over every pixel.
///
/// Sums are divided by the pixel count with truncating integer division.
/// Alpha does not take part.
///
/// # Errors
/// `InvalidBuffer` for a zero-area buffer.
pub fn average_channels(input: &PixelBuffer) -> FilterResult<ChannelAverages> {
    ensure_non_empty(input, "average_channels")?;

    let (mut red, mut green, mut blue) = (0u64, 0u64, 0u64);
    for px in input.pixels() {
        red += px.r as u64;
        green += px.g as u64;
        blue += px.b as u64;
    }

    let count = input.pixel_count() as u64;
    Ok(ChannelAverages {
        red: (red / count) as i64,
        green: (green / count) as i64,
        blue: (blue / count) as i64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Pixel;

    #[test]
    fn test_average_uniform() {
        let buf = PixelBuffer::filled(3, 3, Pixel::new(10, 20, 30, 255));
        let avg = average_channels(&buf).unwrap();
        assert_eq!(avg, ChannelAverages { red: 10, green: 20, blue: 30 });
    }

    #[test]
    fn test_average_truncates() {
        // red: (0 + 1 + 1 + 1) / 4 = 0 (0.75 truncated)
        let buf = PixelBuffer::from_pixels(
            2,
            2,
            vec![
                Pixel::new(0, 255, 9, 0),
                Pixel::new(1, 255, 9, 0),
                Pixel::new(1, 254, 10, 0),
                Pixel::new(1, 255, 10, 0),
            ],
        )
        .unwrap();
        let avg = average_channels(&buf).unwrap();
        assert_eq!(avg.red, 0);
        assert_eq!(avg.green, 254);
        assert_eq!(avg.blue, 9);
    }

    #[test]
    fn test_average_ignores_alpha() {
        let buf = PixelBuffer::from_pixels(
            2,
            1,
            vec![Pixel::new(100, 0, 0, 0), Pixel::new(200, 0, 0, 255)],
        )
        .unwrap();
        assert_eq!(average_channels(&buf).unwrap().red, 150);
    }

    #[test]
    fn test_average_empty_buffer() {
        let err = average_channels(&PixelBuffer::new(0, 0)).unwrap_err();
        assert!(matches!(err, FilterError::InvalidBuffer(_)));
    }

    #[test]
    fn test_channel_lookup() {
        let avg = ChannelAverages { red: 1, green: 2, blue: 3 };
        assert_eq!(avg.get(Channel::Red), 1);
        assert_eq!(avg.get(Channel::Green), 2);
        assert_eq!(avg.get(Channel::Blue), 3);
        assert_eq!(Channel::Blue.index(), 2);
        assert_eq!(Channel::Green.to_string(), "green");
    }

    #[test]
    fn test_channel_from_str() {
        assert_eq!("Red".parse::<Channel>().unwrap(), Channel::Red);
        assert_eq!("g".parse::<Channel>().unwrap(), Channel::Green);
        assert_eq!("BLUE".parse::<Channel>().unwrap(), Channel::Blue);
        assert!(matches!(
            "alpha".parse::<Channel>(),
            Err(FilterError::InvalidParameter(_))
        ));
    }
}
