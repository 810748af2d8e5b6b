//! `DSAA` ASCII encoding.
//!
//! ```text
//! DSAA
//! <size_x>   <size_y>
//! <lat_min>   <lat_max>
//! <lon_min>   <lon_max>
//! <min>  <max>
//! <samples...>
//! ```
//!
//! Floating point fields are fixed-point with 7 decimals. Samples are
//! padded so that their integer parts line up in 6 character columns,
//! and line breaks follow the legacy wrap rule in [`write`].

use crate::{Extent, GeoBounds, GrdError, GrdFile, Grid};
use std::io::{Read, Write};

pub const MAGIC: &str = "DSAA";

const DECIMALS: usize = 7;
const MOST_LEADING_SPACES: usize = 6;
const VALUES_PER_LINE: usize = 10;

/// Writes `grid` as a `DSAA` file.
///
/// The line break logic is kept byte-compatible with existing
/// consumers: a newline follows the last sample of every `size_x`
/// run and, independently, of every `size_y` run, and otherwise
/// after every 10th sample on a line. Square grids therefore end
/// each row with a blank line, and non-square grids may emit breaks
/// that don't coincide with row ends.
pub fn write<W: Write>(mut wtr: W, bounds: &GeoBounds, grid: &Grid) -> Result<(), GrdError> {
    let (size_x, size_y) = (grid.size_x(), grid.size_y());
    let Extent { min, max } = grid.extent();

    writeln!(wtr, "{MAGIC}")?;
    writeln!(wtr, "{size_x}   {size_y}")?;
    writeln!(wtr, "{:.DECIMALS$}   {:.DECIMALS$}", bounds.lat_min, bounds.lat_max)?;
    writeln!(wtr, "{:.DECIMALS$}   {:.DECIMALS$}", bounds.lon_min, bounds.lon_max)?;
    writeln!(wtr, "{min:.DECIMALS$}  {max:.DECIMALS$}")?;

    let mut line_counter = 1_usize;
    for (i, sample) in grid.samples().iter().enumerate() {
        write!(wtr, "{sample:.DECIMALS$}")?;
        if i % size_x == size_x - 1 {
            wtr.write_all(b"\n")?;
            line_counter = 0;
        }
        if i % size_y == size_y - 1 {
            wtr.write_all(b"\n")?;
            line_counter = 0;
        } else if line_counter % VALUES_PER_LINE == 0 {
            wtr.write_all(b"\n")?;
        } else {
            let spaces = MOST_LEADING_SPACES
                .saturating_sub(integer_digits(*sample))
                .max(1);
            write!(wtr, "{:spaces$}", "")?;
        }
        line_counter += 1;
    }
    Ok(())
}

/// Parses a `DSAA` file from `rdr`.
///
/// Samples are whitespace separated, so the blank lines [`write`]
/// produces are tolerated.
pub fn read<R: Read>(mut rdr: R) -> Result<GrdFile, GrdError> {
    let mut text = String::new();
    rdr.read_to_string(&mut text)?;
    let mut tokens = text.split_ascii_whitespace();

    match tokens.next() {
        Some(MAGIC) => (),
        Some(other) => {
            let mut magic = [0_u8; 4];
            for (dst, src) in magic.iter_mut().zip(other.bytes()) {
                *dst = src;
            }
            return Err(GrdError::Magic(magic));
        }
        None => return Err(GrdError::Header(String::from("empty file"))),
    }

    let size_x: usize = field(&mut tokens, "size_x")?;
    let size_y: usize = field(&mut tokens, "size_y")?;
    let bounds = GeoBounds {
        lat_min: field(&mut tokens, "lat_min")?,
        lat_max: field(&mut tokens, "lat_max")?,
        lon_min: field(&mut tokens, "lon_min")?,
        lon_max: field(&mut tokens, "lon_max")?,
    };
    let extent = Extent {
        min: field(&mut tokens, "min")?,
        max: field(&mut tokens, "max")?,
    };

    let expected = size_x * size_y;
    let samples = tokens
        .map(|token| {
            token
                .parse::<f32>()
                .map_err(|e| GrdError::Header(format!("sample {token:?}, {e}")))
        })
        .collect::<Result<Vec<f32>, GrdError>>()?;
    if samples.len() != expected {
        return Err(GrdError::Length {
            expected,
            actual: samples.len(),
        });
    }

    Ok(GrdFile {
        bounds,
        grid: Grid::new(size_x, size_y, samples, extent),
    })
}

fn field<'a, T, I>(tokens: &mut I, name: &str) -> Result<T, GrdError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| GrdError::Header(format!("missing {name}")))?;
    token
        .parse()
        .map_err(|e| GrdError::Header(format!("{name} {token:?}, {e}")))
}

/// Returns the number of characters in the integer part of `sample`,
/// counting a leading minus sign.
fn integer_digits(sample: f32) -> usize {
    #[allow(clippy::cast_possible_truncation)]
    let mut number = sample as i64;
    if number == 0 {
        return 1;
    }
    let mut digits = usize::from(number < 0);
    while number != 0 {
        number /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::{integer_digits, read, write};
    use crate::{GeoBounds, GrdError, Grid};

    fn encode(grid: &Grid) -> String {
        let mut buf = Vec::new();
        write(&mut buf, &GeoBounds::default(), grid).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_integer_digits() {
        assert_eq!(integer_digits(0.0), 1);
        assert_eq!(integer_digits(-0.75), 1);
        assert_eq!(integer_digits(7.5), 1);
        assert_eq!(integer_digits(-7.5), 2);
        assert_eq!(integer_digits(50.0), 2);
        assert_eq!(integer_digits(-1234.0), 5);
    }

    #[test]
    fn test_header() {
        let grid = Grid::from_samples(2, 2, vec![-10.0, 50.0, 0.0, 1.0]);
        let bounds = GeoBounds {
            lat_min: 40.125,
            lat_max: 41.0,
            lon_min: -3.5,
            lon_max: 28.0,
        };
        let mut buf = Vec::new();
        write(&mut buf, &bounds, &grid).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let header: Vec<&str> = text.lines().take(5).collect();
        assert_eq!(
            header,
            [
                "DSAA",
                "2   2",
                "40.1250000   41.0000000",
                "-3.5000000   28.0000000",
                "-10.0000000  50.0000000",
            ]
        );
    }

    #[test]
    fn test_square_rows_end_with_blank_line() {
        let grid = Grid::from_samples(2, 2, vec![-10.0, 50.0, 0.5, 123.0]);
        let body: String = encode(&grid).lines().skip(5).collect::<Vec<_>>().join("\n");
        assert_eq!(
            body,
            "-10.0000000   50.0000000\n\n0.5000000     123.0000000\n"
        );
    }

    #[test]
    fn test_wraps_after_ten_values() {
        let grid = Grid::from_samples(12, 12, vec![1.0; 144]);
        let text = encode(&grid);
        let first_row = text.lines().nth(5).unwrap();
        assert_eq!(first_row.split_ascii_whitespace().count(), 10);
        // The remaining two samples of the row, then a blank line.
        assert_eq!(text.lines().nth(6).unwrap(), "1.0000000     1.0000000");
        assert_eq!(text.lines().nth(7).unwrap(), "");
    }

    #[test]
    fn test_non_square_breaks_on_both_dimensions() {
        // size_y = 2 forces a break after every second sample, even
        // in the middle of a size_x = 3 row.
        let grid = Grid::from_samples(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let body: Vec<String> = encode(&grid).lines().skip(5).map(String::from).collect();
        assert_eq!(
            body,
            [
                "1.0000000     2.0000000",
                "3.0000000",
                "",
                "4.0000000",
                "5.0000000     6.0000000",
                "",
            ]
        );
    }

    #[test]
    fn test_read_reproduces_header_and_samples() {
        let grid = Grid::from_samples(3, 2, vec![-1.25, 2.0, 3.5, 4.0, -5.75, 6.0]);
        let parsed = read(encode(&grid).as_bytes()).unwrap();
        assert_eq!(parsed.bounds, GeoBounds::default());
        assert_eq!(parsed.grid, grid);
    }

    #[test]
    fn test_read_rejects_short_body() {
        let text = "DSAA\n2 2\n0 1\n0 1\n0 1\n0.0 1.0 0.5\n";
        assert!(matches!(
            read(text.as_bytes()),
            Err(GrdError::Length {
                expected: 4,
                actual: 3
            })
        ));
    }
}
