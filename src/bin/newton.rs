extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate newton_fractal;
extern crate num;

use clap::{App, Arg, ArgMatches};
use num::Complex;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    parse_pair(s, ',').map(|(re, im)| Complex { re, im })
}

fn validate_complex(s: &str, err: &str) -> Result<(), String> {
    match parse_complex(s) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

const OUTPUT: &str = "output";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const DEFAULT_OUTPUT: &str = "fractal.png";

fn args<'a>() -> ArgMatches<'a> {
    App::new("newton")
        .version("0.1.0")
        .about("Newton fractal renderer for x^8 - 1")
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value(DEFAULT_OUTPUT)
                .help("Output file; .png, .pam or .pnm"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-1.0,-1.0")
                .validator(|s| validate_complex(&s, "Could not parse left lower corner"))
                .help("Left lower corner of the complex plane, as re,im"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1.0,1.0")
                .validator(|s| validate_complex(&s, "Could not parse right upper corner"))
                .help("Right upper corner of the complex plane, as re,im"),
        )
        .get_matches()
}

fn corner(matches: &ArgMatches, name: &str) -> Complex<f64> {
    match matches.value_of(name).and_then(parse_complex) {
        Some(point) => point,
        None => {
            eprintln!("Error parsing {} point", name);
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let matches = args();
    let leftlower = corner(&matches, LEFTLOWER);
    let rightupper = corner(&matches, RIGHTUPPER);
    let output = matches.value_of(OUTPUT).unwrap_or(DEFAULT_OUTPUT);

    info!("rendering {} .. {} to {}", leftlower, rightupper, output);
    let image = newton_fractal::generate_fractal(leftlower, rightupper);

    if let Err(e) = newton_fractal::write_image(output, &image) {
        error!("{}", e);
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
