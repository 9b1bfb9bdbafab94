//! Console stages: crew listing, station position and passover time.
//!
//! The async entry points fetch and then hand the parsed response to the
//! `write_*` functions, which hold all of the formatting and conversion.

use crate::config::ReferenceLocation;
use crate::coord::Coordinate;
use crate::open_notify::{Astronauts, OpenNotifyClient, PassReport, PositionReport};
use crate::time::display_epoch_in;
use anyhow::{Context, Result};
use chrono::{Local, TimeZone};
use std::fmt::Display;
use std::io::Write;

/// Print everyone currently in space, then the head count.
pub async fn report_astronauts(client: &OpenNotifyClient, out: &mut impl Write) -> Result<()> {
    let astronauts = client
        .astronauts()
        .await
        .context("fetching astronauts")?;
    write_astronauts(&astronauts, out)
}

/// Print the station's position and return it as `(longitude, latitude)`.
pub async fn report_position(
    client: &OpenNotifyClient,
    out: &mut impl Write,
) -> Result<Coordinate> {
    let report = client
        .position()
        .await
        .context("fetching ISS position")?;
    write_position(&report, &Local, out)
}

/// Print and return the next time the station rises over `reference`.
pub async fn report_passover(
    client: &OpenNotifyClient,
    reference: &ReferenceLocation,
    out: &mut impl Write,
) -> Result<String> {
    let report = client
        .next_pass(reference.latitude, reference.longitude)
        .await
        .with_context(|| format!("fetching next pass over {}", reference.name))?;
    write_passover(&report, &reference.name, &Local, out)
}

pub fn write_astronauts(astronauts: &Astronauts, out: &mut impl Write) -> Result<()> {
    for person in &astronauts.people {
        writeln!(out, "{} is aboard the {}.", person.name, person.craft)?;
    }
    writeln!(
        out,
        "There are currently {} astronauts in space.",
        astronauts.number
    )?;
    Ok(())
}

pub fn write_position<Tz>(
    report: &PositionReport,
    tz: &Tz,
    out: &mut impl Write,
) -> Result<Coordinate>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let position = &report.iss_position;
    let latitude = position.latitude.as_f64().context("reading ISS latitude")?;
    let longitude = position.longitude.as_f64().context("reading ISS longitude")?;
    let coordinate = Coordinate::from_degrees(latitude, longitude)?;

    let when = display_epoch_in(tz, report.timestamp)?;
    writeln!(
        out,
        "{}: ISS is at latitude {} and longitude {}.",
        when, position.latitude, position.longitude
    )?;
    Ok(coordinate)
}

pub fn write_passover<Tz>(
    report: &PassReport,
    location_name: &str,
    tz: &Tz,
    out: &mut impl Write,
) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(risetime) = report.next_risetime() else {
        anyhow::bail!("no upcoming passes over {}", location_name);
    };
    let when = display_epoch_in(tz, risetime)?;
    writeln!(
        out,
        "{} is the next time ISS will be over {}.",
        when, location_name
    )?;
    Ok(when)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::open_notify::fetcher::{parse_astronauts, parse_pass, parse_position};
    use chrono::Utc;

    fn lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8(buf.to_vec())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn single_astronaut_output() {
        let astros =
            parse_astronauts(r#"{"people":[{"name":"Jane Doe","craft":"ISS"}],"number":1}"#)
                .unwrap();
        let mut out = Vec::new();
        write_astronauts(&astros, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Jane Doe is aboard the ISS.\nThere are currently 1 astronauts in space.\n"
        );
    }

    #[test]
    fn one_line_per_astronaut_plus_summary() {
        let body = r#"{"number": 3, "people": [
            {"name": "A", "craft": "ISS"},
            {"name": "B", "craft": "ISS"},
            {"name": "C", "craft": "Tiangong"}
        ]}"#;
        let astros = parse_astronauts(body).unwrap();
        let mut out = Vec::new();
        write_astronauts(&astros, &mut out).unwrap();
        let lines = lines(&out);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines.iter().filter(|l| l.contains(" is aboard the ")).count(), 3);
        assert_eq!(lines[2], "C is aboard the Tiangong.");
        assert_eq!(lines[3], "There are currently 3 astronauts in space.");
    }

    #[test]
    fn empty_crew_prints_summary_only() {
        let astros = parse_astronauts(r#"{"people": [], "number": 0}"#).unwrap();
        let mut out = Vec::new();
        write_astronauts(&astros, &mut out).unwrap();
        assert_eq!(lines(&out), vec!["There are currently 0 astronauts in space."]);
    }

    #[test]
    fn position_is_longitude_first() {
        let report = parse_position(
            r#"{"timestamp": 0, "iss_position": {"latitude": "10.0", "longitude": "20.0"}}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        let coord = write_position(&report, &Utc, &mut out).unwrap();
        assert_eq!(coord.lon_lat(), (20.0, 10.0));
        assert_eq!(
            lines(&out),
            vec!["Thu Jan  1 00:00:00 1970: ISS is at latitude 10.0 and longitude 20.0."]
        );
    }

    #[test]
    fn position_echoes_fields_as_received() {
        let report = parse_position(
            r#"{"timestamp": 1723555800, "iss_position": {"latitude": "-51.6140", "longitude": "-179.9999"}}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        let coord = write_position(&report, &Utc, &mut out).unwrap();
        assert_eq!(coord.longitude, -179.9999);
        assert_eq!(coord.latitude, -51.614);
        assert!(lines(&out)[0].ends_with("latitude -51.6140 and longitude -179.9999."));
    }

    #[test]
    fn position_out_of_range_fails() {
        let report = parse_position(
            r#"{"timestamp": 0, "iss_position": {"latitude": "95.0", "longitude": "0.0"}}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        assert!(write_position(&report, &Utc, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn passover_uses_first_risetime() {
        let report = parse_pass(
            r#"{"response": [{"risetime": 1723555800, "duration": 500}, {"risetime": 0, "duration": 1}]}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        let when = write_passover(&report, "Indianapolis, IN", &Utc, &mut out).unwrap();
        assert_eq!(when, display_epoch_in(&Utc, 1_723_555_800).unwrap());
        assert_eq!(when, "Tue Aug 13 13:30:00 2024");
        assert_eq!(
            lines(&out),
            vec!["Tue Aug 13 13:30:00 2024 is the next time ISS will be over Indianapolis, IN."]
        );
    }

    #[test]
    fn passover_without_passes_fails() {
        let report = parse_pass(r#"{"response": []}"#).unwrap();
        let mut out = Vec::new();
        let err = write_passover(&report, "Indianapolis, IN", &Utc, &mut out).unwrap_err();
        assert!(err.to_string().contains("Indianapolis"));
    }
}
