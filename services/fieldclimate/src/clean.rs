// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Clean functions validate route arguments and turn them into the exact
//! tokens the API server expects.
//!
//! Every function is pure. Invalid input fails with
//! [`ErrorKind::ArgumentInvalid`](fieldclimate_core::ErrorKind::ArgumentInvalid)
//! before anything is sent. Applying a clean function to its own output
//! returns the output unchanged.

use chrono::{FixedOffset, NaiveDateTime, TimeDelta, TimeZone, Utc};
use fieldclimate_core::{Error, Result};
use log::warn;
use serde_json::Value;

/// Data groups accepted by the server, in index order.
pub const DATA_GROUPS: &[&str] = &["raw", "hourly", "daily", "monthly"];

/// Sort orders accepted by the server.
pub const SORTS: &[&str] = &["asc", "desc"];

/// Station communication history filters accepted by the server.
pub const FILTERS: &[&str] = &[
    "unknown",
    "success",
    "resync",
    "registration",
    "no_data",
    "xml_error",
    "fw_update",
    "apn_update",
];

/// Data formats accepted by the server.
pub const FORMATS: &[&str] = &["normal", "optimized"];

const TIME_PERIOD_FORMAT: &str = "time_period must be one of: X, Xh, Xd, Xw, Xm";

/// A point in time accepted by [`time`].
#[derive(Debug, Clone, PartialEq)]
pub enum Time {
    /// Unix timestamp in seconds.
    Seconds(i64),
    /// Unix timestamp with a fractional part, truncated toward zero.
    Fractional(f64),
    /// Decimal unix timestamp, or an RFC 3339 datetime.
    Text(String),
    /// Datetime without offset, taken as UTC.
    Naive(NaiveDateTime),
    /// Datetime with an explicit offset.
    Aware(chrono::DateTime<FixedOffset>),
}

impl From<i64> for Time {
    fn from(v: i64) -> Self {
        Time::Seconds(v)
    }
}

impl From<i32> for Time {
    fn from(v: i32) -> Self {
        Time::Seconds(v.into())
    }
}

impl From<u32> for Time {
    fn from(v: u32) -> Self {
        Time::Seconds(v.into())
    }
}

impl From<f64> for Time {
    fn from(v: f64) -> Self {
        Time::Fractional(v)
    }
}

impl From<&str> for Time {
    fn from(v: &str) -> Self {
        Time::Text(v.to_string())
    }
}

impl From<String> for Time {
    fn from(v: String) -> Self {
        Time::Text(v)
    }
}

impl From<NaiveDateTime> for Time {
    fn from(v: NaiveDateTime) -> Self {
        Time::Naive(v)
    }
}

impl From<chrono::DateTime<FixedOffset>> for Time {
    fn from(v: chrono::DateTime<FixedOffset>) -> Self {
        Time::Aware(v)
    }
}

impl From<chrono::DateTime<Utc>> for Time {
    fn from(v: chrono::DateTime<Utc>) -> Self {
        Time::Aware(v.fixed_offset())
    }
}

impl Time {
    fn epoch_seconds(&self) -> Result<i64> {
        match self {
            Time::Seconds(v) => Ok(*v),
            Time::Fractional(v) => truncate("time", *v),
            Time::Text(s) => {
                if let Ok(v) = s.trim().parse::<i64>() {
                    return Ok(v);
                }
                chrono::DateTime::parse_from_rfc3339(s.trim())
                    .map(|t| epoch_seconds(&t))
                    .map_err(|e| {
                        Error::argument_invalid(format!(
                            "time argument must be a unix timestamp or an RFC 3339 datetime, got {s:?}"
                        ))
                        .with_source(e)
                    })
            }
            Time::Naive(t) => Ok(epoch_seconds(&t.and_utc())),
            Time::Aware(t) => Ok(epoch_seconds(t)),
        }
    }
}

/// Seconds since epoch, truncated toward zero.
fn epoch_seconds<Tz: TimeZone>(t: &chrono::DateTime<Tz>) -> i64 {
    let secs = t.timestamp();
    if secs < 0 && t.timestamp_subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}

fn truncate(param: &str, v: f64) -> Result<i64> {
    let v = v.trunc();
    // i64::MAX is not representable as f64; the bound is exclusive.
    if !v.is_finite() || v < i64::MIN as f64 || v >= i64::MAX as f64 {
        return Err(Error::argument_invalid(format!(
            "{param} argument must be a finite number, got {v}"
        )));
    }

    Ok(v as i64)
}

/// Convert every input into a unix timestamp string, order preserved.
///
/// Datetimes without offset are taken as UTC, never as local time. The first
/// invalid input fails the whole call.
///
/// ```
/// use fieldclimate_api::clean::{time, Time};
///
/// let t = time([Time::from(1538352000), Time::from("1538352000")]).unwrap();
/// assert_eq!(t, ["1538352000", "1538352000"]);
/// ```
pub fn time<I>(times: I) -> Result<Vec<String>>
where
    I: IntoIterator,
    I::Item: Into<Time>,
{
    times
        .into_iter()
        .map(|t| t.into().epoch_seconds().map(|v| v.to_string()))
        .collect()
}

/// Clean a `t_from`, `t_to` pair.
pub fn time_range(t_from: impl Into<Time>, t_to: impl Into<Time>) -> Result<(String, String)> {
    Ok((
        t_from.into().epoch_seconds()?.to_string(),
        t_to.into().epoch_seconds()?.to_string(),
    ))
}

/// A time span accepted by [`time_period`].
#[derive(Debug, Clone, PartialEq)]
pub enum Period {
    /// Whole seconds.
    Seconds(i64),
    /// Seconds with a fractional part, truncated toward zero.
    Fractional(f64),
    /// A span rounded up to the next whole second.
    Elapsed(TimeDelta),
    /// A server token: `X`, `Xh`, `Xd`, `Xw` or `Xm`.
    Token(String),
}

impl From<i64> for Period {
    fn from(v: i64) -> Self {
        Period::Seconds(v)
    }
}

impl From<i32> for Period {
    fn from(v: i32) -> Self {
        Period::Seconds(v.into())
    }
}

impl From<u32> for Period {
    fn from(v: u32) -> Self {
        Period::Seconds(v.into())
    }
}

impl From<f64> for Period {
    fn from(v: f64) -> Self {
        Period::Fractional(v)
    }
}

impl From<TimeDelta> for Period {
    fn from(v: TimeDelta) -> Self {
        Period::Elapsed(v)
    }
}

impl From<std::time::Duration> for Period {
    fn from(v: std::time::Duration) -> Self {
        match TimeDelta::from_std(v) {
            Ok(delta) => Period::Elapsed(delta),
            // Out of TimeDelta range; whole seconds are still exact.
            Err(_) => Period::Token(
                v.as_secs()
                    .saturating_add(u64::from(v.subsec_nanos() > 0))
                    .to_string(),
            ),
        }
    }
}

impl From<&str> for Period {
    fn from(v: &str) -> Self {
        Period::Token(v.to_string())
    }
}

impl From<String> for Period {
    fn from(v: String) -> Self {
        Period::Token(v)
    }
}

/// Turn a time span into the token the server expects.
///
/// Numbers and durations become bare seconds: durations round up, numbers
/// truncate. Strings must already be valid tokens and are returned as is;
/// `"4h"` is not converted into seconds.
pub fn time_period(period: impl Into<Period>) -> Result<String> {
    match period.into() {
        Period::Seconds(v) => Ok(v.to_string()),
        Period::Fractional(v) => Ok(truncate("time_period", v)?.to_string()),
        Period::Elapsed(d) => {
            let secs = d.num_seconds();
            // subsec_nanos carries the sign of the delta.
            let secs = if d.subsec_nanos() > 0 { secs + 1 } else { secs };
            Ok(secs.to_string())
        }
        Period::Token(s) => {
            let x: i64 = s
                .trim_end_matches(&['h', 'd', 'w', 'm'][..])
                .parse()
                .map_err(|e| Error::argument_invalid(TIME_PERIOD_FORMAT).with_source(e))?;

            let valid = ["h", "d", "w", "m", ""]
                .iter()
                .any(|unit| s == format!("{x}{unit}"));
            if !valid {
                return Err(Error::argument_invalid(TIME_PERIOD_FORMAT));
            }
            Ok(s)
        }
    }
}

/// A value for an enumerated parameter: either the name itself, or, for
/// [`data_group`], its index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// The literal value.
    Name(String),
    /// Index into the allowed list.
    Index(i64),
}

impl From<&str> for Choice {
    fn from(v: &str) -> Self {
        Choice::Name(v.to_string())
    }
}

impl From<String> for Choice {
    fn from(v: String) -> Self {
        Choice::Name(v)
    }
}

impl From<i64> for Choice {
    fn from(v: i64) -> Self {
        Choice::Index(v)
    }
}

impl From<i32> for Choice {
    fn from(v: i32) -> Self {
        Choice::Index(v.into())
    }
}

impl From<u32> for Choice {
    fn from(v: u32) -> Self {
        Choice::Index(v.into())
    }
}

/// Check that `value` is one of `allowed`.
///
/// The error message names `param` and lists the allowed values.
pub fn choice(param: &str, value: &str, allowed: &'static [&'static str]) -> Result<&'static str> {
    allowed
        .iter()
        .copied()
        .find(|v| *v == value)
        .ok_or_else(|| Error::argument_invalid(format!("{param} argument must be in {allowed:?}")))
}

/// Clean a data group.
///
/// The older numeric keys `0..=3`, as integers or strings, resolve to
/// `raw`, `hourly`, `daily` and `monthly`.
///
/// Negative indices such as `-1` are rejected; they do not count from the
/// end of the list.
pub fn data_group(group: impl Into<Choice>) -> Result<&'static str> {
    let group = group.into();
    let index = match &group {
        Choice::Index(i) => Some(*i),
        Choice::Name(s) => s.trim().parse::<i64>().ok(),
    };
    if let Some(v) = index
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| DATA_GROUPS.get(i))
    {
        return Ok(v);
    }

    match group {
        Choice::Name(s) => choice("data_group", &s, DATA_GROUPS),
        Choice::Index(i) => choice("data_group", &i.to_string(), DATA_GROUPS),
    }
}

/// Clean a sort order.
pub fn sort(sort: &str) -> Result<&'static str> {
    choice("sort", sort, SORTS)
}

/// Clean a station history filter.
pub fn filter(filter: &str) -> Result<&'static str> {
    choice("filter", filter, FILTERS)
}

/// Clean a data format.
pub fn format(format: &str) -> Result<&'static str> {
    choice("format", format, FORMATS)
}

/// A station, given either by its id or by a record as returned by
/// `get_user_stations`.
#[derive(Debug, Clone, PartialEq)]
pub enum Station {
    /// The station id, an 8 character serial code.
    Code(String),
    /// A station record, like `{"name": {"original": "01234567"}, ...}`.
    Record(Value),
}

impl From<&str> for Station {
    fn from(v: &str) -> Self {
        Station::Code(v.to_string())
    }
}

impl From<String> for Station {
    fn from(v: String) -> Self {
        Station::Code(v)
    }
}

impl From<&String> for Station {
    fn from(v: &String) -> Self {
        Station::Code(v.clone())
    }
}

impl From<Value> for Station {
    fn from(v: Value) -> Self {
        Station::Record(v)
    }
}

impl From<&Value> for Station {
    fn from(v: &Value) -> Self {
        Station::Record(v.clone())
    }
}

impl Station {
    fn original(&self) -> Option<String> {
        let Station::Record(record) = self else {
            return None;
        };

        match record.pointer("/name/original")? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// Extract the station id.
///
/// Records yield `name.original`. Anything else is passed through: codes as
/// is, unrecognized records as their JSON text (plain JSON strings unquoted).
pub fn station(station: impl Into<Station>) -> String {
    let station = station.into();
    if let Some(id) = station.original() {
        return id;
    }

    match station {
        Station::Code(code) => code,
        Station::Record(Value::String(code)) => code,
        Station::Record(record) => {
            warn!("station record has no name.original, passing it through: {record}");
            record.to_string()
        }
    }
}

/// Like [`station`], but fails on records without `name.original`.
pub fn station_strict(station: impl Into<Station>) -> Result<String> {
    let station = station.into();
    if let Some(id) = station.original() {
        return Ok(id);
    }

    match station {
        Station::Code(code) => Ok(code),
        Station::Record(Value::String(code)) => Ok(code),
        Station::Record(_) => Err(Error::argument_invalid(
            "station argument must be a station id or a record with name.original",
        )),
    }
}
