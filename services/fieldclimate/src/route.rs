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

//! Routes of the FieldClimate API.
//!
//! One constructor per endpoint. Arguments go through [`crate::clean`]
//! first, so an invalid argument fails here and never reaches the network.
//!
//! - [API documentation](https://api.fieldclimate.com/v1/docs/)

use std::fmt::Display;

use http::Method;
use serde_json::Value;

use crate::clean::{self, Choice, Period, Station, Time};
use fieldclimate_core::Result;

/// A request to send: verb, path after the base url, optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// HTTP method.
    pub method: Method,
    /// Path after the base url, starting with `/`.
    pub path: String,
    /// JSON payload for POST and PUT.
    pub body: Option<Value>,
}

impl Route {
    /// Build a GET route.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }

    /// Build a POST route.
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: Some(body),
        }
    }

    /// Build a PUT route.
    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::PUT,
            path: path.into(),
            body: Some(body),
        }
    }

    /// Build a DELETE route.
    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            path: path.into(),
            body: None,
        }
    }
}

// User

/// Read user information.
pub fn get_user() -> Route {
    Route::get("/user")
}

/// Update user information.
pub fn put_user(data: Value) -> Route {
    Route::put("/user", data)
}

/// Delete user account.
pub fn delete_user() -> Route {
    Route::delete("/user")
}

/// Read list of stations of a user.
pub fn get_user_stations() -> Route {
    Route::get("/user/stations")
}

/// Read user licenses.
pub fn get_user_licenses() -> Route {
    Route::get("/user/licenses")
}

// System

/// System running correctly.
pub fn get_system_status() -> Route {
    Route::get("/system/status")
}

/// Supported sensors.
pub fn get_system_sensors() -> Route {
    Route::get("/system/sensors")
}

/// Supported sensor groups.
pub fn get_system_groups() -> Route {
    Route::get("/system/groups")
}

/// Sensors organized in groups.
pub fn get_system_group_sensors() -> Route {
    Route::get("/system/group/sensors")
}

/// Type of devices.
pub fn get_system_types() -> Route {
    Route::get("/system/types")
}

/// Countries for the languages.
pub fn get_system_countries() -> Route {
    Route::get("/system/countries")
}

/// Timezones.
pub fn get_system_timezones() -> Route {
    Route::get("/system/timezones")
}

/// Disease models.
pub fn get_system_diseases() -> Route {
    Route::get("/system/diseases")
}

// Station

/// Read station information.
pub fn get_station(station: impl Into<Station>) -> Route {
    Route::get(format!("/station/{}", clean::station(station)))
}

/// Update station information.
pub fn put_station(station: impl Into<Station>, data: Value) -> Route {
    Route::put(format!("/station/{}", clean::station(station)), data)
}

/// Get list of sensors of a station.
pub fn get_station_sensors(station: impl Into<Station>) -> Route {
    Route::get(format!("/station/{}/sensors", clean::station(station)))
}

/// Update station sensor name.
pub fn put_station_sensors(station: impl Into<Station>, data: Value) -> Route {
    Route::put(format!("/station/{}/sensors", clean::station(station)), data)
}

/// Get list of nodes (wireless devices) connected to a station.
pub fn get_station_nodes(station: impl Into<Station>) -> Route {
    Route::get(format!("/station/{}/nodes", clean::station(station)))
}

/// Update the name of a node itself.
pub fn put_station_nodes(station: impl Into<Station>, data: Value) -> Route {
    Route::put(format!("/station/{}/nodes", clean::station(station)), data)
}

/// List of serials (of a sensor) and their names.
pub fn get_station_serials(station: impl Into<Station>) -> Route {
    Route::get(format!("/station/{}/serials", clean::station(station)))
}

/// Update sensor with serial the name.
pub fn put_station_serials(station: impl Into<Station>, data: Value) -> Route {
    Route::put(format!("/station/{}/serials", clean::station(station)), data)
}

/// Add station to user account.
pub fn post_station_key(
    station: impl Into<Station>,
    station_key: impl Display,
    data: Value,
) -> Route {
    Route::post(
        format!("/station/{}/{station_key}", clean::station(station)),
        data,
    )
}

/// Remove station from user account.
pub fn delete_station_key(station: impl Into<Station>, station_key: impl Display) -> Route {
    Route::delete(format!("/station/{}/{station_key}", clean::station(station)))
}

/// Stations in close proximity of specified station.
pub fn get_stations_in_proximity(station: impl Into<Station>, radius: impl Display) -> Route {
    Route::get(format!(
        "/station/{}/proximity/{radius}",
        clean::station(station)
    ))
}

/// Last station events.
pub fn get_station_events_last(
    station: impl Into<Station>,
    amount: impl Display,
    sort: &str,
) -> Result<Route> {
    let sort = clean::sort(sort)?;
    Ok(Route::get(format!(
        "/station/{}/events/last/{amount}/{sort}",
        clean::station(station)
    )))
}

/// Station events from to.
pub fn get_station_events(
    station: impl Into<Station>,
    t_from: impl Into<Time>,
    t_to: impl Into<Time>,
    sort: &str,
) -> Result<Route> {
    let (t_from, t_to) = clean::time_range(t_from, t_to)?;
    let sort = clean::sort(sort)?;
    Ok(Route::get(format!(
        "/station/{}/events/from/{t_from}/to/{t_to}/{sort}",
        clean::station(station)
    )))
}

/// Last station communication history filter.
pub fn get_station_history_last(
    station: impl Into<Station>,
    filter: &str,
    amount: impl Display,
    sort: &str,
) -> Result<Route> {
    let filter = clean::filter(filter)?;
    let sort = clean::sort(sort)?;
    Ok(Route::get(format!(
        "/station/{}/history/{filter}/last/{amount}/{sort}",
        clean::station(station)
    )))
}

/// Station communication history from to filter.
pub fn get_station_history(
    station: impl Into<Station>,
    filter: &str,
    t_from: impl Into<Time>,
    t_to: impl Into<Time>,
    sort: &str,
) -> Result<Route> {
    let filter = clean::filter(filter)?;
    let (t_from, t_to) = clean::time_range(t_from, t_to)?;
    let sort = clean::sort(sort)?;
    Ok(Route::get(format!(
        "/station/{}/history/{filter}/from/{t_from}/to/{t_to}/{sort}",
        clean::station(station)
    )))
}

/// Station licenses for disease models or forecast.
pub fn get_station_licenses(station: impl Into<Station>) -> Route {
    Route::get(format!("/station/{}/licenses", clean::station(station)))
}

// Data

/// Min and Max date of data availability.
pub fn get_data_range(station: impl Into<Station>) -> Route {
    Route::get(format!("/data/{}", clean::station(station)))
}

fn data_last_path(
    format: &str,
    station: impl Into<Station>,
    data_group: impl Into<Choice>,
    time_period: impl Into<Period>,
) -> Result<String> {
    let format = clean::format(format)?;
    let data_group = clean::data_group(data_group)?;
    let time_period = clean::time_period(time_period)?;
    Ok(format!(
        "/data/{format}/{}/{data_group}/last/{time_period}",
        clean::station(station)
    ))
}

fn data_path(
    format: &str,
    station: impl Into<Station>,
    data_group: impl Into<Choice>,
    t_from: impl Into<Time>,
    t_to: impl Into<Time>,
) -> Result<String> {
    let format = clean::format(format)?;
    let (t_from, t_to) = clean::time_range(t_from, t_to)?;
    let data_group = clean::data_group(data_group)?;
    Ok(format!(
        "/data/{format}/{}/{data_group}/from/{t_from}/to/{t_to}",
        clean::station(station)
    ))
}

/// Reading last data.
pub fn get_data_last(
    format: &str,
    station: impl Into<Station>,
    data_group: impl Into<Choice>,
    time_period: impl Into<Period>,
) -> Result<Route> {
    data_last_path(format, station, data_group, time_period).map(Route::get)
}

/// Reading data of specific time period.
pub fn get_data(
    format: &str,
    station: impl Into<Station>,
    data_group: impl Into<Choice>,
    t_from: impl Into<Time>,
    t_to: impl Into<Time>,
) -> Result<Route> {
    data_path(format, station, data_group, t_from, t_to).map(Route::get)
}

/// Filtered/Customized reading of last data.
pub fn post_data_last(
    format: &str,
    station: impl Into<Station>,
    data_group: impl Into<Choice>,
    time_period: impl Into<Period>,
    data: Value,
) -> Result<Route> {
    let path = data_last_path(format, station, data_group, time_period)?;
    Ok(Route::post(path, data))
}

/// Filtered/Customized reading of specified time period.
pub fn post_data(
    format: &str,
    station: impl Into<Station>,
    data_group: impl Into<Choice>,
    t_from: impl Into<Time>,
    t_to: impl Into<Time>,
    data: Value,
) -> Result<Route> {
    let path = data_path(format, station, data_group, t_from, t_to)?;
    Ok(Route::post(path, data))
}

// Forecast

/// Forecast data package or image.
pub fn get_forecast(station: impl Into<Station>, forecast_option: impl Display) -> Route {
    Route::get(format!(
        "/forecast/{}/{forecast_option}",
        clean::station(station)
    ))
}

// Disease

fn disease_last_path(station: impl Into<Station>, time_period: impl Into<Period>) -> Result<String> {
    let time_period = clean::time_period(time_period)?;
    Ok(format!(
        "/disease/{}/last/{time_period}",
        clean::station(station)
    ))
}

fn disease_path(
    station: impl Into<Station>,
    t_from: impl Into<Time>,
    t_to: impl Into<Time>,
) -> Result<String> {
    let (t_from, t_to) = clean::time_range(t_from, t_to)?;
    Ok(format!(
        "/disease/{}/from/{t_from}/to/{t_to}",
        clean::station(station)
    ))
}

/// Get last Evapotranspiration.
pub fn get_disease_last(
    station: impl Into<Station>,
    time_period: impl Into<Period>,
) -> Result<Route> {
    disease_last_path(station, time_period).map(Route::get)
}

/// Get Evapotranspiration for specified period.
pub fn get_disease(
    station: impl Into<Station>,
    t_from: impl Into<Time>,
    t_to: impl Into<Time>,
) -> Result<Route> {
    disease_path(station, t_from, t_to).map(Route::get)
}

/// Get last specified disease model.
pub fn post_disease_last(
    station: impl Into<Station>,
    time_period: impl Into<Period>,
    data: Value,
) -> Result<Route> {
    let path = disease_last_path(station, time_period)?;
    Ok(Route::post(path, data))
}

/// Get specified disease model for period.
pub fn post_disease(
    station: impl Into<Station>,
    t_from: impl Into<Time>,
    t_to: impl Into<Time>,
    data: Value,
) -> Result<Route> {
    let path = disease_path(station, t_from, t_to)?;
    Ok(Route::post(path, data))
}

// Chart

fn chart_last_path(
    chart_type: impl Display,
    station: impl Into<Station>,
    data_group: impl Into<Choice>,
    time_period: impl Into<Period>,
) -> Result<String> {
    let data_group = clean::data_group(data_group)?;
    let time_period = clean::time_period(time_period)?;
    Ok(format!(
        "/chart/{chart_type}/{}/{data_group}/last/{time_period}",
        clean::station(station)
    ))
}

fn chart_path(
    chart_type: impl Display,
    station: impl Into<Station>,
    data_group: impl Into<Choice>,
    t_from: impl Into<Time>,
    t_to: impl Into<Time>,
) -> Result<String> {
    let (t_from, t_to) = clean::time_range(t_from, t_to)?;
    let data_group = clean::data_group(data_group)?;
    Ok(format!(
        "/chart/{chart_type}/{}/{data_group}/from/{t_from}/to/{t_to}",
        clean::station(station)
    ))
}

/// Charting last data.
pub fn get_chart_last(
    chart_type: impl Display,
    station: impl Into<Station>,
    data_group: impl Into<Choice>,
    time_period: impl Into<Period>,
) -> Result<Route> {
    chart_last_path(chart_type, station, data_group, time_period).map(Route::get)
}

/// Charting for period.
pub fn get_chart(
    chart_type: impl Display,
    station: impl Into<Station>,
    data_group: impl Into<Choice>,
    t_from: impl Into<Time>,
    t_to: impl Into<Time>,
) -> Result<Route> {
    chart_path(chart_type, station, data_group, t_from, t_to).map(Route::get)
}

/// Charting customized last data.
pub fn post_chart_last(
    chart_type: impl Display,
    station: impl Into<Station>,
    data_group: impl Into<Choice>,
    time_period: impl Into<Period>,
    data: Value,
) -> Result<Route> {
    let path = chart_last_path(chart_type, station, data_group, time_period)?;
    Ok(Route::post(path, data))
}

/// Charting customized for period.
pub fn post_chart(
    chart_type: impl Display,
    station: impl Into<Station>,
    data_group: impl Into<Choice>,
    t_from: impl Into<Time>,
    t_to: impl Into<Time>,
    data: Value,
) -> Result<Route> {
    let path = chart_path(chart_type, station, data_group, t_from, t_to)?;
    Ok(Route::post(path, data))
}

// Camera

/// Read camera photo information.
pub fn get_camera(station: impl Into<Station>) -> Route {
    Route::get(format!("/camera/{}/photos/info", clean::station(station)))
}

/// Last amount of pictures.
pub fn get_camera_photos_last(
    station: impl Into<Station>,
    amount: impl Display,
    camera: impl Display,
) -> Route {
    Route::get(format!(
        "/camera/{}/photos/last/{amount}/{camera}",
        clean::station(station)
    ))
}

/// Retrieve pictures for specified period.
pub fn get_camera_photos(
    station: impl Into<Station>,
    t_from: impl Into<Time>,
    t_to: impl Into<Time>,
    camera: impl Display,
) -> Result<Route> {
    let (t_from, t_to) = clean::time_range(t_from, t_to)?;
    Ok(Route::get(format!(
        "/camera/{}/photos/from/{t_from}/to/{t_to}/{camera}",
        clean::station(station)
    )))
}
